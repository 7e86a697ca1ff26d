//! Monkey token dumper
//!
//! Usage: monkey-lex [OPTIONS] [INPUT]

use anyhow::{Context, Result};
use clap::{Parser as ClapParser, ValueEnum};
use monkey_lexer::common::DiagnosticReporter;
use monkey_lexer::driver::{DumpConfig, DumpFormat, TokenDump};
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

/// Output layout
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Default)]
enum Format {
    /// One token per line
    #[default]
    Lines,
    /// All literals on one line
    Inline,
}

#[derive(ClapParser, Debug)]
#[command(name = "monkey-lex")]
#[command(version)]
#[command(about = "Print the token stream of a Monkey source file", long_about = None)]
struct Args {
    /// Input source file (reads stdin when omitted or `-`)
    input: Option<PathBuf>,

    /// Output layout
    #[arg(short, long, value_enum, default_value = "lines")]
    format: Format,

    /// Show the byte span of every token
    #[arg(short, long)]
    spans: bool,

    /// Fail when the source contains illegal characters
    #[arg(long)]
    deny_illegal: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("error: {:#}", e);
            process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn read_source(input: Option<&PathBuf>) -> Result<(String, String)> {
    match input {
        Some(path) if path.as_os_str() != "-" => {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Ok((path.display().to_string(), source))
        }
        _ => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("failed to read stdin")?;
            Ok(("<stdin>".to_string(), source))
        }
    }
}

/// Returns `false` when illegal characters were denied
fn run(args: &Args) -> Result<bool> {
    let (filename, source) = read_source(args.input.as_ref())?;
    tracing::debug!(file = %filename, bytes = source.len(), "scanning");

    let config = DumpConfig {
        format: match args.format {
            Format::Lines => DumpFormat::Lines,
            Format::Inline => DumpFormat::Inline,
        },
        show_spans: args.spans,
        deny_illegal: args.deny_illegal,
    };

    let dump = TokenDump::new(&source);
    print!("{}", dump.render(&config));

    let mut reporter = DiagnosticReporter::new();
    let file_id = reporter.add_file(&filename, &source);
    for error in dump.errors() {
        if config.deny_illegal {
            reporter.report_error(file_id, &error);
        } else {
            reporter.report_warning(file_id, &error);
        }
    }

    if let Err(e) = dump.check(&config) {
        tracing::debug!("{}", e);
        return Ok(false);
    }
    Ok(true)
}
