//! Command-line client printing the tokens of a toy script
//!
//! Usage:
//!   toy-tokens [path] [--format text|json] [--show-plain] [--keep-comments] [-v]

use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use toyscript::{TokenValue, Tokenizer, TokenizerOptions};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// One `<kind> token: <value>` line per token
    Text,
    /// A JSON array of `{kind, value}` objects
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "toy-tokens", version, about = "Print the tokens of a toy script")]
struct Cli {
    /// Script to tokenize
    #[arg(default_value = "script/sample.toy")]
    path: PathBuf,

    /// Output format
    #[arg(long, short, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Print the comment-stripped source before the tokens
    #[arg(long)]
    show_plain: bool,

    /// Tokenize comments instead of removing them
    #[arg(long)]
    keep_comments: bool,

    /// Reject scripts larger than this many bytes
    #[arg(long)]
    max_bytes: Option<usize>,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = TokenizerOptions {
        strip_comments: !cli.keep_comments,
        max_source_bytes: cli.max_bytes,
    };
    let tokens = Tokenizer::from_path_with_options(&cli.path, &options)
        .with_context(|| format!("failed to load {}", cli.path.display()))?;

    if cli.show_plain {
        println!("{}", tokens.plain());
    }

    match cli.format {
        Format::Text => {
            for token in &tokens {
                match token.value() {
                    TokenValue::Number(n) => println!("number token: {}", n),
                    TokenValue::String(s) => println!("string token: {}", s),
                    TokenValue::Tag(t) => println!("tag token: {}", t),
                }
            }
        }
        Format::Json => {
            let values: Vec<TokenValue> = tokens.iter().map(|t| t.value()).collect();
            println!("{}", serde_json::to_string_pretty(&values)?);
        }
    }

    if let Some(reason) = tokens.error_reason() {
        eprintln!("error: {}", reason);
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
