//! `untag` CLI — convert type-tagged attribute JSON into plain JSON.
//!
//! ## Usage
//!
//! ```sh
//! # Transform ./input.json and print the result
//! untag
//!
//! # Transform a specific file
//! untag export.json
//!
//! # Read from stdin, pretty-print to a file
//! cat export.json | untag - --pretty -o plain.json
//!
//! # Only accept single-discriminator nodes
//! untag --strict export.json
//!
//! # Show what was dropped (debug logs on stderr)
//! untag -v export.json
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;
use untag_core::TransformOptions;

#[derive(Parser)]
#[command(
    name = "untag",
    version,
    about = "Convert type-tagged attribute JSON into plain JSON"
)]
struct Cli {
    /// Input JSON file ("-" reads stdin)
    #[arg(default_value = "input.json")]
    input: String,

    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,

    /// Pretty-print the output
    #[arg(long)]
    pretty: bool,

    /// Only accept nodes holding exactly one discriminator
    #[arg(long)]
    strict: bool,

    /// Log dropped values to stderr (honours RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let opts = TransformOptions {
        dispatch: if cli.strict {
            untag_core::Dispatch::Strict
        } else {
            untag_core::Dispatch::FirstMatch
        },
        pretty: cli.pretty,
    };

    let json = read_input(&cli.input)?;
    let plain = untag_core::transform_with(&json, &opts)
        .with_context(|| format!("Failed to transform {}", display_name(&cli.input)))?;
    tracing::debug!(input_bytes = json.len(), output_bytes = plain.len(), "transformed document");

    write_output(cli.output.as_deref(), &plain)
}

/// Logs go to stderr so stdout only ever carries the document.
///
/// - default: `warn`
/// - `--verbose`: `RUST_LOG` if set, otherwise `debug`
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("warn")
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .try_init();
}

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read from stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, format!("{content}\n"))
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}

fn display_name(path: &str) -> &str {
    if path == "-" {
        "stdin"
    } else {
        path
    }
}
