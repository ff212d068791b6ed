//! `jdoc` CLI — validate and reformat JSON documents from the command line.
//!
//! A thin wrapper: read the input into a string, hand it to `jdoc_core`,
//! print the result. All parsing behavior lives in the library.
//!
//! ## Usage
//!
//! ```sh
//! # Pretty-print (stdin → stdout)
//! echo '{"name":"Alice","age":30}' | jdoc pretty
//!
//! # Compact a file
//! jdoc compact -i data.json -o data.min.json
//!
//! # Validate only (exit code signals the result)
//! jdoc check -i data.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};
use std::process;

#[derive(Parser)]
#[command(name = "jdoc", version, about = "JSON document reader and reformatter")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pretty-print a JSON document with two-space indentation
    Pretty {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Re-emit a JSON document with all insignificant whitespace removed
    Compact {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Parse a document and report whether it is valid JSON
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Pretty { input, output } => {
            let text = read_input(input.as_deref())?;
            let doc = jdoc_core::parse(&text).context("failed to parse JSON input")?;
            write_output(output.as_deref(), &jdoc_core::pretty(&doc))?;
        }
        Commands::Compact { input, output } => {
            let text = read_input(input.as_deref())?;
            let doc = jdoc_core::parse(&text).context("failed to parse JSON input")?;
            write_output(output.as_deref(), &doc.to_string())?;
        }
        Commands::Check { input } => {
            let text = read_input(input.as_deref())?;
            match jdoc_core::parse(&text) {
                Ok(_) => println!("OK"),
                Err(err) => {
                    eprintln!("invalid JSON: {err}");
                    process::exit(1);
                }
            }
        }
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("failed to read file: {path}"))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("failed to write file: {path}"))?;
        }
        None => {
            println!("{content}");
        }
    }
    Ok(())
}
