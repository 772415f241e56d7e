//! # readprep CLI
//!
//! Command-line front end for the chunker. Reads article text from a file
//! or stdin and prints either the chunks or a stats summary.
//!
//! ```bash
//! readprep split article.txt
//! readprep split article.txt --json
//! pbpaste | readprep stats
//! ```

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use readprep::chunk;
use readprep::models::ArticleReport;
use readprep::stats;

/// readprep — regroup article text into learning-sized chunks.
#[derive(Parser)]
#[command(
    name = "readprep",
    about = "Regroup article text into learning-sized chunks (50-150 tokens)",
    version,
    long_about = "readprep splits article text into natural paragraphs and greedily merges \
    them into chunks of roughly 50-150 whitespace tokens, the size used by the reading-practice \
    pipeline for per-chunk translation, simplified restatement, and comprehension questions."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Chunk an article and print the chunks.
    ///
    /// Reads from FILE, or from stdin when no file is given. Each chunk is
    /// printed with its 1-based index and token count. `--json` emits a
    /// machine-readable report instead.
    Split {
        /// Path to a UTF-8 text file. Omit to read from stdin.
        input: Option<PathBuf>,

        /// Emit the chunk report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print counts and per-chunk sizes for an article.
    ///
    /// Shows characters, display words, whitespace tokens, natural
    /// paragraphs, and the chunks the article would split into.
    Stats {
        /// Path to a UTF-8 text file. Omit to read from stdin.
        input: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Split { input, json } => {
            let text = read_input(input.as_deref())?;
            run_split(&text, json)?;
        }
        Commands::Stats { input } => {
            let text = read_input(input.as_deref())?;
            stats::run_stats(&text);
        }
    }

    Ok(())
}

/// Read article text from a file, or from stdin when no path is given.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            if atty::is(atty::Stream::Stdin) {
                eprintln!("reading article text from stdin (Ctrl-D to finish)...");
            }
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Print chunks as text, or as a JSON report with `--json`.
fn run_split(text: &str, json: bool) -> Result<()> {
    let paragraph_count = chunk::split_paragraphs(text).len();
    let chunks = chunk::make_chunks(text);

    if json {
        let report = ArticleReport {
            paragraph_count,
            chunk_count: chunks.len(),
            chunks,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for c in &chunks {
        println!("--- Chunk {} ({} tokens) ---", c.index, c.word_count);
        println!("{}", c.text);
        println!();
    }

    Ok(())
}
