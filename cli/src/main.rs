use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use termcloud::source::load_documents;
use termcloud::tokenizer::tokenize_with_min_len;
use termcloud::{score, ScoreConfig};
use tracing_subscriber::{fmt, EnvFilter};

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "termcloud")]
#[command(about = "Rank the salient terms of a document corpus for a word cloud", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a corpus and write the ranked, sized terms as JSON
    Score {
        /// Input path (.json, .jsonl, or a directory of them)
        #[arg(long)]
        input: PathBuf,
        /// Output file; stdout when omitted
        #[arg(long)]
        output: Option<PathBuf>,
        /// Pretty-print the JSON output
        #[arg(long, default_value_t = false)]
        pretty: bool,
        #[command(flatten)]
        scoring: ScoringArgs,
    },
    /// Print the tokens that survive filtering, one per line
    Tokenize {
        /// Text to tokenize
        #[arg(long)]
        text: String,
        #[arg(long, env = "TERMCLOUD_MIN_TERM_LENGTH", default_value_t = 3)]
        min_term_length: usize,
    },
}

#[derive(Args)]
struct ScoringArgs {
    /// Number of terms to keep
    #[arg(long, env = "TERMCLOUD_TOP_K", default_value_t = 100)]
    top_k: usize,
    /// Display size of the lowest-ranked term
    #[arg(long, env = "TERMCLOUD_MIN_SIZE", default_value_t = 14.0)]
    min_size: f64,
    /// Display size of the highest-ranked term
    #[arg(long, env = "TERMCLOUD_MAX_SIZE", default_value_t = 60.0)]
    max_size: f64,
    /// Shortest token kept
    #[arg(long, env = "TERMCLOUD_MIN_TERM_LENGTH", default_value_t = 3)]
    min_term_length: usize,
}

impl From<ScoringArgs> for ScoreConfig {
    fn from(a: ScoringArgs) -> Self {
        ScoreConfig::default()
            .with_top_k(a.top_k)
            .with_output_range(a.min_size, a.max_size)
            .with_min_term_length(a.min_term_length)
    }
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Score { input, output, pretty, scoring } => run_score(input, output, pretty, scoring.into()),
        Commands::Tokenize { text, min_term_length } => {
            let mut out = io::stdout().lock();
            for token in tokenize_with_min_len(&text, min_term_length) {
                writeln!(out, "{token}")?;
            }
            Ok(())
        }
    }
}

fn run_score(input: PathBuf, output: Option<PathBuf>, pretty: bool, config: ScoreConfig) -> Result<()> {
    let docs = load_documents(&input).with_context(|| format!("loading corpus from {}", input.display()))?;
    tracing::info!(num_docs = docs.len(), input = %input.display(), "loaded corpus");

    let words = score(&docs, &config)?;
    let json = if pretty { serde_json::to_string_pretty(&words)? } else { serde_json::to_string(&words)? };

    match output {
        Some(path) => {
            fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(terms = words.len(), output = %path.display(), "word cloud written");
        }
        None => println!("{json}"),
    }
    Ok(())
}
