use anyhow::{Context, Result};
use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use termcloud::source::load_documents;
use termcloud::ScoreConfig;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "termcloud-server", about = "Serve word clouds over HTTP")]
struct Args {
    /// Corpus scored at startup (.json, .jsonl, or a directory of them)
    #[arg(long, env = "TERMCLOUD_DOCUMENTS", default_value = "./wordcloud/index.json")]
    documents: PathBuf,
    #[arg(long, env = "TERMCLOUD_HOST", default_value = "0.0.0.0")]
    host: IpAddr,
    #[arg(long, env = "TERMCLOUD_PORT", default_value_t = 8080)]
    port: u16,
    /// Default scoring for the startup corpus and for requests without a config
    #[command(flatten)]
    scoring: ScoringArgs,
}

#[derive(clap::Args)]
struct ScoringArgs {
    #[arg(long, env = "TERMCLOUD_TOP_K", default_value_t = 100)]
    top_k: usize,
    #[arg(long, env = "TERMCLOUD_MIN_SIZE", default_value_t = 14.0)]
    min_size: f64,
    #[arg(long, env = "TERMCLOUD_MAX_SIZE", default_value_t = 60.0)]
    max_size: f64,
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

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let docs = load_documents(&args.documents)
        .with_context(|| format!("loading corpus from {}", args.documents.display()))?;
    let app = termcloud_server::build_app(docs, args.scoring.into())?;

    let listener = TcpListener::bind(SocketAddr::new(args.host, args.port)).await?;
    tracing::info!(addr = %listener.local_addr()?, "serving word cloud");
    axum::serve(listener, app).await.context("server exited")
}
