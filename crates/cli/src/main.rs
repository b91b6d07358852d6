use clap::Parser;
use std::net::SocketAddr;

use server::Config;

#[derive(Parser)]
#[command(name = "cinechive")]
#[command(about = "CineChive media aggregation server", long_about = None)]
struct Cli {
    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Database file path
    #[arg(short, long, default_value = "cinechive.db")]
    database: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port).parse()?;
    let database_url = format!("sqlite:{}?mode=rwc", cli.database);

    // TMDB_API_KEY comes from the environment; without it the TMDB-backed
    // features degrade to empty results instead of refusing to start.
    let config = Config::from_env(database_url);
    if config.tmdb_api_key.is_none() {
        tracing::warn!("TMDB_API_KEY is not set; TMDB-backed feeds and search will be empty");
    }

    server::run_server(addr, config).await
}
