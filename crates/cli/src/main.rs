mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "song-library")]
#[command(version, about = "Song catalog service with lyric verse pagination", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run migrations and start the HTTP API
    Serve {
        #[arg(short, long, env = "SONG_LIBRARY_PORT", default_value = "8080")]
        port: u16,
        #[arg(short = 'H', long, env = "SONG_LIBRARY_HOST", default_value = "127.0.0.1")]
        host: String,
    },
    /// Create the songs table if it does not exist
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {},
        Err(e) => tracing::warn!(error = %e, "failed to load .env"),
    }

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(port, host).await?,
        Commands::Migrate => commands::migrate::run().await?,
    }

    Ok(())
}
