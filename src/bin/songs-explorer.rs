use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use songs_explorer::config::{DEFAULT_DEEZER_BASE_URL, DEFAULT_DISCOGS_BASE_URL};
use songs_explorer::{Config, SearchParams, SongsExplorer};
use tracing::warn;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "songs-explorer")]
#[command(about = "Query Deezer tracks enriched with Discogs artist biographies", long_about = None)]
struct Cli {
    /// Discogs personal access token (can also be set via DISCOGS_TOKEN env var)
    #[arg(long, env = "DISCOGS_TOKEN", default_value = "", hide_env_values = true)]
    discogs_token: String,

    /// Deezer API base URL
    #[arg(long, env = "DEEZER_BASE_URL", default_value = DEFAULT_DEEZER_BASE_URL)]
    deezer_url: String,

    /// Discogs API base URL
    #[arg(long, env = "DISCOGS_BASE_URL", default_value = DEFAULT_DISCOGS_BASE_URL)]
    discogs_url: String,

    /// Per-request timeout in seconds
    #[arg(long, env = "SONGS_EXPLORER_TIMEOUT", default_value_t = 10)]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the welcome message
    Welcome,
    /// Search for tracks
    Search {
        /// Search query
        query: String,

        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<u32>,

        /// Index of the first result
        #[arg(short, long)]
        offset: Option<u32>,
    },
    /// Show a track with its artist biography
    Track {
        /// Deezer track ID
        track_id: String,
    },
}

impl Cli {
    fn config(&self) -> Config {
        Config::new(self.discogs_token.as_str())
            .with_deezer_base_url(self.deezer_url.as_str())
            .with_discogs_base_url(self.discogs_url.as_str())
            .with_request_timeout(Duration::from_secs(self.timeout))
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // .env values feed the clap env fallbacks below
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr, stdout is reserved for JSON
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("songs_explorer=info")),
        )
        .init();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let explorer = SongsExplorer::from_config(&cli.config())?;

    let output = match &cli.command {
        Commands::Welcome => serde_json::to_string_pretty(explorer.welcome())?,
        Commands::Search {
            query,
            limit,
            offset,
        } => {
            let params = SearchParams::from_options(*limit, *offset);
            let page = explorer.search_tracks(query, params).await?;
            serde_json::to_string_pretty(&page)?
        }
        Commands::Track { track_id } => {
            if cli.discogs_token.is_empty() {
                warn!("No Discogs token configured, biographies will be unavailable");
            }
            let detail = explorer.get_track_details(track_id).await?;
            serde_json::to_string_pretty(&detail)?
        }
    };

    println!("{}", output);
    Ok(())
}
