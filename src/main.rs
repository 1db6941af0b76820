//! Pokedex CLI - An interactive Pokedex backed by PokeAPI
//!
//! Reads commands from stdin and prints results to stdout. Logs go to
//! stderr and are quiet unless `RUST_LOG` asks for more.

use std::io;

use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::{ApiClient, Config, Repl};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Build the API client, which starts the cache reaper
/// 4. Run the REPL on stdin until `exit` or end of input
/// 5. Stop the cache reaper
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so logs stay out of the REPL; override with RUST_LOG
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        base_url = %config.base_url,
        reap_interval_secs = config.cache_reap_interval,
        timeout_secs = config.request_timeout,
        "configuration loaded"
    );

    let client = ApiClient::new(&config)?;
    let mut repl = Repl::new(client, io::stdout());

    repl.run(BufReader::new(tokio::io::stdin())).await?;

    repl.client().shutdown();
    info!("pokedex closed");
    Ok(())
}
