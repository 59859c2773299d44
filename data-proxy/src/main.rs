use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use data_proxy::external::ContributionsClient;
use data_proxy::{router, AppState, Cli, Config};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::resolve(cli)?;

    let provider = ContributionsClient::new(config.provider_url.clone())
        .context("Failed to create contributions client")?;
    let app = router(AppState::new(provider), config.static_dir.as_deref());

    info!("Using contributions provider {}", config.provider_url);
    if let Some(dir) = &config.static_dir {
        info!("Serving web frontend from {:?}", dir);
    }

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.addr))?;
    info!("Server listening on http://{}", config.addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
