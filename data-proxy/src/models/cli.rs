use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Port to listen on (falls back to 3001 when missing or not a port number)
    #[arg(long, env = "PORT")]
    pub port: Option<String>,

    /// Interface to bind
    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    /// Base URL of the contributions provider
    #[arg(long, env = "PROVIDER_URL")]
    pub provider_url: Option<String>,

    /// Serve the built web frontend from this directory
    #[arg(long, env = "STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    /// TOML file with defaults for any of the options above
    #[arg(long, env = "WRAPPED_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    pub verbose: bool,
}
