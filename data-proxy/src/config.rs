use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::models::Cli;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PROVIDER_URL: &str = "https://github-contributions-api.jogruber.de/v4";

/// Optional TOML config file. Every key may be omitted.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub port: Option<u16>,
    pub host: Option<String>,
    pub provider_url: Option<String>,
    pub static_dir: Option<PathBuf>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}

/// Resolved server settings: command line and environment first, then the
/// config file, then built-in defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub addr: SocketAddr,
    pub provider_url: String,
    pub static_dir: Option<PathBuf>,
    pub verbose: bool,
}

impl Config {
    pub fn resolve(cli: Cli) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };

        let port = match cli.port.as_deref() {
            Some(raw) => parse_port(raw).unwrap_or_else(|| {
                warn!("Ignoring invalid port {:?}, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => file.port.filter(|&port| port != 0).unwrap_or(DEFAULT_PORT),
        };

        let host = cli
            .host
            .or(file.host)
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let ip: IpAddr = host
            .trim()
            .parse()
            .with_context(|| format!("Invalid host address: {}", host))?;

        let provider_url = cli
            .provider_url
            .or(file.provider_url)
            .unwrap_or_else(|| DEFAULT_PROVIDER_URL.to_string());

        Ok(Self {
            addr: SocketAddr::new(ip, port),
            provider_url,
            static_dir: cli.static_dir.or(file.static_dir),
            verbose: cli.verbose,
        })
    }
}

fn parse_port(raw: &str) -> Option<u16> {
    raw.trim().parse::<u16>().ok().filter(|&port| port != 0)
}
