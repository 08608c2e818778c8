use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::from_str;
use spore::endpoint::DEFAULT_BASE_URL;
use std::io;
use std::path::Path;
use std::time::Duration;
use tokio::fs;

#[derive(Deserialize, Debug, Default)]
struct ConfigFile {
    base_url: Option<String>,
    proxy: Option<String>,
    timeout_secs: Option<u64>,
    user_agent: Option<String>,
}

#[derive(Debug)]
pub struct Config {
    pub base_url: String,
    pub proxy: Option<String>,
    pub timeout: Duration,
    pub user_agent: Option<String>,
}

impl From<ConfigFile> for Config {
    fn from(config: ConfigFile) -> Self {
        Self {
            base_url: config.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.into()),
            proxy: config.proxy,
            timeout: Duration::from_secs(config.timeout_secs.unwrap_or(30)),
            user_agent: config.user_agent,
        }
    }
}

/// A missing file means defaults; anything else wrong with it is an error.
pub async fn read_config(path: &Path) -> Result<Config> {
    let config: ConfigFile = match fs::read_to_string(path).await {
        Ok(s) => from_str(&s).with_context(|| format!("parsing {}", path.display()))?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("no config at {}", path.display());
            ConfigFile::default()
        }
        Err(e) => return Err(e).with_context(|| format!("reading {}", path.display())),
    };
    Ok(config.into())
}
