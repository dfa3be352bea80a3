mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads the YAML config (if any) and layers environment variables on top.
///
/// An explicit `CONFIG_PATH` must point at a readable file. Without it,
/// `config.yaml` is used when present and built-in defaults otherwise.
pub async fn load() -> Result<Config> {
    let config = match env::var("CONFIG_PATH") {
        Ok(path) => load_file(&path).await?,
        Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => load_file(DEFAULT_CONFIG_PATH).await?,
        Err(_) => {
            debug!("No configuration file found, using defaults");
            Config::default()
        }
    };

    apply_env_overrides(config, |key| env::var(key).ok())
}

pub async fn load_file(path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", path);

    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

/// Applies `OPENAI_*`, `HOST` and `PORT` overrides using `lookup` to read variables.
pub fn apply_env_overrides<F>(mut config: Config, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(api_key) = lookup("OPENAI_API_KEY") {
        config.llm.api_key = api_key;
    }
    if let Some(base_url) = lookup("OPENAI_BASE_URL") {
        config.llm.base_url = base_url;
    }
    if let Some(model) = lookup("OPENAI_RESPONSES_MODEL") {
        config.llm.model = model;
    }
    if let Some(host) = lookup("HOST") {
        config.server.host = host;
    }
    if let Some(port) = lookup("PORT") {
        config.server.port = port
            .parse()
            .map_err(|_| Error::config(format!("Invalid PORT value: '{}'", port)))?;
    }

    Ok(config)
}
