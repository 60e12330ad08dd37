use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub provider_base_url: String,
    pub http_timeout_secs: u64,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider_base_url: "https://query1.finance.yahoo.com".to_string(),
            http_timeout_secs: 30,
            user_agent: format!("tickercheck/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

pub fn load_config() -> Result<Config> {
    let mut config = Config::default();

    // Override defaults with environment variables
    if let Ok(base_url) = env::var("TICKERCHECK_BASE_URL") {
        config.provider_base_url = base_url;
    }

    if let Ok(timeout) = env::var("TICKERCHECK_HTTP_TIMEOUT_SECS") {
        config.http_timeout_secs = timeout.parse().map_err(|_| {
            anyhow::anyhow!("TICKERCHECK_HTTP_TIMEOUT_SECS must be an integer, got '{timeout}'")
        })?;
    }

    if let Ok(user_agent) = env::var("TICKERCHECK_USER_AGENT") {
        config.user_agent = user_agent;
    }

    info!(
        "Configuration loaded (base_url: {}, timeout: {}s)",
        config.provider_base_url, config.http_timeout_secs
    );

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_yahoo() {
        let config = Config::default();
        assert_eq!(config.provider_base_url, "https://query1.finance.yahoo.com");
        assert_eq!(config.http_timeout_secs, 30);
    }
}
