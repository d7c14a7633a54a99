use std::{net::SocketAddr, path::PathBuf, time::Duration};

use anyhow::Context;
use tickerbridge_market_data::AlpacaConfig;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub plugin_manifest: PathBuf,
    pub log_format: String,
    pub alpaca: AlpacaConfig,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup (environment, test fixtures).
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr: SocketAddr = lookup("TB_LISTEN_ADDR")
            .unwrap_or_else(|| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid TB_LISTEN_ADDR")?;
        let cors_allow = lookup("TB_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let request_timeout = millis(lookup("TB_REQUEST_TIMEOUT_MS"), 30_000);
        let upstream_timeout = millis(lookup("TB_UPSTREAM_TIMEOUT_MS"), 30_000);
        let plugin_manifest = lookup("TB_PLUGIN_MANIFEST")
            .unwrap_or_else(|| "ai-plugin.json".into())
            .into();
        let log_format = lookup("TB_LOG_FORMAT").unwrap_or_else(|| "text".to_string());

        let key_id = required(&lookup, "ALPACA_API_KEY")?;
        let secret_key = required(&lookup, "ALPACA_API_SECRET")?;
        let mut alpaca = AlpacaConfig::new(key_id, secret_key)
            .with_stock_feed(lookup("ALPACA_STOCK_FEED").filter(|v| !v.trim().is_empty()))
            .with_timeout(upstream_timeout);
        if let Some(url) = lookup("ALPACA_DATA_URL").filter(|v| !v.trim().is_empty()) {
            alpaca = alpaca.with_base_url(url.trim().trim_end_matches('/'));
        }

        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout,
            plugin_manifest,
            log_format,
            alpaca,
        })
    }
}

fn required<F>(lookup: &F, key: &str) -> anyhow::Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .with_context(|| format!("{} must be set", key))
}

fn millis(value: Option<String>, default: u64) -> Duration {
    Duration::from_millis(value.and_then(|v| v.parse().ok()).unwrap_or(default))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_with_credentials_only() {
        let config = Config::from_lookup(lookup_from(&[
            ("ALPACA_API_KEY", "key"),
            ("ALPACA_API_SECRET", "secret"),
        ]))
        .unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.cors_allow, vec!["*".to_string()]);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.plugin_manifest, PathBuf::from("ai-plugin.json"));
        assert_eq!(config.log_format, "text");
        assert_eq!(config.alpaca.key_id, "key");
        assert_eq!(config.alpaca.base_url, "https://data.alpaca.markets");
        assert_eq!(config.alpaca.stock_feed, None);
        assert_eq!(config.alpaca.timeout, Duration::from_secs(30));
    }

    #[test]
    fn overrides_are_applied() {
        let config = Config::from_lookup(lookup_from(&[
            ("ALPACA_API_KEY", "key"),
            ("ALPACA_API_SECRET", "secret"),
            ("ALPACA_DATA_URL", "http://localhost:9000/"),
            ("ALPACA_STOCK_FEED", "iex"),
            ("TB_LISTEN_ADDR", "127.0.0.1:3000"),
            ("TB_CORS_ALLOW_ORIGINS", "https://chat.openai.com, https://example.com,"),
            ("TB_REQUEST_TIMEOUT_MS", "1500"),
            ("TB_UPSTREAM_TIMEOUT_MS", "not-a-number"),
            ("TB_PLUGIN_MANIFEST", "/etc/tickerbridge/ai-plugin.json"),
            ("TB_LOG_FORMAT", "json"),
        ]))
        .unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(
            config.cors_allow,
            vec![
                "https://chat.openai.com".to_string(),
                "https://example.com".to_string()
            ]
        );
        assert_eq!(config.request_timeout, Duration::from_millis(1500));
        assert_eq!(config.alpaca.timeout, Duration::from_secs(30));
        assert_eq!(config.alpaca.base_url, "http://localhost:9000");
        assert_eq!(config.alpaca.stock_feed.as_deref(), Some("iex"));
        assert_eq!(
            config.plugin_manifest,
            PathBuf::from("/etc/tickerbridge/ai-plugin.json")
        );
        assert_eq!(config.log_format, "json");
    }

    #[test]
    fn missing_credentials_fail() {
        let err = Config::from_lookup(lookup_from(&[("ALPACA_API_KEY", "key")]))
            .err()
            .unwrap();
        assert!(err.to_string().contains("ALPACA_API_SECRET"));

        let err = Config::from_lookup(lookup_from(&[
            ("ALPACA_API_KEY", " "),
            ("ALPACA_API_SECRET", "secret"),
        ]))
        .err()
        .unwrap();
        assert!(err.to_string().contains("ALPACA_API_KEY"));
    }

    #[test]
    fn invalid_listen_addr_fails() {
        let err = Config::from_lookup(lookup_from(&[
            ("ALPACA_API_KEY", "key"),
            ("ALPACA_API_SECRET", "secret"),
            ("TB_LISTEN_ADDR", "localhost"),
        ]))
        .err()
        .unwrap();
        assert!(err.to_string().contains("TB_LISTEN_ADDR"));
    }
}
