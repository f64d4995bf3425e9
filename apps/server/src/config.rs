use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use exchanger_core::constants::DEFAULT_ANCHOR_CURRENCY;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    /// Currency used to bridge pairs that have no direct or inverse rate.
    pub anchor_currency: String,
    /// `text` or `json`.
    pub log_format: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("EXCHANGER_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid EXCHANGER_LISTEN_ADDR")?;
        let db_path =
            std::env::var("EXCHANGER_DB_PATH").unwrap_or_else(|_| "./db/exchanger.db".into());
        let cors_allow = std::env::var("EXCHANGER_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("EXCHANGER_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let anchor_currency = std::env::var("EXCHANGER_ANCHOR_CURRENCY")
            .map(|s| s.trim().to_string())
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_ANCHOR_CURRENCY.to_string());
        let log_format =
            std::env::var("EXCHANGER_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            anchor_currency,
            log_format,
        })
    }
}
