use anyhow::{bail, Context, Result};
use std::env;

pub const DEFAULT_BASE_URL: &str = "https://test.api.amadeus.com";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_PROXY_URL: &str = "http://localhost:5000";

/// Client credential pair for the upstream token exchange.
/// Loaded once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

/// Proxy service settings, read from the environment (a `.env` file is
/// honored when present).
#[derive(Debug, Clone)]
pub struct Settings {
    pub credentials: Credentials,
    /// Upstream API base, overridable via `AMADEUS_BASE_URL`.
    pub base_url: String,
    /// Listen address, overridable via `AIRPORT_PROXY_ADDR`.
    pub bind_addr: String,
}

impl Settings {
    /// Load settings, failing fast when either credential is missing so a
    /// misconfiguration shows up at startup instead of as an opaque auth
    /// failure on the first search.
    pub fn from_env() -> Result<Self> {
        let credentials = Credentials {
            client_id: require("AMADEUS_API_KEY")?,
            client_secret: require("AMADEUS_API_SECRET")?,
        };

        Ok(Self {
            credentials,
            base_url: env::var("AMADEUS_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            bind_addr: env::var("AIRPORT_PROXY_ADDR")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
        })
    }
}

fn require(name: &str) -> Result<String> {
    let value =
        env::var(name).with_context(|| format!("{name} is not set (required credential)"))?;
    if value.trim().is_empty() {
        bail!("{name} is set but empty");
    }
    Ok(value)
}
