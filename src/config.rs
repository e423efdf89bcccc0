use std::env;
use std::time::Duration;

use crate::error::Error;

pub const DEFAULT_API_URL: &str = "https://api.cloudns.net";
pub const DEFAULT_RATE_LIMIT: f64 = 20.0;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub api_url: String,
    pub max_calls_per_second: f64,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Reads `CLOUDNS_API_URL`, `CLOUDNS_RATE_LIMIT` and
    /// `CLOUDNS_TIMEOUT_SECS`, falling back to the defaults when unset.
    pub fn from_env() -> Result<Self, Error> {
        Ok(ClientConfig {
            api_url: env::var("CLOUDNS_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            max_calls_per_second: match env::var("CLOUDNS_RATE_LIMIT") {
                Ok(v) => v
                    .parse()
                    .map_err(|_| Error::Config(format!("CLOUDNS_RATE_LIMIT is not a number: {v}")))?,
                Err(_) => DEFAULT_RATE_LIMIT,
            },
            timeout: match env::var("CLOUDNS_TIMEOUT_SECS") {
                Ok(v) => Duration::from_secs(v.parse().map_err(|_| {
                    Error::Config(format!("CLOUDNS_TIMEOUT_SECS is not a whole number: {v}"))
                })?),
                Err(_) => DEFAULT_TIMEOUT,
            },
        })
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_rate_limit(mut self, max_calls_per_second: f64) -> Self {
        self.max_calls_per_second = max_calls_per_second;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            api_url: String::from(DEFAULT_API_URL),
            max_calls_per_second: DEFAULT_RATE_LIMIT,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
