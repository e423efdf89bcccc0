use std::sync::Arc;
use std::time::Duration;

use log::debug;
use reqwest::Method;
use serde_json::Value;

use crate::core::params::ParameterSet;
use crate::error::Error;
use crate::rate_limit::RateLimiter;
use crate::transport::{Transport, TransportRequest};

/// Serializes calls through a [`RateLimiter`] and hands them to a transport.
pub struct Dispatcher {
    rate_limiter: RateLimiter,
    transport: Arc<dyn Transport>,
}

impl Dispatcher {
    pub fn new(max_calls_per_second: f64, transport: Arc<dyn Transport>) -> Result<Self, Error> {
        Ok(Self {
            rate_limiter: RateLimiter::new(max_calls_per_second)?,
            transport,
        })
    }

    pub fn min_interval(&self) -> Duration {
        self.rate_limiter.min_delay()
    }

    pub async fn dispatch(
        &self,
        path: &str,
        method: Method,
        query: ParameterSet,
        body: ParameterSet,
    ) -> Result<Value, Error> {
        if method != Method::GET && method != Method::POST {
            return Err(Error::UnsupportedMethod(method));
        }

        self.rate_limiter.wait().await;
        debug!("dispatching {method} {path}");

        self.transport
            .send(TransportRequest {
                path: path.to_string(),
                method,
                query,
                body,
            })
            .await
    }
}
