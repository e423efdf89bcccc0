use std::time::Duration;

use async_trait::async_trait;
use log::{debug, error};
use reqwest::{Client, Method};
use serde::Deserialize;
use serde_json::Value;

use crate::core::params::ParameterSet;
use crate::error::Error;

/// One outgoing call. Parameter sets are already in wire form.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    pub path: String,
    pub method: Method,
    pub query: ParameterSet,
    pub body: ParameterSet,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs the call and returns the parsed JSON body, or
    /// [`Error::Api`] when the service answers with a non-success status.
    async fn send(&self, request: TransportRequest) -> Result<Value, Error>;
}

/// Error payload returned by ClouDNS alongside a failing status.
#[derive(Deserialize, Debug)]
struct ApiErrorBody {
    status: Option<Value>,
    #[serde(rename = "statusDescription")]
    status_description: Option<String>,
}

pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: TransportRequest) -> Result<Value, Error> {
        let url = self.url(&request.path);
        let builder = match request.method {
            Method::GET => self.client.get(&url).query(&request.query.to_pairs()),
            Method::POST => self.client.post(&url).form(&request.body.to_pairs()),
            other => return Err(Error::UnsupportedMethod(other)),
        };

        debug!("{} {}", request.method, request.path);
        let response = builder.send().await?;
        let status = response.status();
        debug!("Response Status: {status}");

        let text = response.text().await?;
        if status.is_success() {
            return Ok(serde_json::from_str(&text)?);
        }

        let (code, description) = match serde_json::from_str::<ApiErrorBody>(&text) {
            Ok(ApiErrorBody {
                status: Some(code),
                status_description: Some(description),
            }) => (status_text(code), description),
            _ => (status.as_u16().to_string(), text),
        };
        error!("ClouDNS API error on {}: {code} - {description}", request.path);
        Err(Error::Api {
            status: code,
            description,
        })
    }
}

fn status_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}
