//! Free SSL certificates issued for a zone.

use serde_json::Value;

use super::{ClouDnsClient, domain};
use crate::error::Error;

/// Issuer used when none is chosen.
pub const DEFAULT_SSL_ISSUER: u8 = 2;

impl ClouDnsClient {
    pub async fn activate_free_ssl(&self, domain_name: &str, issuer: u8) -> Result<Value, Error> {
        let params = domain(domain_name).with("issuer", issuer);
        self.post("dns/freessl-activate.json", params).await
    }

    pub async fn deactivate_free_ssl(&self, domain_name: &str) -> Result<Value, Error> {
        self.post("dns/freessl-deactivate.json", domain(domain_name)).await
    }

    pub async fn free_ssl_data(&self, domain_name: &str) -> Result<Value, Error> {
        self.get("dns/freessl-get.json", domain(domain_name)).await
    }

    pub async fn change_free_ssl_issuer(&self, domain_name: &str, issuer: u8) -> Result<Value, Error> {
        let params = domain(domain_name).with("issuer", issuer);
        self.post("dns/freessl-change-issuer.json", params).await
    }
}
