use serde_json::Value;

use super::{ClouDnsClient, SoaSettings, check, domain};
use crate::error::Error;

impl ClouDnsClient {
    pub async fn soa_details(&self, domain_name: &str) -> Result<Value, Error> {
        self.get("dns/soa-details.json", domain(domain_name)).await
    }

    /// Validates and applies new SOA values.
    pub async fn modify_soa(&self, domain_name: &str, soa: &SoaSettings) -> Result<Value, Error> {
        check(&soa.to_params())?;
        let params = domain(domain_name)
            .with("primary-ns", &soa.primary_ns)
            .with("admin-email", &soa.admin_email)
            .with("refresh", soa.refresh)
            .with("retry", soa.retry)
            .with("expire", soa.expire)
            .with("default-ttl", soa.default_ttl);
        self.post("dns/modify-soa.json", params).await
    }

    pub async fn reset_soa(&self, domain_name: &str) -> Result<Value, Error> {
        self.get("dns/reset-soa.json", domain(domain_name)).await
    }
}
