use serde_json::Value;

use super::{ClouDnsClient, domain};
use crate::error::Error;

impl ClouDnsClient {
    pub async fn is_dnssec_available(&self, domain_name: &str) -> Result<Value, Error> {
        self.get("dns/is-dnssec-available.json", domain(domain_name)).await
    }

    pub async fn activate_dnssec(&self, domain_name: &str) -> Result<Value, Error> {
        self.post("dns/activate-dnssec.json", domain(domain_name)).await
    }

    pub async fn deactivate_dnssec(&self, domain_name: &str) -> Result<Value, Error> {
        self.post("dns/deactivate-dnssec.json", domain(domain_name)).await
    }

    pub async fn dnssec_ds_records(&self, domain_name: &str) -> Result<Value, Error> {
        self.get("dns/get-dnssec-ds-records.json", domain(domain_name)).await
    }

    pub async fn change_dnssec_optout(&self, domain_name: &str, enabled: bool) -> Result<Value, Error> {
        let params = domain(domain_name).with("status", enabled);
        self.post("dns/set-dnssec-optout.json", params).await
    }
}
