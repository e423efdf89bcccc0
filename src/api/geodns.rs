use serde_json::Value;

use super::{ClouDnsClient, domain};
use crate::core::params::ParameterSet;
use crate::error::Error;

impl ClouDnsClient {
    pub async fn geodns_locations(&self, domain_name: &str) -> Result<Value, Error> {
        self.get("dns/get-geodns-locations.json", domain(domain_name)).await
    }

    pub async fn is_geodns_available(&self) -> Result<Value, Error> {
        self.get("dns/is-geodns-available.json", ParameterSet::new()).await
    }
}
