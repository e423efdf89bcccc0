use serde_json::Value;

use super::{ClouDnsClient, domain};
use crate::error::Error;

impl ClouDnsClient {
    /// Adds `cloud_domain_name` to the cloud of `domain_name`.
    pub async fn add_cloud_domain(&self, domain_name: &str, cloud_domain_name: &str) -> Result<Value, Error> {
        let params = domain(domain_name).with("cloud-domain-name", cloud_domain_name);
        self.post("dns/add-cloud-domain.json", params).await
    }

    pub async fn delete_cloud_domain(&self, domain_name: &str) -> Result<Value, Error> {
        self.post("dns/delete-cloud-domain.json", domain(domain_name)).await
    }

    pub async fn set_cloud_master(&self, domain_name: &str) -> Result<Value, Error> {
        self.post("dns/set-master-cloud-domain.json", domain(domain_name)).await
    }

    pub async fn list_cloud_domains(&self, domain_name: &str) -> Result<Value, Error> {
        self.post("dns/list-cloud-domains.json", domain(domain_name)).await
    }
}
