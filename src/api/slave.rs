//! Master servers of slave zones.

use serde_json::Value;

use super::{ClouDnsClient, domain};
use crate::error::Error;

impl ClouDnsClient {
    pub async fn add_master_server(&self, domain_name: &str, master_ip: &str) -> Result<Value, Error> {
        let params = domain(domain_name).with("master-ip", master_ip);
        self.get("dns/add-master-server.json", params).await
    }

    pub async fn delete_master_server(&self, domain_name: &str, master_id: u32) -> Result<Value, Error> {
        let params = domain(domain_name).with("master-id", master_id);
        self.get("dns/delete-master-server.json", params).await
    }

    pub async fn list_master_servers(&self, domain_name: &str) -> Result<Value, Error> {
        self.get("dns/master-servers.json", domain(domain_name)).await
    }

    /// Secondary servers the zone can be transferred to.
    pub async fn available_secondary_servers(&self, domain_name: &str) -> Result<Value, Error> {
        self.get("dns/available-secondary-servers.json", domain(domain_name))
            .await
    }

    /// SOA of the zone as served by one of the secondary servers.
    pub async fn secondary_soa(&self, domain_name: &str, server_id: u32) -> Result<Value, Error> {
        let params = domain(domain_name).with("server-id", server_id);
        self.get("dns/get-soa-secondary-zone.json", params).await
    }

    pub async fn export_secondary_zone(&self, domain_name: &str) -> Result<Value, Error> {
        self.get("dns/export-secondary-zone.json", domain(domain_name)).await
    }
}
