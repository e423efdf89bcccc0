use serde_json::Value;

use super::{ClouDnsClient, ZoneQuery, domain};
use crate::core::params::ParameterSet;
use crate::core::record::ZoneType;
use crate::error::Error;

impl ZoneQuery {
    fn to_params(&self, with_page: bool) -> ParameterSet {
        let mut params = ParameterSet::new();
        if with_page {
            params.insert("page", self.page);
        }
        params
            .insert("rows-per-page", self.rows_per_page)
            .insert_opt("search", self.search.as_deref())
            .insert_opt("group-id", self.group_id)
            .insert_opt("has-cloud-domains", self.has_cloud_domains);
        params
    }
}

impl ClouDnsClient {
    pub async fn available_name_servers(&self, detailed: bool) -> Result<Value, Error> {
        let params = ParameterSet::new().with("detailed-info", detailed);
        self.get("dns/available-name-servers.json", params).await
    }

    /// Registers a new zone. `name_servers` is only used by master zones,
    /// `master_ip` only by slave zones.
    pub async fn register_zone(
        &self,
        domain_name: &str,
        zone_type: ZoneType,
        name_servers: &[String],
        master_ip: Option<&str>,
    ) -> Result<Value, Error> {
        let mut params = domain(domain_name).with("zone-type", zone_type);
        if !name_servers.is_empty() {
            params.insert("ns", name_servers.to_vec());
        }
        params.insert_opt("master-ip", master_ip);
        self.post("dns/register.json", params).await
    }

    pub async fn delete_zone(&self, domain_name: &str) -> Result<Value, Error> {
        self.post("dns/delete.json", domain(domain_name)).await
    }

    pub async fn list_zones(&self, query: &ZoneQuery) -> Result<Value, Error> {
        self.get("dns/list-zones.json", query.to_params(true)).await
    }

    pub async fn zone_pages_count(&self, query: &ZoneQuery) -> Result<Value, Error> {
        self.get("dns/get-pages-count.json", query.to_params(false)).await
    }

    pub async fn zones_stats(&self) -> Result<Value, Error> {
        self.get("dns/get-zones-stats.json", ParameterSet::new()).await
    }

    pub async fn zone_info(&self, domain_name: &str) -> Result<Value, Error> {
        self.get("dns/get-zone-info.json", domain(domain_name)).await
    }

    pub async fn update_zone(&self, domain_name: &str) -> Result<Value, Error> {
        self.post("dns/update-zone.json", domain(domain_name)).await
    }

    pub async fn update_status(&self, domain_name: &str) -> Result<Value, Error> {
        self.get("dns/update-status.json", domain(domain_name)).await
    }

    pub async fn is_updated(&self, domain_name: &str) -> Result<Value, Error> {
        self.get("dns/is-updated.json", domain(domain_name)).await
    }

    pub async fn change_zone_status(&self, domain_name: &str, active: bool) -> Result<Value, Error> {
        let params = domain(domain_name).with("status", active);
        self.post("dns/change-status.json", params).await
    }

    pub async fn records_stats(&self) -> Result<Value, Error> {
        self.get("dns/get-records-stats.json", ParameterSet::new()).await
    }
}
