use serde_json::Value;

use super::{ClouDnsClient, domain};
use crate::core::params::ParameterSet;
use crate::error::Error;

impl ClouDnsClient {
    /// Creates a zone group named `name` and puts `domain_name` in it.
    pub async fn add_group(&self, domain_name: &str, name: &str) -> Result<Value, Error> {
        let params = domain(domain_name).with("name", name);
        self.post("dns/add-group.json", params).await
    }

    pub async fn delete_group(&self, group_id: u32) -> Result<Value, Error> {
        let params = ParameterSet::new().with("group-id", group_id);
        self.post("dns/delete-group.json", params).await
    }

    pub async fn list_groups(&self) -> Result<Value, Error> {
        self.get("dns/list-groups.json", ParameterSet::new()).await
    }

    pub async fn rename_group(&self, group_id: u32, new_name: &str) -> Result<Value, Error> {
        let params = ParameterSet::new()
            .with("group-id", group_id)
            .with("new-name", new_name);
        self.post("dns/rename-group.json", params).await
    }

    /// Moves a zone into another group.
    pub async fn change_group(&self, domain_name: &str, group_id: u32) -> Result<Value, Error> {
        let params = domain(domain_name).with("group-id", group_id);
        self.post("dns/change-group.json", params).await
    }
}
