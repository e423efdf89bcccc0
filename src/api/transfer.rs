//! Zone transfers (AXFR), record import and export, and shared accounts.

use serde_json::Value;

use super::{ClouDnsClient, RecordImport, domain};
use crate::error::Error;

impl ClouDnsClient {
    /// Imports the zone from `server` over AXFR.
    pub async fn axfr_import(&self, domain_name: &str, server: &str) -> Result<Value, Error> {
        let params = domain(domain_name).with("server", server);
        self.get("dns/axfr-import.json", params).await
    }

    /// Allows `ip` to transfer the zone.
    pub async fn axfr_add_ip(&self, domain_name: &str, ip: &str) -> Result<Value, Error> {
        let params = domain(domain_name).with("ip", ip);
        self.post("dns/axfr-add.json", params).await
    }

    pub async fn axfr_remove_ip(&self, domain_name: &str, id: u32) -> Result<Value, Error> {
        let params = domain(domain_name).with("id", id);
        self.post("dns/axfr-remove.json", params).await
    }

    pub async fn axfr_list_ips(&self, domain_name: &str) -> Result<Value, Error> {
        self.get("dns/axfr-list.json", domain(domain_name)).await
    }

    pub async fn import_records(&self, domain_name: &str, import: &RecordImport) -> Result<Value, Error> {
        let mut params = domain(domain_name)
            .with("format", import.format.as_str())
            .with("content", import.content.as_str());
        if !import.record_types.is_empty() {
            let types = import.record_types.iter().map(ToString::to_string).collect::<Vec<_>>();
            params.insert("record-types", types);
        }
        params.insert("delete-existing-records", import.delete_existing_records);
        self.post("dns/records-import.json", params).await
    }

    /// Zone contents in BIND format.
    pub async fn export_records(&self, domain_name: &str) -> Result<Value, Error> {
        self.post("dns/records-export.json", domain(domain_name)).await
    }

    pub async fn list_shared_accounts(&self, domain_name: &str) -> Result<Value, Error> {
        self.get("dns/list-shared-accounts.json", domain(domain_name)).await
    }

    pub async fn add_shared_account(&self, domain_name: &str, mail: &str) -> Result<Value, Error> {
        let params = domain(domain_name).with("mail", mail);
        self.post("dns/add-shared-account.json", params).await
    }

    pub async fn remove_shared_account(&self, domain_name: &str, mail: &str) -> Result<Value, Error> {
        let params = domain(domain_name).with("mail", mail);
        self.post("dns/remove-shared-account.json", params).await
    }
}
