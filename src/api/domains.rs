//! Registered domain names: ordering, contacts, name servers and the
//! registrar-side groups and DNSSEC records.

use serde_json::Value;

use super::{ClouDnsClient, ContactDetails, DomainOrder, domain};
use crate::core::params::ParameterSet;
use crate::error::Error;

impl ClouDnsClient {
    /// Checks whether `name` is free under each of `tlds`.
    pub async fn check_domain_available(&self, name: &str, tlds: &[String]) -> Result<Value, Error> {
        let params = ParameterSet::new()
            .with("name", name)
            .with("tld", tlds.to_vec());
        self.get("domains/check-available.json", params).await
    }

    pub async fn domain_pricing_list(&self) -> Result<Value, Error> {
        self.get("domains/pricing-list.json", ParameterSet::new()).await
    }

    pub async fn register_domain(&self, order: &DomainOrder) -> Result<Value, Error> {
        self.post("domains/order-new-domain.json", order.to_params()).await
    }

    pub async fn transfer_domain(&self, order: &DomainOrder) -> Result<Value, Error> {
        self.post("domains/order-transfer-domain.json", order.to_params())
            .await
    }

    pub async fn renew_domain(&self, domain_name: &str, period: u8) -> Result<Value, Error> {
        let params = domain(domain_name).with("period", period);
        self.post("domains/order-renew-domain.json", params).await
    }

    pub async fn list_domains(
        &self,
        page: u32,
        rows_per_page: u32,
        search: Option<&str>,
        order_by: Option<&str>,
    ) -> Result<Value, Error> {
        let mut params = ParameterSet::new();
        params
            .insert("page", page)
            .insert("rows-per-page", rows_per_page)
            .insert_opt("search", search)
            .insert_opt("order_by", order_by);
        self.get("domains/list-domains.json", params).await
    }

    pub async fn domain_pages_count(&self, rows_per_page: u32, search: Option<&str>) -> Result<Value, Error> {
        let mut params = ParameterSet::new();
        params
            .insert("rows-per-page", rows_per_page)
            .insert_opt("search", search);
        self.get("domains/get-pages-count.json", params).await
    }

    pub async fn domain_info(&self, domain_name: &str) -> Result<Value, Error> {
        self.get("domains/domain-info.json", domain(domain_name)).await
    }

    pub async fn domain_contacts(&self, domain_name: &str) -> Result<Value, Error> {
        self.get("domains/get-contacts.json", domain(domain_name)).await
    }

    /// Replaces one contact of the domain. `contact_type` names which one,
    /// e.g. `registrant`, `admin`, `tech` or `billing`.
    pub async fn modify_domain_contact(
        &self,
        domain_name: &str,
        contact_type: &str,
        contact: &ContactDetails,
    ) -> Result<Value, Error> {
        let mut params = domain(domain_name).with("type", contact_type);
        contact.put(&mut params);
        self.post("domains/set-contacts.json", params).await
    }

    pub async fn domain_nameservers(&self, domain_name: &str) -> Result<Value, Error> {
        self.get("domains/get-nameservers.json", domain(domain_name)).await
    }

    pub async fn set_domain_nameservers(&self, domain_name: &str, nameservers: &[String]) -> Result<Value, Error> {
        let params = domain(domain_name).with("ns", nameservers.to_vec());
        self.post("domains/set-nameservers.json", params).await
    }

    pub async fn domain_child_nameservers(&self, domain_name: &str) -> Result<Value, Error> {
        self.get("domains/get-child-nameservers.json", domain(domain_name))
            .await
    }

    /// Adds a glue record.
    pub async fn add_domain_child_nameserver(&self, domain_name: &str, host: &str, ip: &str) -> Result<Value, Error> {
        let params = domain(domain_name).with("host", host).with("ip", ip);
        self.post("domains/add-child-nameservers.json", params).await
    }

    pub async fn delete_domain_child_nameserver(
        &self,
        domain_name: &str,
        host: &str,
        ip: &str,
    ) -> Result<Value, Error> {
        let params = domain(domain_name).with("host", host).with("ip", ip);
        self.post("domains/delete-child-nameservers.json", params).await
    }

    pub async fn modify_domain_child_nameserver(
        &self,
        domain_name: &str,
        host: &str,
        old_ip: &str,
        new_ip: &str,
    ) -> Result<Value, Error> {
        let params = domain(domain_name)
            .with("host", host)
            .with("old-ip", old_ip)
            .with("new-ip", new_ip);
        self.post("domains/modify-child-nameservers.json", params).await
    }

    pub async fn set_domain_privacy_protection(&self, domain_name: &str, enabled: bool) -> Result<Value, Error> {
        let params = domain(domain_name).with("status", enabled);
        self.post("domains/edit-privacy-protection.json", params).await
    }

    pub async fn set_domain_transfer_lock(&self, domain_name: &str, locked: bool) -> Result<Value, Error> {
        let params = domain(domain_name).with("status", locked);
        self.post("domains/edit-transfer-lock.json", params).await
    }

    pub async fn domain_transfer_code(&self, domain_name: &str) -> Result<Value, Error> {
        self.get("domains/get-transfer-code.json", domain(domain_name)).await
    }

    pub async fn domain_raa_status(&self, domain_name: &str) -> Result<Value, Error> {
        self.get("domains/get-raa-status.json", domain(domain_name)).await
    }

    pub async fn resend_domain_raa_verification(&self, domain_name: &str) -> Result<Value, Error> {
        self.post("domains/resend-raa-verification.json", domain(domain_name))
            .await
    }

    pub async fn add_domain_group(&self, domain_name: &str, name: &str) -> Result<Value, Error> {
        let params = domain(domain_name).with("name", name);
        self.post("domains/add-group.json", params).await
    }

    pub async fn delete_domain_group(&self, group_id: u32) -> Result<Value, Error> {
        let params = ParameterSet::new().with("group-id", group_id);
        self.post("domains/delete-group.json", params).await
    }

    pub async fn list_domain_groups(&self) -> Result<Value, Error> {
        self.get("domains/list-groups.json", ParameterSet::new()).await
    }

    pub async fn rename_domain_group(&self, group_id: u32, new_name: &str) -> Result<Value, Error> {
        let params = ParameterSet::new()
            .with("group-id", group_id)
            .with("new-name", new_name);
        self.post("domains/rename-group.json", params).await
    }

    pub async fn change_domain_group(&self, domain_name: &str, group_id: u32) -> Result<Value, Error> {
        let params = domain(domain_name).with("group-id", group_id);
        self.post("domains/change-group.json", params).await
    }

    /// Publishes a DS record at the registry.
    pub async fn add_domain_dnssec_record(&self, domain_name: &str, record: &str) -> Result<Value, Error> {
        let params = domain(domain_name).with("record", record);
        self.post("domains/add-dnssec-record.json", params).await
    }

    pub async fn delete_domain_dnssec_record(&self, domain_name: &str, record: &str) -> Result<Value, Error> {
        let params = domain(domain_name).with("record", record);
        self.post("domains/delete-dnssec-record.json", params).await
    }

    pub async fn list_domain_dnssec_records(&self, domain_name: &str) -> Result<Value, Error> {
        self.get("domains/list-dnssec-records.json", domain(domain_name)).await
    }
}
