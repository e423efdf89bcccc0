use serde_json::Value;

use super::{ClouDnsClient, NewRecord, RecordQuery, RecordUpdate, check, domain, domain_record};
use crate::core::fields::normalize;
use crate::core::params::ParameterSet;
use crate::core::record::{RecordType, ZoneType};
use crate::error::Error;

impl ClouDnsClient {
    pub async fn get_record(&self, domain_name: &str, record_id: u32) -> Result<Value, Error> {
        self.get("dns/get-record.json", domain_record(domain_name, record_id))
            .await
    }

    pub async fn list_records(&self, domain_name: &str, query: &RecordQuery) -> Result<Value, Error> {
        let mut params = domain(domain_name);
        params
            .insert_opt("host", query.host.as_deref())
            .insert_opt("host-like", query.host_like.as_deref())
            .insert_opt("type", query.record_type)
            .insert("rows-per-page", query.rows_per_page)
            .insert("page", query.page)
            .insert_opt("order-by", query.order_by.as_deref());
        self.get("dns/records.json", params).await
    }

    pub async fn records_pages_count(
        &self,
        domain_name: &str,
        host: Option<&str>,
        record_type: Option<RecordType>,
        rows_per_page: u32,
    ) -> Result<Value, Error> {
        let mut params = domain(domain_name);
        params
            .insert_opt("host", host)
            .insert_opt("type", record_type)
            .insert("rows-per-page", rows_per_page);
        self.get("dns/get-records-pages-count.json", params).await
    }

    /// Validates and creates a record.
    pub async fn add_record(&self, record: &NewRecord) -> Result<Value, Error> {
        self.post_record("dns/add-record.json", &record.to_params())
            .await
    }

    /// Validates and replaces an existing record. The record type, when
    /// given, is checked against `record` but not sent.
    pub async fn modify_record(&self, update: &RecordUpdate) -> Result<Value, Error> {
        let params = update.to_params();
        check(&params)?;
        let mut wire = normalize(&params);
        wire.remove("record-type");
        self.post("dns/mod-record.json", wire).await
    }

    pub async fn delete_record(&self, domain_name: &str, record_id: u32) -> Result<Value, Error> {
        self.post("dns/delete-record.json", domain_record(domain_name, record_id))
            .await
    }

    /// Copies every record of `from_domain` into `domain_name`.
    pub async fn copy_records(
        &self,
        domain_name: &str,
        from_domain: &str,
        delete_current_records: bool,
    ) -> Result<Value, Error> {
        let params = domain(domain_name)
            .with("from-domain", from_domain)
            .with("delete-current-records", delete_current_records);
        self.post("dns/copy-records.json", params).await
    }

    pub async fn available_record_types(&self, zone_type: ZoneType) -> Result<Value, Error> {
        let params = ParameterSet::new().with("zone-type", zone_type);
        self.get("dns/get-available-record-types.json", params).await
    }

    pub async fn available_ttl(&self, domain_name: &str) -> Result<Value, Error> {
        self.get("dns/get-available-ttl.json", domain(domain_name)).await
    }

    pub async fn records_count(&self, domain_name: &str) -> Result<Value, Error> {
        self.get("dns/get-records-count.json", domain(domain_name)).await
    }

    pub async fn change_record_status(
        &self,
        domain_name: &str,
        record_id: u32,
        active: bool,
    ) -> Result<Value, Error> {
        let params = domain_record(domain_name, record_id).with("status", active);
        self.get("dns/change-record-status.json", params).await
    }

    pub async fn get_dynamic_url(&self, domain_name: &str, record_id: u32) -> Result<Value, Error> {
        self.get("dns/get-dynamic-url.json", domain_record(domain_name, record_id))
            .await
    }

    pub async fn disable_dynamic_url(&self, domain_name: &str, record_id: u32) -> Result<Value, Error> {
        self.post("dns/disable-dynamic-url.json", domain_record(domain_name, record_id))
            .await
    }

    pub async fn change_dynamic_url(&self, domain_name: &str, record_id: u32) -> Result<Value, Error> {
        self.post("dns/change-dynamic-url.json", domain_record(domain_name, record_id))
            .await
    }

    pub async fn dynamic_url_history(
        &self,
        domain_name: &str,
        record_id: u32,
        rows_per_page: u32,
        page: u32,
    ) -> Result<Value, Error> {
        let params = domain_record(domain_name, record_id)
            .with("rows-per-page", rows_per_page)
            .with("page", page);
        self.get("dns/get-dynamic-url-history.json", params).await
    }

    pub async fn dynamic_url_history_pages(
        &self,
        domain_name: &str,
        record_id: u32,
        rows_per_page: u32,
    ) -> Result<Value, Error> {
        let params = domain_record(domain_name, record_id).with("rows-per-page", rows_per_page);
        self.get("dns/get-dynamic-url-history-pages.json", params).await
    }
}
