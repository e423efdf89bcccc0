//! DNS failover monitoring and its notifications.

use serde_json::Value;

use super::{ClouDnsClient, FailoverCheck, domain_record};
use crate::core::params::ParameterSet;
use crate::error::Error;

impl ClouDnsClient {
    pub async fn failover_settings(&self, domain_name: &str, record_id: u32) -> Result<Value, Error> {
        self.get("dns/failover-settings.json", domain_record(domain_name, record_id))
            .await
    }

    /// Starts monitoring a record.
    pub async fn activate_failover(
        &self,
        domain_name: &str,
        record_id: u32,
        check: &FailoverCheck,
    ) -> Result<Value, Error> {
        let mut params = domain_record(domain_name, record_id);
        check.put(&mut params);
        self.post("dns/failover-activate.json", params).await
    }

    pub async fn modify_failover(
        &self,
        domain_name: &str,
        record_id: u32,
        check: &FailoverCheck,
    ) -> Result<Value, Error> {
        let mut params = domain_record(domain_name, record_id);
        check.put(&mut params);
        self.post("dns/failover-modify.json", params).await
    }

    pub async fn deactivate_failover(&self, domain_name: &str, record_id: u32) -> Result<Value, Error> {
        self.post("dns/failover-deactivate.json", domain_record(domain_name, record_id))
            .await
    }

    pub async fn failover_check_history(
        &self,
        domain_name: &str,
        record_id: u32,
        rows_per_page: u32,
        page: u32,
    ) -> Result<Value, Error> {
        let params = domain_record(domain_name, record_id)
            .with("rows-per-page", rows_per_page)
            .with("page", page);
        self.get("dns/failover-check-history.json", params).await
    }

    pub async fn failover_check_history_pages(
        &self,
        domain_name: &str,
        record_id: u32,
        rows_per_page: u32,
    ) -> Result<Value, Error> {
        let params = domain_record(domain_name, record_id).with("rows-per-page", rows_per_page);
        self.get("dns/failover-check-history-pages.json", params).await
    }

    pub async fn failover_action_history(
        &self,
        domain_name: &str,
        record_id: u32,
        rows_per_page: u32,
        page: u32,
    ) -> Result<Value, Error> {
        let params = domain_record(domain_name, record_id)
            .with("rows-per-page", rows_per_page)
            .with("page", page);
        self.get("dns/failover-action-history.json", params).await
    }

    pub async fn failover_action_history_pages(
        &self,
        domain_name: &str,
        record_id: u32,
        rows_per_page: u32,
    ) -> Result<Value, Error> {
        let params = domain_record(domain_name, record_id).with("rows-per-page", rows_per_page);
        self.get("dns/failover-action-history-pages.json", params).await
    }

    /// Used and available failover checks on the account.
    pub async fn failover_limits(&self) -> Result<Value, Error> {
        self.get("dns/get-failover-stats.json", ParameterSet::new()).await
    }

    pub async fn failover_nodes(&self) -> Result<Value, Error> {
        self.get("dns/get-failover-servers.json", ParameterSet::new()).await
    }

    /// Adds a notification target for a monitored record. `kind` is the
    /// channel (`mail`, `sms`, `webhook`, `telegram`, ...), `value` its address.
    pub async fn create_failover_notification(
        &self,
        domain_name: &str,
        record_id: u32,
        kind: &str,
        value: &str,
        code: Option<&str>,
        chat_id: Option<&str>,
    ) -> Result<Value, Error> {
        let mut params = domain_record(domain_name, record_id);
        params
            .insert("type", kind)
            .insert("value", value)
            .insert_opt("code", code)
            .insert_opt("chat-id", chat_id);
        self.post("dns/create-failover-notification.json", params).await
    }

    pub async fn list_failover_notifications(
        &self,
        domain_name: &str,
        record_id: u32,
        rows_per_page: u32,
        page: u32,
    ) -> Result<Value, Error> {
        let params = domain_record(domain_name, record_id)
            .with("rows-per-page", rows_per_page)
            .with("page", page);
        self.get("dns/list-failover-notifications.json", params).await
    }

    pub async fn failover_notifications_pages(
        &self,
        domain_name: &str,
        record_id: u32,
        rows_per_page: u32,
    ) -> Result<Value, Error> {
        let params = domain_record(domain_name, record_id).with("rows-per-page", rows_per_page);
        self.get("dns/get-failover-notifications-pages.json", params).await
    }

    pub async fn delete_failover_notification(
        &self,
        domain_name: &str,
        record_id: u32,
        notification_id: u32,
    ) -> Result<Value, Error> {
        let params = domain_record(domain_name, record_id).with("notification-id", notification_id);
        self.get("dns/delete-failover-notification.json", params).await
    }
}
