use serde_json::Value;

use super::{ClouDnsClient, domain};
use crate::core::params::ParameterSet;
use crate::error::Error;

impl ClouDnsClient {
    pub async fn mail_forward_stats(&self) -> Result<Value, Error> {
        self.get("dns/get-mail-forwards-stats.json", ParameterSet::new()).await
    }

    pub async fn mail_forward_servers(&self) -> Result<Value, Error> {
        self.get("dns/get-mailforward-servers.json", ParameterSet::new()).await
    }

    /// Forwards `box@host.domain_name` to `destination`. An empty `mail_box`
    /// catches every address.
    pub async fn add_mail_forward(
        &self,
        domain_name: &str,
        mail_box: &str,
        host: &str,
        destination: &str,
    ) -> Result<Value, Error> {
        let params = domain(domain_name)
            .with("box", mail_box)
            .with("host", host)
            .with("destination", destination);
        self.post("dns/add-mail-forward.json", params).await
    }

    pub async fn modify_mail_forward(
        &self,
        domain_name: &str,
        mail_forward_id: u32,
        mail_box: &str,
        host: &str,
        destination: &str,
    ) -> Result<Value, Error> {
        let params = domain(domain_name)
            .with("box", mail_box)
            .with("host", host)
            .with("destination", destination)
            .with("mail-forward-id", mail_forward_id);
        self.post("dns/modify-mail-forward.json", params).await
    }

    pub async fn delete_mail_forward(&self, domain_name: &str, mail_forward_id: u32) -> Result<Value, Error> {
        let params = domain(domain_name).with("mail-forward-id", mail_forward_id);
        self.post("dns/delete-mail-forward.json", params).await
    }

    pub async fn list_mail_forwards(&self, domain_name: &str) -> Result<Value, Error> {
        self.get("dns/mail-forwards.json", domain(domain_name)).await
    }

    pub async fn change_mail_forward_status(
        &self,
        domain_name: &str,
        mail_forward_id: u32,
        active: bool,
    ) -> Result<Value, Error> {
        let params = domain(domain_name)
            .with("mail-forward-id", mail_forward_id)
            .with("status", active);
        self.post("dns/modify-mail-forward-status.json", params).await
    }
}
