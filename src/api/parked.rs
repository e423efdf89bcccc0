use serde_json::Value;

use super::{ClouDnsClient, ParkedSettings, domain};
use crate::core::params::ParameterSet;
use crate::error::Error;

impl ClouDnsClient {
    pub async fn parked_templates(&self) -> Result<Value, Error> {
        self.get("dns/get-parked-templates.json", ParameterSet::new()).await
    }

    pub async fn parked_settings(&self, domain_name: &str) -> Result<Value, Error> {
        self.get("dns/get-parked-settings.json", domain(domain_name)).await
    }

    pub async fn set_parked_settings(&self, domain_name: &str, settings: &ParkedSettings) -> Result<Value, Error> {
        let title = settings.title.as_deref().unwrap_or(domain_name);
        let params = domain(domain_name)
            .with("title", title)
            .with("description", settings.description.as_str())
            .with("keywords", settings.keywords.as_str())
            .with("contact-form", settings.contact_form)
            .with("template", settings.template);
        self.post("dns/set-parked-settings.json", params).await
    }
}
