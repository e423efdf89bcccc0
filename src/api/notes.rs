use serde_json::Value;

use super::{ClouDnsClient, domain};
use crate::error::Error;

impl ClouDnsClient {
    pub async fn set_note(&self, domain_name: &str, note: &str) -> Result<Value, Error> {
        let params = domain(domain_name).with("note", note);
        self.post("dns/set-note.json", params).await
    }

    /// Clears the note by setting it empty.
    pub async fn delete_note(&self, domain_name: &str) -> Result<Value, Error> {
        self.set_note(domain_name, "").await
    }

    pub async fn get_note(&self, domain_name: &str) -> Result<Value, Error> {
        self.post("dns/get-note.json", domain(domain_name)).await
    }
}
