use serde_json::Value;

use super::ClouDnsClient;
use crate::core::params::ParameterSet;
use crate::error::Error;

impl ClouDnsClient {
    /// Checks the configured credentials.
    pub async fn login(&self) -> Result<Value, Error> {
        self.post("login/login.json", ParameterSet::new()).await
    }

    pub async fn get_current_ip(&self) -> Result<Value, Error> {
        self.get("ip/get-my-ip.json", ParameterSet::new()).await
    }

    pub async fn get_account_balance(&self) -> Result<Value, Error> {
        self.get("account/get-balance.json", ParameterSet::new()).await
    }
}
