use std::collections::HashMap;
use std::env;

use crate::error::Error;

pub const AUTH_ID: &str = "auth_id";
pub const SUB_AUTH_ID: &str = "sub_auth_id";
pub const SUB_AUTH_USER: &str = "sub_auth_user";
pub const AUTH_PASSWORD: &str = "auth_password";

pub trait CredentialManager: Send + Sync {
    /// Returns [`Error::MissingCredential`] when `key` is simply not set,
    /// and any other error when the lookup itself failed.
    fn get(&self, key: &str) -> Result<String, Error>;
}

/// Reads credentials from `CLOUDNS_AUTH_ID`, `CLOUDNS_SUB_AUTH_ID`,
/// `CLOUDNS_SUB_AUTH_USER` and `CLOUDNS_AUTH_PASSWORD`.
#[derive(Default)]
pub struct EnvCredentialManager;

impl CredentialManager for EnvCredentialManager {
    fn get(&self, key: &str) -> Result<String, Error> {
        let var = match key {
            AUTH_ID => "CLOUDNS_AUTH_ID",
            SUB_AUTH_ID => "CLOUDNS_SUB_AUTH_ID",
            SUB_AUTH_USER => "CLOUDNS_SUB_AUTH_USER",
            AUTH_PASSWORD => "CLOUDNS_AUTH_PASSWORD",
            _ => return Err(Error::Credential(format!("Unknown key: {key}"))),
        };
        env::var(var).map_err(|e| match e {
            env::VarError::NotPresent => Error::MissingCredential(var.to_string()),
            env::VarError::NotUnicode(_) => Error::Credential(format!("{var}: {e}")),
        })
    }
}

/// In-memory credentials, for callers that already hold them.
#[derive(Default, Clone)]
pub struct StaticCredentialManager {
    values: HashMap<String, String>,
}

impl StaticCredentialManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.values.insert(key.to_string(), value.into());
        self
    }
}

impl CredentialManager for StaticCredentialManager {
    fn get(&self, key: &str) -> Result<String, Error> {
        self.values
            .get(key)
            .cloned()
            .ok_or_else(|| Error::MissingCredential(key.to_string()))
    }
}
