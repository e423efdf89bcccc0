//! Authentication fields merged into every request.

pub mod credentials;

use crate::core::params::ParameterSet;
use crate::error::Error;
use credentials::{AUTH_ID, AUTH_PASSWORD, CredentialManager, SUB_AUTH_ID, SUB_AUTH_USER};

/// Which identity the password belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthId {
    Main(String),
    SubId(String),
    SubUser(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub id: AuthId,
    pub password: String,
}

impl Credentials {
    pub fn new(id: AuthId, password: impl Into<String>) -> Self {
        Self {
            id,
            password: password.into(),
        }
    }

    /// Resolves the identity in the order main id, sub id, sub user. Only a
    /// key that is not set moves on to the next one; any other lookup
    /// failure is returned as is.
    pub fn from_manager(manager: &dyn CredentialManager) -> Result<Self, Error> {
        let id = if let Some(id) = lookup(manager, AUTH_ID)? {
            AuthId::Main(id)
        } else if let Some(id) = lookup(manager, SUB_AUTH_ID)? {
            AuthId::SubId(id)
        } else if let Some(user) = lookup(manager, SUB_AUTH_USER)? {
            AuthId::SubUser(user)
        } else {
            return Err(Error::Credential(
                "one of auth_id, sub_auth_id or sub_auth_user is required".to_string(),
            ));
        };
        let password = manager.get(AUTH_PASSWORD)?;
        Ok(Self { id, password })
    }

    /// Wire-form auth fields.
    pub fn to_params(&self) -> ParameterSet {
        let mut params = ParameterSet::new();
        match &self.id {
            AuthId::Main(id) => params.insert("auth-id", id),
            AuthId::SubId(id) => params.insert("sub-auth-id", id),
            AuthId::SubUser(user) => params.insert("sub-auth-user", user),
        };
        params.insert("auth-password", &self.password);
        params
    }
}

fn lookup(manager: &dyn CredentialManager, key: &str) -> Result<Option<String>, Error> {
    match manager.get(key) {
        Ok(value) => Ok(Some(value)),
        Err(Error::MissingCredential(_)) => Ok(None),
        Err(e) => Err(e),
    }
}
