//! ClouDNS client and its resource façades.

pub mod account;
pub mod cloud;
pub mod dnssec;
pub mod domains;
pub mod failover;
pub mod geodns;
pub mod groups;
pub mod mail;
pub mod notes;
pub mod parked;
pub mod records;
pub mod slave;
pub mod soa;
pub mod ssl;
pub mod stats;
pub mod transfer;
pub mod types;
pub mod zones;


use std::sync::Arc;

use log::warn;
use reqwest::Method;
use serde_json::Value;

use crate::auth::Credentials;
use crate::auth::credentials::{CredentialManager, EnvCredentialManager};
use crate::config::ClientConfig;
use crate::core::fields::normalize;
use crate::core::params::ParameterSet;
use crate::core::validation::validate;
use crate::dispatcher::Dispatcher;
use crate::error::Error;
use crate::transport::{HttpTransport, Transport};

pub use types::{
    ContactDetails, DomainOrder, FailoverCheck, NewRecord, ParkedSettings, RecordFields, RecordImport,
    RecordQuery, RecordUpdate, SoaSettings, ZoneQuery,
};

pub struct ClouDnsClient {
    credentials: Credentials,
    dispatcher: Dispatcher,
}

impl ClouDnsClient {
    pub fn new(config: ClientConfig, credentials: Arc<dyn CredentialManager>) -> Result<Self, Error> {
        let transport = HttpTransport::new(&config.api_url, config.timeout)?;
        Self::with_transport(&config, credentials.as_ref(), Arc::new(transport))
    }

    /// Configuration and credentials both from the environment.
    pub fn from_env() -> Result<Self, Error> {
        Self::new(ClientConfig::from_env()?, Arc::new(EnvCredentialManager))
    }

    pub fn with_transport(
        config: &ClientConfig,
        credentials: &dyn CredentialManager,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, Error> {
        Ok(Self {
            credentials: Credentials::from_manager(credentials)?,
            dispatcher: Dispatcher::new(config.max_calls_per_second, transport)?,
        })
    }

    pub(crate) async fn get(&self, path: &str, params: ParameterSet) -> Result<Value, Error> {
        let mut query = self.credentials.to_params();
        query.merge(params);
        self.dispatcher
            .dispatch(path, Method::GET, query, ParameterSet::new())
            .await
    }

    pub(crate) async fn post(&self, path: &str, params: ParameterSet) -> Result<Value, Error> {
        let mut body = self.credentials.to_params();
        body.merge(params);
        self.dispatcher
            .dispatch(path, Method::POST, ParameterSet::new(), body)
            .await
    }

    /// Validates record fields, then posts them in wire form. Nothing is
    /// sent when any field fails.
    pub(crate) async fn post_record(&self, path: &str, record: &ParameterSet) -> Result<Value, Error> {
        check(record)?;
        self.post(path, normalize(record)).await
    }
}

pub(crate) fn check(params: &ParameterSet) -> Result<(), Error> {
    validate(params).into_result().map_err(|violations| {
        warn!("rejected request with {} invalid field(s)", violations.len());
        Error::Validation(violations)
    })
}

pub(crate) fn domain(domain_name: &str) -> ParameterSet {
    ParameterSet::new().with("domain-name", domain_name)
}

pub(crate) fn domain_record(domain_name: &str, record_id: u32) -> ParameterSet {
    domain(domain_name).with("record-id", record_id)
}
