//! Client for the ClouDNS HTTP API.
//!
//! Requests go through three stages: record fields are checked by the
//! validator, re-keyed into the wire vocabulary by the field normalizer, and
//! sent through a rate-limited dispatcher that keeps a fixed minimum spacing
//! between calls.
//!
//! ```no_run
//! use std::sync::Arc;
//! use cloudns_client::{ClientConfig, ClouDnsClient, NewRecord, RecordType};
//! use cloudns_client::auth::credentials::{AUTH_ID, AUTH_PASSWORD, StaticCredentialManager};
//!
//! # async fn run() -> Result<(), cloudns_client::Error> {
//! let creds = StaticCredentialManager::new()
//!     .with(AUTH_ID, "1234")
//!     .with(AUTH_PASSWORD, "secret");
//! let client = ClouDnsClient::new(ClientConfig::default(), Arc::new(creds))?;
//! let record = NewRecord::new("example.com", RecordType::A, "1.1.1.1").host("www");
//! client.add_record(&record).await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod core;
pub mod dispatcher;
pub mod error;
pub mod rate_limit;
pub mod transport;

pub use api::{
    ClouDnsClient, ContactDetails, DomainOrder, FailoverCheck, NewRecord, ParkedSettings, RecordFields,
    RecordImport, RecordQuery, RecordUpdate, SoaSettings, ZoneQuery,
};
pub use config::ClientConfig;
pub use core::{ParamValue, ParameterSet, RecordType, ValidationOutcome, ZoneType};
pub use error::Error;
