use crate::core::validation::FieldViolation;
use reqwest::Method;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation failed: {}", join_violations(.0))]
    Validation(Vec<FieldViolation>),

    #[error("ClouDNS API error: {status} - {description}")]
    Api { status: String, description: String },

    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(Method),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Credential error: {0}")]
    Credential(String),

    #[error("Credential not set: {0}")]
    MissingCredential(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
