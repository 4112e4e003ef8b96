//! Error types for the Netbanx gateway.
//!
//! Only exceptional conditions live here. Expected business results of a
//! checkout attempt (declines, validation failures, an unavailable
//! processor) are modelled by [`AuthorizationOutcome`](crate::models::outcome::AuthorizationOutcome)
//! and never surface as `Err`.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GatewayError>;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// Credentials or other settings are unusable.
    #[error("invalid gateway configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid API URL `{url}`: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("failed to read config file: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Failure talking to the processor. Folded into
/// `AuthorizationOutcome::TransportError` by the client.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("response from {url} is not valid JSON: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("response from {url} carries neither a transaction id nor an error")]
    UnexpectedBody { url: String },
}

#[derive(Debug, Error)]
pub enum OrderStoreError {
    #[error("order {0} not found")]
    NotFound(u64),

    #[error("order store unavailable: {0}")]
    Unavailable(String),
}
