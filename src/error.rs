use reqwest::StatusCode;
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BasiqError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    #[error("invalid request url: {0}")]
    InvalidUrl(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("api rejected request: {0}")]
    Api(#[from] ApiError),

    #[error("invalid or unexpected response format: {0}")]
    Decode(#[from] serde_json::Error),
}

impl BasiqError {
    /// True when the vendor answered with 401, i.e. the bearer token is missing or expired.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, BasiqError::Api(e) if e.is_unauthorized())
    }

    /// HTTP status of a vendor-reported error.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            BasiqError::Api(e) => Some(e.status),
            BasiqError::Http(e) => e.status(),
            _ => None,
        }
    }
}

/// Error envelope returned by the API for any non-success status.
#[derive(Debug, Clone, Error)]
pub struct ApiError {
    pub status: StatusCode,
    pub kind: String,
    pub correlation_id: String,
    pub data: Vec<ErrorDetail>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ErrorDetail {
    pub code: String,
    pub detail: String,
    pub title: String,
    pub source: ErrorSource,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ErrorSource {
    pub parameter: String,
    pub pointer: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ErrorEnvelope {
    #[serde(rename = "type")]
    kind: String,
    correlation_id: String,
    data: Vec<ErrorDetail>,
}

impl ApiError {
    /// Decode the vendor error body. A body that does not parse still yields an
    /// error carrying the status, just without details.
    pub fn from_response(status: StatusCode, body: &[u8]) -> Self {
        let envelope: ErrorEnvelope = serde_json::from_slice(body).unwrap_or_default();
        Self {
            status,
            kind: envelope.kind,
            correlation_id: envelope.correlation_id,
            data: envelope.data,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == StatusCode::UNAUTHORIZED
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data.first() {
            Some(d) => write!(f, "{}: {}: {}", self.status.as_u16(), d.title, d.detail),
            None => write!(f, "{}: unknown error", self.status.as_u16()),
        }
    }
}
