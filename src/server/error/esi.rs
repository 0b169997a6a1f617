//! ESI client error types.

use thiserror::Error;

/// Errors returned by the ESI client or raised while normalizing its payloads.
#[derive(Error, Debug)]
pub enum EsiError {
    /// Network failure, timeout or undecodable response body.
    #[error(transparent)]
    Request(#[from] reqwest::Error),
    /// ESI answered with a non-success status code.
    #[error("ESI request to {url} failed with status {status}")]
    Status { status: u16, url: String },
    /// A required payload field was missing or could not be coerced to the expected type.
    #[error("ESI payload field `{field}` is missing or has an unexpected type")]
    InvalidPayload { field: String },
}

impl EsiError {
    /// HTTP status of the failed request, if ESI answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request(err) => err.status().map(|status| status.as_u16()),
            Self::Status { status, .. } => Some(*status),
            Self::InvalidPayload { .. } => None,
        }
    }

    /// Returns true when ESI reported that the requested entity does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns true for failures that may succeed later: server errors, rate limiting
    /// and network errors without a status.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::InvalidPayload { .. } => false,
            _ => match self.status() {
                Some(status) => status >= 500 || status == 420 || status == 429,
                None => true,
            },
        }
    }

    pub(crate) fn missing_field(field: &str) -> Self {
        Self::InvalidPayload {
            field: field.to_string(),
        }
    }
}
