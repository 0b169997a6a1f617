//! Errors raised by cached entity operations.

use thiserror::Error;

use crate::server::error::ErrorClass;

/// Errors for corporation cache operations that are not plain I/O failures.
#[derive(Error, Debug)]
pub enum EntityError {
    /// The corporation is not present in the cache.
    #[error("Corporation {0} is not cached")]
    CorporationNotFound(i64),

    /// The claimed principal does not match the corporation's recorded CEO.
    ///
    /// # Fields
    /// - `corporation_id` - Corporation the request was made for
    /// - `claimed_id` - Principal the caller claimed to act as
    /// - `recorded_id` - CEO stored on the cached record, if any
    #[error(
        "Character {claimed_id} is not the recorded CEO of corporation {corporation_id} \
         (recorded: {recorded_id:?})"
    )]
    AuthorizationMismatch {
        corporation_id: i64,
        claimed_id: i64,
        recorded_id: Option<i64>,
    },

    /// No credential exists for the principal.
    #[error("No credential found for character {0}")]
    MissingCredential(i64),

    /// A credential exists but its token is empty or flagged invalid.
    #[error("Credential for character {0} is invalid")]
    InvalidCredential(i64),

    /// One or more jobs of a bulk refresh failed; all other jobs still ran.
    #[error("Bulk refresh finished with {failed} failure(s) out of {total} corporation(s)")]
    BulkRefreshPartialFailure { failed: usize, total: usize },
}

impl EntityError {
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::CorporationNotFound(_) => ErrorClass::NotFound,
            Self::AuthorizationMismatch { .. }
            | Self::MissingCredential(_)
            | Self::InvalidCredential(_) => ErrorClass::Forbidden,
            Self::BulkRefreshPartialFailure { .. } => ErrorClass::Internal,
        }
    }
}
