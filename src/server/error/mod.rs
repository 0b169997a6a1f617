//! Error types for the cache service.
//!
//! This module provides the error handling system with specialized error types for each
//! domain (configuration, ESI interaction, cached entity operations). All errors use
//! `thiserror` for `Display`/`Error` implementations and convert into the top-level [`Error`]
//! through `#[from]`, so `?` works across layers.

pub mod config;
pub mod entity;
pub mod esi;

use thiserror::Error;

use crate::server::error::{config::ConfigError, entity::EntityError, esi::EsiError};

/// Main error type for the cache service.
///
/// Aggregates all domain-specific error types and external library errors into a single
/// type. Use [`Error::class`] at an outer boundary to tell a missing resource apart from a
/// refused request or a server-side failure.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Cached entity error (missing record, authorization gate, credentials, bulk refresh).
    #[error(transparent)]
    EntityError(#[from] EntityError),
    /// ESI request or payload error.
    #[error(transparent)]
    EsiError(#[from] EsiError),
    /// Internal error indicating a bug in the service's code.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Cron scheduler error (job registration, scheduler startup).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
}

/// Coarse classification of an [`Error`] for callers at an outer boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The requested entity does not exist (404-equivalent).
    NotFound,
    /// The caller is not allowed to perform the operation or lacks a usable credential.
    Forbidden,
    /// A dependency (ESI, database connection) is temporarily unavailable.
    Unavailable,
    /// Any other failure.
    Internal,
}

impl Error {
    /// Classifies the error for the caller.
    ///
    /// ESI 404 responses are classified as [`ErrorClass::NotFound`], ESI 5xx/429 and
    /// network failures as [`ErrorClass::Unavailable`].
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::EntityError(err) => err.class(),
            Self::EsiError(err) => {
                if err.is_not_found() {
                    ErrorClass::NotFound
                } else if err.is_transient() {
                    ErrorClass::Unavailable
                } else {
                    ErrorClass::Internal
                }
            }
            Self::DbErr(sea_orm::DbErr::ConnectionAcquire(_))
            | Self::DbErr(sea_orm::DbErr::Conn(_)) => ErrorClass::Unavailable,
            _ => ErrorClass::Internal,
        }
    }
}
