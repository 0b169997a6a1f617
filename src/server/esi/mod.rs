//! ESI access for corporation data.
//!
//! [`EntitySource`] is the seam between the cache service and the authoritative API. The
//! production implementation is [`EsiClient`]; tests may substitute their own source to
//! observe call concurrency or inject failures.
//!
//! All payloads are returned as raw JSON and converted by the models in
//! [`crate::server::model::eve`].

mod client;

pub use client::{EsiClient, EsiClientConfig};

use async_trait::async_trait;
use serde_json::Value;

use crate::server::error::esi::EsiError;

/// Authoritative source of corporation data.
#[async_trait]
pub trait EntitySource: Send + Sync {
    /// Fetches public corporation information.
    async fn fetch_corporation(&self, corporation_id: i64) -> Result<Value, EsiError>;

    /// Fetches the character IDs of a corporation's members.
    ///
    /// Requires an access token of the corporation's CEO.
    async fn fetch_members(&self, corporation_id: i64, token: &str) -> Result<Value, EsiError>;

    /// Fetches a corporation's member tracking entries.
    ///
    /// Requires an access token of the corporation's CEO.
    async fn fetch_member_tracking(
        &self,
        corporation_id: i64,
        token: &str,
    ) -> Result<Value, EsiError>;

    /// Fetches a corporation's public alliance history.
    async fn fetch_alliance_history(&self, corporation_id: i64) -> Result<Value, EsiError>;
}
