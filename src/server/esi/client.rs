//! HTTP client for ESI corporation endpoints.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use serde_json::Value;

use crate::server::{error::esi::EsiError, esi::EntitySource};

/// Connection settings for [`EsiClient`].
#[derive(Debug, Clone)]
pub struct EsiClientConfig {
    /// Base URL without trailing slash, e.g. `https://esi.evetech.net/latest`
    pub base_url: String,
    /// User agent sent with every request, ESI asks for contact information
    pub user_agent: String,
    pub timeout: Duration,
}

/// ESI client returning raw JSON payloads.
#[derive(Clone)]
pub struct EsiClient {
    client: Client,
    base_url: String,
}

impl EsiClient {
    /// Builds a new client.
    ///
    /// # Returns
    /// - `Ok(EsiClient)` - Client ready to use
    /// - `Err(EsiError::Request)` - The underlying HTTP client could not be built
    pub fn new(config: EsiClientConfig) -> Result<Self, EsiError> {
        let client = Client::builder()
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get(&self, path: &str, token: Option<&str>) -> Result<Value, EsiError> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self
            .client
            .get(&url)
            .header(header::ACCEPT, "application/json");
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            tracing::debug!(url = %url, status = %status, "ESI request failed");

            return Err(EsiError::Status {
                status: status.as_u16(),
                url,
            });
        }

        Ok(response.json::<Value>().await?)
    }
}

#[async_trait]
impl EntitySource for EsiClient {
    async fn fetch_corporation(&self, corporation_id: i64) -> Result<Value, EsiError> {
        self.get(&format!("/corporations/{}", corporation_id), None)
            .await
    }

    async fn fetch_members(&self, corporation_id: i64, token: &str) -> Result<Value, EsiError> {
        self.get(
            &format!("/corporations/{}/members", corporation_id),
            Some(token),
        )
        .await
    }

    async fn fetch_member_tracking(
        &self,
        corporation_id: i64,
        token: &str,
    ) -> Result<Value, EsiError> {
        self.get(
            &format!("/corporations/{}/membertracking", corporation_id),
            Some(token),
        )
        .await
    }

    async fn fetch_alliance_history(&self, corporation_id: i64) -> Result<Value, EsiError> {
        self.get(
            &format!("/corporations/{}/alliancehistory", corporation_id),
            None,
        )
        .await
    }
}

impl std::fmt::Debug for EsiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EsiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}
