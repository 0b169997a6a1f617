//! ESI mock endpoint creation utilities.
//!
//! Endpoints are registered with the mockito server and verify they were called the
//! expected number of times when asserted.

use mockito::{Matcher, Mock};
use serde_json::Value;

use crate::{constant::TEST_ACCESS_TOKEN, fixtures::eve::EveFixtures};

impl<'a> EveFixtures<'a> {
    /// Create a mock endpoint at `/corporations/{corporation_id}`.
    ///
    /// # Arguments
    /// - `corporation_id` - The corporation ID for the endpoint path
    /// - `payload` - JSON body to return
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_corporation_endpoint(
        &mut self,
        corporation_id: i64,
        payload: Value,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/corporations/{}", corporation_id);

        self.create_json_endpoint(&url, payload, None, expected_requests)
    }

    /// Create a mock endpoint at `/corporations/{corporation_id}/members`.
    ///
    /// Only matches requests carrying the test access token as bearer token.
    pub fn create_members_endpoint(
        &mut self,
        corporation_id: i64,
        payload: Value,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/corporations/{}/members", corporation_id);

        self.create_json_endpoint(&url, payload, Some(TEST_ACCESS_TOKEN), expected_requests)
    }

    /// Create a mock endpoint at `/corporations/{corporation_id}/membertracking`.
    ///
    /// Only matches requests carrying the test access token as bearer token.
    pub fn create_member_tracking_endpoint(
        &mut self,
        corporation_id: i64,
        payload: Value,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/corporations/{}/membertracking", corporation_id);

        self.create_json_endpoint(&url, payload, Some(TEST_ACCESS_TOKEN), expected_requests)
    }

    /// Create a mock endpoint at `/corporations/{corporation_id}/alliancehistory`.
    pub fn create_alliance_history_endpoint(
        &mut self,
        corporation_id: i64,
        payload: Value,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/corporations/{}/alliancehistory", corporation_id);

        self.create_json_endpoint(&url, payload, None, expected_requests)
    }

    /// Create a mock endpoint answering `GET path` with an error status.
    pub fn create_error_endpoint(
        &mut self,
        path: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", path)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":"mock error"}"#)
            .expect(expected_requests)
            .create()
    }

    fn create_json_endpoint(
        &mut self,
        path: &str,
        payload: Value,
        bearer_token: Option<&str>,
        expected_requests: usize,
    ) -> Mock {
        let mut mock = self.setup.server.mock("GET", path);
        if let Some(token) = bearer_token {
            mock = mock.match_header("authorization", Matcher::Exact(format!("Bearer {}", token)));
        }

        mock.with_status(200)
            .with_header("content-type", "application/json")
            .with_body(payload.to_string())
            .expect(expected_requests)
            .create()
    }
}
