//! Shared helpers for the integration tests.

#![allow(dead_code)]

// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use falcon_client::{_preludet::*, client::ReqwestFalconClient};

pub const ACCESS_TOKEN: &str = "it-access-token";
pub const USERNAME: &str = "ada";
pub const PASSWORD: &str = "correct horse";

/// Builds a reqwest-backed client pointed at `server`.
pub fn client_for(server: &MockServer) -> ReqwestFalconClient {
	build_reqwest_test_client(&server.base_url())
}

/// Mounts a successful `/users/token` exchange for [`USERNAME`]/[`PASSWORD`].
pub async fn mock_login(server: &MockServer) -> httpmock::Mock<'_> {
	server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/api/v1_0/users/token")
				.form_urlencoded_tuple("username", USERNAME)
				.form_urlencoded_tuple("password", PASSWORD);
			then.status(200).json_body(json!({
				"access_token": ACCESS_TOKEN,
				"token_type": "bearer",
				"user_id": "user-1",
				"is_admin": false,
			}));
		})
		.await
}

/// Returns a client that already holds a session against `server`.
pub async fn authorized_client(server: &MockServer) -> ReqwestFalconClient {
	let login = mock_login(server).await;
	let mut client = client_for(server);
	let response =
		client.authorize(USERNAME, PASSWORD).await.expect("Authorize should be sent.");

	assert!(response.is_success(), "Login fixture should succeed: {response}");
	login.assert_calls_async(1).await;

	client
}

/// Expected `Authorization` header value for the fixture session.
pub fn bearer() -> String {
	format!("bearer {ACCESS_TOKEN}")
}
