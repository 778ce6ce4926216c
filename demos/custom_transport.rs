//! Demonstrates plugging a non-reqwest transport into [`FalconClient`].
//!
//! 1. Implement [`ApiHttpClient`] so it returns the raw status and body of every request.
//! 2. Report connection-level problems through the transport's own error type.
//! 3. Hand the transport to [`FalconClient::with_http_client`]; status interpretation stays with
//!    the client.

// std
use std::{
	error::Error as StdError,
	fmt::{Display, Formatter, Result as FmtResult},
};
// crates.io
use color_eyre::Result;
use serde_json::json;
// self
use falcon_client::{
	client::FalconClient,
	config::ClientConfig,
	http::{ApiHttpClient, ApiRequest, HttpFuture, HttpMethod, RawResponse},
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let config = ClientConfig::parse("https://falcon.example.com")?;
	let mut client = <FalconClient<CannedHttpClient>>::with_http_client(
		config.clone(),
		CannedHttpClient { offline: false },
	);

	println!("Login through the canned transport: {}.", client.authorize("ada", "pw").await?);
	println!("Trackers: {}.", client.get_trackers(None).await?.payload()["trackers"]);

	let mut offline =
		<FalconClient<CannedHttpClient>>::with_http_client(config, CannedHttpClient { offline: true });
	let response = offline.get_tracker("t-1").await?;

	println!(
		"Offline transport surfaced as {:?} with payload {}.",
		response.failure_kind(),
		response.payload()["error"]
	);

	Ok(())
}

#[derive(Debug)]
struct OfflineError;
impl Display for OfflineError {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("network is unreachable")
	}
}
impl StdError for OfflineError {}

struct CannedHttpClient {
	offline: bool,
}
impl ApiHttpClient for CannedHttpClient {
	type TransportError = OfflineError;

	fn execute(&self, request: ApiRequest) -> HttpFuture<'_, RawResponse, Self::TransportError> {
		let offline = self.offline;

		Box::pin(async move {
			if offline {
				return Err(OfflineError);
			}

			let (status, body) = match (request.method, request.url.path()) {
				(HttpMethod::Post, "/api/v1_0/users/token") =>
					(200, json!({ "access_token": "canned", "token_type": "bearer" })),
				(HttpMethod::Get, "/api/v1_0/trackers/user") if request.authorization.is_some() =>
					(200, json!([{ "id": "t-1", "name": "BOA 2023" }])),
				_ => (401, json!({ "detail": "Not authenticated" })),
			};

			Ok(RawResponse {
				status,
				content_type: Some("application/json".into()),
				body: body.to_string().into_bytes(),
			})
		})
	}
}
