//! The request façade: one HTTP round trip per operation, one [`ApiResponse`] per round trip.
//!
//! Operations are grouped by resource in submodules, each adding an `impl` block to
//! [`FalconClient`]. Every operation takes `&mut self` because it overwrites the client's
//! last-response snapshot, so a client handles one call at a time.

pub mod clients;
pub mod documents;
pub mod jobs;
pub mod session;
pub mod trackers;

mod common;

// self
use crate::{
	_prelude::*,
	auth::{AuthSession, Credentials},
	config::ClientConfig,
	http::ApiHttpClient,
	response::{ApiResponse, LastResponse},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestFalconClient = FalconClient<ReqwestHttpClient>;

/// Falcon API client holding the configuration, session, and last exchange.
pub struct FalconClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// HTTP client wrapper used for every outbound request.
	pub http_client: Arc<C>,
	/// Validated endpoint configuration.
	pub config: ClientConfig,
	session: Option<AuthSession>,
	credentials: Option<Credentials>,
	last_response: Option<LastResponse>,
}
impl<C> FalconClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Creates a client that reuses the caller-provided transport.
	pub fn with_http_client(config: ClientConfig, http_client: impl Into<Arc<C>>) -> Self {
		Self {
			http_client: http_client.into(),
			config,
			session: None,
			credentials: None,
			last_response: None,
		}
	}

	/// Returns the active session, if `authorize` has succeeded.
	pub fn session(&self) -> Option<&AuthSession> {
		self.session.as_ref()
	}

	/// Returns `true` once a session token is held.
	pub fn is_authorized(&self) -> bool {
		self.session.is_some()
	}

	/// Returns the username of the active session.
	pub fn username(&self) -> Option<&str> {
		self.session.as_ref().map(|session| session.username.as_str())
	}

	/// Returns a snapshot of the most recently completed exchange.
	pub fn last_response(&self) -> Option<&LastResponse> {
		self.last_response.as_ref()
	}

	/// Drops the session token and stored credentials.
	pub fn sign_out(&mut self) {
		self.session = None;
		self.credentials = None;
	}
}
#[cfg(feature = "reqwest")]
impl FalconClient<ReqwestHttpClient> {
	/// Creates a new client backed by a reqwest transport configured from `config`.
	pub fn new(config: ClientConfig) -> Result<Self> {
		let mut builder = ReqwestClient::builder().user_agent(config.user_agent.clone());

		if let Some(timeout) = config.timeout {
			builder = builder.timeout(timeout);
		}

		let client = builder.build().map_err(crate::error::ConfigError::from)?;

		Ok(Self::with_http_client(config, ReqwestHttpClient::with_client(client)))
	}

	/// Parses `base_url`, applies default settings, and creates a reqwest-backed client.
	pub fn connect(base_url: &str) -> Result<Self> {
		Self::new(ClientConfig::parse(base_url)?)
	}
}
impl<C> Debug for FalconClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("FalconClient")
			.field("api_root", &self.config.api_root().as_str())
			.field("username", &self.username())
			.field("authorized", &self.is_authorized())
			.field("last_status", &self.last_response.as_ref().and_then(|last| last.status))
			.finish()
	}
}

/// Result alias for façade operations: local failures on the `Err` side, every remote answer
/// (and transport failure) as an [`ApiResponse`].
pub type CallResult = Result<ApiResponse>;

#[cfg(test)]
mod tests {
	// std
	use std::{collections::VecDeque, sync::Mutex};
	// crates.io
	use serde_json::json;
	// self
	use super::*;
	use crate::{
		http::{HttpFuture, HttpMethod, RawResponse},
		response::FailureKind,
	};

	#[derive(Debug)]
	struct Unreachable;
	impl Display for Unreachable {
		fn fmt(&self, f: &mut Formatter) -> FmtResult {
			f.write_str("connection refused")
		}
	}
	impl StdError for Unreachable {}

	/// Replays scripted answers and records every request it receives.
	#[derive(Default)]
	struct ScriptedHttpClient {
		answers: Mutex<VecDeque<Option<RawResponse>>>,
		requests: Mutex<Vec<crate::http::ApiRequest>>,
	}
	impl ScriptedHttpClient {
		fn answer(self, status: u16, body: serde_json::Value) -> Self {
			self.answers.lock().expect("Answers lock poisoned.").push_back(Some(RawResponse {
				status,
				content_type: Some("application/json".into()),
				body: body.to_string().into_bytes(),
			}));

			self
		}

		fn unreachable(self) -> Self {
			self.answers.lock().expect("Answers lock poisoned.").push_back(None);

			self
		}

		fn requests(&self) -> Vec<crate::http::ApiRequest> {
			self.requests.lock().expect("Requests lock poisoned.").clone()
		}
	}
	impl ApiHttpClient for ScriptedHttpClient {
		type TransportError = Unreachable;

		fn execute(
			&self,
			request: crate::http::ApiRequest,
		) -> HttpFuture<'_, RawResponse, Self::TransportError> {
			self.requests.lock().expect("Requests lock poisoned.").push(request);

			let next = self.answers.lock().expect("Answers lock poisoned.").pop_front().flatten();

			Box::pin(async move { next.ok_or(Unreachable) })
		}
	}

	fn client(http: ScriptedHttpClient) -> (FalconClient<ScriptedHttpClient>, Arc<ScriptedHttpClient>) {
		let http = Arc::new(http);
		let config =
			ClientConfig::parse("https://falcon.example.com").expect("Fixture config should build.");

		(FalconClient::with_http_client(config, Arc::clone(&http)), http)
	}

	#[tokio::test]
	async fn get_document_without_keys_sends_nothing() {
		let (mut client, http) = client(ScriptedHttpClient::default());
		let err = client
			.get_document(None, Some(""))
			.await
			.expect_err("Lookup without keys must be rejected locally.");

		assert!(matches!(err, Error::InvalidArgument { .. }));
		assert!(http.requests().is_empty());
		assert!(client.last_response().is_none());
	}

	#[tokio::test]
	async fn dot_segments_in_path_ids_are_rejected_before_sending() {
		let (mut client, http) = client(ScriptedHttpClient::default());

		assert!(matches!(
			client.delete_client("..").await,
			Err(Error::InvalidArgument { argument: "client_id", .. })
		));
		assert!(matches!(
			client.get_user("..", "SITE-7").await,
			Err(Error::InvalidArgument { argument: "user_id", .. })
		));
		assert!(matches!(
			client.get_tracker_categories("..").await,
			Err(Error::InvalidArgument { argument: "tracker_id", .. })
		));
		assert!(matches!(
			client.link_document(".", "doc-1").await,
			Err(Error::InvalidArgument { argument: "tracker_id", .. })
		));
		assert!(matches!(
			client.add_authorized_user("client-1", "..").await,
			Err(Error::InvalidArgument { argument: "username", .. })
		));
		assert!(http.requests().is_empty());
		assert!(client.last_response().is_none());
	}

	#[tokio::test]
	async fn authorize_attaches_bearer_to_later_calls() {
		let (mut client, http) = client(
			ScriptedHttpClient::default()
				.answer(200, json!({
					"access_token": "tok-1",
					"token_type": "bearer",
					"user_id": "u-1",
				}))
				.answer(200, json!({ "id": "doc-1" })),
		);
		let login = client.authorize("ada", "pw").await.expect("Authorize should be sent.");

		assert!(login.is_success());
		assert_eq!(login.message(), "Authorized");
		assert_eq!(client.username(), Some("ada"));

		let fetched = client
			.get_document(Some("doc-1"), Some("x:\\ignored.pdf"))
			.await
			.expect("Lookup should be sent.");

		assert_eq!(fetched.payload()["id"], "doc-1");

		let requests = http.requests();

		assert_eq!(requests.len(), 2);
		assert_eq!(requests[0].authorization, None);
		assert_eq!(requests[0].method, HttpMethod::Post);
		assert_eq!(requests[0].url.path(), "/api/v1_0/users/token");
		assert_eq!(
			requests[1].authorization.as_ref().map(|value| value.expose()),
			Some("bearer tok-1")
		);
		assert_eq!(requests[1].url.query(), Some("doc_id=doc-1"));
		assert!(!format!("{client:?}").contains("tok-1"));
	}

	#[tokio::test]
	async fn failed_login_keeps_client_anonymous() {
		let (mut client, http) = client(
			ScriptedHttpClient::default()
				.answer(401, json!({ "detail": "Incorrect username or password" }))
				.answer(401, json!({ "detail": "Not authenticated" })),
		);
		let login = client.authorize("ada", "wrong").await.expect("Authorize should be sent.");

		assert_eq!(login.failure_kind(), Some(FailureKind::Unauthorized));
		assert_eq!(login.payload()["detail"], "Incorrect username or password");
		assert!(!client.is_authorized());

		let response = client.get_tracker("123").await.expect("Lookup should be sent.");

		assert_eq!(response.http_status(), Some(401));
		assert_eq!(http.requests()[1].authorization, None);
		assert!(matches!(
			client.reauthorize().await,
			Err(Error::InvalidArgument { argument: "credentials", .. })
		));
	}

	#[tokio::test]
	async fn malformed_login_body_is_a_failure() {
		let (mut client, _http) =
			client(ScriptedHttpClient::default().answer(200, json!({ "token_type": "bearer" })));
		let login = client.authorize("ada", "pw").await.expect("Authorize should be sent.");

		assert!(!login.is_success());
		assert_eq!(login.http_status(), Some(200));
		assert!(!client.is_authorized());
	}

	#[tokio::test]
	async fn transport_failures_surface_as_failures() {
		let (mut client, _http) = client(ScriptedHttpClient::default().unreachable());
		let response =
			client.delete_document("doc-1", true).await.expect("Delete should be attempted.");

		assert_eq!(response.http_status(), None);
		assert_eq!(response.failure_kind(), Some(FailureKind::Transport));
		assert_eq!(response.message(), "Document deletion failed");
		assert_eq!(response.payload()["error"], "connection refused");

		let last = client.last_response().expect("Transport failure should be recorded.");

		assert_eq!(last.status, None);
		assert_eq!(last.transport_error.as_deref(), Some("connection refused"));
		assert_eq!(last.url.query(), Some("doc_id=doc-1&cascade=true"));
	}

	#[tokio::test]
	async fn last_response_tracks_latest_call() {
		let (mut client, _http) = client(
			ScriptedHttpClient::default()
				.answer(201, json!({ "message": "Document added", "id": "doc-1" }))
				.answer(409, json!({ "detail": "Document already exists: doc-1" })),
		);
		let doc = crate::model::Document::new().with("id", "doc-1");

		assert!(client.add_document(&doc).await.expect("Add should be sent.").is_success());
		assert_eq!(client.last_response().and_then(|last| last.status), Some(201));

		let conflict = client.add_document(&doc).await.expect("Add should be sent.");

		assert_eq!(conflict.failure_kind(), Some(FailureKind::Conflict));

		let last = client.last_response().expect("Exchange should be recorded.");

		assert_eq!(last.status, Some(409));
		assert_eq!(last.json().expect("Body should be JSON.")["detail"], "Document already exists: doc-1");

		client.get_document(None, None).await.expect_err("Lookup without keys must fail.");

		assert_eq!(client.last_response().and_then(|last| last.status), Some(409));
	}
}
