//! Uniform call results and the normalization rules that produce them.
//!
//! Every façade operation yields an [`ApiResponse`]: a tagged success/failure carrying the HTTP
//! status, a short message, and a JSON-object payload. Bodies are normalized so callers can
//! always index the payload as an object:
//!
//! - a JSON object is used as is;
//! - list endpoints wrap an array under a resource key (`{"trackers": [...]}`);
//! - any other success body is wrapped as `{"value": ...}`;
//! - any other failure body is wrapped as `{"error": ...}`;
//! - non-JSON bodies are carried as a JSON string.

// crates.io
use serde_json::Value;
// self
use crate::{
	_prelude::*,
	http::{ApiRequest, HttpMethod, RawResponse},
};

/// JSON object carried by every [`ApiResponse`].
pub type Payload = serde_json::Map<String, Value>;

/// Outcome of a single façade call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ApiResponse {
	/// The service answered with the status the operation expects.
	Success {
		/// HTTP status code.
		http_status: u16,
		/// Short description of what happened.
		message: String,
		/// Normalized response body.
		payload: Payload,
	},
	/// The service answered with any other status, or no answer was received.
	Failure {
		/// HTTP status code; `None` when the transport failed before a response arrived.
		http_status: Option<u16>,
		/// Short description of what failed.
		message: String,
		/// Normalized error detail.
		payload: Payload,
	},
}
impl ApiResponse {
	/// Builds a success result, normalizing `body` into an object payload.
	pub fn success(http_status: u16, message: impl Into<String>, body: Value) -> Self {
		Self::Success { http_status, message: message.into(), payload: into_payload(body, "value") }
	}

	/// Builds a failure result, normalizing `body` into an object payload.
	pub fn failure(http_status: Option<u16>, message: impl Into<String>, body: Value) -> Self {
		Self::Failure { http_status, message: message.into(), payload: into_payload(body, "error") }
	}

	/// Returns `true` for [`ApiResponse::Success`].
	pub fn is_success(&self) -> bool {
		matches!(self, Self::Success { .. })
	}

	/// Returns the HTTP status, if a response was received.
	pub fn http_status(&self) -> Option<u16> {
		match self {
			Self::Success { http_status, .. } => Some(*http_status),
			Self::Failure { http_status, .. } => *http_status,
		}
	}

	/// Returns the result message.
	pub fn message(&self) -> &str {
		match self {
			Self::Success { message, .. } | Self::Failure { message, .. } => message,
		}
	}

	/// Returns the normalized payload.
	pub fn payload(&self) -> &Payload {
		match self {
			Self::Success { payload, .. } | Self::Failure { payload, .. } => payload,
		}
	}

	/// Consumes the result and returns its payload.
	pub fn into_payload(self) -> Payload {
		match self {
			Self::Success { payload, .. } | Self::Failure { payload, .. } => payload,
		}
	}

	/// Classifies a failure by status; `None` for successes.
	pub fn failure_kind(&self) -> Option<FailureKind> {
		match self {
			Self::Success { .. } => None,
			Self::Failure { http_status, .. } => Some(FailureKind::from_status(*http_status)),
		}
	}

	/// Converts into a standard `Result`, keeping the whole failure on the error side.
	pub fn into_result(self) -> Result<Payload, Self> {
		match self {
			Self::Success { payload, .. } => Ok(payload),
			failure => Err(failure),
		}
	}
}
impl Display for ApiResponse {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self.http_status() {
			Some(status) => write!(f, "{} (HTTP {status})", self.message()),
			None => write!(f, "{} (no response)", self.message()),
		}
	}
}

/// Coarse failure classes derived from the service's status-code contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FailureKind {
	/// 401: missing, invalid, or expired credentials.
	Unauthorized,
	/// 404: the addressed record does not exist.
	NotFound,
	/// 409: duplicate id or version conflict.
	Conflict,
	/// 5xx: the service failed.
	ServerError,
	/// Any other unexpected status.
	Rejected,
	/// No response was received.
	Transport,
}
impl FailureKind {
	/// Maps an optional HTTP status to its class.
	pub fn from_status(status: Option<u16>) -> Self {
		match status {
			None => Self::Transport,
			Some(401) => Self::Unauthorized,
			Some(404) => Self::NotFound,
			Some(409) => Self::Conflict,
			Some(500..=599) => Self::ServerError,
			Some(_) => Self::Rejected,
		}
	}

	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			FailureKind::Unauthorized => "unauthorized",
			FailureKind::NotFound => "not_found",
			FailureKind::Conflict => "conflict",
			FailureKind::ServerError => "server_error",
			FailureKind::Rejected => "rejected",
			FailureKind::Transport => "transport",
		}
	}
}
impl Display for FailureKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Snapshot of the most recently completed exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LastResponse {
	/// Verb of the request.
	pub method: HttpMethod,
	/// Absolute request URL.
	pub url: Url,
	/// HTTP status; `None` when the transport failed.
	pub status: Option<u16>,
	/// `Content-Type` of the response, when present.
	pub content_type: Option<String>,
	/// Response body decoded as (lossy) UTF-8.
	pub body: String,
	/// Transport error text when no response was received.
	pub transport_error: Option<String>,
	/// Instant the exchange completed.
	pub completed_at: OffsetDateTime,
}
impl LastResponse {
	pub(crate) fn received(request: &ApiRequest, raw: &RawResponse) -> Self {
		Self {
			method: request.method,
			url: request.url.clone(),
			status: Some(raw.status),
			content_type: raw.content_type.clone(),
			body: String::from_utf8_lossy(&raw.body).into_owned(),
			transport_error: None,
			completed_at: OffsetDateTime::now_utc(),
		}
	}

	pub(crate) fn failed(request: &ApiRequest, error: &dyn StdError) -> Self {
		Self {
			method: request.method,
			url: request.url.clone(),
			status: None,
			content_type: None,
			body: String::new(),
			transport_error: Some(error.to_string()),
			completed_at: OffsetDateTime::now_utc(),
		}
	}

	/// Parses the body as JSON, if possible.
	pub fn json(&self) -> Option<Value> {
		serde_json::from_str(&self.body).ok()
	}
}

/// Decodes a body as JSON, falling back to a JSON string of the (lossy) text.
pub fn json_or_text(body: &[u8]) -> Value {
	serde_json::from_slice(body)
		.unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
}

/// Wraps an array body under `key`, leaving other shapes untouched.
pub(crate) fn wrap_list(body: Value, key: &str) -> Value {
	match body {
		Value::Array(items) => {
			let mut map = Payload::new();

			map.insert(key.to_owned(), Value::Array(items));

			Value::Object(map)
		},
		other => other,
	}
}

fn into_payload(body: Value, wrap_key: &str) -> Payload {
	match body {
		Value::Object(map) => map,
		other => {
			let mut map = Payload::new();

			map.insert(wrap_key.to_owned(), other);

			map
		},
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;

	#[test]
	fn object_bodies_pass_through() {
		let response = ApiResponse::success(200, "Document retrieved", json!({ "id": "doc-1" }));

		assert!(response.is_success());
		assert_eq!(response.http_status(), Some(200));
		assert_eq!(response.payload()["id"], "doc-1");
		assert_eq!(response.failure_kind(), None);
	}

	#[test]
	fn scalar_bodies_are_wrapped_by_outcome() {
		let ok = ApiResponse::success(200, "ok", json!(7));
		let err = ApiResponse::failure(Some(500), "boom", json!("Internal Server Error"));

		assert_eq!(ok.payload()["value"], 7);
		assert_eq!(err.payload()["error"], "Internal Server Error");
		assert_eq!(err.failure_kind(), Some(FailureKind::ServerError));
	}

	#[test]
	fn list_bodies_wrap_under_key() {
		let wrapped = wrap_list(json!([{ "id": "123" }]), "trackers");

		assert_eq!(wrapped, json!({ "trackers": [{ "id": "123" }] }));
		assert_eq!(wrap_list(json!({ "id": "x" }), "clients"), json!({ "id": "x" }));
	}

	#[test]
	fn non_json_bodies_become_strings() {
		assert_eq!(json_or_text(b"{\"detail\":\"Not found\"}"), json!({ "detail": "Not found" }));
		assert_eq!(json_or_text(b"Bad Gateway"), json!("Bad Gateway"));
		assert_eq!(json_or_text(b""), json!(""));
	}

	#[test]
	fn failure_kinds_follow_status_contract() {
		assert_eq!(FailureKind::from_status(None), FailureKind::Transport);
		assert_eq!(FailureKind::from_status(Some(401)), FailureKind::Unauthorized);
		assert_eq!(FailureKind::from_status(Some(404)), FailureKind::NotFound);
		assert_eq!(FailureKind::from_status(Some(409)), FailureKind::Conflict);
		assert_eq!(FailureKind::from_status(Some(503)), FailureKind::ServerError);
		assert_eq!(FailureKind::from_status(Some(422)), FailureKind::Rejected);
	}

	#[test]
	fn serialized_shape_is_tagged() {
		let response = ApiResponse::failure(Some(409), "Document addition failed", json!({
			"detail": "Document already exists: doc-1",
		}));
		let value = serde_json::to_value(&response).expect("Response should serialize.");

		assert_eq!(value["outcome"], "failure");
		assert_eq!(value["http_status"], 409);
		assert_eq!(response.to_string(), "Document addition failed (HTTP 409)");
		assert_eq!(
			response.clone().into_result().expect_err("Failure must map to Err."),
			response
		);
	}
}
