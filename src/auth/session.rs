//! Session issued by the login endpoint and the credentials that produced it.

// self
use crate::{_prelude::*, auth::Secret, response::Payload};

const DEFAULT_TOKEN_TYPE: &str = "bearer";

/// Username/password pair retained so the session can be re-established.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
	/// Login name sent to the token endpoint.
	pub username: String,
	/// Password sent to the token endpoint.
	pub password: Secret,
}
impl Credentials {
	/// Creates a new credential pair.
	pub fn new(username: impl Into<String>, password: impl Into<Secret>) -> Self {
		Self { username: username.into(), password: password.into() }
	}

	/// Encodes the pair as an `application/x-www-form-urlencoded` login body.
	pub(crate) fn to_form(&self) -> String {
		url::form_urlencoded::Serializer::new(String::new())
			.append_pair("username", &self.username)
			.append_pair("password", self.password.expose())
			.finish()
	}
}
impl Debug for Credentials {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Credentials")
			.field("username", &self.username)
			.field("password", &self.password)
			.finish()
	}
}

/// Authenticated session returned by a successful `authorize` call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthSession {
	/// Username the session was issued for.
	pub username: String,
	/// Server-side identifier of the user, when reported.
	pub user_id: Option<String>,
	/// Token type reported by the server (normally `bearer`).
	pub token_type: String,
	/// Two-factor identifier registered for the user, or empty.
	pub twilio_factor_id: String,
	/// Whether the server flagged the user as an administrator.
	pub is_admin: bool,
	/// Instant the session was established.
	pub issued_at: OffsetDateTime,
	access_token: Secret,
}
impl AuthSession {
	/// Decodes the login endpoint's JSON payload into a session.
	pub(crate) fn from_login_payload(
		username: &str,
		payload: &Payload,
	) -> Result<Self, serde_path_to_error::Error<serde_json::Error>> {
		let grant: TokenGrant =
			serde_path_to_error::deserialize(serde_json::Value::Object(payload.clone()))?;
		let token_type = grant
			.token_type
			.filter(|value| !value.trim().is_empty())
			.unwrap_or_else(|| DEFAULT_TOKEN_TYPE.into());
		let user_id = grant.user_id.and_then(|value| match value {
			serde_json::Value::String(s) => Some(s),
			serde_json::Value::Null => None,
			other => Some(other.to_string()),
		});

		Ok(Self {
			username: username.to_owned(),
			user_id,
			token_type,
			twilio_factor_id: grant.twilio_factor_id.unwrap_or_default(),
			is_admin: grant.is_admin.unwrap_or(false),
			issued_at: OffsetDateTime::now_utc(),
			access_token: grant.access_token,
		})
	}

	/// Returns the raw access token. Callers must avoid logging this string.
	pub fn access_token(&self) -> &Secret {
		&self.access_token
	}

	/// Returns the `Authorization` header value (`{token_type} {access_token}`).
	pub fn authorization(&self) -> Secret {
		Secret::new(format!("{} {}", self.token_type, self.access_token.expose()))
	}
}

/// Wire shape of the login endpoint's success body.
#[derive(Deserialize)]
struct TokenGrant {
	access_token: Secret,
	#[serde(default)]
	token_type: Option<String>,
	#[serde(default)]
	user_id: Option<serde_json::Value>,
	#[serde(default)]
	twilio_factor_id: Option<String>,
	#[serde(default)]
	is_admin: Option<bool>,
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;

	fn payload(value: serde_json::Value) -> Payload {
		match value {
			serde_json::Value::Object(map) => map,
			other => panic!("Fixture must be a JSON object, got {other}."),
		}
	}

	#[test]
	fn login_payload_builds_session() {
		let session = AuthSession::from_login_payload(
			"ada@example.com",
			&payload(json!({
				"access_token": "tok-123",
				"token_type": "Bearer",
				"user_id": 42,
				"is_admin": true,
			})),
		)
		.expect("Login payload should decode.");

		assert_eq!(session.username, "ada@example.com");
		assert_eq!(session.user_id.as_deref(), Some("42"));
		assert_eq!(session.twilio_factor_id, "");
		assert!(session.is_admin);
		assert_eq!(session.authorization().expose(), "Bearer tok-123");
		assert!(!format!("{session:?}").contains("tok-123"));
	}

	#[test]
	fn missing_token_type_defaults_to_bearer() {
		let session = AuthSession::from_login_payload(
			"ada",
			&payload(json!({ "access_token": "abc", "user_id": "u-1", "twilio_factor_id": null })),
		)
		.expect("Login payload without token_type should decode.");

		assert_eq!(session.token_type, "bearer");
		assert_eq!(session.user_id.as_deref(), Some("u-1"));
	}

	#[test]
	fn missing_access_token_reports_path() {
		let err = AuthSession::from_login_payload("ada", &payload(json!({ "token_type": "bearer" })))
			.expect_err("Login payload without access_token must be rejected.");

		assert!(err.to_string().contains("access_token"), "Unexpected error: {err}.");
	}

	#[test]
	fn credentials_form_encodes_and_redacts() {
		let credentials = Credentials::new("ada@example.com", "p&ss word");

		assert_eq!(credentials.to_form(), "username=ada%40example.com&password=p%26ss+word");
		assert!(!format!("{credentials:?}").contains("p&ss"));
	}
}
