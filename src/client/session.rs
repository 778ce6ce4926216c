//! Login, re-login, and user management.

// self
use crate::{
	_prelude::*,
	auth::{AuthSession, Credentials, Secret},
	client::{CallResult, FalconClient, common},
	http::{ApiHttpClient, HttpMethod},
	model::UserRegistration,
	obs::Resource,
	response::ApiResponse,
};

impl<C> FalconClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Logs in with `username`/`password` and stores the bearer session on success.
	///
	/// The credentials are posted as a form to `/users/token`. On HTTP 200 the session is
	/// replaced and the credentials are kept for [`reauthorize`](Self::reauthorize). Any other
	/// answer leaves the previous session untouched.
	pub async fn authorize(
		&mut self,
		username: &str,
		password: impl Into<Secret>,
	) -> CallResult {
		common::require("username", username)?;

		let credentials = Credentials::new(username, password);

		self.login(credentials).await
	}

	/// Repeats [`authorize`](Self::authorize) with the stored credentials.
	pub async fn reauthorize(&mut self) -> CallResult {
		let credentials = self.credentials.clone().ok_or_else(|| Error::InvalidArgument {
			argument: "credentials",
			reason: "reauthorize requires a prior authorize call".into(),
		})?;

		self.login(credentials).await
	}

	async fn login(&mut self, credentials: Credentials) -> CallResult {
		const FAILURE: &str = "Authorization failed";

		let call = self
			.call(Resource::Users, "authorize", HttpMethod::Post, ["users", "token"])
			.form(credentials.to_form())
			.anonymous()
			.expect(200, "Authorized", FAILURE);
		let response = self.dispatch(call).await;

		if !response.is_success() {
			return Ok(response);
		}

		match AuthSession::from_login_payload(&credentials.username, response.payload()) {
			Ok(session) => {
				self.session = Some(session);
				self.credentials = Some(credentials);

				Ok(response)
			},
			Err(err) => Ok(ApiResponse::failure(
				response.http_status(),
				FAILURE,
				serde_json::Value::String(format!("Malformed token response: {err}")),
			)),
		}
	}

	/// Fetches a user record; `site_code` authorizes the lookup.
	pub async fn get_user(&mut self, user_id: &str, site_code: &str) -> CallResult {
		let user_id = common::require_segment("user_id", user_id)?;
		let site_code = common::require_segment("site_code", site_code)?;
		let call = self
			.call(Resource::Users, "get_user", HttpMethod::Get, ["users", "lookup", user_id, site_code])
			.expect(200, "User retrieved", format!("Unable to retrieve user with id {user_id}"));

		self.send(call).await
	}

	/// Registers a new user; username and email are lowercased and all fields trimmed.
	pub async fn register_user(
		&mut self,
		registration: &UserRegistration,
		site_code: &str,
	) -> CallResult {
		let body = registration.normalized(site_code);

		common::require("username", &body.username)?;

		let call = self
			.call(Resource::Users, "register_user", HttpMethod::Post, ["users", "register"])
			.json(&body)?
			.expect(201, "User registered", "User registration failed");

		self.send(call).await
	}
}
