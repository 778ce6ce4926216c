//! Shared call plumbing: request assembly, dispatch, and result normalization.

// std
use std::borrow::Cow;
// self
use crate::{
	_prelude::*,
	client::{CallResult, FalconClient},
	http::{ApiHttpClient, ApiRequest, HttpMethod, RequestBody},
	model::lookup::non_empty,
	obs::{self, CallOutcome, CallSpan, Resource},
	response::{self, ApiResponse, LastResponse},
};

/// Description of a single façade call, from request to expected status.
#[derive(Debug)]
pub(crate) struct Call {
	resource: Resource,
	operation: &'static str,
	method: HttpMethod,
	url: Url,
	body: RequestBody,
	authenticated: bool,
	expected_status: u16,
	success_message: Cow<'static, str>,
	failure_message: Cow<'static, str>,
	list_key: Option<&'static str>,
}
impl Call {
	pub(crate) fn new(
		resource: Resource,
		operation: &'static str,
		method: HttpMethod,
		url: Url,
	) -> Self {
		Self {
			resource,
			operation,
			method,
			url,
			body: RequestBody::Empty,
			authenticated: true,
			expected_status: 200,
			success_message: Cow::Borrowed(""),
			failure_message: Cow::Borrowed(""),
			list_key: None,
		}
	}

	/// Appends query parameters to the call URL.
	pub(crate) fn query<'a, I>(mut self, pairs: I) -> Self
	where
		I: IntoIterator<Item = (&'a str, &'a str)>,
	{
		self.url.query_pairs_mut().extend_pairs(pairs);

		self
	}

	/// Serializes `body` as the JSON request body.
	pub(crate) fn json<T>(mut self, body: &T) -> Result<Self>
	where
		T: ?Sized + Serialize,
	{
		let bytes = serde_json::to_vec(body)
			.map_err(|source| Error::Encode { operation: self.operation, source })?;

		self.body = RequestBody::Json(bytes);

		Ok(self)
	}

	/// Uses a pre-encoded form body.
	pub(crate) fn form(mut self, form: String) -> Self {
		self.body = RequestBody::Form(form.into());

		self
	}

	/// Sends the call without the session's `Authorization` header.
	pub(crate) fn anonymous(mut self) -> Self {
		self.authenticated = false;

		self
	}

	/// Sets the success status and the messages attached to either outcome.
	pub(crate) fn expect(
		mut self,
		status: u16,
		success: impl Into<Cow<'static, str>>,
		failure: impl Into<Cow<'static, str>>,
	) -> Self {
		self.expected_status = status;
		self.success_message = success.into();
		self.failure_message = failure.into();

		self
	}

	/// Wraps an array success body under `key`.
	pub(crate) fn list_key(mut self, key: &'static str) -> Self {
		self.list_key = Some(key);

		self
	}
}

impl<C> FalconClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Starts a call against `{api_root}/{segments...}`.
	pub(crate) fn call<I, S>(
		&self,
		resource: Resource,
		operation: &'static str,
		method: HttpMethod,
		segments: I,
	) -> Call
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		Call::new(resource, operation, method, self.config.endpoint(segments))
	}

	/// Sends `call`, records the exchange, and normalizes the answer.
	///
	/// Exactly one request is sent. Transport failures are folded into
	/// [`ApiResponse::Failure`] with no status.
	pub(crate) async fn dispatch(&mut self, call: Call) -> ApiResponse {
		let span = CallSpan::new(call.resource, call.operation);

		obs::record_call_outcome(call.resource, CallOutcome::Attempt);

		let authorization = if call.authenticated {
			self.session.as_ref().map(|session| session.authorization())
		} else {
			None
		};
		let request =
			ApiRequest { method: call.method, url: call.url, authorization, body: call.body };
		let http_client = Arc::clone(&self.http_client);
		let outcome = span.instrument(http_client.execute(request.clone())).await;
		let response = match outcome {
			Ok(raw) => {
				self.last_response = Some(LastResponse::received(&request, &raw));

				let body = response::json_or_text(&raw.body);

				if raw.status == call.expected_status {
					let body = match call.list_key {
						Some(key) => response::wrap_list(body, key),
						None => body,
					};

					ApiResponse::success(raw.status, call.success_message, body)
				} else {
					ApiResponse::failure(Some(raw.status), call.failure_message, body)
				}
			},
			Err(err) => {
				obs::log_transport_failure(call.resource, call.operation, &err);

				self.last_response = Some(LastResponse::failed(&request, &err));

				ApiResponse::failure(
					None,
					call.failure_message,
					serde_json::Value::String(err.to_string()),
				)
			},
		};

		obs::record_call_outcome(
			call.resource,
			if response.is_success() { CallOutcome::Success } else { CallOutcome::Failure },
		);

		response
	}

	/// Shorthand for [`dispatch`](Self::dispatch) wrapped in `Ok`.
	pub(crate) async fn send(&mut self, call: Call) -> CallResult {
		Ok(self.dispatch(call).await)
	}
}

/// Rejects an absent or empty required argument before any request is built.
pub(crate) fn require<'a>(argument: &'static str, value: &'a str) -> Result<&'a str> {
	non_empty(Some(value)).ok_or_else(|| Error::missing(argument))
}

/// Like [`require`], but for values placed in the URL path.
///
/// URL normalization drops `.` and `..` segments, which would silently re-route the call, so
/// both are rejected.
pub(crate) fn require_segment<'a>(argument: &'static str, value: &'a str) -> Result<&'a str> {
	match require(argument, value)? {
		"." | ".." => Err(Error::InvalidArgument {
			argument,
			reason: "`.` and `..` are not valid path segments".into(),
		}),
		value => Ok(value),
	}
}
