//! Transport primitives for Falcon API calls.
//!
//! The module exposes [`ApiHttpClient`] alongside the transport-neutral [`ApiRequest`] and
//! [`RawResponse`] so downstream crates can plug in their own HTTP stack. The client builds a
//! fully resolved request (URL with query, optional `Authorization` value, encoded body) and
//! expects the transport to return the status and body bytes untouched. Status interpretation
//! stays with the client.

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// crates.io
#[cfg(feature = "reqwest")] use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
// self
use crate::{_prelude::*, auth::Secret};

/// Boxed future returned by [`ApiHttpClient::execute`].
pub type HttpFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of executing Falcon API requests.
///
/// The trait is the client's only dependency on an HTTP stack. Implementations must be
/// `Send + Sync + 'static` so they can be shared behind an `Arc` across clients, and the
/// futures they return must be `Send` so callers can drive them on multi-threaded runtimes.
/// Implementations must not retry, follow status-based fallbacks, or cache: each call is
/// exactly one round trip.
pub trait ApiHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Sends `request` and resolves with the raw response, whatever its status.
	///
	/// Only failures that prevent an HTTP response from being received (DNS, TCP, TLS,
	/// timeouts, body read errors) are reported as `Err`.
	fn execute(&self, request: ApiRequest) -> HttpFuture<'_, RawResponse, Self::TransportError>;
}

/// HTTP verbs used by the Falcon API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
	/// `GET`
	Get,
	/// `POST`
	Post,
	/// `PUT`
	Put,
	/// `PATCH`
	Patch,
	/// `DELETE`
	Delete,
}
impl HttpMethod {
	/// Returns the canonical upper-case verb.
	pub const fn as_str(self) -> &'static str {
		match self {
			HttpMethod::Get => "GET",
			HttpMethod::Post => "POST",
			HttpMethod::Put => "PUT",
			HttpMethod::Patch => "PATCH",
			HttpMethod::Delete => "DELETE",
		}
	}
}
impl Display for HttpMethod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
#[cfg(feature = "reqwest")]
impl From<HttpMethod> for reqwest::Method {
	fn from(method: HttpMethod) -> Self {
		match method {
			HttpMethod::Get => reqwest::Method::GET,
			HttpMethod::Post => reqwest::Method::POST,
			HttpMethod::Put => reqwest::Method::PUT,
			HttpMethod::Patch => reqwest::Method::PATCH,
			HttpMethod::Delete => reqwest::Method::DELETE,
		}
	}
}

/// Encoded request body.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum RequestBody {
	/// No body is sent.
	#[default]
	Empty,
	/// JSON bytes sent as `application/json`.
	Json(Vec<u8>),
	/// Form body sent as `application/x-www-form-urlencoded`. Login forms carry the
	/// password, so the contents are kept secret.
	Form(Secret),
}
impl RequestBody {
	/// Returns the `Content-Type` to advertise for this body, if any.
	pub const fn content_type(&self) -> Option<&'static str> {
		match self {
			RequestBody::Empty => None,
			RequestBody::Json(_) => Some("application/json"),
			RequestBody::Form(_) => Some("application/x-www-form-urlencoded"),
		}
	}

	/// Returns the raw body bytes.
	pub fn as_bytes(&self) -> &[u8] {
		match self {
			RequestBody::Empty => &[],
			RequestBody::Json(bytes) => bytes,
			RequestBody::Form(form) => form.expose().as_bytes(),
		}
	}
}

/// Fully resolved request handed to an [`ApiHttpClient`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
	/// HTTP verb.
	pub method: HttpMethod,
	/// Absolute URL including any query string.
	pub url: Url,
	/// `Authorization` header value, when the client holds a session.
	pub authorization: Option<Secret>,
	/// Encoded body.
	pub body: RequestBody,
}

/// Raw HTTP response as observed by the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
	/// HTTP status code.
	pub status: u16,
	/// `Content-Type` header, when present and valid UTF-8.
	pub content_type: Option<String>,
	/// Undecoded body bytes.
	pub body: Vec<u8>,
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl ApiHttpClient for ReqwestHttpClient {
	type TransportError = ReqwestError;

	fn execute(&self, request: ApiRequest) -> HttpFuture<'_, RawResponse, Self::TransportError> {
		let client = self.0.clone();

		Box::pin(async move {
			let ApiRequest { method, url, authorization, body } = request;
			let mut builder = client.request(method.into(), url);

			if let Some(authorization) = authorization {
				builder = builder.header(AUTHORIZATION, authorization.expose());
			}
			if let Some(content_type) = body.content_type() {
				builder = builder.header(CONTENT_TYPE, content_type).body(body.as_bytes().to_vec());
			}

			let response = builder.send().await?;
			let status = response.status().as_u16();
			let content_type = response
				.headers()
				.get(CONTENT_TYPE)
				.and_then(|value| value.to_str().ok())
				.map(str::to_owned);
			let body = response.bytes().await?.to_vec();

			Ok::<_, ReqwestError>(RawResponse { status, content_type, body })
		})
	}
}
