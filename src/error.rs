//! Client-level error types for failures detected before or outside the remote service.
//!
//! Remote failures are never errors here: the service's status codes travel back inside
//! [`ApiResponse::Failure`](crate::response::ApiResponse::Failure). These types only cover
//! what the client itself refuses to send or cannot construct.

// self
use crate::_prelude::*;

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),

	/// A required argument was missing or empty; nothing was sent.
	#[error("Invalid argument `{argument}`: {reason}.")]
	InvalidArgument {
		/// Name of the offending argument.
		argument: &'static str,
		/// Human-readable explanation.
		reason: String,
	},
	/// A request body could not be serialized to JSON.
	#[error("Request body for {operation} could not be encoded.")]
	Encode {
		/// Operation that attempted the encoding.
		operation: &'static str,
		/// Underlying serializer failure.
		#[source]
		source: serde_json::Error,
	},
}
impl Error {
	/// Builds an [`Error::InvalidArgument`] for an absent or empty argument.
	pub fn missing(argument: &'static str) -> Self {
		Self::InvalidArgument { argument, reason: "a non-empty value is required".into() }
	}
}

/// Configuration and validation failures raised while building a client.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Base URL string cannot be parsed.
	#[error("Base URL is invalid.")]
	InvalidBaseUrl {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Base URL uses a scheme other than `http`/`https`.
	#[error("Base URL scheme `{scheme}` is not supported.")]
	UnsupportedScheme {
		/// Scheme that failed validation.
		scheme: String,
	},
	/// Base URL uses plain HTTP without opting in.
	#[error("Base URL must use HTTPS: {url}.")]
	InsecureBaseUrl {
		/// URL that failed validation.
		url: String,
	},
	/// Base URL carries a query string or fragment.
	#[error("Base URL must not carry a query or fragment: {url}.")]
	BaseUrlHasQuery {
		/// URL that failed validation.
		url: String,
	},
	/// API version label is empty or contains path-breaking characters.
	#[error("API version `{version}` is invalid.")]
	InvalidApiVersion {
		/// Version label that failed validation.
		version: String,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}
