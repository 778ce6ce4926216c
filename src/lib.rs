//! Async client for the Falcon document and tracker API: bearer sessions, one round trip per
//! operation, and a uniform success/failure result for every call.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod model;
pub mod obs;
pub mod response;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for tests; enabled via `cfg(test)` or the `test` crate
	//! feature.

	pub use crate::_prelude::*;

	// self
	use crate::{client::ReqwestFalconClient, config::ClientConfig, http::ReqwestHttpClient};

	/// Builds a reqwest HTTP client that accepts the self-signed certificates produced by
	/// `httpmock` during tests.
	pub fn test_reqwest_http_client() -> ReqwestHttpClient {
		let client = ReqwestClient::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()
			.expect("Failed to build insecure Reqwest client for tests.");

		ReqwestHttpClient::with_client(client)
	}

	/// Constructs a [`ReqwestFalconClient`] pointed at a mock server's base URL, accepting
	/// plain HTTP and self-signed certificates.
	pub fn build_reqwest_test_client(base_url: &str) -> ReqwestFalconClient {
		let config = ClientConfig::builder(
			Url::parse(base_url).expect("Mock server base URL should parse."),
		)
		.allow_insecure_http(true)
		.build()
		.expect("Mock server config should build.");

		ReqwestFalconClient::with_http_client(config, test_reqwest_http_client())
	}
}

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::OffsetDateTime;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _};
