//! Validated client configuration and its builder.
//!
//! A [`ClientConfig`] pins down where the Falcon API lives (`{base_url}/api/v{api_version}`)
//! and the few transport knobs the client controls itself. Everything else (connection
//! pooling, TLS roots, proxy handling) is left to the transport.

// std
use std::time::Duration as StdDuration;
// self
use crate::{_prelude::*, error::ConfigError};

/// API version segment used when none is configured.
pub const DEFAULT_API_VERSION: &str = "1_0";

/// Resolved configuration consumed by [`FalconClient`](crate::client::FalconClient).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
	/// Base URL as supplied (scheme, host, optional path prefix).
	pub base_url: Url,
	/// API version label, e.g. `1_0`.
	pub api_version: String,
	/// Optional whole-request timeout applied by the default transport.
	pub timeout: Option<StdDuration>,
	/// `User-Agent` sent by the default transport.
	pub user_agent: String,
	api_root: Url,
}
impl ClientConfig {
	/// Starts a builder for the provided base URL.
	pub fn builder(base_url: Url) -> ClientConfigBuilder {
		ClientConfigBuilder::new(base_url)
	}

	/// Parses `base_url` and builds a configuration with default settings.
	pub fn parse(base_url: &str) -> Result<Self, ConfigError> {
		let url = Url::parse(base_url).map_err(|source| ConfigError::InvalidBaseUrl { source })?;

		Self::builder(url).build()
	}

	/// Returns the versioned API root (`{base_url}/api/v{api_version}`).
	pub fn api_root(&self) -> &Url {
		&self.api_root
	}

	/// Resolves an endpoint below the API root.
	///
	/// Each segment is percent-encoded as a single path segment. A trailing empty segment
	/// produces a trailing slash, which some Falcon routes require.
	pub fn endpoint<I, S>(&self, segments: I) -> Url
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut url = self.api_root.clone();

		// Validated at build time: http(s) URLs always have path segments.
		if let Ok(mut path) = url.path_segments_mut() {
			path.pop_if_empty().extend(segments);
		}

		url
	}
}

/// Builder for [`ClientConfig`] values.
#[derive(Debug)]
pub struct ClientConfigBuilder {
	/// Base URL of the Falcon deployment.
	pub base_url: Url,
	/// API version label.
	pub api_version: String,
	/// Permits plain `http` base URLs (local development, test servers).
	pub allow_insecure_http: bool,
	/// Optional whole-request timeout.
	pub timeout: Option<StdDuration>,
	/// `User-Agent` header value.
	pub user_agent: String,
}
impl ClientConfigBuilder {
	/// Creates a new builder seeded with the provided base URL.
	pub fn new(base_url: Url) -> Self {
		Self {
			base_url,
			api_version: DEFAULT_API_VERSION.into(),
			allow_insecure_http: false,
			timeout: None,
			user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).into(),
		}
	}

	/// Overrides the API version label (defaults to `1_0`).
	pub fn api_version(mut self, version: impl Into<String>) -> Self {
		self.api_version = version.into();

		self
	}

	/// Allows or forbids plain `http` base URLs.
	pub fn allow_insecure_http(mut self, allow: bool) -> Self {
		self.allow_insecure_http = allow;

		self
	}

	/// Sets a whole-request timeout for the default transport.
	pub fn timeout(mut self, timeout: StdDuration) -> Self {
		self.timeout = Some(timeout);

		self
	}

	/// Overrides the `User-Agent` header value.
	pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
		self.user_agent = user_agent.into();

		self
	}

	/// Consumes the builder and validates the resulting configuration.
	pub fn build(self) -> Result<ClientConfig, ConfigError> {
		validate_base_url(&self.base_url, self.allow_insecure_http)?;
		validate_api_version(&self.api_version)?;

		let mut api_root = self.base_url.clone();

		if let Ok(mut path) = api_root.path_segments_mut() {
			path.pop_if_empty().push("api").push(&format!("v{}", self.api_version));
		}

		Ok(ClientConfig {
			base_url: self.base_url,
			api_version: self.api_version,
			timeout: self.timeout,
			user_agent: self.user_agent,
			api_root,
		})
	}
}

fn validate_base_url(url: &Url, allow_insecure_http: bool) -> Result<(), ConfigError> {
	match url.scheme() {
		"https" => {},
		"http" if allow_insecure_http => {},
		"http" => return Err(ConfigError::InsecureBaseUrl { url: url.to_string() }),
		other => return Err(ConfigError::UnsupportedScheme { scheme: other.to_owned() }),
	}

	if url.query().is_some() || url.fragment().is_some() {
		return Err(ConfigError::BaseUrlHasQuery { url: url.to_string() });
	}

	Ok(())
}

fn validate_api_version(version: &str) -> Result<(), ConfigError> {
	let valid = !version.is_empty()
		&& version.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'));

	if valid { Ok(()) } else { Err(ConfigError::InvalidApiVersion { version: version.to_owned() }) }
}
