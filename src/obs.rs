//! Optional observability helpers for client calls.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `falcon_client.call` with the `resource`
//!   and `operation` fields, plus a warning event when the transport fails.
//! - Enable `metrics` to increment the `falcon_client_call_total` counter for every
//!   attempt/success/failure, labeled by `resource` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// API resource groups addressed by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
	/// Login and user management.
	Users,
	/// Client (customer) records.
	Clients,
	/// Trackers and their document links.
	Trackers,
	/// Documents, extended properties, and tables.
	Documents,
	/// Background jobs.
	Jobs,
}
impl Resource {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Resource::Users => "users",
			Resource::Clients => "clients",
			Resource::Trackers => "trackers",
			Resource::Documents => "documents",
			Resource::Jobs => "jobs",
		}
	}
}
impl Display for Resource {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// Entry to a client operation.
	Attempt,
	/// The expected status was returned.
	Success,
	/// Any other status, or a transport failure.
	Failure,
}
impl CallOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Attempt => "attempt",
			CallOutcome::Success => "success",
			CallOutcome::Failure => "failure",
		}
	}
}
impl Display for CallOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
