//! Background work requests submitted through `POST /util/enqueue`.

// crates.io
use serde_json::Value;
use uuid::Uuid;
// self
use crate::_prelude::*;

/// Time-to-live applied when the caller does not pick one.
pub const DEFAULT_JOB_TTL: u32 = 4;

const ANONYMOUS: &str = "anonymous";

/// Work request queued for the service's background workers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkRequest {
	/// Task name understood by the workers.
	pub task: String,
	/// Task-specific arguments.
	pub payload: Value,
	/// Time-to-live hint for the queue.
	pub ttl: u32,
	/// Submitting user, or `anonymous` without a session.
	pub username: String,
	/// Fresh UUIDv4 used to poll the job's status.
	pub request_id: String,
}
impl WorkRequest {
	/// Builds a request with a newly generated `request_id`.
	pub fn new(task: impl Into<String>, payload: Value, ttl: u32, username: Option<&str>) -> Self {
		Self {
			task: task.into(),
			payload,
			ttl,
			username: username.filter(|name| !name.is_empty()).unwrap_or(ANONYMOUS).to_owned(),
			request_id: Uuid::new_v4().to_string(),
		}
	}
}
