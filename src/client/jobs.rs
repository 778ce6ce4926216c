//! Background job submission and polling.

// crates.io
use serde_json::Value;
// self
use crate::{
	client::{CallResult, FalconClient, common},
	http::{ApiHttpClient, HttpMethod},
	model::WorkRequest,
	obs::Resource,
};

impl<C> FalconClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Queues `task` with `payload`; 201 on success.
	///
	/// A fresh request id is generated for every call and echoed in the success message
	/// (`Task enqueued: {request_id}`) so the caller can poll [`job_status`](Self::job_status).
	/// The submitting user is the session user, or `anonymous` without a session.
	pub async fn enqueue(&mut self, task: &str, payload: Value, ttl: u32) -> CallResult {
		let task = common::require("task", task)?;
		let request = WorkRequest::new(task, payload, ttl, self.username());

		self.enqueue_request(&request).await
	}

	/// Queues a caller-built [`WorkRequest`].
	pub async fn enqueue_request(&mut self, request: &WorkRequest) -> CallResult {
		common::require("task", &request.task)?;

		let call = self
			.call(Resource::Jobs, "enqueue", HttpMethod::Post, ["util", "enqueue"])
			.json(request)?
			.expect(201, format!("Task enqueued: {}", request.request_id), "Task enqueue failed");

		self.send(call).await
	}

	/// Polls the status of a queued job.
	pub async fn job_status(&mut self, request_id: &str) -> CallResult {
		let request_id = common::require("request_id", request_id)?;
		let call = self
			.call(Resource::Jobs, "job_status", HttpMethod::Get, ["util", "status"])
			.query([("request_id", request_id)])
			.expect(200, "Job status retrieved", "Job status retrieval failed");

		self.send(call).await
	}
}
