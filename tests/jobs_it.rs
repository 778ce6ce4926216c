mod common;

// crates.io
use httpmock::prelude::*;
use serde_json::json;
use uuid::Uuid;
// self
use falcon_client::model::{DEFAULT_JOB_TTL, WorkRequest};

#[tokio::test]
async fn enqueue_reports_request_id() {
	let server = MockServer::start_async().await;
	let mut client = common::authorized_client(&server).await;
	let request = WorkRequest::new(
		"extract_tables",
		json!({ "doc_id": "doc-1" }),
		DEFAULT_JOB_TTL,
		client.username(),
	);
	let enqueue = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v1_0/util/enqueue").json_body(json!({
				"task": "extract_tables",
				"payload": { "doc_id": "doc-1" },
				"ttl": 4,
				"username": common::USERNAME,
				"request_id": request.request_id,
			}));
			then.status(201).json_body(json!({ "queued": true }));
		})
		.await;
	let response = client.enqueue_request(&request).await.expect("Enqueue should be sent.");

	assert!(response.is_success());
	assert_eq!(response.message(), format!("Task enqueued: {}", request.request_id));
	enqueue.assert_calls_async(1).await;
}

#[tokio::test]
async fn enqueue_without_session_submits_as_anonymous() {
	let server = MockServer::start_async().await;
	let mut client = common::client_for(&server);
	let enqueue = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/api/v1_0/util/enqueue")
				.body_includes("\"task\":\"extract_tables\"")
				.body_includes("\"username\":\"anonymous\"")
				.body_includes("\"ttl\":4");
			then.status(201).json_body(json!({ "queued": true }));
		})
		.await;
	let response = client
		.enqueue("extract_tables", json!({ "doc_id": "doc-1" }), DEFAULT_JOB_TTL)
		.await
		.expect("Enqueue should be sent.");

	assert!(response.is_success(), "{response}");

	let request_id = response
		.message()
		.strip_prefix("Task enqueued: ")
		.expect("Message should carry the request id.");

	assert_eq!(
		Uuid::parse_str(request_id).expect("Request id should be a UUID.").get_version_num(),
		4
	);
	enqueue.assert_calls_async(1).await;
}

#[tokio::test]
async fn job_status_polls_by_request_id() {
	let server = MockServer::start_async().await;
	let mut client = common::client_for(&server);
	let status = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v1_0/util/status").query_param("request_id", "req-1");
			then.status(200).json_body(json!({ "status": "complete" }));
		})
		.await;
	let response = client.job_status("req-1").await.expect("Status should be sent.");

	assert_eq!(response.payload()["status"], "complete");
	status.assert_calls_async(1).await;
}
