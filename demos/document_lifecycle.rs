//! Walks a document through its lifecycle against a mock Falcon service using the default
//! reqwest transport: log in, add, look up by path, link to a tracker, and delete with cascade.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use serde_json::json;
// self
use falcon_client::{
	client::ReqwestFalconClient, config::ClientConfig, model::Document, url::Url,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let login = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v1_0/users/token");
			then.status(200).json_body(json!({
				"access_token": "demo-access",
				"token_type": "bearer",
				"user_id": "user-1",
			}));
		})
		.await;
	let add = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v1_0/documents").header("authorization", "bearer demo-access");
			then.status(201).json_body(json!({ "id": "doc-1" }));
		})
		.await;
	let lookup = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v1_0/documents/").query_param("path", "x:\\BOA 2304.pdf");
			then.status(200).json_body(json!({ "id": "doc-1", "version": 1 }));
		})
		.await;
	let link = server
		.mock_async(|when, then| {
			when.method(PATCH).path("/api/v1_0/trackers/t-1/documents/link/doc-1");
			then.status(202).json_body(json!({ "linked": true }));
		})
		.await;
	let delete = server
		.mock_async(|when, then| {
			when.method(DELETE).path("/api/v1_0/documents").query_param("cascade", "true");
			then.status(200).json_body(json!({ "deleted": 1 }));
		})
		.await;
	let config =
		ClientConfig::builder(Url::parse(&server.base_url())?).allow_insecure_http(true).build()?;
	let mut client = ReqwestFalconClient::new(config)?;
	let response = client.authorize("ada", "correct horse").await?;

	println!("Login: {response}.");

	let document = Document::new().with("id", "doc-1").with("path", "x:\\BOA 2304.pdf");

	println!("Add: {}.", client.add_document(&document).await?);

	let fetched = client.get_document(None, Some("x:\\BOA 2304.pdf")).await?;

	println!("Fetched version {} of {}.", fetched.payload()["version"], fetched.payload()["id"]);
	println!("Link: {}.", client.link_document("t-1", "doc-1").await?);
	println!("Delete: {}.", client.delete_document("doc-1", true).await?);

	if let Some(last) = client.last_response() {
		println!("Last exchange: {} {} -> {:?}.", last.method, last.url, last.status);
	}

	login.assert_async().await;
	add.assert_async().await;
	lookup.assert_async().await;
	link.assert_async().await;
	delete.assert_async().await;

	Ok(())
}
