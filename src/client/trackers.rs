//! Trackers, the documents they reference, and the reports derived from them.

// self
use crate::{
	client::{CallResult, FalconClient, common},
	http::{ApiHttpClient, HttpMethod},
	model::{Dataset, Tracker},
	obs::Resource,
};

impl<C> FalconClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Creates a tracker; 201 on success.
	pub async fn create_tracker(&mut self, tracker: &Tracker) -> CallResult {
		let call = self
			.call(Resource::Trackers, "create_tracker", HttpMethod::Post, ["trackers"])
			.json(tracker)?
			.expect(201, "Tracker created", "Tracker creation failed");

		self.send(call).await
	}

	/// Fetches one tracker.
	pub async fn get_tracker(&mut self, tracker_id: &str) -> CallResult {
		let tracker_id = common::require("tracker_id", tracker_id)?;
		let call = self
			.call(Resource::Trackers, "get_tracker", HttpMethod::Get, ["trackers"])
			.query([("tracker_id", tracker_id)])
			.expect(200, "Tracker retrieved", "Tracker retrieval failed");

		self.send(call).await
	}

	/// Lists a client's trackers under `payload["trackers"]`.
	pub async fn get_client_trackers(&mut self, client_id: &str) -> CallResult {
		let client_id = common::require("client_id", client_id)?;
		let call = self
			.call(Resource::Trackers, "get_client_trackers", HttpMethod::Get, ["trackers", "client"])
			.query([("client_id", client_id)])
			.expect(200, "Trackers retrieved", "Trackers retrieval failed")
			.list_key("trackers");

		self.send(call).await
	}

	/// Lists a user's trackers under `payload["trackers"]`.
	///
	/// Without `username` the session user's trackers are returned. Naming another user
	/// requires the admin role on the service side.
	pub async fn get_trackers(&mut self, username: Option<&str>) -> CallResult {
		let mut call = self
			.call(Resource::Trackers, "get_trackers", HttpMethod::Get, ["trackers", "user"])
			.expect(200, "Trackers retrieved", "Trackers retrieval failed")
			.list_key("trackers");

		if let Some(username) = username.filter(|name| !name.is_empty()) {
			call = call.query([("username", username)]);
		}

		self.send(call).await
	}

	/// Replaces a tracker.
	///
	/// Every field is overwritten except `documents`, which is stripped before sending; use
	/// [`link_document`](Self::link_document) and [`unlink_document`](Self::unlink_document)
	/// to change references.
	pub async fn update_tracker(&mut self, tracker: &Tracker) -> CallResult {
		let mut body = tracker.clone();

		body.remove("documents");

		let call = self
			.call(Resource::Trackers, "update_tracker", HttpMethod::Put, ["trackers", ""])
			.json(&body)?
			.expect(200, "Tracker updated", "Tracker update failed");

		self.send(call).await
	}

	/// Deletes a tracker.
	pub async fn delete_tracker(&mut self, tracker_id: &str) -> CallResult {
		let tracker_id = common::require("tracker_id", tracker_id)?;
		let call = self
			.call(Resource::Trackers, "delete_tracker", HttpMethod::Delete, ["trackers"])
			.query([("tracker_id", tracker_id)])
			.expect(200, "Tracker deleted", "Tracker deletion failed");

		self.send(call).await
	}

	/// Lists a tracker's transaction categories under `payload["categories"]`.
	pub async fn get_tracker_categories(&mut self, tracker_id: &str) -> CallResult {
		let tracker_id = common::require_segment("tracker_id", tracker_id)?;
		let call = self
			.call(Resource::Trackers, "get_tracker_categories", HttpMethod::Get, [
				"trackers",
				tracker_id,
				"categories",
			])
			.expect(200, "Categories retrieved", "Categories retrieval failed")
			.list_key("categories");

		self.send(call).await
	}

	/// Lists category/subcategory pairs under `payload["category_subcategory_pairs"]`.
	pub async fn get_tracker_category_subcategory_pairs(&mut self, tracker_id: &str) -> CallResult {
		let tracker_id = common::require_segment("tracker_id", tracker_id)?;
		let call = self
			.call(Resource::Trackers, "get_tracker_category_subcategory_pairs", HttpMethod::Get, [
				"trackers",
				tracker_id,
				"category_subcategory_pairs",
			])
			.expect(
				200,
				"Category/subcategory pairs retrieved",
				"Category/subcategory pairs retrieval failed",
			)
			.list_key("category_subcategory_pairs");

		self.send(call).await
	}

	/// Lists the documents linked to a tracker under `payload["documents"]`.
	pub async fn get_documents(&mut self, tracker_id: &str) -> CallResult {
		let tracker_id = common::require_segment("tracker_id", tracker_id)?;
		let call = self
			.call(Resource::Trackers, "get_documents", HttpMethod::Get, [
				"trackers",
				tracker_id,
				"documents",
			])
			.expect(200, "Documents retrieved", "Documents retrieval failed")
			.list_key("documents");

		self.send(call).await
	}

	/// Fetches a tracker's compliance matrix for `classification`.
	pub async fn get_compliance_matrix(
		&mut self,
		tracker_id: &str,
		classification: &str,
	) -> CallResult {
		let tracker_id = common::require_segment("tracker_id", tracker_id)?;
		let classification = common::require_segment("classification", classification)?;
		let call = self
			.call(Resource::Trackers, "get_compliance_matrix", HttpMethod::Get, [
				"trackers",
				tracker_id,
				"compliance_matrix",
				classification,
			])
			.expect(200, "Compliance matrix retrieved", "Compliance matrix retrieval failed");

		self.send(call).await
	}

	/// Fetches one of a tracker's derived datasets.
	pub async fn get_dataset(&mut self, tracker_id: &str, dataset: Dataset) -> CallResult {
		let tracker_id = common::require_segment("tracker_id", tracker_id)?;
		let call = self
			.call(Resource::Trackers, "get_dataset", HttpMethod::Get, [
				"trackers",
				tracker_id,
				"datasets",
				dataset.as_str(),
			])
			.expect(200, "Dataset retrieved", "Dataset retrieval failed");

		self.send(call).await
	}

	/// Adds a document reference to a tracker; the service answers 202.
	pub async fn link_document(&mut self, tracker_id: &str, document_id: &str) -> CallResult {
		let tracker_id = common::require_segment("tracker_id", tracker_id)?;
		let document_id = common::require_segment("document_id", document_id)?;
		let call = self
			.call(Resource::Trackers, "link_document", HttpMethod::Patch, [
				"trackers",
				tracker_id,
				"documents",
				"link",
				document_id,
			])
			.expect(202, "Document linked", "Document linking failed");

		self.send(call).await
	}

	/// Removes a document reference from a tracker.
	pub async fn unlink_document(&mut self, tracker_id: &str, document_id: &str) -> CallResult {
		let tracker_id = common::require_segment("tracker_id", tracker_id)?;
		let document_id = common::require_segment("document_id", document_id)?;
		let call = self
			.call(Resource::Trackers, "unlink_document", HttpMethod::Patch, [
				"trackers",
				tracker_id,
				"documents",
				"unlink",
				document_id,
			])
			.expect(200, "Document unlinked", "Document unlinking failed");

		self.send(call).await
	}
}
