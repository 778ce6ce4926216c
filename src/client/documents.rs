//! Document records, their extended properties, and extracted tables.
//!
//! Updates are full replacements: fetch the current record, change fields, and send the whole
//! record back. The service answers 409 when the record's version no longer matches what is
//! stored, which is the only concurrency signal the client surfaces.

// self
use crate::{
	client::{CallResult, FalconClient, common},
	http::{ApiHttpClient, HttpMethod},
	model::{Document, DocumentLookup, ExtendedProperties},
	obs::Resource,
};

impl<C> FalconClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Stores a new document; 201 on success, 409 when the id already exists.
	///
	/// This does not link the document to a tracker; see
	/// [`link_document`](Self::link_document).
	pub async fn add_document(&mut self, document: &Document) -> CallResult {
		let call = self
			.call(Resource::Documents, "add_document", HttpMethod::Post, ["documents"])
			.json(document)?
			.expect(201, "Document added", "Document addition failed");

		self.send(call).await
	}

	/// Fetches one document by id or by path.
	///
	/// Supply at least one non-empty key; the id wins when both are given. Without a usable
	/// key the call fails with [`Error::InvalidArgument`](crate::error::Error::InvalidArgument)
	/// and nothing is sent.
	pub async fn get_document(
		&mut self,
		document_id: Option<&str>,
		path: Option<&str>,
	) -> CallResult {
		let lookup = DocumentLookup::resolve(document_id, path)?;

		self.get_document_by(&lookup).await
	}

	/// Fetches one document with an already resolved [`DocumentLookup`].
	pub async fn get_document_by(&mut self, lookup: &DocumentLookup) -> CallResult {
		let (key, value) = lookup.query_pair();

		common::require(key, value)?;

		let call = self
			.call(Resource::Documents, "get_document", HttpMethod::Get, ["documents", ""])
			.query([(key, value)])
			.expect(200, "Document retrieved", "Document retrieval failed");

		self.send(call).await
	}

	/// Replaces a document with `document`; every field is overwritten.
	pub async fn update_document(&mut self, document: &Document) -> CallResult {
		let call = self
			.call(Resource::Documents, "update_document", HttpMethod::Put, ["documents", ""])
			.json(document)?
			.expect(200, "Document updated", "Document update failed");

		self.send(call).await
	}

	/// Deletes a document.
	///
	/// With `cascade` the service also removes the document from every tracker referencing
	/// it; without it the service refuses while references remain.
	pub async fn delete_document(&mut self, document_id: &str, cascade: bool) -> CallResult {
		let document_id = common::require("document_id", document_id)?;
		let call = self
			.call(Resource::Documents, "delete_document", HttpMethod::Delete, ["documents"])
			.query([("doc_id", document_id), ("cascade", if cascade { "true" } else { "false" })])
			.expect(200, "Document deleted", "Document deletion failed");

		self.send(call).await
	}

	/// Stores extended properties for the document named by `properties["id"]`.
	pub async fn add_extended_document_properties(
		&mut self,
		properties: &ExtendedProperties,
	) -> CallResult {
		let call = self
			.call(Resource::Documents, "add_extended_document_properties", HttpMethod::Post, [
				"documents", "props",
			])
			.json(properties)?
			.expect(
				201,
				"Extended document properties added",
				"Extended document properties addition failed",
			);

		self.send(call).await
	}

	/// Fetches a document's extended properties.
	pub async fn get_extended_document_properties(&mut self, document_id: &str) -> CallResult {
		let document_id = common::require("document_id", document_id)?;
		let call = self
			.call(Resource::Documents, "get_extended_document_properties", HttpMethod::Get, [
				"documents", "props",
			])
			.query([("doc_id", document_id)])
			.expect(
				200,
				"Extended document properties retrieved",
				"Extended document properties retrieval failed",
			);

		self.send(call).await
	}

	/// Replaces a document's extended properties.
	pub async fn update_extended_document_properties(
		&mut self,
		properties: &ExtendedProperties,
	) -> CallResult {
		let call = self
			.call(Resource::Documents, "update_extended_document_properties", HttpMethod::Put, [
				"documents", "props", "",
			])
			.json(properties)?
			.expect(
				200,
				"Extended document properties updated",
				"Extended document properties update failed",
			);

		self.send(call).await
	}

	/// Deletes a document's extended properties.
	pub async fn delete_extended_document_properties(&mut self, document_id: &str) -> CallResult {
		let document_id = common::require("document_id", document_id)?;
		let call = self
			.call(Resource::Documents, "delete_extended_document_properties", HttpMethod::Delete, [
				"documents", "props",
			])
			.query([("doc_id", document_id)])
			.expect(
				200,
				"Extended document properties deleted",
				"Extended document properties deletion failed",
			);

		self.send(call).await
	}

	/// Fetches the tables extracted from a document, rendered as CSV.
	pub async fn get_csv_tables(&mut self, document_id: &str) -> CallResult {
		self.get_tables(document_id, TableFormat::Csv).await
	}

	/// Fetches the tables extracted from a document, rendered as JSON.
	pub async fn get_json_tables(&mut self, document_id: &str) -> CallResult {
		self.get_tables(document_id, TableFormat::Json).await
	}

	async fn get_tables(&mut self, document_id: &str, format: TableFormat) -> CallResult {
		let document_id = common::require("document_id", document_id)?;
		let (operation, success, failure) = match format {
			TableFormat::Csv =>
				("get_csv_tables", "CSV tables retrieved", "CSV tables retrieval failed"),
			TableFormat::Json =>
				("get_json_tables", "JSON tables retrieved", "JSON tables retrieval failed"),
		};
		let call = self
			.call(Resource::Documents, operation, HttpMethod::Get, [
				"documents",
				"tables",
				format.as_str(),
			])
			.query([("doc_id", document_id)])
			.expect(200, success, failure);

		self.send(call).await
	}

	/// Deletes one extracted table from a document.
	pub async fn delete_table(&mut self, document_id: &str, table_id: &str) -> CallResult {
		let document_id = common::require("document_id", document_id)?;
		let table_id = common::require("table_id", table_id)?;
		let call = self
			.call(Resource::Documents, "delete_table", HttpMethod::Delete, ["documents", "tables"])
			.query([("doc_id", document_id), ("table_id", table_id)])
			.expect(200, "Table deleted", "Table deletion failed");

		self.send(call).await
	}
}

#[derive(Clone, Copy)]
enum TableFormat {
	Csv,
	Json,
}
impl TableFormat {
	const fn as_str(self) -> &'static str {
		match self {
			TableFormat::Csv => "csv",
			TableFormat::Json => "json",
		}
	}
}
