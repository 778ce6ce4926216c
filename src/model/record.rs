//! Schema-agnostic JSON records.
//!
//! The service owns the schemas for documents, trackers, clients, and extended properties, so
//! the client treats them all as open field maps. Typed accessors cover only the fields the
//! client itself reads.

// std
use std::ops::{Deref, DerefMut};
// crates.io
use serde_json::Value;
// self
use crate::{_prelude::*, response::Payload};

/// Document record (`id`, `path`, `filename`, `title`, bates numbers, …).
pub type Document = Record;
/// Tracker record; references documents by id.
pub type Tracker = Record;
/// Client (customer) record.
pub type ClientRecord = Record;
/// Extended document properties keyed by the document `id`.
pub type ExtendedProperties = Record;

/// Open JSON object whose schema is owned by the remote service.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Payload);
impl Record {
	/// Creates an empty record.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets `key` to `value`, returning the record for chaining.
	pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.0.insert(key.into(), value.into());

		self
	}

	/// Returns the string value of `key`, if present and a string.
	pub fn get_str(&self, key: &str) -> Option<&str> {
		self.0.get(key).and_then(Value::as_str)
	}

	/// Returns the record's `id` field.
	pub fn id(&self) -> Option<&str> {
		self.get_str("id")
	}

	/// Consumes the record and returns the underlying map.
	pub fn into_inner(self) -> Payload {
		self.0
	}
}
impl Deref for Record {
	type Target = Payload;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl DerefMut for Record {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.0
	}
}
impl From<Payload> for Record {
	fn from(value: Payload) -> Self {
		Self(value)
	}
}
impl From<Record> for Value {
	fn from(value: Record) -> Self {
		Value::Object(value.0)
	}
}
impl TryFrom<Value> for Record {
	type Error = Value;

	fn try_from(value: Value) -> Result<Self, Self::Error> {
		match value {
			Value::Object(map) => Ok(Self(map)),
			other => Err(other),
		}
	}
}
impl<K, V> FromIterator<(K, V)> for Record
where
	K: Into<String>,
	V: Into<Value>,
{
	fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
		Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;

	#[test]
	fn builder_and_accessors() {
		let doc = Document::new()
			.with("id", "doc-1")
			.with("page_count", 5)
			.with("path", "x:\\shared\\2022-07-15 BOA 2304.pdf");

		assert_eq!(doc.id(), Some("doc-1"));
		assert_eq!(doc.get_str("page_count"), None);
		assert_eq!(doc["page_count"], 5);
		assert_eq!(serde_json::to_value(&doc).expect("Record should serialize.")["id"], "doc-1");
	}

	#[test]
	fn only_objects_convert() {
		let record = Record::try_from(json!({ "id": "123", "name": "Test Tracker" }))
			.expect("Objects should convert.");

		assert_eq!(record.get_str("name"), Some("Test Tracker"));
		assert_eq!(Record::try_from(json!([1, 2])), Err(json!([1, 2])));
	}

	#[test]
	fn read_modify_write_keeps_unknown_fields() {
		let mut fetched: Record =
			[("id", json!("doc-1")), ("version", json!(3)), ("title", json!("Old"))]
				.into_iter()
				.collect();

		fetched.insert("title".into(), json!("**Updated Document"));

		assert_eq!(fetched["version"], 3);
		assert_eq!(fetched.get_str("title"), Some("**Updated Document"));
	}
}
