//! Document lookup keys.

// self
use crate::_prelude::*;

/// Key used to fetch a single document.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DocumentLookup {
	/// Lookup by document id (`doc_id` query parameter).
	Id(String),
	/// Lookup by stored path (`path` query parameter).
	Path(String),
}
impl DocumentLookup {
	/// Picks the effective key from optional inputs.
	///
	/// Empty strings count as absent. The id wins when both are usable; when neither is, the
	/// lookup is rejected so no request is ever sent without a key.
	pub fn resolve(document_id: Option<&str>, path: Option<&str>) -> Result<Self> {
		match (non_empty(document_id), non_empty(path)) {
			(Some(id), _) => Ok(Self::Id(id.to_owned())),
			(None, Some(path)) => Ok(Self::Path(path.to_owned())),
			(None, None) => Err(Error::InvalidArgument {
				argument: "document_id",
				reason: "either a document id or a path must be supplied".into(),
			}),
		}
	}

	/// Returns the query parameter name and value for this key.
	pub fn query_pair(&self) -> (&'static str, &str) {
		match self {
			DocumentLookup::Id(id) => ("doc_id", id),
			DocumentLookup::Path(path) => ("path", path),
		}
	}
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
	value.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn id_takes_precedence_over_path() {
		let lookup = DocumentLookup::resolve(Some("doc-1"), Some("x:\\doc.pdf"))
			.expect("Lookup with both keys should resolve.");

		assert_eq!(lookup, DocumentLookup::Id("doc-1".into()));
		assert_eq!(lookup.query_pair(), ("doc_id", "doc-1"));
	}

	#[test]
	fn path_is_used_when_id_is_absent_or_empty() {
		assert_eq!(
			DocumentLookup::resolve(None, Some("x:\\doc.pdf")).expect("Path lookup should resolve."),
			DocumentLookup::Path("x:\\doc.pdf".into())
		);
		assert_eq!(
			DocumentLookup::resolve(Some(""), Some("x:\\doc.pdf"))
				.expect("Empty id should fall back to the path.")
				.query_pair(),
			("path", "x:\\doc.pdf")
		);
	}

	#[test]
	fn missing_keys_are_invalid_arguments() {
		for (id, path) in [(None, None), (Some(""), None), (None, Some("")), (Some(""), Some(""))] {
			let err = DocumentLookup::resolve(id, path).expect_err("Lookup without keys must fail.");

			assert!(matches!(err, Error::InvalidArgument { .. }), "Unexpected error: {err:?}.");
		}
	}
}
