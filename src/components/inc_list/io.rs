//! JSON round-trip for the incidence list.
//!
//! The saved file is a plain serialization of the mapping: an object whose
//! keys are vertex ids (strings, per JSON) and whose values are arrays of
//! numeric vertex ids. Anything else is rejected and the editor state is
//! left untouched.

use indexmap::IndexMap;
use thiserror::Error;

use super::state::IncList;
use super::types::VertexId;

/// Why a saved incidence list could not be loaded.
#[derive(Debug, Error)]
pub enum ImportError {
	#[error("file is not valid JSON: {0}")]
	Parse(#[from] serde_json::Error),
	#[error("file does not contain an incidence-list object")]
	NotAnObject,
	#[error("key {0:?} is not a vertex id")]
	BadKey(String),
	#[error("field {0} is not a list of vertex ids")]
	BadField(VertexId),
}

/// Serialize the mapping as pretty-printed JSON.
pub fn encode(list: &IncList) -> serde_json::Result<String> {
	serde_json::to_string_pretty(list.fields())
}

/// Parse a saved mapping, validating the overall shape.
///
/// Field order follows the document; duplicate keys collapse to the last
/// occurrence, as they would in any key-unique mapping.
pub fn decode(content: &str) -> Result<IncList, ImportError> {
	let value: serde_json::Value = serde_json::from_str(content)?;
	let Some(object) = value.as_object() else {
		return Err(ImportError::NotAnObject);
	};

	let mut fields = IndexMap::with_capacity(object.len());
	for (key, entries) in object {
		let id: VertexId = key.parse().map_err(|_| ImportError::BadKey(key.clone()))?;
		let entries = entries.as_array().ok_or(ImportError::BadField(id))?;
		let values = entries
			.iter()
			.map(|entry| {
				entry
					.as_u64()
					.and_then(|n| VertexId::try_from(n).ok())
					.ok_or(ImportError::BadField(id))
			})
			.collect::<Result<Vec<VertexId>, _>>()?;
		fields.insert(id, values);
	}

	Ok(IncList::from_fields(fields))
}

/// Download name for an exported mapping, e.g. `graph_inclist_2026-08-07.json`.
pub fn export_filename(date: &str) -> String {
	format!("graph_inclist_{date}.json")
}
