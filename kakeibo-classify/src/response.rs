//! Strict parsing of the model's reply and application to credit entries.
//!
//! The reply is an untrusted external payload: anything that is not a JSON
//! array of `{id, name, category}` records referring to in-range ids is a
//! `ResponseParse` error, never a best-effort salvage.

use serde::Deserialize;

use kakeibo_core::{CategorizedEntry, CreditEntry};

use crate::error::ClassifyError;

/// One record of the model's categorization reply.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryAssignment {
    pub id: usize,
    pub name: String,
    pub category: String,
}

/// Parse the reply text into assignments, tolerating markdown code fences
/// around the JSON.
pub fn parse_assignments(text: &str) -> Result<Vec<CategoryAssignment>, ClassifyError> {
    let cleaned: String = text
        .lines()
        .filter(|line| !line.trim_start().starts_with("```"))
        .collect::<Vec<_>>()
        .join("\n");
    serde_json::from_str(cleaned.trim()).map_err(|e| ClassifyError::ResponseParse(e.to_string()))
}

/// Attach categories to the entries the assignments reference. An id
/// outside the entry list is a structural deviation of the reply.
pub fn apply_assignments(
    entries: &[CreditEntry],
    assignments: &[CategoryAssignment],
) -> Result<Vec<CategorizedEntry>, ClassifyError> {
    assignments
        .iter()
        .map(|a| {
            let entry = entries.get(a.id).ok_or_else(|| {
                ClassifyError::ResponseParse(format!(
                    "assignment id {} out of range ({} entries)",
                    a.id,
                    entries.len()
                ))
            })?;
            Ok(entry.with_category(a.category.clone()))
        })
        .collect()
}
