//! kakeibo-classify: the LLM categorization collaborator. Builds the
//! classification prompt, calls Gemini, and validates the reply strictly.

pub mod categories;
pub mod client;
pub mod error;
pub mod prompt;
pub mod response;

pub use categories::{DEFAULT_CATEGORIES, FALLBACK_CATEGORY, WorkedExample, default_categories};
pub use client::GeminiClient;
pub use error::ClassifyError;
pub use prompt::build_prompt;
pub use response::{CategoryAssignment, apply_assignments, parse_assignments};

use kakeibo_core::{CategorizedEntry, CreditEntry};

/// Categorize a batch of credit entries end to end: prompt, model call,
/// strict parse, application. A malformed reply surfaces as
/// `ClassifyError::ResponseParse`; the caller decides whether to proceed
/// without categories.
pub async fn categorize_entries(
    client: &GeminiClient,
    entries: &[CreditEntry],
    categories: &[String],
    examples: &[WorkedExample],
) -> Result<Vec<CategorizedEntry>, ClassifyError> {
    let items: Vec<(usize, &str)> = entries
        .iter()
        .enumerate()
        .map(|(i, e)| (i, e.description.as_str()))
        .collect();
    let prompt = build_prompt(&items, categories, examples);
    let reply = client.generate(&prompt).await?;
    log::debug!("classification reply: {reply}");
    let assignments = parse_assignments(&reply)?;
    apply_assignments(entries, &assignments)
}
