//! The closed set of spending categories and worked classification examples.

/// Default category labels. The numeric prefix keeps chart columns in a
/// stable lexicographic order.
pub const DEFAULT_CATEGORIES: [&str; 8] = [
    "00食料品・日用品",
    "01外食費",
    "02インフラ代",
    "03交通費",
    "04医療費",
    "05娯楽費",
    "06交際費",
    "99その他",
];

/// Category assigned when classification is disabled or skipped.
pub const FALLBACK_CATEGORY: &str = "99その他";

/// A known `description -> category` pairing included in the prompt to
/// steer the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkedExample {
    pub description: String,
    pub category: String,
}

impl WorkedExample {
    pub fn new(description: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            category: category.into(),
        }
    }
}

pub fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}
