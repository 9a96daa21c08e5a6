//! Normalized transaction records shared by all statement sources.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A bank-account transaction normalized from a statement export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    /// Whole yen. Positive = income, negative = expense.
    pub amount: i64,
    pub description: String,
}

impl Transaction {
    pub fn new(date: NaiveDate, amount: i64, description: impl Into<String>) -> Self {
        Self {
            date,
            amount,
            description: description.into(),
        }
    }

    /// Returns true if this is income (positive amount)
    pub fn is_income(&self) -> bool {
        self.amount > 0
    }

    /// Returns true if this is an expense (negative amount)
    pub fn is_expense(&self) -> bool {
        self.amount < 0
    }
}

/// A credit-card line item, before any category has been assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditEntry {
    pub date: NaiveDate,
    pub description: String,
    /// Whole yen, charge amount as exported.
    pub amount: i64,
    /// Secondary free-text note from the statement; often empty.
    pub appendix: String,
}

impl CreditEntry {
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        amount: i64,
        appendix: impl Into<String>,
    ) -> Self {
        Self {
            date,
            description: description.into(),
            amount,
            appendix: appendix.into(),
        }
    }

    /// Build the categorized form of this entry. Records are immutable;
    /// classification produces a new record instead of mutating in place.
    pub fn with_category(&self, category: impl Into<String>) -> CategorizedEntry {
        CategorizedEntry {
            date: self.date,
            description: self.description.clone(),
            amount: self.amount,
            appendix: self.appendix.clone(),
            category: category.into(),
        }
    }
}

/// A credit-card line item carrying its assigned spending category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizedEntry {
    pub date: NaiveDate,
    pub description: String,
    pub amount: i64,
    pub appendix: String,
    pub category: String,
}
