//! Inclusive date-range filtering over bank transactions.

use chrono::NaiveDate;
use thiserror::Error;

use crate::transaction::Transaction;

/// Boundary strings always use the bank statement's dot-separated format,
/// no matter which statement layout produced the records being filtered.
pub const BOUNDARY_FORMAT: &str = "%Y.%m.%d";

#[derive(Debug, Error)]
pub enum RangeError {
    #[error("invalid range boundary {value:?}: expected YYYY.MM.DD")]
    BadBoundary {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

fn parse_boundary(value: &str) -> Result<NaiveDate, RangeError> {
    NaiveDate::parse_from_str(value, BOUNDARY_FORMAT).map_err(|source| RangeError::BadBoundary {
        value: value.to_string(),
        source,
    })
}

/// Keep the transactions dated within `[start, end]`, both ends inclusive.
/// Input order is preserved.
pub fn filter_by_range(
    transactions: &[Transaction],
    start: &str,
    end: &str,
) -> Result<Vec<Transaction>, RangeError> {
    let start = parse_boundary(start)?;
    let end = parse_boundary(end)?;
    Ok(transactions
        .iter()
        .filter(|t| start <= t.date && t.date <= end)
        .cloned()
        .collect())
}
