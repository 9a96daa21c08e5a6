//! Parse credit-card statement CSV exports.
//!
//! No preamble; two known row shapes exist and the shape is fixed per file:
//! the short form carries the amount in column 2, the wide form in column 6.
//! Rows whose first column is not a date (header-ish rows, trailing summary
//! lines such as 合計) are skipped, not errors.

use std::path::Path;

use chrono::NaiveDate;

use kakeibo_core::CreditEntry;

use crate::decode::read_shift_jis;
use crate::error::IngestError;

/// Date format used by credit-card rows.
pub const CREDIT_DATE_FORMAT: &str = "%Y/%m/%d";

/// Row shape of a credit statement, resolved once per file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreditLayout {
    /// `[date, content, amount]`; a 7th column supplies the appendix note.
    Short,
    /// `[date, content, .., amount@6]`; no appendix.
    Wide,
}

impl CreditLayout {
    /// Resolve the row shape from the first data row (first record, when no
    /// row carries a date). Column count alone cannot tell the forms apart:
    /// a short-form row with an appendix note physically has seven fields.
    /// The short form is recognized by its amount sitting in column 2; the
    /// wide form keeps non-numeric text there (payment method etc.) and its
    /// amount in column 6.
    pub fn detect(records: &[csv::StringRecord]) -> Self {
        let probe = records
            .iter()
            .find(|r| {
                let raw = r.get(0).unwrap_or("").trim();
                NaiveDate::parse_from_str(raw, CREDIT_DATE_FORMAT).is_ok()
            })
            .or_else(|| records.first());
        let Some(record) = probe else {
            return CreditLayout::Wide;
        };
        if record.len() == 3 || parse_amount(record.get(2).unwrap_or("")).is_some() {
            CreditLayout::Short
        } else {
            CreditLayout::Wide
        }
    }

    fn amount_index(self) -> usize {
        match self {
            CreditLayout::Short => 2,
            CreditLayout::Wide => 6,
        }
    }

    fn appendix<'a>(self, record: &'a csv::StringRecord) -> &'a str {
        match self {
            CreditLayout::Short => record.get(6).unwrap_or(""),
            CreditLayout::Wide => "",
        }
    }
}

/// Parse a Shift-JIS credit-card statement export from disk.
pub fn parse_credit_statement(path: impl AsRef<Path>) -> Result<Vec<CreditEntry>, IngestError> {
    let text = read_shift_jis(path.as_ref())?;
    parse_credit_statement_str(&text)
}

/// Parse an already-decoded credit-card statement. Output is sorted
/// ascending by date.
pub fn parse_credit_statement_str(text: &str) -> Result<Vec<CreditEntry>, IngestError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut records = Vec::new();
    for result in rdr.records() {
        records.push(result?);
    }
    if records.is_empty() {
        return Ok(Vec::new());
    }
    let layout = CreditLayout::detect(&records);

    let mut entries = Vec::with_capacity(records.len());
    for record in &records {
        let raw_date = record.get(0).unwrap_or("").trim();
        let Ok(date) = NaiveDate::parse_from_str(raw_date, CREDIT_DATE_FORMAT) else {
            log::debug!("skipping non-data row starting with {raw_date:?}");
            continue;
        };

        let raw_amount = record.get(layout.amount_index()).unwrap_or("");
        let Some(amount) = parse_amount(raw_amount) else {
            log::debug!("skipping row dated {raw_date} with unparsable amount {raw_amount:?}");
            continue;
        };

        let description = record.get(1).unwrap_or("").trim();
        entries.push(CreditEntry::new(
            date,
            description,
            amount,
            layout.appendix(record).trim(),
        ));
    }

    entries.sort_by_key(|e| e.date);
    Ok(entries)
}

fn parse_amount(raw: &str) -> Option<i64> {
    raw.trim().replace(',', "").parse().ok()
}
