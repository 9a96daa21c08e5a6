//! Parse bank-statement CSV exports into typed transactions.
//!
//! The export has a metadata block, a blank line, one header row, the
//! transaction rows, and a terminating blank line. Rows have six columns:
//! id,date,money-out,money-in,balance,description

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use kakeibo_core::Transaction;

use crate::decode::read_shift_jis;
use crate::error::IngestError;

/// Date format used by bank rows (and by range boundaries everywhere).
pub const BANK_DATE_FORMAT: &str = "%Y.%m.%d";

/// A parsed bank statement: the raw metadata lines plus the normalized rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankStatement {
    pub metadata: Vec<String>,
    pub transactions: Vec<Transaction>,
}

/// Parse a Shift-JIS bank statement export from disk.
pub fn parse_bank_statement(path: impl AsRef<Path>) -> Result<BankStatement, IngestError> {
    let text = read_shift_jis(path.as_ref())?;
    parse_bank_statement_str(&text)
}

/// Parse an already-decoded bank statement.
pub fn parse_bank_statement_str(text: &str) -> Result<BankStatement, IngestError> {
    let lines: Vec<&str> = text.lines().collect();

    let first_blank = lines
        .iter()
        .position(|l| l.is_empty())
        .ok_or_else(|| IngestError::MalformedInput("missing metadata separator".to_string()))?;
    let metadata = lines[..first_blank]
        .iter()
        .map(|l| l.to_string())
        .collect();

    if lines.get(first_blank + 1).is_none_or(|l| l.is_empty()) {
        return Err(IngestError::MalformedInput("missing header row".to_string()));
    }

    let body = &lines[first_blank + 2..];
    let end = body.iter().position(|l| l.is_empty()).ok_or_else(|| {
        IngestError::MalformedInput("missing separator after transaction rows".to_string())
    })?;

    let rows = body[..end].join("\n");
    let mut transactions = Vec::with_capacity(end);
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(rows.as_bytes());
    for result in rdr.records() {
        let record = result?;
        transactions.push(parse_row(&record)?);
    }

    Ok(BankStatement {
        metadata,
        transactions,
    })
}

fn parse_row(record: &csv::StringRecord) -> Result<Transaction, IngestError> {
    if record.len() != 6 {
        return Err(IngestError::MalformedInput(format!(
            "expected 6 columns in bank row, got {}",
            record.len()
        )));
    }

    let raw_date = record.get(1).unwrap_or("").trim();
    let date = NaiveDate::parse_from_str(raw_date, BANK_DATE_FORMAT).map_err(|_| {
        IngestError::MalformedInput(format!("invalid date in bank row: {raw_date:?}"))
    })?;

    let money_out = record.get(2).unwrap_or("").trim();
    let money_in = record.get(3).unwrap_or("").trim();
    let amount = match (money_out.is_empty(), money_in.is_empty()) {
        (false, true) => -parse_money(money_out)?,
        (true, false) => parse_money(money_in)?,
        _ => {
            return Err(IngestError::MalformedInput(format!(
                "exactly one of money-out/money-in must be populated, got {money_out:?}/{money_in:?}"
            )));
        }
    };

    let description = record.get(5).unwrap_or("").trim();
    Ok(Transaction::new(date, amount, description))
}

fn parse_money(raw: &str) -> Result<i64, IngestError> {
    raw.parse()
        .map_err(|_| IngestError::MalformedInput(format!("invalid money field: {raw:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATEMENT: &str = "\
口座番号,1234567
照会期間,2024.01.01-2024.01.31

取引番号,日付,お引出し,お預入れ,残高,お取引内容
1,2024.01.05,,1000,1000,Salary
2,2024.01.10,500,,500,Groceries

";

    #[test]
    fn test_parses_example_statement() {
        let statement = parse_bank_statement_str(STATEMENT).unwrap();
        assert_eq!(statement.metadata.len(), 2);
        assert_eq!(statement.metadata[0], "口座番号,1234567");

        let txns = &statement.transactions;
        assert_eq!(txns.len(), 2);
        assert_eq!(txns[0].date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(txns[0].amount, 1000);
        assert_eq!(txns[0].description, "Salary");
        assert_eq!(txns[1].date, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
        assert_eq!(txns[1].amount, -500);
        assert_eq!(txns[1].description, "Groceries");
    }

    #[test]
    fn test_amount_never_from_both_money_fields() {
        // money-out populated: amount is its negation even when balance moves up
        let statement = parse_bank_statement_str(
            "meta\n\nheader\n1,2024.01.05,300,,700,Withdrawal\n\n",
        )
        .unwrap();
        assert_eq!(statement.transactions[0].amount, -300);
    }

    #[test]
    fn test_both_money_fields_populated_is_malformed() {
        let err = parse_bank_statement_str("meta\n\nheader\n1,2024.01.05,300,200,700,Bad\n\n")
            .unwrap_err();
        assert!(matches!(err, IngestError::MalformedInput(_)));
    }

    #[test]
    fn test_neither_money_field_populated_is_malformed() {
        let err =
            parse_bank_statement_str("meta\n\nheader\n1,2024.01.05,,,700,Bad\n\n").unwrap_err();
        assert!(matches!(err, IngestError::MalformedInput(_)));
    }

    #[test]
    fn test_missing_metadata_separator_is_malformed() {
        let err = parse_bank_statement_str("meta\nheader\n1,2024.01.05,,100,100,x\n").unwrap_err();
        assert!(matches!(err, IngestError::MalformedInput(_)));
    }

    #[test]
    fn test_missing_trailing_separator_is_malformed() {
        let err =
            parse_bank_statement_str("meta\n\nheader\n1,2024.01.05,,100,100,x\n").unwrap_err();
        assert!(matches!(err, IngestError::MalformedInput(_)));
    }

    #[test]
    fn test_wrong_column_count_is_malformed() {
        let err = parse_bank_statement_str("meta\n\nheader\n1,2024.01.05,,100,100\n\n").unwrap_err();
        assert!(matches!(err, IngestError::MalformedInput(_)));
    }

    #[test]
    fn test_zero_amount_row_passes_through() {
        let statement =
            parse_bank_statement_str("meta\n\nheader\n1,2024.01.05,,0,100,Nothing\n\n").unwrap();
        assert_eq!(statement.transactions[0].amount, 0);
    }

    #[test]
    fn test_parses_shift_jis_file() {
        use encoding_rs::SHIFT_JIS;
        use std::io::Write;

        let text = "メタデータ,1\n\nヘッダ\n1,2024.01.05,,1000,1000,給与\n\n";
        let (bytes, _, _) = SHIFT_JIS.encode(text);
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&bytes).unwrap();

        let statement = parse_bank_statement(file.path()).unwrap();
        assert_eq!(statement.transactions.len(), 1);
        assert_eq!(statement.transactions[0].description, "給与");
    }
}
