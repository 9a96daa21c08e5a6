//! kakeibo-ingest: Shift-JIS statement decoding and the bank/credit CSV
//! parsers that normalize exports into `kakeibo-core` records.

pub mod decode;
pub mod error;
pub mod parsers;

pub use decode::read_shift_jis;
pub use error::IngestError;
pub use parsers::bank::{BankStatement, parse_bank_statement, parse_bank_statement_str};
pub use parsers::credit::{CreditLayout, parse_credit_statement, parse_credit_statement_str};
