//! Error taxonomy for statement ingestion.
//!
//! Decode and structural failures are fatal for the file being parsed;
//! individual bad rows in the credit layout are skipped, never surfaced
//! here.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not valid Shift-JIS")]
    Decode { path: PathBuf },

    #[error("malformed statement: {0}")]
    MalformedInput(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}
