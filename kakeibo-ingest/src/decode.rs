//! Shift-JIS decoding for statement exports.

use std::fs;
use std::path::Path;

use encoding_rs::SHIFT_JIS;

use crate::error::IngestError;

/// Read a statement file and decode it from Shift-JIS. Any byte sequence
/// the encoding cannot represent makes the whole file fatal to parse.
pub fn read_shift_jis(path: &Path) -> Result<String, IngestError> {
    let bytes = fs::read(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let (text, _, had_errors) = SHIFT_JIS.decode(&bytes);
    if had_errors {
        return Err(IngestError::Decode {
            path: path.to_path_buf(),
        });
    }
    Ok(text.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_decodes_japanese_text() {
        let (bytes, _, _) = SHIFT_JIS.encode("お引出し,お預入れ\n");
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&bytes).unwrap();
        let text = read_shift_jis(file.path()).unwrap();
        assert_eq!(text, "お引出し,お預入れ\n");
    }

    #[test]
    fn test_invalid_bytes_are_a_decode_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"date,\xfe\xfe,amount").unwrap();
        let err = read_shift_jis(file.path()).unwrap_err();
        assert!(matches!(err, IngestError::Decode { .. }));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = read_shift_jis(Path::new("/nonexistent/statement.csv")).unwrap_err();
        assert!(matches!(err, IngestError::Io { .. }));
    }
}
