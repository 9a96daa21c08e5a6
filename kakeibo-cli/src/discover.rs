//! Downloaded-artifact discovery: find the newest CSV in a set of
//! candidate directories.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Newest `*.csv` file by modification time across `dirs`. Unreadable
/// directories and entries are ignored; `None` means no artifact exists.
pub fn latest_csv<P: AsRef<Path>>(dirs: &[P]) -> Option<PathBuf> {
    let mut best: Option<(SystemTime, PathBuf)> = None;
    for dir in dirs {
        let Ok(entries) = fs::read_dir(dir) else {
            continue;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_none_or(|ext| ext != "csv") {
                continue;
            }
            let Ok(meta) = entry.metadata() else {
                continue;
            };
            if !meta.is_file() {
                continue;
            }
            let Ok(modified) = meta.modified() else {
                continue;
            };
            if best.as_ref().is_none_or(|(t, _)| modified > *t) {
                best = Some((modified, path));
            }
        }
    }
    best.map(|(_, path)| path)
}
