//! Batch-driver job configuration.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Duration, Local};
use serde::{Deserialize, Serialize};

use kakeibo_core::range::BOUNDARY_FORMAT;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub jobs: Vec<Job>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobKind {
    Bank,
    Credit,
}

/// One per-account job: where the statement comes from and what to draw.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub kind: JobKind,
    /// Explicit statement path. When absent, `download_dir` is scanned for
    /// the newest CSV artifact.
    pub csv: Option<PathBuf>,
    pub download_dir: Option<PathBuf>,
    /// Bank jobs only; `YYYY.MM.DD`. Defaults to the last 30 days.
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub output: PathBuf,
    pub title: Option<String>,
    /// Font family for chart text. The labels are Japanese, so point this
    /// at an installed CJK face (e.g. "Noto Sans CJK JP", "MS Gothic").
    #[serde(default = "default_font")]
    pub font: String,
    /// Credit jobs only: call the classification model before charting.
    #[serde(default = "default_true")]
    pub categorize: bool,
    pub api_key: Option<String>,
}

fn default_true() -> bool {
    true
}

fn default_font() -> String {
    crate::chart::DEFAULT_FONT.to_string()
}

impl Job {
    /// Effective date range for a bank job. Omitted boundaries default to
    /// the last 30 days ending today.
    pub fn date_range(&self) -> (String, String) {
        let today = Local::now().date_naive();
        let start = self
            .start_date
            .clone()
            .unwrap_or_else(|| (today - Duration::days(30)).format(BOUNDARY_FORMAT).to_string());
        let end = self
            .end_date
            .clone()
            .unwrap_or_else(|| today.format(BOUNDARY_FORMAT).to_string());
        (start, end)
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", path.display()))
}
