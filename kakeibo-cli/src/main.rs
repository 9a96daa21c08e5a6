use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use kakeibo_classify::{
    ClassifyError, FALLBACK_CATEGORY, GeminiClient, categorize_entries, default_categories,
};
use kakeibo_core::{CategorizedEntry, balance_chart, filter_by_range, usage_chart};
use kakeibo_ingest::{parse_bank_statement, parse_credit_statement};

mod chart;
mod config;
mod discover;

use config::{Job, JobKind};

#[derive(Parser, Debug)]
#[command(name = "kakeibo", version, about = "Bank/credit statement summarizer")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run every job in a TOML config; one job's failure never aborts the rest
    Run {
        /// Path to the job config
        config: PathBuf,
    },

    /// Chart income/expense from a bank statement CSV
    Balance {
        #[arg(long)]
        csv: PathBuf,

        /// Range start, YYYY.MM.DD (default: 30 days ago)
        #[arg(long)]
        start_date: Option<String>,

        /// Range end, YYYY.MM.DD (default: today)
        #[arg(long)]
        end_date: Option<String>,

        /// Output PNG path
        #[arg(long)]
        out: PathBuf,

        #[arg(long)]
        title: Option<String>,

        /// Font family for chart text (labels are Japanese; pick a CJK face)
        #[arg(long, default_value = chart::DEFAULT_FONT)]
        font: String,
    },

    /// Chart category-wise usage from a credit-card statement CSV
    Usage {
        #[arg(long)]
        csv: PathBuf,

        /// Output PNG path
        #[arg(long)]
        out: PathBuf,

        /// Skip the classification model; every entry gets the fallback category
        #[arg(long)]
        no_categorize: bool,

        /// Gemini API key (default: GOOGLE_API_KEY env var)
        #[arg(long)]
        api_key: Option<String>,

        #[arg(long)]
        title: Option<String>,

        /// Font family for chart text (labels are Japanese; pick a CJK face)
        #[arg(long, default_value = chart::DEFAULT_FONT)]
        font: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if cli.debug { "debug" } else { "info" }),
    )
    .init();

    match cli.command {
        Command::Run { config } => run_jobs(&config).await,

        Command::Balance {
            csv,
            start_date,
            end_date,
            out,
            title,
            font,
        } => {
            let job = Job {
                kind: JobKind::Bank,
                csv: Some(csv.clone()),
                download_dir: None,
                start_date,
                end_date,
                output: out,
                title,
                font,
                categorize: false,
                api_key: None,
            };
            let (start, end) = job.date_range();
            run_balance(&csv, &start, &end, &job.output, job.title, &job.font)
        }

        Command::Usage {
            csv,
            out,
            no_categorize,
            api_key,
            title,
            font,
        } => run_usage(&csv, &out, !no_categorize, api_key, title, &font).await,
    }
}

async fn run_jobs(config_path: &Path) -> Result<()> {
    let cfg = config::load_config(config_path)?;
    if cfg.jobs.is_empty() {
        log::warn!("{} defines no jobs", config_path.display());
    }
    for (i, job) in cfg.jobs.iter().enumerate() {
        if let Err(e) = run_job(job).await {
            log::error!("job {i} ({:?}) failed: {e:#}", job.kind);
        }
    }
    Ok(())
}

async fn run_job(job: &Job) -> Result<()> {
    let Some(csv) = resolve_statement(job) else {
        log::error!(
            "no statement artifact for the job writing {}; skipping",
            job.output.display()
        );
        return Ok(());
    };
    log::debug!("statement for {}: {}", job.output.display(), csv.display());

    match job.kind {
        JobKind::Bank => {
            let (start, end) = job.date_range();
            run_balance(&csv, &start, &end, &job.output, job.title.clone(), &job.font)
        }
        JobKind::Credit => {
            run_usage(
                &csv,
                &job.output,
                job.categorize,
                job.api_key.clone(),
                job.title.clone(),
                &job.font,
            )
            .await
        }
    }
}

/// Pick the statement file for a job: the explicit path when configured,
/// otherwise the newest CSV in the download directory. `None` is the
/// missing-artifact case; the job produces no output.
fn resolve_statement(job: &Job) -> Option<PathBuf> {
    if let Some(csv) = &job.csv {
        return csv.exists().then(|| csv.clone());
    }
    let dirs: Vec<PathBuf> = job.download_dir.iter().cloned().collect();
    discover::latest_csv(&dirs)
}

fn run_balance(
    csv: &Path,
    start: &str,
    end: &str,
    out: &Path,
    title: Option<String>,
    font: &str,
) -> Result<()> {
    let statement =
        parse_bank_statement(csv).with_context(|| format!("parsing {}", csv.display()))?;
    log::debug!(
        "parsed {} transactions ({} metadata lines)",
        statement.transactions.len(),
        statement.metadata.len()
    );

    let filtered = filter_by_range(&statement.transactions, start, end)?;
    let title = title.or_else(|| Some(format!("Account balance from {start} to {end}")));
    let spec = balance_chart(&filtered, title);
    chart::render_png(&spec, out, font)?;

    log::info!(
        "wrote balance chart of {} transactions to {}",
        filtered.len(),
        out.display()
    );
    Ok(())
}

async fn run_usage(
    csv: &Path,
    out: &Path,
    categorize: bool,
    api_key: Option<String>,
    title: Option<String>,
    font: &str,
) -> Result<()> {
    let entries =
        parse_credit_statement(csv).with_context(|| format!("parsing {}", csv.display()))?;
    log::debug!("parsed {} credit entries", entries.len());

    let categorized: Vec<CategorizedEntry> = if categorize {
        let key = api_key
            .or_else(|| std::env::var("GOOGLE_API_KEY").ok())
            .context("no API key: pass --api-key, set api_key in the job, or GOOGLE_API_KEY")?;
        let client = GeminiClient::new(key);
        match categorize_entries(&client, &entries, &default_categories(), &[]).await {
            Ok(categorized) => categorized,
            Err(e @ ClassifyError::ResponseParse(_)) => {
                log::error!("categorization produced no usable output: {e}");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        }
    } else {
        entries
            .iter()
            .map(|e| e.with_category(FALLBACK_CATEGORY))
            .collect()
    };

    let spec = usage_chart(&categorized, title);
    chart::render_png(&spec, out, font)?;

    log::info!(
        "wrote usage chart of {} entries to {}",
        categorized.len(),
        out.display()
    );
    Ok(())
}
