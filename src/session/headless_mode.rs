//! Headless mode execution
//!
//! One-shot commands for scripts. Unlike the dashboard, failures are returned to
//! the caller so the process exits non-zero.

use crate::api::AdminApi;
use crate::models::{Job, Ticker, format_timestamp};
use crate::ui::dashboard::utils::{active_label, format_job_timing};
use log::info;
use std::error::Error;
use std::io::Write;

/// What a headless invocation does.
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
pub enum HeadlessCommand {
    /// Print the watchlist
    Watchlist,
    /// Print the job history
    Jobs,
    /// Trigger a pipeline run, then print the job history
    Run,
}

/// Runs one headless command against `api`, writing its report to `out`.
///
/// # Returns
/// * `Ok(())` - Every request succeeded
/// * `Err` - A request failed or the report could not be written
pub async fn run_headless_mode(
    command: HeadlessCommand,
    api: &dyn AdminApi,
    out: &mut dyn Write,
) -> Result<(), Box<dyn Error>> {
    info!("Running headless command: {}", command);
    match command {
        HeadlessCommand::Watchlist => {
            let tickers = api.get_watchlist().await?;
            out.write_all(format_watchlist(&tickers).as_bytes())?;
        }
        HeadlessCommand::Jobs => {
            let jobs = api.get_jobs().await?;
            out.write_all(format_jobs(&jobs).as_bytes())?;
        }
        HeadlessCommand::Run => {
            api.run_pipeline().await?;
            writeln!(out, "Pipeline run triggered")?;
            let jobs = api.get_jobs().await?;
            out.write_all(format_jobs(&jobs).as_bytes())?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Plain-text watchlist table, one ticker per line.
pub fn format_watchlist(tickers: &[Ticker]) -> String {
    let mut table = format!(
        "{:<10} {:<10} {:<6} {}\n",
        "SYMBOL", "MARKET", "ACTIVE", "CREATED"
    );
    for ticker in tickers {
        table.push_str(&format!(
            "{:<10} {:<10} {:<6} {}\n",
            ticker.symbol,
            ticker.market,
            active_label(ticker.active),
            format_timestamp(&ticker.created_at)
        ));
    }
    table
}

/// Plain-text job history, two lines per job plus the summary when present.
pub fn format_jobs(jobs: &[Job]) -> String {
    if jobs.is_empty() {
        return "No jobs yet\n".to_string();
    }
    let mut report = String::new();
    for job in jobs {
        report.push_str(&format!("Job #{}  {}\n", job.id, job.status));
        report.push_str(&format!("  {}\n", format_job_timing(job)));
        if let Some(summary) = &job.summary {
            report.push_str(&format!("  {}\n", summary));
        }
    }
    report
}
