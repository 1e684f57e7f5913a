//! Backend records shown by the dashboard.
//!
//! Timestamps are kept exactly as the backend sent them and only parsed for display.

use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A ticker monitored by the pipeline.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Ticker {
    pub id: i64,
    pub symbol: String,
    pub market: String,
    pub active: bool,
    pub created_at: String,
}

/// One pipeline execution attempt.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub id: i64,
    pub started_at: String,
    /// `None` while the job is still running.
    #[serde(default)]
    pub finished_at: Option<String>,
    pub status: String,
    #[serde(default)]
    pub summary: Option<String>,
}

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a backend timestamp as `YYYY-MM-DD HH:MM:SS`.
///
/// RFC 3339 values are converted to the local timezone. Naive values are wall-clock
/// times and are shown unchanged. Anything else is returned verbatim.
pub fn format_timestamp(raw: &str) -> String {
    let trimmed = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return ts.with_timezone(&Local).format(DISPLAY_FORMAT).to_string();
    }
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f"))
        .map(|naive| naive.format(DISPLAY_FORMAT).to_string())
        .unwrap_or_else(|_| raw.to_string())
}
