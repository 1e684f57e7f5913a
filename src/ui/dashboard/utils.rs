//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::models::{Job, format_timestamp};
use ratatui::prelude::Color;

/// Table label for a ticker's active flag.
pub fn active_label(active: bool) -> &'static str {
    if active { "Yes" } else { "No" }
}

/// `Started <date> · Finished <date|pending>`
pub fn format_job_timing(job: &Job) -> String {
    let finished = job
        .finished_at
        .as_deref()
        .map(format_timestamp)
        .unwrap_or_else(|| "pending".to_string());
    format!(
        "Started {} · Finished {}",
        format_timestamp(&job.started_at),
        finished
    )
}

/// Get a ratatui color for a job status string
pub fn get_status_color(status: &str) -> Color {
    match status.to_ascii_uppercase().as_str() {
        "SUCCESS" | "COMPLETED" | "DONE" => Color::LightGreen,
        "RUNNING" | "PENDING" => Color::LightYellow,
        "FAILED" | "ERROR" => Color::LightRed,
        _ => Color::Gray,
    }
}

/// Mask a password for display.
pub fn mask(input: &str) -> String {
    "•".repeat(input.chars().count())
}
