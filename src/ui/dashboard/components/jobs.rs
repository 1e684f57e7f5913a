//! Dashboard jobs panel component
//!
//! Renders recent pipeline jobs, or a loading notice while a load is in flight

use super::super::state::DashboardState;
use super::super::utils::{format_job_timing, get_status_color};
use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the recent jobs list.
pub fn render_jobs_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let lines: Vec<Line> = if state.loading {
        vec![Line::from("Loading...")]
    } else {
        state
            .jobs
            .iter()
            .flat_map(|job| {
                let mut lines = vec![
                    Line::from(vec![
                        Span::styled(
                            format!("Job #{}", job.id),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                        Span::raw("  "),
                        Span::styled(
                            job.status.clone(),
                            Style::default().fg(get_status_color(&job.status)),
                        ),
                    ]),
                    Line::from(Span::styled(
                        format_job_timing(job),
                        Style::default().fg(Color::DarkGray),
                    )),
                ];
                if let Some(summary) = &job.summary {
                    lines.push(Line::from(Span::styled(
                        summary.clone(),
                        Style::default().fg(Color::Gray),
                    )));
                }
                lines.push(Line::from(""));
                lines
            })
            .collect()
    };

    let jobs_block = Block::default()
        .title("RECENT JOBS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let jobs_widget = Paragraph::new(lines)
        .block(jobs_block)
        .wrap(Wrap { trim: true });

    f.render_widget(jobs_widget, area);
}
