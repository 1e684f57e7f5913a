//! Dashboard main renderer

use super::components::{footer, header, jobs, watchlist};
use super::state::DashboardState;
use crate::ui::login::render_login;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

/// Render the login form while locked, otherwise the watchlist and jobs.
pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    if state.is_locked() {
        render_login(f, state);
        return;
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Percentage(45),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);
    watchlist::render_watchlist(f, main_chunks[1], state);
    jobs::render_jobs_panel(f, main_chunks[2], state);
    footer::render_footer(f, main_chunks[3]);
}
