//! Watchlist table component

use super::super::state::DashboardState;
use super::super::utils::active_label;
use crate::models::format_timestamp;
use ratatui::Frame;
use ratatui::layout::Constraint;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Padding, Row, Table};

/// Render the monitored tickers as a table.
pub fn render_watchlist(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header = Row::new(["Symbol", "Market", "Active", "Created"]).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let rows = state.tickers.iter().map(|ticker| {
        Row::new([
            Cell::from(ticker.symbol.clone()).style(Style::default().add_modifier(Modifier::BOLD)),
            Cell::from(ticker.market.clone()),
            Cell::from(active_label(ticker.active)),
            Cell::from(format_timestamp(&ticker.created_at)),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(15),
            Constraint::Percentage(45),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title("WATCHLIST · tickers currently monitored by the pipeline · [R] Run now")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );

    f.render_widget(table, area);
}
