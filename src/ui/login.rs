//! Login screen module

use crate::ui::dashboard::DashboardState;
use crate::ui::dashboard::utils::mask;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Flex, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

/// Renders the password form. The input is always masked.
pub fn render_login(f: &mut Frame, state: &DashboardState) {
    let [row] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8)])
        .flex(Flex::Center)
        .areas(f.area());
    let [area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(50)])
        .flex(Flex::Center)
        .areas(row);

    let cursor = if state.tick % 10 < 5 { "_" } else { " " };
    let lines = vec![
        Line::from(Span::styled(
            "Admin password",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::DarkGray)),
            Span::raw(mask(&state.login_input)),
            Span::raw(cursor),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] Unlock | [Esc] Exit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .title("Login")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
