use crate::app::{App, MENU_ENTRIES};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::render::{hint_style, selected_style};

/// Render the main menu.
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let session = Paragraph::new(format!("Session: {}", app.token))
        .style(Style::default().fg(Color::Green));
    f.render_widget(session, chunks[0]);

    let items: Vec<ListItem> = MENU_ENTRIES
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let (marker, style) = if i == app.cursor {
                ("> ", selected_style())
            } else {
                ("  ", Style::default())
            };
            ListItem::new(Line::styled(format!("{}{}", marker, entry), style))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Personal Dashboard "),
    );
    f.render_widget(list, chunks[1]);

    let hint = Paragraph::new("[Up/Down] navigate  [Enter] select  [q] quit").style(hint_style());
    f.render_widget(hint, chunks[2]);
}
