use crate::app::{App, Screen};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::render::{accent_style, hint_style, selected_style, spinner_char};

/// Render the academics deadline list, including its blocking scrape variant.
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let block = Block::default().borders(Borders::ALL).title(" Academics ");

    if app.screen == Screen::AcademicsSyncing {
        let body = Paragraph::new(format!(
            "{} Scraping Canvas for assignments...",
            spinner_char(app.spinner_frame)
        ))
        .style(accent_style())
        .block(block);
        f.render_widget(body, chunks[0]);
        f.render_widget(
            Paragraph::new("Scraping... please wait").style(hint_style()),
            chunks[1],
        );
        return;
    }

    let items: Vec<ListItem> = if app.academics.is_empty() {
        vec![ListItem::new("No pending assignments.")]
    } else {
        app.academics
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let (marker, style) = if i == app.cursor {
                    ("> ", selected_style())
                } else {
                    ("  ", Style::default())
                };
                ListItem::new(Line::styled(
                    format!("{}{:<35} | {}", marker, item.name, item.due_date),
                    style,
                ))
            })
            .collect()
    };

    f.render_widget(List::new(items).block(block), chunks[0]);

    let hint =
        Paragraph::new("[s] sync from Canvas  [Up/Down] navigate  [Esc] back").style(hint_style());
    f.render_widget(hint, chunks[1]);
}
