use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::render::{hint_style, selected_style};

/// Render the subscription list.
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let items: Vec<ListItem> = if app.subscriptions.is_empty() {
        vec![ListItem::new("No subscriptions. Press 'a' to add one.")]
    } else {
        app.subscriptions
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let (marker, style) = if i == app.cursor {
                    ("> ", selected_style())
                } else {
                    ("  ", Style::default())
                };
                ListItem::new(Line::styled(
                    format!(
                        "{}{:<15} | {:<9} | ${:.2} | due {}",
                        marker,
                        item.name,
                        item.cycle.label(),
                        item.price,
                        item.due_date
                    ),
                    style,
                ))
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Subscriptions "),
    );
    f.render_widget(list, chunks[0]);

    let hint = Paragraph::new("[Up/Down] navigate  [a]dd [e]dit [d]elete  [Esc] back")
        .style(hint_style());
    f.render_widget(hint, chunks[1]);
}
