use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::render::{accent_style, hint_style, selected_style};

/// Render the food inventory and cart list.
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let items: Vec<ListItem> = if app.food.is_empty() {
        vec![ListItem::new("No items. Press 'a' to add one.")]
    } else {
        app.food
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let style = if i == app.cursor {
                    selected_style()
                } else {
                    Style::default()
                };
                let marker = if i == app.cursor { "> " } else { "  " };

                let cart = if item.cart_qty > 0 {
                    Span::styled(format!("[{:2}]", item.cart_qty), accent_style())
                } else {
                    Span::raw("[  ]")
                };

                let renew = if item.renew_threshold > 0 {
                    Span::styled(format!(" [renew<={}]", item.renew_threshold), accent_style())
                } else {
                    Span::raw("")
                };

                ListItem::new(Line::from(vec![
                    Span::styled(marker, style),
                    cart,
                    Span::styled(
                        format!(
                            " {:<18} (stock: {:2}) - ${:.2}",
                            item.name, item.amount, item.price
                        ),
                        style,
                    ),
                    renew,
                ]))
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Food - Inventory & Cart "),
    );
    f.render_widget(list, chunks[0]);

    let hint = Paragraph::new(
        "[Left/Right] cart qty  [Space] toggle  [a]dd [e]dit [d]el [r]ecipe [c]heckout  [Esc] back",
    )
    .style(hint_style());
    f.render_widget(hint, chunks[1]);
}
