use crate::app::{App, Screen, DELIVERY_CHOICES};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::render::{accent_style, hint_style, selected_style, spinner_char};

/// Render the checkout screen, including its blocking processing variant.
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let block = Block::default().borders(Borders::ALL).title(" Checkout ");

    if app.screen == Screen::FoodCheckoutProcessing {
        let body = Paragraph::new(format!(
            "{} Placing your order and processing payment...",
            spinner_char(app.spinner_frame)
        ))
        .style(accent_style())
        .block(block);
        f.render_widget(body, chunks[0]);
        f.render_widget(
            Paragraph::new("Processing... please wait").style(hint_style()),
            chunks[1],
        );
        return;
    }

    let cart = app.cart_lines();
    let mut lines: Vec<Line> = Vec::new();

    if cart.is_empty() {
        lines.push(Line::raw("Cart empty."));
        lines.push(Line::raw(
            "Go back and press Right to add items to the cart.",
        ));
    } else {
        lines.push(Line::raw("Items in cart:"));
        for (qty, name, cost) in &cart {
            lines.push(Line::raw(format!("  {}x {:<15} - ${:.2}", qty, name, cost)));
        }
        lines.push(Line::raw(format!("Subtotal: ${:.2}", app.cart_subtotal())));
        lines.push(Line::raw(""));
        lines.push(Line::raw("Choose delivery:"));
        for (i, choice) in DELIVERY_CHOICES.iter().enumerate() {
            let (marker, style) = if i == app.cursor {
                ("> ", selected_style())
            } else {
                ("  ", Style::default())
            };
            lines.push(Line::styled(format!("  {}{}", marker, choice), style));
        }
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            format!("Total to pay: ${:.2}", app.checkout_total(app.cursor)),
            accent_style(),
        ));
    }

    f.render_widget(Paragraph::new(lines).block(block), chunks[0]);
    f.render_widget(
        Paragraph::new("[Up/Down] delivery  [Enter] place order  [Esc] cancel").style(hint_style()),
        chunks[1],
    );
}
