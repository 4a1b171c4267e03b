use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar: the human-readable outcome of the last operation.
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    let style = Style::default().bg(Color::DarkGray).fg(Color::White);
    let paragraph = Paragraph::new(app.status.as_ref()).style(style);
    f.render_widget(paragraph, area);
}
