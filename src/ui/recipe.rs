use crate::app::{App, RecipeState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::render::{accent_style, hint_style, spinner_char};

/// Render the generated recipe (or its in-flight/failed placeholder).
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Generated Recipe ");

    let body = match &app.recipe {
        RecipeState::Idle => Paragraph::new("No recipe yet."),
        RecipeState::Generating => Paragraph::new(format!(
            "{} Contacting the recipe service and generating...",
            spinner_char(app.spinner_frame)
        ))
        .style(accent_style()),
        RecipeState::Ready(text) => Paragraph::new(text.as_str()).wrap(Wrap { trim: false }),
        RecipeState::Failed(error) => {
            Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red))
        }
    };
    f.render_widget(body.block(block), chunks[0]);

    let hint = if app.recipe == RecipeState::Generating {
        "Generating..."
    } else {
        "[Esc] back"
    };
    f.render_widget(Paragraph::new(hint).style(hint_style()), chunks[1]);
}
