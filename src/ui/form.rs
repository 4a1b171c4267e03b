use crate::app::App;
use crate::form::{EditTarget, FormKind, FormState};
use crate::model::BillingCycle;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::render::{hint_style, selected_style};

/// Render the add/edit form for either collection.
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    let Some(form) = app.form.as_ref() else {
        // Screen/form invariant should make this unreachable.
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let title = match form.target {
        EditTarget::New => " Add Item ",
        EditTarget::Existing(_) => " Edit Item ",
    };

    let mut lines: Vec<Line> = Vec::new();
    for (i, field) in form.fields.iter().enumerate() {
        lines.push(field_line(form, i, &field.value, field.placeholder));
    }
    if form.kind == FormKind::Subscription {
        lines.push(Line::raw(""));
        lines.push(cycle_line(form));
    }

    let body = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(body, chunks[0]);

    let hint = match form.kind {
        FormKind::Food => "[Tab/Up/Down] field  [Enter] next/save  [Esc] cancel",
        FormKind::Subscription => {
            "[Tab/Up/Down] field  [Left/Right] cycle  [Enter] next/save  [Esc] cancel"
        }
    };
    f.render_widget(Paragraph::new(hint).style(hint_style()), chunks[1]);
}

/// One text field row: focus marker, then the value or its dim placeholder.
fn field_line<'a>(form: &FormState, index: usize, value: &'a str, placeholder: &'a str) -> Line<'a> {
    let focused = form.focus == index;
    let marker = if focused { "> " } else { "  " };
    let marker_style = if focused {
        selected_style()
    } else {
        Style::default()
    };

    let content = if value.is_empty() {
        Span::styled(placeholder, Style::default().fg(Color::DarkGray))
    } else if focused {
        Span::styled(value, selected_style())
    } else {
        Span::raw(value)
    };

    Line::from(vec![Span::styled(marker, marker_style), content])
}

/// The cycle selector row: radio markers over the fixed choice set.
fn cycle_line(form: &FormState) -> Line<'static> {
    let focused = form.selector_focused();
    let label_style = if focused {
        selected_style()
    } else {
        Style::default()
    };

    let mut spans = vec![Span::styled(
        if focused { "> Cycle: " } else { "  Cycle: " },
        label_style,
    )];
    for (i, cycle) in BillingCycle::ALL.iter().enumerate() {
        let marker = if form.cycle_index == i { "(x)" } else { "( )" };
        spans.push(Span::styled(
            format!("{} {}   ", marker, cycle.label()),
            if form.cycle_index == i {
                label_style
            } else {
                Style::default()
            },
        ));
    }
    Line::from(spans)
}
