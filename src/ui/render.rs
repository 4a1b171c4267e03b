//! Render functions for the TUI.
//!
//! This module handles render dispatch per screen plus the small style
//! helpers shared by the screen widgets. Styling is deliberately plain: a
//! highlight for the cursor row, a dim hint line, and an accent for
//! in-flight operations.

use crate::app::{App, Screen};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

use super::{academics, checkout, food, form, menu, recipe, status, subscriptions};

/// Minimum terminal dimensions required for normal operation.
pub(super) const MIN_WIDTH: u16 = 50;
pub(super) const MIN_HEIGHT: u16 = 10;

/// Main render dispatch function.
///
/// Routes to the appropriate screen renderer based on application state.
/// Handles terminal size validation before rendering.
pub(super) fn render(f: &mut Frame, app: &App) {
    let area = f.area();

    // Guard against zero-width/height to prevent panics
    if area.width < 1 || area.height < 1 {
        return;
    }

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = if area.height < 3 || area.width < 20 {
            Paragraph::new("Too small")
        } else {
            Paragraph::new(format!(
                "Terminal too small\n\nMinimum: {}x{}\nCurrent: {}x{}",
                MIN_WIDTH, MIN_HEIGHT, area.width, area.height
            ))
            .alignment(Alignment::Center)
        };
        f.render_widget(msg, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    match app.screen {
        Screen::Menu => menu::render(f, app, chunks[0]),
        Screen::FoodList => food::render(f, app, chunks[0]),
        Screen::FoodRecipe => recipe::render(f, app, chunks[0]),
        Screen::FoodCheckout | Screen::FoodCheckoutProcessing => {
            checkout::render(f, app, chunks[0]);
        }
        Screen::Subscriptions => subscriptions::render(f, app, chunks[0]),
        Screen::Academics | Screen::AcademicsSyncing => academics::render(f, app, chunks[0]),
        Screen::FoodForm | Screen::SubscriptionForm => form::render(f, app, chunks[0]),
    }

    status::render(f, app, chunks[1]);
}

/// Style for the row under the cursor.
pub(super) fn selected_style() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD)
}

/// Dim style for keybinding hint lines.
pub(super) fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Accent style for in-flight operations and cart markers.
pub(super) fn accent_style() -> Style {
    Style::default().fg(Color::Yellow)
}

/// Spinner glyph for the given animation frame.
pub(super) fn spinner_char(frame: usize) -> char {
    const FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
    FRAMES[frame % FRAMES.len()]
}
