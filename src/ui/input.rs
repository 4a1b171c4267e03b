//! Input handling for the TUI: the navigation state machine.
//!
//! One key event comes in, the current screen decides what it means. Form
//! screens route to the form controller, the two blocking screens swallow
//! everything, and every other screen uses the navigation table below.

use crate::app::{App, AppEvent, RecipeState, Screen};
use crate::form::EditTarget;
use crossterm::event::{KeyCode, KeyModifiers};
use tokio::sync::mpsc;

use super::tasks;
use super::Action;

/// Main input dispatch function.
///
/// Routes input to the form controller or the navigation handler based on
/// the current screen. Returns [`Action::Quit`] when the application should
/// terminate.
pub fn handle_key(
    app: &mut App,
    code: KeyCode,
    modifiers: KeyModifiers,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Action {
    // Hard quit bypasses every state, including the blocking screens.
    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    // Blocking screens ignore keys; only their own task result moves them on.
    if app.screen.is_blocking() {
        return Action::Continue;
    }

    if app.screen.is_form() {
        return handle_form_key(app, code, event_tx);
    }

    handle_nav_key(app, code, event_tx)
}

/// Handle input while a form is open.
///
/// Focus cycles over the logical field count; the subscription cycle
/// selector consumes left/right with clamping. Confirm on the last field
/// attempts a save, anywhere else it advances focus.
fn handle_form_key(app: &mut App, code: KeyCode, event_tx: &mpsc::Sender<AppEvent>) -> Action {
    if code == KeyCode::Esc {
        app.go_back();
        return Action::Continue;
    }

    let Some(form) = app.form.as_mut() else {
        // Form invariant broken (should not happen); recover by leaving.
        tracing::error!(screen = ?app.screen, "Form screen without form state");
        app.go_back();
        return Action::Continue;
    };

    match code {
        KeyCode::Left if form.selector_focused() => form.selector_left(),
        KeyCode::Right if form.selector_focused() => form.selector_right(),
        KeyCode::Enter if form.on_last_field() => try_save(app, event_tx),
        KeyCode::Tab | KeyCode::Down | KeyCode::Enter => form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
        KeyCode::Backspace => form.backspace(),
        KeyCode::Char(c) => form.insert_char(c),
        _ => {}
    }
    Action::Continue
}

/// Attempt to save the open form and dispatch the background sync.
///
/// An empty name is a validation no-op: nothing changes and the form stays
/// open. On success the mutation is already applied locally; the back
/// transition happens immediately, with the sync still in flight.
fn try_save(app: &mut App, event_tx: &mpsc::Sender<AppEvent>) {
    if let Some(category) = app.save_form() {
        // Local mode completes instantly: acknowledge the sync status the
        // same way SyncCompleted would, so announcements like the auto-renew
        // top-up are not clobbered.
        if !tasks::spawn_sync_category(app, category, event_tx) && app.take_sync_ack() {
            app.set_status("Saved locally.");
        }
        app.go_back();
    }
}

/// Handle input on the non-form, non-blocking screens.
fn handle_nav_key(app: &mut App, code: KeyCode, event_tx: &mpsc::Sender<AppEvent>) -> Action {
    match code {
        KeyCode::Char('q') => return Action::Quit,
        KeyCode::Esc | KeyCode::Backspace => app.go_back(),
        KeyCode::Up | KeyCode::Char('k') => app.nav_up(),
        KeyCode::Down | KeyCode::Char('j') => app.nav_down(),

        KeyCode::Char('a') => match app.screen {
            Screen::FoodList => app.open_food_form(EditTarget::New),
            Screen::Subscriptions => app.open_subscription_form(EditTarget::New),
            _ => {}
        },

        KeyCode::Char('e') => match app.screen {
            Screen::FoodList if !app.food.is_empty() => {
                app.open_food_form(EditTarget::Existing(app.cursor));
            }
            Screen::Subscriptions if !app.subscriptions.is_empty() => {
                app.open_subscription_form(EditTarget::Existing(app.cursor));
            }
            _ => {}
        },

        KeyCode::Char('d') => {
            if let Some(category) = app.delete_at_cursor() {
                if !tasks::spawn_sync_category(app, category, event_tx) && app.take_sync_ack() {
                    app.set_status("Deleted locally.");
                }
            }
        }

        KeyCode::Char('s') if app.screen == Screen::Academics => {
            if tasks::spawn_scrape(app, event_tx) {
                app.screen = Screen::AcademicsSyncing;
            } else {
                app.set_status("Running locally: academics scraping needs a remote session.");
            }
        }

        KeyCode::Char('r') if app.screen == Screen::FoodList => {
            app.screen = Screen::FoodRecipe;
            app.recipe = if tasks::spawn_recipe(app, event_tx) {
                RecipeState::Generating
            } else {
                RecipeState::Failed(
                    "Running locally: recipe generation needs a remote session.".to_string(),
                )
            };
        }

        KeyCode::Char('c') if app.screen == Screen::FoodList => {
            app.screen = Screen::FoodCheckout;
            app.cursor = 0;
        }

        // Cart edits: local only, synced at checkout time.
        KeyCode::Right | KeyCode::Char('+') if app.screen == Screen::FoodList => {
            app.cart_increment();
        }
        KeyCode::Left | KeyCode::Char('-') if app.screen == Screen::FoodList => {
            app.cart_decrement();
        }
        KeyCode::Char(' ') if app.screen == Screen::FoodList => app.cart_toggle(),

        KeyCode::Enter => match app.screen {
            Screen::Menu => app.open_menu_entry(),
            Screen::FoodCheckout => {
                app.screen = Screen::FoodCheckoutProcessing;
                tasks::spawn_checkout(event_tx);
            }
            _ => {}
        },

        _ => {}
    }
    Action::Continue
}
