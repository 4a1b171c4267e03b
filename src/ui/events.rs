//! Application event handling.
//!
//! This module processes background task results: fetch reconciliation,
//! sync acknowledgements, recipe and scrape completion, checkout, and
//! remote failures. Results apply unconditionally; there is no staleness
//! tracking, so a task finishing after the user navigated elsewhere still
//! lands its effect.

use crate::app::{App, AppEvent, RecipeState, Screen};
use crate::model::CategoryName;
use tokio::sync::mpsc;

use super::tasks;

/// Handle one background task result.
pub fn handle_app_event(app: &mut App, event: AppEvent, event_tx: &mpsc::Sender<AppEvent>) {
    match event {
        AppEvent::CategoriesFetched(categories) => {
            tracing::debug!(count = categories.len(), "Categories fetched");
            app.apply_categories(categories);
            app.set_status("Data loaded.");
        }

        AppEvent::SyncCompleted => {
            // Only rewrite the status while its "Syncing..." note is still
            // current; an auto-renew or checkout announcement stays put.
            if app.take_sync_ack() {
                app.set_status("Saved to remote store.");
            }
            // Refetch for the canonical server-assigned category ids.
            tasks::spawn_fetch_categories(app, event_tx);
        }

        AppEvent::RecipeGenerated(text) => {
            tracing::debug!(len = text.len(), "Recipe generated");
            app.recipe = RecipeState::Ready(text);
        }

        AppEvent::AcademicsScraped(items) => {
            tracing::info!(count = items.len(), "Academics scrape complete");
            app.academics = items;
            app.screen = Screen::Academics;
            app.cursor = 0;
            app.set_status("Academics synced.");
            // The backend persisted the scrape itself; fetch to pick up the
            // category id it assigned.
            tasks::spawn_fetch_categories(app, event_tx);
        }

        AppEvent::CheckoutProcessed => {
            app.drain_cart();
            app.screen = Screen::FoodList;
            app.cursor = 0;
            app.set_status("Order placed. Stock updated.");
            // Local mode has nothing to persist; the stock is already visible.
            tasks::spawn_sync_category(app, CategoryName::Food, event_tx);
        }

        AppEvent::RemoteFailed(error) => {
            tracing::warn!(%error, "Remote task failed");
            // Failures never roll back local state or change the screen; the
            // recipe screen is the one place the error shows inline.
            if app.screen == Screen::FoodRecipe {
                app.recipe = RecipeState::Failed(format!("Server error: {}", error));
            }
            app.set_status(format!("Error: {}", error));
        }
    }
}
