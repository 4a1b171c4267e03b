//! Background task spawn helpers.
//!
//! Each helper spawns one tokio task that performs a single remote operation
//! and sends exactly one [`AppEvent`] back into the loop. Issuing and
//! consuming are always decoupled through the channel; nothing here is
//! awaited inline. Tasks are never cancelled; a result arriving after the
//! user navigated away still applies.
//!
//! Helpers that need the remote store return `false` in local mode without
//! spawning anything; the caller decides what to report.

use crate::app::{App, AppEvent};
use crate::model::CategoryName;
use crate::remote::RemoteClient;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Simulated payment-processing delay for checkout.
pub(super) const CHECKOUT_PROCESSING_DELAY: Duration = Duration::from_millis(1500);

async fn send_event(tx: mpsc::Sender<AppEvent>, event: AppEvent) {
    if tx.send(event).await.is_err() {
        tracing::warn!("Event receiver dropped, discarding task result");
    }
}

/// Spawn a category fetch. Returns `false` in local mode.
pub fn spawn_fetch_categories(app: &App, event_tx: &mpsc::Sender<AppEvent>) -> bool {
    let Some(remote) = app.remote.clone() else {
        return false;
    };
    let token = app.token.clone();
    let tx = event_tx.clone();
    tokio::spawn(async move {
        let event = match remote.fetch_categories(&token).await {
            Ok(categories) => AppEvent::CategoriesFetched(categories),
            Err(e) => {
                tracing::warn!(error = %e, "Category fetch failed");
                AppEvent::RemoteFailed(e.to_string())
            }
        };
        send_event(tx, event).await;
    });
    true
}

/// Spawn an upsert of the named category carrying the full current
/// collection. Returns `false` in local mode.
pub(super) fn spawn_sync_category(
    app: &App,
    category: CategoryName,
    event_tx: &mpsc::Sender<AppEvent>,
) -> bool {
    let Some(remote) = app.remote.clone() else {
        return false;
    };
    let token = app.token.clone();
    let existing_id = app.category_ids.get(&category).cloned();
    let tx = event_tx.clone();

    match category {
        CategoryName::Food => {
            let items = app.food.clone();
            tokio::spawn(sync_task(remote, token, category, existing_id, items, tx));
        }
        CategoryName::Subscriptions => {
            let items = app.subscriptions.clone();
            tokio::spawn(sync_task(remote, token, category, existing_id, items, tx));
        }
        CategoryName::Academics => {
            let items = app.academics.clone();
            tokio::spawn(sync_task(remote, token, category, existing_id, items, tx));
        }
    }
    true
}

async fn sync_task<T: Serialize + Send + Sync + 'static>(
    remote: Arc<RemoteClient>,
    token: String,
    category: CategoryName,
    existing_id: Option<String>,
    items: Vec<T>,
    tx: mpsc::Sender<AppEvent>,
) {
    let result = remote
        .upsert_category(&token, category, existing_id.as_deref(), &items)
        .await;
    let event = match result {
        Ok(()) => AppEvent::SyncCompleted,
        Err(e) => {
            tracing::warn!(error = %e, category = %category, "Category sync failed");
            AppEvent::RemoteFailed(e.to_string())
        }
    };
    send_event(tx, event).await;
}

/// Spawn recipe generation from the current cart's ingredient names.
/// Returns `false` in local mode.
pub(super) fn spawn_recipe(app: &App, event_tx: &mpsc::Sender<AppEvent>) -> bool {
    let Some(remote) = app.remote.clone() else {
        return false;
    };
    let ingredients = app.cart_ingredients();
    let tx = event_tx.clone();
    tokio::spawn(async move {
        let event = match remote.generate_recipe(&ingredients).await {
            Ok(text) => AppEvent::RecipeGenerated(text),
            Err(e) => {
                tracing::warn!(error = %e, "Recipe generation failed");
                AppEvent::RemoteFailed(e.to_string())
            }
        };
        send_event(tx, event).await;
    });
    true
}

/// Spawn the academics scrape. Returns `false` in local mode.
pub(super) fn spawn_scrape(app: &App, event_tx: &mpsc::Sender<AppEvent>) -> bool {
    let Some(remote) = app.remote.clone() else {
        return false;
    };
    let token = app.token.clone();
    let tx = event_tx.clone();
    tokio::spawn(async move {
        let event = match remote.scrape_academics(&token).await {
            Ok(items) => AppEvent::AcademicsScraped(items),
            Err(e) => {
                tracing::warn!(error = %e, "Academics scrape failed");
                AppEvent::RemoteFailed(e.to_string())
            }
        };
        send_event(tx, event).await;
    });
    true
}

/// Spawn the checkout processing delay. Works in both modes.
pub(super) fn spawn_checkout(event_tx: &mpsc::Sender<AppEvent>) {
    let tx = event_tx.clone();
    tokio::spawn(async move {
        tokio::time::sleep(CHECKOUT_PROCESSING_DELAY).await;
        send_event(tx, AppEvent::CheckoutProcessed).await;
    });
}
