//! Central session state and the optimistic mutation coordinator.
//!
//! The `App` struct is the single source of truth threaded through the event
//! loop: which screen is active, where the cursor is, the three collections,
//! and the status line. Every local edit mutates the collections here first,
//! synchronously; remote persistence happens afterwards in background tasks
//! whose results re-enter the loop as [`AppEvent`]s.

use crate::fixtures;
use crate::form::{EditTarget, FormKind, FormState};
use crate::model::{CategoryName, FoodItem, StudyItem, SubscriptionItem};
use crate::remote::{decode_items, Category, RemoteClient};
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

/// Entries on the main menu, in cursor order.
pub const MENU_ENTRIES: [&str; 3] = [
    "Food (inventory, recipes & shopping)",
    "Subscriptions (payments & due dates)",
    "Academics (scraped assignments)",
];

/// Delivery choices on the checkout screen, in cursor order.
pub const DELIVERY_CHOICES: [&str; 2] = ["Delivery (+$3.00)", "Pick up (free)"];

/// Units added to stock when an auto-renew threshold triggers at save time.
pub const RESTOCK_QUANTITY: u32 = 3;

/// Flat fee for the delivery choice at `index`.
pub fn delivery_fee(index: usize) -> f64 {
    if index == 0 {
        3.00
    } else {
        0.0
    }
}

// ============================================================================
// Screens
// ============================================================================

/// The active top-level view. Exactly one is active at a time; it determines
/// which key handlers apply and which collection the cursor ranges over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    FoodList,
    FoodRecipe,
    FoodCheckout,
    /// Blocking: checkout task in flight, key input ignored.
    FoodCheckoutProcessing,
    Subscriptions,
    Academics,
    /// Blocking: scrape task in flight, key input ignored.
    AcademicsSyncing,
    FoodForm,
    SubscriptionForm,
}

impl Screen {
    /// Blocking screens swallow every key event except the hard quit; only
    /// the arrival of their own task result moves the machine on.
    pub fn is_blocking(self) -> bool {
        matches!(
            self,
            Screen::FoodCheckoutProcessing | Screen::AcademicsSyncing
        )
    }

    /// Form screens route keys to the form controller instead of navigation.
    pub fn is_form(self) -> bool {
        matches!(self, Screen::FoodForm | Screen::SubscriptionForm)
    }
}

// ============================================================================
// Cursor model
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Step a cursor over a collection of `len` elements.
///
/// Up decrements with floor 0; down increments with ceiling `len - 1`
/// (or 0 for an empty collection). Never wraps.
pub fn step_cursor(cursor: usize, len: usize, direction: Direction) -> usize {
    match direction {
        Direction::Up => cursor.saturating_sub(1),
        Direction::Down => (cursor + 1).min(len.saturating_sub(1)),
    }
}

// ============================================================================
// Async task results
// ============================================================================

/// Results of background tasks, delivered over the event channel.
///
/// One variant per task kind; the event loop dispatches by tag. A task sends
/// exactly one of these, and there is no cancellation; a result arriving
/// after the user navigated elsewhere still applies its effect.
#[derive(Debug)]
pub enum AppEvent {
    /// Remote fetch finished: category ids plus the canonical collections.
    CategoriesFetched(Vec<Category>),
    /// A background upsert finished successfully.
    SyncCompleted,
    /// Recipe generation finished with the recipe text.
    RecipeGenerated(String),
    /// Academics scrape finished with the fresh deadline list.
    AcademicsScraped(Vec<StudyItem>),
    /// The checkout processing delay elapsed.
    CheckoutProcessed,
    /// Any remote task failed. Downgraded to status text (or, on the recipe
    /// screen, shown in place of the recipe).
    RemoteFailed(String),
}

/// State of the recipe screen's content.
#[derive(Debug, Clone, PartialEq)]
pub enum RecipeState {
    Idle,
    Generating,
    Ready(String),
    Failed(String),
}

// ============================================================================
// Application State
// ============================================================================

/// Central application state.
pub struct App {
    /// Opaque session token identifying the remote store owner.
    pub token: String,
    /// Remote client handle; `None` when running locally against fixtures.
    pub remote: Option<Arc<RemoteClient>>,

    pub screen: Screen,
    pub cursor: usize,
    /// Present if and only if `screen.is_form()`.
    pub form: Option<FormState>,

    // Collections. Mutated only through the methods below.
    pub food: Vec<FoodItem>,
    pub subscriptions: Vec<SubscriptionItem>,
    pub academics: Vec<StudyItem>,

    /// Server-assigned category ids, keyed by category name after the first
    /// successful fetch. Absent id → next upsert creates; present → updates.
    pub category_ids: HashMap<CategoryName, String>,

    /// Human-readable outcome of the last operation.
    pub status: Cow<'static, str>,
    /// True while a dispatched sync may rewrite the status line on success.
    /// Cleared by any newer status so announcements like the auto-renew
    /// top-up survive the background sync that follows them.
    awaiting_sync_ack: bool,

    pub recipe: RecipeState,

    /// Current frame of the spinner shown on blocking screens.
    pub spinner_frame: usize,
    /// Dirty flag to skip unnecessary frame renders.
    pub needs_redraw: bool,
}

impl App {
    pub fn new(token: String, remote: Option<Arc<RemoteClient>>) -> Self {
        Self {
            token,
            remote,
            screen: Screen::Menu,
            cursor: 0,
            form: None,
            food: Vec::new(),
            subscriptions: Vec::new(),
            academics: Vec::new(),
            category_ids: HashMap::new(),
            status: Cow::Borrowed(""),
            awaiting_sync_ack: false,
            recipe: RecipeState::Idle,
            spinner_frame: 0,
            needs_redraw: true,
        }
    }

    /// Populate collections from the built-in fixtures for this token.
    /// Local mode only; remote sessions populate via the initial fetch.
    pub fn load_fixtures(&mut self) {
        let fx = fixtures::for_token(&self.token);
        self.food = fx.food;
        self.subscriptions = fx.subscriptions;
        self.academics = fx.academics;
    }

    // ------------------------------------------------------------------
    // Status line
    // ------------------------------------------------------------------

    /// Set the status line. Supersedes any pending sync acknowledgement.
    pub fn set_status(&mut self, msg: impl Into<Cow<'static, str>>) {
        self.status = msg.into();
        self.awaiting_sync_ack = false;
    }

    /// Set the status line for a dispatched sync; a later `SyncCompleted`
    /// may rewrite it with a saved confirmation.
    pub fn set_syncing_status(&mut self, msg: impl Into<Cow<'static, str>>) {
        self.status = msg.into();
        self.awaiting_sync_ack = true;
    }

    /// Consume the pending sync acknowledgement, if any.
    pub fn take_sync_ack(&mut self) -> bool {
        std::mem::take(&mut self.awaiting_sync_ack)
    }

    // ------------------------------------------------------------------
    // Cursor model
    // ------------------------------------------------------------------

    /// Length of the collection the cursor ranges over on the current screen.
    pub fn active_len(&self) -> usize {
        match self.screen {
            Screen::Menu => MENU_ENTRIES.len(),
            Screen::FoodList => self.food.len(),
            Screen::FoodCheckout => DELIVERY_CHOICES.len(),
            Screen::Subscriptions => self.subscriptions.len(),
            Screen::Academics => self.academics.len(),
            _ => 0,
        }
    }

    pub fn nav_up(&mut self) {
        self.cursor = step_cursor(self.cursor, self.active_len(), Direction::Up);
    }

    pub fn nav_down(&mut self) {
        self.cursor = step_cursor(self.cursor, self.active_len(), Direction::Down);
    }

    /// Re-clamp the cursor after the active collection changed length.
    pub fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.active_len().saturating_sub(1));
    }

    // ------------------------------------------------------------------
    // Navigation transitions
    // ------------------------------------------------------------------

    /// Open the menu entry under the cursor. Cursor resets on entry.
    pub fn open_menu_entry(&mut self) {
        self.screen = match self.cursor {
            0 => Screen::FoodList,
            1 => Screen::Subscriptions,
            2 => Screen::Academics,
            _ => return,
        };
        self.cursor = 0;
    }

    /// Back transition. Food sub-screens return to the food list, forms to
    /// their owning list, everything else to the menu. Always resets the
    /// cursor and drops any open form.
    pub fn go_back(&mut self) {
        self.screen = match self.screen {
            Screen::FoodRecipe
            | Screen::FoodCheckout
            | Screen::FoodCheckoutProcessing
            | Screen::FoodForm => Screen::FoodList,
            Screen::SubscriptionForm => Screen::Subscriptions,
            Screen::AcademicsSyncing => Screen::Academics,
            _ => Screen::Menu,
        };
        self.cursor = 0;
        self.form = None;
    }

    /// Open the food form, pre-filled when editing the item at an index.
    pub fn open_food_form(&mut self, target: EditTarget) {
        let existing = match target {
            EditTarget::Existing(i) => self.food.get(i),
            EditTarget::New => None,
        };
        self.form = Some(FormState::food(target, existing));
        self.screen = Screen::FoodForm;
    }

    /// Open the subscription form, pre-filled when editing.
    pub fn open_subscription_form(&mut self, target: EditTarget) {
        let existing = match target {
            EditTarget::Existing(i) => self.subscriptions.get(i),
            EditTarget::New => None,
        };
        self.form = Some(FormState::subscription(target, existing));
        self.screen = Screen::SubscriptionForm;
    }

    // ------------------------------------------------------------------
    // Optimistic mutations
    // ------------------------------------------------------------------

    /// Attempt to save the open form. On success the item is applied to its
    /// collection immediately and the owning category is returned for a
    /// background sync; the caller then performs the back transition.
    ///
    /// Returns `None` (and leaves the form open) when validation rejects the
    /// save (an empty name) or when no form is open.
    pub fn save_form(&mut self) -> Option<CategoryName> {
        let form = self.form.as_ref()?;
        match form.kind {
            FormKind::Food => {
                let item = form.food_item()?;
                let target = form.target;
                self.commit_food(item, target);
                Some(CategoryName::Food)
            }
            FormKind::Subscription => {
                let item = form.subscription_item()?;
                let target = form.target;
                self.commit_subscription(item, target);
                Some(CategoryName::Subscriptions)
            }
        }
    }

    /// Create-or-replace a food item, applying the auto-renew rule.
    ///
    /// When the renew threshold is enabled and the saved stock amount is at
    /// or below it, a fixed top-up is added once and announced in the status
    /// line (which then survives the background sync's acknowledgement).
    pub fn commit_food(&mut self, mut item: FoodItem, target: EditTarget) {
        self.set_syncing_status("Syncing...");

        if item.renew_threshold > 0 && item.amount <= item.renew_threshold {
            item.amount += RESTOCK_QUANTITY;
            self.set_status(format!(
                "Auto-renew triggered: +{} {} restocked",
                RESTOCK_QUANTITY, item.name
            ));
        }

        match target {
            EditTarget::Existing(i) if i < self.food.len() => {
                // The cart is transient UI state; editing keeps it.
                item.cart_qty = self.food[i].cart_qty;
                self.food[i] = item;
            }
            _ => self.food.push(item),
        }
    }

    /// Create-or-replace a subscription item.
    pub fn commit_subscription(&mut self, item: SubscriptionItem, target: EditTarget) {
        self.set_syncing_status("Syncing...");
        match target {
            EditTarget::Existing(i) if i < self.subscriptions.len() => {
                self.subscriptions[i] = item;
            }
            _ => self.subscriptions.push(item),
        }
    }

    /// Delete the element under the cursor from the active collection, then
    /// re-clamp the cursor. Returns the category to sync, or `None` when the
    /// current screen has no deletable collection or it is empty.
    pub fn delete_at_cursor(&mut self) -> Option<CategoryName> {
        let category = match self.screen {
            Screen::FoodList if !self.food.is_empty() => {
                self.food.remove(self.cursor);
                CategoryName::Food
            }
            Screen::Subscriptions if !self.subscriptions.is_empty() => {
                self.subscriptions.remove(self.cursor);
                CategoryName::Subscriptions
            }
            _ => return None,
        };
        self.clamp_cursor();
        self.set_syncing_status("Syncing deletion...");
        Some(category)
    }

    // ------------------------------------------------------------------
    // Cart
    // ------------------------------------------------------------------
    //
    // Cart edits never sync; persistence happens at checkout time.

    pub fn cart_increment(&mut self) {
        if let Some(item) = self.food.get_mut(self.cursor) {
            item.cart_qty += 1;
        }
    }

    pub fn cart_decrement(&mut self) {
        if let Some(item) = self.food.get_mut(self.cursor) {
            item.cart_qty = item.cart_qty.saturating_sub(1);
        }
    }

    /// Toggle the item under the cursor between "one in the cart" and "none".
    pub fn cart_toggle(&mut self) {
        if let Some(item) = self.food.get_mut(self.cursor) {
            item.cart_qty = if item.cart_qty == 0 { 1 } else { 0 };
        }
    }

    /// Names of all items currently in the cart, for recipe generation.
    pub fn cart_ingredients(&self) -> Vec<String> {
        self.food
            .iter()
            .filter(|i| i.cart_qty > 0)
            .map(|i| i.name.clone())
            .collect()
    }

    /// Cart lines as (quantity, name, line cost).
    pub fn cart_lines(&self) -> Vec<(u32, &str, f64)> {
        self.food
            .iter()
            .filter(|i| i.cart_qty > 0)
            .map(|i| (i.cart_qty, i.name.as_str(), i.price * f64::from(i.cart_qty)))
            .collect()
    }

    pub fn cart_subtotal(&self) -> f64 {
        self.cart_lines().iter().map(|(_, _, cost)| cost).sum()
    }

    /// Order total for the delivery choice at `delivery_index`.
    pub fn checkout_total(&self, delivery_index: usize) -> f64 {
        self.cart_subtotal() + delivery_fee(delivery_index)
    }

    /// Fold every cart quantity into stock and empty the cart. Called exactly
    /// once per successful checkout.
    pub fn drain_cart(&mut self) {
        for item in &mut self.food {
            if item.cart_qty > 0 {
                item.amount += item.cart_qty;
                item.cart_qty = 0;
            }
        }
    }

    // ------------------------------------------------------------------
    // Remote reconciliation
    // ------------------------------------------------------------------

    /// Apply a fetched category set: store server-assigned ids and replace
    /// each matching collection with the canonical remote content.
    ///
    /// The cursor is re-clamped afterwards so a shrinking collection cannot
    /// leave it out of bounds.
    pub fn apply_categories(&mut self, categories: Vec<Category>) {
        for category in &categories {
            let Some(name) = CategoryName::from_name(&category.name) else {
                tracing::debug!(name = %category.name, "Ignoring unknown remote category");
                continue;
            };
            if !category.id.is_empty() {
                self.category_ids.insert(name, category.id.clone());
            }
            match name {
                CategoryName::Food => self.food = decode_items(category),
                CategoryName::Subscriptions => self.subscriptions = decode_items(category),
                CategoryName::Academics => self.academics = decode_items(category),
            }
        }
        self.clamp_cursor();
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn food(name: &str, price: f64, amount: u32, renew_threshold: u32) -> FoodItem {
        FoodItem {
            name: name.to_string(),
            price,
            amount,
            renew_threshold,
            cart_qty: 0,
        }
    }

    fn app_with_food(items: Vec<FoodItem>) -> App {
        let mut app = App::new("test".to_string(), None);
        app.food = items;
        app.screen = Screen::FoodList;
        app
    }

    // ------------------------------------------------------------------
    // Cursor model
    // ------------------------------------------------------------------

    #[test]
    fn test_cursor_floor_at_zero() {
        assert_eq!(step_cursor(0, 5, Direction::Up), 0);
        assert_eq!(step_cursor(2, 5, Direction::Up), 1);
    }

    #[test]
    fn test_cursor_ceiling_at_len_minus_one() {
        assert_eq!(step_cursor(4, 5, Direction::Down), 4);
        assert_eq!(step_cursor(3, 5, Direction::Down), 4);
    }

    #[test]
    fn test_cursor_empty_collection_stays_zero() {
        assert_eq!(step_cursor(0, 0, Direction::Down), 0);
        assert_eq!(step_cursor(0, 0, Direction::Up), 0);
    }

    proptest! {
        /// Any sequence of up/down events keeps the cursor in bounds.
        #[test]
        fn prop_cursor_stays_in_bounds(len in 0usize..20, moves in proptest::collection::vec(any::<bool>(), 0..200)) {
            let mut cursor = 0usize;
            for down in moves {
                let dir = if down { Direction::Down } else { Direction::Up };
                cursor = step_cursor(cursor, len, dir);
                prop_assert!(cursor <= len.saturating_sub(1));
            }
        }
    }

    #[test]
    fn test_reentering_screen_resets_cursor() {
        let mut app = app_with_food(vec![
            food("a", 1.0, 1, 0),
            food("b", 1.0, 1, 0),
            food("c", 1.0, 1, 0),
        ]);
        app.nav_down();
        app.nav_down();
        assert_eq!(app.cursor, 2);

        app.go_back();
        assert_eq!(app.screen, Screen::Menu);
        assert_eq!(app.cursor, 0);

        app.open_menu_entry();
        assert_eq!(app.screen, Screen::FoodList);
        assert_eq!(app.cursor, 0);
    }

    // ------------------------------------------------------------------
    // Back transitions
    // ------------------------------------------------------------------

    #[test]
    fn test_back_transition_table() {
        let cases = [
            (Screen::FoodRecipe, Screen::FoodList),
            (Screen::FoodCheckout, Screen::FoodList),
            (Screen::FoodCheckoutProcessing, Screen::FoodList),
            (Screen::FoodForm, Screen::FoodList),
            (Screen::SubscriptionForm, Screen::Subscriptions),
            (Screen::AcademicsSyncing, Screen::Academics),
            (Screen::FoodList, Screen::Menu),
            (Screen::Subscriptions, Screen::Menu),
            (Screen::Academics, Screen::Menu),
            (Screen::Menu, Screen::Menu),
        ];
        for (from, to) in cases {
            let mut app = App::new("test".to_string(), None);
            app.screen = from;
            app.cursor = 1;
            app.go_back();
            assert_eq!(app.screen, to, "back from {:?}", from);
            assert_eq!(app.cursor, 0);
            assert!(app.form.is_none());
        }
    }

    #[test]
    fn test_menu_entries_open_sections() {
        for (i, expected) in [
            (0, Screen::FoodList),
            (1, Screen::Subscriptions),
            (2, Screen::Academics),
        ] {
            let mut app = App::new("test".to_string(), None);
            app.cursor = i;
            app.open_menu_entry();
            assert_eq!(app.screen, expected);
            assert_eq!(app.cursor, 0);
        }
    }

    // ------------------------------------------------------------------
    // Optimistic mutations
    // ------------------------------------------------------------------

    #[test]
    fn test_auto_renew_tops_up_stock() {
        let mut app = App::new("test".to_string(), None);
        app.commit_food(food("Rice", 4.5, 1, 2), EditTarget::New);

        assert_eq!(app.food[0].amount, 4); // 1 + RESTOCK_QUANTITY
        assert!(app.status.contains("Auto-renew"));
        // The announcement must survive the sync acknowledgement.
        assert!(!app.take_sync_ack());
    }

    #[test]
    fn test_no_auto_renew_above_threshold() {
        let mut app = App::new("test".to_string(), None);
        app.commit_food(food("Rice", 4.5, 5, 2), EditTarget::New);
        assert_eq!(app.food[0].amount, 5);
        assert_eq!(app.status, "Syncing...");
        assert!(app.take_sync_ack());
    }

    #[test]
    fn test_disabled_threshold_never_triggers() {
        let mut app = App::new("test".to_string(), None);
        app.commit_food(food("Rice", 4.5, 0, 0), EditTarget::New);
        assert_eq!(app.food[0].amount, 0);
    }

    #[test]
    fn test_edit_preserves_cart_quantity() {
        let mut app = app_with_food(vec![food("Rice", 4.5, 5, 0)]);
        app.food[0].cart_qty = 2;
        app.commit_food(food("Brown rice", 5.0, 5, 0), EditTarget::Existing(0));
        assert_eq!(app.food[0].name, "Brown rice");
        assert_eq!(app.food[0].cart_qty, 2);
    }

    #[test]
    fn test_save_form_empty_name_is_noop() {
        let mut app = App::new("test".to_string(), None);
        app.open_food_form(EditTarget::New);
        assert!(app.save_form().is_none());
        assert!(app.food.is_empty());
        assert!(app.form.is_some()); // form stays open
        assert_eq!(app.screen, Screen::FoodForm);
    }

    #[test]
    fn test_delete_last_element_yields_empty_and_cursor_zero() {
        let mut app = app_with_food(vec![food("only", 1.0, 1, 0)]);
        let synced = app.delete_at_cursor();
        assert_eq!(synced, Some(CategoryName::Food));
        assert!(app.food.is_empty());
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_delete_at_end_reclamps_cursor() {
        let mut app = app_with_food(vec![
            food("a", 1.0, 1, 0),
            food("b", 1.0, 1, 0),
            food("c", 1.0, 1, 0),
        ]);
        app.cursor = 2;
        app.delete_at_cursor();
        assert_eq!(app.food.len(), 2);
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn test_delete_on_empty_collection_is_noop() {
        let mut app = app_with_food(Vec::new());
        assert!(app.delete_at_cursor().is_none());
    }

    // ------------------------------------------------------------------
    // Cart & checkout arithmetic
    // ------------------------------------------------------------------

    #[test]
    fn test_cart_toggle_roundtrip() {
        let mut app = app_with_food(vec![food("Rice", 4.5, 3, 0)]);
        let before = app.food[0].clone();
        app.cart_toggle();
        assert_eq!(app.food[0].cart_qty, 1);
        app.cart_toggle();
        assert_eq!(app.food[0], before);
    }

    #[test]
    fn test_cart_decrement_floors_at_zero() {
        let mut app = app_with_food(vec![food("Rice", 4.5, 3, 0)]);
        app.cart_decrement();
        assert_eq!(app.food[0].cart_qty, 0);
    }

    #[test]
    fn test_checkout_total_with_delivery() {
        let mut app = app_with_food(vec![food("a", 2.00, 9, 0), food("b", 5.00, 9, 0)]);
        app.food[0].cart_qty = 3;
        app.food[1].cart_qty = 1;

        // 2.00 * 3 + 5.00 * 1 + 3.00 delivery = 14.00
        assert!((app.checkout_total(0) - 14.00).abs() < 1e-9);
        // Pick up is free.
        assert!((app.checkout_total(1) - 11.00).abs() < 1e-9);
    }

    #[test]
    fn test_drain_cart_folds_into_stock_once() {
        let mut app = app_with_food(vec![food("a", 2.00, 5, 0), food("b", 5.00, 1, 0)]);
        app.food[0].cart_qty = 3;
        app.drain_cart();
        assert_eq!(app.food[0].amount, 8);
        assert_eq!(app.food[0].cart_qty, 0);
        assert_eq!(app.food[1].amount, 1);

        // Draining again changes nothing.
        app.drain_cart();
        assert_eq!(app.food[0].amount, 8);
    }

    // ------------------------------------------------------------------
    // Remote reconciliation
    // ------------------------------------------------------------------

    fn remote_category(name: &str, id: &str, items: serde_json::Value) -> Category {
        Category {
            id: id.to_string(),
            owner_token: "test".to_string(),
            name: name.to_string(),
            content: serde_json::json!({ "items": items }),
        }
    }

    #[test]
    fn test_apply_categories_stores_ids_and_replaces_items() {
        let mut app = app_with_food(vec![food("stale", 1.0, 1, 0)]);
        app.apply_categories(vec![remote_category(
            "Food",
            "cat-7",
            serde_json::json!([{"name": "Fresh", "price": 2.0, "amount": 1, "renewThreshold": 0}]),
        )]);

        assert_eq!(
            app.category_ids.get(&CategoryName::Food).map(String::as_str),
            Some("cat-7")
        );
        assert_eq!(app.food.len(), 1);
        assert_eq!(app.food[0].name, "Fresh");
    }

    #[test]
    fn test_apply_categories_reclamps_cursor_on_shrink() {
        let mut app = app_with_food(vec![
            food("a", 1.0, 1, 0),
            food("b", 1.0, 1, 0),
            food("c", 1.0, 1, 0),
        ]);
        app.cursor = 2;
        app.apply_categories(vec![remote_category(
            "Food",
            "cat-1",
            serde_json::json!([{"name": "only", "price": 1.0, "amount": 1, "renewThreshold": 0}]),
        )]);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_apply_categories_ignores_unknown_names() {
        let mut app = App::new("test".to_string(), None);
        app.apply_categories(vec![remote_category("Chores", "c9", serde_json::json!([]))]);
        assert!(app.category_ids.is_empty());
    }

    // ------------------------------------------------------------------
    // Status acknowledgement protocol
    // ------------------------------------------------------------------

    #[test]
    fn test_sync_ack_consumed_once() {
        let mut app = App::new("test".to_string(), None);
        app.set_syncing_status("Syncing...");
        assert!(app.take_sync_ack());
        assert!(!app.take_sync_ack());
    }

    #[test]
    fn test_newer_status_supersedes_ack() {
        let mut app = App::new("test".to_string(), None);
        app.set_syncing_status("Syncing...");
        app.set_status("Order placed");
        assert!(!app.take_sync_ack());
    }
}
