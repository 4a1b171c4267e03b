//! Multi-field form controller for the add/edit screens.
//!
//! A form is a bounded, ordered set of text fields plus, for subscriptions,
//! one multi-choice "cycle" selector. Focus moves cyclically over the logical
//! field count (wrapping at both ends), while the selector's own value steps
//! with clamping at the enumerated set's bounds. That asymmetry is part of
//! the contract: focus cycles, the selector clamps.
//!
//! Validation happens at save time only: an empty name makes the save a
//! silent no-op, and malformed numeric input coerces to zero without any
//! error surface.

use crate::model::{BillingCycle, FoodItem, SubscriptionItem};

/// Maximum characters accepted per text field.
pub const FIELD_CHAR_LIMIT: usize = 32;

/// Which collection a form edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Food,
    Subscription,
}

/// Whether a save appends a new item or replaces an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    New,
    Existing(usize),
}

/// A single text field.
#[derive(Debug, Clone)]
pub struct Field {
    pub value: String,
    pub placeholder: &'static str,
}

impl Field {
    fn new(placeholder: &'static str) -> Self {
        Self {
            value: String::new(),
            placeholder,
        }
    }

    fn prefilled(placeholder: &'static str, value: String) -> Self {
        Self { value, placeholder }
    }
}

/// Form state for the add/edit screens.
///
/// Exists if and only if the session is on a form screen.
#[derive(Debug, Clone)]
pub struct FormState {
    pub kind: FormKind,
    pub target: EditTarget,
    pub fields: Vec<Field>,
    /// Focused logical field index. For subscriptions the last logical index
    /// is the cycle selector, not a text field.
    pub focus: usize,
    /// Selected index into [`BillingCycle::ALL`]. Unused for food forms.
    pub cycle_index: usize,
}

impl FormState {
    /// Build a food form: name, price, stock amount, renew threshold.
    ///
    /// When editing, every field is pre-filled from the item's current values.
    pub fn food(target: EditTarget, existing: Option<&FoodItem>) -> Self {
        let fields = match existing {
            Some(item) => vec![
                Field::prefilled("Food name", item.name.clone()),
                Field::prefilled("Price per unit", format!("{:.2}", item.price)),
                Field::prefilled("Current stock amount", item.amount.to_string()),
                Field::prefilled(
                    "Auto-renew threshold (0 = disabled)",
                    item.renew_threshold.to_string(),
                ),
            ],
            None => vec![
                Field::new("Food name"),
                Field::new("Price per unit"),
                Field::new("Current stock amount"),
                Field::new("Auto-renew threshold (0 = disabled)"),
            ],
        };
        Self {
            kind: FormKind::Food,
            target,
            fields,
            focus: 0,
            cycle_index: 0,
        }
    }

    /// Build a subscription form: name, price, payment date, cycle selector.
    ///
    /// The selector pre-sets to the edited item's cycle, falling back to the
    /// first choice when nothing matches.
    pub fn subscription(target: EditTarget, existing: Option<&SubscriptionItem>) -> Self {
        let (fields, cycle_index) = match existing {
            Some(item) => (
                vec![
                    Field::prefilled("Service name", item.name.clone()),
                    Field::prefilled("Price", format!("{:.2}", item.price)),
                    Field::prefilled("Payment date", item.due_date.clone()),
                ],
                item.cycle.index(),
            ),
            None => (
                vec![
                    Field::new("Service name"),
                    Field::new("Price"),
                    Field::new("Payment date"),
                ],
                0,
            ),
        };
        Self {
            kind: FormKind::Subscription,
            target,
            fields,
            focus: 0,
            cycle_index,
        }
    }

    /// Total logical field count, including the non-text cycle selector.
    pub fn logical_len(&self) -> usize {
        match self.kind {
            FormKind::Food => self.fields.len(),
            FormKind::Subscription => self.fields.len() + 1,
        }
    }

    /// True when the focused logical field is the cycle selector.
    pub fn selector_focused(&self) -> bool {
        self.kind == FormKind::Subscription && self.focus == self.logical_len() - 1
    }

    /// True when confirm should attempt a save instead of advancing focus.
    pub fn on_last_field(&self) -> bool {
        self.focus == self.logical_len() - 1
    }

    /// Advance focus, wrapping past the last field to the first.
    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.logical_len();
    }

    /// Regress focus, wrapping before the first field to the last.
    pub fn focus_prev(&mut self) {
        let len = self.logical_len();
        self.focus = (self.focus + len - 1) % len;
    }

    /// Step the cycle selector left, clamping at the first choice.
    pub fn selector_left(&mut self) {
        self.cycle_index = self.cycle_index.saturating_sub(1);
    }

    /// Step the cycle selector right, clamping at the last choice.
    pub fn selector_right(&mut self) {
        if self.cycle_index + 1 < BillingCycle::ALL.len() {
            self.cycle_index += 1;
        }
    }

    /// Append a character to the focused text field. Ignored on the selector
    /// and once the field is at its length cap.
    pub fn insert_char(&mut self, c: char) {
        if self.selector_focused() {
            return;
        }
        let field = &mut self.fields[self.focus];
        if field.value.chars().count() < FIELD_CHAR_LIMIT {
            field.value.push(c);
        }
    }

    /// Remove the last character of the focused text field.
    pub fn backspace(&mut self) {
        if self.selector_focused() {
            return;
        }
        self.fields[self.focus].value.pop();
    }

    /// Build the food item this form describes, or `None` when the name is
    /// empty (the save is then a no-op and the form stays open).
    ///
    /// Numeric parsing is lenient by contract: malformed input becomes zero.
    /// The caller owns auto-renew and cart preservation.
    pub fn food_item(&self) -> Option<FoodItem> {
        debug_assert_eq!(self.kind, FormKind::Food);
        let name = self.fields[0].value.trim();
        if name.is_empty() {
            return None;
        }
        Some(FoodItem {
            name: name.to_string(),
            price: self.fields[1].value.trim().parse().unwrap_or(0.0),
            amount: self.fields[2].value.trim().parse().unwrap_or(0),
            renew_threshold: self.fields[3].value.trim().parse().unwrap_or(0),
            cart_qty: 0,
        })
    }

    /// Build the subscription item this form describes, or `None` when the
    /// name is empty. An empty date saves as "TBD".
    pub fn subscription_item(&self) -> Option<SubscriptionItem> {
        debug_assert_eq!(self.kind, FormKind::Subscription);
        let name = self.fields[0].value.trim();
        if name.is_empty() {
            return None;
        }
        let date = self.fields[2].value.trim();
        Some(SubscriptionItem {
            name: name.to_string(),
            price: self.fields[1].value.trim().parse().unwrap_or(0.0),
            due_date: if date.is_empty() {
                "TBD".to_string()
            } else {
                date.to_string()
            },
            cycle: BillingCycle::ALL[self.cycle_index],
        })
    }
}
