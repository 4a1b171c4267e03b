//! Domain items tracked by the dashboard.
//!
//! These structs define the wire shape of collection items: the remote store
//! wraps each collection in an opaque `{"items": [...]}` blob whose elements
//! serialize exactly as defined here. `cart_qty` is transient UI state and
//! never crosses the wire.

use serde::{Deserialize, Serialize};

/// A tracked pantry item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub name: String,
    pub price: f64,
    pub amount: u32,
    pub renew_threshold: u32,
    /// Quantity currently in the shopping cart. Reset to 0 after checkout.
    #[serde(skip)]
    pub cart_qty: u32,
}

/// A recurring subscription with a billing cycle and due date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionItem {
    pub name: String,
    pub price: f64,
    /// Free-text due date ("Mar 14", "2026-09-01", "TBD", ...).
    pub due_date: String,
    pub cycle: BillingCycle,
}

/// An assignment or deadline scraped from the academics backend.
///
/// Never created by the user directly; arrives only via fetch or scrape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyItem {
    pub name: String,
    pub due_date: String,
}

/// Billing interval for a subscription. Fixed enumerated set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BillingCycle {
    #[default]
    Monthly,
    Quarterly,
    Yearly,
}

impl BillingCycle {
    /// All cycles in selector order. The form's cycle selector indexes into
    /// this slice.
    pub const ALL: [BillingCycle; 3] = [
        BillingCycle::Monthly,
        BillingCycle::Quarterly,
        BillingCycle::Yearly,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BillingCycle::Monthly => "Monthly",
            BillingCycle::Quarterly => "Quarterly",
            BillingCycle::Yearly => "Yearly",
        }
    }

    /// Position of this cycle in [`BillingCycle::ALL`].
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }
}

impl std::fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The three remote categories. Remote category ids are keyed by this name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryName {
    Food,
    Subscriptions,
    Academics,
}

impl CategoryName {
    pub fn as_str(self) -> &'static str {
        match self {
            CategoryName::Food => "Food",
            CategoryName::Subscriptions => "Subscriptions",
            CategoryName::Academics => "Academics",
        }
    }

    /// Match a remote category name back to the typed key. Unknown names
    /// (e.g. categories created by another client) return `None` and are
    /// ignored by reconciliation.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Food" => Some(CategoryName::Food),
            "Subscriptions" => Some(CategoryName::Subscriptions),
            "Academics" => Some(CategoryName::Academics),
            _ => None,
        }
    }
}

impl std::fmt::Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_qty_not_serialized() {
        let item = FoodItem {
            name: "Rice".to_string(),
            price: 4.5,
            amount: 2,
            renew_threshold: 1,
            cart_qty: 7,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("cartQty").is_none());
        assert_eq!(json["renewThreshold"], 1);
    }

    #[test]
    fn test_food_item_deserializes_with_zero_cart() {
        let json = r#"{"name":"Rice","price":4.5,"amount":2,"renewThreshold":1}"#;
        let item: FoodItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.cart_qty, 0);
    }

    #[test]
    fn test_billing_cycle_roundtrip() {
        for cycle in BillingCycle::ALL {
            let json = serde_json::to_string(&cycle).unwrap();
            assert_eq!(json, format!("\"{}\"", cycle.label()));
            let back: BillingCycle = serde_json::from_str(&json).unwrap();
            assert_eq!(back, cycle);
        }
    }

    #[test]
    fn test_cycle_index_matches_all_order() {
        assert_eq!(BillingCycle::Monthly.index(), 0);
        assert_eq!(BillingCycle::Quarterly.index(), 1);
        assert_eq!(BillingCycle::Yearly.index(), 2);
    }

    #[test]
    fn test_category_name_roundtrip() {
        for cat in [
            CategoryName::Food,
            CategoryName::Subscriptions,
            CategoryName::Academics,
        ] {
            assert_eq!(CategoryName::from_name(cat.as_str()), Some(cat));
        }
        assert_eq!(CategoryName::from_name("Chores"), None);
    }
}
