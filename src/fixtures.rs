//! Built-in seed collections for local mode.
//!
//! Without a remote store the dashboard still needs something to show.
//! Fixtures are keyed by token so a demo session is reproducible; unknown
//! tokens start with empty collections.

use crate::model::{BillingCycle, FoodItem, StudyItem, SubscriptionItem};

/// Seed collections for a local session.
pub struct Fixtures {
    pub food: Vec<FoodItem>,
    pub subscriptions: Vec<SubscriptionItem>,
    pub academics: Vec<StudyItem>,
}

/// Look up the built-in collections for a token.
pub fn for_token(token: &str) -> Fixtures {
    match token {
        "demo" => demo(),
        _ => Fixtures {
            food: Vec::new(),
            subscriptions: Vec::new(),
            academics: Vec::new(),
        },
    }
}

fn demo() -> Fixtures {
    let food = vec![
        food("Rice", 4.50, 3, 2),
        food("Eggs", 3.20, 12, 6),
        food("Coffee", 11.00, 1, 0),
        food("Olive oil", 8.75, 2, 1),
    ];
    let subscriptions = vec![
        sub("Cloud storage", 2.99, "1st of month", BillingCycle::Monthly),
        sub("Gym", 55.00, "Mar 14", BillingCycle::Quarterly),
        sub("Domain renewal", 12.00, "Nov 2", BillingCycle::Yearly),
    ];
    let academics = vec![
        study("Algorithms problem set 4", "Fri 23:59"),
        study("Databases project milestone", "Mon 17:00"),
    ];
    Fixtures {
        food,
        subscriptions,
        academics,
    }
}

fn food(name: &str, price: f64, amount: u32, renew_threshold: u32) -> FoodItem {
    FoodItem {
        name: name.to_string(),
        price,
        amount,
        renew_threshold,
        cart_qty: 0,
    }
}

fn sub(name: &str, price: f64, due_date: &str, cycle: BillingCycle) -> SubscriptionItem {
    SubscriptionItem {
        name: name.to_string(),
        price,
        due_date: due_date.to_string(),
        cycle,
    }
}

fn study(name: &str, due_date: &str) -> StudyItem {
    StudyItem {
        name: name.to_string(),
        due_date: due_date.to_string(),
    }
}
