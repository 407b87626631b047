//! Direct-redirect shortcuts.
//!
//! A fixed set of high-confidence single-category intents bypasses scoring
//! entirely: if the trimmed, lowercased query contains a trigger substring,
//! the search navigates straight to that category page and the pipeline is
//! never invoked. Triggers are tested in order and the first match wins, so
//! earlier triggers shadow later ones (`"coconut"` before `"nut"`,
//! `"fruit"` before `"dry fruit"`).

use gc_catalog::{DeliveryCategory, RENT_URL, ServiceCategory, substitute_society};

/// Destination of a shortcut trigger.
#[derive(Debug, Clone, Copy)]
enum Target {
    /// The rental listings page.
    Rentals,
    /// A delivery category page.
    Delivery(DeliveryCategory),
    /// A service category page.
    Service(ServiceCategory),
}

impl Target {
    /// Resolves the destination path for a society.
    fn path(self, society: &str) -> String {
        match self {
            Self::Rentals => substitute_society(RENT_URL, society),
            Self::Delivery(category) => category.url(society),
            Self::Service(category) => category.url(society),
        }
    }
}

/// Ordered trigger table. First substring match wins.
const TRIGGERS: &[(&str, Target)] = &[
    ("apartment", Target::Rentals),
    ("flat", Target::Rentals),
    ("rent", Target::Rentals),
    ("bhk", Target::Rentals),
    ("property", Target::Rentals),
    ("house", Target::Rentals),
    ("coconut", Target::Delivery(DeliveryCategory::Coconut)),
    ("flower", Target::Delivery(DeliveryCategory::Flowers)),
    ("milk", Target::Delivery(DeliveryCategory::Dairy)),
    ("dairy", Target::Delivery(DeliveryCategory::Dairy)),
    ("egg", Target::Delivery(DeliveryCategory::Eggs)),
    ("fruit", Target::Delivery(DeliveryCategory::Fruits)),
    ("vegetable", Target::Delivery(DeliveryCategory::Vegetables)),
    ("meat", Target::Delivery(DeliveryCategory::Meat)),
    ("chicken", Target::Delivery(DeliveryCategory::Meat)),
    ("dry fruit", Target::Delivery(DeliveryCategory::DryFruits)),
    ("nut", Target::Delivery(DeliveryCategory::DryFruits)),
    ("medicine", Target::Delivery(DeliveryCategory::Pharmacy)),
    ("pharmacy", Target::Delivery(DeliveryCategory::Pharmacy)),
    ("plumber", Target::Service(ServiceCategory::Plumbing)),
    ("electrician", Target::Service(ServiceCategory::Electrical)),
    ("carpenter", Target::Service(ServiceCategory::Carpentry)),
    ("doctor", Target::Service(ServiceCategory::Doctors)),
];

/// A shortcut hit: the trigger that fired and the resolved destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    /// The trigger substring that matched.
    pub trigger: &'static str,
    /// Destination path with the society segment substituted.
    pub path: String,
}

/// Tests a query against the trigger table.
///
/// Returns the first matching trigger's destination, or `None` when the
/// query should fall through to the full scoring pipeline.
pub fn match_shortcut(query: &str, society: &str) -> Option<Redirect> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }

    TRIGGERS
        .iter()
        .find(|(trigger, _)| query.contains(trigger))
        .map(|&(trigger, target)| Redirect {
            trigger,
            path: target.path(society),
        })
}
