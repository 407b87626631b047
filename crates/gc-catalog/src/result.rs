//! The flat result shape shared by every catalog source.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Kind of catalog entry a [`SearchResult`] was derived from.
///
/// This is a closed enumeration: rendering and filtering only understand
/// these six kinds. Anything else in stored data is a deserialization error,
/// not a silent fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    /// Static or singleton service pages (doctors, laundry, cleaning, ...).
    Service,
    /// Daily-needs delivery vendors (dairy, vegetables, pharmacy, ...).
    Delivery,
    /// The "rent an apartment" call-to-action page.
    Rent,
    /// The "list your apartment" call-to-action page.
    Landlord,
    /// A service vendor sub-item (one vendor service or product).
    Vendor,
    /// An apartment listing or apartment-type placeholder.
    Apartment,
}

impl ResultKind {
    /// Human-readable label used in CLI output.
    pub fn label(self) -> &'static str {
        match self {
            Self::Service => "service",
            Self::Delivery => "delivery",
            Self::Rent => "rent",
            Self::Landlord => "landlord",
            Self::Vendor => "vendor",
            Self::Apartment => "apartment",
        }
    }
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ResultKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "service" => Ok(Self::Service),
            "delivery" => Ok(Self::Delivery),
            "rent" => Ok(Self::Rent),
            "landlord" => Ok(Self::Landlord),
            "vendor" => Ok(Self::Vendor),
            "apartment" => Ok(Self::Apartment),
            other => Err(format!(
                "unknown result kind '{other}' (expected one of: service, delivery, rent, landlord, vendor, apartment)"
            )),
        }
    }
}

/// A single entry in the aggregated catalog.
///
/// Every source (vendors, doctors, rental listings, static pages) is
/// normalized into this shape before scoring. Identifiers are
/// `"{prefix}-{sequence}"` and unique within one aggregation pass only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Unique id within one aggregation pass.
    pub id: String,
    /// Display title, e.g. `"Raj Plumbing - Tap Repair"` or a bare page name.
    pub title: String,
    /// Free-text description from the underlying record (may be empty).
    #[serde(default)]
    pub description: String,
    /// Which kind of catalog entry this is.
    #[serde(rename = "type")]
    pub kind: ResultKind,
    /// Destination path with the society segment already substituted.
    pub url: String,
    /// Human-readable grouping label, e.g. `"Plumbing"` or `"2 BHK"`.
    pub category: String,
    /// Hardcoded per-category rating constant, not a real aggregate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    /// Pre-formatted price string or `"Call for price"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    /// Vendor area or apartment location, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Name of the vendor or doctor behind this entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_name: Option<String>,
    /// Apartment size label like `"2 BHK"` for apartment entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apartment_type: Option<String>,
    /// Building name for rental listings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building_name: Option<String>,
    /// Lowercase keyword tags. Neither sorted nor deduplicated.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Contact number, passed through for display only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    /// Score attached by the ranker; absent before scoring.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevance_score: Option<u32>,
}

impl SearchResult {
    /// Creates a result with the required fields; optional fields start empty.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        kind: ResultKind,
        url: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            kind,
            url: url.into(),
            category: category.into(),
            rating: None,
            price: None,
            location: None,
            vendor_name: None,
            apartment_type: None,
            building_name: None,
            tags: Vec::new(),
            mobile: None,
            relevance_score: None,
        }
    }
}
