//! Snapshot loading with per-source failure reports.
//!
//! Every source is attempted on every load. A source that fails is logged at
//! this boundary and substituted with an empty sequence so the rest of the
//! catalog still aggregates; the report records which sources actually
//! failed so callers can tell "empty" apart from "unavailable".

use std::fmt;

use gc_catalog::{CatalogSnapshot, DeliveryCategory, DeliverySource, ServiceCategory};
use tracing::warn;

use crate::{CatalogStore, StoreError};

/// Identifies one catalog source in a load report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceId {
    /// Plumbing vendors.
    Plumbers,
    /// Carpentry vendors.
    Carpenters,
    /// Electrical vendors.
    Electricians,
    /// Doctors directory.
    Doctors,
    /// Rental listings.
    Rentals,
    /// One delivery category.
    Delivery(DeliveryCategory),
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plumbers => f.write_str("plumbers"),
            Self::Carpenters => f.write_str("carpenters"),
            Self::Electricians => f.write_str("electricians"),
            Self::Doctors => f.write_str("doctors"),
            Self::Rentals => f.write_str("rentals"),
            Self::Delivery(category) => write!(f, "delivery/{}", category.slug()),
        }
    }
}

/// Outcome of loading one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceOutcome {
    /// The source loaded this many records (possibly zero).
    Loaded(usize),
    /// The source failed; the snapshot carries an empty sequence for it.
    Failed(String),
}

/// Load outcome for one catalog source.
#[derive(Debug, Clone)]
pub struct SourceReport {
    /// Which source this report is for.
    pub source: SourceId,
    /// What happened when it was loaded.
    pub outcome: SourceOutcome,
}

impl SourceReport {
    /// Whether this source failed to load.
    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, SourceOutcome::Failed(_))
    }
}

/// Loads a full catalog snapshot, attempting every source.
///
/// Failures never abort the load: the failing source becomes an empty
/// sequence, a warning is emitted here at the boundary, and the returned
/// reports record the per-source outcome in the fixed source order.
pub fn load_snapshot(store: &dyn CatalogStore) -> (CatalogSnapshot, Vec<SourceReport>) {
    let mut reports = Vec::new();

    let plumbers = fetch(
        store.service_vendors(ServiceCategory::Plumbing),
        SourceId::Plumbers,
        &mut reports,
    );
    let carpenters = fetch(
        store.service_vendors(ServiceCategory::Carpentry),
        SourceId::Carpenters,
        &mut reports,
    );
    let electricians = fetch(
        store.service_vendors(ServiceCategory::Electrical),
        SourceId::Electricians,
        &mut reports,
    );
    let doctors = fetch(store.doctors(), SourceId::Doctors, &mut reports);
    let rentals = fetch(store.rental_listings(), SourceId::Rentals, &mut reports);

    let deliveries = DeliveryCategory::ALL
        .into_iter()
        .map(|category| DeliverySource {
            category,
            vendors: fetch(
                store.delivery_vendors(category),
                SourceId::Delivery(category),
                &mut reports,
            ),
        })
        .collect();

    let snapshot = CatalogSnapshot {
        plumbers,
        carpenters,
        electricians,
        doctors,
        rentals,
        deliveries,
    };
    (snapshot, reports)
}

/// Converts one source's load result into rows plus a report entry.
fn fetch<T>(
    result: Result<Vec<T>, StoreError>,
    source: SourceId,
    reports: &mut Vec<SourceReport>,
) -> Vec<T> {
    match result {
        Ok(rows) => {
            reports.push(SourceReport {
                source,
                outcome: SourceOutcome::Loaded(rows.len()),
            });
            rows
        }
        Err(error) => {
            warn!(source = %source, %error, "catalog source unavailable, continuing without it");
            reports.push(SourceReport {
                source,
                outcome: SourceOutcome::Failed(error.to_string()),
            });
            Vec::new()
        }
    }
}
