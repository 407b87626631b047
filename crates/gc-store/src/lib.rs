//! Catalog store boundary for GharConnect.
//!
//! The catalog's raw records live behind the [`CatalogStore`] trait, one
//! method per source table. The shipped backend is [`JsonStore`], which reads
//! JSON table files from a data directory; [`load_snapshot`] drives a full
//! load across every source, substituting empty sequences for sources that
//! fail and reporting the per-source outcome.

#![warn(missing_docs)]

mod error;
mod json;
mod snapshot;

use gc_catalog::{DeliveryCategory, Doctor, RentalListing, ServiceCategory, Vendor};

pub use error::StoreError;
pub use json::JsonStore;
pub use snapshot::{SourceId, SourceOutcome, SourceReport, load_snapshot};

/// Read access to the raw catalog tables.
///
/// Implementations return rows in stored order; the aggregator relies on
/// that order for its tie-breaking guarantees.
pub trait CatalogStore {
    /// Vendors for one home-service category.
    fn service_vendors(&self, category: ServiceCategory) -> Result<Vec<Vendor>, StoreError>;

    /// The doctors directory.
    fn doctors(&self) -> Result<Vec<Doctor>, StoreError>;

    /// Apartment rental listings.
    fn rental_listings(&self) -> Result<Vec<RentalListing>, StoreError>;

    /// Vendors for one delivery category.
    fn delivery_vendors(&self, category: DeliveryCategory) -> Result<Vec<Vendor>, StoreError>;
}
