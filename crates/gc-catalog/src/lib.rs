//! Catalog data model and aggregation for GharConnect search.
//!
//! This crate owns the flat [`SearchResult`] shape every catalog source is
//! normalized into, the closed category taxonomy with its single
//! label/url/rating mapping, keyword tag synthesis, and the aggregator that
//! turns a [`CatalogSnapshot`] into an ordered candidate pool.
//!
//! Aggregation is a pure transform: fetching catalog data from the backing
//! store is a `gc-store` concern, and scoring the pool against a query is a
//! `gc-search` concern.

#![warn(missing_docs)]

mod aggregate;
mod category;
mod records;
mod result;
mod tags;

pub use aggregate::aggregate;
pub use category::{
    DeliveryCategory, LIST_APARTMENT_URL, RENT_URL, ServiceCategory, substitute_society,
};
pub use records::{CatalogSnapshot, DeliverySource, Doctor, RentalListing, Vendor, VendorService};
pub use result::{ResultKind, SearchResult};
pub use tags::{apartment_tags, synthesize_tags};
