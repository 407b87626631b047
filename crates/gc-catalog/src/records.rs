//! Domain records as read from the backing store, and the snapshot that
//! groups them for one aggregation pass.
//!
//! Records are deliberately tolerant of missing optional columns: a vendor
//! row without a `services` array deserializes to an empty list and simply
//! emits no results, it never aborts a load.

use serde::Deserialize;

use crate::DeliveryCategory;

/// A vendor row from the `vendors` table.
#[derive(Debug, Clone, Deserialize)]
pub struct Vendor {
    /// Vendor display name.
    pub name: String,
    /// Contact number, display only.
    #[serde(default)]
    pub mobile: Option<String>,
    /// Area or locality the vendor serves.
    #[serde(default)]
    pub area: Option<String>,
    /// Services or products offered. One result is emitted per entry.
    #[serde(default)]
    pub services: Vec<VendorService>,
}

/// A single service or product offered by a vendor.
#[derive(Debug, Clone, Deserialize)]
pub struct VendorService {
    /// Service or product name.
    pub name: String,
    /// Free-text description (may be empty).
    #[serde(default)]
    pub description: String,
    /// Pre-formatted price string, e.g. `"₹250 per visit"`.
    #[serde(default)]
    pub price: Option<String>,
}

/// A doctor row from the `doctors` table.
#[derive(Debug, Clone, Deserialize)]
pub struct Doctor {
    /// Doctor display name.
    pub name: String,
    /// Medical specialty, e.g. `"General Physician"`.
    pub specialty: String,
    /// Clinic name or address.
    #[serde(default)]
    pub clinic: Option<String>,
    /// Contact number, display only.
    #[serde(default)]
    pub mobile: Option<String>,
}

/// A rental listing row from the `apartments` table.
#[derive(Debug, Clone, Deserialize)]
pub struct RentalListing {
    /// Building or complex name.
    pub building_name: String,
    /// Apartment size label, e.g. `"2 BHK"`.
    pub apartment_type: String,
    /// Locality of the building.
    pub location: String,
    /// Pre-formatted monthly rent, e.g. `"₹45,000/month"`.
    #[serde(default)]
    pub rent: Option<String>,
    /// Free-text listing description (may be empty).
    #[serde(default)]
    pub description: String,
    /// Owner contact number, display only.
    #[serde(default)]
    pub mobile: Option<String>,
}

/// Vendors for one delivery category.
#[derive(Debug, Clone)]
pub struct DeliverySource {
    /// The delivery category these vendors belong to.
    pub category: DeliveryCategory,
    /// Vendors in store order.
    pub vendors: Vec<Vendor>,
}

/// Read-only snapshot of every catalog source for one aggregation pass.
///
/// Field order mirrors the fixed aggregation order. Sources that failed to
/// load are represented as empty vectors; the loader in `gc-store` records
/// which ones actually failed.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    /// Plumbing vendors.
    pub plumbers: Vec<Vendor>,
    /// Carpentry vendors.
    pub carpenters: Vec<Vendor>,
    /// Electrical vendors.
    pub electricians: Vec<Vendor>,
    /// Doctors directory.
    pub doctors: Vec<Doctor>,
    /// Rental listings.
    pub rentals: Vec<RentalListing>,
    /// Delivery vendors grouped by category, in emission order.
    pub deliveries: Vec<DeliverySource>,
}

impl CatalogSnapshot {
    /// Total number of records across all sources.
    pub fn record_count(&self) -> usize {
        self.plumbers.len()
            + self.carpenters.len()
            + self.electricians.len()
            + self.doctors.len()
            + self.rentals.len()
            + self.deliveries.iter().map(|d| d.vendors.len()).sum::<usize>()
    }

    /// Whether every source is empty.
    pub fn is_empty(&self) -> bool {
        self.record_count() == 0
    }
}
