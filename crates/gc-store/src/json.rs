//! JSON-file-backed catalog store.
//!
//! One JSON file per table in a data directory: `vendors.json`,
//! `doctors.json`, `apartments.json`. Vendor rows carry a `category` column
//! and are filtered per request, mirroring an `eq`-style query against a
//! single vendors table. Row order within a file stands in for the store's
//! `order by created_at`.

use std::{fs, path::PathBuf};

use gc_catalog::{DeliveryCategory, Doctor, RentalListing, ServiceCategory, Vendor};
use serde::{Deserialize, de::DeserializeOwned};

use crate::{CatalogStore, StoreError};

/// The vendors table filename (without extension).
const VENDORS_TABLE: &str = "vendors";

/// The doctors table filename (without extension).
const DOCTORS_TABLE: &str = "doctors";

/// The apartments table filename (without extension).
const APARTMENTS_TABLE: &str = "apartments";

/// A vendor row with its category column.
#[derive(Debug, Clone, Deserialize)]
struct VendorRow {
    /// Category slug, e.g. `"plumbing"` or `"dairy"`.
    category: String,
    /// The vendor columns.
    #[serde(flatten)]
    vendor: Vendor,
}

/// Catalog store reading JSON tables from a directory.
#[derive(Debug, Clone)]
pub struct JsonStore {
    /// Directory containing the table files.
    data_dir: PathBuf,
}

impl JsonStore {
    /// Creates a store over the given data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Reads and decodes one table file.
    fn read_table<T: DeserializeOwned>(&self, table: &str) -> Result<Vec<T>, StoreError> {
        let path = self.data_dir.join(format!("{table}.json"));
        let contents = fs::read_to_string(&path).map_err(|source| StoreError::TableUnavailable {
            table: table.to_string(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| StoreError::MalformedTable {
            table: table.to_string(),
            source,
        })
    }

    /// Reads the vendors table filtered to one category slug.
    fn vendors_with_category(&self, slug: &str) -> Result<Vec<Vendor>, StoreError> {
        let rows: Vec<VendorRow> = self.read_table(VENDORS_TABLE)?;
        Ok(rows
            .into_iter()
            .filter(|row| row.category == slug)
            .map(|row| row.vendor)
            .collect())
    }
}

impl CatalogStore for JsonStore {
    fn service_vendors(&self, category: ServiceCategory) -> Result<Vec<Vendor>, StoreError> {
        self.vendors_with_category(category.slug())
    }

    fn doctors(&self) -> Result<Vec<Doctor>, StoreError> {
        self.read_table(DOCTORS_TABLE)
    }

    fn rental_listings(&self) -> Result<Vec<RentalListing>, StoreError> {
        self.read_table(APARTMENTS_TABLE)
    }

    fn delivery_vendors(&self, category: DeliveryCategory) -> Result<Vec<Vendor>, StoreError> {
        self.vendors_with_category(category.slug())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn write_table(dir: &Path, table: &str, contents: &str) {
        fs::write(dir.join(format!("{table}.json")), contents).unwrap();
    }

    fn sample_vendors() -> &'static str {
        r#"[
            {"name": "Raj Plumbing", "category": "plumbing",
             "services": [{"name": "Tap Repair", "description": "Fixes leaking taps"}]},
            {"name": "Fresh Dairy", "category": "dairy",
             "services": [{"name": "Cow Milk", "price": "₹60/litre"}]},
            {"name": "Spark Electric", "category": "electrical",
             "services": [{"name": "Wiring"}]}
        ]"#
    }

    #[test]
    fn filters_vendors_by_category() {
        let dir = tempfile::tempdir().unwrap();
        write_table(dir.path(), "vendors", sample_vendors());
        let store = JsonStore::new(dir.path());

        let plumbers = store.service_vendors(ServiceCategory::Plumbing).unwrap();
        assert_eq!(plumbers.len(), 1);
        assert_eq!(plumbers[0].name, "Raj Plumbing");

        let dairy = store.delivery_vendors(DeliveryCategory::Dairy).unwrap();
        assert_eq!(dairy.len(), 1);
        assert_eq!(dairy[0].services[0].price.as_deref(), Some("₹60/litre"));
    }

    #[test]
    fn preserves_row_order() {
        let dir = tempfile::tempdir().unwrap();
        write_table(
            dir.path(),
            "vendors",
            r#"[
                {"name": "B Plumbing", "category": "plumbing"},
                {"name": "A Plumbing", "category": "plumbing"}
            ]"#,
        );
        let store = JsonStore::new(dir.path());
        let plumbers = store.service_vendors(ServiceCategory::Plumbing).unwrap();
        let names: Vec<&str> = plumbers.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["B Plumbing", "A Plumbing"]);
    }

    #[test]
    fn missing_table_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        let err = store.doctors().unwrap_err();
        assert!(matches!(err, StoreError::TableUnavailable { .. }));
        assert!(err.to_string().contains("doctors"));
    }

    #[test]
    fn malformed_table_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        write_table(dir.path(), "apartments", "{not json");
        let store = JsonStore::new(dir.path());
        let err = store.rental_listings().unwrap_err();
        assert!(matches!(err, StoreError::MalformedTable { .. }));
    }

    #[test]
    fn reads_doctors_and_apartments() {
        let dir = tempfile::tempdir().unwrap();
        write_table(
            dir.path(),
            "doctors",
            r#"[{"name": "Dr. Mehta", "specialty": "General Physician"}]"#,
        );
        write_table(
            dir.path(),
            "apartments",
            r#"[{"building_name": "Palm Grove", "apartment_type": "2 BHK", "location": "Andheri"}]"#,
        );
        let store = JsonStore::new(dir.path());
        assert_eq!(store.doctors().unwrap()[0].name, "Dr. Mehta");
        assert_eq!(store.rental_listings().unwrap()[0].apartment_type, "2 BHK");
    }
}
