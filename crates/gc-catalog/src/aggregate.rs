//! Catalog aggregation.
//!
//! Turns a [`CatalogSnapshot`] into the ordered candidate pool the scorer
//! runs over. The emission order is fixed and is what the ranker falls back
//! to when scores tie: plumbers, carpenters, electricians, doctors, rental
//! listings, each delivery category, generic service pages, the rent and
//! landlord call-to-action pages, and finally the apartment-type
//! placeholders.

use crate::{
    CatalogSnapshot, DeliveryCategory, Doctor, LIST_APARTMENT_URL, RENT_URL, RentalListing,
    ResultKind, SearchResult, ServiceCategory, Vendor, apartment_tags, substitute_society,
    synthesize_tags,
};

/// A static service page emitted once per aggregation pass.
struct ServicePage {
    /// Page display name.
    name: &'static str,
    /// URL slug under `/services/`.
    slug: &'static str,
    /// Short page description.
    description: &'static str,
}

/// Generic service pages that exist for every society.
const SERVICE_PAGES: &[ServicePage] = &[
    ServicePage {
        name: "Laundry",
        slug: "laundry",
        description: "Wash, iron and dry-clean pickup from your doorstep",
    },
    ServicePage {
        name: "Home Cleaning",
        slug: "cleaning",
        description: "Deep cleaning for kitchens, bathrooms and full homes",
    },
    ServicePage {
        name: "Pest Control",
        slug: "pest-control",
        description: "Cockroach, termite and bed bug treatment",
    },
    ServicePage {
        name: "Painting",
        slug: "painting",
        description: "Interior and exterior painting with material estimates",
    },
    ServicePage {
        name: "Packers & Movers",
        slug: "packers-movers",
        description: "Local shifting and intercity relocation crews",
    },
];

/// Apartment size labels emitted as browse placeholders.
const APARTMENT_TYPES: &[&str] = &["1 BHK", "2 BHK", "3 BHK", "4 BHK"];

/// Builds the full candidate pool for one society.
///
/// Pure transform: sources that are empty (including ones that failed to
/// load upstream) contribute nothing and never abort the rest. Result ids
/// are `"{prefix}-{n}"` with `n` starting at 1 per source.
pub fn aggregate(snapshot: &CatalogSnapshot, society: &str) -> Vec<SearchResult> {
    let mut pool = Vec::new();

    push_vendors(
        &mut pool,
        &snapshot.plumbers,
        ServiceCategory::Plumbing,
        society,
    );
    push_vendors(
        &mut pool,
        &snapshot.carpenters,
        ServiceCategory::Carpentry,
        society,
    );
    push_vendors(
        &mut pool,
        &snapshot.electricians,
        ServiceCategory::Electrical,
        society,
    );
    push_doctors(&mut pool, &snapshot.doctors, society);
    push_rentals(&mut pool, &snapshot.rentals, society);
    for source in &snapshot.deliveries {
        push_delivery(&mut pool, &source.vendors, source.category, society);
    }
    push_service_pages(&mut pool, society);
    push_ctas(&mut pool, society);
    push_apartment_placeholders(&mut pool, society);

    pool
}

/// Emits one result per (vendor, service) pair for a service category.
fn push_vendors(
    pool: &mut Vec<SearchResult>,
    vendors: &[Vendor],
    category: ServiceCategory,
    society: &str,
) {
    let mut sequence = 0;
    for vendor in vendors {
        for service in &vendor.services {
            sequence += 1;
            let mut result = SearchResult::new(
                format!("{}-{sequence}", category.id_prefix()),
                format!("{} - {}", vendor.name, service.name),
                ResultKind::Vendor,
                category.url(society),
                category.label(),
            );
            result.description = service.description.clone();
            result.rating = Some(category.rating());
            result.price = service.price.clone();
            result.location = vendor.area.clone();
            result.vendor_name = Some(vendor.name.clone());
            result.mobile = vendor.mobile.clone();
            result.tags = synthesize_tags(&vendor.name, &service.name, &service.description);
            pool.push(result);
        }
    }
}

/// Emits one result per doctor.
fn push_doctors(pool: &mut Vec<SearchResult>, doctors: &[Doctor], society: &str) {
    let category = ServiceCategory::Doctors;
    for (index, doctor) in doctors.iter().enumerate() {
        let mut result = SearchResult::new(
            format!("{}-{}", category.id_prefix(), index + 1),
            format!("{} - {}", doctor.name, doctor.specialty),
            ResultKind::Service,
            category.url(society),
            category.label(),
        );
        result.description = doctor.clinic.clone().unwrap_or_default();
        result.rating = Some(category.rating());
        result.location = doctor.clinic.clone();
        result.vendor_name = Some(doctor.name.clone());
        result.mobile = doctor.mobile.clone();
        result.tags = synthesize_tags(
            &doctor.name,
            &doctor.specialty,
            doctor.clinic.as_deref().unwrap_or_default(),
        );
        pool.push(result);
    }
}

/// Emits one result per rental listing.
fn push_rentals(pool: &mut Vec<SearchResult>, rentals: &[RentalListing], society: &str) {
    for (index, listing) in rentals.iter().enumerate() {
        let mut result = SearchResult::new(
            format!("rental-{}", index + 1),
            format!("{} in {}", listing.apartment_type, listing.building_name),
            ResultKind::Apartment,
            substitute_society(RENT_URL, society),
            listing.apartment_type.clone(),
        );
        result.description = listing.description.clone();
        result.price = Some(
            listing
                .rent
                .clone()
                .unwrap_or_else(|| "Call for price".to_string()),
        );
        result.location = Some(listing.location.clone());
        result.apartment_type = Some(listing.apartment_type.clone());
        result.building_name = Some(listing.building_name.clone());
        result.mobile = listing.mobile.clone();
        result.tags = apartment_tags(
            &listing.apartment_type,
            &listing.building_name,
            &listing.location,
            &listing.description,
        );
        pool.push(result);
    }
}

/// Emits one result per (vendor, product) pair for a delivery category.
fn push_delivery(
    pool: &mut Vec<SearchResult>,
    vendors: &[Vendor],
    category: DeliveryCategory,
    society: &str,
) {
    let mut sequence = 0;
    for vendor in vendors {
        for item in &vendor.services {
            sequence += 1;
            let mut result = SearchResult::new(
                format!("{}-{sequence}", category.id_prefix()),
                format!("{} - {}", vendor.name, item.name),
                ResultKind::Delivery,
                category.url(society),
                category.label(),
            );
            result.description = item.description.clone();
            result.rating = Some(category.rating());
            result.price = item.price.clone();
            result.location = vendor.area.clone();
            result.vendor_name = Some(vendor.name.clone());
            result.mobile = vendor.mobile.clone();
            result.tags = synthesize_tags(&vendor.name, &item.name, &item.description);
            pool.push(result);
        }
    }
}

/// Emits the static generic service pages.
fn push_service_pages(pool: &mut Vec<SearchResult>, society: &str) {
    for (index, page) in SERVICE_PAGES.iter().enumerate() {
        let mut result = SearchResult::new(
            format!("service-{}", index + 1),
            page.name,
            ResultKind::Service,
            substitute_society(&format!("/[society]/services/{}", page.slug), society),
            page.name,
        );
        result.description = page.description.to_string();
        result.rating = Some(4.4);
        result.tags = synthesize_tags(page.name, page.name, page.description);
        pool.push(result);
    }
}

/// Emits the rent and landlord call-to-action pages.
fn push_ctas(pool: &mut Vec<SearchResult>, society: &str) {
    let mut rent = SearchResult::new(
        "rent-1",
        "Rent an Apartment",
        ResultKind::Rent,
        substitute_society(RENT_URL, society),
        "Rentals",
    );
    rent.description = "Browse apartments available for rent in your society".to_string();
    rent.tags = ["rent", "apartment", "flat", "rental", "lease"]
        .map(String::from)
        .to_vec();
    pool.push(rent);

    let mut landlord = SearchResult::new(
        "landlord-1",
        "List Your Apartment",
        ResultKind::Landlord,
        substitute_society(LIST_APARTMENT_URL, society),
        "Rentals",
    );
    landlord.description = "Reach tenants in your society by listing your apartment".to_string();
    landlord.tags = ["landlord", "owner", "list", "rent out", "apartment"]
        .map(String::from)
        .to_vec();
    pool.push(landlord);
}

/// Emits one browse placeholder per apartment size.
fn push_apartment_placeholders(pool: &mut Vec<SearchResult>, society: &str) {
    for (index, apartment_type) in APARTMENT_TYPES.iter().enumerate() {
        let type_slug = apartment_type.to_lowercase().replace(' ', "-");
        let mut result = SearchResult::new(
            format!("apartment-{}", index + 1),
            format!("{apartment_type} Apartments"),
            ResultKind::Apartment,
            substitute_society(&format!("{RENT_URL}?type={type_slug}"), society),
            *apartment_type,
        );
        result.description = format!("Browse {apartment_type} apartments available for rent");
        result.apartment_type = Some((*apartment_type).to_string());
        result.tags = apartment_tags(apartment_type, "", "", "");
        pool.push(result);
    }
}
