//! Closed category taxonomy and its canonical mapping table.
//!
//! Every category the application knows about lives here, with exactly one
//! mapping from category to label, URL path, id prefix, and rating constant.
//! URL templates carry a `[society]` placeholder that is substituted with the
//! active society segment at aggregation time.

/// URL template for the rental listings page.
pub const RENT_URL: &str = "/[society]/rent";

/// URL template for the "list your apartment" page.
pub const LIST_APARTMENT_URL: &str = "/[society]/list-apartment";

/// Replaces the `[society]` placeholder in a URL template.
pub fn substitute_society(template: &str, society: &str) -> String {
    template.replace("[society]", society)
}

/// Service vendor and service page categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceCategory {
    /// Plumbing vendors.
    Plumbing,
    /// Carpentry vendors.
    Carpentry,
    /// Electrical vendors.
    Electrical,
    /// Doctors directory.
    Doctors,
}

impl ServiceCategory {
    /// Display label used as the result category.
    pub fn label(self) -> &'static str {
        match self {
            Self::Plumbing => "Plumbing",
            Self::Carpentry => "Carpentry",
            Self::Electrical => "Electrical",
            Self::Doctors => "Doctors",
        }
    }

    /// URL and table slug for this category.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Plumbing => "plumbing",
            Self::Carpentry => "carpentry",
            Self::Electrical => "electrical",
            Self::Doctors => "doctors",
        }
    }

    /// Prefix used when generating result ids.
    pub fn id_prefix(self) -> &'static str {
        match self {
            Self::Plumbing => "plumber",
            Self::Carpentry => "carpenter",
            Self::Electrical => "electrician",
            Self::Doctors => "doctor",
        }
    }

    /// Per-category rating constant shown next to results.
    pub fn rating(self) -> f32 {
        match self {
            Self::Plumbing => 4.5,
            Self::Carpentry => 4.6,
            Self::Electrical => 4.7,
            Self::Doctors => 4.8,
        }
    }

    /// Category page URL with the society segment substituted.
    pub fn url(self, society: &str) -> String {
        substitute_society(&format!("/[society]/services/{}", self.slug()), society)
    }
}

/// Daily-needs delivery categories, in catalog emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryCategory {
    /// Tender coconut delivery.
    Coconut,
    /// Flower delivery.
    Flowers,
    /// Milk and dairy delivery.
    Dairy,
    /// Egg delivery.
    Eggs,
    /// Fruit delivery.
    Fruits,
    /// Vegetable delivery.
    Vegetables,
    /// Meat and chicken delivery.
    Meat,
    /// Dry fruits and nuts delivery.
    DryFruits,
    /// Medicines and pharmacy delivery.
    Pharmacy,
}

impl DeliveryCategory {
    /// All delivery categories in the fixed aggregation order.
    pub const ALL: [Self; 9] = [
        Self::Coconut,
        Self::Flowers,
        Self::Dairy,
        Self::Eggs,
        Self::Fruits,
        Self::Vegetables,
        Self::Meat,
        Self::DryFruits,
        Self::Pharmacy,
    ];

    /// Display label used as the result category.
    pub fn label(self) -> &'static str {
        match self {
            Self::Coconut => "Coconut",
            Self::Flowers => "Flowers",
            Self::Dairy => "Dairy",
            Self::Eggs => "Eggs",
            Self::Fruits => "Fruits",
            Self::Vegetables => "Vegetables",
            Self::Meat => "Meat",
            Self::DryFruits => "Dry Fruits",
            Self::Pharmacy => "Pharmacy",
        }
    }

    /// URL and table slug for this category.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Coconut => "coconut",
            Self::Flowers => "flowers",
            Self::Dairy => "dairy",
            Self::Eggs => "eggs",
            Self::Fruits => "fruits",
            Self::Vegetables => "vegetables",
            Self::Meat => "meat",
            Self::DryFruits => "dry-fruits",
            Self::Pharmacy => "pharmacy",
        }
    }

    /// Prefix used when generating result ids.
    pub fn id_prefix(self) -> &'static str {
        self.slug()
    }

    /// Per-category rating constant shown next to results.
    pub fn rating(self) -> f32 {
        4.3
    }

    /// Category page URL with the society segment substituted.
    pub fn url(self, society: &str) -> String {
        substitute_society(&format!("/[society]/delivery/{}", self.slug()), society)
    }
}
