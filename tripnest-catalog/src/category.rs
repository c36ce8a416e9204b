use crate::predicate::Predicate;

/// Destination marker that separates domestic from international trips.
pub const HOME_COUNTRY: &str = "India";

/// Inclusive day range for a weekend getaway.
pub const WEEKEND_DAYS: (i32, i32) = (2, 4);

/// Sub-category that qualifies a package as a honeymoon package.
pub const HONEYMOON_SUB_CATEGORY: &str = "Romantic";

/// How a user-facing category label constrains the catalog.
///
/// Most labels name a stored category. A few umbrella labels from the site
/// navigation do not exist in the data and are instead derived from other
/// fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryPreset {
    /// `"All"` or an empty label.
    All,
    Exact(String),
    /// `"Domestic Trips"`: destination mentions the home country.
    Domestic,
    /// `"International Trips"`: destination does not mention the home country.
    International,
    /// `"Weekend Getaways"`: 2 to 4 days.
    WeekendGetaway,
    /// `"Honeymoon Packages"`: romantic sub-category, whatever the category.
    Honeymoon,
}

impl CategoryPreset {
    pub fn from_label(label: &str) -> Self {
        match label {
            "" | "All" => CategoryPreset::All,
            "Domestic Trips" => CategoryPreset::Domestic,
            "International Trips" => CategoryPreset::International,
            "Weekend Getaways" => CategoryPreset::WeekendGetaway,
            "Honeymoon Packages" => CategoryPreset::Honeymoon,
            other => CategoryPreset::Exact(other.to_string()),
        }
    }

    pub fn predicates(&self) -> Vec<Predicate> {
        match self {
            CategoryPreset::All => Vec::new(),
            CategoryPreset::Exact(category) => vec![Predicate::CategoryIs(category.clone())],
            CategoryPreset::Domestic => vec![Predicate::destination_contains(HOME_COUNTRY)],
            CategoryPreset::International => vec![Predicate::destination_lacks(HOME_COUNTRY)],
            CategoryPreset::WeekendGetaway => vec![
                Predicate::DurationAtLeast(f64::from(WEEKEND_DAYS.0)),
                Predicate::DurationAtMost(f64::from(WEEKEND_DAYS.1)),
            ],
            CategoryPreset::Honeymoon => {
                vec![Predicate::SubCategoryIs(HONEYMOON_SUB_CATEGORY.to_string())]
            }
        }
    }
}
