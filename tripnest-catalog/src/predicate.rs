use tripnest_shared::Package;

/// A primitive test on a single package field.
///
/// Category presets and search parameters both resolve to a list of these;
/// stores either evaluate them in memory with [`Predicate::matches`] or
/// translate them into their own query language.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    CategoryIs(String),
    SubCategoryIs(String),
    /// Case-insensitive substring test. The needle is stored lowercased.
    DestinationContains(String),
    /// Negation of [`Predicate::DestinationContains`].
    DestinationLacks(String),
    PriceAtLeast(f64),
    PriceAtMost(f64),
    DurationAtLeast(f64),
    DurationAtMost(f64),
}

impl Predicate {
    pub fn destination_contains(needle: &str) -> Self {
        Predicate::DestinationContains(needle.to_lowercase())
    }

    pub fn destination_lacks(needle: &str) -> Self {
        Predicate::DestinationLacks(needle.to_lowercase())
    }

    pub fn matches(&self, package: &Package) -> bool {
        match self {
            Predicate::CategoryIs(category) => package.category == *category,
            Predicate::SubCategoryIs(sub_category) => package.sub_category == *sub_category,
            Predicate::DestinationContains(needle) => {
                package.destination.to_lowercase().contains(needle.as_str())
            }
            Predicate::DestinationLacks(needle) => {
                !package.destination.to_lowercase().contains(needle.as_str())
            }
            Predicate::PriceAtLeast(min) => f64::from(package.price) >= *min,
            Predicate::PriceAtMost(max) => f64::from(package.price) <= *max,
            Predicate::DurationAtLeast(min) => f64::from(package.duration) >= *min,
            Predicate::DurationAtMost(max) => f64::from(package.duration) <= *max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tripnest_shared::NewPackage;

    fn package(destination: &str, price: i32, duration: i32) -> Package {
        NewPackage {
            title: "Test".to_string(),
            description: String::new(),
            image_url: String::new(),
            price,
            duration,
            category: "Beach".to_string(),
            sub_category: "Relaxation".to_string(),
            destination: destination.to_string(),
        }
        .with_id(1)
    }

    #[test]
    fn test_destination_predicates_ignore_case() {
        let kerala = package("Kerala, India", 100, 5);
        assert!(Predicate::destination_contains("INDIA").matches(&kerala));
        assert!(Predicate::destination_contains("kerala").matches(&kerala));
        assert!(!Predicate::destination_lacks("india").matches(&kerala));
        assert!(Predicate::destination_lacks("japan").matches(&kerala));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let p = package("Maui, Hawaii", 300, 4);
        assert!(Predicate::PriceAtLeast(300.0).matches(&p));
        assert!(Predicate::PriceAtMost(300.0).matches(&p));
        assert!(!Predicate::PriceAtLeast(300.5).matches(&p));
        assert!(Predicate::DurationAtMost(4.0).matches(&p));
        assert!(!Predicate::DurationAtMost(3.0).matches(&p));
    }

    #[test]
    fn test_category_match_is_exact() {
        let p = package("Goa, India", 100, 3);
        assert!(Predicate::CategoryIs("Beach".to_string()).matches(&p));
        assert!(!Predicate::CategoryIs("beach".to_string()).matches(&p));
        assert!(!Predicate::SubCategoryIs("Relax".to_string()).matches(&p));
    }
}
