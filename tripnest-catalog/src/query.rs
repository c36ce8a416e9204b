use std::cmp::Ordering;

use tripnest_shared::Package;

use crate::category::CategoryPreset;
use crate::params::{SearchParams, SortBy, SortDirection, SortField};
use crate::predicate::Predicate;

/// A search resolved into primitive predicates plus an optional ordering.
///
/// All predicates are combined with logical AND; an empty list matches every
/// package.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackageQuery {
    pub predicates: Vec<Predicate>,
    pub sort: Option<SortBy>,
}

impl PackageQuery {
    pub fn new(params: &SearchParams) -> Self {
        let mut predicates = Vec::new();

        if let Some(category) = params.category.as_deref() {
            predicates.extend(CategoryPreset::from_label(category).predicates());
        }
        if let Some(sub_category) = non_empty(params.sub_category.as_deref()) {
            predicates.push(Predicate::SubCategoryIs(sub_category.to_string()));
        }
        if let Some(destination) = non_empty(params.destination.as_deref()) {
            predicates.push(Predicate::destination_contains(destination));
        }
        if let Some(min) = params.min_price {
            predicates.push(Predicate::PriceAtLeast(min));
        }
        if let Some(max) = params.max_price {
            predicates.push(Predicate::PriceAtMost(max));
        }
        if let Some(min) = params.min_duration {
            predicates.push(Predicate::DurationAtLeast(min));
        }
        if let Some(max) = params.max_duration {
            predicates.push(Predicate::DurationAtMost(max));
        }

        Self {
            predicates,
            sort: params.sort_by,
        }
    }

    pub fn matches(&self, package: &Package) -> bool {
        self.predicates.iter().all(|p| p.matches(package))
    }

    /// Filters and orders `packages`, which must be in storage order.
    ///
    /// The sort is stable, so packages with equal keys keep storage order and
    /// repeated calls over the same input return the same sequence.
    pub fn apply(&self, packages: Vec<Package>) -> Vec<Package> {
        let mut matched: Vec<Package> = packages.into_iter().filter(|p| self.matches(p)).collect();

        if let Some(sort) = self.sort {
            matched.sort_by(|a, b| compare(sort, a, b));
        }

        matched
    }
}

fn compare(sort: SortBy, a: &Package, b: &Package) -> Ordering {
    let ordering = match sort.field() {
        SortField::Price => a.price.cmp(&b.price),
        SortField::Duration => a.duration.cmp(&b.duration),
    };
    match sort.direction() {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tripnest_shared::NewPackage;

    fn package(id: i32, category: &str, sub_category: &str, destination: &str, price: i32, duration: i32) -> Package {
        NewPackage {
            title: format!("Package {id}"),
            description: String::new(),
            image_url: String::new(),
            price,
            duration,
            category: category.to_string(),
            sub_category: sub_category.to_string(),
            destination: destination.to_string(),
        }
        .with_id(id)
    }

    fn catalog() -> Vec<Package> {
        vec![
            package(1, "Relaxation", "Cruise", "Kerala, India", 24999, 5),
            package(2, "City", "Cultural", "Tokyo, Japan", 135999, 6),
            package(3, "Island", "Romantic", "Santorini, Greece", 98999, 4),
            package(4, "Beach", "Weekend", "Goa, India", 19999, 3),
            package(5, "Mountain", "Trekking", "Machu Picchu, Peru", 175999, 7),
            package(6, "City", "Weekend", "Dubai, UAE", 89999, 3),
        ]
    }

    fn ids(packages: &[Package]) -> Vec<i32> {
        packages.iter().map(|p| p.id).collect()
    }

    fn search(params: SearchParams) -> Vec<Package> {
        PackageQuery::new(&params).apply(catalog())
    }

    #[test]
    fn test_default_params_return_everything_in_storage_order() {
        let query = PackageQuery::new(&SearchParams::default());
        assert!(query.predicates.is_empty());
        assert_eq!(ids(&query.apply(catalog())), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_domestic_and_international_are_complementary() {
        let domestic = search(SearchParams {
            category: Some("Domestic Trips".to_string()),
            ..Default::default()
        });
        let international = search(SearchParams {
            category: Some("International Trips".to_string()),
            ..Default::default()
        });

        assert_eq!(ids(&domestic), vec![1, 4]);
        assert_eq!(ids(&international), vec![2, 3, 5, 6]);
    }

    #[test]
    fn test_weekend_getaways_cover_two_to_four_days() {
        let result = search(SearchParams {
            category: Some("Weekend Getaways".to_string()),
            ..Default::default()
        });
        assert_eq!(ids(&result), vec![3, 4, 6]);
    }

    #[test]
    fn test_honeymoon_matches_romantic_regardless_of_category() {
        let result = search(SearchParams {
            category: Some("Honeymoon Packages".to_string()),
            ..Default::default()
        });
        assert_eq!(ids(&result), vec![3]);
        assert_eq!(result[0].category, "Island");
    }

    #[test]
    fn test_all_category_imposes_no_constraint() {
        let result = search(SearchParams {
            category: Some("All".to_string()),
            ..Default::default()
        });
        assert_eq!(result.len(), 6);
    }

    #[test]
    fn test_unknown_category_yields_empty_result() {
        let result = search(SearchParams {
            category: Some("Space Tourism".to_string()),
            ..Default::default()
        });
        assert!(result.is_empty());
    }

    #[test]
    fn test_sub_category_composes_with_category_preset() {
        let result = search(SearchParams {
            category: Some("Domestic Trips".to_string()),
            sub_category: Some("Weekend".to_string()),
            ..Default::default()
        });
        assert_eq!(ids(&result), vec![4]);
    }

    #[test]
    fn test_destination_is_case_insensitive_substring() {
        let result = search(SearchParams {
            destination: Some("india".to_string()),
            ..Default::default()
        });
        assert_eq!(ids(&result), vec![1, 4]);

        let empty_needle = search(SearchParams {
            destination: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(empty_needle.len(), 6);
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let result = search(SearchParams {
            min_price: Some(24999.0),
            max_price: Some(98999.0),
            ..Default::default()
        });
        assert_eq!(ids(&result), vec![1, 3, 6]);
    }

    #[test]
    fn test_duration_one_day_outside_range_is_excluded() {
        let result = search(SearchParams {
            min_duration: Some(4.0),
            max_duration: Some(6.0),
            ..Default::default()
        });
        assert_eq!(ids(&result), vec![1, 2, 3]);
    }

    #[test]
    fn test_single_bound_is_enough() {
        let result = search(SearchParams {
            max_price: Some(25000.0),
            ..Default::default()
        });
        assert_eq!(ids(&result), vec![1, 4]);
    }

    #[test]
    fn test_sorting_by_price() {
        let packages = vec![
            package(1, "Beach", "A", "X", 500, 3),
            package(2, "Beach", "A", "X", 100, 3),
            package(3, "Beach", "A", "X", 300, 3),
        ];

        let asc = PackageQuery {
            sort: Some(SortBy::PriceAsc),
            ..Default::default()
        }
        .apply(packages.clone());
        let prices: Vec<i32> = asc.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![100, 300, 500]);

        let desc = PackageQuery {
            sort: Some(SortBy::PriceDesc),
            ..Default::default()
        }
        .apply(packages);
        let prices: Vec<i32> = desc.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![500, 300, 100]);
    }

    #[test]
    fn test_duration_sort_keeps_storage_order_for_ties() {
        let result = search(SearchParams {
            sort_by: Some(SortBy::DurationDesc),
            ..Default::default()
        });
        assert_eq!(ids(&result), vec![5, 2, 1, 3, 4, 6]);

        let result = search(SearchParams {
            sort_by: Some(SortBy::DurationAsc),
            ..Default::default()
        });
        assert_eq!(ids(&result), vec![4, 6, 3, 1, 2, 5]);
    }

    #[test]
    fn test_every_result_satisfies_every_predicate() {
        let params = SearchParams {
            category: Some("International Trips".to_string()),
            min_price: Some(50000.0),
            max_duration: Some(6.0),
            sort_by: Some(SortBy::PriceAsc),
            ..Default::default()
        };
        let query = PackageQuery::new(&params);
        let result = query.apply(catalog());

        assert_eq!(ids(&result), vec![6, 3, 2]);
        for p in &result {
            assert!(!p.destination.to_lowercase().contains("india"));
            assert!(p.price >= 50000);
            assert!(p.duration <= 6);
        }
    }

    #[test]
    fn test_apply_is_idempotent() {
        let query = PackageQuery::new(&SearchParams {
            destination: Some("a".to_string()),
            sort_by: Some(SortBy::DurationAsc),
            ..Default::default()
        });
        assert_eq!(query.apply(catalog()), query.apply(catalog()));
    }
}
