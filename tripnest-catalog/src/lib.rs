pub mod category;
pub mod params;
pub mod predicate;
pub mod query;

pub use category::CategoryPreset;
pub use params::{ParamError, SearchParams, SortBy, SortDirection, SortField};
pub use predicate::Predicate;
pub use query::PackageQuery;
