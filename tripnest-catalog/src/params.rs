use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Optional filter and sort criteria for a package search.
///
/// Every field left as `None` imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub category: Option<String>,
    pub sub_category: Option<String>,
    pub destination: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_duration: Option<f64>,
    pub max_duration: Option<f64>,
    pub sort_by: Option<SortBy>,
}

impl SearchParams {
    /// Checks the numeric bounds are finite and non-negative.
    ///
    /// An inverted range (`min > max`) is accepted and simply matches nothing.
    pub fn validate(&self) -> Result<(), ParamError> {
        let bounds = [
            ("minPrice", self.min_price),
            ("maxPrice", self.max_price),
            ("minDuration", self.min_duration),
            ("maxDuration", self.max_duration),
        ];

        for (field, value) in bounds {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(ParamError::InvalidNumber {
                        field,
                        value: v.to_string(),
                    });
                }
                if v < 0.0 {
                    return Err(ParamError::Negative { field, value: v });
                }
            }
        }

        Ok(())
    }
}

/// Rejected search input, detected before the query engine runs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParamError {
    #[error("{field} must be a number, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("sortBy must be one of price_asc, price_desc, duration_asc, duration_desc, got {0:?}")]
    UnknownSort(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    PriceAsc,
    PriceDesc,
    DurationAsc,
    DurationDesc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Price,
    Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortBy {
    pub fn field(self) -> SortField {
        match self {
            SortBy::PriceAsc | SortBy::PriceDesc => SortField::Price,
            SortBy::DurationAsc | SortBy::DurationDesc => SortField::Duration,
        }
    }

    pub fn direction(self) -> SortDirection {
        match self {
            SortBy::PriceAsc | SortBy::DurationAsc => SortDirection::Ascending,
            SortBy::PriceDesc | SortBy::DurationDesc => SortDirection::Descending,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::PriceAsc => "price_asc",
            SortBy::PriceDesc => "price_desc",
            SortBy::DurationAsc => "duration_asc",
            SortBy::DurationDesc => "duration_desc",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortBy {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price_asc" => Ok(SortBy::PriceAsc),
            "price_desc" => Ok(SortBy::PriceDesc),
            "duration_asc" => Ok(SortBy::DurationAsc),
            "duration_desc" => Ok(SortBy::DurationDesc),
            other => Err(ParamError::UnknownSort(other.to_string())),
        }
    }
}

impl SortField {
    pub fn column(self) -> &'static str {
        match self {
            SortField::Price => "price",
            SortField::Duration => "duration",
        }
    }
}

impl SortDirection {
    pub fn keyword(self) -> &'static str {
        match self {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DESC",
        }
    }
}
