use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::{debug, info, warn};
use tripnest_catalog::{ParamError, SearchParams, SortBy};
use tripnest_core::CoreError;
use tripnest_shared::Package;

use crate::{error::AppError, metrics, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/packages", get(list_packages))
        .route("/api/packages/{id}", get(get_package))
}

/// Query string as received. Every value stays a string until
/// [`RawSearchQuery::into_params`] coerces it.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSearchQuery {
    pub category: Option<String>,
    pub sub_category: Option<String>,
    pub destination: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub min_duration: Option<String>,
    pub max_duration: Option<String>,
    pub sort_by: Option<String>,
    /// Shorthand `min-max`; either side may be empty.
    pub price: Option<String>,
}

impl RawSearchQuery {
    pub fn into_params(mut self) -> Result<SearchParams, ParamError> {
        if let Some(range) = self.price.take() {
            let parts: Vec<&str> = range.split('-').collect();
            if let [min, max] = parts.as_slice() {
                self.min_price = Some(min.to_string());
                self.max_price = Some(max.to_string());
            }
        }

        let sort_by = present(self.sort_by)
            .map(|s| s.parse::<SortBy>())
            .transpose()?;

        let params = SearchParams {
            category: present(self.category),
            sub_category: present(self.sub_category),
            destination: present(self.destination),
            min_price: number("minPrice", self.min_price)?,
            max_price: number("maxPrice", self.max_price)?,
            min_duration: number("minDuration", self.min_duration)?,
            max_duration: number("maxDuration", self.max_duration)?,
            sort_by,
        };
        params.validate()?;

        Ok(params)
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn number(field: &'static str, value: Option<String>) -> Result<Option<f64>, ParamError> {
    let Some(raw) = present(value) else {
        return Ok(None);
    };
    raw.trim()
        .parse::<f64>()
        .map(Some)
        .map_err(|_| ParamError::InvalidNumber { field, value: raw })
}

/// GET /api/packages
async fn list_packages(
    State(state): State<AppState>,
    query: Result<Query<RawSearchQuery>, QueryRejection>,
) -> Result<Json<Vec<Package>>, AppError> {
    let Query(raw) = query.map_err(|rejection| {
        warn!("GET /api/packages - Rejected query: {}", rejection.body_text());
        state.metrics.record_search(metrics::SEARCH_INVALID);
        AppError::ValidationError(format!("Invalid search parameters: {}", rejection.body_text()))
    })?;
    debug!("GET /api/packages - Raw query params: {:?}", raw);

    let params = raw.into_params().map_err(|e| {
        state.metrics.record_search(metrics::SEARCH_INVALID);
        AppError::ValidationError(format!("Invalid search parameters: {}", e))
    })?;
    debug!("GET /api/packages - Processed params: {:?}", params);

    let packages = state.packages.search(&params).await.map_err(|e| {
        let outcome = match e {
            CoreError::ValidationError(_) => metrics::SEARCH_INVALID,
            _ => metrics::SEARCH_ERROR,
        };
        state.metrics.record_search(outcome);
        AppError::from(e)
    })?;

    info!("GET /api/packages - Found {} matching packages", packages.len());
    state.metrics.record_search(metrics::SEARCH_OK);
    state.metrics.observe_results(packages.len());

    Ok(Json(packages))
}

/// GET /api/packages/{id}
async fn get_package(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Package>, AppError> {
    let not_found = || AppError::NotFoundError("Package not found".to_string());

    let id: i32 = id.parse().map_err(|_| not_found())?;
    match state.packages.get(id).await {
        Ok(package) => Ok(Json(package)),
        Err(CoreError::NotFound(_)) => Err(not_found()),
        Err(e) => Err(e.into()),
    }
}
