use axum::{extract::State, http::header, response::IntoResponse, routing::get, Router};
use prometheus::{Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

use crate::{error::AppError, state::AppState};

/// Outcome label values for `tripnest_package_searches_total`.
pub const SEARCH_OK: &str = "ok";
pub const SEARCH_INVALID: &str = "invalid";
pub const SEARCH_ERROR: &str = "error";

pub struct Metrics {
    registry: Registry,
    searches: IntCounterVec,
    search_results: Histogram,
    inquiries: IntCounter,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let searches = IntCounterVec::new(
            Opts::new("tripnest_package_searches_total", "Package searches by outcome"),
            &["outcome"],
        )?;
        let search_results = Histogram::with_opts(
            HistogramOpts::new("tripnest_package_search_results", "Packages returned per search")
                .buckets(vec![0.0, 1.0, 3.0, 5.0, 10.0, 25.0, 50.0, 100.0]),
        )?;
        let inquiries = IntCounter::new(
            "tripnest_inquiries_submitted_total",
            "Inquiries accepted and stored",
        )?;

        registry.register(Box::new(searches.clone()))?;
        registry.register(Box::new(search_results.clone()))?;
        registry.register(Box::new(inquiries.clone()))?;

        Ok(Self { registry, searches, search_results, inquiries })
    }

    pub fn record_search(&self, outcome: &str) {
        self.searches.with_label_values(&[outcome]).inc();
    }

    pub fn observe_results(&self, count: usize) {
        self.search_results.observe(count as f64);
    }

    pub fn record_inquiry(&self) {
        self.inquiries.inc();
    }

    pub fn render(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/metrics", get(metrics_handler))
}

async fn metrics_handler(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let body = state
        .metrics
        .render()
        .map_err(|e| AppError::InternalServerError(format!("Metrics encoding failed: {}", e)))?;

    Ok(([(header::CONTENT_TYPE, prometheus::TEXT_FORMAT)], body))
}
