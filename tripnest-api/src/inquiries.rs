use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::warn;
use tripnest_shared::{Inquiry, NewInquiry};

use crate::{error::AppError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/inquiries", get(list_inquiries).post(create_inquiry))
}

/// POST /api/inquiries
async fn create_inquiry(
    State(state): State<AppState>,
    payload: Result<Json<NewInquiry>, JsonRejection>,
) -> Result<(StatusCode, Json<Inquiry>), AppError> {
    let Json(inquiry) = payload.map_err(|rejection| {
        warn!("POST /api/inquiries - Rejected body: {}", rejection.body_text());
        AppError::ValidationError("Invalid inquiry data".to_string())
    })?;

    let created = state.inquiries.submit(inquiry).await?;
    state.metrics.record_inquiry();

    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/inquiries
async fn list_inquiries(State(state): State<AppState>) -> Result<Json<Vec<Inquiry>>, AppError> {
    let inquiries = state.inquiries.list().await?;
    Ok(Json(inquiries))
}
