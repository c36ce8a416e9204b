use std::sync::Arc;

use tracing::{error, info};
use tripnest_shared::pii::MaskedEmail;
use tripnest_shared::{Inquiry, NewInquiry};

use crate::repository::InquiryRepository;
use crate::{CoreError, CoreResult};

/// Validates and records visitor inquiries.
#[derive(Clone)]
pub struct InquiryService {
    inquiries: Arc<dyn InquiryRepository>,
}

impl InquiryService {
    pub fn new(inquiries: Arc<dyn InquiryRepository>) -> Self {
        Self { inquiries }
    }

    pub async fn submit(&self, inquiry: NewInquiry) -> CoreResult<Inquiry> {
        let inquiry = normalize(inquiry)?;

        let stored = self.inquiries.create_inquiry(&inquiry).await.map_err(|e| {
            error!("Failed to store inquiry: {}", e);
            CoreError::StorageError(e)
        })?;

        info!(
            "Inquiry {} received from {} (package: {:?})",
            stored.id,
            MaskedEmail(&stored.email),
            stored.package_id
        );
        Ok(stored)
    }

    pub async fn list(&self) -> CoreResult<Vec<Inquiry>> {
        self.inquiries
            .list_inquiries()
            .await
            .map_err(CoreError::StorageError)
    }
}

/// Trims text fields and checks the required ones.
///
/// `package_id` is not checked against the catalog.
fn normalize(inquiry: NewInquiry) -> CoreResult<NewInquiry> {
    let name = required("name", &inquiry.name)?;
    let email = required("email", &inquiry.email)?;
    let message = required("message", &inquiry.message)?;

    if !is_email(&email) {
        return Err(CoreError::ValidationError("email is not a valid address".to_string()));
    }
    if matches!(inquiry.budget, Some(b) if b < 0) {
        return Err(CoreError::ValidationError("budget must not be negative".to_string()));
    }

    let travel_dates = inquiry
        .travel_dates
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty());

    Ok(NewInquiry {
        name,
        email,
        message,
        travel_dates,
        budget: inquiry.budget,
        package_id: inquiry.package_id,
    })
}

fn required(field: &str, value: &str) -> CoreResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::ValidationError(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}

fn is_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    }
}
