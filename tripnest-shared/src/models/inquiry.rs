use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A contact request submitted by a site visitor.
///
/// `package_id` is a weak reference: the package may be absent without
/// invalidating the inquiry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub message: String,
    pub travel_dates: Option<String>,
    pub budget: Option<i32>,
    pub package_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInquiry {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(default)]
    pub travel_dates: Option<String>,
    #[serde(default)]
    pub budget: Option<i32>,
    #[serde(default)]
    pub package_id: Option<i32>,
}

impl NewInquiry {
    pub fn into_inquiry(self, id: i32, created_at: DateTime<Utc>) -> Inquiry {
        Inquiry {
            id,
            name: self.name,
            email: self.email,
            message: self.message,
            travel_dates: self.travel_dates,
            budget: self.budget,
            package_id: self.package_id,
            created_at,
        }
    }
}
