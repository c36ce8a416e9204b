use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tripnest_core::repository::{InquiryRepository, RepoResult};
use tripnest_shared::{Inquiry, NewInquiry};

pub struct PostgresInquiryRepository {
    pool: PgPool,
}

impl PostgresInquiryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct InquiryRow {
    id: i32,
    name: String,
    email: String,
    message: String,
    travel_dates: Option<String>,
    budget: Option<i32>,
    package_id: Option<i32>,
    created_at: DateTime<Utc>,
}

impl From<InquiryRow> for Inquiry {
    fn from(row: InquiryRow) -> Self {
        Inquiry {
            id: row.id,
            name: row.name,
            email: row.email,
            message: row.message,
            travel_dates: row.travel_dates,
            budget: row.budget,
            package_id: row.package_id,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl InquiryRepository for PostgresInquiryRepository {
    async fn create_inquiry(&self, inquiry: &NewInquiry) -> RepoResult<Inquiry> {
        let row: InquiryRow = sqlx::query_as(
            r#"
            INSERT INTO inquiries (name, email, message, travel_dates, budget, package_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, email, message, travel_dates, budget, package_id, created_at
            "#,
        )
        .bind(&inquiry.name)
        .bind(&inquiry.email)
        .bind(&inquiry.message)
        .bind(inquiry.travel_dates.as_deref())
        .bind(inquiry.budget)
        .bind(inquiry.package_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn list_inquiries(&self) -> RepoResult<Vec<Inquiry>> {
        let rows: Vec<InquiryRow> = sqlx::query_as(
            "SELECT id, name, email, message, travel_dates, budget, package_id, created_at FROM inquiries ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Inquiry::from).collect())
    }
}
