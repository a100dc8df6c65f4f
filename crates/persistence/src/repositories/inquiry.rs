//! Inquiry repository for database operations.

use domain::models::inquiry::{CreateInquiryRequest, UpdateInquiryRequest};
use domain::models::{CreatedWindow, InquiryCategory};
use sqlx::PgPool;

use super::contains_pattern;
use crate::entities::InquiryEntity;
use crate::metrics::QueryTimer;

const INQUIRY_COLUMNS: &str = "id, name, company, phone, email, category, message, created_at";

/// Admin console filters for inquiries.
#[derive(Debug, Clone, Default)]
pub struct InquiryFilter {
    /// Substring matched against name, company, phone, email and message.
    pub search: Option<String>,
    pub category: Option<InquiryCategory>,
    pub window: CreatedWindow,
}

/// Repository for inquiry-related database operations.
#[derive(Clone)]
pub struct InquiryRepository {
    pool: PgPool,
}

impl InquiryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new inquiry. A missing category is stored as the default.
    pub async fn create(
        &self,
        input: &CreateInquiryRequest,
    ) -> Result<InquiryEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_inquiry");
        let category = input.category.unwrap_or_default();
        let result = sqlx::query_as::<_, InquiryEntity>(&format!(
            r#"
            INSERT INTO inquiries (name, company, phone, email, category, message)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {INQUIRY_COLUMNS}
            "#
        ))
        .bind(&input.name)
        .bind(&input.company)
        .bind(&input.phone)
        .bind(&input.email)
        .bind(category.as_str())
        .bind(&input.message)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<InquiryEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_inquiry_by_id");
        let result = sqlx::query_as::<_, InquiryEntity>(&format!(
            "SELECT {INQUIRY_COLUMNS} FROM inquiries WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Fetch the inquiries with the given ids, in no particular order.
    pub async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<InquiryEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_inquiries_by_ids");
        let result = sqlx::query_as::<_, InquiryEntity>(&format!(
            "SELECT {INQUIRY_COLUMNS} FROM inquiries WHERE id = ANY($1)"
        ))
        .bind(ids)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// All inquiries, newest first.
    pub async fn list(&self) -> Result<Vec<InquiryEntity>, sqlx::Error> {
        self.search(&InquiryFilter::default()).await
    }

    /// Inquiries matching the admin console filters, newest first.
    pub async fn search(&self, filter: &InquiryFilter) -> Result<Vec<InquiryEntity>, sqlx::Error> {
        let timer = QueryTimer::new("search_inquiries");
        let result = sqlx::query_as::<_, InquiryEntity>(&format!(
            r#"
            SELECT {INQUIRY_COLUMNS}
            FROM inquiries
            WHERE ($1::text IS NULL
                   OR name ILIKE $1 OR company ILIKE $1 OR phone ILIKE $1
                   OR email ILIKE $1 OR message ILIKE $1)
              AND ($2::text IS NULL OR category = $2)
              AND ($3::timestamptz IS NULL OR created_at >= $3)
              AND ($4::timestamptz IS NULL OR created_at <= $4)
            ORDER BY created_at DESC, id ASC
            "#
        ))
        .bind(filter.search.as_deref().map(contains_pattern))
        .bind(filter.category.map(|c| c.as_str()))
        .bind(filter.window.created_from)
        .bind(filter.window.created_to)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Update an inquiry.
    /// Only provided fields are updated; None values are preserved.
    pub async fn update(
        &self,
        id: i64,
        input: &UpdateInquiryRequest,
    ) -> Result<Option<InquiryEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_inquiry");
        let result = sqlx::query_as::<_, InquiryEntity>(&format!(
            r#"
            UPDATE inquiries SET
                name = COALESCE($2, name),
                company = COALESCE($3, company),
                phone = COALESCE($4, phone),
                email = COALESCE($5, email),
                category = COALESCE($6, category),
                message = COALESCE($7, message)
            WHERE id = $1
            RETURNING {INQUIRY_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(input.name.as_deref())
        .bind(input.company.as_deref())
        .bind(input.phone.as_deref())
        .bind(input.email.as_deref())
        .bind(input.category.map(|c| c.as_str()))
        .bind(input.message.as_deref())
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Delete an inquiry.
    /// Returns the number of rows deleted (0 or 1).
    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_inquiry");
        let result = sqlx::query("DELETE FROM inquiries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        timer.record();
        Ok(result.rows_affected())
    }
}
