//! Inquiry entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use domain::models::{Inquiry, InquiryCategory};

/// Database row mapping for the inquiries table.
#[derive(Debug, Clone, FromRow)]
pub struct InquiryEntity {
    pub id: i64,
    pub name: String,
    pub company: String,
    pub phone: String,
    pub email: String,
    pub category: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<InquiryEntity> for Inquiry {
    fn from(entity: InquiryEntity) -> Self {
        let category = InquiryCategory::parse(&entity.category).unwrap_or_else(|| {
            tracing::warn!(
                inquiry_id = %entity.id,
                category = %entity.category,
                "Unknown inquiry category in database, using default"
            );
            InquiryCategory::default()
        });

        Self {
            id: entity.id,
            name: entity.name,
            company: entity.company,
            phone: entity.phone,
            email: entity.email,
            category,
            message: entity.message,
            created_at: entity.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(category: &str) -> InquiryEntity {
        InquiryEntity {
            id: 1,
            name: "홍길동".to_string(),
            company: "와이엠".to_string(),
            phone: "01012345678".to_string(),
            email: "hong@example.com".to_string(),
            category: category.to_string(),
            message: "문의".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_entity_to_domain() {
        let inquiry: Inquiry = entity("partnership").into();
        assert_eq!(inquiry.category, InquiryCategory::Partnership);
        assert_eq!(inquiry.company, "와이엠");
    }

    #[test]
    fn test_unknown_category_falls_back_to_default() {
        let inquiry: Inquiry = entity("legacy").into();
        assert_eq!(inquiry.category, InquiryCategory::Quote);
    }
}
