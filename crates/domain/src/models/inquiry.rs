//! Inquiry domain model.
//!
//! Inquiries are submitted from the public contact form. Each one carries a
//! category from a closed taxonomy whose Korean labels are used in
//! notification mails and spreadsheet exports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Inquiry category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryCategory {
    #[default]
    Quote,
    Maintenance,
    Partnership,
    Other,
}

impl InquiryCategory {
    /// All categories, in display order.
    pub const ALL: [InquiryCategory; 4] = [
        InquiryCategory::Quote,
        InquiryCategory::Maintenance,
        InquiryCategory::Partnership,
        InquiryCategory::Other,
    ];

    /// Converts to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            InquiryCategory::Quote => "quote",
            InquiryCategory::Maintenance => "maintenance",
            InquiryCategory::Partnership => "partnership",
            InquiryCategory::Other => "other",
        }
    }

    /// Parses from database string representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "quote" => Some(InquiryCategory::Quote),
            "maintenance" => Some(InquiryCategory::Maintenance),
            "partnership" => Some(InquiryCategory::Partnership),
            "other" => Some(InquiryCategory::Other),
            _ => None,
        }
    }

    /// Human-readable label shown to operators.
    pub fn label(&self) -> &'static str {
        match self {
            InquiryCategory::Quote => "솔루션 견적/도입 문의",
            InquiryCategory::Maintenance => "유지보수/장애 접수",
            InquiryCategory::Partnership => "협력/제안",
            InquiryCategory::Other => "기타 문의",
        }
    }
}

impl std::fmt::Display for InquiryCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A customer inquiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inquiry {
    pub id: i64,
    pub name: String,
    pub company: String,
    pub phone: String,
    pub email: String,
    pub category: InquiryCategory,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Request payload for creating an inquiry, also used for full replacement (PUT).
///
/// A missing `category` defaults to `quote` on creation and leaves the stored
/// value untouched on replacement.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateInquiryRequest {
    #[serde(deserialize_with = "shared::serde_helpers::trimmed")]
    #[validate(
        length(max = 100, message = "Name must be at most 100 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub name: String,

    #[serde(deserialize_with = "shared::serde_helpers::trimmed")]
    #[validate(
        length(max = 100, message = "Company must be at most 100 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub company: String,

    #[serde(deserialize_with = "shared::serde_helpers::trimmed")]
    #[validate(
        length(max = 50, message = "Phone must be at most 50 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub phone: String,

    #[serde(deserialize_with = "shared::serde_helpers::trimmed")]
    #[validate(
        email(message = "Enter a valid email address"),
        length(max = 254, message = "Email must be at most 254 characters")
    )]
    pub email: String,

    #[serde(default)]
    pub category: Option<InquiryCategory>,

    #[serde(deserialize_with = "shared::serde_helpers::trimmed")]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub message: String,
}

/// Request payload for partially updating an inquiry (PATCH).
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateInquiryRequest {
    #[serde(default, deserialize_with = "shared::serde_helpers::trimmed_option")]
    #[validate(
        length(max = 100, message = "Name must be at most 100 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "shared::serde_helpers::trimmed_option")]
    #[validate(
        length(max = 100, message = "Company must be at most 100 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub company: Option<String>,

    #[serde(default, deserialize_with = "shared::serde_helpers::trimmed_option")]
    #[validate(
        length(max = 50, message = "Phone must be at most 50 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub phone: Option<String>,

    #[serde(default, deserialize_with = "shared::serde_helpers::trimmed_option")]
    #[validate(
        email(message = "Enter a valid email address"),
        length(max = 254, message = "Email must be at most 254 characters")
    )]
    pub email: Option<String>,

    pub category: Option<InquiryCategory>,

    #[serde(default, deserialize_with = "shared::serde_helpers::trimmed_option")]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub message: Option<String>,
}

impl From<CreateInquiryRequest> for UpdateInquiryRequest {
    fn from(r: CreateInquiryRequest) -> Self {
        Self {
            name: Some(r.name),
            company: Some(r.company),
            phone: Some(r.phone),
            email: Some(r.email),
            category: r.category,
            message: Some(r.message),
        }
    }
}

/// Response payload for inquiry operations.
#[derive(Debug, Clone, Serialize)]
pub struct InquiryResponse {
    pub id: i64,
    pub name: String,
    pub company: String,
    pub phone: String,
    pub email: String,
    pub category: InquiryCategory,
    pub category_display: &'static str,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<Inquiry> for InquiryResponse {
    fn from(i: Inquiry) -> Self {
        Self {
            id: i.id,
            name: i.name,
            company: i.company,
            phone: i.phone,
            email: i.email,
            category: i.category,
            category_display: i.category.label(),
            message: i.message,
            created_at: i.created_at,
        }
    }
}

/// Query parameters for the admin inquiry list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminInquiryQuery {
    pub search: Option<String>,
    pub category: Option<InquiryCategory>,
    pub created_from: Option<DateTime<Utc>>,
    pub created_to: Option<DateTime<Utc>>,
}

impl AdminInquiryQuery {
    pub fn window(&self) -> super::CreatedWindow {
        super::CreatedWindow {
            created_from: self.created_from,
            created_to: self.created_to,
        }
    }
}

/// Request payload for the admin CSV export.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ExportInquiriesRequest {
    #[validate(length(min = 1, max = 1000, message = "Select between 1 and 1000 inquiries"))]
    pub ids: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_json() -> serde_json::Value {
        serde_json::json!({
            "name": "홍길동",
            "company": "와이엠",
            "phone": "010-1234-5678",
            "email": "hong@example.com",
            "category": "maintenance",
            "message": "서버가 응답하지 않습니다.\n확인 부탁드립니다."
        })
    }

    #[test]
    fn test_category_round_trip_through_db_strings() {
        for category in InquiryCategory::ALL {
            assert_eq!(InquiryCategory::parse(category.as_str()), Some(category));
        }
        assert_eq!(InquiryCategory::parse("solution"), None);
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(InquiryCategory::Quote.label(), "솔루션 견적/도입 문의");
        assert_eq!(InquiryCategory::Maintenance.label(), "유지보수/장애 접수");
        assert_eq!(InquiryCategory::Partnership.label(), "협력/제안");
        assert_eq!(InquiryCategory::Other.label(), "기타 문의");
    }

    #[test]
    fn test_category_default_is_quote() {
        assert_eq!(InquiryCategory::default(), InquiryCategory::Quote);
    }

    #[test]
    fn test_create_request_valid() {
        let request: CreateInquiryRequest = serde_json::from_value(valid_json()).unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.category, Some(InquiryCategory::Maintenance));
    }

    #[test]
    fn test_create_request_category_optional() {
        let mut json = valid_json();
        json.as_object_mut().unwrap().remove("category");
        let request: CreateInquiryRequest = serde_json::from_value(json).unwrap();
        assert!(request.category.is_none());
    }

    #[test]
    fn test_create_request_rejects_unknown_category() {
        let mut json = valid_json();
        json["category"] = serde_json::json!("recruit");
        let result: Result<CreateInquiryRequest, _> = serde_json::from_value(json);
        assert!(result.unwrap_err().to_string().contains("unknown variant"));
    }

    #[test]
    fn test_create_request_rejects_unknown_field() {
        let mut json = valid_json();
        json["agreed"] = serde_json::json!(true);
        let result: Result<CreateInquiryRequest, _> = serde_json::from_value(json);
        assert!(result.unwrap_err().to_string().contains("unknown field `agreed`"));
    }

    #[test]
    fn test_create_request_missing_field() {
        let mut json = valid_json();
        json.as_object_mut().unwrap().remove("email");
        let result: Result<CreateInquiryRequest, _> = serde_json::from_value(json);
        assert!(result.unwrap_err().to_string().contains("missing field `email`"));
    }

    #[test]
    fn test_create_request_invalid_email() {
        let mut json = valid_json();
        json["email"] = serde_json::json!("not-an-email");
        let request: CreateInquiryRequest = serde_json::from_value(json).unwrap();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_create_request_blank_and_long_fields() {
        let mut json = valid_json();
        json["name"] = serde_json::json!("  ");
        json["company"] = serde_json::json!("x".repeat(101));
        let request: CreateInquiryRequest = serde_json::from_value(json).unwrap();
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("company"));
        assert!(!fields.contains_key("email"));
    }

    #[test]
    fn test_create_request_trimmed_on_decode() {
        let mut json = valid_json();
        json["name"] = serde_json::json!("  홍길동 ");
        json["email"] = serde_json::json!(" hong@example.com ");
        json["message"] = serde_json::json!("\n 문의 \n");
        let request: CreateInquiryRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.name, "홍길동");
        assert_eq!(request.email, "hong@example.com");
        assert_eq!(request.message, "문의");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_update_request_trimmed_on_decode() {
        let request: UpdateInquiryRequest =
            serde_json::from_str(r#"{"email": " a@b.com ", "company": " 와이엠 "}"#).unwrap();
        assert_eq!(request.email.as_deref(), Some("a@b.com"));
        assert_eq!(request.company.as_deref(), Some("와이엠"));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_update_request_partial() {
        let request: UpdateInquiryRequest =
            serde_json::from_str(r#"{"category": "other"}"#).unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.category, Some(InquiryCategory::Other));
        assert!(request.name.is_none());
    }

    #[test]
    fn test_update_request_validates_present_fields() {
        let request: UpdateInquiryRequest =
            serde_json::from_str(r#"{"email": "broken"}"#).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_response_includes_every_field_and_label() {
        let inquiry = Inquiry {
            id: 3,
            name: "홍길동".to_string(),
            company: "와이엠".to_string(),
            phone: "01012345678".to_string(),
            email: "hong@example.com".to_string(),
            category: InquiryCategory::Partnership,
            message: "제휴 제안".to_string(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(InquiryResponse::from(inquiry)).unwrap();
        assert_eq!(json["category"], "partnership");
        assert_eq!(json["category_display"], "협력/제안");
        for field in ["id", "name", "company", "phone", "email", "message", "created_at"] {
            assert!(json.get(field).is_some(), "missing {}", field);
        }
    }

    #[test]
    fn test_export_request_bounds() {
        let empty: ExportInquiriesRequest = serde_json::from_str(r#"{"ids": []}"#).unwrap();
        assert!(empty.validate().is_err());

        let ok: ExportInquiriesRequest = serde_json::from_str(r#"{"ids": [3, 1, 2]}"#).unwrap();
        assert!(ok.validate().is_ok());
    }
}
