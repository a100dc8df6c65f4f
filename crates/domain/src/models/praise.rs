//! Praise (testimonial) domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A short anonymous testimonial. Praises are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Praise {
    pub id: i64,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreatePraiseRequest {
    #[serde(deserialize_with = "shared::serde_helpers::trimmed")]
    #[validate(
        length(min = 1, max = 280, message = "Message must be 1 to 280 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PraiseResponse {
    pub id: i64,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<Praise> for PraiseResponse {
    fn from(p: Praise) -> Self {
        Self {
            id: p.id,
            message: p.message,
            created_at: p.created_at,
        }
    }
}

/// Query parameters for the admin praise list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminPraiseQuery {
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 280 Hangul syllables are 840 bytes.
        let request = CreatePraiseRequest {
            message: "좋".repeat(280),
        };
        assert!(request.validate().is_ok());

        let request = CreatePraiseRequest {
            message: "좋".repeat(281),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_and_blank() {
        for message in ["", "   "] {
            let request = CreatePraiseRequest {
                message: message.to_string(),
            };
            let errors = request.validate().unwrap_err();
            assert!(errors.field_errors().contains_key("message"));
        }
    }

    #[test]
    fn test_limit_applies_after_trimming() {
        let json = serde_json::json!({ "message": format!("  {}  ", "좋".repeat(280)) });
        let request: CreatePraiseRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.message.chars().count(), 280);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let result: Result<CreatePraiseRequest, _> =
            serde_json::from_str(r#"{"message": "감사합니다", "author": "anon"}"#);
        assert!(result.is_err());
    }
}
