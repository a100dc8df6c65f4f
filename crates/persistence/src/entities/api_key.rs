//! API key entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for the api_keys table.
#[derive(Debug, Clone, FromRow)]
pub struct ApiKeyEntity {
    pub id: i64,
    pub key_hash: String,
    pub key_prefix: String,
    pub name: String,
    pub is_active: bool,
    pub is_admin: bool,
    pub last_used_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl ApiKeyEntity {
    /// Returns true if the key is active and not expired at `at`.
    pub fn is_valid_at(&self, at: DateTime<Utc>) -> bool {
        self.is_active && self.expires_at.map_or(true, |expires_at| expires_at >= at)
    }

    /// Returns true if the key is active and not expired now.
    pub fn is_valid(&self) -> bool {
        self.is_valid_at(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn make_test_key(is_active: bool, expires_at: Option<DateTime<Utc>>) -> ApiKeyEntity {
        ApiKeyEntity {
            id: 1,
            key_hash: "test_hash".to_string(),
            key_prefix: "aBcDeFgH".to_string(),
            name: "console".to_string(),
            is_active,
            is_admin: true,
            last_used_at: None,
            created_at: Utc::now(),
            expires_at,
        }
    }

    #[test]
    fn test_active_without_expiry_is_valid() {
        assert!(make_test_key(true, None).is_valid());
    }

    #[test]
    fn test_future_expiry_is_valid() {
        assert!(make_test_key(true, Some(Utc::now() + Duration::days(30))).is_valid());
    }

    #[test]
    fn test_past_expiry_is_invalid() {
        assert!(!make_test_key(true, Some(Utc::now() - Duration::days(1))).is_valid());
    }

    #[test]
    fn test_inactive_is_invalid() {
        assert!(!make_test_key(false, None).is_valid());
        assert!(!make_test_key(false, Some(Utc::now() + Duration::days(30))).is_valid());
    }

    #[test]
    fn test_is_valid_at_fixed_time() {
        let now = Utc::now();
        let key = make_test_key(true, Some(now));
        assert!(key.is_valid_at(now));
        assert!(!key.is_valid_at(now + Duration::seconds(1)));
    }
}
