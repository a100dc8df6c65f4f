//! Custom Axum extractors.

pub mod api_key;
pub mod validated_json;

pub use api_key::{ApiKeyAuth, API_KEY_HEADER};
pub use validated_json::ValidatedJson;
