//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod announcement;
pub mod api_key;
pub mod inquiry;
pub mod post;
pub mod praise;

pub use announcement::AnnouncementEntity;
pub use api_key::ApiKeyEntity;
pub use inquiry::InquiryEntity;
pub use post::PostEntity;
pub use praise::PraiseEntity;
