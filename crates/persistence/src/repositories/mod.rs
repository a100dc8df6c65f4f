//! Repository implementations for database operations.

pub mod announcement;
pub mod api_key;
pub mod inquiry;
pub mod post;
pub mod praise;

pub use announcement::AnnouncementRepository;
pub use api_key::ApiKeyRepository;
pub use inquiry::{InquiryFilter, InquiryRepository};
pub use post::{PostFilter, PostRepository};
pub use praise::PraiseRepository;

/// Builds an `ILIKE` pattern matching `term` as a literal substring.
pub(crate) fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
