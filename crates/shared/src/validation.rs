//! Common validation utilities.

use validator::ValidationError;

/// Maximum length of a stored media reference.
pub const MAX_MEDIA_REFERENCE_LENGTH: usize = 500;

/// Validates that a required text field contains something other than whitespace.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("This field may not be blank".into());
        Err(err)
    } else {
        Ok(())
    }
}

/// Validates a reference to an externally served media blob.
///
/// Accepted forms are absolute `http(s)` URLs and relative storage paths such
/// as `post_images/launch.jpg`. Whitespace, parent-directory segments and
/// overly long values are rejected.
pub fn validate_media_reference(value: &str) -> Result<(), ValidationError> {
    let invalid = |message: &'static str| {
        let mut err = ValidationError::new("media_reference");
        err.message = Some(message.into());
        Err(err)
    };

    if value.is_empty() {
        return invalid("Media reference may not be empty");
    }
    if value.len() > MAX_MEDIA_REFERENCE_LENGTH {
        return invalid("Media reference must be at most 500 characters");
    }
    if value.chars().any(char::is_whitespace) {
        return invalid("Media reference may not contain whitespace");
    }

    let is_url = value.starts_with("https://") || value.starts_with("http://");
    if !is_url && value.split('/').any(|segment| segment == "..") {
        return invalid("Media reference may not traverse directories");
    }

    Ok(())
}

/// Media reference in a partial update, where an empty value clears the field.
pub fn validate_media_patch(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }
    validate_media_reference(value)
}
