//! Media kind vocabulary used by event media rows and uploads.

use validator::ValidationError;

/// A still image (`.jpg`, `.jpeg`, `.png`).
pub const MEDIA_IMAGE: &str = "image";

/// A video clip (`.mp4`, `.mov`, `.avi`).
pub const MEDIA_VIDEO: &str = "video";

/// All valid media type values.
pub const VALID_MEDIA_TYPES: &[&str] = &[MEDIA_IMAGE, MEDIA_VIDEO];

/// Returns `true` if the given string is a valid media type.
pub fn is_valid_media_type(s: &str) -> bool {
    VALID_MEDIA_TYPES.contains(&s)
}

/// Field validator for `#[validate(custom(function = "..."))]` on media DTOs.
pub fn validate_media_type(value: &str) -> Result<(), ValidationError> {
    if is_valid_media_type(value) {
        Ok(())
    } else {
        Err(ValidationError::new("media_type")
            .with_message("Invalid media type. Must be 'image' or 'video'".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_media_types() {
        assert!(is_valid_media_type("image"));
        assert!(is_valid_media_type("video"));
        assert!(!is_valid_media_type("audio"));
        assert!(!is_valid_media_type("Image"));
        assert!(!is_valid_media_type(""));
    }

    #[test]
    fn test_validator_message() {
        let err = validate_media_type("gif").unwrap_err();
        assert_eq!(err.code, "media_type");
        assert_eq!(
            err.message.as_deref(),
            Some("Invalid media type. Must be 'image' or 'video'")
        );
        assert!(validate_media_type("video").is_ok());
    }
}
