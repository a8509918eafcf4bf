//! Candidate file validation.

use thiserror::Error;

/// Media types accepted for upload. Both conventional JPEG spellings.
pub const ACCEPTED_MEDIA_TYPES: [&str; 2] = ["image/jpeg", "image/jpg"];

/// Maximum accepted file size (10MB).
pub const MAX_FILE_SIZE_BYTES: usize = 10 * 1024 * 1024;

/// Why a candidate file was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Only JPG/JPEG files are allowed")]
    UnsupportedMediaType,

    #[error("File size must be less than 10MB")]
    FileTooLarge,
}

/// Validate a candidate's declared media type and byte size.
///
/// Rules apply in order and the first failure wins: the media type must be
/// an accepted JPEG spelling, then the size must not exceed the 10MB cap.
/// Pure and synchronous; no I/O.
pub fn validate(media_type: &str, byte_size: usize) -> Result<(), ValidationError> {
    if !ACCEPTED_MEDIA_TYPES.contains(&media_type) {
        return Err(ValidationError::UnsupportedMediaType);
    }
    if byte_size > MAX_FILE_SIZE_BYTES {
        return Err(ValidationError::FileTooLarge);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_both_jpeg_spellings() {
        assert_eq!(validate("image/jpeg", 1024), Ok(()));
        assert_eq!(validate("image/jpg", 1024), Ok(()));
    }

    #[test]
    fn test_rejects_other_media_types() {
        for mime in ["image/png", "image/gif", "application/pdf", "text/plain", ""] {
            assert_eq!(
                validate(mime, 1024),
                Err(ValidationError::UnsupportedMediaType)
            );
        }
    }

    #[test]
    fn test_media_type_is_exact_match() {
        assert_eq!(
            validate("IMAGE/JPEG", 1024),
            Err(ValidationError::UnsupportedMediaType)
        );
        assert_eq!(
            validate("image/jpeg; charset=binary", 1024),
            Err(ValidationError::UnsupportedMediaType)
        );
    }

    #[test]
    fn test_type_rule_wins_over_size_rule() {
        // A 15MB PNG fails on type, not size.
        assert_eq!(
            validate("image/png", 15 * 1024 * 1024),
            Err(ValidationError::UnsupportedMediaType)
        );
    }

    #[test]
    fn test_size_boundary() {
        assert_eq!(validate("image/jpeg", MAX_FILE_SIZE_BYTES), Ok(()));
        assert_eq!(
            validate("image/jpeg", MAX_FILE_SIZE_BYTES + 1),
            Err(ValidationError::FileTooLarge)
        );
    }

    #[test]
    fn test_oversized_jpeg() {
        assert_eq!(
            validate("image/jpeg", 15 * 1024 * 1024),
            Err(ValidationError::FileTooLarge)
        );
    }

    #[test]
    fn test_zero_size_accepted() {
        assert_eq!(validate("image/jpeg", 0), Ok(()));
    }

    #[test]
    fn test_reason_messages() {
        assert_eq!(
            ValidationError::UnsupportedMediaType.to_string(),
            "Only JPG/JPEG files are allowed"
        );
        assert_eq!(
            ValidationError::FileTooLarge.to_string(),
            "File size must be less than 10MB"
        );
    }
}
