//! Wire types for extraction backend responses.

use serde::Deserialize;

use crate::models::ExtractionResult;

/// Generic message when a rejection body carries no usable detail.
pub const GENERIC_REJECTION: &str = "OCR processing failed";

/// Generic message when a success body is missing required fields.
pub const GENERIC_DECODE_FAILURE: &str = "OCR response could not be decoded";

/// Error payload shape used by the backend for rejections.
///
/// The backend reports either a `detail` field (validation failures) or an
/// `error` field (processing failures); both are optional.
#[derive(Debug, Clone, Default, Deserialize)]
struct RejectionBody {
    #[serde(default)]
    detail: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Extract the server-provided message from a rejection body, falling back
/// to the generic message when the body has no usable detail.
pub(crate) fn rejection_message(body: &str) -> String {
    serde_json::from_str::<RejectionBody>(body)
        .ok()
        .and_then(|b| b.detail.or(b.error))
        .unwrap_or_else(|| GENERIC_REJECTION.to_string())
}

/// Decode a success body. All result fields are required.
pub(crate) fn decode_success(body: &str) -> Result<ExtractionResult, serde_json::Error> {
    serde_json::from_str(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_message_prefers_detail() {
        assert_eq!(
            rejection_message(r#"{"detail":"engine crashed"}"#),
            "engine crashed"
        );
        assert_eq!(
            rejection_message(r#"{"detail":"engine crashed","error":"other"}"#),
            "engine crashed"
        );
    }

    #[test]
    fn test_rejection_message_falls_back_to_error_field() {
        assert_eq!(rejection_message(r#"{"error":"bad image"}"#), "bad image");
    }

    #[test]
    fn test_rejection_message_generic_fallback() {
        assert_eq!(rejection_message("{}"), GENERIC_REJECTION);
        assert_eq!(rejection_message("not json"), GENERIC_REJECTION);
        assert_eq!(rejection_message(""), GENERIC_REJECTION);
    }

    #[test]
    fn test_decode_success_requires_all_fields() {
        let ok = decode_success(
            r#"{"text":"Hello","ocr_engine":"tesseract","confidence":0.92,"processing_time_ms":150}"#,
        )
        .unwrap();
        assert_eq!(ok.text, "Hello");
        assert_eq!(ok.processing_time_ms, 150);

        assert!(decode_success(r#"{"text":"Hello","ocr_engine":"tesseract","confidence":0.92}"#).is_err());
        assert!(decode_success(r#"{"text":"Hello"}"#).is_err());
        assert!(decode_success("").is_err());
    }
}
