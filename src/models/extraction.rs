//! Extraction result model and display helpers.

use serde::{Deserialize, Serialize};

/// Result of a successful text extraction.
///
/// Immutable once received; at most one settled session refers to it. All
/// fields are required on decode so a partial backend response never
/// surfaces as a half-filled result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Extracted text, possibly empty.
    pub text: String,
    /// Identifier of the engine that produced the text.
    pub ocr_engine: String,
    /// Confidence in [0, 1].
    pub confidence: f64,
    /// Backend processing time in milliseconds.
    pub processing_time_ms: u64,
}

impl ExtractionResult {
    /// Confidence as a whole percentage, e.g. `0.92` is `92`.
    pub fn confidence_percent(&self) -> u32 {
        (self.confidence * 100.0).round() as u32
    }

    /// Number of characters in the extracted text.
    pub fn character_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Number of whitespace-separated words in the extracted text.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(text: &str, confidence: f64) -> ExtractionResult {
        ExtractionResult {
            text: text.to_string(),
            ocr_engine: "tesseract".to_string(),
            confidence,
            processing_time_ms: 150,
        }
    }

    #[test]
    fn test_confidence_percent_rounds() {
        assert_eq!(result("", 0.92).confidence_percent(), 92);
        assert_eq!(result("", 0.926).confidence_percent(), 93);
        assert_eq!(result("", 0.0).confidence_percent(), 0);
        assert_eq!(result("", 1.0).confidence_percent(), 100);
    }

    #[test]
    fn test_character_count() {
        assert_eq!(result("Hello", 0.9).character_count(), 5);
        assert_eq!(result("", 0.9).character_count(), 0);
    }

    #[test]
    fn test_word_count_filters_empty() {
        assert_eq!(result("Hello", 0.9).word_count(), 1);
        assert_eq!(result("  two   words \n", 0.9).word_count(), 2);
        assert_eq!(result("", 0.9).word_count(), 0);
        assert_eq!(result("   ", 0.9).word_count(), 0);
    }

    #[test]
    fn test_required_fields_on_decode() {
        let full = r#"{"text":"Hello","ocr_engine":"tesseract","confidence":0.92,"processing_time_ms":150}"#;
        let decoded: ExtractionResult = serde_json::from_str(full).unwrap();
        assert_eq!(decoded.text, "Hello");

        let missing = r#"{"text":"Hello","ocr_engine":"tesseract"}"#;
        assert!(serde_json::from_str::<ExtractionResult>(missing).is_err());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let body = r#"{"success":true,"text":"","ocr_engine":"google","confidence":0.95,"processing_time_ms":10}"#;
        let decoded: ExtractionResult = serde_json::from_str(body).unwrap();
        assert_eq!(decoded.ocr_engine, "google");
    }
}
