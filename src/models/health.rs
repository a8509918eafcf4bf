//! Backend health models.

use serde::{Deserialize, Serialize};

/// Decoded health endpoint body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendHealth {
    /// Reported status string, `healthy` when all is well.
    pub status: String,
    /// Identifier of the OCR engine, when the backend reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ocr_engine: Option<String>,
}

impl BackendHealth {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Backend reachability as observed by the health probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendStatus {
    /// Backend answered the health check.
    Online(BackendHealth),
    /// No usable answer; the backend is treated as offline.
    Offline,
}

impl BackendStatus {
    pub fn is_online(&self) -> bool {
        matches!(self, Self::Online(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_decodes_without_engine() {
        let health: BackendHealth = serde_json::from_str(r#"{"status":"healthy"}"#).unwrap();
        assert!(health.is_healthy());
        assert_eq!(health.ocr_engine, None);
    }

    #[test]
    fn test_health_decodes_with_engine() {
        let health: BackendHealth =
            serde_json::from_str(r#"{"status":"healthy","ocr_engine":"google"}"#).unwrap();
        assert_eq!(health.ocr_engine.as_deref(), Some("google"));
    }

    #[test]
    fn test_non_healthy_status() {
        let health: BackendHealth = serde_json::from_str(r#"{"status":"degraded"}"#).unwrap();
        assert!(!health.is_healthy());
    }

    #[test]
    fn test_status_is_online() {
        let health = BackendHealth {
            status: "healthy".to_string(),
            ocr_engine: None,
        };
        assert!(BackendStatus::Online(health).is_online());
        assert!(!BackendStatus::Offline.is_online());
    }
}
