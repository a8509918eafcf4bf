//! Backend health probe.

use reqwest::Client;
use tracing::{debug, warn};

use crate::config::BackendConfig;
use crate::models::{BackendHealth, BackendStatus};

/// Fire-and-forget reachability check for the extraction backend.
///
/// Used only to annotate output. A failed probe never blocks ingestion or
/// submission.
#[derive(Debug, Clone)]
pub struct HealthProbe {
    client: Client,
    base_url: String,
}

impl HealthProbe {
    /// Create a probe from backend configuration.
    pub fn new(config: &BackendConfig) -> Self {
        let client = Client::builder()
            .timeout(config.health_timeout)
            .build()
            .expect("Failed to create HTTP client");
        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    /// Check backend reachability.
    ///
    /// Every failure mode (timeout, refused connection, error status,
    /// undecodable body) is absorbed into `Offline`.
    pub async fn check(&self) -> BackendStatus {
        let url = format!("{}/health", self.base_url);

        let resp = match self.client.get(&url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                warn!(error = %e, "health check got no response");
                return BackendStatus::Offline;
            }
        };

        if !resp.status().is_success() {
            warn!(status = %resp.status(), "health check returned error status");
            return BackendStatus::Offline;
        }

        match resp.json::<BackendHealth>().await {
            Ok(health) => {
                debug!(status = %health.status, engine = ?health.ocr_engine, "backend is reachable");
                BackendStatus::Online(health)
            }
            Err(e) => {
                warn!(error = %e, "health check body could not be decoded");
                BackendStatus::Offline
            }
        }
    }
}
