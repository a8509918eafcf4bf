//! Upload session coordination.
//!
//! One session covers a single submission from start to settlement. A
//! second submit while one is in flight is rejected rather than queued;
//! starting a new submission from a settled state clears the previous
//! outcome first. The only way out of `Submitting` is settlement, bounded
//! by the extraction client's timeout.

mod types;

pub use types::{SessionEvent, SessionState, SubmitError};

use std::sync::Arc;

use tokio::sync::{mpsc, Mutex};
use tracing::{debug, info};

use crate::client::ExtractionClient;
use crate::models::CandidateFile;

/// Coordinates one upload lifecycle at a time.
///
/// Handles are cheap to clone and share one session.
#[derive(Clone)]
pub struct SessionCoordinator {
    client: ExtractionClient,
    state: Arc<Mutex<SessionState>>,
    events: Option<mpsc::Sender<SessionEvent>>,
}

impl SessionCoordinator {
    /// Create a coordinator submitting through the given client.
    pub fn new(client: ExtractionClient) -> Self {
        Self {
            client,
            state: Arc::new(Mutex::new(SessionState::Idle)),
            events: None,
        }
    }

    /// Emit progress events through the given channel.
    pub fn with_events(mut self, events: mpsc::Sender<SessionEvent>) -> Self {
        self.events = Some(events);
        self
    }

    /// Submit a candidate file for extraction and wait for settlement.
    ///
    /// Rejected with `SubmitError::InFlight` if a submission is already in
    /// progress. Otherwise the previous outcome is cleared, the request is
    /// issued, and the settled state is returned.
    pub async fn submit(&self, file: CandidateFile) -> Result<SessionState, SubmitError> {
        let won = {
            // Transition atomically; the lock is never held across an
            // await. Whoever wins this transition is the only writer of
            // the eventual settlement.
            let mut state = self.state.lock().await;
            if state.is_submitting() {
                false
            } else {
                *state = SessionState::Submitting;
                true
            }
        };

        if !won {
            debug!(name = %file.name, "submit rejected: request already in flight");
            self.emit(SessionEvent::Rejected {
                file_name: file.name,
            })
            .await;
            return Err(SubmitError::InFlight);
        }

        info!(name = %file.name, bytes = file.byte_size(), "submitting file for extraction");
        self.emit(SessionEvent::Started {
            file_name: file.name.clone(),
        })
        .await;

        let settled = match self.client.extract(&file).await {
            Ok(result) => {
                info!(
                    engine = %result.ocr_engine,
                    chars = result.character_count(),
                    "extraction succeeded"
                );
                self.emit(SessionEvent::Succeeded {
                    result: result.clone(),
                })
                .await;
                SessionState::Succeeded(result)
            }
            Err(error) => {
                info!(%error, "extraction failed");
                self.emit(SessionEvent::Failed {
                    error: error.clone(),
                })
                .await;
                SessionState::Failed(error)
            }
        };

        *self.state.lock().await = settled.clone();
        Ok(settled)
    }

    /// Snapshot of the current session state.
    pub async fn state(&self) -> SessionState {
        self.state.lock().await.clone()
    }

    /// Return a settled session to idle.
    ///
    /// No-op while a submission is in flight.
    pub async fn reset(&self) {
        let mut state = self.state.lock().await;
        if !state.is_submitting() {
            *state = SessionState::Idle;
        }
    }

    async fn emit(&self, event: SessionEvent) {
        if let Some(events) = &self.events {
            let _ = events.send(event).await;
        }
    }
}
