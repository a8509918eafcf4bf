//! Single-file ingestion: selection, validation, and preview generation.
//!
//! Two acquisition paths (explicit pick and drag-drop) funnel through one
//! validation path. Preview encoding runs off the event path; an explicit
//! generation counter discards stale completions when the selection is
//! cleared or replaced before the encode finishes.

mod validate;

pub use validate::{validate, ValidationError, ACCEPTED_MEDIA_TYPES, MAX_FILE_SIZE_BYTES};

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::models::{CandidateFile, Preview};

/// How a candidate file arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionSource {
    Picker,
    Drop,
}

#[derive(Default)]
struct IngestState {
    candidate: Option<CandidateFile>,
    preview: Option<Preview>,
    error: Option<ValidationError>,
    /// Bumped on every selection change. Encode tasks carry the value they
    /// were started under and discard their output on mismatch.
    generation: u64,
    /// Handles of spawned encode tasks, drained by `settle_preview`.
    pending: Vec<JoinHandle<()>>,
}

/// Controller owning the current selection and its derived preview.
///
/// Handles are cheap to clone and share one selection.
#[derive(Clone, Default)]
pub struct IngestionController {
    inner: Arc<Mutex<IngestState>>,
}

impl IngestionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a file chosen through the picker dialog.
    pub async fn select_from_picker(&self, file: CandidateFile) -> Result<(), ValidationError> {
        self.select(file, SelectionSource::Picker).await
    }

    /// Select a file dropped onto the upload surface.
    ///
    /// The drop surface enforces no type filter, so validation is the sole
    /// gate here. A failed drop clears any previous selection, same as the
    /// picker path.
    pub async fn select_from_drop(&self, file: CandidateFile) -> Result<(), ValidationError> {
        self.select(file, SelectionSource::Drop).await
    }

    async fn select(
        &self,
        file: CandidateFile,
        source: SelectionSource,
    ) -> Result<(), ValidationError> {
        let mut state = self.inner.lock().await;
        // Previous selection and preview go away before anything else; any
        // in-flight encode for them is now stale.
        state.generation = state.generation.wrapping_add(1);
        state.candidate = None;
        state.preview = None;

        if let Err(err) = validate(&file.media_type, file.byte_size()) {
            debug!(?source, name = %file.name, %err, "rejected candidate");
            state.error = Some(err.clone());
            return Err(err);
        }

        debug!(?source, name = %file.name, bytes = file.byte_size(), "accepted candidate");
        state.error = None;
        state.candidate = Some(file.clone());

        let generation = state.generation;
        let inner = Arc::clone(&self.inner);
        state.pending.push(tokio::spawn(async move {
            let encoded = tokio::task::spawn_blocking(move || Preview::encode(&file)).await;
            let Ok(preview) = encoded else { return };
            let mut state = inner.lock().await;
            if state.generation == generation {
                state.preview = Some(preview);
            } else {
                debug!("discarded stale preview");
            }
        }));
        Ok(())
    }

    /// Drop the selection, preview, and error.
    ///
    /// Idempotent. Invalidates any in-flight preview encode so the same
    /// file can be re-selected immediately.
    pub async fn clear(&self) {
        let mut state = self.inner.lock().await;
        state.generation = state.generation.wrapping_add(1);
        state.candidate = None;
        state.preview = None;
        state.error = None;
    }

    /// Wait for outstanding preview encodes to finish.
    ///
    /// A completion whose selection has since been cleared or replaced is
    /// discarded by the generation check, not applied.
    pub async fn settle_preview(&self) {
        let pending = {
            let mut state = self.inner.lock().await;
            std::mem::take(&mut state.pending)
        };
        for handle in pending {
            let _ = handle.await;
        }
    }

    /// The currently selected file, if any.
    pub async fn candidate(&self) -> Option<CandidateFile> {
        self.inner.lock().await.candidate.clone()
    }

    /// The preview for the current selection, once its encode settles.
    pub async fn preview(&self) -> Option<Preview> {
        self.inner.lock().await.preview.clone()
    }

    /// The reason the last selection was rejected, if it was.
    pub async fn validation_error(&self) -> Option<ValidationError> {
        self.inner.lock().await.error.clone()
    }
}
