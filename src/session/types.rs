//! Session state and progress events.

use thiserror::Error;

use crate::client::ExtractError;
use crate::models::ExtractionResult;

/// Lifecycle state of one upload session.
///
/// Result and error are mutually exclusive by construction; starting a new
/// submission from a settled state replaces the previous outcome.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    /// No submission yet, or reset after settlement.
    #[default]
    Idle,
    /// One extraction request is in flight.
    Submitting,
    /// The last submission produced a result.
    Succeeded(ExtractionResult),
    /// The last submission failed.
    Failed(ExtractError),
}

impl SessionState {
    /// Whether the session has settled (succeeded or failed).
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Succeeded(_) | Self::Failed(_))
    }

    /// Whether a submission is in flight.
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}

/// Why a submission was not started.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// A previous submission has not settled yet.
    #[error("A submission is already in progress")]
    InFlight,
}

/// Events emitted while a session progresses.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// Submission accepted and request issued.
    Started { file_name: String },
    /// Extraction succeeded.
    Succeeded { result: ExtractionResult },
    /// Extraction failed.
    Failed { error: ExtractError },
    /// A submit was rejected because another was in flight.
    Rejected { file_name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(SessionState::default(), SessionState::Idle);
    }

    #[test]
    fn test_settled_states() {
        assert!(!SessionState::Idle.is_settled());
        assert!(!SessionState::Submitting.is_settled());
        assert!(SessionState::Failed(ExtractError::Unreachable).is_settled());
    }

    #[test]
    fn test_submitting_state() {
        assert!(SessionState::Submitting.is_submitting());
        assert!(!SessionState::Idle.is_submitting());
    }
}
