//! Data models for textgrab.

mod candidate;
mod extraction;
mod health;

pub use candidate::{CandidateFile, Preview};
pub use extraction::ExtractionResult;
pub use health::{BackendHealth, BackendStatus};
