//! # export
//!
//! why: hand the exported snapshot to the user without platform branches in core
//! relations: called by diary.rs export_snapshot; implementations in
//!            diary-storage (directory drop) and diary-wasm (browser download)
//! what: Handoff capability trait, HandoffError, export file name

use thiserror::Error;

/// File name the exported snapshot is delivered under
pub const EXPORT_FILE_NAME: &str = "diario-bulking.json";

/// Failures of the environment hand-off mechanism
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HandoffError {
    #[error("sharing is not available in this environment")]
    Unavailable,

    #[error("hand-off failed: {0}")]
    Failed(String),
}

/// environment-specific delivery of an exported snapshot
///
/// the surrounding platform selects the implementation: a file download
/// in the browser, a file drop into a chosen directory on native. the
/// core only produces bytes and calls this capability.
pub trait Handoff {
    /// whether the environment can deliver at all
    fn is_available(&self) -> bool;

    /// deliver the snapshot bytes under the given file name
    fn deliver(&self, file_name: &str, bytes: &[u8]) -> Result<(), HandoffError>;
}
