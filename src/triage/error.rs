//! Errors raised while loading runtime error documents.
//!
//! The triage operations themselves cannot fail; these only cover input
//! that breaks the data contract.

/// Errors that can occur while accepting a runtime error for triage.
#[derive(Debug, thiserror::Error)]
pub enum TriageError {
    /// The document is not valid runtime error JSON.
    #[error("invalid runtime error document: {0}")]
    InvalidDocument(#[from] serde_json::Error),
    /// A frame carries a code snippet but no resolved original location.
    #[error("frame {index} has an originalCodeFrame without an originalStackFrame")]
    CodeFrameWithoutOriginal { index: usize },
}
