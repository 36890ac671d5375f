//! Errors raised by the domain model.

use thiserror::Error;

/// Failures of domain-model operations.
///
/// The model never recovers from these itself; they go straight back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// The tag is already applied to an equal article.
    #[error("Tag {tag} already applied to Article \"{article}\"")]
    DuplicateAssociation { tag: String, article: String },

    /// A movie runtime was zero, negative or out of range.
    #[error("runtime must be a positive number of minutes, got {minutes}")]
    InvalidRuntime { minutes: i64 },
}
