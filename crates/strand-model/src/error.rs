//! Error types for the model crate.

use strand_types::EntityKind;

/// Errors surfaced by models and their store backends.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// A store rejected creating one of the four required entity types.
    /// Fatal: the pass is surfaced to the caller with no partial save.
    #[error("required entity type {kind} could not be created: {reason}")]
    MissingRequiredEntityType { kind: EntityKind, reason: String },

    /// Store I/O failure.
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Store serialization or deserialization failure.
    #[error("store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience alias for model results.
pub type ModelResult<T> = Result<T, ModelError>;
