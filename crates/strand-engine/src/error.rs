//! Error types for the engine crate.

use std::fmt;

use strand_model::ModelError;
use strand_types::{EntityKind, ModelSide};

/// What kind of record carried a duplicated identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordCategory {
    Event,
    Section,
    Entity(EntityKind),
}

impl fmt::Display for RecordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Event => write!(f, "event"),
            Self::Section => write!(f, "section"),
            Self::Entity(kind) => write!(f, "{kind}"),
        }
    }
}

/// Errors that abort a reconciliation pass.
///
/// Fatal errors surface before any destination mutation is visible to the
/// caller; per-record problems degrade to report warnings instead.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// Two records of the same category share an identity on one side.
    /// Detected pre-flight; the pass aborts with zero mutations applied.
    #[error("ambiguous {side} {category} \"{title}\"")]
    DuplicateTitle {
        side: ModelSide,
        category: RecordCategory,
        title: String,
    },

    /// A model or store failure, including a rejected required entity type.
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Convenience alias for engine results.
pub type SyncResult<T> = Result<T, SyncError>;
