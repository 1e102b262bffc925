//! The store traits defining the persistence interface.
//!
//! Reading/writing the on-disk timeline container and narrative project
//! formats is external to the engine. Any backend (in-memory, JSON file,
//! application-native format) implements these traits to hand the engine a
//! fully materialized model and persist the mutated result afterwards.

use crate::error::ModelResult;
use crate::narrative::NarrativeModel;
use crate::timeline::TimelineModel;

/// Persistence backend for the timeline model.
pub trait TimelineStore {
    /// Materialize the full timeline model.
    ///
    /// Backends that manage entity types themselves must surface
    /// [`crate::ModelError::MissingRequiredEntityType`] if one of the four
    /// kinds cannot be provided; that failure is fatal to the pass.
    fn load(&self) -> ModelResult<TimelineModel>;

    /// Persist the full timeline model.
    fn save(&self, model: &TimelineModel) -> ModelResult<()>;
}

/// Persistence backend for the narrative model.
pub trait NarrativeStore {
    /// Materialize the full narrative model.
    fn load(&self) -> ModelResult<NarrativeModel>;

    /// Persist the full narrative model.
    fn save(&self, model: &NarrativeModel) -> ModelResult<()>;
}
