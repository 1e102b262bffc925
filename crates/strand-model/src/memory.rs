//! In-memory stores for testing and embedding.
//!
//! Both stores keep the model in a `RwLock`-protected slot. Data is lost
//! when the store is dropped.

use std::sync::RwLock;

use crate::error::{ModelError, ModelResult};
use crate::narrative::NarrativeModel;
use crate::timeline::TimelineModel;
use crate::traits::{NarrativeStore, TimelineStore};

fn poisoned(side: &str) -> ModelError {
    ModelError::Io(std::io::Error::other(format!("{side} store lock poisoned")))
}

/// An in-memory implementation of [`TimelineStore`].
#[derive(Debug, Default)]
pub struct MemoryTimelineStore {
    model: RwLock<TimelineModel>,
}

impl MemoryTimelineStore {
    /// Create a store holding an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with a model.
    pub fn with_model(model: TimelineModel) -> Self {
        Self { model: RwLock::new(model) }
    }
}

impl TimelineStore for MemoryTimelineStore {
    fn load(&self) -> ModelResult<TimelineModel> {
        Ok(self.model.read().map_err(|_| poisoned("timeline"))?.clone())
    }

    fn save(&self, model: &TimelineModel) -> ModelResult<()> {
        *self.model.write().map_err(|_| poisoned("timeline"))? = model.clone();
        Ok(())
    }
}

/// An in-memory implementation of [`NarrativeStore`].
#[derive(Debug, Default)]
pub struct MemoryNarrativeStore {
    model: RwLock<NarrativeModel>,
}

impl MemoryNarrativeStore {
    /// Create a store holding an empty project.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with a model.
    pub fn with_model(model: NarrativeModel) -> Self {
        Self { model: RwLock::new(model) }
    }
}

impl NarrativeStore for MemoryNarrativeStore {
    fn load(&self) -> ModelResult<NarrativeModel> {
        Ok(self.model.read().map_err(|_| poisoned("narrative"))?.clone())
    }

    fn save(&self, model: &NarrativeModel) -> ModelResult<()> {
        *self.model.write().map_err(|_| poisoned("narrative"))? = model.clone();
        Ok(())
    }
}
