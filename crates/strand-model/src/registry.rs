//! The typed entity registry, one per model.

use serde::{Deserialize, Serialize};
use strand_types::EntityKind;

use crate::entity::{Entity, EntitySet};

/// The four typed entity collections of one model, keyed by name.
///
/// All find-or-create resolution during a sync pass goes through the
/// registry; entities are only ever added, never removed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRegistry {
    pub arcs: EntitySet,
    pub characters: EntitySet,
    pub locations: EntitySet,
    pub items: EntitySet,
}

impl EntityRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The collection for one kind.
    pub fn set(&self, kind: EntityKind) -> &EntitySet {
        match kind {
            EntityKind::Arc => &self.arcs,
            EntityKind::Character => &self.characters,
            EntityKind::Location => &self.locations,
            EntityKind::Item => &self.items,
        }
    }

    /// The mutable collection for one kind.
    pub fn set_mut(&mut self, kind: EntityKind) -> &mut EntitySet {
        match kind {
            EntityKind::Arc => &mut self.arcs,
            EntityKind::Character => &mut self.characters,
            EntityKind::Location => &mut self.locations,
            EntityKind::Item => &mut self.items,
        }
    }

    /// Look up an entity by exact name within its kind.
    pub fn find_by_name(&self, kind: EntityKind, name: &str) -> Option<&Entity> {
        self.set(kind).find_by_name(name)
    }

    /// Find an entity by name within its kind, creating it if absent.
    pub fn get_or_create(&mut self, kind: EntityKind, name: &str) -> (&Entity, bool) {
        self.set_mut(kind).get_or_create(name)
    }

    /// Guarantee the distinguished narrative arc exists.
    ///
    /// Timeline side only; the arc marks which events represent the authored
    /// story. Returns the arc and whether this call created it.
    pub fn ensure_narrative_arc(&mut self, name: &str) -> (&Entity, bool) {
        self.arcs.get_or_create(name)
    }
}
