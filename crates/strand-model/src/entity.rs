//! Entities and the per-kind entity collections.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named entity of one of the four kinds.
///
/// Identity is the name, unique within its kind per model. Entities are
/// created lazily during a sync pass and never deleted by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub guid: Uuid,
    pub name: String,
    /// Free-text notes carried alongside the entity.
    #[serde(default)]
    pub notes: String,
}

impl Entity {
    /// Create a new entity with a fresh GUID.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            guid: Uuid::new_v4(),
            name: name.into(),
            notes: String::new(),
        }
    }
}

/// The ordered collection of entities of a single kind within one model.
///
/// Name comparison is exact, case-sensitive string equality; there is no
/// fuzzy matching.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntitySet {
    entities: Vec<Entity>,
}

impl EntitySet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entities in the set.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns `true` if the set holds no entities.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterate over the entities in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Look up an entity by exact name.
    pub fn find_by_name(&self, name: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.name == name)
    }

    /// Look up an entity by exact name, mutably.
    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.name == name)
    }

    /// Returns `true` if an entity with this exact name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.find_by_name(name).is_some()
    }

    /// Find an entity by name, creating it if absent.
    ///
    /// Idempotent; the second element of the result is `true` only when the
    /// entity was created by this call, so the caller can record the
    /// creation for reporting.
    pub fn get_or_create(&mut self, name: &str) -> (&Entity, bool) {
        if let Some(pos) = self.entities.iter().position(|e| e.name == name) {
            (&self.entities[pos], false)
        } else {
            self.entities.push(Entity::new(name));
            let last = self.entities.len() - 1;
            (&self.entities[last], true)
        }
    }

    /// Names that occur more than once, in first-occurrence order.
    pub fn duplicate_names(&self) -> Vec<String> {
        let mut seen = Vec::new();
        let mut duplicates = Vec::new();
        for entity in &self.entities {
            if seen.contains(&entity.name) {
                if !duplicates.contains(&entity.name) {
                    duplicates.push(entity.name.clone());
                }
            } else {
                seen.push(entity.name.clone());
            }
        }
        duplicates
    }
}
