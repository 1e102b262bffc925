//! The timeline model.

use serde::{Deserialize, Serialize};

use crate::event::Event;
use crate::registry::EntityRegistry;

/// The event/entity graph owned by the timeline application.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineModel {
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub entities: EntityRegistry,
    /// Declared event property slots, by name. The description/notes slots
    /// (and the moon-phase slot, when enabled) must exist before events can
    /// carry those values in the timeline application.
    #[serde(default)]
    pub properties: Vec<String>,
}

impl TimelineModel {
    /// Create an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an event by exact title.
    pub fn find_event(&self, title: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.title == title)
    }

    /// Look up an event by exact title, mutably.
    pub fn find_event_mut(&mut self, title: &str) -> Option<&mut Event> {
        self.events.iter_mut().find(|e| e.title == title)
    }

    /// Returns `true` if the named property slot is declared.
    pub fn has_property(&self, name: &str) -> bool {
        self.properties.iter().any(|p| p == name)
    }

    /// Declare a property slot if absent. Returns `true` when created.
    pub fn ensure_property(&mut self, name: &str) -> bool {
        if self.has_property(name) {
            false
        } else {
            self.properties.push(name.to_string());
            true
        }
    }

    /// Declare the standard description/notes property slots if absent.
    ///
    /// Returns the names created by this call, for reporting.
    pub fn ensure_standard_properties(
        &mut self,
        description_name: &str,
        notes_name: &str,
    ) -> Vec<String> {
        let mut created = Vec::new();
        for name in [description_name, notes_name] {
            if self.ensure_property(name) {
                created.push(name.to_string());
            }
        }
        created
    }

    /// Event titles that occur more than once, trimmed as the matcher sees
    /// them, in first-occurrence order.
    pub fn duplicate_event_titles(&self) -> Vec<String> {
        let mut seen = Vec::new();
        let mut duplicates = Vec::new();
        for event in &self.events {
            let title = event.title.trim().to_string();
            if seen.contains(&title) {
                if !duplicates.contains(&title) {
                    duplicates.push(title);
                }
            } else {
                seen.push(title);
            }
        }
        duplicates
    }
}
