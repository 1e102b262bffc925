//! Timeline events.

use serde::{Deserialize, Serialize};
use strand_calendar::{Span, StoryInstant};
use uuid::Uuid;

use crate::refs::RoleRefs;

/// One event on the timeline.
///
/// Identity is the title, unique within a timeline. Events are created,
/// updated, and removed only through the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub guid: Uuid,
    pub title: String,
    /// Start instant, absolute or reference-relative.
    pub start: StoryInstant,
    /// Duration of the event.
    #[serde(default)]
    pub span: Span,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub notes: String,
    /// Ordered, deduplicated tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Entity references by role.
    #[serde(default)]
    pub refs: RoleRefs,
    /// Display color, by name.
    #[serde(default)]
    pub color: Option<String>,
    /// Computed moon-phase annotation, when enabled.
    #[serde(default)]
    pub moon_phase: Option<String>,
}

impl Event {
    /// Create a new event with a fresh GUID and otherwise empty attributes.
    pub fn new(title: impl Into<String>, start: StoryInstant) -> Self {
        Self {
            guid: Uuid::new_v4(),
            title: title.into(),
            start,
            span: Span::ZERO,
            description: String::new(),
            notes: String::new(),
            tags: Vec::new(),
            refs: RoleRefs::new(),
            color: None,
            moon_phase: None,
        }
    }

    /// Returns `true` if the event belongs to the named arc.
    pub fn is_in_arc(&self, arc_name: &str) -> bool {
        self.refs.arcs.contains(arc_name)
    }
}
