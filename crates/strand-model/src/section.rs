//! Narrative sections and their chapters.

use serde::{Deserialize, Serialize};
use strand_calendar::{Span, StoryInstant};
use strand_types::{SectionKind, SectionStatus};
use uuid::Uuid;

use crate::refs::RoleRefs;

/// One section of the narrative project.
///
/// Identity is the title, unique within a project. A section belongs to
/// exactly one chapter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub guid: Uuid,
    pub title: String,
    #[serde(default)]
    pub kind: SectionKind,
    #[serde(default)]
    pub status: SectionStatus,
    /// Set when the section's matching event was removed; retained but no
    /// longer part of the active narrative. Never cleared by the engine.
    #[serde(default)]
    pub unused: bool,
    /// Start date/time; absent for undated sections.
    #[serde(default)]
    pub start: Option<StoryInstant>,
    #[serde(default)]
    pub duration: Span,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub notes: String,
    /// Ordered, deduplicated tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Entity references by role. The narrative arc is not listed here;
    /// [`SectionKind::Normal`] encodes membership.
    #[serde(default)]
    pub refs: RoleRefs,
}

impl Section {
    /// Create a new undated section with a fresh GUID.
    pub fn new(title: impl Into<String>, kind: SectionKind) -> Self {
        Self {
            guid: Uuid::new_v4(),
            title: title.into(),
            kind,
            status: SectionStatus::Outline,
            unused: false,
            start: None,
            duration: Span::ZERO,
            description: String::new(),
            notes: String::new(),
            tags: Vec::new(),
            refs: RoleRefs::new(),
        }
    }
}

/// An ordered container of sections.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub guid: Uuid,
    pub title: String,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Chapter {
    /// Create a new empty chapter with a fresh GUID.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            guid: Uuid::new_v4(),
            title: title.into(),
            sections: Vec::new(),
        }
    }
}
