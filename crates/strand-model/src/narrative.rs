//! The narrative project model.

use serde::{Deserialize, Serialize};

use crate::registry::EntityRegistry;
use crate::section::{Chapter, Section};

/// The chapter/section/entity graph owned by the writing application.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeModel {
    /// Chapters in reading order.
    #[serde(default)]
    pub chapters: Vec<Chapter>,
    #[serde(default)]
    pub entities: EntityRegistry,
}

impl NarrativeModel {
    /// Create an empty project.
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate over all sections in reading order (chapter order, then
    /// in-chapter order).
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.chapters.iter().flat_map(|c| c.sections.iter())
    }

    /// Look up a section by exact title.
    pub fn find_section(&self, title: &str) -> Option<&Section> {
        self.sections().find(|s| s.title == title)
    }

    /// Look up a section by exact title, mutably.
    pub fn find_section_mut(&mut self, title: &str) -> Option<&mut Section> {
        self.chapters
            .iter_mut()
            .flat_map(|c| c.sections.iter_mut())
            .find(|s| s.title == title)
    }

    /// Returns `true` if a section with this exact title exists.
    pub fn contains_section(&self, title: &str) -> bool {
        self.find_section(title).is_some()
    }

    /// Section titles that occur more than once, in reading order.
    pub fn duplicate_section_titles(&self) -> Vec<String> {
        let mut seen = Vec::new();
        let mut duplicates = Vec::new();
        for section in self.sections() {
            if seen.contains(&section.title) {
                if !duplicates.contains(&section.title) {
                    duplicates.push(section.title.clone());
                }
            } else {
                seen.push(section.title.clone());
            }
        }
        duplicates
    }
}
