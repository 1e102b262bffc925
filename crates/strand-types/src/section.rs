use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of a narrative section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionKind {
    /// Part of the authored story; mirrored by a narrative-arc event.
    #[default]
    Normal,
    /// Background material; mirrored by a non-arc event, if at all.
    Notes,
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "Normal"),
            Self::Notes => write!(f, "Notes"),
        }
    }
}

/// Completion status of a narrative section.
///
/// Sections created by the engine start out as [`SectionStatus::Outline`];
/// the status is otherwise owned by the writing application and never
/// changed by a sync pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SectionStatus {
    #[default]
    Outline,
    Draft,
    FirstEdit,
    SecondEdit,
    Done,
}

impl fmt::Display for SectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Outline => write!(f, "Outline"),
            Self::Draft => write!(f, "Draft"),
            Self::FirstEdit => write!(f, "1st Edit"),
            Self::SecondEdit => write!(f, "2nd Edit"),
            Self::Done => write!(f, "Done"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sections_default_to_outline_normal() {
        assert_eq!(SectionKind::default(), SectionKind::Normal);
        assert_eq!(SectionStatus::default(), SectionStatus::Outline);
    }

    #[test]
    fn serde_uses_variant_names() {
        let json = serde_json::to_string(&SectionKind::Notes).unwrap();
        assert_eq!(json, "\"Notes\"");
        let status: SectionStatus = serde_json::from_str("\"FirstEdit\"").unwrap();
        assert_eq!(status, SectionStatus::FirstEdit);
    }
}
