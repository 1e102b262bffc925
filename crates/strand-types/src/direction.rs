use std::fmt;

use serde::{Deserialize, Serialize};

/// Which model drives a reconciliation pass.
///
/// The source model is read-only for the duration of the pass; only the
/// destination model is mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SyncDirection {
    /// Timeline events drive updates to the narrative project.
    TimelineToNarrative,
    /// Narrative sections drive updates to the timeline.
    NarrativeToTimeline,
}

impl SyncDirection {
    /// The side being read from.
    pub fn source(&self) -> ModelSide {
        match self {
            Self::TimelineToNarrative => ModelSide::Timeline,
            Self::NarrativeToTimeline => ModelSide::Narrative,
        }
    }

    /// The side being mutated.
    pub fn destination(&self) -> ModelSide {
        match self {
            Self::TimelineToNarrative => ModelSide::Narrative,
            Self::NarrativeToTimeline => ModelSide::Timeline,
        }
    }
}

impl fmt::Display for SyncDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TimelineToNarrative => write!(f, "timeline -> narrative"),
            Self::NarrativeToTimeline => write!(f, "narrative -> timeline"),
        }
    }
}

/// Names one of the two reconciled models.
///
/// Used to identify the offending side in errors and report lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelSide {
    Timeline,
    Narrative,
}

impl fmt::Display for ModelSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeline => write!(f, "timeline"),
            Self::Narrative => write!(f, "narrative"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_and_destination_are_opposite() {
        let dir = SyncDirection::TimelineToNarrative;
        assert_eq!(dir.source(), ModelSide::Timeline);
        assert_eq!(dir.destination(), ModelSide::Narrative);

        let dir = SyncDirection::NarrativeToTimeline;
        assert_eq!(dir.source(), ModelSide::Narrative);
        assert_eq!(dir.destination(), ModelSide::Timeline);
    }

    #[test]
    fn display_names_both_sides() {
        assert_eq!(
            SyncDirection::TimelineToNarrative.to_string(),
            "timeline -> narrative"
        );
        assert_eq!(ModelSide::Narrative.to_string(), "narrative");
    }
}
