//! Title-based matching between events and sections.
//!
//! Matching runs as a pre-flight phase: both models are scanned for
//! duplicate identities first, and any duplicate aborts the pass before a
//! single mutation is applied. Event titles are compared with surrounding
//! whitespace trimmed; section titles are taken as-is.

use std::collections::BTreeSet;

use strand_model::{NarrativeModel, TimelineModel};
use strand_types::{EntityKind, ModelSide};

use crate::error::{RecordCategory, SyncError, SyncResult};

/// One (event, section) pair matched by title.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchedPair {
    /// The event title as stored on the timeline (untrimmed).
    pub event_title: String,
    /// The section title, equal to the trimmed event title.
    pub section_title: String,
}

/// Outcome of pairing the two models.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchSet {
    pub pairs: Vec<MatchedPair>,
    /// Events with no section of the same title, in timeline order.
    pub unmatched_events: Vec<String>,
    /// Sections with no event of the same title, in reading order.
    pub unmatched_sections: Vec<String>,
}

/// Pair events with sections by exact title.
///
/// Fails fast on any duplicated identity on either side (events, sections,
/// or entity names per kind); the error names the offending side and title.
pub fn match_records(
    timeline: &TimelineModel,
    narrative: &NarrativeModel,
) -> SyncResult<MatchSet> {
    check_duplicates(timeline, narrative)?;

    let section_titles: BTreeSet<&str> =
        narrative.sections().map(|s| s.title.as_str()).collect();

    let mut matched = MatchSet::default();
    let mut matched_titles = Vec::new();
    for event in &timeline.events {
        let key = event.title.trim();
        if section_titles.contains(key) {
            matched_titles.push(key.to_string());
            matched.pairs.push(MatchedPair {
                event_title: event.title.clone(),
                section_title: key.to_string(),
            });
        } else {
            matched.unmatched_events.push(event.title.clone());
        }
    }

    for section in narrative.sections() {
        if !matched_titles.iter().any(|t| t == &section.title) {
            matched.unmatched_sections.push(section.title.clone());
        }
    }

    Ok(matched)
}

fn check_duplicates(timeline: &TimelineModel, narrative: &NarrativeModel) -> SyncResult<()> {
    if let Some(title) = timeline.duplicate_event_titles().into_iter().next() {
        return Err(SyncError::DuplicateTitle {
            side: ModelSide::Timeline,
            category: RecordCategory::Event,
            title,
        });
    }
    if let Some(title) = narrative.duplicate_section_titles().into_iter().next() {
        return Err(SyncError::DuplicateTitle {
            side: ModelSide::Narrative,
            category: RecordCategory::Section,
            title,
        });
    }
    for (side, registry) in [
        (ModelSide::Timeline, &timeline.entities),
        (ModelSide::Narrative, &narrative.entities),
    ] {
        for kind in EntityKind::ALL {
            if let Some(name) = registry.set(kind).duplicate_names().into_iter().next() {
                return Err(SyncError::DuplicateTitle {
                    side,
                    category: RecordCategory::Entity(kind),
                    title: name,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strand_calendar::{PartialOffset, StoryInstant};
    use strand_model::{Chapter, Event, Section};
    use strand_types::SectionKind;

    fn event(title: &str) -> Event {
        Event::new(title, StoryInstant::Offset(PartialOffset::days(0)))
    }

    fn narrative_with(titles: &[&str]) -> NarrativeModel {
        let mut narrative = NarrativeModel::new();
        let mut chapter = Chapter::new("Act I");
        for title in titles {
            chapter.sections.push(Section::new(*title, SectionKind::Normal));
        }
        narrative.chapters.push(chapter);
        narrative
    }

    #[test]
    fn pairs_by_exact_title() {
        let mut timeline = TimelineModel::new();
        timeline.events.push(event("Arrival"));
        timeline.events.push(event("Storm"));
        let narrative = narrative_with(&["Storm", "Departure"]);

        let matched = match_records(&timeline, &narrative).unwrap();
        assert_eq!(matched.pairs.len(), 1);
        assert_eq!(matched.pairs[0].section_title, "Storm");
        assert_eq!(matched.unmatched_events, vec!["Arrival".to_string()]);
        assert_eq!(matched.unmatched_sections, vec!["Departure".to_string()]);
    }

    #[test]
    fn event_titles_are_trimmed_before_matching() {
        let mut timeline = TimelineModel::new();
        timeline.events.push(event(" Storm "));
        let narrative = narrative_with(&["Storm"]);

        let matched = match_records(&timeline, &narrative).unwrap();
        assert_eq!(matched.pairs.len(), 1);
        assert_eq!(matched.pairs[0].event_title, " Storm ");
        assert_eq!(matched.pairs[0].section_title, "Storm");
    }

    #[test]
    fn duplicate_event_titles_abort() {
        let mut timeline = TimelineModel::new();
        timeline.events.push(event("Storm"));
        timeline.events.push(event("Storm"));
        let narrative = NarrativeModel::new();

        let err = match_records(&timeline, &narrative).unwrap_err();
        match err {
            SyncError::DuplicateTitle { side, category, title } => {
                assert_eq!(side, ModelSide::Timeline);
                assert_eq!(category, RecordCategory::Event);
                assert_eq!(title, "Storm");
            }
            other => panic!("expected DuplicateTitle, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_section_titles_abort() {
        let timeline = TimelineModel::new();
        let narrative = narrative_with(&["One", "One"]);

        let err = match_records(&timeline, &narrative).unwrap_err();
        assert!(matches!(
            err,
            SyncError::DuplicateTitle { side: ModelSide::Narrative, category: RecordCategory::Section, .. }
        ));
    }

    #[test]
    fn duplicate_entity_names_abort() {
        let timeline = TimelineModel::new();
        // get_or_create cannot produce duplicates; seed them the way a
        // broken project file would, through deserialization.
        let registry: strand_model::EntityRegistry = serde_json::from_value(serde_json::json!({
            "arcs": [],
            "characters": [
                {"guid": "00000000-0000-0000-0000-000000000001", "name": "Alice", "notes": ""},
                {"guid": "00000000-0000-0000-0000-000000000002", "name": "Alice", "notes": ""}
            ],
            "locations": [],
            "items": []
        }))
        .unwrap();
        let mut narrative = NarrativeModel::new();
        narrative.entities = registry;

        let err = match_records(&timeline, &narrative).unwrap_err();
        assert!(matches!(
            err,
            SyncError::DuplicateTitle {
                side: ModelSide::Narrative,
                category: RecordCategory::Entity(EntityKind::Character),
                ..
            }
        ));
    }
}
