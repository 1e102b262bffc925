//! The field-merge passes, one per direction.
//!
//! Both passes share the same field policy: a specified date overwrites, an
//! empty source value never erases a populated destination value, notes
//! concatenate, and relationships are recomputed by name through the
//! destination registry. Orphans diverge by direction: events removed from
//! the timeline mark their section unused, sections removed from the
//! narrative delete their narrative-arc event.

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDateTime};
use strand_calendar::{self as calendar, moonphase, StoryInstant};
use strand_config::SyncConfig;
use strand_model::{Chapter, Event, NarrativeModel, Section, TimelineModel};
use strand_types::SectionKind;

use crate::matcher::MatchSet;
use crate::relations::sync_relationships;
use crate::report::{SyncAction, SyncReport};

/// Title of the chapter collecting sections created from orphaned events.
pub const NEW_SECTIONS_CHAPTER: &str = "New sections";

/// Name of the moon-phase property slot on the timeline side.
pub const MOON_PHASE_PROPERTY: &str = "Moon phase";

/// Apply a timeline -> narrative pass to `narrative`.
pub fn timeline_to_narrative(
    timeline: &TimelineModel,
    narrative: &mut NarrativeModel,
    matches: &MatchSet,
    config: &SyncConfig,
    report: &mut SyncReport,
) {
    let reference = config.default_date_time;
    let NarrativeModel { chapters, entities } = narrative;

    for pair in &matches.pairs {
        let Some(event) = timeline.find_event(&pair.event_title) else {
            continue;
        };
        let Some(section) = find_section_mut(chapters, &pair.section_title) else {
            continue;
        };
        let mut changed = false;

        if event.start.is_before_epoch() {
            report.warn(
                &pair.section_title,
                "event date predates the representable epoch; date left unchanged",
            );
        } else if let StoryInstant::Absolute(event_dt) = event.start {
            if calendar::is_specified(&event_dt) {
                // A section holding an offset-form date keeps that form.
                let new_start = match section.start {
                    Some(StoryInstant::Offset(_)) => {
                        StoryInstant::Offset(calendar::to_partial(event_dt, reference))
                    }
                    _ => StoryInstant::Absolute(event_dt),
                };
                changed |= set_if_changed(&mut section.start, Some(new_start));
                changed |= set_if_changed(&mut section.duration, event.span.normalized());
            }
        }

        let in_narrative = event.is_in_arc(&config.narrative_arc_name);
        if !section.unused {
            let kind = if in_narrative { SectionKind::Normal } else { SectionKind::Notes };
            changed |= set_if_changed(&mut section.kind, kind);
        }

        changed |= overwrite_nonempty(&mut section.description, &event.description);
        changed |= overwrite_tags(&mut section.tags, &event.tags);
        changed |= append_notes(&mut section.notes, &event.notes);
        changed |= sync_relationships(
            &event.refs,
            &mut section.refs,
            entities,
            section_arc_names(event, config),
            report,
        );

        if changed {
            report.record(SyncAction::UpdateSection, &pair.section_title, "");
        }
    }

    // Orphaned events become sections in one fresh chapter, sorted by
    // effective date.
    let mut new_sections = Vec::new();
    for title in &matches.unmatched_events {
        let Some(event) = timeline.find_event(title) else {
            continue;
        };
        if event.start.is_before_epoch() {
            report.warn(
                title.trim(),
                "event date predates the representable epoch; not synchronized",
            );
            continue;
        }
        let in_narrative = event.is_in_arc(&config.narrative_arc_name);
        if !in_narrative && config.create_notes_records_only {
            continue;
        }

        let kind = if in_narrative { SectionKind::Normal } else { SectionKind::Notes };
        let mut section = Section::new(event.title.trim(), kind);
        section.start = match event.start {
            StoryInstant::Absolute(dt) if calendar::is_specified(&dt) => {
                Some(StoryInstant::Absolute(dt))
            }
            StoryInstant::Offset(offset) => Some(StoryInstant::Offset(offset.normalized())),
            // A relative-calendar date the narrative model cannot express.
            StoryInstant::Absolute(_) => None,
        };
        section.duration = event.span.normalized();
        section.description = event.description.clone();
        section.tags = event.tags.clone();
        append_notes(&mut section.notes, &event.notes);
        sync_relationships(
            &event.refs,
            &mut section.refs,
            entities,
            section_arc_names(event, config),
            report,
        );

        report.record(SyncAction::CreateSection, &section.title, kind.to_string());
        new_sections.push(section);
    }
    if !new_sections.is_empty() {
        new_sections.sort_by_key(|s| effective_date(s.start, reference));
        let mut chapter = Chapter::new(NEW_SECTIONS_CHAPTER);
        chapter.sections = new_sections;
        report.record(SyncAction::CreateChapter, NEW_SECTIONS_CHAPTER, "");
        chapters.push(chapter);
    }

    // Character notes travel with the timeline entities.
    for character in timeline.entities.characters.iter() {
        if character.notes.is_empty() {
            continue;
        }
        if let Some(dest) = entities.characters.find_by_name_mut(&character.name) {
            if dest.notes != character.notes {
                dest.notes = character.notes.clone();
                report.record(SyncAction::UpdateEntity, &character.name, "notes");
            }
        }
    }

    // Orphaned sections are retained but marked; never deleted, never
    // un-marked.
    for title in &matches.unmatched_sections {
        let Some(section) = find_section_mut(chapters, title) else {
            continue;
        };
        if section.kind == SectionKind::Normal && !section.unused {
            section.unused = true;
            report.record(SyncAction::MarkUnused, title, "event removed");
        }
    }
}

/// Apply a narrative -> timeline pass to `timeline`.
pub fn narrative_to_timeline(
    timeline: &mut TimelineModel,
    narrative: &NarrativeModel,
    matches: &MatchSet,
    config: &SyncConfig,
    report: &mut SyncReport,
) {
    let reference = config.default_date_time;

    for name in timeline
        .ensure_standard_properties(&config.description_property_name, &config.notes_property_name)
    {
        report.record(SyncAction::CreateProperty, name, "");
    }
    if config.sync_moon_phase && timeline.ensure_property(MOON_PHASE_PROPERTY) {
        report.record(SyncAction::CreateProperty, MOON_PHASE_PROPERTY, "");
    }
    let (_, created) = timeline.entities.ensure_narrative_arc(&config.narrative_arc_name);
    if created {
        report.record(SyncAction::CreateEntity, &config.narrative_arc_name, "arc");
    }

    let TimelineModel { events, entities, .. } = timeline;

    // Undated new events are strung after the latest narrative instant so
    // they keep the sections' reading order.
    let mut cursor = events
        .iter()
        .filter(|e| e.is_in_arc(&config.narrative_arc_name))
        .filter_map(|e| match e.start {
            StoryInstant::Absolute(dt) if calendar::is_specified(&dt) => Some(dt),
            _ => None,
        })
        .max()
        .unwrap_or(reference);

    for pair in &matches.pairs {
        let Some(section) = narrative.find_section(&pair.section_title) else {
            continue;
        };
        let Some(event) = find_event_mut(events, &pair.event_title) else {
            continue;
        };

        if section.unused {
            // The section dropped out of the narrative; detach the event.
            if event.refs.arcs.remove(&config.narrative_arc_name) {
                report.record(
                    SyncAction::UpdateEvent,
                    &pair.section_title,
                    "removed from narrative arc",
                );
            }
            continue;
        }
        if config.create_notes_records_only && section.kind == SectionKind::Notes {
            if event.refs.arcs.remove(&config.narrative_arc_name) {
                report.record(
                    SyncAction::UpdateEvent,
                    &pair.section_title,
                    "removed from narrative arc",
                );
            }
            continue;
        }

        let mut changed = false;

        if event.start.is_before_epoch() {
            report.warn(
                &pair.section_title,
                "event date predates the representable epoch; date left unchanged",
            );
        } else if event_accepts_new_date(event) {
            match section.start {
                Some(StoryInstant::Absolute(dt)) if calendar::is_before_epoch(&dt) => {
                    report.warn(
                        &pair.section_title,
                        "section date predates the representable epoch; date left unchanged",
                    );
                }
                _ => {
                    if let Some(new_dt) = resolved_section_start(section, reference) {
                        changed |= set_if_changed(&mut event.start, StoryInstant::Absolute(new_dt));
                        changed |= set_if_changed(&mut event.span, section.duration.normalized());
                    }
                }
            }
        }

        changed |= overwrite_nonempty(&mut event.description, &section.description);
        changed |= overwrite_tags(&mut event.tags, &section.tags);
        changed |= append_notes(&mut event.notes, &section.notes);
        changed |= sync_relationships(
            &section.refs,
            &mut event.refs,
            entities,
            event_arc_names(section, config),
            report,
        );
        changed |= refresh_moon_phase(event, config);

        if changed {
            report.record(SyncAction::UpdateEvent, &pair.section_title, "");
        }
    }

    // Orphaned sections become events, in reading order.
    for title in &matches.unmatched_sections {
        let Some(section) = narrative.find_section(title) else {
            continue;
        };
        if section.unused {
            continue;
        }
        if section.kind == SectionKind::Notes && config.create_notes_records_only {
            continue;
        }

        let start = match resolved_section_start(section, reference) {
            Some(dt) => StoryInstant::Absolute(dt),
            None => {
                cursor += Duration::seconds(1);
                StoryInstant::Absolute(cursor)
            }
        };
        let mut event = Event::new(title.clone(), start);
        event.span = section.duration.normalized();
        event.description = section.description.clone();
        event.notes = section.notes.clone();
        event.tags = section.tags.clone();
        event.color = Some(match section.kind {
            SectionKind::Normal => config.section_event_color.clone(),
            SectionKind::Notes => config.other_event_color.clone(),
        });
        sync_relationships(
            &section.refs,
            &mut event.refs,
            entities,
            event_arc_names(section, config),
            report,
        );
        refresh_moon_phase(&mut event, config);

        report.record(SyncAction::CreateEvent, title, section.kind.to_string());
        events.push(event);
    }

    // Orphaned narrative-arc events mirror deleted sections; this is the
    // one place the engine deletes.
    for title in &matches.unmatched_events {
        let Some(pos) = events.iter().position(|e| &e.title == title) else {
            continue;
        };
        if !events[pos].is_in_arc(&config.narrative_arc_name) {
            continue;
        }
        if events[pos].start.is_before_epoch() {
            report.warn(
                title.trim(),
                "event date predates the representable epoch; not removed",
            );
            continue;
        }
        events.remove(pos);
        report.record(SyncAction::DeleteEvent, title.trim(), "section deleted");
    }
}

fn find_section_mut<'a>(chapters: &'a mut [Chapter], title: &str) -> Option<&'a mut Section> {
    chapters
        .iter_mut()
        .flat_map(|c| c.sections.iter_mut())
        .find(|s| s.title == title)
}

fn find_event_mut<'a>(events: &'a mut [Event], title: &str) -> Option<&'a mut Event> {
    events.iter_mut().find(|e| e.title == title)
}

/// Arc names for a section mirrored from `event`: everything except the
/// narrative arc, which [`SectionKind::Normal`] encodes instead.
fn section_arc_names(event: &Event, config: &SyncConfig) -> BTreeSet<String> {
    event
        .refs
        .arcs
        .iter()
        .filter(|name| *name != &config.narrative_arc_name)
        .cloned()
        .collect()
}

/// Arc names for an event mirrored from `section`: the section's own arcs,
/// plus the narrative arc for Normal sections.
fn event_arc_names(section: &Section, config: &SyncConfig) -> BTreeSet<String> {
    let mut arcs = section.refs.arcs.clone();
    if section.kind == SectionKind::Normal {
        arcs.insert(config.narrative_arc_name.clone());
    }
    arcs
}

/// The section's start as an absolute instant, when it can drive the event
/// date: a specified absolute date as-is, an offset resolved against the
/// reference. Undated, relative-band, and before-epoch starts yield `None`.
fn resolved_section_start(section: &Section, reference: NaiveDateTime) -> Option<NaiveDateTime> {
    match section.start {
        Some(StoryInstant::Absolute(dt)) if calendar::is_specified(&dt) => Some(dt),
        Some(StoryInstant::Offset(offset)) => Some(calendar::to_absolute(offset, reference)),
        _ => None,
    }
}

/// Events already living on the relative calendar are never re-dated.
fn event_accepts_new_date(event: &Event) -> bool {
    matches!(event.start, StoryInstant::Absolute(dt) if calendar::is_specified(&dt))
}

fn effective_date(start: Option<StoryInstant>, reference: NaiveDateTime) -> NaiveDateTime {
    start.map(|s| s.resolve(reference)).unwrap_or(reference)
}

fn refresh_moon_phase(event: &mut Event, config: &SyncConfig) -> bool {
    if !config.sync_moon_phase {
        return false;
    }
    let phase = match event.start {
        StoryInstant::Absolute(dt) if calendar::is_specified(&dt) => {
            Some(moonphase::phase_display(dt.date()))
        }
        _ => None,
    };
    set_if_changed(&mut event.moon_phase, phase)
}

fn set_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}

/// Overwrite `dest` only when the source is non-empty; an empty source
/// never erases populated destination data.
fn overwrite_nonempty(dest: &mut String, source: &str) -> bool {
    if source.is_empty() || dest == source {
        false
    } else {
        *dest = source.to_string();
        true
    }
}

fn overwrite_tags(dest: &mut Vec<String>, source: &[String]) -> bool {
    if source.is_empty() || dest == source {
        false
    } else {
        *dest = source.to_vec();
        true
    }
}

/// Concatenate non-empty source notes onto the destination. Already-present
/// text is not appended again, so repeated passes stay idempotent.
fn append_notes(dest: &mut String, source: &str) -> bool {
    if source.is_empty() || dest.contains(source) {
        return false;
    }
    if dest.is_empty() {
        *dest = source.to_string();
    } else {
        dest.push('\n');
        dest.push_str(source);
    }
    true
}
