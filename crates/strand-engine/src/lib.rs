//! Reconciliation engine for Strand.
//!
//! Reconciles two independently edited models of the same story: the
//! timeline (events + entities) and the narrative project (chapters with
//! ordered sections + entities). A pass is single-threaded, synchronous,
//! and batch-oriented: it validates, clones the destination model, applies
//! every decision to the clone, and hands back the result together with a
//! report. Inputs are never mutated, so a fatal error leaves both models
//! exactly as loaded.
//!
//! Repeated passes over unchanged models are no-ops: the second run returns
//! an equal destination model and a report with no entries.
//!
//! # Key Types
//!
//! - [`synchronize`] — Run one pass in a direction
//! - [`SyncOutcome`] — Both models after the pass, plus the report
//! - [`MatchSet`] / [`match_records`] — Title pairing with pre-flight checks
//! - [`SyncReport`] — One line per applied decision
//! - [`SyncError`] — Fatal failures (duplicate identities, store rejections)

pub mod error;
pub mod matcher;
pub mod merge;
pub mod relations;
pub mod report;

pub use error::{RecordCategory, SyncError, SyncResult};
pub use matcher::{match_records, MatchSet, MatchedPair};
pub use merge::{MOON_PHASE_PROPERTY, NEW_SECTIONS_CHAPTER};
pub use relations::sync_relationships;
pub use report::{ReportEntry, SyncAction, SyncReport, SyncWarning};

use strand_config::SyncConfig;
use strand_model::{NarrativeModel, TimelineModel};
use strand_types::SyncDirection;

/// The result of one reconciliation pass.
///
/// Only the destination model differs from the input; the source side is
/// returned unchanged so callers can persist either.
#[derive(Clone, Debug, PartialEq)]
pub struct SyncOutcome {
    pub timeline: TimelineModel,
    pub narrative: NarrativeModel,
    pub report: SyncReport,
}

/// Run one reconciliation pass.
///
/// Pre-flight validation (duplicate identities on either side) aborts with
/// zero mutations. Per-record date problems degrade to report warnings; the
/// rest of the pass continues.
pub fn synchronize(
    timeline: &TimelineModel,
    narrative: &NarrativeModel,
    direction: SyncDirection,
    config: &SyncConfig,
) -> SyncResult<SyncOutcome> {
    tracing::info!(%direction, "reconciliation pass");
    let matches = match_records(timeline, narrative)?;
    tracing::debug!(
        pairs = matches.pairs.len(),
        unmatched_events = matches.unmatched_events.len(),
        unmatched_sections = matches.unmatched_sections.len(),
        "matched by title"
    );

    let mut report = SyncReport::new();
    match direction {
        SyncDirection::TimelineToNarrative => {
            let mut dest = narrative.clone();
            merge::timeline_to_narrative(timeline, &mut dest, &matches, config, &mut report);
            Ok(SyncOutcome { timeline: timeline.clone(), narrative: dest, report })
        }
        SyncDirection::NarrativeToTimeline => {
            let mut dest = timeline.clone();
            merge::narrative_to_timeline(&mut dest, narrative, &matches, config, &mut report);
            Ok(SyncOutcome { timeline: dest, narrative: narrative.clone(), report })
        }
    }
}
