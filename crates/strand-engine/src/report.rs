//! The sync report: one line per decision, warnings for degraded records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What a reconciliation decision did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SyncAction {
    CreateChapter,
    CreateSection,
    CreateEvent,
    CreateEntity,
    CreateProperty,
    UpdateSection,
    UpdateEvent,
    UpdateEntity,
    MarkUnused,
    DeleteEvent,
}

impl fmt::Display for SyncAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateChapter => write!(f, "create chapter"),
            Self::CreateSection => write!(f, "create section"),
            Self::CreateEvent => write!(f, "create event"),
            Self::CreateEntity => write!(f, "create entity"),
            Self::CreateProperty => write!(f, "create property"),
            Self::UpdateSection => write!(f, "update section"),
            Self::UpdateEvent => write!(f, "update event"),
            Self::UpdateEntity => write!(f, "update entity"),
            Self::MarkUnused => write!(f, "mark unused"),
            Self::DeleteEvent => write!(f, "delete event"),
        }
    }
}

/// One applied decision.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub action: SyncAction,
    /// The record the decision applied to, by title/name.
    pub subject: String,
    /// Optional qualifier, e.g. the entity kind or the reason.
    pub detail: String,
}

impl fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.detail.is_empty() {
            write!(f, "{} \"{}\"", self.action, self.subject)
        } else {
            write!(f, "{} \"{}\" ({})", self.action, self.subject, self.detail)
        }
    }
}

/// A non-fatal, per-record problem; the record was left unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncWarning {
    pub subject: String,
    pub message: String,
}

impl fmt::Display for SyncWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\": {}", self.subject, self.message)
    }
}

/// Human-readable summary of one reconciliation pass.
///
/// Entries are recorded only for decisions that actually changed the
/// destination model, so a pass over already-reconciled models produces an
/// empty entry list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncReport {
    entries: Vec<ReportEntry>,
    warnings: Vec<SyncWarning>,
}

impl SyncReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a decision.
    pub fn record(&mut self, action: SyncAction, subject: impl Into<String>, detail: impl Into<String>) {
        let entry = ReportEntry {
            action,
            subject: subject.into(),
            detail: detail.into(),
        };
        tracing::info!(action = %entry.action, subject = %entry.subject, detail = %entry.detail, "sync decision");
        self.entries.push(entry);
    }

    /// Record a non-fatal problem.
    pub fn warn(&mut self, subject: impl Into<String>, message: impl Into<String>) {
        let warning = SyncWarning {
            subject: subject.into(),
            message: message.into(),
        };
        tracing::warn!(subject = %warning.subject, message = %warning.message, "sync warning");
        self.warnings.push(warning);
    }

    /// The applied decisions, in order.
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// The accumulated warnings, in order.
    pub fn warnings(&self) -> &[SyncWarning] {
        &self.warnings
    }

    /// Returns `true` if the pass mutated the destination model.
    pub fn has_changes(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Number of decisions matching a predicate.
    pub fn count(&self, action: SyncAction) -> usize {
        self.entries.iter().filter(|e| e.action == action).count()
    }
}

impl fmt::Display for SyncReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            writeln!(f, "nothing to do")?;
        }
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        for warning in &self.warnings {
            writeln!(f, "warning: {warning}")?;
        }
        Ok(())
    }
}
