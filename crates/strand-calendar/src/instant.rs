//! Story instants: absolute dates and reference-relative offsets.
//!
//! Both models talk about points in story time, but not always with a full
//! date. An instant is either absolute (a calendar date/time) or an offset
//! (day/hour/minute displacement from a configured reference instant). An
//! absolute instant only counts as *specified* from year 100 on; the band
//! below that is reserved for the relative calendar, and anything before
//! year 1 cannot be represented on the narrative side at all.

use chrono::{Datelike, Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, CalendarResult};

/// First year at which an absolute date counts as specified.
pub const SPECIFIED_YEAR_MIN: i32 = 100;

const MINUTES_PER_HOUR: i64 = 60;
const MINUTES_PER_DAY: i64 = 24 * 60;

/// A point in story time, fully or partially specified.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoryInstant {
    /// A calendar date and time.
    Absolute(NaiveDateTime),
    /// A displacement from the configured reference instant.
    Offset(PartialOffset),
}

impl StoryInstant {
    /// Returns `true` for an absolute instant at or past [`SPECIFIED_YEAR_MIN`].
    pub fn is_specified(&self) -> bool {
        match self {
            Self::Absolute(dt) => is_specified(dt),
            Self::Offset(_) => false,
        }
    }

    /// Returns `true` for an absolute instant before the representable epoch.
    pub fn is_before_epoch(&self) -> bool {
        match self {
            Self::Absolute(dt) => is_before_epoch(dt),
            Self::Offset(_) => false,
        }
    }

    /// The effective absolute date of this instant, resolving offsets
    /// against `reference`. Used for chronological ordering.
    pub fn resolve(&self, reference: NaiveDateTime) -> NaiveDateTime {
        match self {
            Self::Absolute(dt) => *dt,
            Self::Offset(offset) => to_absolute(*offset, reference),
        }
    }
}

/// Classification of an absolute date against the narrative calendar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateClass {
    /// Year >= [`SPECIFIED_YEAR_MIN`]; merged as-is.
    Specified,
    /// Year in `1..SPECIFIED_YEAR_MIN`; interpreted as relative story time.
    Relative,
    /// Year < 1; excluded from synchronization.
    BeforeEpoch,
}

impl DateClass {
    /// Classify an absolute date.
    pub fn of(dt: &NaiveDateTime) -> Self {
        if dt.year() < 1 {
            Self::BeforeEpoch
        } else if dt.year() < SPECIFIED_YEAR_MIN {
            Self::Relative
        } else {
            Self::Specified
        }
    }
}

/// Returns `true` if `dt` counts as a specified date.
pub fn is_specified(dt: &NaiveDateTime) -> bool {
    dt.year() >= SPECIFIED_YEAR_MIN
}

/// Returns `true` if `dt` lies strictly before the representable epoch.
pub fn is_before_epoch(dt: &NaiveDateTime) -> bool {
    dt.year() < 1
}

/// Ensure `dt` is representable on the narrative side.
pub fn ensure_representable(dt: &NaiveDateTime) -> CalendarResult<()> {
    if is_before_epoch(dt) {
        Err(CalendarError::UnrepresentableDate(*dt))
    } else {
        Ok(())
    }
}

/// A day/hour/minute displacement from the reference instant.
///
/// `days` may be negative (before the reference); `hours` and `minutes` are
/// kept in canonical range by [`PartialOffset::normalized`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialOffset {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
}

impl PartialOffset {
    /// An offset of whole days.
    pub fn days(days: i64) -> Self {
        Self { days, hours: 0, minutes: 0 }
    }

    /// Total displacement in minutes, if it fits in an `i64`.
    fn total_minutes(&self) -> Option<i64> {
        self.days
            .checked_mul(MINUTES_PER_DAY)?
            .checked_add(self.hours.checked_mul(MINUTES_PER_HOUR)?)?
            .checked_add(self.minutes)
    }

    /// Canonical form: minutes and hours carried up, both in `0..60` and
    /// `0..24`, with `days` absorbing the sign.
    pub fn normalized(&self) -> Self {
        match self.total_minutes() {
            Some(total) => Self {
                days: total.div_euclid(MINUTES_PER_DAY),
                hours: total.rem_euclid(MINUTES_PER_DAY) / MINUTES_PER_HOUR,
                minutes: total.rem_euclid(MINUTES_PER_DAY) % MINUTES_PER_HOUR,
            },
            None => *self,
        }
    }

    fn is_negative(&self) -> bool {
        self.total_minutes().map(|m| m < 0).unwrap_or(self.days < 0)
    }
}

/// Convert a partial offset to an absolute instant.
///
/// Offsets beyond the representable date range saturate at the range bounds
/// instead of erroring; the conversion is lossy by contract.
pub fn to_absolute(offset: PartialOffset, reference: NaiveDateTime) -> NaiveDateTime {
    let saturated = if offset.is_negative() {
        NaiveDateTime::MIN
    } else {
        NaiveDateTime::MAX
    };
    let Some(total) = offset.total_minutes() else {
        return saturated;
    };
    let Some(delta) = Duration::try_minutes(total) else {
        return saturated;
    };
    reference.checked_add_signed(delta).unwrap_or(saturated)
}

/// Convert an absolute instant to a partial offset against `reference`.
///
/// The result is canonical: sub-minute precision is dropped, `hours` and
/// `minutes` are non-negative, and `days` carries the sign.
pub fn to_partial(absolute: NaiveDateTime, reference: NaiveDateTime) -> PartialOffset {
    let total = absolute.signed_duration_since(reference).num_minutes();
    PartialOffset {
        days: total.div_euclid(MINUTES_PER_DAY),
        hours: total.rem_euclid(MINUTES_PER_DAY) / MINUTES_PER_HOUR,
        minutes: total.rem_euclid(MINUTES_PER_DAY) % MINUTES_PER_HOUR,
    }
}
