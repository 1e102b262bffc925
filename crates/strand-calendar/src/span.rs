//! Durations in story time, counted in days, hours, and minutes.

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// A duration attached to an event or section.
///
/// Finer granularities are not represented; both models agree on
/// day/hour/minute resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
}

impl Span {
    /// The zero-length span.
    pub const ZERO: Span = Span { days: 0, hours: 0, minutes: 0 };

    /// A span of whole days.
    pub fn days(days: i64) -> Self {
        Self { days, hours: 0, minutes: 0 }
    }

    /// Returns `true` if the span has no extent.
    pub fn is_zero(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0
    }

    /// Canonical form with minutes carried into hours and hours into days.
    pub fn normalized(&self) -> Self {
        let mut minutes = self.minutes;
        let mut hours = self.hours + minutes.div_euclid(60);
        minutes = minutes.rem_euclid(60);
        let days = self.days + hours.div_euclid(24);
        hours = hours.rem_euclid(24);
        Span { days, hours, minutes }
    }

    /// The span as a `chrono::Duration`, if it fits.
    pub fn to_duration(&self) -> Option<Duration> {
        let total = self
            .days
            .checked_mul(24 * 60)?
            .checked_add(self.hours.checked_mul(60)?)?
            .checked_add(self.minutes)?;
        Duration::try_minutes(total)
    }

    /// Build a canonical span from a `chrono::Duration`, dropping sub-minute
    /// precision.
    pub fn from_duration(duration: Duration) -> Self {
        Span { days: 0, hours: 0, minutes: duration.num_minutes() }.normalized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carry_normalization() {
        let span = Span { days: 0, hours: 26, minutes: 185 };
        assert_eq!(span.normalized(), Span { days: 1, hours: 5, minutes: 5 });
    }

    #[test]
    fn zero_span() {
        assert!(Span::ZERO.is_zero());
        assert!(!Span::days(1).is_zero());
    }

    #[test]
    fn duration_roundtrip() {
        let span = Span { days: 2, hours: 3, minutes: 15 };
        let back = Span::from_duration(span.to_duration().unwrap());
        assert_eq!(back, span);
    }

    #[test]
    fn from_duration_drops_seconds() {
        let span = Span::from_duration(Duration::seconds(61));
        assert_eq!(span, Span { days: 0, hours: 0, minutes: 1 });
    }
}
