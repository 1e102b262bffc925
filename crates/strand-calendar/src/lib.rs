//! Calendar normalization for Strand.
//!
//! Converts between absolute story dates and partially-specified
//! day/hour/minute offsets relative to a configured reference instant, and
//! classifies dates against the fixed-origin calendar the narrative side can
//! represent. Pure and stateless.
//!
//! # Key Types
//!
//! - [`StoryInstant`] — An absolute date/time or a reference-relative offset
//! - [`PartialOffset`] — Day/hour/minute displacement from the reference
//! - [`Span`] — Event/section duration with carry normalization
//! - [`DateClass`] — Specified / relative / before-epoch classification
//! - [`moonphase`] — Conway's moon-phase approximation for event annotation

pub mod error;
pub mod instant;
pub mod moonphase;
pub mod span;

pub use error::{CalendarError, CalendarResult};
pub use instant::{
    ensure_representable, is_before_epoch, is_specified, to_absolute, to_partial, DateClass,
    PartialOffset, StoryInstant, SPECIFIED_YEAR_MIN,
};
pub use span::Span;
