//! # lit-time
//!
//! Proleptic Gregorian date, weekday, month, date-range, and Easter
//! computus types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// `DateRange`: half-open runs of consecutive days.
pub mod date_range;

/// Easter computus.
pub mod easter;

/// `Month`: month of the year.
pub mod month;

/// `TimeUnit`: days and weeks.
pub mod time_unit;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::Date;
pub use date_range::DateRange;
pub use easter::easter_sunday;
pub use month::Month;
pub use time_unit::TimeUnit;
pub use weekday::Weekday;
