//! # lit-calendar
//!
//! Rule engine for the General Roman Calendar.
//!
//! For a civil year and a [`Configuration`] of regional options, the engine
//! derives every movable observance from the date of Easter and a few fixed
//! civil dates, numbers the weeks of each season, and returns the result as
//! a date-sorted [`YearCalendar`].
//!
//! ```
//! use lit_calendar::{generate, CalendarOption, Configuration, Season};
//!
//! let config = Configuration::default().with(CalendarOption::EpiphanyOnSunday, true);
//! let calendar = generate(2024, &config).unwrap();
//!
//! let lent: Vec<_> = calendar.in_season(Season::Lent).collect();
//! assert!(lent.iter().all(|c| (1..=4).contains(&c.psalter_week())));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Year calendar assembly.
pub mod aggregator;

/// Pivot dates derived from Easter, Christmas and Epiphany.
pub mod anchors;

/// `Celebration` and its code, rank and colour.
pub mod celebration;

/// Regional calendar options.
pub mod config;

/// One generator per liturgical block.
pub mod generators;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use aggregator::{generate, generate_from_map, YearCalendar};
pub use anchors::AnchorDates;
pub use celebration::{Celebration, CelebrationCode, LiturgicalColor, Qualifier, Rank, Season};
pub use config::{CalendarOption, Configuration};
pub use generators::Generator;
