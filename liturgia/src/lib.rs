//! # liturgia
//!
//! Date derivation for the General Roman liturgical calendar: the Easter
//! computus, the movable feasts that hang off it, and the week numbering of
//! every season.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the individual
//! `lit-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! liturgia = "0.1"
//! ```
//!
//! ```rust
//! use liturgia::calendar::{generate, Configuration, Qualifier};
//! use liturgia::time::Date;
//!
//! let calendar = generate(2024, &Configuration::default()).unwrap();
//! let pentecost = calendar.with_qualifier(Qualifier::Pentecost).next().unwrap();
//! assert_eq!(pentecost.date(), Date::from_ymd(2024, 5, 19).unwrap());
//! assert_eq!(pentecost.psalter_week(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core aliases and error definitions.
pub use lit_core as core;

/// Dates, weekdays, date ranges and the Easter computus.
pub use lit_time as time;

/// Calendar options, anchor dates, season generators and the aggregator.
pub use lit_calendar as calendar;
