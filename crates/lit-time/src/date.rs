//! `Date` type.
//!
//! A date is its rata die: the count of days on the proleptic Gregorian
//! calendar with 0001-01-01 as day 1.  Supported dates run from
//! 0001-01-01 ([`Date::MIN`]) to 9999-12-31 ([`Date::MAX`]).

use std::str::FromStr;

use crate::date_range::DateRange;
use crate::month::Month;
use crate::time_unit::TimeUnit;
use crate::weekday::Weekday;
use lit_core::errors::{Error, Result};

/// A proleptic Gregorian calendar date.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

impl Date {
    /// 0001-01-01.
    pub const MIN: Date = Date(1);

    /// 9999-12-31.
    pub const MAX: Date = Date(3_652_059);

    /// First supported year.
    pub const MIN_YEAR: u16 = 1;

    /// Last supported year.
    pub const MAX_YEAR: u16 = 9999;

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Date with rata die `serial`.
    ///
    /// # Errors
    /// [`Error::Date`] unless `serial` lies in `1..=3_652_059`.
    pub fn from_serial(serial: i32) -> Result<Self> {
        if (Self::MIN.0..=Self::MAX.0).contains(&serial) {
            Ok(Date(serial))
        } else {
            Err(Error::Date(format!(
                "serial {serial} outside [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )))
        }
    }

    /// Date from a civil year, month (1–12) and day of the month.
    ///
    /// # Errors
    /// [`Error::Date`] for a year outside `1..=9999` or a day that does not
    /// exist in the given month.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} outside [{}, {}]",
                Self::MIN_YEAR,
                Self::MAX_YEAR
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("no month {month}")));
        }
        let last = days_in_month(year, month);
        if !(1..=last).contains(&day) {
            return Err(Error::Date(format!(
                "{year:04}-{month:02} has no day {day} (last is {last})"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Caller guarantees `serial` is in range.
    pub(crate) fn from_serial_unchecked(serial: i32) -> Self {
        debug_assert!(
            (Self::MIN.0..=Self::MAX.0).contains(&serial),
            "serial {serial} out of range"
        );
        Date(serial)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Rata die of this date.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Civil year.
    pub fn year(&self) -> u16 {
        self.ymd().0
    }

    /// Month of the year.
    pub fn month(&self) -> Month {
        Month::from_number(self.ymd().1).expect("civil month is 1-12")
    }

    /// Day of the month, 1–31.
    pub fn day_of_month(&self) -> u8 {
        self.ymd().2
    }

    /// `(year, month, day)`.
    pub fn ymd(&self) -> (u16, u8, u8) {
        ymd_from_serial(self.0)
    }

    /// Day of the week.  Day 1 (0001-01-01) is a Monday.
    pub fn weekday(&self) -> Weekday {
        Weekday::from_ordinal(((self.0 - 1).rem_euclid(7) + 1) as u8)
            .expect("rem_euclid(7) + 1 is a weekday ordinal")
    }

    /// `true` on Sundays.
    pub fn is_sunday(&self) -> bool {
        self.weekday() == Weekday::Sunday
    }

    /// `true` if `lo <= self <= hi`.
    pub fn is_between(&self, lo: Date, hi: Date) -> bool {
        (lo..=hi).contains(self)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// The date `n` days later (earlier for negative `n`).
    ///
    /// # Errors
    /// [`Error::Date`] if the result leaves the supported range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        self.0
            .checked_add(n)
            .ok_or_else(|| Error::Date(format!("{self} + {n} days overflows")))
            .and_then(Date::from_serial)
    }

    /// The date `n` units later (earlier for negative `n`).
    ///
    /// # Errors
    /// [`Error::Date`] if the result leaves the supported range.
    pub fn advance(self, n: i32, unit: TimeUnit) -> Result<Self> {
        let days = n
            .checked_mul(unit.days())
            .ok_or_else(|| Error::Date(format!("{n} {unit:?} overflows")))?;
        self.add_days(days)
    }

    /// Signed number of days from `self` to `other`; positive when `other`
    /// is later.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// The first `weekday` strictly after this date.
    pub fn next_weekday(self, weekday: Weekday) -> Self {
        self + match self.weekday().days_until(weekday) {
            0 => 7,
            n => n,
        }
    }

    /// This date if it already falls on `weekday`, otherwise the next one.
    pub fn next_or_same_weekday(self, weekday: Weekday) -> Self {
        self + self.weekday().days_until(weekday)
    }

    /// The last `weekday` strictly before this date.
    pub fn previous_weekday(self, weekday: Weekday) -> Self {
        self - match weekday.days_until(self.weekday()) {
            0 => 7,
            n => n,
        }
    }

    /// Every day in `[self, end)`.
    pub fn until(self, end: Date) -> DateRange {
        DateRange::new(self, end)
    }

    /// Every day in `[self, last]`.
    pub fn through(self, last: Date) -> DateRange {
        DateRange::inclusive(self, last)
    }
}

// ── Operators ─────────────────────────────────────────────────────────────────

/// Panics outside the supported range; use [`Date::add_days`] to recover.
impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, days: i32) -> Self {
        self.add_days(days).expect("date out of range")
    }
}

/// Panics outside the supported range.
impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, days: i32) -> Self {
        self.add_days(-days).expect("date out of range")
    }
}

/// Signed number of days from `rhs` to `self`.
impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        rhs.days_between(self)
    }
}

// ── Formatting and parsing ────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

/// Parses ISO `YYYY-MM-DD`.
impl FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let malformed = || Error::Date(format!("expected YYYY-MM-DD, got {s:?}"));
        let mut fields = s.trim().splitn(3, '-');
        let (Some(y), Some(m), Some(d)) = (fields.next(), fields.next(), fields.next()) else {
            return Err(malformed());
        };
        Date::from_ymd(
            y.parse().map_err(|_| malformed())?,
            m.parse().map_err(|_| malformed())?,
            d.parse().map_err(|_| malformed())?,
        )
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ── Calendar arithmetic ───────────────────────────────────────────────────────

/// Gregorian leap-year rule.
pub fn is_leap_year(year: u16) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Length of `month` in `year`.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Days in one 400-year Gregorian cycle.
const DAYS_PER_ERA: i32 = 146_097;

/// Shift between the March-based era count and rata die.
const RATA_DIE_SHIFT: i32 = 305;

// Both conversions count years from March so that the leap day is the last
// day of the counted year.

fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let (month, day) = (i32::from(month), i32::from(day));
    let y = i32::from(year) - i32::from(month <= 2);
    let era = y.div_euclid(400);
    let year_of_era = y - era * 400;
    let day_of_year = (153 * ((month + 9) % 12) + 2) / 5 + day - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * DAYS_PER_ERA + day_of_era - RATA_DIE_SHIFT
}

fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    let z = serial + RATA_DIE_SHIFT;
    let era = z.div_euclid(DAYS_PER_ERA);
    let doe = z - era * DAYS_PER_ERA;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = era * 400 + yoe + i32::from(month <= 2);
    (year as u16, month as u8, day as u8)
}
