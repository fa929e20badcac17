//! Gregorian computus.
//!
//! Easter Sunday is computed with the Butcher–Meeus ("anonymous Gregorian")
//! algorithm, which uses integer arithmetic only and is exact for every
//! year of the proleptic Gregorian calendar.

use crate::date::Date;
use lit_core::errors::Result;
use lit_core::{ensure, ensure_post};

/// Date of Easter Sunday in `year`.
///
/// # Errors
/// Returns an error if `year` lies outside `1..=9999`.  The result is
/// checked to fall between March 22 and April 25; a failure there is a
/// defect in this routine, not a runtime condition.
///
/// # Example
/// ```
/// use lit_time::{easter_sunday, Date};
/// assert_eq!(easter_sunday(2024).unwrap(), Date::from_ymd(2024, 3, 31).unwrap());
/// ```
pub fn easter_sunday(year: u16) -> Result<Date> {
    ensure!(
        (Date::MIN_YEAR..=Date::MAX_YEAR).contains(&year),
        "Easter is only computed for years 1 to 9999, got {year}"
    );
    let (month, day) = butcher_meeus(year as i32);
    let easter = Date::from_ymd(year, month, day)?;
    ensure_post!(
        easter.is_between(Date::from_ymd(year, 3, 22)?, Date::from_ymd(year, 4, 25)?),
        "Easter {easter} outside the March 22 - April 25 window"
    );
    Ok(easter)
}

/// `(month, day)` of Easter Sunday.
fn butcher_meeus(y: i32) -> (u8, u8) {
    let a = y % 19;
    let b = y / 100;
    let c = y % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;
    ((n / 31) as u8, (n % 31 + 1) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn reference_years() {
        assert_eq!(easter_sunday(2000).unwrap(), date(2000, 4, 23));
        assert_eq!(easter_sunday(2022).unwrap(), date(2022, 4, 17));
        assert_eq!(easter_sunday(2023).unwrap(), date(2023, 4, 9));
        assert_eq!(easter_sunday(2024).unwrap(), date(2024, 3, 31));
        assert_eq!(easter_sunday(2025).unwrap(), date(2025, 4, 20));
    }

    #[test]
    fn extreme_dates() {
        // Earliest possible Easter
        assert_eq!(easter_sunday(1818).unwrap(), date(1818, 3, 22));
        assert_eq!(easter_sunday(2285).unwrap(), date(2285, 3, 22));
        // Latest possible Easter
        assert_eq!(easter_sunday(1943).unwrap(), date(1943, 4, 25));
        assert_eq!(easter_sunday(2038).unwrap(), date(2038, 4, 25));
    }

    #[test]
    fn unsupported_years() {
        assert!(easter_sunday(0).is_err());
        assert!(easter_sunday(10_000).is_err());
    }
}
