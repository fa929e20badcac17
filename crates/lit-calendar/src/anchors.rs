//! Pivot dates of the liturgical year.
//!
//! Every season generator works from the same handful of anchors: Easter,
//! the dates derived from it by fixed offsets, and a few dates derived from
//! Christmas and Epiphany.  [`AnchorDates::compute`] evaluates them once per
//! `(year, configuration)`; the free functions below are the individual
//! rules.

use lit_core::errors::Result;
use lit_core::Year;
use lit_time::{easter_sunday, Date, Month, TimeUnit, Weekday};
use tracing::debug;

use crate::config::Configuration;

/// Every pivot date for one year and configuration.
///
/// The struct is `Copy` and holds no references, so generators can capture
/// it by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorDates {
    /// Civil year.
    pub year: Year,
    /// Configuration the movable dates were derived with.
    pub config: Configuration,
    /// Easter Sunday.
    pub easter: Date,
    /// Ash Wednesday (Easter − 46).
    pub ash_wednesday: Date,
    /// First Sunday of Lent (Ash Wednesday + 4).
    pub first_sunday_of_lent: Date,
    /// Fifth Sunday of Lent (first Sunday + 4 weeks).
    pub fifth_sunday_of_lent: Date,
    /// Palm Sunday (Easter − 7).
    pub palm_sunday: Date,
    /// Holy Thursday (Easter − 3).
    pub holy_thursday: Date,
    /// Ascension (Easter + 39, or + 42 when transferred).
    pub ascension: Date,
    /// Pentecost (Easter + 49).
    pub pentecost: Date,
    /// Trinity Sunday (Easter + 8 weeks).
    pub trinity_sunday: Date,
    /// Corpus Christi (Easter + 60, or + 63 when transferred).
    pub corpus_christi: Date,
    /// Christ the King (first Sunday of Advent − 1 week).
    pub christ_the_king: Date,
    /// First Sunday of Advent.
    pub first_sunday_of_advent: Date,
    /// Christmas (December 25).
    pub christmas: Date,
    /// Holy Family.
    pub holy_family: Date,
    /// Epiphany.
    pub epiphany: Date,
    /// Baptism of the Lord.
    pub baptism_of_the_lord: Date,
}

impl AnchorDates {
    /// Compute every anchor for `year` under `config`.
    ///
    /// # Errors
    /// Returns an error only for years outside `1..=9999`.
    pub fn compute(year: Year, config: &Configuration) -> Result<Self> {
        let easter = easter_sunday(year)?;
        let first_sunday_of_advent = first_sunday_of_advent(year)?;
        let christmas = Date::from_ymd(year, 12, 25)?;
        let epiphany = epiphany(year, config)?;

        let anchors = Self {
            year,
            config: *config,
            easter,
            ash_wednesday: ash_wednesday(easter)?,
            first_sunday_of_lent: first_sunday_of_lent(easter)?,
            fifth_sunday_of_lent: fifth_sunday_of_lent(easter)?,
            palm_sunday: palm_sunday(easter)?,
            holy_thursday: holy_thursday(easter)?,
            ascension: ascension(easter, config)?,
            pentecost: pentecost(easter)?,
            trinity_sunday: trinity_sunday(easter)?,
            corpus_christi: corpus_christi(easter, config)?,
            christ_the_king: christ_the_king(first_sunday_of_advent)?,
            first_sunday_of_advent,
            christmas,
            holy_family: holy_family(christmas)?,
            epiphany,
            baptism_of_the_lord: baptism_of_the_lord(year, config)?,
        };
        debug!(
            year,
            easter = %anchors.easter,
            ash_wednesday = %anchors.ash_wednesday,
            first_sunday_of_advent = %anchors.first_sunday_of_advent,
            epiphany = %anchors.epiphany,
            baptism = %anchors.baptism_of_the_lord,
            "computed anchor dates"
        );
        Ok(anchors)
    }

    /// The fixed civil date `month`/`day` of this year.
    ///
    /// # Panics
    /// On a day that does not exist in this year.  Callers pass literal
    /// dates, and the year was validated by [`AnchorDates::compute`].
    pub fn fixed(&self, month: Month, day: u8) -> Date {
        Date::from_ymd(self.year, month.number(), day).expect("fixed feast on a valid calendar day")
    }

    /// Day after Pentecost: first day of the second block of Ordinary Time.
    pub fn day_after_pentecost(&self) -> Date {
        self.pentecost + 1
    }

    /// Easter-season week a date falls in: Easter week is 1, the week
    /// beginning with the second Sunday of Easter is 2, and so on.
    pub fn easter_week(&self, date: Date) -> u8 {
        (self.easter.days_between(date).div_euclid(TimeUnit::Weeks.days()) + 1) as u8
    }
}

// ── Easter-based rules ────────────────────────────────────────────────────────

/// Holy Thursday: Easter − 3 days.
pub fn holy_thursday(easter: Date) -> Result<Date> {
    easter.advance(-3, TimeUnit::Days)
}

/// Ash Wednesday: Easter − 46 days.
pub fn ash_wednesday(easter: Date) -> Result<Date> {
    easter.advance(-46, TimeUnit::Days)
}

/// First Sunday of Lent: Ash Wednesday + 4 days.
pub fn first_sunday_of_lent(easter: Date) -> Result<Date> {
    ash_wednesday(easter)?.advance(4, TimeUnit::Days)
}

/// Fifth Sunday of Lent: first Sunday of Lent + 4 weeks.
pub fn fifth_sunday_of_lent(easter: Date) -> Result<Date> {
    first_sunday_of_lent(easter)?.advance(4, TimeUnit::Weeks)
}

/// Palm Sunday: Easter − 1 week.
pub fn palm_sunday(easter: Date) -> Result<Date> {
    easter.advance(-1, TimeUnit::Weeks)
}

/// Pentecost: Easter + 7 weeks.
pub fn pentecost(easter: Date) -> Result<Date> {
    easter.advance(7, TimeUnit::Weeks)
}

/// Trinity Sunday: Easter + 8 weeks.
pub fn trinity_sunday(easter: Date) -> Result<Date> {
    easter.advance(8, TimeUnit::Weeks)
}

/// Ascension: Thursday Easter + 39 when `AscensionOriginal`, otherwise
/// transferred to the following Sunday, Easter + 42.
pub fn ascension(easter: Date, config: &Configuration) -> Result<Date> {
    let days = if config.ascension_original() { 39 } else { 42 };
    easter.advance(days, TimeUnit::Days)
}

/// Corpus Christi: Thursday Easter + 60 when `CorpusOriginal`, otherwise
/// transferred to the following Sunday, Easter + 63.
pub fn corpus_christi(easter: Date, config: &Configuration) -> Result<Date> {
    let days = if config.corpus_original() { 60 } else { 63 };
    easter.advance(days, TimeUnit::Days)
}

// ── Christmas-based rules ─────────────────────────────────────────────────────

/// First Sunday of Advent, looked up from the weekday of Christmas.
pub fn first_sunday_of_advent(year: Year) -> Result<Date> {
    let christmas = Date::from_ymd(year, 12, 25)?;
    let (month, day) = match christmas.weekday() {
        Weekday::Sunday => (11, 27),
        Weekday::Monday => (12, 3),
        Weekday::Tuesday => (12, 2),
        Weekday::Wednesday => (12, 1),
        Weekday::Thursday => (11, 30),
        Weekday::Friday => (11, 29),
        Weekday::Saturday => (11, 28),
    };
    Date::from_ymd(year, month, day)
}

/// Christ the King: the Sunday before the first Sunday of Advent.
pub fn christ_the_king(first_sunday_of_advent: Date) -> Result<Date> {
    first_sunday_of_advent.advance(-1, TimeUnit::Weeks)
}

/// Holy Family: December 30 when Christmas is a Sunday, otherwise the
/// Sunday after Christmas.
pub fn holy_family(christmas: Date) -> Result<Date> {
    if christmas.is_sunday() {
        christmas.advance(5, TimeUnit::Days)
    } else {
        Ok(christmas.next_weekday(Weekday::Sunday))
    }
}

// ── Epiphany-based rules ──────────────────────────────────────────────────────

/// Epiphany: January 6, or with `EpiphanyOnSunday` the Sunday on or after
/// January 2.
pub fn epiphany(year: Year, config: &Configuration) -> Result<Date> {
    if config.epiphany_on_sunday() {
        Ok(Date::from_ymd(year, 1, 2)?.next_or_same_weekday(Weekday::Sunday))
    } else {
        Date::from_ymd(year, 1, 6)
    }
}

/// Baptism of the Lord.
///
/// With Epiphany on January 6: the Monday after January 7 or January 8
/// when either is a Sunday, otherwise the Sunday after Epiphany.  With
/// `EpiphanyOnSunday`: the Sunday after Epiphany.
pub fn baptism_of_the_lord(year: Year, config: &Configuration) -> Result<Date> {
    let sunday_after_epiphany = epiphany(year, config)?.next_weekday(Weekday::Sunday);
    if config.epiphany_on_sunday() {
        return Ok(sunday_after_epiphany);
    }
    let jan7 = Date::from_ymd(year, 1, 7)?;
    let jan8 = Date::from_ymd(year, 1, 8)?;
    Ok(if jan7.is_sunday() {
        jan7.next_weekday(Weekday::Monday)
    } else if jan8.is_sunday() {
        jan8.next_weekday(Weekday::Monday)
    } else {
        sunday_after_epiphany
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CalendarOption;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn sunday_epiphany() -> Configuration {
        Configuration::default().with(CalendarOption::EpiphanyOnSunday, true)
    }

    #[test]
    fn easter_offsets_2023() {
        let easter = date(2023, 4, 9);
        assert_eq!(holy_thursday(easter).unwrap(), date(2023, 4, 6));
        assert_eq!(ash_wednesday(easter).unwrap(), date(2023, 2, 22));
        assert_eq!(first_sunday_of_lent(easter).unwrap(), date(2023, 2, 26));
        assert_eq!(fifth_sunday_of_lent(easter).unwrap(), date(2023, 3, 26));
        assert_eq!(palm_sunday(easter).unwrap(), date(2023, 4, 2));
        assert_eq!(pentecost(easter).unwrap(), date(2023, 5, 28));
        assert_eq!(trinity_sunday(easter).unwrap(), date(2023, 6, 4));
    }

    #[test]
    fn first_sunday_of_advent_every_branch() {
        // (year, weekday of Dec 25, expected first Sunday)
        let cases = [
            (2022, Weekday::Sunday, date(2022, 11, 27)),
            (2023, Weekday::Monday, date(2023, 12, 3)),
            (2018, Weekday::Tuesday, date(2018, 12, 2)),
            (2024, Weekday::Wednesday, date(2024, 12, 1)),
            (2025, Weekday::Thursday, date(2025, 11, 30)),
            (2026, Weekday::Friday, date(2026, 11, 29)),
            (2021, Weekday::Saturday, date(2021, 11, 28)),
        ];
        for (year, weekday, expected) in cases {
            assert_eq!(date(year, 12, 25).weekday(), weekday);
            let got = first_sunday_of_advent(year).unwrap();
            assert_eq!(got, expected, "Advent {year}");
            assert!(got.is_sunday());
        }
    }

    #[test]
    fn christ_the_king_precedes_advent() {
        assert_eq!(christ_the_king(date(2022, 11, 27)).unwrap(), date(2022, 11, 20));
    }

    #[test]
    fn epiphany_fixed_and_on_sunday() {
        assert_eq!(epiphany(2023, &Configuration::default()).unwrap(), date(2023, 1, 6));
        // Jan 2 2023 is a Monday; the next Sunday is Jan 8
        assert_eq!(epiphany(2023, &sunday_epiphany()).unwrap(), date(2023, 1, 8));
        // Jan 2 2022 is itself a Sunday
        assert_eq!(epiphany(2022, &sunday_epiphany()).unwrap(), date(2022, 1, 2));
    }

    #[test]
    fn baptism_default_rule() {
        let fixed = Configuration::default();
        // 2022: Jan 7 Friday, Jan 8 Saturday -> Sunday after Jan 6
        assert_eq!(baptism_of_the_lord(2022, &fixed).unwrap(), date(2022, 1, 9));
        // 2018 and 2024: Jan 7 is a Sunday -> Monday Jan 8
        assert_eq!(baptism_of_the_lord(2018, &fixed).unwrap(), date(2018, 1, 8));
        assert_eq!(baptism_of_the_lord(2024, &fixed).unwrap(), date(2024, 1, 8));
        // 2017 and 2023: Jan 8 is a Sunday -> Monday Jan 9
        assert_eq!(baptism_of_the_lord(2017, &fixed).unwrap(), date(2017, 1, 9));
        assert_eq!(baptism_of_the_lord(2023, &fixed).unwrap(), date(2023, 1, 9));
    }

    #[test]
    fn baptism_with_epiphany_on_sunday() {
        let config = sunday_epiphany();
        // Epiphany Jan 8 2023 -> Baptism Jan 15
        assert_eq!(baptism_of_the_lord(2023, &config).unwrap(), date(2023, 1, 15));
        // Epiphany Jan 7 2024 -> Baptism Jan 14
        assert_eq!(baptism_of_the_lord(2024, &config).unwrap(), date(2024, 1, 14));
        // Epiphany Jan 2 2022 -> Baptism Jan 9
        assert_eq!(baptism_of_the_lord(2022, &config).unwrap(), date(2022, 1, 9));
    }

    #[test]
    fn transferable_solemnities() {
        let easter = date(2023, 4, 9);
        let thursday = Configuration::default()
            .with(CalendarOption::AscensionOriginal, true)
            .with(CalendarOption::CorpusOriginal, true);
        assert_eq!(ascension(easter, &thursday).unwrap(), date(2023, 5, 18));
        assert_eq!(ascension(easter, &Configuration::default()).unwrap(), date(2023, 5, 21));
        assert_eq!(corpus_christi(easter, &thursday).unwrap(), date(2023, 6, 8));
        assert_eq!(
            corpus_christi(easter, &Configuration::default()).unwrap(),
            date(2023, 6, 11)
        );
    }

    #[test]
    fn holy_family_rule() {
        // Christmas 2022 is a Sunday
        assert_eq!(holy_family(date(2022, 12, 25)).unwrap(), date(2022, 12, 30));
        // Christmas 2023 is a Monday
        assert_eq!(holy_family(date(2023, 12, 25)).unwrap(), date(2023, 12, 31));
    }

    #[test]
    fn compute_collects_everything() {
        let a = AnchorDates::compute(2025, &Configuration::default()).unwrap();
        assert_eq!(a.easter, date(2025, 4, 20));
        assert_eq!(a.ash_wednesday, date(2025, 3, 5));
        assert_eq!(a.first_sunday_of_advent, date(2025, 11, 30));
        assert_eq!(a.christ_the_king, date(2025, 11, 23));
        assert_eq!(a.day_after_pentecost(), date(2025, 6, 9));
        assert_eq!(a.easter_week(a.easter), 1);
        assert_eq!(a.easter_week(a.easter + 7), 2);
        assert_eq!(a.easter_week(a.easter + 39), 6);
        assert_eq!(a.easter_week(a.pentecost), 8);
    }

    #[test]
    fn week_offsets_keep_the_weekday() {
        for year in [1, 1583, 2023, 2285, 9999] {
            let a = AnchorDates::compute(year, &Configuration::default()).unwrap();
            for sunday in [
                a.first_sunday_of_lent,
                a.fifth_sunday_of_lent,
                a.palm_sunday,
                a.pentecost,
                a.trinity_sunday,
                a.christ_the_king,
            ] {
                assert!(sunday.is_sunday(), "{year}: {sunday}");
            }
            assert_eq!(a.first_sunday_of_lent.days_between(a.fifth_sunday_of_lent), 28);
            assert_eq!(a.christ_the_king.days_between(a.first_sunday_of_advent), 7);
        }
    }

    #[test]
    fn fixed_takes_a_month() {
        let a = AnchorDates::compute(2024, &Configuration::default()).unwrap();
        assert_eq!(a.fixed(Month::March, 19), date(2024, 3, 19));
        assert_eq!(a.fixed(Month::December, 8).month(), Month::December);
    }

    #[test]
    fn compute_rejects_unsupported_years() {
        assert!(AnchorDates::compute(0, &Configuration::default()).is_err());
        assert!(AnchorDates::compute(10_000, &Configuration::default()).is_err());
    }
}
