//! Year calendar assembly.
//!
//! [`generate`] computes the anchors once, runs every [`Generator`] in
//! order, and stable-sorts the concatenated output by date.  Entries that
//! share a date keep generator order.  Coinciding entries are not merged:
//! a feria and a solemnity on the same day are both returned.

use std::collections::HashMap;

use lit_core::errors::Result;
use lit_core::Year;
use lit_time::Date;
use tracing::debug;

use crate::anchors::AnchorDates;
use crate::celebration::{Celebration, Qualifier, Season};
use crate::config::Configuration;
use crate::generators::Generator;

/// Every celebration of one civil year, sorted by date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearCalendar {
    year: Year,
    anchors: AnchorDates,
    celebrations: Vec<Celebration>,
}

impl YearCalendar {
    /// The civil year.
    pub fn year(&self) -> Year {
        self.year
    }

    /// The anchors the calendar was derived from.
    pub fn anchors(&self) -> &AnchorDates {
        &self.anchors
    }

    /// All entries, sorted by date.
    pub fn celebrations(&self) -> &[Celebration] {
        &self.celebrations
    }

    /// Iterate over all entries in date order.
    pub fn iter(&self) -> std::slice::Iter<'_, Celebration> {
        self.celebrations.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.celebrations.len()
    }

    /// `true` if the calendar holds no entries.
    pub fn is_empty(&self) -> bool {
        self.celebrations.is_empty()
    }

    /// Every entry on `date`, in generator order.
    pub fn on(&self, date: Date) -> &[Celebration] {
        let lo = self.celebrations.partition_point(|c| c.date() < date);
        let hi = self.celebrations.partition_point(|c| c.date() <= date);
        &self.celebrations[lo..hi]
    }

    /// Entries belonging to `season`.
    pub fn in_season(&self, season: Season) -> impl Iterator<Item = &Celebration> + '_ {
        self.celebrations.iter().filter(move |c| c.season() == season)
    }

    /// Entries carrying `qualifier`.
    pub fn with_qualifier(&self, qualifier: Qualifier) -> impl Iterator<Item = &Celebration> + '_ {
        self.celebrations.iter().filter(move |c| c.qualifier() == Some(qualifier))
    }

    /// Consume the calendar, returning the sorted entries.
    pub fn into_vec(self) -> Vec<Celebration> {
        self.celebrations
    }
}

impl IntoIterator for YearCalendar {
    type Item = Celebration;
    type IntoIter = std::vec::IntoIter<Celebration>;

    fn into_iter(self) -> Self::IntoIter {
        self.celebrations.into_iter()
    }
}

impl<'a> IntoIterator for &'a YearCalendar {
    type Item = &'a Celebration;
    type IntoIter = std::slice::Iter<'a, Celebration>;

    fn into_iter(self) -> Self::IntoIter {
        self.celebrations.iter()
    }
}

/// Generate the calendar of `year`.
///
/// # Errors
/// Returns an error for years outside `1..=9999`.
///
/// ```
/// use lit_calendar::{generate, Configuration, Qualifier};
///
/// let calendar = generate(2023, &Configuration::default()).unwrap();
/// let easter = calendar.with_qualifier(Qualifier::EasterSunday).next().unwrap();
/// assert_eq!(easter.date().to_string(), "2023-04-09");
/// ```
pub fn generate(year: Year, config: &Configuration) -> Result<YearCalendar> {
    let anchors = AnchorDates::compute(year, config)?;
    let mut celebrations: Vec<Celebration> = Generator::ALL
        .iter()
        .flat_map(|generator| generator.celebrations(&anchors))
        .collect();
    celebrations.sort_by_key(Celebration::date);
    debug!(year, count = celebrations.len(), "calendar generated");
    Ok(YearCalendar {
        year,
        anchors,
        celebrations,
    })
}

/// Generate the calendar of `year` from a string-keyed option map.
///
/// Unknown option names are ignored.
///
/// # Errors
/// Returns an error only for an unsupported year.
pub fn generate_from_map(year: Year, options: &HashMap<String, bool>) -> Result<YearCalendar> {
    generate(year, &Configuration::from_map(options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lit_core::Error;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn sorted_by_date() {
        let calendar = generate(2023, &Configuration::default()).unwrap();
        assert!(calendar.iter().zip(calendar.iter().skip(1)).all(|(a, b)| a.date() <= b.date()));
        assert_eq!(calendar.year(), 2023);
        assert!(!calendar.is_empty());
    }

    #[test]
    fn every_day_of_the_year_is_covered() {
        let calendar = generate(2023, &Configuration::default()).unwrap();
        for day in date(2023, 1, 1).through(date(2023, 12, 31)) {
            assert!(!calendar.on(day).is_empty(), "{day} has no entry");
        }
    }

    #[test]
    fn ties_keep_generator_order() {
        // Mar 20 2023: Lenten feria, then Saint Joseph from the solemnities
        let calendar = generate(2023, &Configuration::default()).unwrap();
        let day = calendar.on(date(2023, 3, 20));
        assert_eq!(day.len(), 2);
        assert_eq!(day[0].season(), Season::Lent);
        assert_eq!(day[1].qualifier(), Some(Qualifier::Joseph));
    }

    #[test]
    fn unknown_option_is_ignored() {
        let mut options = HashMap::new();
        options.insert("JAN06".to_string(), true);
        let calendar = generate_from_map(2023, &options).unwrap();
        assert_eq!(calendar, generate(2023, &Configuration::default()).unwrap());
        assert!(matches!(generate_from_map(0, &options), Err(Error::Precondition(_))));
    }

    #[test]
    fn map_and_builder_agree() {
        let mut options = HashMap::new();
        options.insert("EpiphanyOnSunday".to_string(), true);
        let from_map = generate_from_map(2023, &options).unwrap();
        let config = Configuration::from_map(&options);
        assert_eq!(from_map, generate(2023, &config).unwrap());
    }

    #[test]
    fn owned_and_borrowed_iteration_match() {
        let calendar = generate(2025, &Configuration::default()).unwrap();
        let borrowed: Vec<Celebration> = (&calendar).into_iter().cloned().collect();
        assert_eq!(borrowed, calendar.clone().into_vec());
        assert_eq!(borrowed.len(), calendar.into_iter().count());
    }
}
