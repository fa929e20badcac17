//! Christmas time, split across the two ends of the civil year.

use std::iter::once;

use lit_core::WeekIndex;
use lit_time::{Date, Month};

use super::special;
use crate::anchors::AnchorDates;
use crate::celebration::{Celebration, LiturgicalColor, Qualifier, Rank, Season};

/// Week of the December entries, from Christmas to December 31.
const OCTAVE_WEEK: WeekIndex = 1;

/// Week of the January entries, up to the Baptism of the Lord.
const JANUARY_WEEK: WeekIndex = 2;

fn white(date: Date, week: WeekIndex, qualifier: Qualifier, rank: Rank) -> Celebration {
    special(date, Season::Christmas, week, qualifier, rank, LiturgicalColor::White)
}

fn sunday_or_feria(date: Date) -> Rank {
    if date.is_sunday() {
        Rank::Sunday
    } else {
        Rank::Feria
    }
}

/// The Christmas season as it falls in one civil year: January up to the
/// Baptism of the Lord, then Christmas to December 31.
///
/// January 1 is left to the solemnities generator.
pub fn season(anchors: &AnchorDates) -> impl Iterator<Item = Celebration> {
    let a = *anchors;

    let before_epiphany = a.fixed(Month::January, 2).until(a.epiphany).map(|date| {
        if date.is_sunday() {
            white(date, JANUARY_WEEK, Qualifier::SecondSundayAfterChristmas, Rank::Sunday)
        } else {
            white(date, JANUARY_WEEK, Qualifier::BeforeEpiphany, Rank::Feria)
        }
    });
    let epiphany = once(white(a.epiphany, JANUARY_WEEK, Qualifier::Epiphany, Rank::Solemnity));
    let after_epiphany = (a.epiphany + 1).until(a.baptism_of_the_lord).map(|date| {
        white(date, JANUARY_WEEK, Qualifier::AfterEpiphany, sunday_or_feria(date))
    });
    let baptism = once(white(
        a.baptism_of_the_lord,
        JANUARY_WEEK,
        Qualifier::BaptismOfTheLord,
        Rank::Sunday,
    ));

    let christmas = once(white(a.christmas, OCTAVE_WEEK, Qualifier::Christmas, Rank::Solemnity));
    let octave = (a.christmas + 1).through(a.fixed(Month::December, 31)).map(move |date| {
        if date == a.holy_family {
            white(date, OCTAVE_WEEK, Qualifier::HolyFamily, Rank::Sunday)
        } else {
            white(date, OCTAVE_WEEK, Qualifier::Octave, sunday_or_feria(date))
        }
    });

    before_epiphany
        .chain(epiphany)
        .chain(after_epiphany)
        .chain(baptism)
        .chain(christmas)
        .chain(octave)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CalendarOption, Configuration};

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn collect(year: u16, config: Configuration) -> Vec<Celebration> {
        season(&AnchorDates::compute(year, &config).unwrap()).collect()
    }

    fn find(out: &[Celebration], qualifier: Qualifier) -> Vec<Date> {
        out.iter()
            .filter(|c| c.qualifier() == Some(qualifier))
            .map(Celebration::date)
            .collect()
    }

    #[test]
    fn january_2023_with_fixed_epiphany() {
        let out = collect(2023, Configuration::default());
        assert_eq!(find(&out, Qualifier::Epiphany), vec![date(2023, 1, 6)]);
        assert_eq!(find(&out, Qualifier::BaptismOfTheLord), vec![date(2023, 1, 9)]);
        assert_eq!(find(&out, Qualifier::BeforeEpiphany).len(), 4);
        // Jan 7 and the Sunday Jan 8
        assert_eq!(
            find(&out, Qualifier::AfterEpiphany),
            vec![date(2023, 1, 7), date(2023, 1, 8)]
        );
        assert!(find(&out, Qualifier::SecondSundayAfterChristmas).is_empty());
    }

    #[test]
    fn second_sunday_after_christmas() {
        // Jan 4 2026 is a Sunday before the Epiphany
        let out = collect(2026, Configuration::default());
        assert_eq!(find(&out, Qualifier::SecondSundayAfterChristmas), vec![date(2026, 1, 4)]);
    }

    #[test]
    fn january_2023_with_sunday_epiphany() {
        let config = Configuration::default().with(CalendarOption::EpiphanyOnSunday, true);
        let out = collect(2023, config);
        assert_eq!(find(&out, Qualifier::Epiphany), vec![date(2023, 1, 8)]);
        assert_eq!(find(&out, Qualifier::BaptismOfTheLord), vec![date(2023, 1, 15)]);
        assert_eq!(find(&out, Qualifier::BeforeEpiphany).len(), 6);
        assert_eq!(find(&out, Qualifier::AfterEpiphany).len(), 6);
    }

    #[test]
    fn december_octave_2022() {
        // Christmas 2022 is a Sunday, so the Holy Family is Friday Dec 30
        let out = collect(2022, Configuration::default());
        assert_eq!(find(&out, Qualifier::Christmas), vec![date(2022, 12, 25)]);
        assert_eq!(find(&out, Qualifier::HolyFamily), vec![date(2022, 12, 30)]);
        let octave = find(&out, Qualifier::Octave);
        assert_eq!(octave.len(), 5);
        assert!(!octave.contains(&date(2022, 12, 30)));
        assert_eq!(octave.last(), Some(&date(2022, 12, 31)));
    }

    #[test]
    fn entries_are_in_date_order_and_white() {
        let out = collect(2024, Configuration::default());
        assert!(out.windows(2).all(|w| w[0].date() < w[1].date()));
        assert!(out.iter().all(|c| c.color() == LiturgicalColor::White));
        assert!(out.iter().all(|c| c.season() == Season::Christmas));
    }
}
