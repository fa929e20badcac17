//! Season generators.
//!
//! One generator per liturgical block.  Each is a pure function of the
//! year's [`AnchorDates`] returning a finite iterator of celebrations; no
//! generator reads the output of another.  [`Generator`] lists them in the
//! order the aggregator runs them, which is also the tie-break order for
//! entries sharing a date.

use lit_core::WeekIndex;
use lit_time::{Date, Weekday};
use tracing::debug;

use crate::anchors::AnchorDates;
use crate::celebration::{Celebration, CelebrationCode, LiturgicalColor, Qualifier, Rank, Season};

/// Advent Sundays and ferias.
pub mod advent;

/// Christmas season, December and January.
pub mod christmas;

/// Triduum, Easter octave, Easter Sundays and ferias.
pub mod easter;

/// Lent and Holy Week.
pub mod lent;

/// Both blocks of Ordinary Time.
pub mod ordinary;

/// Solemnities subject to displacement or transfer.
pub mod solemnities;

/// A season generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Generator {
    /// Holy Thursday, Good Friday, Holy Saturday and Easter Sunday.
    Triduum,
    /// Sundays of Lent 1–5.
    LentenSundays,
    /// Ash Wednesday and the three days after it.
    AshWednesdayFerias,
    /// Lenten weekdays from the first Monday of Lent.
    LentenFerias,
    /// Palm Sunday and Monday to Wednesday of Holy Week.
    HolyWeek,
    /// Monday to Saturday of the Easter octave.
    EasterOctave,
    /// Sundays of Easter 2 to Pentecost.
    EasterSundays,
    /// Easter weekdays from the second week.
    EasterFerias,
    /// Ordinary Time Sundays before Lent.
    OrdinarySundaysBeforeLent,
    /// Ordinary Time weekdays before Lent.
    OrdinaryFeriasBeforeLent,
    /// Ordinary Time Sundays after Pentecost.
    OrdinarySundaysAfterPentecost,
    /// Ordinary Time weekdays after Pentecost.
    OrdinaryFeriasAfterPentecost,
    /// Mary Mother of God, Joseph, Annunciation, Ascension, Trinity,
    /// Corpus Christi, Christ the King, Immaculate Conception.
    Solemnities,
    /// Sundays of Advent 1–4.
    AdventSundays,
    /// Advent weekdays to December 24.
    AdventFerias,
    /// Christmas season in January and December.
    Christmas,
}

impl Generator {
    /// Every generator, in invocation order.
    pub const ALL: [Generator; 16] = [
        Generator::Triduum,
        Generator::LentenSundays,
        Generator::AshWednesdayFerias,
        Generator::LentenFerias,
        Generator::HolyWeek,
        Generator::EasterOctave,
        Generator::EasterSundays,
        Generator::EasterFerias,
        Generator::OrdinarySundaysBeforeLent,
        Generator::OrdinaryFeriasBeforeLent,
        Generator::OrdinarySundaysAfterPentecost,
        Generator::OrdinaryFeriasAfterPentecost,
        Generator::Solemnities,
        Generator::AdventSundays,
        Generator::AdventFerias,
        Generator::Christmas,
    ];

    /// Run the generator, numbering its entries from 1.
    pub fn celebrations(&self, anchors: &AnchorDates) -> Vec<Celebration> {
        let out = match self {
            Generator::Triduum => sequenced(easter::triduum(anchors)),
            Generator::LentenSundays => sequenced(lent::sundays(anchors)),
            Generator::AshWednesdayFerias => sequenced(lent::ash_wednesday_ferias(anchors)),
            Generator::LentenFerias => sequenced(lent::ferias(anchors)),
            Generator::HolyWeek => sequenced(lent::holy_week(anchors)),
            Generator::EasterOctave => sequenced(easter::octave(anchors)),
            Generator::EasterSundays => sequenced(easter::sundays(anchors)),
            Generator::EasterFerias => sequenced(easter::ferias(anchors)),
            Generator::OrdinarySundaysBeforeLent => sequenced(ordinary::sundays_before_lent(anchors)),
            Generator::OrdinaryFeriasBeforeLent => sequenced(ordinary::ferias_before_lent(anchors)),
            Generator::OrdinarySundaysAfterPentecost => {
                sequenced(ordinary::sundays_after_pentecost(anchors))
            }
            Generator::OrdinaryFeriasAfterPentecost => {
                sequenced(ordinary::ferias_after_pentecost(anchors))
            }
            Generator::Solemnities => sequenced(solemnities::solemnities(anchors)),
            Generator::AdventSundays => sequenced(advent::sundays(anchors)),
            Generator::AdventFerias => sequenced(advent::ferias(anchors)),
            Generator::Christmas => sequenced(christmas::season(anchors)),
        };
        debug!(generator = ?self, year = anchors.year, count = out.len(), "generated");
        out
    }
}

fn sequenced(entries: impl Iterator<Item = Celebration>) -> Vec<Celebration> {
    entries
        .zip(1u32..)
        .map(|(c, id)| c.with_sequence_id(id))
        .collect()
}

// ── Shared building blocks ────────────────────────────────────────────────────

/// An unqualified Sunday or feria.
pub(crate) fn plain(
    date: Date,
    season: Season,
    week: WeekIndex,
    rank: Rank,
    color: LiturgicalColor,
) -> Celebration {
    Celebration::new(date, CelebrationCode::new(season, week, date.weekday()), rank, color)
}

/// A named special day.
pub(crate) fn special(
    date: Date,
    season: Season,
    week: WeekIndex,
    qualifier: Qualifier,
    rank: Rank,
    color: LiturgicalColor,
) -> Celebration {
    let code = CelebrationCode::new(season, week, date.weekday()).with_qualifier(qualifier);
    Celebration::new(date, code, rank, color)
}

/// Weekdays of `days` paired with a week counter that starts at `first`
/// and moves up after every Saturday.
pub(crate) fn weeks_forward(
    days: impl Iterator<Item = Date>,
    first: WeekIndex,
) -> impl Iterator<Item = (Date, WeekIndex)> {
    days.filter(|d| !d.is_sunday()).scan(first, |week, date| {
        let current = *week;
        if date.weekday() == Weekday::Saturday {
            *week += 1;
        }
        Some((date, current))
    })
}

/// Weekdays of `days`, visited latest first, paired with a week counter
/// that starts at `last` and moves down after every Monday.
pub(crate) fn weeks_backward(
    days: impl DoubleEndedIterator<Item = Date>,
    last: WeekIndex,
) -> impl Iterator<Item = (Date, WeekIndex)> {
    days.rev().filter(|d| !d.is_sunday()).scan(last, |week, date| {
        let current = *week;
        if date.weekday() == Weekday::Monday {
            *week = week.saturating_sub(1);
        }
        Some((date, current))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Configuration;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn forward_counter_turns_over_after_saturday() {
        // Wed 2023-02-22 .. Tue 2023-03-07
        let got: Vec<_> = weeks_forward(date(2023, 2, 22).until(date(2023, 3, 8)), 1).collect();
        assert_eq!(got.first(), Some(&(date(2023, 2, 22), 1)));
        assert!(got.contains(&(date(2023, 2, 25), 1)));
        assert!(got.contains(&(date(2023, 2, 27), 2)));
        assert!(got.contains(&(date(2023, 3, 6), 3)));
        assert!(got.iter().all(|(d, _)| !d.is_sunday()));
    }

    #[test]
    fn backward_counter_turns_over_after_monday() {
        // Mon 2023-11-13 .. Sat 2023-12-02, scanned from the end
        let got: Vec<_> = weeks_backward(date(2023, 11, 13).until(date(2023, 12, 3)), 34).collect();
        assert_eq!(got.first(), Some(&(date(2023, 12, 2), 34)));
        assert!(got.contains(&(date(2023, 11, 27), 34)));
        assert!(got.contains(&(date(2023, 11, 25), 33)));
        assert!(got.contains(&(date(2023, 11, 20), 33)));
        assert_eq!(got.last(), Some(&(date(2023, 11, 13), 32)));
    }

    #[test]
    fn sequence_ids_are_one_based_per_generator() {
        let anchors = AnchorDates::compute(2023, &Configuration::default()).unwrap();
        for generator in Generator::ALL {
            let out = generator.celebrations(&anchors);
            assert!(!out.is_empty(), "{generator:?} produced nothing");
            for (i, c) in out.iter().enumerate() {
                assert_eq!(c.sequence_id() as usize, i + 1);
            }
        }
    }

    #[test]
    fn generators_are_repeatable() {
        let anchors = AnchorDates::compute(2024, &Configuration::default()).unwrap();
        for generator in Generator::ALL {
            assert_eq!(generator.celebrations(&anchors), generator.celebrations(&anchors));
        }
    }
}
