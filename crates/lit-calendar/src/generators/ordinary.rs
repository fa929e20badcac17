//! Ordinary Time.
//!
//! The first block runs from the day after the Baptism of the Lord to the
//! eve of Ash Wednesday and is numbered forward.  The second block ends on
//! the eve of Advent with week 34 and is numbered backward from there, so
//! its first week number depends on the date of Easter.

use lit_core::WeekIndex;
use lit_time::{Date, TimeUnit, Weekday};

use super::{plain, weeks_backward, weeks_forward};
use crate::anchors::AnchorDates;
use crate::celebration::{Celebration, LiturgicalColor, Rank, Season};

/// Week of Christ the King, the last of the liturgical year.
pub const LAST_WEEK: WeekIndex = 34;

/// Week of the second block that `date` falls in, counted back from
/// Christ the King.
pub fn week_after_pentecost(anchors: &AnchorDates, date: Date) -> WeekIndex {
    let sunday = if date.is_sunday() {
        date
    } else {
        date.previous_weekday(Weekday::Sunday)
    };
    let weeks_before = sunday.days_between(anchors.christ_the_king) / TimeUnit::Weeks.days();
    LAST_WEEK - weeks_before as WeekIndex
}

fn green(date: Date, week: WeekIndex, rank: Rank) -> Celebration {
    plain(date, Season::Ordinary, week, rank, LiturgicalColor::Green)
}

/// Sundays after the Baptism of the Lord and before Ash Wednesday, numbered
/// from 2.
pub fn sundays_before_lent(anchors: &AnchorDates) -> impl Iterator<Item = Celebration> {
    let a = *anchors;
    (a.baptism_of_the_lord + 1)
        .until(a.ash_wednesday)
        .filter(Date::is_sunday)
        .zip(2u8..)
        .map(|(date, week)| green(date, week, Rank::Sunday))
}

/// Weekdays after the Baptism of the Lord and before Ash Wednesday.
pub fn ferias_before_lent(anchors: &AnchorDates) -> impl Iterator<Item = Celebration> {
    let a = *anchors;
    weeks_forward((a.baptism_of_the_lord + 1).until(a.ash_wednesday), 1)
        .map(|(date, week)| green(date, week, Rank::Feria))
}

/// Sundays after Corpus Christi up to Advent, numbered backward from 34.
/// Christ the King takes week 34 but is left to the solemnities generator.
pub fn sundays_after_pentecost(anchors: &AnchorDates) -> impl Iterator<Item = Celebration> {
    let a = *anchors;
    let mut sundays: Vec<_> = (a.corpus_christi + 1)
        .until(a.first_sunday_of_advent)
        .rev()
        .filter(Date::is_sunday)
        .zip((1..=LAST_WEEK).rev())
        .filter(|(date, _)| *date != a.christ_the_king)
        .map(|(date, week)| green(date, week, Rank::Sunday))
        .collect();
    sundays.reverse();
    sundays.into_iter()
}

/// Weekdays from the day after Pentecost up to Advent, numbered backward
/// from 34.  Corpus Christi kept on Thursday is left to the solemnities
/// generator.
pub fn ferias_after_pentecost(anchors: &AnchorDates) -> impl Iterator<Item = Celebration> {
    let a = *anchors;
    let mut ferias: Vec<_> =
        weeks_backward(a.day_after_pentecost().until(a.first_sunday_of_advent), LAST_WEEK)
            .filter(|(date, _)| *date != a.corpus_christi)
            .map(|(date, week)| green(date, week, Rank::Feria))
            .collect();
    ferias.reverse();
    ferias.into_iter()
}
