//! Advent.
//!
//! Four Sundays from the first Sunday of Advent, with weekdays numbered by
//! the Sunday before them.  From December 17 the weekdays carry their day of
//! the month.

use lit_time::{Date, Month};

use super::{plain, special, weeks_forward};
use crate::anchors::AnchorDates;
use crate::celebration::{Celebration, LiturgicalColor, Qualifier, Rank, Season};

/// First day of the major ferias before Christmas.
const FIRST_MAJOR_FERIA: u8 = 17;

/// The four Sundays of Advent.  The third (Gaudete) is rose.
pub fn sundays(anchors: &AnchorDates) -> impl Iterator<Item = Celebration> {
    let a = *anchors;
    a.first_sunday_of_advent
        .until(a.christmas)
        .filter(Date::is_sunday)
        .zip(1u8..)
        .map(|(date, week)| {
            let color = if week == 3 {
                LiturgicalColor::Rose
            } else {
                LiturgicalColor::Violet
            };
            plain(date, Season::Advent, week, Rank::Sunday, color)
        })
}

/// Weekdays from the first Sunday of Advent to December 24.  December 17
/// onward are qualified with their day of the month.
pub fn ferias(anchors: &AnchorDates) -> impl Iterator<Item = Celebration> {
    let a = *anchors;
    weeks_forward(a.first_sunday_of_advent.until(a.christmas), 1).map(|(date, week)| {
        let day = date.day_of_month();
        if date.month() == Month::December && day >= FIRST_MAJOR_FERIA {
            special(
                date,
                Season::Advent,
                week,
                Qualifier::MajorFeria(day),
                Rank::Feria,
                LiturgicalColor::Violet,
            )
        } else {
            plain(date, Season::Advent, week, Rank::Feria, LiturgicalColor::Violet)
        }
    })
}
