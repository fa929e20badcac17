//! Lent and Holy Week.
//!
//! Ash Wednesday and the three days after it form week 0; the weeks of Lent
//! then follow its five Sundays.  Holy Week runs from Palm Sunday to the eve
//! of the Triduum.

use lit_time::Date;

use super::{plain, special, weeks_forward};
use crate::anchors::AnchorDates;
use crate::celebration::{Celebration, LiturgicalColor, Qualifier, Rank, Season};

/// Sundays from Ash Wednesday up to Palm Sunday, numbered 1 to 5.  The
/// fourth (Laetare) is rose.
pub fn sundays(anchors: &AnchorDates) -> impl Iterator<Item = Celebration> {
    let a = *anchors;
    a.ash_wednesday
        .until(a.palm_sunday)
        .filter(Date::is_sunday)
        .zip(1u8..)
        .map(|(date, week)| {
            let color = if week == 4 {
                LiturgicalColor::Rose
            } else {
                LiturgicalColor::Violet
            };
            plain(date, Season::Lent, week, Rank::Sunday, color)
        })
}

/// Ash Wednesday through the following Saturday.  These days precede the
/// first week of Lent and carry week 0.
pub fn ash_wednesday_ferias(anchors: &AnchorDates) -> impl Iterator<Item = Celebration> {
    let a = *anchors;
    a.ash_wednesday.until(a.first_sunday_of_lent).map(move |date| {
        if date == a.ash_wednesday {
            special(
                date,
                Season::Lent,
                0,
                Qualifier::AshWednesday,
                Rank::Feria,
                LiturgicalColor::Violet,
            )
        } else {
            plain(date, Season::Lent, 0, Rank::Feria, LiturgicalColor::Violet)
        }
    })
}

/// Weekdays from the Monday after the first Sunday of Lent up to Palm
/// Sunday.
pub fn ferias(anchors: &AnchorDates) -> impl Iterator<Item = Celebration> {
    let a = *anchors;
    weeks_forward((a.ash_wednesday + 5).until(a.palm_sunday), 1)
        .map(|(date, week)| plain(date, Season::Lent, week, Rank::Feria, LiturgicalColor::Violet))
}

/// Palm Sunday and Monday to Wednesday of Holy Week, all in week 6.
pub fn holy_week(anchors: &AnchorDates) -> impl Iterator<Item = Celebration> {
    let a = *anchors;
    a.palm_sunday.until(a.holy_thursday).map(move |date| {
        if date == a.palm_sunday {
            special(
                date,
                Season::HolyWeek,
                6,
                Qualifier::PalmSunday,
                Rank::Sunday,
                LiturgicalColor::Red,
            )
        } else {
            plain(date, Season::HolyWeek, 6, Rank::Feria, LiturgicalColor::Violet)
        }
    })
}
