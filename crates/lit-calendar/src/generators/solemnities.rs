//! Solemnities with their displacement and transfer rules.
//!
//! Fixed-date solemnities of the Proper move off days that outrank them:
//! Saint Joseph and the Annunciation off Lenten Sundays, Holy Week and the
//! Easter octave, the Immaculate Conception off an Advent Sunday.  Movable
//! solemnities take the dates already settled in [`AnchorDates`].

use lit_time::{Date, Month};
use tracing::trace;

use super::special;
use crate::anchors::AnchorDates;
use crate::celebration::{Celebration, LiturgicalColor, Qualifier, Rank, Season};
use crate::generators::ordinary::week_after_pentecost;

fn on_lenten_sunday(anchors: &AnchorDates, date: Date) -> bool {
    date.is_sunday() && date.is_between(anchors.first_sunday_of_lent, anchors.fifth_sunday_of_lent)
}

/// Saint Joseph, nominally March 19.
///
/// On a Sunday of Lent it moves to the Monday; inside Holy Week it moves
/// back to the Saturday before Palm Sunday.
pub fn joseph(anchors: &AnchorDates) -> Date {
    let nominal = anchors.fixed(Month::March, 19);
    let date = if on_lenten_sunday(anchors, nominal) {
        nominal + 1
    } else if nominal.is_between(anchors.palm_sunday, anchors.easter) {
        anchors.palm_sunday - 1
    } else {
        nominal
    };
    if date != nominal {
        trace!(year = anchors.year, %nominal, moved_to = %date, "Saint Joseph displaced");
    }
    date
}

/// The Annunciation, nominally March 25.
///
/// Inside Holy Week or the Easter octave (through its closing Sunday) it
/// moves to the Monday after the second Sunday of Easter; on a Sunday of
/// Lent it moves to March 26.
pub fn annunciation(anchors: &AnchorDates) -> Date {
    let nominal = anchors.fixed(Month::March, 25);
    let date = if nominal.is_between(anchors.palm_sunday, anchors.easter + 7) {
        anchors.easter + 8
    } else if on_lenten_sunday(anchors, nominal) {
        nominal + 1
    } else {
        nominal
    };
    if date != nominal {
        trace!(year = anchors.year, %nominal, moved_to = %date, "Annunciation displaced");
    }
    date
}

/// The Immaculate Conception, nominally December 8; December 9 when the
/// 8th is an Advent Sunday, unless `ImmaculatePrevails` is set.
pub fn immaculate_conception(anchors: &AnchorDates) -> Date {
    let nominal = anchors.fixed(Month::December, 8);
    let on_advent_sunday =
        nominal.is_sunday() && nominal.is_between(anchors.first_sunday_of_advent, anchors.christmas);
    if on_advent_sunday && !anchors.config.immaculate_prevails() {
        trace!(year = anchors.year, "Immaculate Conception moved to December 9");
        nominal + 1
    } else {
        nominal
    }
}

/// Mary Mother of God, Saint Joseph, the Annunciation, Ascension, Trinity
/// Sunday, Corpus Christi, Christ the King and the Immaculate Conception.
pub fn solemnities(anchors: &AnchorDates) -> impl Iterator<Item = Celebration> {
    let a = *anchors;
    let solemn = |date: Date, season: Season, week: u8, qualifier: Qualifier| {
        special(date, season, week, qualifier, Rank::Solemnity, LiturgicalColor::White)
    };
    [
        solemn(a.fixed(Month::January, 1), Season::Proper, 0, Qualifier::MaryMotherOfGod),
        solemn(joseph(&a), Season::Proper, 0, Qualifier::Joseph),
        solemn(annunciation(&a), Season::Proper, 0, Qualifier::Annunciation),
        solemn(
            a.ascension,
            Season::Easter,
            a.easter_week(a.ascension),
            Qualifier::Ascension,
        ),
        solemn(
            a.trinity_sunday,
            Season::Ordinary,
            week_after_pentecost(&a, a.trinity_sunday),
            Qualifier::TrinitySunday,
        ),
        solemn(
            a.corpus_christi,
            Season::Ordinary,
            week_after_pentecost(&a, a.corpus_christi),
            Qualifier::CorpusChristi,
        ),
        solemn(
            a.christ_the_king,
            Season::Ordinary,
            week_after_pentecost(&a, a.christ_the_king),
            Qualifier::ChristTheKing,
        ),
        solemn(immaculate_conception(&a), Season::Proper, 0, Qualifier::ImmaculateConception),
    ]
    .into_iter()
}
