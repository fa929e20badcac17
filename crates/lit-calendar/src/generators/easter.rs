//! The Paschal Triduum and the Easter season up to Pentecost.

use lit_time::Date;

use super::{plain, special, weeks_forward};
use crate::anchors::AnchorDates;
use crate::celebration::{Celebration, LiturgicalColor, Qualifier, Rank, Season};

/// Holy Thursday, Good Friday, Holy Saturday and Easter Sunday.
pub fn triduum(anchors: &AnchorDates) -> impl Iterator<Item = Celebration> {
    let a = *anchors;
    let days = [
        (a.holy_thursday, Season::Triduum, 6, Qualifier::HolyThursday, LiturgicalColor::White),
        (a.easter - 2, Season::Triduum, 6, Qualifier::GoodFriday, LiturgicalColor::Red),
        (a.easter - 1, Season::Triduum, 6, Qualifier::HolySaturday, LiturgicalColor::Violet),
        (a.easter, Season::Easter, 1, Qualifier::EasterSunday, LiturgicalColor::White),
    ];
    days.into_iter().map(|(date, season, week, qualifier, color)| {
        special(date, season, week, qualifier, Rank::Solemnity, color)
    })
}

/// Monday to Saturday after Easter, all in week 1.  The closing Sunday
/// belongs to [`sundays`].
pub fn octave(anchors: &AnchorDates) -> impl Iterator<Item = Celebration> {
    let a = *anchors;
    (a.easter + 1).until(a.easter + 7).map(|date| {
        special(
            date,
            Season::Easter,
            1,
            Qualifier::Octave,
            Rank::Solemnity,
            LiturgicalColor::White,
        )
    })
}

/// Sundays from the octave day through Pentecost, numbered from 2.
///
/// A transferred Ascension keeps its Sunday's number but is left to the
/// solemnities generator.
pub fn sundays(anchors: &AnchorDates) -> impl Iterator<Item = Celebration> {
    let a = *anchors;
    let transferred_ascension = (!a.config.ascension_original()).then_some(a.ascension);
    (a.easter + 7)
        .through(a.pentecost)
        .filter(Date::is_sunday)
        .zip(2u8..)
        .filter(move |(date, _)| Some(*date) != transferred_ascension)
        .map(move |(date, week)| {
            if date == a.pentecost {
                special(
                    date,
                    Season::Easter,
                    week,
                    Qualifier::Pentecost,
                    Rank::Solemnity,
                    LiturgicalColor::Red,
                )
            } else if date == a.easter + 7 {
                special(
                    date,
                    Season::Easter,
                    week,
                    Qualifier::Octave,
                    Rank::Sunday,
                    LiturgicalColor::White,
                )
            } else {
                plain(date, Season::Easter, week, Rank::Sunday, LiturgicalColor::White)
            }
        })
}

/// Weekdays from the second week of Easter to the eve of Pentecost.
/// Ascension Thursday is left to the solemnities generator.
pub fn ferias(anchors: &AnchorDates) -> impl Iterator<Item = Celebration> {
    let a = *anchors;
    weeks_forward((a.easter + 8).until(a.pentecost), 2)
        .filter(move |(date, _)| *date != a.ascension)
        .map(|(date, week)| plain(date, Season::Easter, week, Rank::Feria, LiturgicalColor::White))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CalendarOption, Configuration};

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn anchors(year: u16, ascension_thursday: bool) -> AnchorDates {
        let config =
            Configuration::default().with(CalendarOption::AscensionOriginal, ascension_thursday);
        AnchorDates::compute(year, &config).unwrap()
    }

    #[test]
    fn triduum_2024() {
        let out: Vec<_> = triduum(&anchors(2024, false)).collect();
        let dates: Vec<_> = out.iter().map(Celebration::date).collect();
        assert_eq!(
            dates,
            vec![date(2024, 3, 28), date(2024, 3, 29), date(2024, 3, 30), date(2024, 3, 31)]
        );
        assert_eq!(out[1].color(), LiturgicalColor::Red);
        assert_eq!(out[3].season(), Season::Easter);
        assert_eq!(out[3].season_week(), 1);
    }

    #[test]
    fn octave_is_week_one_without_its_sunday() {
        let out: Vec<_> = octave(&anchors(2023, false)).collect();
        assert_eq!(out.len(), 6);
        assert_eq!(out[0].date(), date(2023, 4, 10));
        assert_eq!(out[5].date(), date(2023, 4, 15));
        assert!(out.iter().all(|c| c.season_week() == 1));
    }

    #[test]
    fn easter_sundays_with_transferred_ascension() {
        let a = anchors(2023, false);
        let out: Vec<_> = sundays(&a).collect();
        let weeks: Vec<_> = out.iter().map(Celebration::season_week).collect();
        // Easter 7 (May 21) is Ascension and is skipped
        assert_eq!(weeks, vec![2, 3, 4, 5, 6, 8]);
        assert_eq!(out[0].date(), date(2023, 4, 16));
        assert_eq!(out[0].qualifier(), Some(Qualifier::Octave));
        let pentecost = out.last().unwrap();
        assert_eq!(pentecost.date(), date(2023, 5, 28));
        assert_eq!(pentecost.qualifier(), Some(Qualifier::Pentecost));
        assert_eq!(pentecost.psalter_week(), 4);
    }

    #[test]
    fn easter_sundays_with_thursday_ascension() {
        let out: Vec<_> = sundays(&anchors(2023, true)).collect();
        let weeks: Vec<_> = out.iter().map(Celebration::season_week).collect();
        assert_eq!(weeks, vec![2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn easter_ferias_skip_ascension_thursday() {
        let a = anchors(2023, true);
        let out: Vec<_> = ferias(&a).collect();
        assert!(out.iter().all(|c| c.date() != a.ascension));
        // six weeks of six weekdays, less Ascension Thursday
        assert_eq!(out.len(), 35);
        assert_eq!(out[0].date(), date(2023, 4, 17));
        assert_eq!(out[0].season_week(), 2);
        assert_eq!(out.last().map(Celebration::season_week), Some(7));

        let transferred: Vec<_> = ferias(&anchors(2023, false)).collect();
        assert_eq!(transferred.len(), 36);
    }
}
