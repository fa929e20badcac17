//! `Celebration`: one dated liturgical observance.
//!
//! A celebration is built once by a season generator and never mutated
//! afterwards.  Its identity is the structured [`CelebrationCode`]; the
//! compact legacy string (`CUA0301`, `ORD3401-REX`, …) is produced only by
//! the `Display` impl.

use lit_core::WeekIndex;
use lit_time::{Date, Weekday};

/// Liturgical season (or part of the Proper) a celebration belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Season {
    /// First Sunday of Advent to December 24.
    Advent,
    /// Christmas to the Baptism of the Lord.
    Christmas,
    /// Ash Wednesday to the Saturday before Palm Sunday.
    Lent,
    /// Palm Sunday to Holy Wednesday.
    HolyWeek,
    /// Holy Thursday to Holy Saturday.
    Triduum,
    /// Easter Sunday to Pentecost.
    Easter,
    /// Both blocks of Ordinary Time (*per annum*).
    Ordinary,
    /// Fixed-date solemnities of the Proper of Saints.
    Proper,
}

impl Season {
    /// Three-letter prefix used in the compact code.
    pub fn prefix(&self) -> &'static str {
        match self {
            Season::Advent => "ADV",
            Season::Christmas => "NAV",
            Season::Lent => "CUA",
            Season::HolyWeek => "SES",
            Season::Triduum => "TRI",
            Season::Easter => "PAS",
            Season::Ordinary => "ORD",
            Season::Proper => "PST",
        }
    }
}

/// Names the special day a celebration stands for, when it is more than a
/// plain Sunday or feria of its season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Qualifier {
    /// Ash Wednesday.
    AshWednesday,
    /// Palm Sunday of the Passion of the Lord.
    PalmSunday,
    /// Thursday of the Lord's Supper.
    HolyThursday,
    /// Friday of the Passion of the Lord.
    GoodFriday,
    /// Holy Saturday.
    HolySaturday,
    /// Easter Sunday of the Resurrection.
    EasterSunday,
    /// A day within the Christmas or Easter octave.
    Octave,
    /// Ascension of the Lord.
    Ascension,
    /// Pentecost Sunday.
    Pentecost,
    /// The Most Holy Trinity.
    TrinitySunday,
    /// The Most Holy Body and Blood of Christ.
    CorpusChristi,
    /// Our Lord Jesus Christ, King of the Universe.
    ChristTheKing,
    /// Mary, the Holy Mother of God (January 1).
    MaryMotherOfGod,
    /// Saint Joseph, Spouse of the Blessed Virgin Mary.
    Joseph,
    /// The Annunciation of the Lord.
    Annunciation,
    /// The Immaculate Conception of the Blessed Virgin Mary.
    ImmaculateConception,
    /// The Nativity of the Lord.
    Christmas,
    /// The Holy Family of Jesus, Mary and Joseph.
    HolyFamily,
    /// Second Sunday after the Nativity.
    SecondSundayAfterChristmas,
    /// A weekday between January 2 and the Epiphany.
    BeforeEpiphany,
    /// The Epiphany of the Lord.
    Epiphany,
    /// A day between the Epiphany and the Baptism of the Lord.
    AfterEpiphany,
    /// The Baptism of the Lord.
    BaptismOfTheLord,
    /// Advent weekday of December 17–24, carrying its day of the month.
    MajorFeria(u8),
}

impl Qualifier {
    /// Short tag appended to the compact code.
    pub fn tag(&self) -> String {
        let tag = match self {
            Qualifier::AshWednesday => "CEN",
            Qualifier::PalmSunday => "RAMOS",
            Qualifier::HolyThursday => "JUE",
            Qualifier::GoodFriday => "VIE",
            Qualifier::HolySaturday => "SAB",
            Qualifier::EasterSunday => "PASCUA",
            Qualifier::Octave => "OCT",
            Qualifier::Ascension => "ASC",
            Qualifier::Pentecost => "PENT",
            Qualifier::TrinitySunday => "TRI",
            Qualifier::CorpusChristi => "CORPUS",
            Qualifier::ChristTheKing => "REX",
            Qualifier::MaryMotherOfGod => "MDD",
            Qualifier::Joseph => "JOS",
            Qualifier::Annunciation => "ANU",
            Qualifier::ImmaculateConception => "INM",
            Qualifier::Christmas => "NAT",
            Qualifier::HolyFamily => "FAM",
            Qualifier::SecondSundayAfterChristmas => "DOM2",
            Qualifier::BeforeEpiphany => "PREEPI",
            Qualifier::Epiphany => "EPI",
            Qualifier::AfterEpiphany => "POSTEPI",
            Qualifier::BaptismOfTheLord => "BAU",
            Qualifier::MajorFeria(day) => return format!("{day:02}"),
        };
        tag.to_string()
    }
}

/// Structured identifier of a celebration: season, week, weekday and an
/// optional qualifier naming the special day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CelebrationCode {
    /// Season the entry belongs to.
    pub season: Season,
    /// Week of the season (0 when the entry is not numbered).
    pub week: WeekIndex,
    /// Day of the week the entry falls on.
    pub weekday: Weekday,
    /// The special day, if any.
    pub qualifier: Option<Qualifier>,
}

impl CelebrationCode {
    /// Code for a plain Sunday or feria of `season`.
    pub fn new(season: Season, week: WeekIndex, weekday: Weekday) -> Self {
        Self {
            season,
            week,
            weekday,
            qualifier: None,
        }
    }

    /// Attach a qualifier.
    pub fn with_qualifier(mut self, qualifier: Qualifier) -> Self {
        self.qualifier = Some(qualifier);
        self
    }
}

/// Renders `SSSwwdd[-TAG]`: season prefix, two-digit week, liturgical day
/// number (Sunday = 01 … Saturday = 07), and the qualifier tag.
impl std::fmt::Display for CelebrationCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{:02}{:02}",
            self.season.prefix(),
            self.week,
            self.weekday.feria_number()
        )?;
        if let Some(q) = self.qualifier {
            write!(f, "-{}", q.tag())?;
        }
        Ok(())
    }
}

/// Informational weight of a celebration.  Not used for precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rank {
    /// A weekday of a season.
    Feria,
    /// A Sunday or feast of the Lord kept on a Sunday.
    Sunday,
    /// A solemnity, or a day of the Triduum or Easter octave.
    Solemnity,
}

impl Rank {
    /// Integer weight: 2 for Sunday / solemnity level, 1 for ferias.
    pub fn weight(&self) -> u8 {
        match self {
            Rank::Feria => 1,
            Rank::Sunday | Rank::Solemnity => 2,
        }
    }
}

/// Liturgical colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum LiturgicalColor {
    /// Violet (1).
    Violet = 1,
    /// White (2).
    White = 2,
    /// Red (3).
    Red = 3,
    /// Green (4).
    Green = 4,
    /// Rose (5), for Gaudete and Laetare Sundays.
    Rose = 5,
}

impl LiturgicalColor {
    /// Integer colour code.
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

/// One liturgical observance on one date.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Celebration {
    sequence_id: u32,
    date: Date,
    code: CelebrationCode,
    rank: Rank,
    color: LiturgicalColor,
}

impl Celebration {
    /// Build a celebration.  The sequence id is assigned later by the
    /// generator that emits it.
    pub fn new(date: Date, code: CelebrationCode, rank: Rank, color: LiturgicalColor) -> Self {
        Self {
            sequence_id: 0,
            date,
            code,
            rank,
            color,
        }
    }

    pub(crate) fn with_sequence_id(mut self, id: u32) -> Self {
        self.sequence_id = id;
        self
    }

    /// Position of this entry within the output of the generator that
    /// produced it (1-based).  Not unique across generators.
    pub fn sequence_id(&self) -> u32 {
        self.sequence_id
    }

    /// Calendar date.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Structured identifier.
    pub fn code(&self) -> CelebrationCode {
        self.code
    }

    /// Season of the entry.
    pub fn season(&self) -> Season {
        self.code.season
    }

    /// The special day this entry stands for, if any.
    pub fn qualifier(&self) -> Option<Qualifier> {
        self.code.qualifier
    }

    /// Informational rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Liturgical colour.
    pub fn color(&self) -> LiturgicalColor {
        self.color
    }

    /// 1-based week of the season; 0 if the entry is not numbered.
    pub fn season_week(&self) -> WeekIndex {
        self.code.week
    }

    /// Week of the four-week psalter cycle: `season_week % 4`, with 0
    /// mapped to 4.  Always in `1..=4`.
    pub fn psalter_week(&self) -> u8 {
        match self.code.week % 4 {
            0 => 4,
            w => w,
        }
    }
}

impl std::fmt::Display for Celebration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {} - color {} - psalter {}",
            self.date,
            self.code,
            self.color.code(),
            self.psalter_week()
        )
    }
}
