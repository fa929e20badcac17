//! Regional calendar options.
//!
//! A [`Configuration`] is a fixed set of named boolean switches.  Every
//! option defaults to `false`, and looking up an option that was never set
//! yields that default.  Names that match no option are skipped with a
//! warning.

use std::collections::HashMap;
use std::str::FromStr;

use lit_core::errors::{Error, Result};
use tracing::warn;

/// A regional variant of the General Roman Calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarOption {
    /// Epiphany kept on the Sunday between January 2 and 8 instead of
    /// January 6.
    EpiphanyOnSunday,
    /// Ascension kept on Thursday (Easter + 39) instead of the following
    /// Sunday.
    AscensionOriginal,
    /// Corpus Christi kept on Thursday (Easter + 60) instead of the
    /// following Sunday.
    CorpusOriginal,
    /// The Immaculate Conception keeps December 8 even on an Advent Sunday.
    ImmaculatePrevails,
}

impl CalendarOption {
    /// Every option, in declaration order.
    pub const ALL: [CalendarOption; 4] = [
        CalendarOption::EpiphanyOnSunday,
        CalendarOption::AscensionOriginal,
        CalendarOption::CorpusOriginal,
        CalendarOption::ImmaculatePrevails,
    ];

    /// Canonical option name, as used in string-keyed mappings.
    pub fn name(&self) -> &'static str {
        match self {
            CalendarOption::EpiphanyOnSunday => "EpiphanyOnSunday",
            CalendarOption::AscensionOriginal => "AscensionOriginal",
            CalendarOption::CorpusOriginal => "CorpusOriginal",
            CalendarOption::ImmaculatePrevails => "ImmaculatePrevails",
        }
    }
}

impl std::fmt::Display for CalendarOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CalendarOption {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        CalendarOption::ALL
            .into_iter()
            .find(|o| o.name() == s)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown calendar option {s:?}")))
    }
}

/// The set of regional switches a calendar is generated with.
///
/// ```
/// use lit_calendar::{CalendarOption, Configuration};
///
/// let config = Configuration::default().with(CalendarOption::EpiphanyOnSunday, true);
/// assert!(config.get(CalendarOption::EpiphanyOnSunday));
/// assert!(!config.get(CalendarOption::CorpusOriginal));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "PascalCase", default)
)]
pub struct Configuration {
    epiphany_on_sunday: bool,
    ascension_original: bool,
    corpus_original: bool,
    immaculate_prevails: bool,
}

impl Configuration {
    /// Value of `option`; `false` unless it was set.
    pub fn get(&self, option: CalendarOption) -> bool {
        match option {
            CalendarOption::EpiphanyOnSunday => self.epiphany_on_sunday,
            CalendarOption::AscensionOriginal => self.ascension_original,
            CalendarOption::CorpusOriginal => self.corpus_original,
            CalendarOption::ImmaculatePrevails => self.immaculate_prevails,
        }
    }

    /// Set `option` in place.
    pub fn set(&mut self, option: CalendarOption, value: bool) {
        let slot = match option {
            CalendarOption::EpiphanyOnSunday => &mut self.epiphany_on_sunday,
            CalendarOption::AscensionOriginal => &mut self.ascension_original,
            CalendarOption::CorpusOriginal => &mut self.corpus_original,
            CalendarOption::ImmaculatePrevails => &mut self.immaculate_prevails,
        };
        *slot = value;
    }

    /// Return a copy with `option` set to `value`.
    pub fn with(mut self, option: CalendarOption, value: bool) -> Self {
        self.set(option, value);
        self
    }

    /// Build from `(name, value)` pairs.  Names missing from the input keep
    /// their default; names that are not a [`CalendarOption`] are ignored.
    pub fn from_pairs<K, I>(pairs: I) -> Self
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, bool)>,
    {
        pairs.into_iter().fold(Self::default(), |config, (name, value)| {
            match name.as_ref().parse::<CalendarOption>() {
                Ok(option) => config.with(option, value),
                Err(err) => {
                    warn!(name = name.as_ref(), %err, "ignoring calendar option");
                    config
                }
            }
        })
    }

    /// Build from a string-keyed mapping such as `{"EpiphanyOnSunday": true}`.
    pub fn from_map(map: &HashMap<String, bool>) -> Self {
        Self::from_pairs(map.iter().map(|(k, v)| (k.as_str(), *v)))
    }

    /// Epiphany moves to the Sunday between January 2 and 8.
    pub fn epiphany_on_sunday(&self) -> bool {
        self.epiphany_on_sunday
    }

    /// Ascension stays on Thursday.
    pub fn ascension_original(&self) -> bool {
        self.ascension_original
    }

    /// Corpus Christi stays on Thursday.
    pub fn corpus_original(&self) -> bool {
        self.corpus_original
    }

    /// December 8 is kept even on an Advent Sunday.
    pub fn immaculate_prevails(&self) -> bool {
        self.immaculate_prevails
    }
}
