//! Dataset years and the keys modules are registered under.
//!
//! [`Year`] is the tag a job runs with. It always names a concrete conditions
//! version (`2016v3`), or a year that only ever had one (`2018`).
//! [`YearKey`] is what a module is registered under. It is either a whole year
//! (`2016`) or one version of it (`2016v3`). Each `Year` maps to at most two
//! keys, tried most specific first.

use crate::{
    context::{Context, DATASET_VERSION_KEY},
    error::SwitchError,
};
use std::{fmt, str::FromStr};

/// The dataset year/version a job runs over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Year {
    /// 2016 legacy, second processing.
    Y2016v2,
    /// 2016 legacy, third processing.
    Y2016v3,
    /// 2017, first processing.
    Y2017v1,
    /// 2017, second processing.
    Y2017v2,
    /// 2018.
    Y2018,
}

impl Year {
    /// All known years, in the order dataset versions are scanned.
    pub const ALL: [Year; 5] = [
        Year::Y2016v2,
        Year::Y2016v3,
        Year::Y2017v1,
        Year::Y2017v2,
        Year::Y2018,
    ];

    /// Tag string as it appears in dataset versions.
    pub const fn as_str(self) -> &'static str {
        match self {
            Year::Y2016v2 => "2016v2",
            Year::Y2016v3 => "2016v3",
            Year::Y2017v1 => "2017v1",
            Year::Y2017v2 => "2017v2",
            Year::Y2018 => "2018",
        }
    }

    /// Calendar year without the version suffix.
    pub const fn calendar_year(self) -> &'static str {
        self.year_key().as_str()
    }

    /// Key for modules registered against this exact version.
    ///
    /// `None` when the year has no versions of its own.
    pub const fn version_key(self) -> Option<YearKey> {
        match self {
            Year::Y2016v2 => Some(YearKey::Y2016v2),
            Year::Y2016v3 => Some(YearKey::Y2016v3),
            Year::Y2017v1 => Some(YearKey::Y2017v1),
            Year::Y2017v2 => Some(YearKey::Y2017v2),
            Year::Y2018 => None,
        }
    }

    /// Key for modules registered against the whole year.
    pub const fn year_key(self) -> YearKey {
        match self {
            Year::Y2016v2 | Year::Y2016v3 => YearKey::Y2016,
            Year::Y2017v1 | Year::Y2017v2 => YearKey::Y2017,
            Year::Y2018 => YearKey::Y2018,
        }
    }

    /// Registration keys to try for this year, most specific first.
    pub fn candidate_keys(self) -> impl Iterator<Item = YearKey> {
        self.version_key()
            .into_iter()
            .chain(std::iter::once(self.year_key()))
    }

    /// Find the year tag inside a dataset version string.
    ///
    /// Dataset versions carry the tag somewhere in their name
    /// (`RunII_102X_v2_2017v2`), so the first known tag found as a substring wins.
    pub fn from_dataset_version(version: &str) -> Result<Year, SwitchError> {
        Year::ALL
            .into_iter()
            .find(|year| version.contains(year.as_str()))
            .ok_or_else(|| SwitchError::UnknownYear(version.to_string()))
    }

    /// Resolve the year from the job's `dataset_version` setting.
    pub fn from_context<C: Context + ?Sized>(ctx: &C) -> Result<Year, SwitchError> {
        let version = ctx
            .get(DATASET_VERSION_KEY)
            .ok_or_else(|| SwitchError::MissingSetting(DATASET_VERSION_KEY.to_string()))?;
        Year::from_dataset_version(version)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Year {
    type Err = SwitchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Year::ALL
            .into_iter()
            .find(|year| year.as_str() == s)
            .ok_or_else(|| SwitchError::UnknownYear(s.to_string()))
    }
}

/// Key a module is registered under in a year switcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum YearKey {
    /// Any 2016 version.
    Y2016,
    /// 2016v2 only.
    Y2016v2,
    /// 2016v3 only.
    Y2016v3,
    /// Any 2017 version.
    Y2017,
    /// 2017v1 only.
    Y2017v1,
    /// 2017v2 only.
    Y2017v2,
    /// 2018.
    Y2018,
}

impl YearKey {
    /// All registration keys.
    pub const ALL: [YearKey; 7] = [
        YearKey::Y2016,
        YearKey::Y2016v2,
        YearKey::Y2016v3,
        YearKey::Y2017,
        YearKey::Y2017v1,
        YearKey::Y2017v2,
        YearKey::Y2018,
    ];

    /// Key name, e.g. `"2017"` or `"2017v2"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            YearKey::Y2016 => "2016",
            YearKey::Y2016v2 => "2016v2",
            YearKey::Y2016v3 => "2016v3",
            YearKey::Y2017 => "2017",
            YearKey::Y2017v1 => "2017v1",
            YearKey::Y2017v2 => "2017v2",
            YearKey::Y2018 => "2018",
        }
    }

    /// Whether a module under this key is a candidate for `year`.
    pub fn applies_to(self, year: Year) -> bool {
        year.candidate_keys().any(|key| key == self)
    }
}

impl fmt::Display for YearKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for YearKey {
    type Err = SwitchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        YearKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| SwitchError::UnknownYear(s.to_string()))
    }
}
