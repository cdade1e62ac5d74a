//! Run periods and their run-number ranges.
//!
//! A data-taking year is split into named periods (`B`, `C`, ...) sharing
//! detector and calibration conditions. A [`RunTable`] lists the inclusive
//! run-number range of every period in one year.

use crate::error::SwitchError;
use std::{borrow::Cow, fmt, str::FromStr};

/// A named run period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RunPeriod {
    /// Period A.
    A,
    /// Period B.
    B,
    /// Period C.
    C,
    /// Period D.
    D,
    /// Period E.
    E,
    /// Period F.
    F,
    /// Period G.
    G,
    /// Period H.
    H,
}

impl RunPeriod {
    /// All run periods.
    pub const ALL: [RunPeriod; 8] = [
        RunPeriod::A,
        RunPeriod::B,
        RunPeriod::C,
        RunPeriod::D,
        RunPeriod::E,
        RunPeriod::F,
        RunPeriod::G,
        RunPeriod::H,
    ];

    /// Period name, e.g. `"B"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            RunPeriod::A => "A",
            RunPeriod::B => "B",
            RunPeriod::C => "C",
            RunPeriod::D => "D",
            RunPeriod::E => "E",
            RunPeriod::F => "F",
            RunPeriod::G => "G",
            RunPeriod::H => "H",
        }
    }
}

impl fmt::Display for RunPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RunPeriod {
    type Err = SwitchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RunPeriod::ALL
            .into_iter()
            .find(|period| period.as_str() == s)
            .ok_or_else(|| SwitchError::UnknownPeriod(s.to_string()))
    }
}

/// The inclusive run-number range of one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PeriodRange {
    /// Period name.
    pub period: RunPeriod,
    /// First run of the period.
    pub first: u32,
    /// Last run of the period.
    pub last: u32,
}

impl PeriodRange {
    /// Create a range. Bounds are checked when the range enters a [`RunTable`].
    pub const fn new(period: RunPeriod, first: u32, last: u32) -> Self {
        Self {
            period,
            first,
            last,
        }
    }

    /// Whether `run` lies within `[first, last]`.
    pub const fn contains(&self, run: u32) -> bool {
        self.first <= run && run <= self.last
    }

    const fn overlaps(&self, other: &PeriodRange) -> bool {
        self.first <= other.last && other.first <= self.last
    }
}

/// Run-number ranges of the periods of one year.
///
/// Tables are checked on construction: every range is well formed, each period
/// appears once, and no run number belongs to two periods. Lookups can therefore
/// return the first match.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunTable {
    ranges: Cow<'static, [PeriodRange]>,
}

impl RunTable {
    /// Build a table from a list of ranges.
    pub fn new(ranges: Vec<PeriodRange>) -> Result<Self, SwitchError> {
        validate(&ranges)?;
        Ok(Self {
            ranges: Cow::Owned(ranges),
        })
    }

    /// A table with no periods. Every run falls outside it.
    pub const fn empty() -> Self {
        Self {
            ranges: Cow::Borrowed(&[]),
        }
    }

    /// The compiled-in table for a data-taking year (`"2016"`, `"2017"`, `"2018"`).
    pub fn builtin(year: &str) -> Option<Self> {
        BUILTIN_TABLES.get(year).map(|ranges| Self {
            ranges: Cow::Borrowed(*ranges),
        })
    }

    /// Years with a compiled-in table.
    pub fn builtin_years() -> impl Iterator<Item = &'static str> {
        BUILTIN_TABLES.keys().copied()
    }

    /// The period containing `run`, if any.
    pub fn period_of(&self, run: u32) -> Option<RunPeriod> {
        self.ranges
            .iter()
            .find(|range| range.contains(run))
            .map(|range| range.period)
    }

    /// The range of `period`, if the table has it.
    pub fn range_of(&self, period: RunPeriod) -> Option<&PeriodRange> {
        self.ranges.iter().find(|range| range.period == period)
    }

    /// Whether the table has a range for `period`.
    pub fn contains_period(&self, period: RunPeriod) -> bool {
        self.range_of(period).is_some()
    }

    /// Periods in table order.
    pub fn periods(&self) -> impl Iterator<Item = RunPeriod> + '_ {
        self.ranges.iter().map(|range| range.period)
    }

    /// Ranges in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, PeriodRange> {
        self.ranges.iter()
    }

    /// Number of periods.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Check if the table has no periods.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

impl<'a> IntoIterator for &'a RunTable {
    type Item = &'a PeriodRange;
    type IntoIter = std::slice::Iter<'a, PeriodRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn validate(ranges: &[PeriodRange]) -> Result<(), SwitchError> {
    for (i, range) in ranges.iter().enumerate() {
        if range.first > range.last {
            return Err(SwitchError::InvalidRange {
                period: range.period,
                first: range.first,
                last: range.last,
            });
        }
        for earlier in &ranges[..i] {
            if earlier.period == range.period {
                return Err(SwitchError::DuplicatePeriod(range.period));
            }
            if earlier.overlaps(range) {
                return Err(SwitchError::OverlappingPeriods {
                    first: earlier.period,
                    second: range.period,
                });
            }
        }
    }
    Ok(())
}

static BUILTIN_TABLES: phf::Map<&'static str, &'static [PeriodRange]> = phf::phf_map! {
    "2016" => &[
        PeriodRange::new(RunPeriod::B, 272007, 275376),
        PeriodRange::new(RunPeriod::C, 275657, 276283),
        PeriodRange::new(RunPeriod::D, 276315, 276811),
        PeriodRange::new(RunPeriod::E, 276831, 277420),
        PeriodRange::new(RunPeriod::F, 277772, 278808),
        PeriodRange::new(RunPeriod::G, 278820, 280385),
        PeriodRange::new(RunPeriod::H, 280919, 284044),
    ],
    "2017" => &[
        PeriodRange::new(RunPeriod::B, 297020, 299329),
        PeriodRange::new(RunPeriod::C, 299337, 302029),
        PeriodRange::new(RunPeriod::D, 302030, 303434),
        PeriodRange::new(RunPeriod::E, 303435, 304826),
        PeriodRange::new(RunPeriod::F, 304911, 306462),
    ],
    "2018" => &[
        PeriodRange::new(RunPeriod::A, 315252, 316995),
        PeriodRange::new(RunPeriod::B, 316998, 319312),
        PeriodRange::new(RunPeriod::C, 319313, 320393),
        PeriodRange::new(RunPeriod::D, 320394, 325273),
    ],
};
