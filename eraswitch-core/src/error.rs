//! Error types for eraswitch.
//!
//! [`SwitchError`] covers the failures the switchers raise themselves:
//! unresolvable configuration, unknown key names and malformed run tables.
//! Failures raised by modules are carried as [`BoxError`] and never wrapped.

use crate::period::RunPeriod;
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised by the switchers and their supporting types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SwitchError {
    /// The job context does not provide a required setting.
    #[error("missing context setting: {0}")]
    MissingSetting(String),

    /// The dataset version does not contain any known year tag.
    #[error("cannot determine year from dataset version: {0:?}")]
    UnknownYear(String),

    /// A string is not the name of any run period.
    #[error("unknown run period: {0:?}")]
    UnknownPeriod(String),

    /// A run range whose first run lies after its last run.
    #[error("invalid run range for period {period}: {first} > {last}")]
    InvalidRange {
        /// Period the range belongs to.
        period: RunPeriod,
        /// First run of the range.
        first: u32,
        /// Last run of the range.
        last: u32,
    },

    /// The same period appears twice in one table.
    #[error("run period {0} listed more than once")]
    DuplicatePeriod(RunPeriod),

    /// Two periods share at least one run number.
    #[error("run periods {first} and {second} overlap")]
    OverlappingPeriods {
        /// Period listed earlier in the table.
        first: RunPeriod,
        /// Period listed later in the table.
        second: RunPeriod,
    },
}
