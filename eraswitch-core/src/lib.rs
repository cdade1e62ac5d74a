//! # eraswitch-core
//!
//! Core traits and keys for switching analysis modules by dataset year or by
//! data-taking run period.
//!
//! This crate has minimal dependencies and is meant to be imported by analysis
//! code that only needs to implement [`Module`] or describe its event type,
//! without pulling in the switchers themselves.
//!
//! # Building Blocks
//!
//! - [`Module`]: a unit of analysis work. Receives an event, may mutate it,
//!   and returns [`ModuleResult::Continue`] or [`ModuleResult::Stop`].
//! - [`Event`]: the single read the run switcher needs from an event.
//! - [`Context`]: the single read the year switcher needs from job configuration.
//! - [`Year`] / [`YearKey`]: the active dataset tag and the keys modules are
//!   registered under.
//! - [`RunPeriod`] / [`RunTable`]: named run periods and their inclusive
//!   run-number ranges.
//!
//! # Error Types
//!
//! - [`SwitchError`] - Configuration and table construction errors
//! - [`BoxError`] - Errors raised by modules, passed through untouched

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod context;
mod error;
mod event;
mod module;
mod period;
mod response;
mod year;

// Re-exports
pub use context::{Context, DATASET_VERSION_KEY, JobContext};
pub use error::{BoxError, SwitchError};
pub use event::Event;
pub use module::{FnModule, Module, ModuleResult, SharedModule, from_fn};
pub use period::{PeriodRange, RunPeriod, RunTable};
pub use response::IntoModuleResult;
pub use year::{Year, YearKey};
