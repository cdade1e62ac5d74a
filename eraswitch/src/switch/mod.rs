//! # Switchers
//!
//! Modules that forward each event to one of several registered modules.
//!
//! | Switcher | Key | Resolved |
//! |----------|-----|----------|
//! | [`YearSwitcher`] | dataset year/version | once, on the first event |
//! | [`RunSwitcher`] | run period of the event | on every event |
//!
//! The year of a job never changes, so the year switcher caches its choice.
//! The run number changes from event to event, so the run switcher does not.

mod run;
mod year;

pub use run::RunSwitcher;
pub use year::YearSwitcher;
