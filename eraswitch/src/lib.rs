//! # eraswitch - Year and Run-Period Module Switching
//!
//! Analysis code often needs a different module per dataset year (jet energy
//! corrections, scale factors) or per run period of real data (calibration
//! eras). `eraswitch` provides two ready-made dispatchers so that branching
//! does not have to be written by hand.
//!
//! - [`YearSwitcher`]: resolves the dataset year once from the job context and
//!   forwards every event to the module registered for it. A module registered
//!   for an exact version (`2017v2`) wins over one registered for the whole
//!   year (`2017`).
//! - [`RunSwitcher`]: looks up the run period of each event in the year's run
//!   table and forwards the event to the module registered for that period.
//!
//! Both switchers let events pass (`Continue`) when no module applies, and pass
//! module errors through untouched. Both are [`Module`]s themselves, so they
//! nest.
//!
//! ## Quick Start
//!
//! ```rust
//! use eraswitch::{Event, JobContext, Module, ModuleResult, RunPeriod, RunSwitcher, YearSwitcher, from_fn};
//! use std::sync::Arc;
//!
//! struct RecoEvent {
//!     run: u32,
//!     jec_era: &'static str,
//! }
//!
//! impl Event for RecoEvent {
//!     fn run_number(&self) -> u32 {
//!         self.run
//!     }
//! }
//!
//! let mut per_run = RunSwitcher::<RecoEvent>::new("2016");
//! per_run.setup_run(RunPeriod::B, Arc::new(from_fn(|e: &mut RecoEvent| e.jec_era = "BCD")));
//! per_run.setup_run(RunPeriod::H, Arc::new(from_fn(|e: &mut RecoEvent| e.jec_era = "GH")));
//!
//! let ctx = JobContext::new().with("dataset_version", "RunII_102X_v2_2016v3");
//! let mut per_year = YearSwitcher::<RecoEvent>::new(&ctx).unwrap();
//! per_year.setup_2016(Arc::new(per_run));
//!
//! let mut event = RecoEvent { run: 281000, jec_era: "" };
//! assert_eq!(per_year.process(&mut event).unwrap(), ModuleResult::Continue);
//! assert_eq!(event.jec_era, "GH");
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use eraswitch_core::{
    // Error types
    BoxError,
    // Configuration
    Context,
    DATASET_VERSION_KEY,
    // Event
    Event,
    // Module
    FnModule,
    IntoModuleResult,
    JobContext,
    Module,
    ModuleResult,
    // Run periods
    PeriodRange,
    RunPeriod,
    RunTable,
    SharedModule,
    SwitchError,
    // Years
    Year,
    YearKey,
    from_fn,
};

pub mod switch;
pub mod testing;

pub use switch::{RunSwitcher, YearSwitcher};

/// Prelude module - common imports for eraswitch.
///
/// # Usage
///
/// ```rust
/// use eraswitch::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BoxError, Context, Event, JobContext, Module, ModuleResult, RunPeriod, RunSwitcher,
        SharedModule, SwitchError, Year, YearKey, YearSwitcher, from_fn,
    };
}
