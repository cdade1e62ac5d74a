//! Module selection by run period.

use eraswitch_core::{
    BoxError, Event, Module, ModuleResult, RunPeriod, RunTable, SharedModule, SwitchError, Year,
};
use std::{collections::HashMap, fmt};

/// Runs the module registered for the run period of each event.
///
/// The run table of the configured year maps run numbers to periods. Events
/// whose run lies outside every period, or whose period has no module, pass
/// untouched.
///
/// # Example
///
/// ```rust
/// use eraswitch::{Event, Module, RunPeriod, RunSwitcher, testing::CountingModule};
/// use std::sync::Arc;
///
/// struct Run(u32);
///
/// impl Event for Run {
///     fn run_number(&self) -> u32 {
///         self.0
///     }
/// }
///
/// let period_b = Arc::new(CountingModule::new());
/// let mut switcher = RunSwitcher::<Run>::new("2016");
/// switcher.setup_run(RunPeriod::B, period_b.clone());
///
/// switcher.process(&mut Run(275376)).unwrap(); // last run of 2016B
/// switcher.process(&mut Run(276000)).unwrap(); // 2016C, nothing registered
/// assert_eq!(period_b.count(), 1);
/// ```
pub struct RunSwitcher<E> {
    year: String,
    table: RunTable,
    modules: HashMap<RunPeriod, SharedModule<E>>,
}

impl<E: 'static> RunSwitcher<E> {
    /// Create a switcher using the built-in run table of `year`.
    ///
    /// A year without a built-in table gets an empty one: every event passes.
    pub fn new(year: impl Into<String>) -> Self {
        let year = year.into();
        let table = RunTable::builtin(&year).unwrap_or_else(|| {
            #[cfg(feature = "tracing")]
            {
                tracing::warn!(%year, "no run table for year; all events pass");
            }
            RunTable::empty()
        });
        Self::with_table(year, table)
    }

    /// Create a switcher using the built-in run table of a dataset year's
    /// calendar year. Versions of the same year share one table.
    pub fn for_year(year: Year) -> Self {
        Self::new(year.calendar_year())
    }

    /// Create a switcher over a caller-supplied run table.
    pub fn with_table(year: impl Into<String>, table: RunTable) -> Self {
        let year = year.into();
        #[cfg(feature = "tracing")]
        {
            tracing::debug!(%year, periods = table.len(), "run switcher configured");
        }
        Self {
            year,
            table,
            modules: HashMap::new(),
        }
    }

    /// The configured data-taking year.
    pub fn year(&self) -> &str {
        &self.year
    }

    /// The run table in use.
    pub fn table(&self) -> &RunTable {
        &self.table
    }

    /// The period containing `run`, if any.
    pub fn period_of(&self, run: u32) -> Option<RunPeriod> {
        self.table.period_of(run)
    }

    /// Whether a module is registered for `period`.
    pub fn is_registered(&self, period: RunPeriod) -> bool {
        self.modules.contains_key(&period)
    }

    /// Register `module` for `period`, replacing any earlier registration.
    ///
    /// A period missing from the run table is accepted but never selected.
    pub fn setup_run(&mut self, period: RunPeriod, module: SharedModule<E>) -> &mut Self {
        #[cfg(feature = "tracing")]
        {
            if !self.table.contains_period(period) {
                tracing::debug!(%period, year = %self.year, "module registered for period outside run table");
            }
        }
        self.modules.insert(period, module);
        self
    }

    /// Register `module` for the period called `name`.
    ///
    /// Fails only if `name` is not a run period name at all.
    pub fn setup_run_named(
        &mut self,
        name: &str,
        module: SharedModule<E>,
    ) -> Result<&mut Self, SwitchError> {
        let period = name.parse()?;
        Ok(self.setup_run(period, module))
    }

    fn module_for(&self, run: u32) -> Option<&SharedModule<E>> {
        let period = self.table.period_of(run);

        #[cfg(feature = "tracing")]
        {
            tracing::trace!(run, period = ?period, "run period lookup");
        }

        period.and_then(|period| self.modules.get(&period))
    }
}

impl<E: Event + 'static> Module<E> for RunSwitcher<E> {
    fn process(&self, event: &mut E) -> Result<ModuleResult, BoxError> {
        match self.module_for(event.run_number()) {
            Some(module) => module.process(event),
            None => Ok(ModuleResult::Continue),
        }
    }
}

impl<E> fmt::Debug for RunSwitcher<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut periods: Vec<_> = self.modules.keys().collect();
        periods.sort();
        f.debug_struct("RunSwitcher")
            .field("year", &self.year)
            .field("table", &self.table)
            .field("registered", &periods)
            .finish()
    }
}
