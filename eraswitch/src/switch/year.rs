//! Module selection by dataset year.

use eraswitch_core::{
    BoxError, Context, Module, ModuleResult, SharedModule, SwitchError, Year, YearKey,
};
use std::{collections::HashMap, fmt, sync::Arc, sync::OnceLock};

/// Runs the module registered for the job's dataset year.
///
/// Modules are registered per [`YearKey`]. For an active year of `2017v2`, a
/// module registered under `2017v2` is used if present, otherwise the one under
/// `2017`. Without either, events pass untouched.
///
/// The choice is made on the first processed event and kept for the rest of the
/// job. Registrations made after that point are stored but never used.
///
/// # Example
///
/// ```rust
/// use eraswitch::{JobContext, Module, YearSwitcher, testing::CountingModule};
/// use std::sync::Arc;
///
/// let ctx = JobContext::new().with("dataset_version", "2017v2");
/// let mut switcher = YearSwitcher::<()>::new(&ctx).unwrap();
///
/// let generic = Arc::new(CountingModule::new());
/// let specific = Arc::new(CountingModule::new());
/// switcher.setup_2017(generic.clone());
/// switcher.setup_2017v2(specific.clone());
///
/// switcher.process(&mut ()).unwrap();
/// assert_eq!(specific.count(), 1);
/// assert_eq!(generic.count(), 0);
/// ```
pub struct YearSwitcher<E> {
    year: Year,
    modules: HashMap<YearKey, SharedModule<E>>,
    selected: OnceLock<Option<(YearKey, SharedModule<E>)>>,
}

impl<E: 'static> YearSwitcher<E> {
    /// Create a switcher for the year named by the context's `dataset_version`.
    ///
    /// Fails if the setting is missing or names no known year.
    pub fn new<C: Context + ?Sized>(ctx: &C) -> Result<Self, SwitchError> {
        let year = Year::from_context(ctx)?;
        Ok(Self::for_year(year))
    }

    /// Create a switcher for a year the caller already resolved.
    pub fn for_year(year: Year) -> Self {
        #[cfg(feature = "tracing")]
        {
            tracing::debug!(%year, "year switcher configured");
        }
        Self {
            year,
            modules: HashMap::new(),
            selected: OnceLock::new(),
        }
    }

    /// The active dataset year.
    pub fn year(&self) -> Year {
        self.year
    }

    /// Whether the module choice has been made.
    pub fn is_resolved(&self) -> bool {
        self.selected.get().is_some()
    }

    /// Whether a module is registered under `key`.
    pub fn is_registered(&self, key: YearKey) -> bool {
        self.modules.contains_key(&key)
    }

    /// The key of the module in use.
    ///
    /// `None` until the first event is processed, or when no registered module
    /// applies to the active year. Never triggers the choice itself.
    pub fn selected_key(&self) -> Option<YearKey> {
        self.selected
            .get()
            .and_then(|selected| selected.as_ref().map(|(key, _)| *key))
    }

    /// Register `module` under `key`, replacing any earlier registration.
    pub fn setup(&mut self, key: YearKey, module: SharedModule<E>) -> &mut Self {
        #[cfg(feature = "tracing")]
        {
            if !key.applies_to(self.year) {
                tracing::debug!(%key, year = %self.year, "module registered for inactive year");
            } else if self.is_resolved() {
                tracing::debug!(%key, "module registered after selection; ignored");
            }
        }
        self.modules.insert(key, module);
        self
    }

    /// Register the module for any 2016 version.
    pub fn setup_2016(&mut self, module: SharedModule<E>) -> &mut Self {
        self.setup(YearKey::Y2016, module)
    }

    /// Register the module for 2016v2. Takes precedence over [`setup_2016`](Self::setup_2016).
    pub fn setup_2016v2(&mut self, module: SharedModule<E>) -> &mut Self {
        self.setup(YearKey::Y2016v2, module)
    }

    /// Register the module for 2016v3. Takes precedence over [`setup_2016`](Self::setup_2016).
    pub fn setup_2016v3(&mut self, module: SharedModule<E>) -> &mut Self {
        self.setup(YearKey::Y2016v3, module)
    }

    /// Register the module for any 2017 version.
    pub fn setup_2017(&mut self, module: SharedModule<E>) -> &mut Self {
        self.setup(YearKey::Y2017, module)
    }

    /// Register the module for 2017v1. Takes precedence over [`setup_2017`](Self::setup_2017).
    pub fn setup_2017v1(&mut self, module: SharedModule<E>) -> &mut Self {
        self.setup(YearKey::Y2017v1, module)
    }

    /// Register the module for 2017v2. Takes precedence over [`setup_2017`](Self::setup_2017).
    pub fn setup_2017v2(&mut self, module: SharedModule<E>) -> &mut Self {
        self.setup(YearKey::Y2017v2, module)
    }

    /// Register the module for 2018.
    pub fn setup_2018(&mut self, module: SharedModule<E>) -> &mut Self {
        self.setup(YearKey::Y2018, module)
    }

    fn selection(&self) -> Option<&(YearKey, SharedModule<E>)> {
        self.selected.get_or_init(|| self.resolve()).as_ref()
    }

    fn resolve(&self) -> Option<(YearKey, SharedModule<E>)> {
        let found = self.year.candidate_keys().find_map(|key| {
            self.modules
                .get(&key)
                .map(|module| (key, Arc::clone(module)))
        });

        #[cfg(feature = "tracing")]
        {
            match &found {
                Some((key, _)) => tracing::debug!(year = %self.year, %key, "module selected"),
                None => tracing::debug!(year = %self.year, "no module for year; events pass"),
            }
        }

        found
    }
}

impl<E: 'static> Module<E> for YearSwitcher<E> {
    fn process(&self, event: &mut E) -> Result<ModuleResult, BoxError> {
        match self.selection() {
            Some((_, module)) => module.process(event),
            None => Ok(ModuleResult::Continue),
        }
    }
}

impl<E> fmt::Debug for YearSwitcher<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<_> = self.modules.keys().collect();
        keys.sort();
        f.debug_struct("YearSwitcher")
            .field("year", &self.year)
            .field("registered", &keys)
            .field(
                "selected",
                &self.selected.get().map(|s| s.as_ref().map(|(key, _)| key)),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CountingModule;

    #[test]
    fn test_falls_back_to_year_module() {
        let generic = Arc::new(CountingModule::new());
        let mut switcher = YearSwitcher::<()>::for_year(Year::Y2016v3);
        switcher.setup_2016(generic.clone());
        switcher.setup_2016v2(Arc::new(CountingModule::new()));

        switcher.process(&mut ()).unwrap();
        assert_eq!(generic.count(), 1);
        assert_eq!(switcher.selected_key(), Some(YearKey::Y2016));
    }

    #[test]
    fn test_resolution_is_lazy() {
        let mut switcher = YearSwitcher::<()>::for_year(Year::Y2018);
        assert!(!switcher.is_resolved());
        switcher.setup_2018(Arc::new(CountingModule::new()));
        assert!(switcher.is_registered(YearKey::Y2018));
        assert!(!switcher.is_resolved());
        assert_eq!(switcher.selected_key(), None);
        assert!(!switcher.is_resolved());

        switcher.process(&mut ()).unwrap();
        assert!(switcher.is_resolved());
        assert_eq!(switcher.selected_key(), Some(YearKey::Y2018));
    }

    #[test]
    fn test_reregistration_overwrites() {
        let first = Arc::new(CountingModule::new());
        let second = Arc::new(CountingModule::new());
        let mut switcher = YearSwitcher::<()>::for_year(Year::Y2017v1);
        switcher.setup_2017v1(first.clone()).setup_2017v1(second.clone());

        switcher.process(&mut ()).unwrap();
        assert_eq!(first.count(), 0);
        assert_eq!(second.count(), 1);
        // The overwritten module is released by the switcher.
        assert_eq!(Arc::strong_count(&first), 1);
    }

    #[test]
    fn test_debug_lists_keys() {
        let mut switcher = YearSwitcher::<()>::for_year(Year::Y2017v2);
        switcher.setup_2017(Arc::new(CountingModule::new()));
        let debug = format!("{switcher:?}");
        assert!(debug.contains("Y2017v2"));
        assert!(debug.contains("Y2017"));
    }
}
