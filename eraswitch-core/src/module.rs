//! # Analysis Modules
//!
//! A [`Module`] is the unit of analysis work the switchers dispatch to. It
//! receives an event, may mutate it, and decides whether the event continues
//! down the host pipeline (`Continue`) or is dropped (`Stop`).
//!
//! The switchers are modules themselves, so they nest: a run switcher can be
//! registered as the 2016 module of a year switcher.
//!
//! # Shared Ownership
//!
//! Modules are registered as [`SharedModule`] (`Arc<dyn Module<E>>`). The caller
//! may keep its own handle; the module lives until the last holder drops it.

use crate::{error::BoxError, response::IntoModuleResult};
use std::sync::Arc;

/// Result of module execution indicating whether the event continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModuleResult {
    /// The event passed this module; continue with the next one.
    #[default]
    Continue,
    /// The event was rejected; stop processing it.
    Stop,
}

impl ModuleResult {
    /// Returns `true` for [`ModuleResult::Continue`].
    pub const fn is_continue(self) -> bool {
        matches!(self, ModuleResult::Continue)
    }

    /// Returns `true` for [`ModuleResult::Stop`].
    pub const fn is_stop(self) -> bool {
        matches!(self, ModuleResult::Stop)
    }
}

/// `true` keeps the event, matching the host's `bool process(event)` convention.
impl From<bool> for ModuleResult {
    fn from(keep: bool) -> Self {
        if keep {
            ModuleResult::Continue
        } else {
            ModuleResult::Stop
        }
    }
}

impl From<ModuleResult> for bool {
    fn from(result: ModuleResult) -> Self {
        result.is_continue()
    }
}

/// A unit of analysis work operating on events of type `E`.
///
/// Execution is synchronous: `process` runs to completion before the host
/// moves on to the next event.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Module<{E}>`",
    label = "missing `Module` implementation",
    note = "Modules must implement `process` for the specific event type `{E}`."
)]
pub trait Module<E>: Send + Sync + 'static {
    /// Process one event.
    fn process(&self, event: &mut E) -> Result<ModuleResult, BoxError>;
}

/// Reference-counted handle to a registered module.
pub type SharedModule<E> = Arc<dyn Module<E>>;

impl<E, M: Module<E> + ?Sized> Module<E> for Arc<M> {
    fn process(&self, event: &mut E) -> Result<ModuleResult, BoxError> {
        (**self).process(event)
    }
}

impl<E, M: Module<E> + ?Sized> Module<E> for Box<M> {
    fn process(&self, event: &mut E) -> Result<ModuleResult, BoxError> {
        (**self).process(event)
    }
}

/// A module backed by a closure. Created with [`from_fn`].
pub struct FnModule<F> {
    f: F,
}

/// Wrap a closure as a [`Module`].
///
/// The closure may return anything implementing [`IntoModuleResult`]:
/// `bool`, `()`, [`ModuleResult`] or a `Result` of those.
///
/// # Example
///
/// ```rust
/// use eraswitch_core::{Module, ModuleResult, from_fn};
///
/// let min_jets = from_fn(|njets: &mut usize| *njets >= 2);
/// assert_eq!(min_jets.process(&mut 3).unwrap(), ModuleResult::Continue);
/// assert_eq!(min_jets.process(&mut 1).unwrap(), ModuleResult::Stop);
/// ```
pub fn from_fn<F>(f: F) -> FnModule<F> {
    FnModule { f }
}

impl<E, F, R> Module<E> for FnModule<F>
where
    F: Fn(&mut E) -> R + Send + Sync + 'static,
    R: IntoModuleResult,
{
    fn process(&self, event: &mut E) -> Result<ModuleResult, BoxError> {
        (self.f)(event).into_module_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct TestEvent {
        weight: f64,
    }

    struct Reweight(f64);

    impl Module<TestEvent> for Reweight {
        fn process(&self, event: &mut TestEvent) -> Result<ModuleResult, BoxError> {
            event.weight *= self.0;
            Ok(ModuleResult::Continue)
        }
    }

    #[test]
    fn test_module_result_from_bool() {
        assert_eq!(ModuleResult::from(true), ModuleResult::Continue);
        assert_eq!(ModuleResult::from(false), ModuleResult::Stop);
        assert!(bool::from(ModuleResult::Continue));
        assert!(!bool::from(ModuleResult::Stop));
    }

    #[test]
    fn test_module_mutates_event() {
        let mut event = TestEvent { weight: 1.0 };
        let result = Reweight(0.5).process(&mut event).unwrap();
        assert!(result.is_continue());
        assert_eq!(event.weight, 0.5);
    }

    #[test]
    fn test_shared_module_keeps_caller_handle() {
        let module = Arc::new(Reweight(2.0));
        let shared: SharedModule<TestEvent> = module.clone();
        assert_eq!(Arc::strong_count(&module), 2);

        let mut event = TestEvent { weight: 1.5 };
        shared.process(&mut event).unwrap();
        assert_eq!(event.weight, 3.0);

        drop(shared);
        assert_eq!(Arc::strong_count(&module), 1);
    }

    #[test]
    fn test_fn_module_propagates_error() {
        let module = from_fn(|_: &mut TestEvent| -> Result<bool, std::io::Error> {
            Err(std::io::Error::other("bad jet collection"))
        });
        let err = module.process(&mut TestEvent { weight: 1.0 }).unwrap_err();
        assert_eq!(err.to_string(), "bad jet collection");
    }
}
