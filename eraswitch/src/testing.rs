//! Testing utilities for eraswitch.
//!
//! This module provides modules that make it easy to verify which branch a
//! switcher took.
//!
//! # Features
//!
//! - [`CountingModule`]: Counts invocations and returns a fixed result
//! - [`RecordingModule`]: Records a copy of every event it receives
//! - [`FailingModule`]: Fails every call with a [`ModuleFailure`]

use eraswitch_core::{BoxError, Module, ModuleResult};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use thiserror::Error;

// ============================================================================
// Counting Module
// ============================================================================

/// A module that counts invocations.
///
/// # Example
///
/// ```rust
/// use eraswitch::{Module, testing::CountingModule};
///
/// let counter = CountingModule::new();
/// counter.process(&mut ()).unwrap();
/// assert_eq!(counter.count(), 1);
/// ```
pub struct CountingModule {
    count: Arc<AtomicUsize>,
    result: ModuleResult,
}

impl CountingModule {
    /// Create a new counting module that returns `Continue`.
    pub fn new() -> Self {
        Self::with_result(ModuleResult::Continue)
    }

    /// Create a counting module that returns a specific result.
    pub fn with_result(result: ModuleResult) -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
            result,
        }
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl Default for CountingModule {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CountingModule {
    fn clone(&self) -> Self {
        Self {
            count: self.count.clone(),
            result: self.result,
        }
    }
}

impl<E: 'static> Module<E> for CountingModule {
    fn process(&self, _event: &mut E) -> Result<ModuleResult, BoxError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(self.result)
    }
}

// ============================================================================
// Recording Module
// ============================================================================

/// A module that records a copy of every event it receives.
///
/// Clones share the same record, so a clone can be registered while the
/// original is kept for inspection.
pub struct RecordingModule<E: Clone> {
    events: Arc<Mutex<Vec<E>>>,
    result: ModuleResult,
}

impl<E: Clone> RecordingModule<E> {
    /// Create a new recording module that returns `Continue`.
    pub fn new() -> Self {
        Self::with_result(ModuleResult::Continue)
    }

    /// Create a recording module that returns a specific result.
    pub fn with_result(result: ModuleResult) -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            result,
        }
    }

    /// Get a clone of the recorded events.
    pub fn events(&self) -> Vec<E> {
        self.events.lock().unwrap().clone()
    }

    /// Get the number of recorded events.
    pub fn count(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// Clear all recorded events.
    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

impl<E: Clone> Default for RecordingModule<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone> Clone for RecordingModule<E> {
    fn clone(&self) -> Self {
        Self {
            events: self.events.clone(),
            result: self.result,
        }
    }
}

impl<E: Clone + Send + 'static> Module<E> for RecordingModule<E> {
    fn process(&self, event: &mut E) -> Result<ModuleResult, BoxError> {
        self.events.lock().unwrap().push(event.clone());
        Ok(self.result)
    }
}

// ============================================================================
// Failing Module
// ============================================================================

/// The error raised by [`FailingModule`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("module failure: {0}")]
pub struct ModuleFailure(pub String);

/// A module that fails every call.
pub struct FailingModule {
    message: String,
    calls: Arc<AtomicUsize>,
}

impl FailingModule {
    /// Create a module failing with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get the number of calls made.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<E: 'static> Module<E> for FailingModule {
    fn process(&self, _event: &mut E) -> Result<ModuleResult, BoxError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(Box::new(ModuleFailure(self.message.clone())))
    }
}
