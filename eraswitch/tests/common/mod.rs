use eraswitch::{BoxError, Event, Module, ModuleResult};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Test Event Types
// ============================================================================

#[derive(Clone, Debug, Default)]
pub struct TestEvent {
    pub run: u32,
    pub applied: Vec<&'static str>,
}

impl TestEvent {
    pub fn at_run(run: u32) -> Self {
        Self {
            run,
            applied: Vec::new(),
        }
    }
}

impl Event for TestEvent {
    fn run_number(&self) -> u32 {
        self.run
    }
}

// ============================================================================
// Test Modules
// ============================================================================

/// Appends its name to the event, so tests can see which branch ran.
pub struct StampModule {
    pub name: &'static str,
    pub call_count: Arc<AtomicUsize>,
    pub result: ModuleResult,
}

impl StampModule {
    pub fn new(name: &'static str) -> Arc<Self> {
        Arc::new(Self {
            name,
            call_count: Arc::new(AtomicUsize::new(0)),
            result: ModuleResult::Continue,
        })
    }

    pub fn rejecting(name: &'static str) -> Arc<Self> {
        Arc::new(Self {
            name,
            call_count: Arc::new(AtomicUsize::new(0)),
            result: ModuleResult::Stop,
        })
    }

    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

impl Module<TestEvent> for StampModule {
    fn process(&self, event: &mut TestEvent) -> Result<ModuleResult, BoxError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        event.applied.push(self.name);
        Ok(self.result)
    }
}
