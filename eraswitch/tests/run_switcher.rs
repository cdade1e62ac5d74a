mod common;

use common::{StampModule, TestEvent};
use eraswitch::{
    Module, ModuleResult, RunPeriod, RunSwitcher, RunTable,
    testing::{FailingModule, ModuleFailure, RecordingModule},
};
use std::sync::Arc;

fn range_2016(period: RunPeriod) -> (u32, u32) {
    let table = RunTable::builtin("2016").unwrap();
    let range = table.range_of(period).unwrap();
    (range.first, range.last)
}

#[test]
fn test_unregistered_period_passes() {
    let m = StampModule::new("B");
    let mut switcher = RunSwitcher::<TestEvent>::new("2016");
    switcher.setup_run(RunPeriod::B, m.clone());

    let (first, last) = range_2016(RunPeriod::C);
    for run in [first, (first + last) / 2, last] {
        let mut event = TestEvent::at_run(run);
        assert_eq!(switcher.process(&mut event).unwrap(), ModuleResult::Continue);
        assert!(event.applied.is_empty());
    }
    assert_eq!(m.calls(), 0);
}

#[test]
fn test_last_run_of_period_is_inclusive() {
    let m = StampModule::new("B");
    let mut switcher = RunSwitcher::<TestEvent>::new("2016");
    switcher.setup_run(RunPeriod::B, m.clone());

    let (_, last) = range_2016(RunPeriod::B);
    let mut event = TestEvent::at_run(last);
    switcher.process(&mut event).unwrap();

    assert_eq!(m.calls(), 1);
    assert_eq!(event.applied, vec!["B"]);
}

#[test]
fn test_boundaries() {
    let m = StampModule::new("D");
    let mut switcher = RunSwitcher::<TestEvent>::new("2016");
    switcher.setup_run(RunPeriod::D, m.clone());

    let (first, last) = range_2016(RunPeriod::D);
    switcher.process(&mut TestEvent::at_run(first)).unwrap();
    switcher.process(&mut TestEvent::at_run(last)).unwrap();
    assert_eq!(m.calls(), 2);

    // 2016 has gaps between C/D and D/E, so neighbours belong to no period.
    assert_eq!(switcher.period_of(first - 1), None);
    assert_eq!(switcher.period_of(last + 1), None);
    switcher.process(&mut TestEvent::at_run(first - 1)).unwrap();
    switcher.process(&mut TestEvent::at_run(last + 1)).unwrap();
    assert_eq!(m.calls(), 2);
}

#[test]
fn test_each_event_resolved_independently() {
    let recorder = RecordingModule::<TestEvent>::new();
    let b = Arc::new(recorder.clone());
    let h = StampModule::new("H");
    let mut switcher = RunSwitcher::<TestEvent>::new("2016");
    switcher.setup_run(RunPeriod::B, b);
    switcher.setup_run(RunPeriod::H, h.clone());

    let (b_first, _) = range_2016(RunPeriod::B);
    let (h_first, _) = range_2016(RunPeriod::H);
    for run in [b_first, h_first, b_first + 1, h_first + 1] {
        switcher.process(&mut TestEvent::at_run(run)).unwrap();
    }

    let runs: Vec<_> = recorder.events().iter().map(|e| e.run).collect();
    assert_eq!(runs, vec![b_first, b_first + 1]);
    assert_eq!(h.calls(), 2);
}

#[test]
fn test_run_outside_all_periods_passes() {
    let mut switcher = RunSwitcher::<TestEvent>::new("2017");
    for period in RunPeriod::ALL {
        switcher.setup_run(period, StampModule::new(period.as_str()));
    }

    let mut event = TestEvent::at_run(1);
    assert_eq!(switcher.process(&mut event).unwrap(), ModuleResult::Continue);
    assert!(event.applied.is_empty());
}

#[test]
fn test_period_outside_table_is_dormant() {
    // 2016 has no period A.
    let a = StampModule::new("A");
    let mut switcher = RunSwitcher::<TestEvent>::new("2016");
    switcher.setup_run(RunPeriod::A, a.clone());
    assert!(switcher.is_registered(RunPeriod::A));

    for range in switcher.table().clone().iter() {
        switcher.process(&mut TestEvent::at_run(range.first)).unwrap();
        switcher.process(&mut TestEvent::at_run(range.last)).unwrap();
    }
    assert_eq!(a.calls(), 0);
}

#[test]
fn test_reregistration_overwrites() {
    let first = StampModule::new("first");
    let second = StampModule::new("second");
    let mut switcher = RunSwitcher::<TestEvent>::new("2018");
    switcher
        .setup_run(RunPeriod::C, first.clone())
        .setup_run(RunPeriod::C, second.clone());

    let mut event = TestEvent::at_run(320000);
    switcher.process(&mut event).unwrap();
    assert_eq!(event.applied, vec!["second"]);
    assert_eq!(first.calls(), 0);
}

#[test]
fn test_stop_and_error_forwarded() {
    let mut switcher = RunSwitcher::<TestEvent>::new("2018");
    switcher.setup_run(RunPeriod::A, StampModule::rejecting("A"));
    switcher.setup_run(RunPeriod::B, Arc::new(FailingModule::new("bad lumi block")));

    let stop = switcher.process(&mut TestEvent::at_run(315252)).unwrap();
    assert_eq!(stop, ModuleResult::Stop);

    let err = switcher.process(&mut TestEvent::at_run(317000)).unwrap_err();
    assert_eq!(
        err.downcast_ref::<ModuleFailure>(),
        Some(&ModuleFailure("bad lumi block".into()))
    );
}
