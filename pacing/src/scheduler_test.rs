use super::*;

use std::cell::RefCell;
use std::rc::Rc;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn recorder() -> (Rc<RefCell<Vec<(&'static str, Duration)>>>, ManualScheduler) {
    (Rc::new(RefCell::new(Vec::new())), ManualScheduler::new())
}

fn push(
    log: &Rc<RefCell<Vec<(&'static str, Duration)>>>,
    clock: &ManualScheduler,
    label: &'static str,
) -> Box<dyn FnOnce()> {
    let log = Rc::clone(log);
    let clock = clock.clone();
    Box::new(move || log.borrow_mut().push((label, clock.now())))
}

// =============================================================
// Clock
// =============================================================

#[test]
fn clock_starts_at_zero() {
    let clock = ManualScheduler::new();
    assert_eq!(clock.now(), Duration::ZERO);
    assert_eq!(clock.pending(), 0);
}

#[test]
fn advance_moves_clock_without_tasks() {
    let clock = ManualScheduler::new();
    clock.advance(ms(40));
    clock.advance(ms(2));
    assert_eq!(clock.now(), ms(42));
    assert_eq!(clock.pending(), 0);
}

#[test]
fn timer_ids_are_distinct() {
    let clock = ManualScheduler::new();
    let a = clock.schedule(ms(10), Box::new(|| {}));
    let b = clock.schedule(ms(10), Box::new(|| {}));
    assert_ne!(a, b);
    assert_eq!(TimerId::new(a.raw()), a);
}

// =============================================================
// Ordering
// =============================================================

#[test]
fn tasks_run_at_their_due_time() {
    let (log, clock) = recorder();
    clock.schedule(ms(30), push(&log, &clock, "late"));
    clock.schedule(ms(10), push(&log, &clock, "early"));

    clock.advance(ms(9));
    assert!(log.borrow().is_empty());
    clock.advance(ms(100));
    assert_eq!(*log.borrow(), vec![("early", ms(10)), ("late", ms(30))]);
    assert_eq!(clock.now(), ms(109));
}

#[test]
fn equal_deadlines_run_in_scheduling_order() {
    let (log, clock) = recorder();
    clock.schedule(ms(5), push(&log, &clock, "first"));
    clock.schedule(ms(5), push(&log, &clock, "second"));
    clock.advance(ms(5));
    assert_eq!(*log.borrow(), vec![("first", ms(5)), ("second", ms(5))]);
}

#[test]
fn zero_delay_is_deferred_until_next_advance() {
    let (log, clock) = recorder();
    clock.schedule(Duration::ZERO, push(&log, &clock, "tick"));
    assert!(log.borrow().is_empty());
    assert_eq!(clock.pending(), 1);

    clock.advance(Duration::ZERO);
    assert_eq!(clock.pending(), 0);
    assert_eq!(*log.borrow(), vec![("tick", Duration::ZERO)]);
}

#[test]
fn tasks_scheduled_by_tasks_run_when_due() {
    let (log, clock) = recorder();
    let inner_log = Rc::clone(&log);
    let inner_clock = clock.clone();
    clock.schedule(
        ms(10),
        Box::new(move || {
            let follow_up = push(&inner_log, &inner_clock, "follow-up");
            inner_clock.schedule(ms(5), follow_up);
        }),
    );

    clock.advance(ms(20));
    assert_eq!(clock.pending(), 0);
    assert_eq!(*log.borrow(), vec![("follow-up", ms(15))]);
}

#[test]
fn run_until_idle_drains_queue() {
    let (log, clock) = recorder();
    clock.schedule(ms(100), push(&log, &clock, "a"));
    clock.schedule(ms(300), push(&log, &clock, "b"));
    clock.run_until_idle();
    assert_eq!(*log.borrow(), vec![("a", ms(100)), ("b", ms(300))]);
    assert_eq!(clock.pending(), 0);
    assert_eq!(clock.now(), ms(300));
}

// =============================================================
// Cancellation
// =============================================================

#[test]
fn cancelled_task_never_runs() {
    let (log, clock) = recorder();
    let id = clock.schedule(ms(10), push(&log, &clock, "cancelled"));
    clock.schedule(ms(10), push(&log, &clock, "kept"));
    clock.cancel(id);

    clock.advance(ms(50));
    assert_eq!(*log.borrow(), vec![("kept", ms(10))]);
}

#[test]
fn cancel_after_run_is_noop() {
    let (log, clock) = recorder();
    let id = clock.schedule(ms(1), push(&log, &clock, "ran"));
    clock.advance(ms(1));
    clock.cancel(id);
    clock.cancel(TimerId::new(999));
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn rc_scheduler_delegates() {
    let clock = Rc::new(ManualScheduler::new());
    let hits = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&hits);
    clock.schedule(ms(1), Box::new(move || *counter.borrow_mut() += 1));
    clock.advance(ms(1));
    assert_eq!(*hits.borrow(), 1);
}
