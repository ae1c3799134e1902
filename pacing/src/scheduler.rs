//! Delayed-callback primitive and a virtual-clock implementation.
//!
//! [`Scheduler`] is the only thing the wrappers need from the host: run a task
//! later, and forget a task that has not run yet. [`ManualScheduler`] keeps
//! its own clock that only moves when told to, which makes burst scenarios
//! reproducible to the millisecond.

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

/// Identity of one scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Host timer facility.
///
/// Implementations must never run `task` before `schedule` has returned, even
/// for a zero delay. Cancelling an id that already ran (or never existed) is a
/// no-op.
pub trait Scheduler {
    /// Run `task` once, `delay` from now.
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TimerId;

    /// Drop a task that has not run yet.
    fn cancel(&self, id: TimerId);
}

impl<S: Scheduler + ?Sized> Scheduler for Rc<S> {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TimerId {
        (**self).schedule(delay, task)
    }

    fn cancel(&self, id: TimerId) {
        (**self).cancel(id);
    }
}

/// Deterministic scheduler driven by an explicit clock.
///
/// Clones share one clock and one queue. Time starts at zero and moves only
/// through [`ManualScheduler::advance`].
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Rc<RefCell<ManualClock>>,
}

#[derive(Default)]
struct ManualClock {
    now: Duration,
    next_id: u64,
    /// Keyed by due time, then scheduling order.
    queue: BTreeMap<(Duration, TimerId), Box<dyn FnOnce()>>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time since the scheduler was created.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.inner.borrow().now
    }

    /// Number of tasks waiting to run.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.inner.borrow().queue.len()
    }

    /// Move the clock forward by `by`, running every task that falls due.
    ///
    /// Tasks run in due order with the clock set to their due time, so a task
    /// observing [`ManualScheduler::now`] sees its own deadline. Tasks that a
    /// running task schedules also run if they fall due before the target.
    /// `advance(Duration::ZERO)` flushes tasks scheduled with a zero delay.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        while let Some(task) = self.pop_due(target) {
            task();
        }
        self.inner.borrow_mut().now = target;
    }

    /// Run every queued task, including ones scheduled along the way.
    pub fn run_until_idle(&self) {
        loop {
            let next_due = self.inner.borrow().queue.keys().next().map(|(due, _)| *due);
            let Some(due) = next_due else {
                return;
            };
            self.advance(due.saturating_sub(self.now()));
        }
    }

    fn pop_due(&self, target: Duration) -> Option<Box<dyn FnOnce()>> {
        let mut clock = self.inner.borrow_mut();
        let key = *clock.queue.keys().next()?;
        if key.0 > target {
            return None;
        }
        clock.now = clock.now.max(key.0);
        clock.queue.remove(&key)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TimerId {
        let mut clock = self.inner.borrow_mut();
        clock.next_id += 1;
        let id = TimerId(clock.next_id);
        let due = clock.now + delay;
        clock.queue.insert((due, id), task);
        id
    }

    fn cancel(&self, id: TimerId) {
        self.inner.borrow_mut().queue.retain(|(_, queued), _| *queued != id);
    }
}
