//! Trailing-edge debounce.
//!
//! Every call replaces the pending invocation, so a burst of calls collapses
//! into one invocation `wait` after the last call, carrying the last call's
//! arguments.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::WrapperState;
use crate::scheduler::Scheduler;

/// Wrap `callback` so it runs only after `wait` has passed without another call.
///
/// A zero `wait` still defers to the scheduler's next tick.
pub fn debounce<A, F, S>(callback: F, wait: Duration, scheduler: S) -> Debounced<A, S>
where
    A: 'static,
    F: Fn(A) + 'static,
    S: Scheduler,
{
    Debounced {
        inner: Rc::new(DebounceInner {
            callback: Rc::new(callback),
            wait,
            scheduler,
            state: Rc::new(RefCell::new(WrapperState::default())),
        }),
    }
}

/// A debounced callback. Clones are handles to the same instance.
pub struct Debounced<A, S> {
    inner: Rc<DebounceInner<A, S>>,
}

struct DebounceInner<A, S> {
    callback: Rc<dyn Fn(A)>,
    wait: Duration,
    scheduler: S,
    state: Rc<RefCell<WrapperState>>,
}

impl<A, S> Clone for Debounced<A, S> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<A: 'static, S: Scheduler> Debounced<A, S> {
    /// Cancel any pending invocation and schedule a new one with `args`.
    pub fn call(&self, args: A) {
        let inner = &self.inner;
        let previous = inner.state.borrow_mut().pending_timer.take();
        if let Some(id) = previous {
            inner.scheduler.cancel(id);
            log::trace!("debounce: superseded timer {}", id.raw());
        }

        let state = Rc::clone(&inner.state);
        let callback = Rc::clone(&inner.callback);
        let id = inner.scheduler.schedule(
            inner.wait,
            Box::new(move || {
                state.borrow_mut().pending_timer = None;
                callback(args);
            }),
        );
        inner.state.borrow_mut().pending_timer = Some(id);
    }

    /// Whether an invocation is scheduled and has not fired yet.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.inner.state.borrow().pending_timer.is_some()
    }
}
