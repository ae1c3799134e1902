//! Leading-edge throttle.
//!
//! The first call in a burst runs immediately and opens a cooldown window.
//! Calls inside the window are dropped, not queued and not replayed when the
//! window closes.

#[cfg(test)]
#[path = "throttle_test.rs"]
mod throttle_test;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::WrapperState;
use crate::scheduler::Scheduler;

/// Wrap `callback` so it runs at most once per `limit`, on the leading edge.
pub fn throttle<A, F, S>(callback: F, limit: Duration, scheduler: S) -> Throttled<A, S>
where
    F: Fn(A) + 'static,
    S: Scheduler,
{
    Throttled {
        inner: Rc::new(ThrottleInner {
            callback: Box::new(callback),
            limit,
            scheduler,
            state: Rc::new(RefCell::new(WrapperState::default())),
        }),
    }
}

/// A throttled callback. Clones are handles to the same instance.
pub struct Throttled<A, S> {
    inner: Rc<ThrottleInner<A, S>>,
}

struct ThrottleInner<A, S> {
    callback: Box<dyn Fn(A)>,
    limit: Duration,
    scheduler: S,
    state: Rc<RefCell<WrapperState>>,
}

impl<A, S> Clone for Throttled<A, S> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<A, S: Scheduler> Throttled<A, S> {
    /// Invoke the callback now unless a cooldown is active.
    ///
    /// The cooldown opens before the callback runs, so a callback that calls
    /// back into the same instance is dropped rather than recursing.
    pub fn call(&self, args: A) {
        let inner = &self.inner;
        {
            let mut state = inner.state.borrow_mut();
            if state.cooldown_active {
                return;
            }
            state.cooldown_active = true;
        }

        let state = Rc::clone(&inner.state);
        let id = inner.scheduler.schedule(
            inner.limit,
            Box::new(move || {
                let mut state = state.borrow_mut();
                state.cooldown_active = false;
                state.pending_timer = None;
            }),
        );
        inner.state.borrow_mut().pending_timer = Some(id);

        (inner.callback)(args);
    }

    /// Whether calls are currently being dropped.
    #[must_use]
    pub fn is_cooling_down(&self) -> bool {
        self.inner.state.borrow().cooldown_active
    }
}
