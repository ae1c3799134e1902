//! `setTimeout`-backed scheduler for the browser.
//!
//! Each task owns a `gloo_timers` [`Timeout`]; dropping the handle clears the
//! browser timer. Handles of tasks that already fired are reaped lazily on the
//! next `schedule`/`cancel`, never from inside their own callback.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Timeout;

use crate::scheduler::{Scheduler, TimerId};

/// Scheduler over `window.setTimeout`. Clones share one timer table.
#[derive(Clone, Default)]
pub struct TimeoutScheduler {
    table: Rc<RefCell<TimeoutTable>>,
}

#[derive(Default)]
struct TimeoutTable {
    next_id: u64,
    live: HashMap<TimerId, Timeout>,
    fired: Vec<TimerId>,
    running: Option<TimerId>,
}

impl TimeoutScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn reap(&self) {
        let mut table = self.table.borrow_mut();
        let running = table.running;
        let fired = std::mem::take(&mut table.fired);
        for id in fired {
            if Some(id) == running {
                table.fired.push(id);
                continue;
            }
            table.live.remove(&id);
        }
    }
}

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TimerId {
        self.reap();
        let id = {
            let mut table = self.table.borrow_mut();
            table.next_id += 1;
            TimerId::new(table.next_id)
        };

        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        let table = Rc::clone(&self.table);
        let timeout = Timeout::new(millis, move || {
            table.borrow_mut().running = Some(id);
            task();
            let mut table = table.borrow_mut();
            table.running = None;
            table.fired.push(id);
        });
        self.table.borrow_mut().live.insert(id, timeout);
        id
    }

    fn cancel(&self, id: TimerId) {
        self.reap();
        let mut table = self.table.borrow_mut();
        if table.running == Some(id) {
            return;
        }
        if let Some(timeout) = table.live.remove(&id) {
            drop(timeout);
        }
    }
}
