//! Deferred callbacks for toast timing and the logout reload.
//!
//! DESIGN
//! ======
//! `Scheduler` is the only source of time in the crate. The browser build
//! schedules through `gloo-timers`; `ManualScheduler` is a virtual clock that
//! tests advance explicitly, so lifecycle assertions never wait on wall time.
//! Scheduled work is never cancelled.

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

use std::cell::{Cell, RefCell};
use std::time::Duration;

pub type Task = Box<dyn FnOnce()>;

pub trait Scheduler {
    /// Run `task` once, `delay` from now. Never blocks the caller.
    fn schedule(&self, delay: Duration, task: Task);
}

struct Pending {
    due: Duration,
    seq: u64,
    task: Task,
}

/// Virtual clock. Tasks run only inside `advance`, in due-time order, ties
/// broken by scheduling order.
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<Duration>,
    seq: Cell<u64>,
    queue: RefCell<Vec<Pending>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed virtual time.
    pub fn now(&self) -> Duration {
        self.now.get()
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Move the clock forward, running every task that falls due on the way,
    /// including tasks scheduled by tasks run during this call.
    pub fn advance(&self, by: Duration) {
        let target = self.now.get() + by;
        while let Some(next) = self.pop_due(target) {
            self.now.set(next.due);
            (next.task)();
        }
        self.now.set(target);
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }

    fn pop_due(&self, target: Duration) -> Option<Pending> {
        let mut queue = self.queue.borrow_mut();
        let idx = queue
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= target)
            .min_by_key(|(_, p)| (p.due, p.seq))
            .map(|(i, _)| i)?;
        Some(queue.swap_remove(idx))
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        let seq = self.seq.get();
        self.seq.set(seq + 1);
        self.queue.borrow_mut().push(Pending { due: self.now.get() + delay, seq, task });
    }
}

/// Browser timers via `setTimeout`.
#[cfg(feature = "hydrate")]
#[derive(Default)]
pub struct TimeoutScheduler;

#[cfg(feature = "hydrate")]
impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::callback::Timeout::new(millis, task).forget();
    }
}
