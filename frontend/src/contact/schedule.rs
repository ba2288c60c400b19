//! Deferred work that is cancelled by dropping its handle.

use gloo_timers::callback::Timeout;

pub trait Scheduler {
    /// Dropping the handle before the delay elapses cancels the task.
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser timers via `setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

#[cfg(test)]
pub mod manual {
    //! A clock the tests advance by hand.

    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::Scheduler;

    struct Pending {
        due: u64,
        cancelled: Rc<Cell<bool>>,
        task: Box<dyn FnOnce()>,
    }

    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        now: Rc<Cell<u64>>,
        queue: Rc<RefCell<Vec<Pending>>>,
    }

    pub struct ManualHandle {
        cancelled: Rc<Cell<bool>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.cancelled.set(true);
        }
    }

    impl ManualScheduler {
        /// Moves time forward, running every task that comes due and was not cancelled.
        pub fn advance(&self, ms: u64) {
            let now = self.now.get() + ms;
            self.now.set(now);
            let due: Vec<Pending> = {
                let mut queue = self.queue.borrow_mut();
                let (due, later) = queue.drain(..).partition(|p| p.due <= now);
                *queue = later;
                due
            };
            for pending in due {
                if !pending.cancelled.get() {
                    (pending.task)();
                }
            }
        }

        pub fn queued(&self) -> usize {
            self.queue.borrow().iter().filter(|p| !p.cancelled.get()).count()
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
            let cancelled = Rc::new(Cell::new(false));
            self.queue.borrow_mut().push(Pending {
                due: self.now.get() + u64::from(delay_ms),
                cancelled: cancelled.clone(),
                task,
            });
            ManualHandle { cancelled }
        }
    }
}
