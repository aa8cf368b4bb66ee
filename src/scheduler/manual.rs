//! Scheduler driven by an explicit virtual clock.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use super::{ScheduledTask, Scheduler, Task};

struct Pending {
    due: Duration,
    seq: u64,
    token: ScheduledTask,
    task: Task,
}

#[derive(Default)]
struct Clock {
    now: Duration,
    next_seq: u64,
    pending: Vec<Pending>,
}

/// Holds tasks until [`advance`](ManualScheduler::advance) moves its clock
/// past their due time. Useful for hosts with their own event loop and for
/// deterministic tests.
///
/// Clones share the same clock and queue.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Arc<Mutex<Clock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed so far.
    pub fn now(&self) -> Duration {
        self.clock.lock().now
    }

    /// Tasks neither run nor cancelled.
    pub fn pending(&self) -> usize {
        self.clock
            .lock()
            .pending
            .iter()
            .filter(|p| !p.token.is_cancelled())
            .count()
    }

    /// Move the clock forward and run every due task in due order.
    ///
    /// Returns how many tasks ran. Tasks scheduled by a running task are
    /// picked up in the same call if they fall due within `by`.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.clock.lock().now + by;
        let mut ran = 0;

        loop {
            let next = {
                let mut clock = self.clock.lock();
                clock.pending.retain(|p| !p.token.is_cancelled());
                let slot = clock
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.due <= target)
                    .min_by_key(|(_, p)| (p.due, p.seq))
                    .map(|(slot, _)| slot);
                match slot {
                    Some(slot) => {
                        let pending = clock.pending.swap_remove(slot);
                        clock.now = clock.now.max(pending.due);
                        pending
                    }
                    None => {
                        clock.now = target;
                        break;
                    }
                }
            };

            if next.token.run(next.task) {
                ran += 1;
            }
        }

        ran
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> ScheduledTask {
        let token = ScheduledTask::new();
        let mut clock = self.clock.lock();
        let seq = clock.next_seq;
        clock.next_seq += 1;
        let due = clock.now + delay;
        clock.pending.push(Pending {
            due,
            seq,
            token: token.clone(),
            task,
        });
        token
    }
}
