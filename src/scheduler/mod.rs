//! Deferred callbacks with cancellation.
//!
//! Components use a [`Scheduler`] to fire their `ready` event after a short
//! delay. Every scheduled task hands back a [`ScheduledTask`] token; a
//! cancelled task never runs.

mod manual;
#[cfg(feature = "tokio")]
mod runtime;
mod thread;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

pub use manual::ManualScheduler;
pub use thread::ThreadScheduler;
#[cfg(feature = "tokio")]
pub use runtime::TokioScheduler;

/// A callback to run once the delay elapses.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

type Waker = Box<dyn FnOnce() + Send + 'static>;

/// Runs a task after a delay.
pub trait Scheduler: Send + Sync {
    fn schedule(&self, delay: Duration, task: Task) -> ScheduledTask;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Phase {
    #[default]
    Pending,
    Running,
    Finished,
    Cancelled,
}

#[derive(Default)]
struct TaskState {
    phase: Mutex<Phase>,
    // Lets the backend stop waiting early when the task is cancelled.
    waker: Mutex<Option<Waker>>,
}

/// Cancellation handle for a scheduled task.
#[derive(Clone, Default)]
pub struct ScheduledTask {
    state: Arc<TaskState>,
}

impl ScheduledTask {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prevent the task from running. Idempotent.
    ///
    /// Returns `true` when this call stopped the task. Once it returns, the
    /// task is guaranteed not to start; a task that already started runs to
    /// completion.
    pub fn cancel(&self) -> bool {
        {
            let mut phase = self.state.phase.lock();
            if *phase != Phase::Pending {
                return false;
            }
            *phase = Phase::Cancelled;
        }
        if let Some(wake) = self.state.waker.lock().take() {
            wake();
        }
        true
    }

    pub fn is_cancelled(&self) -> bool {
        *self.state.phase.lock() == Phase::Cancelled
    }

    /// Whether the task started, finished or not.
    pub fn has_started(&self) -> bool {
        matches!(*self.state.phase.lock(), Phase::Running | Phase::Finished)
    }

    pub(crate) fn set_waker(&self, waker: Waker) {
        *self.state.waker.lock() = Some(waker);
    }

    /// Run `task` unless the token was cancelled first. The phase lock is
    /// released before the task runs, so the task may cancel its own token.
    pub(crate) fn run(&self, task: Task) -> bool {
        {
            let mut phase = self.state.phase.lock();
            if *phase != Phase::Pending {
                return false;
            }
            *phase = Phase::Running;
        }
        task();
        *self.state.phase.lock() = Phase::Finished;
        true
    }
}

impl fmt::Debug for ScheduledTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScheduledTask")
            .field("phase", &*self.state.phase.lock())
            .finish()
    }
}
