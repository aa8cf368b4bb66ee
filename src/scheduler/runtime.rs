//! Scheduler backed by a tokio runtime.

use std::time::Duration;

use tokio::runtime::Handle;

use super::{ScheduledTask, Scheduler, Task};
use crate::error::BalloonError;

/// Spawns each task on a tokio runtime after a `sleep`. Cancelling aborts it.
#[derive(Clone, Debug)]
pub struct TokioScheduler {
    handle: Handle,
}

impl TokioScheduler {
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Use the runtime the caller is running on.
    pub fn current() -> Result<Self, BalloonError> {
        Handle::try_current()
            .map(Self::new)
            .map_err(|err| BalloonError::Scheduler(err.to_string()))
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> ScheduledTask {
        let token = ScheduledTask::new();
        let guard = token.clone();

        let join = self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            guard.run(task);
        });
        let abort = join.abort_handle();
        token.set_waker(Box::new(move || abort.abort()));

        token
    }
}
