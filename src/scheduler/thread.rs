//! Thread-backed scheduler.

use std::sync::mpsc::{channel, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::trace;

use super::{ScheduledTask, Scheduler, Task};

/// Runs each task on its own short-lived thread.
///
/// The thread waits on a stop channel with a timeout, so cancelling wakes it
/// right away instead of letting it sleep out the delay.
///
/// ## Example
///
/// ```
/// use balloons::scheduler::{Scheduler, ThreadScheduler};
/// use std::time::Duration;
///
/// let token = ThreadScheduler.schedule(Duration::from_secs(60), Box::new(|| println!("never printed")));
/// token.cancel();
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadScheduler;

impl Scheduler for ThreadScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> ScheduledTask {
        let token = ScheduledTask::new();
        let (stop_tx, stop_rx) = channel::<()>();
        token.set_waker(Box::new(move || {
            let _ = stop_tx.send(());
        }));

        let guard = token.clone();
        let deadline = Instant::now() + delay;
        thread::spawn(move || {
            match stop_rx.recv_timeout(delay) {
                Err(RecvTimeoutError::Timeout) => {}
                Ok(()) => {
                    trace!("scheduled task cancelled");
                    return;
                }
                // Sender gone without a stop signal; wait out the rest.
                Err(RecvTimeoutError::Disconnected) => {
                    thread::sleep(deadline.saturating_duration_since(Instant::now()));
                }
            }

            if !guard.run(task) {
                trace!("scheduled task cancelled");
            }
        });

        token
    }
}
