// Live refresh driver
// One independent timer per displayed countdown. Each timer recomputes the
// remaining time roughly once per second and pushes it to its subscriber.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use chrono::{DateTime, Local};

use super::calculator::{remaining, RemainingTime};

/// Display refresh cadence. Alignment to wall-clock second boundaries is
/// neither guaranteed nor required.
const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Handle to a running countdown timer.
///
/// Call sites own the timer for exactly as long as they hold the handle:
/// `cancel` stops it explicitly, and dropping the handle cancels too, so a
/// timer cannot outlive the display that armed it.
pub struct TickerHandle {
    stop: Option<Sender<()>>,
    worker: Option<JoinHandle<()>>,
}

impl TickerHandle {
    /// Stop future ticks. Blocks until the worker has exited, so no callback
    /// for this timer runs after `cancel` returns. Idempotent.
    pub fn cancel(&mut self) {
        // Dropping the sender wakes the worker out of its interval wait.
        self.stop.take();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::warn!("countdown ticker worker panicked");
            }
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.stop.is_none()
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Start a repeating countdown publisher for `target`.
///
/// The first value is computed and published synchronously before this
/// returns, so a display paints immediately instead of waiting out the
/// first interval. Subsequent values arrive from a worker thread about
/// once per second until the handle is cancelled or dropped.
pub fn start_ticking<F>(target: DateTime<Local>, on_tick: F) -> TickerHandle
where
    F: FnMut(RemainingTime) + Send + 'static,
{
    start_with_interval(target, TICK_INTERVAL, on_tick)
}

fn start_with_interval<F>(target: DateTime<Local>, interval: Duration, mut on_tick: F) -> TickerHandle
where
    F: FnMut(RemainingTime) + Send + 'static,
{
    on_tick(remaining(target, Local::now()));

    let (stop, stopped) = mpsc::channel::<()>();
    let worker = thread::spawn(move || loop {
        match stopped.recv_timeout(interval) {
            Err(RecvTimeoutError::Timeout) => on_tick(remaining(target, Local::now())),
            // Sender gone: the handle was cancelled or dropped.
            Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
        }
    });

    TickerHandle {
        stop: Some(stop),
        worker: Some(worker),
    }
}

/// Owns the timer for a single displayed countdown across target changes.
///
/// Re-arming for a new target always cancels the running timer first, so a
/// stale callback for the old target can never fire once `arm` returns.
#[derive(Default)]
pub struct CountdownTicker {
    target: Option<DateTime<Local>>,
    handle: Option<TickerHandle>,
}

impl CountdownTicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target(&self) -> Option<DateTime<Local>> {
        self.target
    }

    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }

    /// Arm the timer for `target`. A no-op when already armed for the same
    /// target; otherwise the previous timer is cancelled before the new one
    /// starts.
    pub fn arm<F>(&mut self, target: DateTime<Local>, on_tick: F)
    where
        F: FnMut(RemainingTime) + Send + 'static,
    {
        if self.target == Some(target) && self.handle.is_some() {
            return;
        }

        self.disarm();
        self.target = Some(target);
        self.handle = Some(start_ticking(target, on_tick));
    }

    /// Stop the timer, if any. The ticker can be re-armed afterwards.
    pub fn disarm(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.cancel();
        }
        self.target = None;
    }
}
