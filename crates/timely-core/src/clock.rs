//! Live wall-clock readout.
//!
//! The clock is a cancellable periodic task owned by the presentation
//! layer. It has no data dependency on plan generation: the caller starts
//! it once a plan is being displayed and stops it on teardown. The task
//! does nothing but invoke a callback with the freshly rendered local time
//! on every tick.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Clock readout configuration, the `[clock]` section of the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClockConfig {
    #[serde(default = "default_tick_secs")]
    pub tick_secs: u64,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_tick_secs() -> u64 {
    1
}
fn default_true() -> bool {
    true
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            tick_secs: default_tick_secs(),
            enabled: true,
        }
    }
}

/// Current local time rendered for display: 12-hour with seconds.
pub fn now_display() -> String {
    chrono::Local::now().format("%I:%M:%S %p").to_string()
}

/// Handle to a running clock task.
///
/// Dropping the handle also cancels the task (the stop channel closes),
/// but without waiting for it to wind down; [`ClockHandle::stop`] waits.
pub struct ClockHandle {
    stop: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl ClockHandle {
    /// Cancel the task and wait for it to finish.
    pub async fn stop(self) {
        let _ = self.stop.send(true);
        let _ = self.task.await;
    }
}

/// Spawn the periodic readout on the current tokio runtime.
///
/// `on_tick` receives the rendered local time once per `period` until the
/// returned handle is stopped.
pub fn spawn<F>(period: Duration, mut on_tick: F) -> ClockHandle
where
    F: FnMut(String) + Send + 'static,
{
    let (stop_tx, mut stop_rx) = watch::channel(false);
    let task = tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // The first interval tick fires immediately; swallow it so the
        // readout starts one period after spawn.
        interval.tick().await;
        loop {
            tokio::select! {
                _ = interval.tick() => on_tick(now_display()),
                changed = stop_rx.changed() => {
                    if changed.is_err() || *stop_rx.borrow() {
                        break;
                    }
                }
            }
        }
    });
    ClockHandle {
        stop: stop_tx,
        task,
    }
}
