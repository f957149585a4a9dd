use std::time::Duration;

use tokio::{
    runtime::Handle,
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};
use tracing::debug;

use super::ClockError;

/// Owns the recurring clock refresh task.
///
/// At most one task runs at a time. Dropping the ticker stops it.
#[derive(Debug, Default)]
pub struct ClockTicker {
    task: Option<JoinHandle<()>>,
    period: Option<Duration>,
}

impl ClockTicker {
    /// Creates a stopped ticker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts calling `tick` every `period`, first one period from now.
    ///
    /// Returns `Ok(false)` without doing anything if already running.
    ///
    /// # Errors
    /// Returns `ClockError::NoRuntime` when called outside a tokio runtime.
    pub fn start<F>(&mut self, period: Duration, tick: F) -> Result<bool, ClockError>
    where
        F: Fn() + Send + 'static,
    {
        if self.is_running() {
            return Ok(false);
        }

        let runtime = Handle::try_current().map_err(|_| ClockError::NoRuntime)?;
        self.task = Some(runtime.spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                tick();
            }
        }));
        self.period = Some(period);
        debug!(?period, "Clock ticker started");

        Ok(true)
    }

    /// Stops the task. Returns `false` if nothing was running.
    pub fn stop(&mut self) -> bool {
        self.period = None;
        match self.task.take() {
            Some(task) => {
                task.abort();
                debug!("Clock ticker stopped");
                true
            }
            None => false,
        }
    }

    /// Stops any running task, then starts one with the new period.
    ///
    /// # Errors
    /// Returns `ClockError::NoRuntime` when called outside a tokio runtime.
    pub fn restart<F>(&mut self, period: Duration, tick: F) -> Result<(), ClockError>
    where
        F: Fn() + Send + 'static,
    {
        self.stop();
        self.start(period, tick).map(|_| ())
    }

    /// Whether a refresh task is alive.
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Period of the running task.
    pub fn period(&self) -> Option<Duration> {
        self.period.filter(|_| self.is_running())
    }
}

impl Drop for ClockTicker {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
