use std::sync::{Arc, Mutex};

use chrono::{DateTime, Datelike, FixedOffset, NaiveTime, Timelike};
use log::{debug, warn};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{self, Duration, MissedTickBehavior};

use crate::sink::Element;

pub const CLOCK_PERIOD: Duration = Duration::from_secs(1);

pub fn stamp_year(target: &mut Element, now: &DateTime<FixedOffset>) {
    target.set_text(now.year().to_string());
}

pub fn clock_text(time: NaiveTime) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        time.hour(),
        time.minute(),
        time.second()
    )
}

/// Footer clock running on its own task. Dropping the handle stops it.
pub struct Clock;

pub struct ClockHandle {
    shutdown: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl Clock {
    /// Writes the current time into `target` right away and then once per `period`.
    pub fn start<F>(target: Arc<Mutex<Element>>, period: Duration, now: F) -> ClockHandle
    where
        F: Fn() -> NaiveTime + Send + 'static,
    {
        let (shutdown, mut stopped) = oneshot::channel();

        match target.lock() {
            Ok(mut el) => el.set_text(clock_text(now())),
            Err(_) => warn!("Clock target poisoned"),
        }

        let task = tokio::spawn(async move {
            let mut ticks = time::interval(period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // first tick completes immediately and was written above
            ticks.tick().await;

            loop {
                tokio::select! {
                    _ = &mut stopped => break,
                    _ = ticks.tick() => {
                        let text = clock_text(now());
                        debug!("Clock tick {text}");
                        match target.lock() {
                            Ok(mut el) => el.set_text(text),
                            Err(_) => break,
                        }
                    }
                }
            }
        });

        ClockHandle {
            shutdown: Some(shutdown),
            task: Some(task),
        }
    }
}

impl ClockHandle {
    /// Stops the clock and waits for its task to finish.
    pub async fn stop(mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for ClockHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
