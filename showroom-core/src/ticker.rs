//! Recurring callback on the tokio timer.
//!
//! A [`Ticker`] owns one background task. The callback never sees carousel
//! state directly; owners hand it a closure that decides what a tick means and
//! returns [`ControlFlow::Break`] once the owner is gone.

use std::fmt;
use std::ops::ControlFlow;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Duration, Instant, MissedTickBehavior};
use tracing::trace;

use crate::error::{CarouselError, Result};

/// Handle to a running ticker task. Dropping it cancels the task.
pub struct Ticker {
    period: Duration,
    stop_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl fmt::Debug for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ticker")
            .field("period", &self.period)
            .field("stopped", &*self.stop_tx.borrow())
            .field("task_finished", &self.task.is_finished())
            .finish()
    }
}

impl Ticker {
    /// Start calling `on_tick` every `period`. The first call happens one
    /// full period after this returns, then on that fixed cadence.
    pub fn spawn<F>(period: Duration, on_tick: F) -> Result<Self>
    where
        F: FnMut() -> ControlFlow<()> + Send + 'static,
    {
        if period.is_zero() {
            return Err(CarouselError::ZeroInterval);
        }
        let runtime =
            Handle::try_current().map_err(|_| CarouselError::NoRuntime)?;

        let (stop_tx, stop_rx) = watch::channel(false);
        // Anchor the schedule now, not when the task is first polled.
        let first = Instant::now() + period;
        let task = runtime.spawn(tick_loop(first, period, stop_rx, on_tick));

        Ok(Self {
            period,
            stop_tx,
            task,
        })
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        !*self.stop_tx.borrow() && !self.task.is_finished()
    }

    /// Stop the ticker. No callback starts after this returns.
    pub fn cancel(self) {
        drop(self);
    }

    fn shutdown(&self) {
        let _ = self.stop_tx.send(true);
        self.task.abort();
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

async fn tick_loop<F>(
    first: Instant,
    period: Duration,
    mut stop_rx: watch::Receiver<bool>,
    mut on_tick: F,
) where
    F: FnMut() -> ControlFlow<()> + Send + 'static,
{
    let mut ticker = time::interval_at(first, period);
    // Overdue deadlines all fire, one callback per elapsed period.
    ticker.set_missed_tick_behavior(MissedTickBehavior::Burst);

    loop {
        tokio::select! {
            biased;
            changed = stop_rx.changed() => {
                if changed.is_err() || *stop_rx.borrow() {
                    break;
                }
            }
            _ = ticker.tick() => {
                if *stop_rx.borrow() {
                    break;
                }
                if on_tick().is_break() {
                    break;
                }
            }
        }
    }

    trace!("ticker loop exited");
}
