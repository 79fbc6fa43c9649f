//! Auto-advancing carousel.
//!
//! One [`Ticker`] per mounted carousel moves the index forward on a fixed
//! cadence. Chevrons and dots move the index immediately and leave the
//! ticker's schedule alone. Every change is published on a watch channel so
//! views can subscribe instead of polling.

use std::fmt;
use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tracing::{debug, info};

use crate::error::{CarouselError, Result};
use crate::rotation::{Direction, Rotation, Slide, Step};
use crate::ticker::Ticker;

/// State shared between the handle and its ticker task.
struct Shared {
    rotation: Rotation,
    mounted: bool,
    /// Bumped whenever the ticker is replaced so a stale task can tell it
    /// has been superseded.
    epoch: u64,
    updates: watch::Sender<Slide>,
}

impl Shared {
    fn apply(&mut self, request: Step) -> Option<Slide> {
        let slide = self.rotation.apply(request)?;
        self.updates.send_replace(slide);
        Some(slide)
    }
}

/// A carousel that cycles through `items` every `interval`.
pub struct AutoCarousel<T> {
    label: &'static str,
    items: Arc<[T]>,
    interval: Duration,
    shared: Arc<Mutex<Shared>>,
    ticker: Option<Ticker>,
}

impl<T> fmt::Debug for AutoCarousel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("AutoCarousel");
        debug
            .field("label", &self.label)
            .field("len", &self.items.len())
            .field("interval", &self.interval)
            .field("ticker", &self.ticker);
        match self.shared.try_lock() {
            Some(shared) => {
                debug
                    .field("slide", &shared.rotation.slide())
                    .field("mounted", &shared.mounted);
            }
            None => {
                debug.field("shared", &"<locked>");
            }
        }
        debug.finish()
    }
}

impl<T> AutoCarousel<T> {
    /// Mount a carousel at index 0 and start its ticker.
    ///
    /// `label` only shows up in logs. Must be called from within a tokio
    /// runtime.
    pub fn mount(
        label: &'static str,
        items: impl Into<Arc<[T]>>,
        interval: Duration,
    ) -> Result<Self> {
        let items = items.into();
        let rotation = Rotation::new(items.len())?;
        if interval.is_zero() {
            return Err(CarouselError::ZeroInterval);
        }

        let (updates, _) = watch::channel(rotation.slide());
        let shared = Arc::new(Mutex::new(Shared {
            rotation,
            mounted: true,
            epoch: 0,
            updates,
        }));

        let mut carousel = Self {
            label,
            items,
            interval,
            shared,
            ticker: None,
        };
        carousel.restart_ticker()?;

        info!(
            carousel = label,
            items = carousel.items.len(),
            ?interval,
            "carousel mounted"
        );
        Ok(carousel)
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false: mounting rejects empty lists.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn slide(&self) -> Slide {
        self.shared.lock().rotation.slide()
    }

    pub fn index(&self) -> usize {
        self.slide().index
    }

    pub fn direction(&self) -> Direction {
        self.slide().direction
    }

    /// The item on screen.
    pub fn current(&self) -> &T {
        &self.items[self.index()]
    }

    /// `true` for the dot of the active item, in list order.
    pub fn dots(&self) -> impl Iterator<Item = bool> + '_ {
        let active = self.index();
        (0..self.items.len()).map(move |i| i == active)
    }

    pub fn is_mounted(&self) -> bool {
        self.shared.lock().mounted
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.as_ref().is_some_and(Ticker::is_running)
    }

    /// Receiver that observes every transition. Outlives the carousel; once
    /// unmounted it simply stops changing.
    pub fn subscribe(&self) -> watch::Receiver<Slide> {
        self.shared.lock().updates.subscribe()
    }

    pub fn next(&mut self) -> Option<Slide> {
        self.navigate(Step::Next)
    }

    pub fn prev(&mut self) -> Option<Slide> {
        self.navigate(Step::Prev)
    }

    /// Jump to `target`, clamped into the list. Jumping onto the active item
    /// changes nothing and returns `None`.
    pub fn go_to(&mut self, target: isize) -> Option<Slide> {
        self.navigate(Step::Jump(target))
    }

    /// Change the cadence. The old ticker is cancelled before the new one
    /// starts and the new schedule counts from now.
    pub fn set_interval(&mut self, interval: Duration) -> Result<()> {
        if interval.is_zero() {
            return Err(CarouselError::ZeroInterval);
        }
        if !self.is_mounted() {
            return Ok(());
        }
        self.interval = interval;
        self.restart_ticker()
    }

    /// Swap the item list, back to index 0, and restart the ticker.
    pub fn set_items(&mut self, items: impl Into<Arc<[T]>>) -> Result<()> {
        let items = items.into();
        if items.is_empty() {
            return Err(CarouselError::Empty);
        }
        if !self.is_mounted() {
            return Ok(());
        }
        if let Some(previous) = self.ticker.take() {
            previous.cancel();
        }
        {
            // A tick already past its epoch check is serialized by this
            // lock; any later one sees the bumped epoch and stops.
            let mut shared = self.shared.lock();
            shared.epoch += 1;
            shared.rotation.reset(items.len())?;
            let slide = shared.rotation.slide();
            shared.updates.send_replace(slide);
        }
        self.items = items;
        self.restart_ticker()
    }

    /// Cancel the ticker and freeze the state.
    pub fn unmount(mut self) {
        self.teardown();
    }

    fn navigate(&mut self, request: Step) -> Option<Slide> {
        let mut shared = self.shared.lock();
        if !shared.mounted {
            return None;
        }
        let slide = shared.apply(request)?;
        debug!(
            carousel = self.label,
            index = slide.index,
            direction = slide.direction.signum(),
            ?request,
            "carousel navigated"
        );
        Some(slide)
    }

    fn restart_ticker(&mut self) -> Result<()> {
        if let Some(previous) = self.ticker.take() {
            previous.cancel();
        }

        let epoch = {
            let mut shared = self.shared.lock();
            shared.epoch += 1;
            shared.epoch
        };

        let shared = Arc::clone(&self.shared);
        let label = self.label;
        let ticker = Ticker::spawn(self.interval, move || {
            let mut shared = shared.lock();
            if !shared.mounted || shared.epoch != epoch {
                return ControlFlow::Break(());
            }
            if let Some(slide) = shared.apply(Step::Next) {
                debug!(carousel = label, index = slide.index, "carousel ticked");
            }
            ControlFlow::Continue(())
        })?;

        self.ticker = Some(ticker);
        Ok(())
    }

    fn teardown(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
        }
        let mut shared = self.shared.lock();
        if shared.mounted {
            shared.mounted = false;
            shared.epoch += 1;
            info!(
                carousel = self.label,
                index = shared.rotation.index(),
                "carousel unmounted"
            );
        }
    }
}

impl<T> Drop for AutoCarousel<T> {
    fn drop(&mut self) {
        self.teardown();
    }
}
