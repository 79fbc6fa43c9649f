//! Pointer-position carousel for the product viewer.
//!
//! The container is split into equal vertical zones, one per item; whichever
//! zone the pointer is over is the active item. There is no timer.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

/// Horizontal extent of the viewer, in the same space as pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContainerRect {
    pub left: f32,
    pub width: f32,
}

impl ContainerRect {
    pub fn new(left: f32, width: f32) -> Self {
        Self { left, width }
    }

    pub fn is_degenerate(&self) -> bool {
        !self.left.is_finite() || !self.width.is_finite() || self.width <= 0.0
    }
}

/// What happens to the active index when the pointer leaves the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LeavePolicy {
    /// Keep showing the last hovered item.
    #[default]
    Retain,
    /// Snap back to the first item.
    Reset,
}

/// Progress-bar state of one zone relative to the active item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoneState {
    Passed,
    Active,
    Upcoming,
}

/// `(pointer_x - left) / width`, or `None` when it cannot be computed.
/// Not clamped: pointers outside the container give values outside `[0, 1)`.
pub fn pointer_fraction(pointer_x: f32, rect: ContainerRect) -> Option<f32> {
    if rect.is_degenerate() || !pointer_x.is_finite() {
        return None;
    }
    Some((pointer_x - rect.left) / rect.width)
}

/// Item under the pointer: `floor(fraction * count)` clamped into
/// `[0, count - 1]`. Degenerate input maps to 0.
pub fn index_at(pointer_x: f32, rect: ContainerRect, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let Some(fraction) = pointer_fraction(pointer_x, rect) else {
        return 0;
    };
    let raw = (fraction * count as f32).floor();
    if raw.is_nan() || raw <= 0.0 {
        return 0;
    }
    (raw as usize).min(count - 1)
}

pub struct PointerCarousel<T> {
    items: Arc<[T]>,
    active: usize,
    hovering: bool,
    has_interacted: bool,
    attached: bool,
    leave_policy: LeavePolicy,
}

impl<T> fmt::Debug for PointerCarousel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerCarousel")
            .field("len", &self.items.len())
            .field("active", &self.active)
            .field("hovering", &self.hovering)
            .field("has_interacted", &self.has_interacted)
            .field("attached", &self.attached)
            .field("leave_policy", &self.leave_policy)
            .finish()
    }
}

impl<T> PointerCarousel<T> {
    /// Attach a carousel at index 0. An empty list is allowed; every event on
    /// it is a no-op.
    pub fn new(items: impl Into<Arc<[T]>>, leave_policy: LeavePolicy) -> Self {
        Self {
            items: items.into(),
            active: 0,
            hovering: false,
            has_interacted: false,
            attached: true,
            leave_policy,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn index(&self) -> usize {
        self.active
    }

    pub fn current(&self) -> Option<&T> {
        self.items.get(self.active)
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Whether the pointer has moved over the viewer since it was attached.
    /// The "hover to explore" hint shows until this flips.
    pub fn has_interacted(&self) -> bool {
        self.has_interacted
    }

    /// Whether the custom cursor follower should be drawn.
    pub fn shows_cursor(&self) -> bool {
        self.hovering && self.has_interacted
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn leave_policy(&self) -> LeavePolicy {
        self.leave_policy
    }

    pub fn on_pointer_enter(&mut self) {
        if self.attached {
            self.hovering = true;
        }
    }

    /// Map a pointer move to a zone. Returns the new index when it changed.
    pub fn on_pointer_move(
        &mut self,
        pointer_x: f32,
        rect: ContainerRect,
    ) -> Option<usize> {
        if !self.attached {
            warn!("pointer move on a detached product carousel ignored");
            return None;
        }
        if self.items.is_empty() || pointer_fraction(pointer_x, rect).is_none()
        {
            return None;
        }

        self.has_interacted = true;
        let index = index_at(pointer_x, rect, self.items.len());
        self.set_active(index)
    }

    /// Returns the new index when the leave policy moved it.
    pub fn on_pointer_leave(&mut self) -> Option<usize> {
        if !self.attached {
            return None;
        }
        self.hovering = false;
        match self.leave_policy {
            LeavePolicy::Retain => None,
            LeavePolicy::Reset => self.set_active(0),
        }
    }

    /// Dot indicator click. Out of range targets are clamped.
    pub fn select(&mut self, target: isize) -> Option<usize> {
        if !self.attached || self.items.is_empty() {
            return None;
        }
        let index = crate::rotation::clamp_target(target, self.items.len());
        self.set_active(index)
    }

    pub fn zone(&self, index: usize) -> ZoneState {
        match index.cmp(&self.active) {
            std::cmp::Ordering::Less => ZoneState::Passed,
            std::cmp::Ordering::Equal => ZoneState::Active,
            std::cmp::Ordering::Greater => ZoneState::Upcoming,
        }
    }

    pub fn zones(&self) -> impl Iterator<Item = ZoneState> + '_ {
        (0..self.items.len()).map(move |i| self.zone(i))
    }

    /// Stop reacting to pointer events. Later events report no change.
    pub fn detach(&mut self) {
        if self.attached {
            self.attached = false;
            self.hovering = false;
            debug!(index = self.active, "product carousel detached");
        }
    }

    fn set_active(&mut self, index: usize) -> Option<usize> {
        if index == self.active {
            return None;
        }
        debug!(from = self.active, to = index, "product carousel moved");
        self.active = index;
        Some(index)
    }
}
