//! Index arithmetic shared by every carousel.
//!
//! Timer ticks, chevron presses and dot jumps all funnel through
//! [`Rotation::apply`], so wraparound and clamping live in exactly one place.

use crate::error::{CarouselError, Result};

/// Which way the most recent transition moved through the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[repr(i8)]
pub enum Direction {
    Backward = -1,
    #[default]
    Still = 0,
    Forward = 1,
}

impl Direction {
    pub fn signum(self) -> i8 {
        self as i8
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Backward => Direction::Forward,
            Direction::Still => Direction::Still,
            Direction::Forward => Direction::Backward,
        }
    }
}

/// A navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Timer tick or "next" chevron.
    Next,
    /// "previous" chevron.
    Prev,
    /// Dot indicator. Out of range targets are clamped into the list.
    Jump(isize),
}

/// Snapshot handed to the presentation layer after every transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Slide {
    pub index: usize,
    pub direction: Direction,
}

/// `(index + 1) mod len`. Returns 0 for an empty list.
pub fn wrap_forward(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (index % len + 1) % len
    }
}

/// `(index - 1 + len) mod len`. Returns 0 for an empty list.
pub fn wrap_backward(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (index % len + len - 1) % len
    }
}

/// Clamp a signed jump target into `[0, len - 1]`.
pub fn clamp_target(target: isize, len: usize) -> usize {
    if len == 0 || target <= 0 {
        return 0;
    }
    (target as usize).min(len - 1)
}

/// Direction of a jump from `current` to `target`. Jumps never wrap, so a
/// larger target is always forward.
pub fn direction_between(current: usize, target: usize) -> Direction {
    match target.cmp(&current) {
        std::cmp::Ordering::Greater => Direction::Forward,
        std::cmp::Ordering::Less => Direction::Backward,
        std::cmp::Ordering::Equal => Direction::Still,
    }
}

/// Pure transition function. Returns `None` when the step leaves the
/// carousel where it is (a jump onto the active index, or any step on an
/// empty list).
pub fn step(current: usize, len: usize, request: Step) -> Option<Slide> {
    if len == 0 {
        return None;
    }
    match request {
        Step::Next => Some(Slide {
            index: wrap_forward(current, len),
            direction: Direction::Forward,
        }),
        Step::Prev => Some(Slide {
            index: wrap_backward(current, len),
            direction: Direction::Backward,
        }),
        Step::Jump(target) => {
            let index = clamp_target(target, len);
            match direction_between(current, index) {
                Direction::Still => None,
                direction => Some(Slide { index, direction }),
            }
        }
    }
}

/// Active index plus last direction for a list of fixed length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotation {
    len: usize,
    current: Slide,
}

impl Rotation {
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(CarouselError::Empty);
        }
        Ok(Self {
            len,
            current: Slide::default(),
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.current.index
    }

    pub fn direction(&self) -> Direction {
        self.current.direction
    }

    pub fn slide(&self) -> Slide {
        self.current
    }

    /// Apply a step and return the new snapshot, or `None` if nothing moved.
    pub fn apply(&mut self, request: Step) -> Option<Slide> {
        let next = step(self.current.index, self.len, request)?;
        self.current = next;
        Some(next)
    }

    /// Back to the first item with no direction, as on a fresh mount.
    pub fn reset(&mut self, len: usize) -> Result<()> {
        *self = Self::new(len)?;
        Ok(())
    }
}
