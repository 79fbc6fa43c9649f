//! Project gallery: an auto carousel that also reports which way it slid.

use std::sync::Arc;
use std::time::Duration;

use showroom_model::{PROJECTS, Project};
use tokio::sync::watch;

use crate::auto::AutoCarousel;
use crate::error::Result;
use crate::rotation::{Direction, Slide};

pub const DEFAULT_GALLERY_INTERVAL: Duration = Duration::from_secs(6);

/// Horizontal travel of the entering and exiting slides.
pub const DEFAULT_SLIDE_DISTANCE: f32 = 300.0;

/// Horizontal start of the entering slide and end of the exiting one,
/// relative to the resting position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideOffsets {
    pub enter_from: f32,
    pub exit_to: f32,
}

impl SlideOffsets {
    /// Forward slides enter from the right and leave to the left; backward
    /// is the mirror image. `Still` does not move.
    pub fn for_direction(direction: Direction, distance: f32) -> Self {
        let travel = distance * f32::from(direction.signum());
        Self {
            enter_from: travel,
            exit_to: -travel,
        }
    }
}

#[derive(Debug)]
pub struct ProjectGallery {
    carousel: AutoCarousel<Project>,
    slide_distance: f32,
}

impl ProjectGallery {
    /// Mount the gallery over the built-in project list.
    pub fn mount(interval: Duration, slide_distance: f32) -> Result<Self> {
        Self::mount_with(&PROJECTS[..], interval, slide_distance)
    }

    pub fn mount_with(
        projects: impl Into<Arc<[Project]>>,
        interval: Duration,
        slide_distance: f32,
    ) -> Result<Self> {
        Ok(Self {
            carousel: AutoCarousel::mount("projects", projects, interval)?,
            slide_distance,
        })
    }

    pub fn current(&self) -> &Project {
        self.carousel.current()
    }

    pub fn slide(&self) -> Slide {
        self.carousel.slide()
    }

    pub fn index(&self) -> usize {
        self.carousel.index()
    }

    pub fn direction(&self) -> Direction {
        self.carousel.direction()
    }

    pub fn len(&self) -> usize {
        self.carousel.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carousel.is_empty()
    }

    pub fn interval(&self) -> Duration {
        self.carousel.interval()
    }

    pub fn is_mounted(&self) -> bool {
        self.carousel.is_mounted()
    }

    pub fn subscribe(&self) -> watch::Receiver<Slide> {
        self.carousel.subscribe()
    }

    pub fn next(&mut self) -> Option<Slide> {
        self.carousel.next()
    }

    pub fn prev(&mut self) -> Option<Slide> {
        self.carousel.prev()
    }

    pub fn go_to(&mut self, target: isize) -> Option<Slide> {
        self.carousel.go_to(target)
    }

    pub fn set_interval(&mut self, interval: Duration) -> Result<()> {
        self.carousel.set_interval(interval)
    }

    /// Offsets for the transition that produced the current slide.
    pub fn offsets(&self) -> SlideOffsets {
        SlideOffsets::for_direction(self.direction(), self.slide_distance)
    }

    /// `"02 / 04"` style position counter.
    pub fn counter_label(&self) -> String {
        format!("{:02} / {:02}", self.index() + 1, self.len())
    }

    /// Active dot per project, in order.
    pub fn dots(&self) -> impl Iterator<Item = bool> + '_ {
        self.carousel.dots()
    }

    pub fn unmount(self) {
        self.carousel.unmount();
    }
}
