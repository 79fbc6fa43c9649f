//! Headless run of the three carousels against a configuration.

use std::fmt;
use std::time::Duration;

use anyhow::{Context, Result};
use showroom_core::{
    ContainerRect, ProductShowcase, ProjectGallery, mount_testimonials,
};
use tokio::time::{Instant, sleep_until};
use tracing::{debug, info};

use crate::models::ShowroomConfig;

/// Width of the simulated product viewer in layout pixels.
const VIEWER_WIDTH: f32 = 1200.0;

#[derive(Debug, Clone)]
pub struct PreviewOptions {
    pub duration: Duration,
    /// Overrides `products.initial_category`.
    pub category: Option<String>,
    pub sweep_steps: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewReport {
    pub testimonial_transitions: usize,
    pub gallery_transitions: usize,
    pub final_testimonial: usize,
    pub final_project: usize,
    pub category: String,
    pub product_moves: usize,
    pub final_product: usize,
}

impl fmt::Display for PreviewReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "testimonials: {} transitions, resting on #{}",
            self.testimonial_transitions, self.final_testimonial
        )?;
        writeln!(
            f,
            "gallery:      {} transitions, resting on #{}",
            self.gallery_transitions, self.final_project
        )?;
        write!(
            f,
            "products:     {} moves across '{}', resting on #{}",
            self.product_moves, self.category, self.final_product
        )
    }
}

/// Mount both timed carousels, log every transition until `duration`
/// elapses, then sweep a pointer across the product viewer.
pub async fn run_preview(
    config: &ShowroomConfig,
    options: &PreviewOptions,
) -> Result<PreviewReport> {
    let testimonials = mount_testimonials(config.testimonials.interval)
        .context("failed to mount testimonials")?;
    let gallery = ProjectGallery::mount(
        config.gallery.interval,
        config.gallery.slide_distance,
    )
    .context("failed to mount project gallery")?;

    let mut testimonial_rx = testimonials.subscribe();
    let mut gallery_rx = gallery.subscribe();
    let mut report = PreviewReport::default();

    let deadline = Instant::now() + options.duration;
    info!(duration = %humantime::format_duration(options.duration), "preview started");

    loop {
        tokio::select! {
            biased;
            _ = sleep_until(deadline) => break,
            changed = testimonial_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let slide = *testimonial_rx.borrow_and_update();
                report.testimonial_transitions += 1;
                let quote = &testimonials.items()[slide.index];
                info!(
                    index = slide.index,
                    direction = ?slide.direction,
                    author = quote.author,
                    "testimonial"
                );
            }
            changed = gallery_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let slide = *gallery_rx.borrow_and_update();
                report.gallery_transitions += 1;
                let offsets = gallery.offsets();
                info!(
                    index = slide.index,
                    counter = %gallery.counter_label(),
                    title = gallery.current().title,
                    enter_from = offsets.enter_from,
                    "project"
                );
            }
        }
    }

    report.final_testimonial = testimonials.index();
    report.final_project = gallery.index();
    testimonials.unmount();
    gallery.unmount();

    let category = options
        .category
        .as_deref()
        .unwrap_or(&config.products.initial_category);
    let mut showcase = ProductShowcase::new(config.products.leave_policy)?;
    showcase.select_category(category)?;
    report.category = showcase.active_category().id.to_string();
    report.product_moves = sweep(&mut showcase, options.sweep_steps);
    report.final_product = showcase.viewer().index();

    info!("preview finished");
    Ok(report)
}

/// Move a pointer left to right across the viewer and out again.
fn sweep(showcase: &mut ProductShowcase, steps: usize) -> usize {
    let rect = ContainerRect::new(0.0, VIEWER_WIDTH);
    let viewer = showcase.viewer_mut();
    let mut moves = 0;

    viewer.on_pointer_enter();
    for step in 0..steps {
        let x = VIEWER_WIDTH * step as f32 / steps as f32;
        if let Some(index) = viewer.on_pointer_move(x, rect) {
            moves += 1;
            if let Some(product) = viewer.current() {
                info!(index, x, product = product.label, "product");
            }
        }
    }
    if let Some(index) = viewer.on_pointer_leave() {
        moves += 1;
        debug!(index, "pointer left, viewer reset");
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use showroom_core::LeavePolicy;

    fn options(secs: u64) -> PreviewOptions {
        PreviewOptions {
            duration: Duration::from_secs(secs),
            category: None,
            sweep_steps: 8,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn counts_transitions_on_both_cadences() {
        let report = run_preview(&ShowroomConfig::default(), &options(20))
            .await
            .expect("preview");

        // 7s: 7, 14. 6s: 6, 12, 18.
        assert_eq!(report.testimonial_transitions, 2);
        assert_eq!(report.gallery_transitions, 3);
        assert_eq!(report.final_testimonial, 2);
        assert_eq!(report.final_project, 3);
        assert_eq!(report.category, "security");
    }

    #[tokio::test(start_paused = true)]
    async fn sweep_visits_every_product() {
        let mut options = options(0);
        options.category = Some("door-control".into());
        let report = run_preview(&ShowroomConfig::default(), &options)
            .await
            .expect("preview");

        // Four products over eight samples: 0 is already active.
        assert_eq!(report.category, "door-control");
        assert_eq!(report.product_moves, 3);
        assert_eq!(report.final_product, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn reset_policy_returns_to_first_product() {
        let mut config = ShowroomConfig::default();
        config.products.leave_policy = LeavePolicy::Reset;
        let report = run_preview(&config, &options(0)).await.expect("preview");

        assert_eq!(report.product_moves, 4);
        assert_eq!(report.final_product, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_category_fails() {
        let mut options = options(0);
        options.category = Some("plumbing".into());
        let err = run_preview(&ShowroomConfig::default(), &options)
            .await
            .expect_err("unknown category");
        assert!(err.to_string().contains("plumbing"));
    }
}
