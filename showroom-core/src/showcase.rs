//! Product tabs, each backed by its own pointer carousel.

use showroom_model::{PRODUCT_CATEGORIES, ProductCategory, ProductImage};
use tracing::info;

use crate::error::{CarouselError, Result};
use crate::pointer::{LeavePolicy, PointerCarousel};

/// The products section: category tabs plus the viewer for the active tab.
///
/// Switching tabs detaches the current viewer and attaches a fresh one, so
/// the new category always starts on its first product with the hint shown.
#[derive(Debug)]
pub struct ProductShowcase {
    categories: &'static [ProductCategory],
    active: &'static ProductCategory,
    viewer: PointerCarousel<ProductImage>,
    leave_policy: LeavePolicy,
}

impl ProductShowcase {
    /// Showcase over the built-in categories, first tab selected.
    pub fn new(leave_policy: LeavePolicy) -> Result<Self> {
        Self::with_categories(&PRODUCT_CATEGORIES, leave_policy)
    }

    pub fn with_categories(
        categories: &'static [ProductCategory],
        leave_policy: LeavePolicy,
    ) -> Result<Self> {
        let active = categories.first().ok_or(CarouselError::Empty)?;
        Ok(Self {
            categories,
            active,
            viewer: PointerCarousel::new(active.products, leave_policy),
            leave_policy,
        })
    }

    pub fn categories(&self) -> &'static [ProductCategory] {
        self.categories
    }

    pub fn active_category(&self) -> &'static ProductCategory {
        self.active
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.id == id
    }

    pub fn viewer(&self) -> &PointerCarousel<ProductImage> {
        &self.viewer
    }

    pub fn viewer_mut(&mut self) -> &mut PointerCarousel<ProductImage> {
        &mut self.viewer
    }

    /// Switch tabs. Returns `Ok(false)` when `id` is already active.
    pub fn select_category(&mut self, id: &str) -> Result<bool> {
        if self.is_active(id) {
            return Ok(false);
        }
        let next = self
            .categories
            .iter()
            .find(|category| category.id == id)
            .ok_or_else(|| CarouselError::UnknownCategory(id.to_string()))?;

        self.viewer.detach();
        self.viewer = PointerCarousel::new(next.products, self.leave_policy);
        self.active = next;
        info!(category = next.id, "product category selected");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pointer::ContainerRect;

    #[test]
    fn starts_on_first_category() {
        let showcase =
            ProductShowcase::new(LeavePolicy::Retain).expect("categories");
        assert_eq!(showcase.active_category().id, "security");
        assert_eq!(showcase.viewer().len(), 4);
        assert_eq!(
            showcase.viewer().current().map(|p| p.label),
            Some("Smart Digital Lock")
        );
    }

    #[test]
    fn switching_tabs_remounts_the_viewer() {
        let mut showcase =
            ProductShowcase::new(LeavePolicy::Retain).expect("categories");
        let rect = ContainerRect::new(0.0, 800.0);
        showcase.viewer_mut().on_pointer_move(700.0, rect);
        assert_eq!(showcase.viewer().index(), 3);

        assert_eq!(showcase.select_category("door-control"), Ok(true));
        assert_eq!(showcase.viewer().index(), 0);
        assert!(!showcase.viewer().has_interacted());
        assert_eq!(
            showcase.viewer().current().map(|p| p.brand),
            Some("Geze")
        );
    }

    #[test]
    fn reselecting_the_active_tab_keeps_the_viewer() {
        let mut showcase =
            ProductShowcase::new(LeavePolicy::Retain).expect("categories");
        showcase.viewer_mut().select(2);
        assert_eq!(showcase.select_category("security"), Ok(false));
        assert_eq!(showcase.viewer().index(), 2);
    }

    #[test]
    fn unknown_category_is_rejected() {
        let mut showcase =
            ProductShowcase::new(LeavePolicy::Retain).expect("categories");
        assert_eq!(
            showcase.select_category("plumbing"),
            Err(CarouselError::UnknownCategory("plumbing".into()))
        );
        assert!(showcase.is_active("security"));
    }

    #[test]
    fn empty_category_list_is_rejected() {
        let err = ProductShowcase::with_categories(&[], LeavePolicy::Retain)
            .expect_err("no categories");
        assert_eq!(err, CarouselError::Empty);
    }

    #[test]
    fn leave_policy_carries_over_to_new_viewers() {
        let mut showcase =
            ProductShowcase::new(LeavePolicy::Reset).expect("categories");
        showcase
            .select_category("architectural")
            .expect("known category");
        assert_eq!(showcase.viewer().leave_policy(), LeavePolicy::Reset);
    }
}
