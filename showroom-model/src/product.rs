/// One image in a category's product viewer.
///
/// Products have no identifier of their own; their position inside the
/// owning category is stable and doubles as one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ProductImage {
    pub src: &'static str,
    pub label: &'static str,
    pub brand: &'static str,
}

impl ProductImage {
    pub fn alt(&self) -> String {
        format!("{} by {}", self.label, self.brand)
    }
}

/// A product tab: copy for the details block plus the images the pointer
/// carousel sweeps through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ProductCategory {
    /// Slug used to select the tab.
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub applications: &'static [&'static str],
    pub products: &'static [ProductImage],
}
