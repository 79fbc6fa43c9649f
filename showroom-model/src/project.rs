use crate::ids::ProjectId;

/// A completed installation featured in the project gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Project {
    pub id: ProjectId,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    /// Site-relative image path.
    pub image: &'static str,
    /// Pipe separated highlights, e.g. `"200+ Doors | Master Key System"`.
    pub specs: &'static str,
}

impl Project {
    /// Alt text for the project image.
    pub fn image_alt(&self) -> String {
        format!("{} - {} project", self.title, self.category)
    }

    /// The individual highlights from `specs`.
    pub fn spec_items(&self) -> impl Iterator<Item = &'static str> {
        self.specs
            .split('|')
            .map(str::trim)
            .filter(|item| !item.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_items_split_on_pipes() {
        let project = Project {
            id: ProjectId(9),
            title: "Test",
            category: "Retail",
            description: "",
            image: "/images/test.jpg",
            specs: "Automatic Entrances | Access Control |  ",
        };

        let items: Vec<_> = project.spec_items().collect();
        assert_eq!(items, vec!["Automatic Entrances", "Access Control"]);
        assert_eq!(project.image_alt(), "Test - Retail project");
    }
}
