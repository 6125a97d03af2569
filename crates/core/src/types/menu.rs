//! Navigation menu entries.

use serde::{Deserialize, Serialize};

/// A navigation entry from the CMS primary menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub label: String,
    pub path: String,
    /// Set for nested entries.
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub css_classes: Vec<String>,
}

impl MenuItem {
    #[must_use]
    pub const fn is_top_level(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Space-separated class list for the rendered link.
    #[must_use]
    pub fn class_list(&self) -> String {
        self.css_classes.join(" ")
    }
}

/// Top-level entries in menu order.
pub fn top_level(items: &[MenuItem]) -> impl Iterator<Item = &MenuItem> {
    items.iter().filter(|item| item.is_top_level())
}
