//! Content-template discriminators.
//!
//! The key strings are a stable contract with the page resolver; do not
//! rename them.

use serde::{Deserialize, Serialize};

/// The closed set of content types the storefront knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateKind {
    Category,
    Tag,
    FrontPage,
    PageShop,
    PageSearch,
    ProductCategory,
    Page,
    Single,
    Product,
}

impl TemplateKind {
    /// Every kind, in registry order.
    pub const ALL: [Self; 9] = [
        Self::Category,
        Self::Tag,
        Self::FrontPage,
        Self::PageShop,
        Self::PageSearch,
        Self::ProductCategory,
        Self::Page,
        Self::Single,
        Self::Product,
    ];

    /// Registry key for this kind.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Tag => "tag",
            Self::FrontPage => "front-page",
            Self::PageShop => "page-shop",
            Self::PageSearch => "page-search",
            Self::ProductCategory => "product-category",
            Self::Page => "page",
            Self::Single => "single",
            Self::Product => "product",
        }
    }
}

impl std::fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for TemplateKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.key() == s)
            .ok_or_else(|| format!("unknown template: {s}"))
    }
}
