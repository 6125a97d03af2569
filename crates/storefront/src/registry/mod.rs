//! Template registry: content-type key to renderer.
//!
//! The registry is built once on first use and never changes. It answers
//! lookups only; deciding what to do with an unknown key is the caller's job.
//!
//! ```rust,ignore
//! let renderer = TemplateRegistry::global().get("product-category").ok_or(...)?;
//! let html = renderer(&PageContext { header, page })?;
//! ```

mod renderers;

use std::collections::HashMap;
use std::sync::LazyLock;

use atlas_core::TemplateKind;

use crate::components::HeaderView;

/// Renders one content type to a full HTML document.
pub type Renderer = fn(&PageContext) -> askama::Result<String>;

static REGISTRY: LazyLock<TemplateRegistry> = LazyLock::new(TemplateRegistry::build);

/// What a renderer knows about the page besides the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageData {
    pub kind: TemplateKind,
    pub title: String,
    pub slug: Option<String>,
    pub search_query: Option<String>,
}

impl PageData {
    #[must_use]
    pub fn new(kind: TemplateKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            slug: None,
            search_query: None,
        }
    }

    /// Page for a slug, titled from the slug.
    #[must_use]
    pub fn for_slug(kind: TemplateKind, slug: &str) -> Self {
        Self {
            slug: Some(slug.to_string()),
            ..Self::new(kind, title_from_slug(slug))
        }
    }

    #[must_use]
    pub fn with_search_query(mut self, query: Option<String>) -> Self {
        self.search_query = query.filter(|q| !q.trim().is_empty());
        self
    }

    #[must_use]
    pub fn slug(&self) -> &str {
        self.slug.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub const fn has_search_query(&self) -> bool {
        self.search_query.is_some()
    }

    #[must_use]
    pub fn search_query(&self) -> &str {
        self.search_query.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub const fn template_key(&self) -> &'static str {
        self.kind.key()
    }
}

/// Everything a renderer receives.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub header: HeaderView,
    pub page: PageData,
}

/// Static mapping from template key to renderer.
pub struct TemplateRegistry {
    renderers: HashMap<&'static str, Renderer>,
}

impl TemplateRegistry {
    fn build() -> Self {
        let renderers = TemplateKind::ALL
            .into_iter()
            .map(|kind| (kind.key(), renderer_for(kind)))
            .collect();
        Self { renderers }
    }

    /// The process-wide registry.
    #[must_use]
    pub fn global() -> &'static Self {
        &REGISTRY
    }

    /// Look up the renderer for a key. Unknown keys yield `None`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Renderer> {
        self.renderers.get(key).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }
}

fn renderer_for(kind: TemplateKind) -> Renderer {
    match kind {
        TemplateKind::Category => renderers::category,
        TemplateKind::Tag => renderers::tag,
        TemplateKind::FrontPage => renderers::front_page,
        TemplateKind::PageShop => renderers::shop,
        TemplateKind::PageSearch => renderers::search,
        TemplateKind::ProductCategory => renderers::product_category,
        TemplateKind::Page => renderers::page,
        TemplateKind::Single => renderers::single,
        TemplateKind::Product => renderers::product,
    }
}

/// "summer-sale_2024" -> "Summer Sale 2024"
#[must_use]
pub fn title_from_slug(slug: &str) -> String {
    slug.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect::<String>()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
