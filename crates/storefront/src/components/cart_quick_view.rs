//! Mini-cart shown in the site header.
//!
//! A pure projection of the current [`CartSnapshot`]: the subtotal is the
//! backend's reported amount, the count is summed from line quantities.

use askama::Template;
use askama_web::WebTemplate;
use atlas_core::{CartSnapshot, LineItem, Price, StoreSettings};

/// One line in the expanded mini-cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MiniCartItem {
    pub id: String,
    pub name: String,
    pub image_url: Option<String>,
    pub quantity: u32,
    /// Unit sale price, two decimals, no symbol.
    pub unit_price: String,
}

impl MiniCartItem {
    #[must_use]
    pub const fn has_image(&self) -> bool {
        self.image_url.is_some()
    }

    #[must_use]
    pub fn image_src(&self) -> &str {
        self.image_url.as_deref().unwrap_or_default()
    }
}

impl From<&LineItem> for MiniCartItem {
    fn from(item: &LineItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            image_url: item.image_url.clone().filter(|url| !url.is_empty()),
            quantity: item.quantity,
            unit_price: item.unit_price().formatted_amount(),
        }
    }
}

/// Display data for the mini-cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartQuickView {
    subtotal: String,
    count: u64,
    items: Vec<MiniCartItem>,
    cart_url: Option<String>,
    checkout_url: Option<String>,
    has_cart: bool,
    icon_fill: Option<String>,
}

impl CartQuickView {
    /// Project a cart (or its absence) into display data.
    #[must_use]
    pub fn new(cart: Option<&CartSnapshot>, settings: &StoreSettings) -> Self {
        let icon_fill = settings.store_secondary_color.clone();

        let Some(cart) = cart else {
            return Self {
                icon_fill,
                ..Self::empty()
            };
        };

        Self {
            subtotal: cart.subtotal().formatted_amount(),
            count: cart.item_count(),
            items: cart.items().map(MiniCartItem::from).collect(),
            cart_url: cart.redirect_urls.cart_url.clone(),
            checkout_url: cart.redirect_urls.checkout_url.clone(),
            has_cart: true,
            icon_fill,
        }
    }

    /// Zero subtotal, no items.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            subtotal: Price::zero().formatted_amount(),
            count: 0,
            items: Vec::new(),
            cart_url: None,
            checkout_url: None,
            has_cart: false,
            icon_fill: None,
        }
    }

    #[must_use]
    pub fn subtotal(&self) -> &str {
        &self.subtotal
    }

    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// "1 item", otherwise "N items".
    #[must_use]
    pub fn count_label(&self) -> String {
        let suffix = if self.count == 1 { "" } else { "s" };
        format!("{} item{suffix}", self.count)
    }

    #[must_use]
    pub fn items(&self) -> &[MiniCartItem] {
        &self.items
    }

    /// Whether a cart was available; controls the expanded list.
    #[must_use]
    pub const fn has_cart(&self) -> bool {
        self.has_cart
    }

    #[must_use]
    pub fn cart_url(&self) -> &str {
        self.cart_url.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn checkout_url(&self) -> &str {
        self.checkout_url.as_deref().unwrap_or_default()
    }

    /// Inline style for the cart icon.
    #[must_use]
    pub fn icon_style(&self) -> String {
        self.icon_fill
            .as_deref()
            .map(|color| format!("fill: {color}"))
            .unwrap_or_default()
    }
}

/// Mini-cart fragment, returned on its own so the page can refresh it.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_quick_view.html")]
pub struct CartQuickViewTemplate {
    pub cart: CartQuickView,
}
