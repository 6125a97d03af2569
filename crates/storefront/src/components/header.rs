//! Site header: branding, navigation toggle, search link, sign-out control
//! and the mini-cart.

use atlas_core::{MenuItem, StoreSettings, menu};
use url::form_urlencoded;

use super::cart_quick_view::CartQuickView;
use crate::middleware::ShopperSession;
use crate::site::SiteContent;

/// Base class of the header element.
const HEADER_CLASS: &str = "header";

/// Id of the primary navigation element (the toggle's `aria-controls`).
pub const PRIMARY_NAVIGATION_ID: &str = "primary-navigation";

/// Query parameter carrying the nav toggle state.
const NAV_PARAM: &str = "nav";

/// Initial state of the navigation toggle, taken from `?nav=`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NavState {
    Open,
    #[default]
    Closed,
}

impl NavState {
    /// `open` shows the navigation; anything else leaves it closed.
    #[must_use]
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("open") => Self::Open,
            _ => Self::Closed,
        }
    }

    #[must_use]
    pub const fn is_shown(self) -> bool {
        matches!(self, Self::Open)
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

/// Inputs the host supplies to the header.
#[derive(Debug, Clone, Copy)]
pub struct HeaderProps<'a> {
    /// Extra class appended to the header element.
    pub class_name: Option<&'a str>,
    pub store_settings: &'a StoreSettings,
    pub title: &'a str,
    pub description: &'a str,
    pub menu_items: &'a [MenuItem],
}

impl<'a> From<&'a SiteContent> for HeaderProps<'a> {
    fn from(site: &'a SiteContent) -> Self {
        Self {
            class_name: None,
            store_settings: &site.store_settings,
            title: &site.title,
            description: &site.description,
            menu_items: &site.menu_items,
        }
    }
}

/// Display data for the header partial.
#[derive(Debug, Clone)]
pub struct HeaderView {
    class_name: Option<String>,
    title: String,
    description: String,
    logo_url: Option<String>,
    primary_color: Option<String>,
    secondary_color: Option<String>,
    menu_items: Vec<MenuItem>,
    nav: NavState,
    /// Current query pairs other than `nav`, kept by the toggle link.
    query: Vec<(String, String)>,
    signed_in: bool,
    cart: CartQuickView,
}

impl HeaderView {
    #[must_use]
    pub fn new(
        props: HeaderProps<'_>,
        shopper: ShopperSession,
        nav: NavState,
        cart: CartQuickView,
    ) -> Self {
        Self {
            class_name: props
                .class_name
                .filter(|class| !class.is_empty())
                .map(String::from),
            title: props.title.to_string(),
            description: props.description.to_string(),
            logo_url: resolve_logo_url(props.store_settings),
            primary_color: props.store_settings.store_primary_color.clone(),
            secondary_color: props.store_settings.store_secondary_color.clone(),
            menu_items: menu::top_level(props.menu_items).cloned().collect(),
            nav,
            query: Vec::new(),
            signed_in: shopper.is_signed_in(),
            cart,
        }
    }

    /// Keep the page's other query parameters in the nav toggle link.
    #[must_use]
    pub fn with_query(mut self, raw: Option<&str>) -> Self {
        self.query = raw
            .map(|raw| {
                form_urlencoded::parse(raw.as_bytes())
                    .filter(|(key, _)| key != NAV_PARAM)
                    .map(|(key, value)| (key.into_owned(), value.into_owned()))
                    .collect()
            })
            .unwrap_or_default();
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn header_classes(&self) -> String {
        match &self.class_name {
            Some(extra) => format!("{HEADER_CLASS} {extra}"),
            None => HEADER_CLASS.to_string(),
        }
    }

    /// Background from the primary color, text from the secondary color.
    #[must_use]
    pub fn header_style(&self) -> String {
        let mut declarations = Vec::new();
        if let Some(color) = &self.primary_color {
            declarations.push(format!("background-color: {color}"));
        }
        if let Some(color) = &self.secondary_color {
            declarations.push(format!("color: {color}"));
        }
        declarations.join("; ")
    }

    /// Style for title, description and the search icon.
    #[must_use]
    pub fn accent_style(&self) -> String {
        self.secondary_color
            .as_deref()
            .map(|color| format!("color: {color}; fill: {color}"))
            .unwrap_or_default()
    }

    #[must_use]
    pub const fn has_logo(&self) -> bool {
        self.logo_url.is_some()
    }

    #[must_use]
    pub fn logo_url(&self) -> &str {
        self.logo_url.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn menu_items(&self) -> &[MenuItem] {
        &self.menu_items
    }

    #[must_use]
    pub const fn is_nav_shown(&self) -> bool {
        self.nav.is_shown()
    }

    #[must_use]
    pub fn nav_classes(&self) -> String {
        if self.is_nav_shown() {
            format!("{PRIMARY_NAVIGATION_ID} show")
        } else {
            PRIMARY_NAVIGATION_ID.to_string()
        }
    }

    /// `aria-expanded` value for the toggle.
    #[must_use]
    pub const fn nav_expanded(&self) -> &'static str {
        if self.is_nav_shown() { "true" } else { "false" }
    }

    /// Link that flips the toggle without JavaScript.
    #[must_use]
    pub fn nav_toggle_href(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::from("?"));
        query.extend_pairs(&self.query);
        query.append_pair(NAV_PARAM, self.nav.toggled().as_str());
        query.finish()
    }

    #[must_use]
    pub const fn primary_navigation_id(&self) -> &'static str {
        PRIMARY_NAVIGATION_ID
    }

    /// Whether the sign-out control is shown.
    #[must_use]
    pub const fn is_signed_in(&self) -> bool {
        self.signed_in
    }

    #[must_use]
    pub const fn cart(&self) -> &CartQuickView {
        &self.cart
    }
}

/// Logo URL from the first settings node.
///
/// A malformed logo blob is logged and treated as "no logo".
fn resolve_logo_url(settings: &StoreSettings) -> Option<String> {
    match settings.logo() {
        Ok(logo) => logo.and_then(|l| l.url).filter(|url| !url.is_empty()),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to parse store logo, rendering without it");
            None
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use atlas_core::StoreSettingsNode;

    use super::*;

    fn settings(logo: Option<&str>) -> StoreSettings {
        StoreSettings {
            nodes: vec![StoreSettingsNode {
                store_logo: logo.map(String::from),
                ..StoreSettingsNode::default()
            }],
            store_primary_color: Some("#101010".to_string()),
            store_secondary_color: Some("#fefefe".to_string()),
        }
    }

    fn menu() -> Vec<MenuItem> {
        vec![
            MenuItem {
                id: "1".to_string(),
                label: "Shop".to_string(),
                path: "/shop".to_string(),
                parent_id: None,
                css_classes: Vec::new(),
            },
            MenuItem {
                id: "2".to_string(),
                label: "Mugs".to_string(),
                path: "/product-category/mugs".to_string(),
                parent_id: Some("1".to_string()),
                css_classes: Vec::new(),
            },
        ]
    }

    fn header(settings: &StoreSettings, shopper: ShopperSession, nav: NavState) -> HeaderView {
        let menu = menu();
        let props = HeaderProps {
            class_name: Some("site-header"),
            store_settings: settings,
            title: "Atlas",
            description: "Gear",
            menu_items: &menu,
        };
        HeaderView::new(props, shopper, nav, CartQuickView::new(None, settings))
    }

    #[test]
    fn test_logo_url_resolved() {
        let settings = settings(Some(r#"{"url":"https://cdn.atlas.test/logo.png"}"#));
        let view = header(&settings, ShopperSession::signed_out(), NavState::Closed);
        assert!(view.has_logo());
        assert_eq!(view.logo_url(), "https://cdn.atlas.test/logo.png");
    }

    #[test]
    fn test_malformed_logo_degrades_to_none() {
        let settings = settings(Some("{not json"));
        let view = header(&settings, ShopperSession::signed_out(), NavState::Closed);
        assert!(!view.has_logo());
        assert_eq!(view.logo_url(), "");
    }

    #[test]
    fn test_missing_logo_and_nodes() {
        let view = header(&settings(None), ShopperSession::signed_out(), NavState::Closed);
        assert!(!view.has_logo());

        let bare = StoreSettings::default();
        let view = header(&bare, ShopperSession::signed_out(), NavState::Closed);
        assert!(!view.has_logo());
        assert_eq!(view.header_style(), "");
        assert_eq!(view.accent_style(), "");
    }

    #[test]
    fn test_styles_from_colors() {
        let view = header(&settings(None), ShopperSession::signed_out(), NavState::Closed);
        assert_eq!(view.header_style(), "background-color: #101010; color: #fefefe");
        assert_eq!(view.accent_style(), "color: #fefefe; fill: #fefefe");
    }

    #[test]
    fn test_nav_toggle_state() {
        let closed = header(&settings(None), ShopperSession::signed_out(), NavState::Closed);
        assert_eq!(closed.nav_classes(), "primary-navigation");
        assert_eq!(closed.nav_expanded(), "false");
        assert_eq!(closed.nav_toggle_href(), "?nav=open");

        let open = header(&settings(None), ShopperSession::signed_out(), NavState::Open);
        assert_eq!(open.nav_classes(), "primary-navigation show");
        assert_eq!(open.nav_expanded(), "true");
        assert_eq!(open.nav_toggle_href(), "?nav=closed");
    }

    #[test]
    fn test_nav_toggle_keeps_other_query_params() {
        let view = header(&settings(None), ShopperSession::signed_out(), NavState::Closed)
            .with_query(Some("q=trail+boots&nav=closed&page=2"));
        assert_eq!(view.nav_toggle_href(), "?q=trail+boots&page=2&nav=open");

        let view = header(&settings(None), ShopperSession::signed_out(), NavState::Open)
            .with_query(Some("nav=open"));
        assert_eq!(view.nav_toggle_href(), "?nav=closed");

        let view = header(&settings(None), ShopperSession::signed_out(), NavState::Open)
            .with_query(None);
        assert_eq!(view.nav_toggle_href(), "?nav=closed");
    }

    #[test]
    fn test_only_top_level_menu_items() {
        let view = header(&settings(None), ShopperSession::signed_out(), NavState::Closed);
        assert_eq!(view.menu_items().len(), 1);
        assert_eq!(view.menu_items()[0].label, "Shop");
    }

    #[test]
    fn test_header_classes() {
        let view = header(&settings(None), ShopperSession::signed_out(), NavState::Closed);
        assert_eq!(view.header_classes(), "header site-header");
    }

    #[test]
    fn test_nav_state_from_query() {
        assert_eq!(NavState::from_query(Some("open")), NavState::Open);
        assert_eq!(NavState::from_query(Some("OPEN")), NavState::Open);
        assert_eq!(NavState::from_query(Some("closed")), NavState::Closed);
        assert_eq!(NavState::from_query(Some("sideways")), NavState::Closed);
        assert_eq!(NavState::from_query(None), NavState::Closed);
    }

    #[test]
    fn test_signed_in_flag_follows_session() {
        let mut headers = axum::http::HeaderMap::new();
        headers.insert(
            axum::http::header::COOKIE,
            axum::http::HeaderValue::from_static("atlasecom-token-user=abc"),
        );
        let signed_in = ShopperSession::probe(&headers);

        let view = header(&settings(None), signed_in, NavState::Closed);
        assert!(view.is_signed_in());

        let view = header(&settings(None), ShopperSession::signed_out(), NavState::Closed);
        assert!(!view.is_signed_in());
    }
}
