//! Page route handlers.
//!
//! Each handler picks a template key, looks it up in the registry and renders
//! it with the site header. The header's shopper state, nav toggle and
//! mini-cart come from the [`Visitor`] extractor.

use atlas_core::TemplateKind;
use axum::{
    extract::{FromRequestParts, Path, Query, State},
    http::{StatusCode, request::Parts},
    response::Html,
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::cart::current_cart;
use crate::components::{CartQuickView, HeaderProps, HeaderView, NavState};
use crate::error::{AppError, Result};
use crate::middleware::ShopperSession;
use crate::registry::{PageContext, PageData, TemplateRegistry};
use crate::state::AppState;

/// Title of the shop listing page.
const SHOP_TITLE: &str = "Shop";

/// Title of the search page.
const SEARCH_TITLE: &str = "Search";

/// Query parameters accepted by every page.
#[derive(Debug, Default, Deserialize)]
pub struct NavQuery {
    pub nav: Option<String>,
}

/// Search page query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// Who is asking: session, sign-in state, nav toggle and the page's query.
pub struct Visitor {
    session: Session,
    shopper: ShopperSession,
    nav: NavState,
    query: Option<String>,
}

impl<S> FromRequestParts<S> for Visitor
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state).await?;
        let Ok(shopper) = ShopperSession::from_request_parts(parts, state).await;

        // A malformed query string leaves the nav closed rather than failing the page
        let nav = Query::<NavQuery>::try_from_uri(&parts.uri)
            .map(|Query(query)| NavState::from_query(query.nav.as_deref()))
            .unwrap_or_default();

        Ok(Self {
            session,
            shopper,
            nav,
            query: parts.uri.query().map(String::from),
        })
    }
}

/// Build the header for this visitor.
///
/// Cart fetch failures are absorbed by [`current_cart`]; the header always
/// renders.
pub async fn header_for(state: &AppState, visitor: &Visitor) -> HeaderView {
    let site = state.site();
    let cart = current_cart(state, &visitor.session).await;

    HeaderView::new(
        HeaderProps::from(site),
        visitor.shopper,
        visitor.nav,
        CartQuickView::new(cart.as_ref(), &site.store_settings),
    )
    .with_query(visitor.query.as_deref())
}

/// Render a page through the template registry.
///
/// # Errors
///
/// Returns `AppError::NotFound` if no renderer is registered for the page's
/// key and `AppError::Render` if the template fails.
pub async fn render_page(
    state: &AppState,
    visitor: &Visitor,
    page: PageData,
) -> Result<Html<String>> {
    let key = page.template_key();
    let renderer = TemplateRegistry::global()
        .get(key)
        .ok_or_else(|| AppError::NotFound(format!("no template for {key}")))?;

    let header = header_for(state, visitor).await;
    let html = renderer(&PageContext { header, page })?;

    Ok(Html(html))
}

/// Home page.
///
/// # Errors
///
/// Returns an error if rendering fails.
#[instrument(skip(state, visitor))]
pub async fn front_page(State(state): State<AppState>, visitor: Visitor) -> Result<Html<String>> {
    let page = PageData::new(TemplateKind::FrontPage, state.site().title.clone());
    render_page(&state, &visitor, page).await
}

/// Shop listing page.
///
/// # Errors
///
/// Returns an error if rendering fails.
#[instrument(skip(state, visitor))]
pub async fn shop(State(state): State<AppState>, visitor: Visitor) -> Result<Html<String>> {
    let page = PageData::new(TemplateKind::PageShop, SHOP_TITLE);
    render_page(&state, &visitor, page).await
}

/// Search page; `?q=` is echoed back in the results summary.
///
/// # Errors
///
/// Returns an error if rendering fails.
#[instrument(skip(state, visitor))]
pub async fn search(
    State(state): State<AppState>,
    visitor: Visitor,
    Query(query): Query<SearchQuery>,
) -> Result<Html<String>> {
    let page = PageData::new(TemplateKind::PageSearch, SEARCH_TITLE).with_search_query(query.q);
    render_page(&state, &visitor, page).await
}

/// Blog category archive.
///
/// # Errors
///
/// Returns an error if rendering fails.
#[instrument(skip(state, visitor))]
pub async fn category(
    State(state): State<AppState>,
    visitor: Visitor,
    Path(slug): Path<String>,
) -> Result<Html<String>> {
    render_page(&state, &visitor, PageData::for_slug(TemplateKind::Category, &slug)).await
}

/// Blog tag archive.
///
/// # Errors
///
/// Returns an error if rendering fails.
#[instrument(skip(state, visitor))]
pub async fn tag(
    State(state): State<AppState>,
    visitor: Visitor,
    Path(slug): Path<String>,
) -> Result<Html<String>> {
    render_page(&state, &visitor, PageData::for_slug(TemplateKind::Tag, &slug)).await
}

/// Product category listing.
///
/// # Errors
///
/// Returns an error if rendering fails.
#[instrument(skip(state, visitor))]
pub async fn product_category(
    State(state): State<AppState>,
    visitor: Visitor,
    Path(slug): Path<String>,
) -> Result<Html<String>> {
    let page = PageData::for_slug(TemplateKind::ProductCategory, &slug);
    render_page(&state, &visitor, page).await
}

/// Product detail.
///
/// # Errors
///
/// Returns an error if rendering fails.
#[instrument(skip(state, visitor))]
pub async fn product(
    State(state): State<AppState>,
    visitor: Visitor,
    Path(slug): Path<String>,
) -> Result<Html<String>> {
    render_page(&state, &visitor, PageData::for_slug(TemplateKind::Product, &slug)).await
}

/// Single blog post.
///
/// # Errors
///
/// Returns an error if rendering fails.
#[instrument(skip(state, visitor))]
pub async fn single(
    State(state): State<AppState>,
    visitor: Visitor,
    Path(slug): Path<String>,
) -> Result<Html<String>> {
    render_page(&state, &visitor, PageData::for_slug(TemplateKind::Single, &slug)).await
}

/// Generic content page.
///
/// # Errors
///
/// Returns an error if rendering fails.
#[instrument(skip(state, visitor))]
pub async fn page(
    State(state): State<AppState>,
    visitor: Visitor,
    Path(slug): Path<String>,
) -> Result<Html<String>> {
    render_page(&state, &visitor, PageData::for_slug(TemplateKind::Page, &slug)).await
}
