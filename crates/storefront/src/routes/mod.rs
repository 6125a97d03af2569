//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                   - Health check
//! GET  /static/*                 - CSS/JS assets
//!
//! # Pages (template key in brackets, all accept ?nav=open|closed)
//! GET  /                         - Home page [front-page]
//! GET  /shop                     - Shop listing [page-shop]
//! GET  /search?q=                - Search [page-search]
//! GET  /category/{slug}          - Blog category [category]
//! GET  /tag/{slug}               - Blog tag [tag]
//! GET  /product/{slug}           - Product detail [product]
//! GET  /product-category/{slug}  - Product category [product-category]
//! GET  /posts/{slug}             - Blog post [single]
//! GET  /{slug}                   - Content page [page]
//!
//! # Cart (HTMX fragments)
//! GET  /cart/quick-view          - Mini-cart fragment
//! POST /cart/session             - Remember cart id (triggers cart-updated)
//!
//! # Account
//! POST /sign-out                - Clear shopper cookie, redirect to /my-account
//! ```

pub mod account;
pub mod cart;
pub mod pages;

use axum::{
    Router,
    extract::Request,
    middleware::from_fn,
    routing::{get, post},
};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::Span;

use crate::error::AppError;
use crate::middleware::{
    create_session_layer, request_id_middleware, security_headers_middleware,
    shopper_session_middleware,
};
use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/quick-view", get(cart::quick_view))
        .route("/session", post(cart::attach))
}

/// Create the page routes router.
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::front_page))
        .route("/shop", get(pages::shop))
        .route("/search", get(pages::search))
        .route("/category/{slug}", get(pages::category))
        .route("/tag/{slug}", get(pages::tag))
        .route("/product/{slug}", get(pages::product))
        .route("/product-category/{slug}", get(pages::product_category))
        .route("/posts/{slug}", get(pages::single))
        .route("/{slug}", get(pages::page))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(page_routes())
        // Cart routes
        .nest("/cart", cart_routes())
        // POST only; a GET gets 405
        .route("/sign-out", post(account::sign_out))
}

/// Build the full application with its middleware stack.
///
/// Sentry layers are not included; `main` wraps them around the result so
/// tests can drive the router without a Sentry client.
pub fn app(state: AppState) -> Router {
    let session_layer = create_session_layer(state.config());
    let static_files = ServeDir::new(&state.config().static_dir);

    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .nest_service("/static", static_files)
        .fallback(not_found)
        .layer(from_fn(shopper_session_middleware))
        .layer(session_layer)
        .layer(from_fn(security_headers_middleware))
        .layer(from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check the commerce backend.
async fn health() -> &'static str {
    "ok"
}

async fn not_found() -> AppError {
    AppError::NotFound("page".to_string())
}

/// Root span for a request; middleware fills in the empty fields.
fn make_request_span(request: &Request) -> Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = tracing::field::Empty,
        signed_in = tracing::field::Empty,
    )
}
