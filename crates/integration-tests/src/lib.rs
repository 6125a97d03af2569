//! Integration tests for Atlas Storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p atlas-integration-tests
//! ```
//!
//! Each test starts the storefront in-process on an ephemeral port and talks
//! to it over real HTTP with `reqwest`. Tests that need carts also start a
//! mock commerce API (see [`CommerceMock`]). Nothing external is required.
//!
//! # Test Categories
//!
//! - `storefront_header` - Header rendering, nav toggle, security headers
//! - `storefront_routes` - Every template key is reachable and renders
//! - `storefront_session` - Shopper cookie probe and sign-out
//! - `storefront_cart` - Cart attach and mini-cart refresh

#![allow(clippy::missing_panics_doc)]

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use atlas_storefront::config::{CommerceConfig, StorefrontConfig};
use atlas_storefront::routes;
use atlas_storefront::site::SiteContent;
use atlas_storefront::state::AppState;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
};
use reqwest::{Client, cookie::Jar, redirect::Policy};
use secrecy::SecretString;
use serde_json::{Value, json};
use url::Url;

/// Token the mock commerce API expects in `X-Auth-Token`.
pub const TEST_API_TOKEN: &str = "q7Hc2vLx9PzR4mWt8KbN3sJd6FgY1aE5";

/// Name of the shopper token cookie.
pub const SHOPPER_COOKIE: &str = "atlasecom-token-user";

/// Site content shipped with the storefront crate.
const SITE_JSON: &str = include_str!("../../storefront/site.json");

/// A storefront running on an ephemeral port.
pub struct TestContext {
    pub client: Client,
    pub cookies: Arc<Jar>,
    pub base_url: Url,
}

impl TestContext {
    /// Storefront whose commerce API is unreachable; every cart fetch fails.
    pub async fn new() -> Self {
        let api_url = Url::parse("http://127.0.0.1:9/stores/test/v3").expect("valid URL");
        Self::with_commerce(api_url).await
    }

    /// Storefront talking to the given commerce API.
    pub async fn with_commerce(api_url: Url) -> Self {
        let state = AppState::new(test_config(api_url), test_site());
        let base_url = spawn(routes::app(state)).await;

        let cookies = Arc::new(Jar::default());
        let client = Client::builder()
            .cookie_provider(Arc::clone(&cookies))
            .redirect(Policy::none())
            .no_proxy()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            cookies,
            base_url,
        }
    }

    /// Absolute URL for a storefront path.
    pub fn url(&self, path: &str) -> Url {
        self.base_url.join(path).expect("valid path")
    }

    /// Store a cookie for the storefront as a browser would.
    pub fn set_cookie(&self, cookie: &str) {
        self.cookies.add_cookie_str(cookie, &self.base_url);
    }

    /// GET a path and return status and body.
    pub async fn get_text(&self, path: &str) -> (reqwest::StatusCode, String) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("request failed");
        let status = resp.status();
        let body = resp.text().await.expect("Failed to read response");
        (status, body)
    }
}

/// Storefront configuration pointing at `api_url`.
pub fn test_config(api_url: Url) -> StorefrontConfig {
    StorefrontConfig {
        host: [127, 0, 0, 1].into(),
        port: 0,
        base_url: "http://127.0.0.1".to_string(),
        site_path: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../storefront/site.json")),
        static_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../storefront/static")),
        commerce: CommerceConfig {
            api_url,
            api_token: SecretString::from(TEST_API_TOKEN),
            cart_cache_ttl: Duration::from_secs(30),
        },
        sentry_dsn: None,
        sentry_environment: None,
        sentry_sample_rate: 1.0,
        sentry_traces_sample_rate: 0.0,
    }
}

/// The storefront's bundled site content.
pub fn test_site() -> SiteContent {
    SiteContent::from_json(SITE_JSON).expect("site.json is valid")
}

/// Serve a router on an ephemeral port and return its base URL.
pub async fn spawn(app: Router) -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to address");
    let addr = listener.local_addr().expect("bound address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server error");
    });

    Url::parse(&format!("http://{addr}/")).expect("valid URL")
}

// ============================================================================
// Mock commerce API
// ============================================================================

#[derive(Clone)]
struct MockState {
    carts: Arc<HashMap<String, Value>>,
    hits: Arc<AtomicUsize>,
}

/// In-process stand-in for the commerce REST API.
///
/// Serves `GET /stores/test/v3/carts/{id}` from a fixed map and counts the
/// requests that reach it.
pub struct CommerceMock {
    pub api_url: Url,
    hits: Arc<AtomicUsize>,
}

impl CommerceMock {
    /// Start a mock serving `carts` (id to cart JSON).
    pub async fn start(carts: HashMap<String, Value>) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let state = MockState {
            carts: Arc::new(carts),
            hits: Arc::clone(&hits),
        };

        let app = Router::new()
            .route("/stores/test/v3/carts/{id}", get(mock_cart))
            .with_state(state);
        let base = spawn(app).await;

        Self {
            api_url: base.join("stores/test/v3").expect("valid URL"),
            hits,
        }
    }

    /// Requests the mock has answered so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

async fn mock_cart(
    State(state): State<MockState>,
    Path(id): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);

    let token = headers.get("x-auth-token").and_then(|v| v.to_str().ok());
    if token != Some(TEST_API_TOKEN) {
        return (StatusCode::UNAUTHORIZED, "missing token").into_response();
    }
    if query.get("include").map(String::as_str) != Some("redirect_urls") {
        return (StatusCode::BAD_REQUEST, "redirect_urls not requested").into_response();
    }

    match state.carts.get(&id) {
        Some(cart) => Json(json!({ "data": cart })).into_response(),
        None => (StatusCode::NOT_FOUND, "no such cart").into_response(),
    }
}

/// Cart with two physical units at 3.00 and one digital unit at 3.00.
pub fn sample_cart() -> Value {
    json!({
        "id": "cart-123",
        "cart_amount": 9,
        "line_items": {
            "physical_items": [{
                "id": "li-1",
                "name": "Summit Pack",
                "image_url": "https://cdn.atlas.test/pack.jpg",
                "quantity": 2,
                "sale_price": 3
            }],
            "digital_items": [{
                "id": 77,
                "name": "Trail Guide (PDF)",
                "quantity": 1,
                "sale_price": "3.00"
            }],
            "custom_items": [],
            "gift_certificates": []
        },
        "redirect_urls": {
            "cart_url": "https://shop.atlas.test/cart.php",
            "checkout_url": "https://shop.atlas.test/checkout"
        }
    })
}
