//! Commerce REST API client implementation.
//!
//! Uses `reqwest` for HTTP and caches carts using `moka` (short TTL, see
//! `ATLAS_CART_CACHE_TTL_SECS`).

use std::sync::Arc;

use atlas_core::CartSnapshot;
use moka::future::Cache;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::Deserialize;
use tracing::{debug, instrument};
use url::Url;

use super::CommerceError;
use crate::config::CommerceConfig;

const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";
const MAX_CART_ID_LEN: usize = 64;

/// Response envelope used by the commerce REST API.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

// =============================================================================
// CommerceClient
// =============================================================================

/// Client for the commerce REST API.
///
/// Cheap to clone; all clones share the HTTP connection pool and the cart cache.
#[derive(Clone)]
pub struct CommerceClient {
    inner: Arc<CommerceClientInner>,
}

struct CommerceClientInner {
    client: reqwest::Client,
    api_url: Url,
    access_token: String,
    carts: Cache<String, CartSnapshot>,
}

impl CommerceClient {
    /// Create a new commerce API client.
    #[must_use]
    pub fn new(config: &CommerceConfig) -> Self {
        let carts = Cache::builder()
            .max_capacity(10_000)
            .time_to_live(config.cart_cache_ttl)
            .build();

        Self {
            inner: Arc::new(CommerceClientInner {
                client: reqwest::Client::new(),
                api_url: config.api_url.clone(),
                access_token: config.api_token.expose_secret().to_string(),
                carts,
            }),
        }
    }

    /// Get a cart by id, including its redirect URLs.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is malformed, the cart does not exist, or
    /// the API request fails.
    #[instrument(skip(self), fields(cart_id = %cart_id))]
    pub async fn get_cart(&self, cart_id: &str) -> Result<CartSnapshot, CommerceError> {
        validate_cart_id(cart_id)?;

        if let Some(cart) = self.inner.carts.get(cart_id).await {
            debug!("Cache hit for cart");
            return Ok(cart);
        }

        let url = self.cart_url(cart_id)?;
        let envelope: Envelope<CartSnapshot> = self.get_json(url, cart_id).await?;
        let cart = envelope.data;

        self.inner
            .carts
            .insert(cart_id.to_string(), cart.clone())
            .await;

        Ok(cart)
    }

    /// Drop a cached cart so the next read goes to the API.
    pub async fn invalidate_cart(&self, cart_id: &str) {
        self.inner.carts.invalidate(cart_id).await;
    }

    /// `{api_url}/carts/{id}?include=redirect_urls`
    fn cart_url(&self, cart_id: &str) -> Result<Url, CommerceError> {
        let mut url = self.inner.api_url.clone();
        url.path_segments_mut()
            .map_err(|()| CommerceError::InvalidCartId(cart_id.to_string()))?
            .pop_if_empty()
            .push("carts")
            .push(cart_id);
        url.query_pairs_mut().append_pair("include", "redirect_urls");
        Ok(url)
    }

    /// Issue an authenticated GET and decode the JSON body.
    async fn get_json<T>(&self, url: Url, resource: &str) -> Result<T, CommerceError>
    where
        T: serde::de::DeserializeOwned,
    {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let response = self
            .inner
            .client
            .get(url)
            .headers(headers)
            .header(AUTH_TOKEN_HEADER, &self.inner.access_token)
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CommerceError::NotFound(resource.to_string()));
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(1);
            return Err(CommerceError::RateLimited(retry_after));
        }

        // Body as text first for better error diagnostics
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(500).collect::<String>(),
                "Commerce API returned non-success status"
            );
            return Err(CommerceError::Status {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %body.chars().take(500).collect::<String>(),
                "Failed to parse commerce API response"
            );
            CommerceError::Parse(e)
        })
    }
}

/// Cart ids are opaque tokens; allow only what the backend issues.
fn validate_cart_id(cart_id: &str) -> Result<(), CommerceError> {
    let well_formed = !cart_id.is_empty()
        && cart_id.len() <= MAX_CART_ID_LEN
        && cart_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if well_formed {
        Ok(())
    } else {
        Err(CommerceError::InvalidCartId(cart_id.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use secrecy::SecretString;

    use super::*;

    fn client(api_url: &str) -> CommerceClient {
        CommerceClient::new(&CommerceConfig {
            api_url: Url::parse(api_url).unwrap(),
            api_token: SecretString::from("k9Xq2LmP7vRt4ZwB8nYc"),
            cart_cache_ttl: Duration::from_secs(30),
        })
    }

    #[test]
    fn test_cart_url_appends_segments() {
        let client = client("https://api.atlas.test/stores/abc/v3");
        let url = client.cart_url("4a1b-77").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.atlas.test/stores/abc/v3/carts/4a1b-77?include=redirect_urls"
        );
    }

    #[test]
    fn test_cart_url_handles_trailing_slash() {
        let client = client("https://api.atlas.test/v3/");
        let url = client.cart_url("c1").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.atlas.test/v3/carts/c1?include=redirect_urls"
        );
    }

    #[test]
    fn test_validate_cart_id() {
        assert!(validate_cart_id("0b5f6c3e-4a1b-4c1e-9f5b-1d2e3f4a5b6c").is_ok());
        assert!(validate_cart_id("").is_err());
        assert!(validate_cart_id("../admin").is_err());
        assert!(validate_cart_id("a b").is_err());
        assert!(validate_cart_id(&"x".repeat(65)).is_err());
    }

    #[tokio::test]
    async fn test_get_cart_rejects_bad_id_without_request() {
        let client = client("http://127.0.0.1:9/v3");
        let err = client.get_cart("../../etc").await.unwrap_err();
        assert!(matches!(err, CommerceError::InvalidCartId(_)));
    }

    #[test]
    fn test_envelope_decodes_cart() {
        let body = r#"{"data":{"cart_amount":9,"line_items":{"physical_items":[{"id":"a","name":"Cap","quantity":2,"sale_price":4.5}]},"redirect_urls":{"cart_url":"https://shop/cart","checkout_url":"https://shop/checkout"}}}"#;
        let envelope: Envelope<CartSnapshot> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.data.item_count(), 2);
        assert_eq!(
            envelope.data.redirect_urls.checkout_url.as_deref(),
            Some("https://shop/checkout")
        );
    }
}
