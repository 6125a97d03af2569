//! Commerce backend REST client.
//!
//! # Architecture
//!
//! - The commerce backend is the source of truth for carts - no local copy
//! - Carts are read-only here; creation and mutation happen in the
//!   backend's own add-to-cart flow
//! - In-memory caching via `moka` keeps the header cheap to render on every page
//!
//! # Example
//!
//! ```rust,ignore
//! use atlas_storefront::commerce::CommerceClient;
//!
//! let client = CommerceClient::new(&config.commerce);
//! let cart = client.get_cart("4a1b…").await?;
//! println!("{} items", cart.item_count());
//! ```

mod client;

pub use client::CommerceClient;

use thiserror::Error;

/// Errors that can occur when talking to the commerce API.
#[derive(Debug, Error)]
pub enum CommerceError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Non-success status other than 404/429.
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rate limited by the commerce API.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Cart id is empty or otherwise unusable.
    #[error("Invalid cart id: {0:?}")]
    InvalidCartId(String),
}
