//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, added in `main`)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (add unique ID to each request)
//! 4. Security headers (CSP, frame options, etc.)
//! 5. Session layer (tower-sessions, holds the cart id)
//! 6. Shopper session (probe the sign-in cookie once per request)

pub mod request_id;
pub mod security_headers;
pub mod session;
pub mod shopper;

pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
pub use session::{create_session_layer, get_cart_id, set_cart_id};
pub use shopper::{
    SESSION_TOKEN_COOKIE, ShopperSession, expired_token_cookie, shopper_session_middleware,
};
