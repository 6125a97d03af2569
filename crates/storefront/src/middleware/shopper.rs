//! Shopper sign-in state.
//!
//! An external auth flow sets the `atlasecom-token-user` cookie when the
//! shopper signs in. Its presence (not its value) means "signed in". The
//! cookie header is probed once per request by [`shopper_session_middleware`]
//! and the result is stored in request extensions, so every component that
//! renders during the request sees the same state.

use axum::{
    extract::{FromRequestParts, Request},
    http::{HeaderMap, header::COOKIE, request::Parts},
    middleware::Next,
    response::Response,
};
use tower_sessions::cookie::{Cookie, time::OffsetDateTime};

/// Name of the shopper token cookie.
pub const SESSION_TOKEN_COOKIE: &str = "atlasecom-token-user";

/// Request-scoped shopper session.
///
/// Use as an extractor:
///
/// ```rust,ignore
/// async fn handler(shopper: ShopperSession) -> impl IntoResponse {
///     if shopper.is_signed_in() { "welcome back" } else { "hello" }
/// }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShopperSession {
    signed_in: bool,
}

impl ShopperSession {
    /// A signed-out session.
    #[must_use]
    pub const fn signed_out() -> Self {
        Self { signed_in: false }
    }

    /// Inspect `Cookie` headers for the shopper token.
    #[must_use]
    pub fn probe(headers: &HeaderMap) -> Self {
        let signed_in = headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(Cookie::split_parse)
            .filter_map(Result::ok)
            .any(|cookie| cookie.name() == SESSION_TOKEN_COOKIE);

        Self { signed_in }
    }

    #[must_use]
    pub const fn is_signed_in(&self) -> bool {
        self.signed_in
    }
}

/// Middleware that probes the shopper cookie once and stores the result.
pub async fn shopper_session_middleware(mut request: Request, next: Next) -> Response {
    let shopper = ShopperSession::probe(request.headers());
    tracing::Span::current().record("signed_in", shopper.is_signed_in());
    request.extensions_mut().insert(shopper);
    next.run(request).await
}

impl<S> FromRequestParts<S> for ShopperSession
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Fall back to probing when the middleware is not installed
        Ok(parts
            .extensions
            .get::<Self>()
            .copied()
            .unwrap_or_else(|| Self::probe(&parts.headers)))
    }
}

/// Cookie that clears the shopper token: empty value, root path, already expired.
#[must_use]
pub fn expired_token_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_TOKEN_COOKIE, ""))
        .path("/")
        .expires(OffsetDateTime::UNIX_EPOCH)
        .build()
}
