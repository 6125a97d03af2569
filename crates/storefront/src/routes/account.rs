//! Account route handlers.
//!
//! Sign-in happens elsewhere; the storefront only offers sign-out.

use axum::{
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse, Redirect},
};
use tracing::instrument;

use crate::error::add_breadcrumb;
use crate::middleware::{ShopperSession, expired_token_cookie};

/// Where the shopper lands after signing out.
pub const MY_ACCOUNT_PATH: &str = "/my-account";

/// Clear the shopper token cookie and redirect to the account page.
///
/// Safe to call when already signed out; the cookie is cleared either way.
#[instrument(skip(shopper), fields(signed_in = shopper.is_signed_in()))]
pub async fn sign_out(shopper: ShopperSession) -> impl IntoResponse {
    if shopper.is_signed_in() {
        add_breadcrumb("auth", "Shopper signed out", None);
        tracing::info!("Shopper signed out");
    }

    (
        AppendHeaders([(SET_COOKIE, expired_token_cookie().to_string())]),
        Redirect::to(MY_ACCOUNT_PATH),
    )
}
