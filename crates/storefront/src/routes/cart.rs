//! Cart route handlers.
//!
//! The storefront never edits carts; the external add-to-cart flow does. These
//! handlers remember which cart belongs to the visitor and serve the mini-cart
//! fragment so the header can refresh without a reload.

use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::cart::current_cart;
use crate::components::{CartQuickView, CartQuickViewTemplate};
use crate::error::{Result, add_breadcrumb};
use crate::middleware::set_cart_id;
use crate::state::AppState;

/// Form data for attaching a cart to the session.
#[derive(Debug, Deserialize)]
pub struct AttachCartForm {
    pub cart_id: String,
}

/// Mini-cart fragment (HTMX).
#[instrument(skip(state, session))]
pub async fn quick_view(State(state): State<AppState>, session: Session) -> CartQuickViewTemplate {
    let cart = current_cart(&state, &session).await;

    CartQuickViewTemplate {
        cart: CartQuickView::new(cart.as_ref(), &state.site().store_settings),
    }
}

/// Remember the visitor's cart and return the refreshed mini-cart.
///
/// The cart is fetched fresh before it is stored, so an unknown or malformed
/// id never reaches the session.
///
/// # Errors
///
/// Returns 400 for a malformed id, 404 if the backend has no such cart and
/// 502 if the backend fails.
#[instrument(skip(state, session, form), fields(cart_id = %form.cart_id))]
pub async fn attach(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AttachCartForm>,
) -> Result<Response> {
    let cart_id = form.cart_id.trim();

    state.commerce().invalidate_cart(cart_id).await;
    let cart = state.commerce().get_cart(cart_id).await?;
    set_cart_id(&session, cart_id).await?;

    add_breadcrumb("cart", "Attached cart to session", Some(&[("cart_id", cart_id)]));
    tracing::info!(items = cart.item_count(), "Cart attached to session");

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartQuickViewTemplate {
            cart: CartQuickView::new(Some(&cart), &state.site().store_settings),
        },
    )
        .into_response())
}
