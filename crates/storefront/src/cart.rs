//! Cart provider: the visitor's current cart, if any.
//!
//! The cart id lives in the session; the cart itself is read from the
//! commerce backend on demand. Failures never break page rendering, they
//! just mean "no cart".

use atlas_core::CartSnapshot;
use tower_sessions::Session;
use tracing::instrument;

use crate::middleware::get_cart_id;
use crate::state::AppState;

/// Fetch the visitor's cart.
///
/// Returns `None` when the session has no cart id or the backend cannot
/// provide the cart.
#[instrument(skip(state, session))]
pub async fn current_cart(state: &AppState, session: &Session) -> Option<CartSnapshot> {
    let cart_id = get_cart_id(session).await?;

    match state.commerce().get_cart(&cart_id).await {
        Ok(cart) => Some(cart),
        Err(e) => {
            tracing::warn!("Failed to fetch cart {cart_id}: {e}");
            None
        }
    }
}
