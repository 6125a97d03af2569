//! Server-rendered UI components shared by every page.
//!
//! Components are plain view structs; their markup lives in
//! `templates/partials/` and is pulled into pages by the base layout.

pub mod cart_quick_view;
pub mod header;

pub use cart_quick_view::{CartQuickView, CartQuickViewTemplate, MiniCartItem};
pub use header::{HeaderProps, HeaderView, NavState};
