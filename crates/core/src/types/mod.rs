//! Core types for the Atlas storefront.
//!
//! This module provides type-safe wrappers for the data the storefront reads
//! from its commerce and content backends.

pub mod cart;
pub mod menu;
pub mod price;
pub mod store;
pub mod template;

pub use cart::{CartSnapshot, LineItem, LineItems, RedirectUrls};
pub use menu::MenuItem;
pub use price::{CurrencyCode, Price};
pub use store::{StoreLogo, StoreLogoError, StoreSettings, StoreSettingsNode};
pub use template::TemplateKind;
