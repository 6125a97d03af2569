//! Atlas Storefront library.
//!
//! Site header, mini-cart and template registry for a headless commerce
//! storefront, served by axum. The binary in `main.rs` wires this library to
//! configuration, tracing and Sentry; tests drive [`routes::app`] directly.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod commerce;
pub mod components;
pub mod config;
pub mod error;
pub mod middleware;
pub mod registry;
pub mod routes;
pub mod site;
pub mod state;
