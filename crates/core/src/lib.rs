//! Atlas Core - Shared types library.
//!
//! This crate provides the types the storefront projects into HTML:
//! - cart snapshots reported by the headless commerce backend
//! - store settings and menus supplied by the content-management system
//! - the closed set of content-template keys
//!
//! # Architecture
//!
//! The core crate contains only types and pure derivations - no I/O, no HTTP
//! clients. This keeps it lightweight and easy to test.
//!
//! # Modules
//!
//! - [`types`] - Cart, price, store settings, menu and template types

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
