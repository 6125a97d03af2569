//! Site-wide content: store settings, title, description and primary menu.
//!
//! Loaded once at startup from a JSON file exported from the CMS and shared
//! read-only by every request.
//!
//! ```json
//! {
//!   "title": "Atlas Outfitters",
//!   "description": "Gear for the long way round",
//!   "storeSettings": {
//!     "nodes": [{ "storeLogo": "{\"url\":\"/static/img/logo.svg\"}" }],
//!     "storePrimaryColor": "#0f172a",
//!     "storeSecondaryColor": "#f8fafc"
//!   },
//!   "menuItems": [{ "id": "1", "label": "Shop", "path": "/shop" }]
//! }
//! ```

use std::path::Path;

use atlas_core::{MenuItem, StoreSettings};
use serde::Deserialize;
use thiserror::Error;

/// Errors loading site content.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Site-wide content shared by every page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub store_settings: StoreSettings,
    #[serde(default)]
    pub menu_items: Vec<MenuItem>,
}

impl SiteContent {
    /// Load site content from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn load(path: &Path) -> Result<Self, SiteError> {
        let raw = std::fs::read_to_string(path).map_err(|source| SiteError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let content = Self::from_json(&raw).map_err(|source| SiteError::Parse {
            path: path.display().to_string(),
            source,
        })?;

        tracing::info!(
            title = %content.title,
            menu_items = content.menu_items.len(),
            "Loaded site content"
        );
        Ok(content)
    }

    /// Parse site content from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not match the site content shape.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
