//! Store presentation settings supplied by the content-management system.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors reading the store logo blob.
#[derive(Debug, Error)]
pub enum StoreLogoError {
    #[error("store logo is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Store settings as delivered by the CMS query.
///
/// Every field is optional; missing values render as blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSettings {
    #[serde(default)]
    pub nodes: Vec<StoreSettingsNode>,
    #[serde(default)]
    pub store_primary_color: Option<String>,
    #[serde(default)]
    pub store_secondary_color: Option<String>,
}

/// One settings node. Only the first node is consulted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSettingsNode {
    /// JSON-encoded [`StoreLogo`].
    #[serde(default)]
    pub store_logo: Option<String>,
    #[serde(default)]
    pub store_name: Option<String>,
    #[serde(default)]
    pub store_description: Option<String>,
}

/// Decoded logo blob.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreLogo {
    #[serde(default)]
    pub url: Option<String>,
}

impl StoreSettings {
    /// The first settings node, if any.
    #[must_use]
    pub fn primary_node(&self) -> Option<&StoreSettingsNode> {
        self.nodes.first()
    }

    /// Decode the logo blob of the first node.
    ///
    /// Returns `Ok(None)` when there is no node or no logo field.
    ///
    /// # Errors
    ///
    /// Returns `StoreLogoError::Json` when the blob is present but is not a
    /// JSON object of the expected shape.
    pub fn logo(&self) -> Result<Option<StoreLogo>, StoreLogoError> {
        match self.primary_node().and_then(|node| node.store_logo.as_deref()) {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    fn with_logo(raw: &str) -> StoreSettings {
        StoreSettings {
            nodes: vec![StoreSettingsNode {
                store_logo: Some(raw.to_string()),
                ..StoreSettingsNode::default()
            }],
            ..StoreSettings::default()
        }
    }

    #[test]
    fn test_logo_parses_url() {
        let settings = with_logo(r#"{"url":"https://cdn.example.com/logo.png"}"#);
        let logo = settings.logo().unwrap().unwrap();
        assert_eq!(logo.url.as_deref(), Some("https://cdn.example.com/logo.png"));
    }

    #[test]
    fn test_logo_malformed_is_error() {
        let settings = with_logo("not json");
        assert!(matches!(settings.logo(), Err(StoreLogoError::Json(_))));
    }

    #[test]
    fn test_logo_absent() {
        assert!(StoreSettings::default().logo().unwrap().is_none());

        let settings = StoreSettings {
            nodes: vec![StoreSettingsNode::default()],
            ..StoreSettings::default()
        };
        assert!(settings.logo().unwrap().is_none());
    }

    #[test]
    fn test_deserialize_cms_shape() {
        let settings: StoreSettings = serde_json::from_value(json!({
            "nodes": [{"storeLogo": "{\"url\":\"/logo.svg\"}"}],
            "storePrimaryColor": "#112233",
            "storeSecondaryColor": "#ffffff"
        }))
        .unwrap();

        assert_eq!(settings.store_primary_color.as_deref(), Some("#112233"));
        assert_eq!(
            settings.logo().unwrap().and_then(|l| l.url).as_deref(),
            Some("/logo.svg")
        );
    }
}
