//! Named image slots used across the site.

use serde::{Deserialize, Serialize};

/// One named asset slot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SiteAsset {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub alt: String,
}

/// Site assets document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SiteAssets {
    #[serde(default)]
    pub assets: Vec<SiteAsset>,
}
