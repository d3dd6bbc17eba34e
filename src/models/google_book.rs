//! Google Books search result models
//!
//! Read-only records decoded from the Google Books volume API and passed
//! through to clients untouched; never persisted.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One volume as returned by the Google Books API
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct GoogleBook {
    /// Identifier assigned by Google
    pub id: String,
    #[serde(rename = "volumeInfo")]
    pub volume_info: VolumeInfo,
}

/// Nested volume metadata
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct VolumeInfo {
    pub title: String,
    pub authors: Vec<String>,
    pub description: String,
}
