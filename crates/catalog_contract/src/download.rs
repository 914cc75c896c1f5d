//! Download-link request payloads.

use serde::{Deserialize, Serialize};

/// Backend item kind passed as the `item_type` query parameter of a download request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    /// Software and game entries.
    Software,
    /// Movie entries.
    Movie,
}

impl ItemType {
    /// Returns the query-string token.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Software => "software",
            Self::Movie => "movie",
        }
    }
}

/// One shortened download link and the service that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadLink {
    /// Shortener service identifier such as `adrinolinks`.
    #[serde(default)]
    pub service: String,
    /// URL handed to the user.
    pub url: String,
}

/// Ordered links returned for one download request. Transient; never persisted client-side.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DownloadLinkSet {
    /// Links in backend order.
    #[serde(default)]
    pub links: Vec<DownloadLink>,
}

impl DownloadLinkSet {
    /// Returns whether the backend returned no links.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}
