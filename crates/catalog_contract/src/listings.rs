//! Unpaginated listings (NFT claims, game scripts) and the shared category listing.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Claimable NFT collectible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NftItem {
    /// Opaque backend identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Collectible name.
    #[serde(default)]
    pub name: String,
    /// Claim instructions or blurb.
    #[serde(default)]
    pub description: String,
    /// External claim URL.
    #[serde(default)]
    pub link: String,
    /// Claim records; only the count is surfaced.
    #[serde(default)]
    pub claims: Vec<Value>,
}

impl NftItem {
    /// Returns how many users already claimed this collectible.
    pub fn claim_count(&self) -> usize {
        self.claims.len()
    }
}

/// Downloadable game script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptItem {
    /// Opaque backend identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Script name.
    #[serde(default)]
    pub name: String,
    /// Script description.
    #[serde(default)]
    pub description: String,
    /// External download URL.
    #[serde(default)]
    pub link: String,
    /// View counter.
    #[serde(default)]
    pub views: Option<u64>,
}

/// `GET /api/nfts` envelope.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NftListResponse {
    /// Active collectibles.
    #[serde(default)]
    pub nfts: Vec<NftItem>,
}

/// `GET /api/gamescripts` envelope.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScriptListResponse {
    /// Active scripts, most viewed first.
    #[serde(default)]
    pub scripts: Vec<ScriptItem>,
}

/// `GET /api/categories` envelope.
///
/// `software` is the combined software/game category list that screens partition client-side.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryListing {
    /// Every distinct software/game category.
    #[serde(default)]
    pub software: Vec<String>,
    /// Movie categories, when the backend reports them.
    #[serde(default)]
    pub movies: Vec<String>,
}
