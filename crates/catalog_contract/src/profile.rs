//! User profile, download history, and favorites.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Aggregate profile for the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Host-platform user identifier.
    #[serde(default)]
    pub user_id: Option<i64>,
    /// Given name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Family name.
    #[serde(default)]
    pub last_name: Option<String>,
    /// Public handle without the leading `@`.
    #[serde(default)]
    pub username: Option<String>,
    /// Lifetime download count.
    #[serde(default)]
    pub total_downloads: Option<u64>,
}

impl UserProfile {
    /// Joins the available name parts with a single space.
    pub fn display_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Returns the `@handle` form when a non-empty username is set.
    pub fn handle(&self) -> Option<String> {
        self.username
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(|name| format!("@{name}"))
    }
}

/// One past download event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadRecord {
    /// Name of the downloaded item.
    #[serde(default, rename = "software_name")]
    pub item_name: String,
    /// ISO-8601 timestamp of the download event.
    #[serde(default)]
    pub timestamp: String,
    /// Links delivered for this event; only the count is surfaced.
    #[serde(default)]
    pub links_sent: Vec<Value>,
}

impl DownloadRecord {
    /// Returns how many links were delivered for this event.
    pub fn links_delivered(&self) -> usize {
        self.links_sent.len()
    }
}

/// Favorited catalog entry (subset of the catalog item fields).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteRecord {
    /// Opaque backend identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Entry name.
    #[serde(default)]
    pub name: String,
    /// Category label.
    #[serde(default)]
    pub category: String,
    /// Average rating in `0..=5`.
    #[serde(default, rename = "average_rating")]
    pub rating: Option<f64>,
}

/// `GET /api/user/profile` envelope: profile, history, and favorites in one response.
///
/// `user` is `null` for unknown or unauthenticated sessions, which is a valid terminal state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProfileBundle {
    /// Profile, if the backend could resolve one.
    #[serde(default)]
    pub user: Option<UserProfile>,
    /// Most recent downloads first.
    #[serde(default)]
    pub downloads: Vec<DownloadRecord>,
    /// Favorited entries.
    #[serde(default)]
    pub favorites: Vec<FavoriteRecord>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn null_user_decodes_as_absent_profile() {
        let bundle: ProfileBundle = serde_json::from_value(json!({
            "user": null,
            "downloads": [],
            "favorites": []
        }))
        .expect("decode profile");
        assert_eq!(bundle.user, None);
    }

    #[test]
    fn profile_name_parts_and_handle() {
        let profile = UserProfile {
            user_id: Some(7),
            first_name: Some("Ada".to_string()),
            last_name: None,
            username: Some("ada".to_string()),
            total_downloads: Some(3),
        };
        assert_eq!(profile.display_name(), "Ada");
        assert_eq!(profile.handle().as_deref(), Some("@ada"));

        let anonymous = UserProfile {
            username: Some("  ".to_string()),
            ..profile
        };
        assert_eq!(anonymous.handle(), None);
    }

    #[test]
    fn download_record_counts_delivered_links() {
        let record: DownloadRecord = serde_json::from_value(json!({
            "software_name": "Editor",
            "timestamp": "2024-03-01T10:00:00",
            "links_sent": [{ "url": "https://a" }, { "url": "https://b" }]
        }))
        .expect("decode download record");
        assert_eq!(record.item_name, "Editor");
        assert_eq!(record.links_delivered(), 2);
    }
}
