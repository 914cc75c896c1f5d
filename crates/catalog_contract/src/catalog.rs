//! Paginated catalog listings (games, software, movies) and their query vocabulary.

use serde::{Deserialize, Deserializer, Serialize};

use crate::download::ItemType;

/// Query value the backend treats as "no category restriction".
pub const ALL_CATEGORIES: &str = "all";

/// Paginated catalog kinds served by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// Software entries whose category mentions games.
    Games,
    /// Non-game software entries.
    Software,
    /// Movie entries.
    Movies,
}

impl ContentType {
    /// Every catalog kind, in navigation order.
    pub const ALL: [Self; 3] = [Self::Games, Self::Software, Self::Movies];

    /// Returns the stable lowercase token used in logs and response envelopes.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Games => "games",
            Self::Software => "software",
            Self::Movies => "movies",
        }
    }

    /// Returns the REST path serving this listing.
    pub const fn endpoint_path(self) -> &'static str {
        match self {
            Self::Games => "/api/games",
            Self::Software => "/api/software",
            Self::Movies => "/api/movies",
        }
    }

    /// Returns the `item_type` used when requesting download links for entries of this kind.
    pub const fn item_type(self) -> ItemType {
        match self {
            Self::Games | Self::Software => ItemType::Software,
            Self::Movies => ItemType::Movie,
        }
    }
}

/// Category restriction applied to a catalog listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// No restriction.
    #[default]
    All,
    /// Exact category label as returned by the backend.
    Exact(String),
}

impl CategoryFilter {
    /// Parses a select-control value, mapping the `all` sentinel (and blank input) to [`Self::All`].
    pub fn from_value(value: &str) -> Self {
        if value.is_empty() || value == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Exact(value.to_string())
        }
    }

    /// Returns the value sent in the `category` query parameter.
    pub fn as_query_value(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Exact(category) => category,
        }
    }

    /// Returns whether this is the unrestricted filter.
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

/// One page request against a paginated catalog endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    /// Listing being queried.
    pub content_type: ContentType,
    /// Free-text search; empty means no search.
    pub search_text: String,
    /// Category restriction.
    pub category: CategoryFilter,
    /// One-based page number.
    pub page: u32,
}

impl CatalogQuery {
    /// Builds the first-page query with no search and no category restriction.
    pub fn first_page(content_type: ContentType) -> Self {
        Self {
            content_type,
            search_text: String::new(),
            category: CategoryFilter::All,
            page: 1,
        }
    }

    /// Returns the query-string pairs in the order the backend documents them.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        vec![
            ("search".to_string(), self.search_text.clone()),
            (
                "category".to_string(),
                self.category.as_query_value().to_string(),
            ),
            ("page".to_string(), self.page.to_string()),
        ]
    }
}

/// One downloadable catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Opaque backend identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name for software and games.
    #[serde(default)]
    pub name: Option<String>,
    /// Display title for movies.
    #[serde(default)]
    pub title: Option<String>,
    /// Category label.
    #[serde(default)]
    pub category: String,
    /// Supported platforms; the backend sends either one string or a list.
    #[serde(
        default,
        rename = "os",
        deserialize_with = "one_or_many",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub platforms: Vec<String>,
    /// Average rating in `0..=5`.
    #[serde(default, rename = "average_rating")]
    pub rating: Option<f64>,
    /// Number of completed download requests.
    #[serde(default, rename = "downloads_count")]
    pub download_count: Option<u64>,
    /// Human-readable size such as `1.2 GB`.
    #[serde(default, rename = "file_size")]
    pub size: Option<String>,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
}

impl CatalogItem {
    /// Returns the best available label: `name`, then `title`, then the identifier.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.title.as_deref())
            .filter(|label| !label.trim().is_empty())
            .unwrap_or(&self.id)
    }
}

/// One page of catalog results as reported by the backend.
///
/// The envelope key differs per listing (`games`, `software`, `movies`); all three decode into
/// [`CatalogPage::items`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogPage {
    /// Entries on this page.
    #[serde(default, alias = "games", alias = "software", alias = "movies")]
    pub items: Vec<CatalogItem>,
    /// Total page count for the active filters; `0` when nothing matched.
    #[serde(default)]
    pub pages: u32,
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(value)) if value.trim().is_empty() => Vec::new(),
        Some(OneOrMany::One(value)) => vec![value],
        Some(OneOrMany::Many(values)) => values,
    })
}
