//! Pure display helpers shared by the screens: card fields, download messages, category
//! partitioning, dates, and per-listing copy.

use catalog_contract::{CatalogItem, ContentType, DownloadLinkSet};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Alert shown when download links could not be retrieved.
pub const DOWNLOAD_ERROR_MESSAGE: &str = "Error getting download links. Please try again.";

/// Download button label while idle.
pub const DOWNLOAD_IDLE_LABEL: &str = "⬇️ Download";

/// Download button label while a request is pending.
pub const DOWNLOAD_PENDING_LABEL: &str = "Loading...";

/// Generic in-flight placeholder.
pub const LOADING_LABEL: &str = "Loading...";

/// Shortener services recognized in download link sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkService {
    /// `adrinolinks`
    AdrinoLinks,
    /// `url2cash`
    Url2Cash,
    /// Any other (or missing) service name.
    Other,
}

impl LinkService {
    /// Classifies a service name as reported by the backend.
    pub fn from_service(service: &str) -> Self {
        match service.trim().to_ascii_lowercase().as_str() {
            "adrinolinks" => Self::AdrinoLinks,
            "url2cash" => Self::Url2Cash,
            _ => Self::Other,
        }
    }

    /// Returns the emoji marker prefixed to each link line.
    pub const fn marker(self) -> &'static str {
        match self {
            Self::AdrinoLinks => "💵",
            Self::Url2Cash => "💰",
            Self::Other => "🔗",
        }
    }
}

/// Builds the alert text listing every download link, one numbered line per link.
pub fn format_download_message(item_name: &str, links: &DownloadLinkSet) -> String {
    let mut message = format!("📦 {item_name}\n\n⬇️ Download Links:\n\n");
    for (index, link) in links.links.iter().enumerate() {
        let marker = LinkService::from_service(&link.service).marker();
        message.push_str(&format!("{marker} Link {}: {}\n", index + 1, link.url));
    }
    message
}

/// Server category labels split between the games and software screens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryPartition {
    /// Labels mentioning "game" (case-insensitive).
    pub games: Vec<String>,
    /// Every other label.
    pub software: Vec<String>,
}

/// Splits software categories into game and non-game labels, preserving server order.
pub fn partition_categories(categories: &[String]) -> CategoryPartition {
    let (games, software): (Vec<String>, Vec<String>) = categories
        .iter()
        .cloned()
        .partition(|category| category.to_lowercase().contains("game"));
    CategoryPartition { games, software }
}

/// Formats a rating the way the listing shows it (`4.5`, `4`, `0`).
pub fn format_rating(rating: Option<f64>) -> String {
    let rating = rating.filter(|value| value.is_finite()).unwrap_or(0.0);
    if rating.fract() == 0.0 {
        format!("{rating:.0}")
    } else {
        format!("{rating}")
    }
}

/// Display fields for one catalog card.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemCardView {
    /// Name (or title for movies).
    pub title: String,
    /// `📂 {category}`
    pub category: String,
    /// `💻 {platforms}` when any platform is listed.
    pub platforms: Option<String>,
    /// Rating/downloads/size badges; `None` for movies.
    pub stats: Option<ItemStats>,
    /// Description when present and non-empty; always `None` for movies.
    pub description: Option<String>,
}

/// Stat badges shown on software and game cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemStats {
    /// `⭐ {rating}/5`
    pub rating: String,
    /// `📥 {count}`
    pub downloads: String,
    /// `📏 {size}` when the size is known.
    pub size: Option<String>,
}

impl ItemCardView {
    /// Builds the card fields for `item` on the `content_type` listing.
    pub fn new(item: &CatalogItem, content_type: ContentType) -> Self {
        let category = format!("📂 {}", item.category);
        if content_type == ContentType::Movies {
            return Self {
                title: item.display_name().to_string(),
                category,
                platforms: None,
                stats: None,
                description: None,
            };
        }

        Self {
            title: item.display_name().to_string(),
            category,
            platforms: (!item.platforms.is_empty())
                .then(|| format!("💻 {}", item.platforms.join(", "))),
            stats: Some(ItemStats {
                rating: format!("⭐ {}/5", format_rating(item.rating)),
                downloads: format!("📥 {}", item.download_count.unwrap_or(0)),
                size: item
                    .size
                    .as_deref()
                    .filter(|size| !size.trim().is_empty())
                    .map(|size| format!("📏 {size}")),
            }),
            description: item
                .description
                .as_deref()
                .filter(|text| !text.trim().is_empty())
                .map(str::to_string),
        }
    }
}

/// Formats an ISO-8601 timestamp as `M/D/YYYY`; unparseable input is returned unchanged.
pub fn format_download_date(timestamp: &str) -> String {
    let trimmed = timestamp.trim();
    let date = DateTime::parse_from_rfc3339(trimmed)
        .map(|value| value.date_naive())
        .or_else(|_| {
            NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f").map(|value| value.date())
        })
        .or_else(|_| NaiveDate::parse_from_str(trimmed.get(..10).unwrap_or(trimmed), "%Y-%m-%d"));

    match date {
        Ok(date) => date.format("%-m/%-d/%Y").to_string(),
        Err(_) => trimmed.to_string(),
    }
}

/// `{n} links`
pub fn links_badge(count: usize) -> String {
    format!("{count} links")
}

/// Static copy for one paginated listing screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingCopy {
    /// Page heading.
    pub heading: &'static str,
    /// Search input placeholder.
    pub search_placeholder: &'static str,
    /// Placeholder shown when the current page is empty.
    pub empty_placeholder: &'static str,
}

/// Returns the screen copy for `content_type`.
pub const fn listing_copy(content_type: ContentType) -> ListingCopy {
    match content_type {
        ContentType::Games => ListingCopy {
            heading: "🎮 Games",
            search_placeholder: "🔍 Search games...",
            empty_placeholder: "No games found",
        },
        ContentType::Software => ListingCopy {
            heading: "💻 Software",
            search_placeholder: "🔍 Search software...",
            empty_placeholder: "No software found",
        },
        ContentType::Movies => ListingCopy {
            heading: "🎬 Movies",
            search_placeholder: "🔍 Search movies...",
            empty_placeholder: "No movies found",
        },
    }
}
