//! Fetch-once listings without filters or pages (NFT claims, game scripts).

use catalog_api::{ApiError, CatalogApiClient};
use catalog_contract::{NftItem, ScriptItem};
use futures::future::LocalBoxFuture;

/// Entry type rendered by a static listing screen.
pub trait StaticListEntry: Clone + PartialEq + 'static {
    /// Placeholder shown when the listing is empty or failed to load.
    const EMPTY_PLACEHOLDER: &'static str;

    /// Short noun used in log lines.
    const LOG_NOUN: &'static str;

    /// Fetches every entry.
    fn fetch_all(api: &CatalogApiClient) -> LocalBoxFuture<'_, Result<Vec<Self>, ApiError>>;

    /// Link opened by the entry's action button.
    fn link(&self) -> &str;

    /// Alert shown after the link is opened.
    fn open_message(&self) -> String;
}

impl StaticListEntry for NftItem {
    const EMPTY_PLACEHOLDER: &'static str = "No NFTs available at the moment";
    const LOG_NOUN: &'static str = "nfts";

    fn fetch_all(api: &CatalogApiClient) -> LocalBoxFuture<'_, Result<Vec<Self>, ApiError>> {
        Box::pin(api.nfts())
    }

    fn link(&self) -> &str {
        &self.link
    }

    fn open_message(&self) -> String {
        format!(
            "🎨 Opening {}!\n\nFollow the instructions to claim your free NFT.",
            self.name
        )
    }
}

impl StaticListEntry for ScriptItem {
    const EMPTY_PLACEHOLDER: &'static str = "No game scripts available";
    const LOG_NOUN: &'static str = "game scripts";

    fn fetch_all(api: &CatalogApiClient) -> LocalBoxFuture<'_, Result<Vec<Self>, ApiError>> {
        Box::pin(api.game_scripts())
    }

    fn link(&self) -> &str {
        &self.link
    }

    fn open_message(&self) -> String {
        format!("📜 Opening {}!\n\n{}", self.name, self.description)
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Screen state for a static listing.
pub struct StaticListState<T> {
    /// Loaded entries; empty after a failure.
    pub entries: Vec<T>,
    /// Whether the single fetch is still in flight.
    pub loading: bool,
    mounted: bool,
}

impl<T> Default for StaticListState<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            loading: true,
            mounted: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_static_list`].
pub enum StaticListAction<T> {
    /// Screen mounted; fetches once.
    Mount,
    /// Entries arrived.
    Loaded(Vec<T>),
    /// The fetch failed.
    Failed,
    /// Entry action button clicked.
    Open(T),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_static_list`].
pub enum StaticListEffect {
    /// Fetch every entry.
    FetchEntries,
    /// Open `url` in the host, then show `message`.
    OpenLink {
        /// Entry link.
        url: String,
        /// Follow-up alert.
        message: String,
    },
}

/// Applies `action` to `state` and returns the host work it requires.
pub fn reduce_static_list<T: StaticListEntry>(
    state: &mut StaticListState<T>,
    action: StaticListAction<T>,
) -> Vec<StaticListEffect> {
    match action {
        StaticListAction::Mount => {
            if state.mounted {
                return Vec::new();
            }
            state.mounted = true;
            state.loading = true;
            vec![StaticListEffect::FetchEntries]
        }
        StaticListAction::Loaded(entries) => {
            state.entries = entries;
            state.loading = false;
            Vec::new()
        }
        StaticListAction::Failed => {
            state.entries.clear();
            state.loading = false;
            Vec::new()
        }
        StaticListAction::Open(entry) => vec![StaticListEffect::OpenLink {
            url: entry.link().to_string(),
            message: entry.open_message(),
        }],
    }
}
