//! API calls behind controller effects, converted into completion actions.
//!
//! Failures are logged here and mapped to the reducer's failure action, so nothing past this
//! boundary sees an [`catalog_api::ApiError`].

use catalog_api::CatalogApiClient;
use catalog_contract::{CatalogQuery, ItemType};
use leptos::logging;

use crate::{
    presentation::{format_download_message, DOWNLOAD_ERROR_MESSAGE},
    reducer::{
        CatalogListAction, DownloadAction, ProfileAction, StaticListAction, StaticListEntry,
    },
};

/// Fetches one catalog page for `query`.
pub async fn load_catalog_page(
    api: &CatalogApiClient,
    request_id: u64,
    query: CatalogQuery,
) -> CatalogListAction {
    match api.catalog_page(&query).await {
        Ok(page) => CatalogListAction::PageLoaded { request_id, page },
        Err(err) => {
            logging::warn!(
                "{} page {} fetch failed: {err}",
                query.content_type.as_str(),
                query.page
            );
            CatalogListAction::PageFailed { request_id }
        }
    }
}

/// Fetches the category listing; `None` leaves the options untouched.
pub async fn load_categories(api: &CatalogApiClient) -> Option<CatalogListAction> {
    match api.categories().await {
        Ok(listing) => Some(CatalogListAction::CategoriesLoaded(listing)),
        Err(err) => {
            logging::warn!("category listing fetch failed: {err}");
            None
        }
    }
}

/// Fetches every entry of a static listing.
pub async fn load_static_entries<T: StaticListEntry>(
    api: &CatalogApiClient,
) -> StaticListAction<T> {
    match T::fetch_all(api).await {
        Ok(entries) => StaticListAction::Loaded(entries),
        Err(err) => {
            logging::warn!("{} fetch failed: {err}", T::LOG_NOUN);
            StaticListAction::Failed
        }
    }
}

/// Fetches the combined profile payload.
pub async fn load_profile(api: &CatalogApiClient) -> ProfileAction {
    match api.profile().await {
        Ok(bundle) => ProfileAction::Loaded(bundle),
        Err(err) => {
            logging::warn!("profile fetch failed: {err}");
            ProfileAction::Failed
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of one download link request.
pub struct DownloadOutcome {
    /// Resets the card's download button.
    pub action: DownloadAction,
    /// Alert text: the formatted links, or the generic error.
    pub message: String,
}

/// Requests download links for one item and formats the alert for `item_name`.
pub async fn load_download_links(
    api: &CatalogApiClient,
    item_id: &str,
    item_name: &str,
    item_type: ItemType,
) -> DownloadOutcome {
    match api.request_download(item_id, item_type).await {
        Ok(links) => DownloadOutcome {
            message: format_download_message(item_name, &links),
            action: DownloadAction::Completed(links),
        },
        Err(err) => {
            logging::warn!("download link request failed for `{item_id}`: {err}");
            DownloadOutcome {
                action: DownloadAction::Failed,
                message: DOWNLOAD_ERROR_MESSAGE.to_string(),
            }
        }
    }
}
