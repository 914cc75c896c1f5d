//! Per-card download action: request links, then alert them.

use catalog_contract::{CatalogItem, ContentType, DownloadLinkSet, ItemType};

use crate::presentation::{DOWNLOAD_IDLE_LABEL, DOWNLOAD_PENDING_LABEL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Download button state.
pub enum DownloadStatus {
    /// Ready to request links.
    #[default]
    Idle,
    /// Waiting for the backend.
    Pending,
}

impl DownloadStatus {
    /// Button label for this state.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Idle => DOWNLOAD_IDLE_LABEL,
            Self::Pending => DOWNLOAD_PENDING_LABEL,
        }
    }

    /// Whether the button is disabled.
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Download state for one catalog card.
pub struct DownloadState {
    /// Backend id of the card's item.
    pub item_id: String,
    /// Display name used in the alert.
    pub item_name: String,
    /// `item_type` sent with the request.
    pub item_type: ItemType,
    /// Button state.
    pub status: DownloadStatus,
}

impl DownloadState {
    /// Creates the idle state for `item` listed under `content_type`.
    pub fn new(item: &CatalogItem, content_type: ContentType) -> Self {
        Self {
            item_id: item.id.clone(),
            item_name: item.display_name().to_string(),
            item_type: content_type.item_type(),
            status: DownloadStatus::Idle,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_download`].
pub enum DownloadAction {
    /// Download button clicked.
    Request,
    /// Links arrived.
    Completed(DownloadLinkSet),
    /// The request failed.
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_download`].
pub enum DownloadEffect {
    /// Request download links for an item and alert the outcome.
    ///
    /// The alert belongs to the request, not the card: it is shown even if the card is gone by
    /// the time the links arrive.
    FetchLinks {
        /// Backend item id.
        item_id: String,
        /// Display name used in the alert.
        item_name: String,
        /// Item kind.
        item_type: ItemType,
    },
}

/// Applies `action` to `state` and returns the host work it requires.
///
/// Completions only reset the button.
pub fn reduce_download(state: &mut DownloadState, action: DownloadAction) -> Vec<DownloadEffect> {
    match action {
        DownloadAction::Request => {
            if state.status.is_pending() {
                return Vec::new();
            }
            state.status = DownloadStatus::Pending;
            vec![DownloadEffect::FetchLinks {
                item_id: state.item_id.clone(),
                item_name: state.item_name.clone(),
                item_type: state.item_type,
            }]
        }
        DownloadAction::Completed(_) | DownloadAction::Failed => {
            state.status = DownloadStatus::Idle;
            Vec::new()
        }
    }
}
