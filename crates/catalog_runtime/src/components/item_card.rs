use catalog_contract::{CatalogItem, ContentType};
use leptos::*;

use crate::{
    controller::create_controller,
    host::use_catalog_host,
    presentation::ItemCardView,
    reducer::{reduce_download, DownloadAction, DownloadState},
};

#[component]
/// Catalog card with its own download action.
pub fn ItemCard(item: CatalogItem, content_type: ContentType) -> impl IntoView {
    let host = use_catalog_host();
    let card = ItemCardView::new(&item, content_type);
    let download = create_controller(
        DownloadState::new(&item, content_type),
        reduce_download,
        move |controller, effect| host.run_download_effect(controller, effect),
    );
    let status = move || download.state().with(|state| state.status);

    view! {
        <div class="item-card">
            <h3 class="item-title">{card.title}</h3>
            <div class="item-meta">
                <span class="item-category">{card.category}</span>
                {card.platforms.map(|platforms| view! { <span class="item-os">{platforms}</span> })}
            </div>
            {card
                .stats
                .map(|stats| {
                    view! {
                        <div class="item-stats">
                            <span class="stat">{stats.rating}</span>
                            <span class="stat">{stats.downloads}</span>
                            {stats.size.map(|size| view! { <span class="stat">{size}</span> })}
                        </div>
                    }
                })}
            {card
                .description
                .map(|description| view! { <p class="item-description">{description}</p> })}
            <button
                class="download-btn"
                disabled=move || status().is_pending()
                on:click=move |_| download.dispatch(DownloadAction::Request)
            >
                {move || status().label()}
            </button>
        </div>
    }
}
