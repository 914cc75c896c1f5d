use catalog_contract::{NftItem, ScriptItem};
use leptos::*;

use super::NavBar;
use crate::{
    controller::{create_controller, Controller},
    host::use_catalog_host,
    presentation::LOADING_LABEL,
    reducer::{
        reduce_static_list, StaticListAction, StaticListEffect, StaticListEntry, StaticListState,
    },
};

type StaticListController<T> =
    Controller<StaticListState<T>, StaticListAction<T>, StaticListEffect>;

fn mount_static_list<T: StaticListEntry>() -> StaticListController<T> {
    let host = use_catalog_host();
    let list = create_controller(
        StaticListState::<T>::default(),
        reduce_static_list::<T>,
        move |controller, effect| host.run_static_list_effect(controller, effect),
    );
    list.dispatch(StaticListAction::Mount);
    list
}

/// Renders the loading indicator, the empty placeholder, or `render(entries)`.
fn static_list_body<T, V>(
    list: StaticListController<T>,
    render: impl Fn(StaticListController<T>, Vec<T>) -> V + 'static,
) -> impl Fn() -> View
where
    T: StaticListEntry,
    V: IntoView,
{
    move || {
        let (loading, entries) = list
            .state()
            .with(|state| (state.loading, state.entries.clone()));
        if loading {
            view! { <div class="loading">{LOADING_LABEL}</div> }.into_view()
        } else if entries.is_empty() {
            view! { <div class="no-items">{T::EMPTY_PLACEHOLDER}</div> }.into_view()
        } else {
            render(list, entries).into_view()
        }
    }
}

#[component]
/// Free NFT claims.
pub fn NftsScreen() -> impl IntoView {
    let list = mount_static_list::<NftItem>();

    view! {
        <div class="page nfts-page">
            <div class="page-header">
                <h1>"🎨 Free NFTs"</h1>
                <p class="page-subtitle">"Claim your free NFT collectibles"</p>
            </div>

            {static_list_body(list, |list, nfts| {
                view! {
                    <div class="nfts-grid">
                        {nfts
                            .into_iter()
                            .map(|nft| {
                                let claimed = format!("👥 {} claimed", nft.claim_count());
                                let name = nft.name.clone();
                                let description = nft.description.clone();
                                view! {
                                    <div class="nft-card">
                                        <div class="nft-icon">"🎨"</div>
                                        <h3 class="nft-name">{name}</h3>
                                        <p class="nft-description">{description}</p>
                                        <div class="nft-stats">
                                            <span class="nft-stat">{claimed}</span>
                                        </div>
                                        <button
                                            class="claim-btn"
                                            on:click=move |_| list.dispatch(StaticListAction::Open(nft.clone()))
                                        >
                                            "🎁 Claim Now"
                                        </button>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                }
            })}

            <NavBar />
        </div>
    }
}

#[component]
/// Game script downloads.
pub fn ScriptsScreen() -> impl IntoView {
    let list = mount_static_list::<ScriptItem>();

    view! {
        <div class="page scripts-page">
            <div class="page-header">
                <h1>"📜 Game Scripts"</h1>
                <p class="page-subtitle">"Browse and download game scripts"</p>
            </div>

            {static_list_body(list, |list, scripts| {
                view! {
                    <div class="scripts-list">
                        {scripts
                            .into_iter()
                            .map(|script| {
                                let views = format!("👁️ {} views", script.views.unwrap_or(0));
                                let name = script.name.clone();
                                let description = script.description.clone();
                                view! {
                                    <div class="script-card">
                                        <div class="script-icon">"📜"</div>
                                        <div class="script-content">
                                            <h3 class="script-name">{name}</h3>
                                            <p class="script-description">{description}</p>
                                            <div class="script-stats">
                                                <span class="script-stat">{views}</span>
                                            </div>
                                        </div>
                                        <button
                                            class="script-download-btn"
                                            on:click=move |_| list.dispatch(StaticListAction::Open(script.clone()))
                                        >
                                            "⬇️"
                                        </button>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                }
            })}

            <NavBar />
        </div>
    }
}
