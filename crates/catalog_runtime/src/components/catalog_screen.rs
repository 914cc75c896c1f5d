use catalog_contract::{CategoryFilter, ContentType, ALL_CATEGORIES};
use leptos::*;

use super::{ItemCard, NavBar};
use crate::{
    config::bundled_config,
    controller::create_controller,
    host::use_catalog_host,
    presentation::{listing_copy, LOADING_LABEL},
    reducer::{reduce_catalog_list, CatalogListAction, CatalogListState},
};

#[component]
/// Searchable, filterable, paginated listing for one catalog kind.
pub fn CatalogScreen(content_type: ContentType) -> impl IntoView {
    let host = use_catalog_host();
    let mut initial = CatalogListState::new(content_type);
    if content_type == ContentType::Movies {
        initial = initial.with_category_options(bundled_config().movies.categories.clone());
    }
    let list = create_controller(initial, reduce_catalog_list, move |controller, effect| {
        host.run_catalog_list_effect(controller, effect)
    });
    list.dispatch(CatalogListAction::Mount);

    let state = list.state();
    let copy = listing_copy(content_type);
    let loading = move || state.with(|list| list.loading);
    let pagination = create_memo(move |_| state.with(|list| list.pagination()));

    view! {
        <div class="page content-page">
            <div class="page-header">
                <h1>{copy.heading}</h1>
            </div>

            <div class="filters">
                <input
                    type="text"
                    class="search-input"
                    placeholder=copy.search_placeholder
                    prop:value=move || state.with(|list| list.search_text.clone())
                    on:input=move |ev| {
                        list.dispatch(CatalogListAction::SetSearchText(event_target_value(&ev)))
                    }
                />
                <select
                    class="category-select"
                    prop:value=move || state.with(|list| list.category.as_query_value().to_string())
                    on:change=move |ev| {
                        list.dispatch(
                            CatalogListAction::SetCategory(
                                CategoryFilter::from_value(&event_target_value(&ev)),
                            ),
                        )
                    }
                >
                    <option value=ALL_CATEGORIES>"All Categories"</option>
                    <For
                        each=move || state.with(|list| list.category_options.clone())
                        key=|category| category.clone()
                        children=|category| {
                            view! { <option value=category.clone()>{category}</option> }
                        }
                    />
                </select>
            </div>

            <Show when=loading fallback=|| ()>
                <div class="loading">{LOADING_LABEL}</div>
            </Show>

            // Cards stay mounted while a page loads so pending downloads keep their state.
            <div class="items-list" hidden=loading>
                <For
                    each=move || state.with(|list| list.items.clone())
                    key=|item| item.id.clone()
                    children=move |item| view! { <ItemCard item=item content_type=content_type /> }
                />
                <Show
                    when=move || state.with(|list| !list.loading && list.items.is_empty())
                    fallback=|| ()
                >
                    <div class="no-items">{copy.empty_placeholder}</div>
                </Show>
            </div>

            <Show when=move || pagination.get().visible fallback=|| ()>
                <div class="pagination">
                    <button
                        class="page-btn"
                        disabled=move || pagination.get().previous_disabled
                        on:click=move |_| list.dispatch(CatalogListAction::PreviousPage)
                    >
                        "← Previous"
                    </button>
                    <span class="page-info">{move || pagination.get().label()}</span>
                    <button
                        class="page-btn"
                        disabled=move || pagination.get().next_disabled
                        on:click=move |_| list.dispatch(CatalogListAction::NextPage)
                    >
                        "Next →"
                    </button>
                </div>
            </Show>

            <NavBar />
        </div>
    }
}

#[component]
/// `/games`
pub fn GamesScreen() -> impl IntoView {
    view! { <CatalogScreen content_type=ContentType::Games /> }
}

#[component]
/// `/software`
pub fn SoftwareScreen() -> impl IntoView {
    view! { <CatalogScreen content_type=ContentType::Software /> }
}

#[component]
/// `/movies`
pub fn MoviesScreen() -> impl IntoView {
    view! { <CatalogScreen content_type=ContentType::Movies /> }
}
