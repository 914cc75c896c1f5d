use leptos::*;

use super::NavBar;
use crate::{
    controller::{create_controller, Controller},
    host::use_catalog_host,
    presentation::{format_download_date, format_rating, links_badge},
    reducer::{
        profile::{NO_DOWNLOADS_MESSAGE, NO_FAVORITES_MESSAGE, PROFILE_UNAVAILABLE_MESSAGE},
        reduce_profile, LoadedProfile, ProfileAction, ProfileEffect, ProfileState, ProfileStatus,
        ProfileTab,
    },
};

type ProfileController = Controller<ProfileState, ProfileAction, ProfileEffect>;

#[component]
/// Signed-in user's profile with download and favorite history.
pub fn ProfileScreen() -> impl IntoView {
    let host = use_catalog_host();
    let profile = create_controller(
        ProfileState::default(),
        reduce_profile,
        move |controller, effect| host.run_profile_effect(controller, effect),
    );
    profile.dispatch(ProfileAction::Mount);

    let status = create_memo(move |_| profile.state().with(|state| state.status.clone()));

    view! {
        <div class="page profile-page">
            {move || match status.get() {
                ProfileStatus::Loading => {
                    view! { <div class="loading">"Loading profile..."</div> }.into_view()
                }
                ProfileStatus::Unavailable => {
                    view! { <div class="no-items">{PROFILE_UNAVAILABLE_MESSAGE}</div> }.into_view()
                }
                ProfileStatus::Loaded(loaded) => {
                    view! { <ProfileDetails loaded=loaded profile=profile /> }.into_view()
                }
            }}
            <NavBar />
        </div>
    }
}

#[component]
fn ProfileDetails(loaded: LoadedProfile, profile: ProfileController) -> impl IntoView {
    let active_tab = move || profile.state().with(|state| state.active_tab);
    let LoadedProfile {
        user,
        downloads,
        favorites,
    } = loaded;
    let favorites_count = favorites.len();

    let tab_button = move |tab: ProfileTab| {
        view! {
            <button
                class="tab-btn"
                class:active=move || active_tab() == tab
                on:click=move |_| profile.dispatch(ProfileAction::SelectTab(tab))
            >
                {tab.label()}
            </button>
        }
    };

    view! {
        <div class="profile-header">
            <div class="profile-avatar">"👤"</div>
            <h1 class="profile-name">{user.display_name()}</h1>
            {user.handle().map(|handle| view! { <p class="profile-username">{handle}</p> })}
        </div>

        <div class="profile-stats">
            <div class="stat-box">
                <div class="stat-value">{user.total_downloads.unwrap_or(0)}</div>
                <div class="stat-label">"Downloads"</div>
            </div>
            <div class="stat-box">
                <div class="stat-value">{favorites_count}</div>
                <div class="stat-label">"Favorites"</div>
            </div>
        </div>

        <div class="profile-tabs">
            {tab_button(ProfileTab::Downloads)}
            {tab_button(ProfileTab::Favorites)}
        </div>

        <div class="profile-content">
            {move || match active_tab() {
                ProfileTab::Downloads if downloads.is_empty() => {
                    view! { <div class="no-items">{NO_DOWNLOADS_MESSAGE}</div> }.into_view()
                }
                ProfileTab::Downloads => {
                    view! {
                        <div class="downloads-list">
                            {downloads
                                .iter()
                                .map(|record| {
                                    view! {
                                        <div class="download-item">
                                            <div class="download-info">
                                                <h4 class="download-name">{record.item_name.clone()}</h4>
                                                <p class="download-date">
                                                    {format_download_date(&record.timestamp)}
                                                </p>
                                            </div>
                                            <div class="download-badge">
                                                {links_badge(record.links_delivered())}
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_view()
                }
                ProfileTab::Favorites if favorites.is_empty() => {
                    view! { <div class="no-items">{NO_FAVORITES_MESSAGE}</div> }.into_view()
                }
                ProfileTab::Favorites => {
                    view! {
                        <div class="favorites-list">
                            {favorites
                                .iter()
                                .map(|favorite| {
                                    view! {
                                        <div class="favorite-item">
                                            <div class="favorite-info">
                                                <h4 class="favorite-name">{favorite.name.clone()}</h4>
                                                <p class="favorite-category">
                                                    {format!("📂 {}", favorite.category)}
                                                </p>
                                            </div>
                                            <div class="favorite-stats">
                                                {format!("⭐ {}/5", format_rating(favorite.rating))}
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_view()
                }
            }}
        </div>
    }
}
