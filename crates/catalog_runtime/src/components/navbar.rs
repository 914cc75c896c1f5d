use leptos::*;
use leptos_router::{use_location, use_navigate, NavigateOptions};

use crate::navigation::NAV_TABS;

#[component]
/// Bottom tab bar; the tab matching the current route path is marked active.
pub fn NavBar() -> impl IntoView {
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    view! {
        <nav class="navbar">
            {NAV_TABS
                .into_iter()
                .map(|tab| {
                    let navigate = navigate.clone();
                    view! {
                        <button
                            class="nav-btn"
                            class:active=move || pathname.with(|path| tab.is_active(path))
                            on:click=move |_| navigate(tab.path, NavigateOptions::default())
                        >
                            <span class="nav-icon">{tab.icon}</span>
                            <span class="nav-label">{tab.label}</span>
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
