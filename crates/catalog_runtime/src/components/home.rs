use leptos::*;
use leptos_router::{use_navigate, NavigateOptions};

use super::NavBar;
use crate::navigation::HOME_FEATURES;

#[component]
/// Launcher screen linking every listing.
pub fn HomeScreen() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="page home-page">
            <div class="home-header">
                <h1 class="home-title">"🌟 Digital Hub"</h1>
                <p class="home-subtitle">"Your ultimate entertainment & software platform"</p>
            </div>

            <div class="features-grid">
                {HOME_FEATURES
                    .into_iter()
                    .map(|feature| {
                        let navigate = navigate.clone();
                        view! {
                            <div
                                class="feature-card"
                                style=format!("border-left: 4px solid {}", feature.accent)
                                on:click=move |_| navigate(feature.path, NavigateOptions::default())
                            >
                                <div class="feature-icon">{feature.icon}</div>
                                <div class="feature-content">
                                    <h3 class="feature-title">{feature.title}</h3>
                                    <p class="feature-description">{feature.description}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="info-section">
                <h2>"📱 Access Anywhere"</h2>
                <p>
                    "Use this mini app directly in Telegram or continue using bot commands - both work perfectly!"
                </p>
            </div>

            <NavBar />
        </div>
    }
}
