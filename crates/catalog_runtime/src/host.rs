//! Host-side execution of controller effects.
//!
//! [`CatalogHostContext`] bundles the API client with the injected [`HostServices`]. Each
//! `run_*` method executes one reducer effect on `spawn_local` and dispatches the completion
//! action back into the originating controller. Alerts from every screen go through one
//! [`AlertQueue`], since the host shows a single modal at a time.

mod alerts;
mod boot;
pub mod fetch;

use std::rc::Rc;

use catalog_api::{resolve_api_base, CatalogApiClient, ReqwestTransport};
use leptos::{logging, provide_context, spawn_local, use_context};
use catalog_contract::ItemType;
use platform_host::{ExternalUrlService, HostServices};

pub use alerts::AlertQueue;
pub use boot::boot_host_chrome;

use crate::{
    config::MiniAppConfig,
    controller::Controller,
    reducer::{
        CatalogListAction, CatalogListEffect, CatalogListState, DownloadAction, DownloadEffect,
        DownloadState, ProfileAction, ProfileEffect, ProfileState, StaticListAction,
        StaticListEffect, StaticListEntry, StaticListState,
    },
};

#[derive(Clone)]
/// API client and host services shared by every screen.
pub struct CatalogHostContext {
    api: CatalogApiClient,
    services: HostServices,
    alerts: AlertQueue,
}

impl CatalogHostContext {
    /// Bundles `api` with the host `services`.
    pub fn new(api: CatalogApiClient, services: HostServices) -> Self {
        let alerts = AlertQueue::new(services.alerts.clone());
        Self {
            api,
            services,
            alerts,
        }
    }

    /// Builds an HTTP client against the backend resolved from `config` and the page location,
    /// authenticated with the host session credential.
    pub fn connect(services: HostServices, config: &MiniAppConfig) -> Self {
        let base_url = resolve_api_base(&config.endpoint(), services.location.as_ref());
        let api = CatalogApiClient::new(base_url, Rc::new(ReqwestTransport::default()))
            .with_session_auth(services.session.clone());
        Self::new(api, services)
    }

    /// Returns the API client.
    pub fn api(&self) -> &CatalogApiClient {
        &self.api
    }

    /// Returns the injected host services.
    pub fn services(&self) -> &HostServices {
        &self.services
    }

    /// Executes one catalog listing effect.
    pub fn run_catalog_list_effect(
        &self,
        controller: Controller<CatalogListState, CatalogListAction, CatalogListEffect>,
        effect: CatalogListEffect,
    ) {
        let api = self.api.clone();
        match effect {
            CatalogListEffect::FetchPage { request_id, query } => spawn_local(async move {
                controller.dispatch(fetch::load_catalog_page(&api, request_id, query).await);
            }),
            CatalogListEffect::FetchCategories => spawn_local(async move {
                if let Some(action) = fetch::load_categories(&api).await {
                    controller.dispatch(action);
                }
            }),
        }
    }

    /// Executes one static listing effect.
    pub fn run_static_list_effect<T: StaticListEntry>(
        &self,
        controller: Controller<StaticListState<T>, StaticListAction<T>, StaticListEffect>,
        effect: StaticListEffect,
    ) {
        match effect {
            StaticListEffect::FetchEntries => {
                let api = self.api.clone();
                spawn_local(async move {
                    controller.dispatch(fetch::load_static_entries::<T>(&api).await);
                });
            }
            StaticListEffect::OpenLink { url, message } => self.open_link_with_alert(url, message),
        }
    }

    /// Executes one profile effect.
    pub fn run_profile_effect(
        &self,
        controller: Controller<ProfileState, ProfileAction, ProfileEffect>,
        effect: ProfileEffect,
    ) {
        match effect {
            ProfileEffect::FetchProfile => {
                let api = self.api.clone();
                spawn_local(async move {
                    controller.dispatch(fetch::load_profile(&api).await);
                });
            }
        }
    }

    /// Executes one download effect.
    pub fn run_download_effect(
        &self,
        controller: Controller<DownloadState, DownloadAction, DownloadEffect>,
        effect: DownloadEffect,
    ) {
        match effect {
            DownloadEffect::FetchLinks {
                item_id,
                item_name,
                item_type,
            } => {
                let api = self.api.clone();
                let alerts = self.alerts.clone();
                spawn_local(async move {
                    complete_download(&api, &alerts, controller, &item_id, &item_name, item_type)
                        .await;
                });
            }
        }
    }

    /// Opens `url` through the host, then queues `message`; the alert is shown even if the link
    /// could not be opened.
    pub fn open_link_with_alert(&self, url: String, message: String) {
        let external_urls = self.services.external_urls.clone();
        let alerts = self.alerts.clone();
        spawn_local(async move {
            if let Err(err) = external_urls.open_url(&url).await {
                logging::warn!("open external url failed for `{url}`: {err}");
            }
            alerts.present(message).await;
        });
    }
}

/// Requests links, resets the card's button if the card still exists, and alerts the outcome
/// regardless.
async fn complete_download(
    api: &CatalogApiClient,
    alerts: &AlertQueue,
    controller: Controller<DownloadState, DownloadAction, DownloadEffect>,
    item_id: &str,
    item_name: &str,
    item_type: ItemType,
) {
    let outcome = fetch::load_download_links(api, item_id, item_name, item_type).await;
    controller.dispatch(outcome.action);
    alerts.present(outcome.message).await;
}

/// Makes `host` available to descendant screens.
pub fn provide_catalog_host(host: CatalogHostContext) {
    provide_context(host);
}

/// Returns the current [`CatalogHostContext`].
///
/// # Panics
///
/// Panics if called outside a tree where [`provide_catalog_host`] ran.
pub fn use_catalog_host() -> CatalogHostContext {
    use_context::<CatalogHostContext>().expect("CatalogHostContext not provided")
}

#[cfg(test)]
mod tests {
    use catalog_api::{HttpMethod, MemoryTransport};
    use catalog_contract::{CatalogItem, ContentType};
    use futures::executor::block_on;
    use leptos::{create_runtime, SignalDispose, SignalGetUntracked};
    use platform_host::{MemoryAlertService, PageLocation};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::{
        config::bundled_config,
        controller::create_controller,
        reducer::{reduce_download, DownloadStatus},
    };

    fn download_controller() -> Controller<DownloadState, DownloadAction, DownloadEffect> {
        let item = CatalogItem {
            id: "g1".to_string(),
            name: Some("Racer".to_string()),
            title: None,
            category: "Racing Game".to_string(),
            platforms: Vec::new(),
            rating: None,
            download_count: None,
            size: None,
            description: None,
        };
        create_controller(
            DownloadState::new(&item, ContentType::Games),
            reduce_download,
            |_, _| {},
        )
    }

    fn links_api(transport: &MemoryTransport) -> CatalogApiClient {
        transport.respond_json(
            HttpMethod::Post,
            "/api/download/g1",
            &json!({ "links": [{ "service": "adrinolinks", "url": "https://a" }] }),
        );
        CatalogApiClient::new("http://localhost:8000", Rc::new(transport.clone()))
    }

    #[test]
    fn download_alert_survives_card_disposal() {
        let runtime = create_runtime();
        let transport = MemoryTransport::default();
        let api = links_api(&transport);
        let alerts = MemoryAlertService::default();
        let queue = AlertQueue::new(Rc::new(alerts.clone()));

        let controller = download_controller();
        controller.dispatch(DownloadAction::Request);
        controller.state().dispose();

        block_on(complete_download(&api, &queue, controller, "g1", "Racer", ItemType::Software));

        assert_eq!(
            alerts.shown(),
            vec!["📦 Racer\n\n⬇️ Download Links:\n\n💵 Link 1: https://a\n".to_string()]
        );
        runtime.dispose();
    }

    #[test]
    fn download_completion_resets_a_live_card() {
        let runtime = create_runtime();
        let transport = MemoryTransport::default();
        let api = links_api(&transport);
        let alerts = MemoryAlertService::default();
        let queue = AlertQueue::new(Rc::new(alerts.clone()));

        let controller = download_controller();
        controller.dispatch(DownloadAction::Request);
        assert_eq!(controller.state().get_untracked().status, DownloadStatus::Pending);

        block_on(complete_download(&api, &queue, controller, "g1", "Racer", ItemType::Software));

        assert_eq!(controller.state().get_untracked().status, DownloadStatus::Idle);
        assert_eq!(alerts.shown().len(), 1);
        runtime.dispose();
    }

    #[test]
    fn connect_targets_the_dev_port_on_loopback_pages() {
        let mut config = bundled_config().clone();
        config.api.base_url = String::new();
        let mut services = HostServices::headless();
        services.location = Some(PageLocation::new("http:", "localhost"));

        let host = CatalogHostContext::connect(services, &config);
        assert_eq!(
            host.api().base_url(),
            format!("http://localhost:{}", config.api.dev_port)
        );
    }

    #[test]
    fn connect_prefers_the_configured_base_url() {
        let mut config = bundled_config().clone();
        config.api.base_url = "https://api.example/".to_string();
        let mut services = HostServices::headless();
        services.location = Some(PageLocation::new("https:", "app.example"));

        let host = CatalogHostContext::connect(services, &config);
        assert_eq!(host.api().base_url(), "https://api.example");
    }
}
