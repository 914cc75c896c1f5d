//! Provider wiring the host services into the screen tree.

use leptos::*;
use platform_host::HostServices;

use crate::{
    config::bundled_config,
    host::{boot_host_chrome, provide_catalog_host, CatalogHostContext},
};

#[component]
/// Boots the host chrome and provides [`CatalogHostContext`] to descendant screens.
pub fn CatalogProvider(
    /// Host bundle assembled by the entry layer.
    host_services: HostServices,
    children: Children,
) -> impl IntoView {
    let config = bundled_config();
    boot_host_chrome(host_services.chrome.as_ref(), &config.theme);
    provide_catalog_host(CatalogHostContext::connect(host_services, config));

    children().into_view()
}
