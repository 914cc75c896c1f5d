//! Screen controllers, presentation helpers, and Leptos screens for the catalog mini-app.
//!
//! Controllers are explicit reducers ([`reducer`]) driven through a reactive [`Controller`];
//! [`host`] executes their effects against the API client and the injected host services.

pub mod components;
pub mod config;
pub mod controller;
pub mod host;
pub mod navigation;
pub mod presentation;
pub mod reducer;
mod runtime_context;

pub use components::{
    CatalogScreen, GamesScreen, HomeScreen, ItemCard, MoviesScreen, NavBar, NftsScreen,
    ProfileScreen, ScriptsScreen, SoftwareScreen,
};
pub use config::{bundled_config, MiniAppConfig};
pub use controller::{create_controller, Controller};
pub use host::{boot_host_chrome, use_catalog_host, CatalogHostContext};
pub use runtime_context::CatalogProvider;
