//! Screen controllers expressed as explicit reducers.
//!
//! Each reducer takes `(&mut State, Action)` and returns the side-effect intents the action
//! requires. Reducers never perform I/O; [`crate::host`] executes the intents and dispatches
//! completion actions back.

pub mod catalog_list;
pub mod download;
pub mod profile;
pub mod static_list;

pub use catalog_list::{
    reduce_catalog_list, CatalogListAction, CatalogListEffect, CatalogListState, PaginationView,
};
pub use download::{
    reduce_download, DownloadAction, DownloadEffect, DownloadState, DownloadStatus,
};
pub use profile::{
    reduce_profile, LoadedProfile, ProfileAction, ProfileEffect, ProfileState, ProfileStatus,
    ProfileTab,
};
pub use static_list::{
    reduce_static_list, StaticListAction, StaticListEffect, StaticListEntry, StaticListState,
};
