//! Shared wire and domain models for the catalog mini-app.
//!
//! This crate is runtime-agnostic. It defines the payloads exchanged with the catalog backend and
//! the query/content-type vocabulary shared by the API client and screen controllers, without
//! depending on Leptos, browser APIs, or any HTTP stack.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod catalog;
pub mod download;
pub mod listings;
pub mod profile;

pub use catalog::{
    CatalogItem, CatalogPage, CatalogQuery, CategoryFilter, ContentType, ALL_CATEGORIES,
};
pub use download::{DownloadLink, DownloadLinkSet, ItemType};
pub use listings::{CategoryListing, NftItem, NftListResponse, ScriptItem, ScriptListResponse};
pub use profile::{DownloadRecord, FavoriteRecord, ProfileBundle, UserProfile};
