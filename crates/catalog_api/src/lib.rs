//! Typed client for the catalog backend REST API.
//!
//! Every request is built as an [`ApiRequest`], passed through the configured
//! [`RequestInterceptor`] chain at send time (which is where the host session credential is
//! attached), and executed by an [`ApiTransport`]. Responses are decoded into the
//! `catalog_contract` models.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod client;
pub mod config;
pub mod error;
pub mod interceptor;
pub mod request;
pub mod transport;

pub use client::CatalogApiClient;
pub use config::{resolve_api_base, ApiEndpointConfig, DEFAULT_DEV_API_PORT};
pub use error::ApiError;
pub use interceptor::{JsonContentTypeInterceptor, RequestInterceptor, SessionAuthInterceptor};
pub use request::{ApiRequest, ApiResponse, HttpMethod, AUTHORIZATION_HEADER};
pub use transport::{ApiTransport, MemoryTransport, ReqwestTransport, TransportFuture};
