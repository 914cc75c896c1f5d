//! Typed operations over the catalog backend.

use std::rc::Rc;

use catalog_contract::{
    CatalogPage, CatalogQuery, CategoryFilter, CategoryListing, ContentType, DownloadLinkSet,
    ItemType, NftItem, NftListResponse, ProfileBundle, ScriptItem, ScriptListResponse,
};
use platform_host::SessionCredentialSource;
use serde::de::DeserializeOwned;

use crate::{
    error::ApiError,
    interceptor::{JsonContentTypeInterceptor, RequestInterceptor, SessionAuthInterceptor},
    request::ApiRequest,
    transport::ApiTransport,
};

/// Client exposing one operation per backend resource.
///
/// Cheap to clone; clones share the transport and interceptor chain.
#[derive(Clone)]
pub struct CatalogApiClient {
    base_url: String,
    transport: Rc<dyn ApiTransport>,
    interceptors: Vec<Rc<dyn RequestInterceptor>>,
}

impl CatalogApiClient {
    /// Creates a client sending JSON requests to `base_url` over `transport`.
    pub fn new(base_url: impl Into<String>, transport: Rc<dyn ApiTransport>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport,
            interceptors: vec![Rc::new(JsonContentTypeInterceptor)],
        }
    }

    /// Appends `interceptor` to the chain; interceptors run in insertion order.
    pub fn with_interceptor(mut self, interceptor: Rc<dyn RequestInterceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    /// Attaches the host session credential to every request.
    pub fn with_session_auth(self, credentials: Rc<dyn SessionCredentialSource>) -> Self {
        self.with_interceptor(Rc::new(SessionAuthInterceptor::new(credentials)))
    }

    /// Returns the resolved base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches one page of any paginated catalog.
    pub async fn catalog_page(&self, query: &CatalogQuery) -> Result<CatalogPage, ApiError> {
        let request =
            ApiRequest::get(query.content_type.endpoint_path()).with_query(query.query_pairs());
        self.send(request).await
    }

    /// `GET /api/games`
    pub async fn games(
        &self,
        search_text: &str,
        category: &CategoryFilter,
        page: u32,
    ) -> Result<CatalogPage, ApiError> {
        self.catalog_page(&listing_query(ContentType::Games, search_text, category, page))
            .await
    }

    /// `GET /api/software`
    pub async fn software(
        &self,
        search_text: &str,
        category: &CategoryFilter,
        page: u32,
    ) -> Result<CatalogPage, ApiError> {
        self.catalog_page(&listing_query(
            ContentType::Software,
            search_text,
            category,
            page,
        ))
        .await
    }

    /// `GET /api/movies`
    pub async fn movies(
        &self,
        search_text: &str,
        category: &CategoryFilter,
        page: u32,
    ) -> Result<CatalogPage, ApiError> {
        self.catalog_page(&listing_query(ContentType::Movies, search_text, category, page))
            .await
    }

    /// `GET /api/nfts`
    pub async fn nfts(&self) -> Result<Vec<NftItem>, ApiError> {
        let response: NftListResponse = self.send(ApiRequest::get("/api/nfts")).await?;
        Ok(response.nfts)
    }

    /// `GET /api/gamescripts`
    pub async fn game_scripts(&self) -> Result<Vec<ScriptItem>, ApiError> {
        let response: ScriptListResponse = self.send(ApiRequest::get("/api/gamescripts")).await?;
        Ok(response.scripts)
    }

    /// `GET /api/categories`
    pub async fn categories(&self) -> Result<CategoryListing, ApiError> {
        self.send(ApiRequest::get("/api/categories")).await
    }

    /// `GET /api/user/profile`: profile, download history, and favorites in one round-trip.
    pub async fn profile(&self) -> Result<ProfileBundle, ApiError> {
        self.send(ApiRequest::get("/api/user/profile")).await
    }

    /// `POST /api/download/{item_id}?item_type=...`
    pub async fn request_download(
        &self,
        item_id: &str,
        item_type: ItemType,
    ) -> Result<DownloadLinkSet, ApiError> {
        let request = ApiRequest::post(format!("/api/download/{item_id}"))
            .with_query([("item_type".to_string(), item_type.as_str().to_string())]);
        self.send(request).await
    }

    async fn send<T: DeserializeOwned>(&self, mut request: ApiRequest) -> Result<T, ApiError> {
        for interceptor in &self.interceptors {
            interceptor.intercept(&mut request);
        }

        let response = self.transport.execute(&self.base_url, request).await?;
        if !response.is_success() {
            return Err(ApiError::Server {
                status: response.status,
            });
        }
        Ok(serde_json::from_str(&response.body)?)
    }
}

fn listing_query(
    content_type: ContentType,
    search_text: &str,
    category: &CategoryFilter,
    page: u32,
) -> CatalogQuery {
    CatalogQuery {
        content_type,
        search_text: search_text.to_string(),
        category: category.clone(),
        page,
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::MemorySessionCredential;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::{
        request::{ApiResponse, HttpMethod, AUTHORIZATION_HEADER},
        transport::MemoryTransport,
    };

    fn client_with(
        transport: &MemoryTransport,
        credentials: &MemorySessionCredential,
    ) -> CatalogApiClient {
        CatalogApiClient::new("https://api.example/", Rc::new(transport.clone()))
            .with_session_auth(Rc::new(credentials.clone()))
    }

    #[test]
    fn credential_is_read_when_each_request_is_built() {
        let transport = MemoryTransport::default();
        transport.respond_json(HttpMethod::Get, "/api/nfts", &json!({ "nfts": [] }));
        let credentials = MemorySessionCredential::new("user=1&hash=a");
        let client = client_with(&transport, &credentials);

        block_on(client.nfts()).expect("first fetch");
        credentials.set("user=1&hash=b");
        block_on(client.nfts()).expect("second fetch");
        credentials.clear();
        block_on(client.nfts()).expect("third fetch");

        let seen = transport
            .requests()
            .iter()
            .map(|request| request.header(AUTHORIZATION_HEADER).map(str::to_string))
            .collect::<Vec<_>>();
        assert_eq!(
            seen,
            vec![
                Some("user=1&hash=a".to_string()),
                Some("user=1&hash=b".to_string()),
                None
            ]
        );
        assert!(transport
            .requests()
            .iter()
            .all(|request| request.header("content-type") == Some("application/json")));
    }

    #[test]
    fn catalog_listing_sends_filters_and_decodes_page() {
        let transport = MemoryTransport::default();
        transport.respond_json(
            HttpMethod::Get,
            "/api/games",
            &json!({
                "games": [{ "_id": "g1", "name": "Racer", "category": "Racing Game" }],
                "pages": 4
            }),
        );
        let client = client_with(&transport, &MemorySessionCredential::default());

        let page = block_on(client.games(
            "race",
            &CategoryFilter::Exact("Racing Game".to_string()),
            2,
        ))
        .expect("games page");

        assert_eq!(page.pages, 4);
        assert_eq!(page.items[0].id, "g1");
        let request = &transport.requests()[0];
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(
            request.query,
            vec![
                ("search".to_string(), "race".to_string()),
                ("category".to_string(), "Racing Game".to_string()),
                ("page".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn download_request_posts_with_item_type() {
        let transport = MemoryTransport::default();
        transport.respond_json(
            HttpMethod::Post,
            "/api/download/m42",
            &json!({ "links": [{ "service": "url2cash", "url": "https://b" }] }),
        );
        let client = client_with(&transport, &MemorySessionCredential::new("init"));

        let links = block_on(client.request_download("m42", ItemType::Movie)).expect("links");

        assert_eq!(links.links.len(), 1);
        let request = &transport.requests()[0];
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(
            request.query,
            vec![("item_type".to_string(), "movie".to_string())]
        );
    }

    #[test]
    fn non_success_status_maps_to_server_error() {
        let transport = MemoryTransport::default();
        transport.respond(
            HttpMethod::Get,
            "/api/user/profile",
            ApiResponse::with_status(401),
        );
        let client = client_with(&transport, &MemorySessionCredential::default());

        let err = block_on(client.profile()).expect_err("unauthorized");
        assert_eq!(err, ApiError::Server { status: 401 });
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn transport_failure_and_bad_payload_are_distinguished() {
        let transport = MemoryTransport::default();
        transport.fail(
            HttpMethod::Get,
            "/api/categories",
            ApiError::Network("offline".to_string()),
        );
        transport.respond(
            HttpMethod::Get,
            "/api/gamescripts",
            ApiResponse {
                status: 200,
                body: "<html>".to_string(),
            },
        );
        let client = client_with(&transport, &MemorySessionCredential::default());

        assert_eq!(
            block_on(client.categories()),
            Err(ApiError::Network("offline".to_string()))
        );
        assert!(matches!(
            block_on(client.game_scripts()),
            Err(ApiError::Decode(_))
        ));
        assert!(matches!(
            block_on(client.nfts()),
            Err(ApiError::Network(_))
        ));
    }
}
