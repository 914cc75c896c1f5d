//! Transport seam between the typed client and the network.

use std::{
    cell::RefCell,
    collections::{HashMap, VecDeque},
    future::Future,
    pin::Pin,
    rc::Rc,
};

use serde::Serialize;

use crate::{
    error::ApiError,
    request::{ApiRequest, ApiResponse, HttpMethod},
};

/// Object-safe boxed future used by [`ApiTransport`].
pub type TransportFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Executes fully intercepted requests.
///
/// Implementations only report transport-level failures as [`ApiError::Network`]; status
/// classification and decoding stay in the client.
pub trait ApiTransport {
    /// Sends `request` against `base_url`.
    fn execute<'a>(
        &'a self,
        base_url: &'a str,
        request: ApiRequest,
    ) -> TransportFuture<'a, Result<ApiResponse, ApiError>>;
}

/// HTTP transport backed by `reqwest` (browser `fetch` on wasm32).
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new(reqwest::Client::new())
    }
}

impl ReqwestTransport {
    /// Wraps an existing `reqwest` client.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl ApiTransport for ReqwestTransport {
    fn execute<'a>(
        &'a self,
        base_url: &'a str,
        request: ApiRequest,
    ) -> TransportFuture<'a, Result<ApiResponse, ApiError>> {
        Box::pin(async move {
            let url = request.url(base_url);
            let mut builder = match request.method {
                HttpMethod::Get => self.client.get(&url),
                HttpMethod::Post => self.client.post(&url),
            };
            if !request.query.is_empty() {
                builder = builder.query(&request.query);
            }
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(ApiResponse { status, body })
        })
    }
}

type ScriptedResult = Result<ApiResponse, ApiError>;

/// In-memory transport that records requests and replays scripted responses.
///
/// Responses are queued per `(method, path)`. The last queued response for a route is replayed
/// for every further request to that route; unscripted routes fail with a network error.
#[derive(Debug, Clone, Default)]
pub struct MemoryTransport {
    routes: Rc<RefCell<HashMap<(HttpMethod, String), VecDeque<ScriptedResult>>>>,
    requests: Rc<RefCell<Vec<ApiRequest>>>,
}

impl MemoryTransport {
    /// Queues a raw response for `method path`.
    pub fn respond(&self, method: HttpMethod, path: &str, response: ApiResponse) {
        self.push(method, path, Ok(response));
    }

    /// Queues a `200 OK` JSON response for `method path`.
    ///
    /// # Panics
    ///
    /// Panics when `payload` cannot be serialized.
    pub fn respond_json<T: Serialize>(&self, method: HttpMethod, path: &str, payload: &T) {
        let response = ApiResponse::json(payload).expect("scripted payload serializes");
        self.respond(method, path, response);
    }

    /// Queues a transport failure for `method path`.
    pub fn fail(&self, method: HttpMethod, path: &str, error: ApiError) {
        self.push(method, path, Err(error));
    }

    /// Returns every request executed so far, oldest first.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    fn push(&self, method: HttpMethod, path: &str, result: ScriptedResult) {
        self.routes
            .borrow_mut()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(result);
    }

    fn next_result(&self, request: &ApiRequest) -> ScriptedResult {
        let mut routes = self.routes.borrow_mut();
        let Some(queue) = routes.get_mut(&(request.method, request.path.clone())) else {
            return Err(ApiError::Network(format!(
                "no scripted response for {} {}",
                request.method.as_str(),
                request.path
            )));
        };
        if queue.len() > 1 {
            if let Some(result) = queue.pop_front() {
                return result;
            }
        }
        queue.front().cloned().unwrap_or_else(|| {
            Err(ApiError::Network(format!(
                "response queue drained for {}",
                request.path
            )))
        })
    }
}

impl ApiTransport for MemoryTransport {
    fn execute<'a>(
        &'a self,
        _base_url: &'a str,
        request: ApiRequest,
    ) -> TransportFuture<'a, Result<ApiResponse, ApiError>> {
        let result = self.next_result(&request);
        self.requests.borrow_mut().push(request);
        Box::pin(async move { result })
    }
}
