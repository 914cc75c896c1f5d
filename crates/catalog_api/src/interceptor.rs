//! Request interceptors applied by the client to every outbound request.

use std::rc::Rc;

use platform_host::SessionCredentialSource;

use crate::request::{ApiRequest, AUTHORIZATION_HEADER};

/// Mutates a request right before it is handed to the transport.
pub trait RequestInterceptor {
    /// Applies this interceptor to `request`.
    fn intercept(&self, request: &mut ApiRequest);
}

/// Attaches the host session credential as the `Authorization` header.
///
/// The credential is read from the source on every request, so a host-side refresh is picked up
/// by the next call. When the host has no credential the header is omitted.
#[derive(Clone)]
pub struct SessionAuthInterceptor {
    credentials: Rc<dyn SessionCredentialSource>,
}

impl SessionAuthInterceptor {
    /// Creates an interceptor reading from `credentials`.
    pub fn new(credentials: Rc<dyn SessionCredentialSource>) -> Self {
        Self { credentials }
    }
}

impl RequestInterceptor for SessionAuthInterceptor {
    fn intercept(&self, request: &mut ApiRequest) {
        match self
            .credentials
            .session_credential()
            .filter(|credential| !credential.is_empty())
        {
            Some(credential) => request.set_header(AUTHORIZATION_HEADER, credential),
            None => request.remove_header(AUTHORIZATION_HEADER),
        }
    }
}

/// Marks every request body as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonContentTypeInterceptor;

impl RequestInterceptor for JsonContentTypeInterceptor {
    fn intercept(&self, request: &mut ApiRequest) {
        request.set_header("Content-Type", "application/json");
    }
}
