//! Authenticated reqwest transport for the admin backend.

use std::sync::Arc;
use std::time::Duration;

use log::warn;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::api::session::SessionStore;
use crate::listview::{FetchError, FetchResult, RequestDescriptor};
use crate::models::config::DashboardConfig;

/// HTTP client for the admin backend.
///
/// Cheap to clone: clones share the underlying connection pool and the
/// session store. Every request carries the stored bearer token; a 401
/// response invalidates the whole session before surfacing as
/// [`FetchError::Auth`].
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
}

impl ApiClient {
    pub fn new(config: &DashboardConfig, session: Arc<dyn SessionStore>) -> FetchResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| FetchError::Network(format!("failed to build HTTP client: {e}")))?;
        if let Some(token) = &config.api_token {
            session.store(token.clone());
        }
        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.http.request(method, url);
        if let Some(token) = self.session.token() {
            req = req.bearer_auth(token);
        }
        req
    }

    /// GET returning a JSON payload.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> FetchResult<T> {
        self.send(self.request(Method::GET, path)).await
    }

    /// GET with the descriptor's pairs appended as the query string.
    pub(crate) async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        descriptor: &RequestDescriptor,
    ) -> FetchResult<T> {
        let req = self.request(Method::GET, path).query(descriptor.pairs());
        self.send(req).await
    }

    /// Body-carrying mutation whose response body is ignored.
    pub(crate) async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> FetchResult<()> {
        let req = self.request(method, path).json(body);
        self.send_unit(req).await
    }

    /// Body-less mutation whose response body is ignored.
    pub(crate) async fn send_empty(&self, method: Method, path: &str) -> FetchResult<()> {
        self.send_unit(self.request(method, path)).await
    }

    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> FetchResult<T> {
        let response = self.dispatch(req).await?;
        response
            .json()
            .await
            .map_err(|e| FetchError::Validation(format!("malformed response body: {e}")))
    }

    async fn send_unit(&self, req: RequestBuilder) -> FetchResult<()> {
        self.dispatch(req).await.map(|_| ())
    }

    async fn dispatch(&self, req: RequestBuilder) -> FetchResult<Response> {
        let response = req
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        Err(self.classify(status, response).await)
    }

    /// Classifies a non-success response into the fetch taxonomy. The one
    /// side effect lives here: a 401 is the global session-invalidation
    /// signal.
    async fn classify(&self, status: StatusCode, response: Response) -> FetchError {
        if status == StatusCode::UNAUTHORIZED {
            warn!("Backend rejected the session token; invalidating session");
            self.session.invalidate();
            return FetchError::Auth;
        }
        if status == StatusCode::FORBIDDEN {
            return FetchError::Auth;
        }
        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body).unwrap_or_else(|| status.to_string());
        if status.is_server_error() {
            FetchError::Server(message)
        } else {
            FetchError::Validation(message)
        }
    }
}

/// Pulls `message` (or `error`) out of a JSON error body when present.
fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .or_else(|| value.get("error"))?
        .as_str()
        .map(str::to_string)
}
