//! HTTP transport core.
//!
//! One `ApiClient` wraps a `reqwest::Client` with the backend base URL, the
//! configured request timeout, and the session store that supplies the
//! bearer token. The typed endpoint flows live in [`crate::services`]; this
//! module owns how a request is built, sent, and classified.
//!
//! # Response classification
//!
//! - **2xx**: the body is deserialized into the expected type.
//! - **non-2xx**: the body is read as JSON and the error message is taken
//!   from its `msg` field, else its `error` field, else the per-endpoint
//!   fallback.
//! - **transport failure** (connect error, timeout): the fallback message
//!   is surfaced; the underlying error is logged, not retried.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::Config;
use crate::error::Error;
use crate::session::SessionStore;

/// Authenticated JSON client for the PayPortal backend.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
}

impl ApiClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidUrl` if `api_base_url` does not parse
    /// - `Error::ClientBuild` if the underlying HTTP client cannot be built
    pub fn new(config: &Config, session: Arc<dyn SessionStore>) -> Result<Self, Error> {
        // Validate the base URL once up front. Endpoints are joined onto it
        // by plain concatenation so an `/api` path prefix survives.
        Url::parse(&config.api_base_url)?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(Error::ClientBuild)?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    /// The session store this client reads its token from.
    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Bearer token for authenticated endpoints.
    fn bearer(&self) -> Result<String, Error> {
        self.session.token().ok_or(Error::NotAuthenticated)
    }

    /// POST without authentication (register, login).
    pub(crate) async fn post_public<B, T>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<T, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.http.post(self.endpoint(path)).json(body);
        self.send(request, fallback).await
    }

    /// POST with bearer token.
    pub(crate) async fn post_auth<B, T>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<T, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .http
            .post(self.endpoint(path))
            .bearer_auth(self.bearer()?)
            .json(body);
        self.send(request, fallback).await
    }

    /// GET with bearer token.
    pub(crate) async fn get_auth<T>(&self, path: &str, fallback: &str) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let request = self
            .http
            .get(self.endpoint(path))
            .bearer_auth(self.bearer()?);
        self.send(request, fallback).await
    }

    /// PUT with bearer token.
    pub(crate) async fn put_auth<B, T>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<T, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .http
            .put(self.endpoint(path))
            .bearer_auth(self.bearer()?)
            .json(body);
        self.send(request, fallback).await
    }

    /// DELETE with bearer token.
    pub(crate) async fn delete_auth<T>(&self, path: &str, fallback: &str) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let request = self
            .http
            .delete(self.endpoint(path))
            .bearer_auth(self.bearer()?);
        self.send(request, fallback).await
    }

    /// Send one request and classify the outcome.
    ///
    /// Exactly one attempt: failures are surfaced once to the caller, never
    /// retried.
    async fn send<T>(&self, request: reqwest::RequestBuilder, fallback: &str) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::error!("request failed: {err}");
                return Err(Error::request(None, None, fallback));
            }
        };

        let status = response.status();
        if status.is_success() {
            response.json::<T>().await.map_err(|err| {
                tracing::error!("failed to decode response body: {err}");
                Error::request(Some(status.as_u16()), None, fallback)
            })
        } else {
            // Read the structured error body if there is one; its msg/error
            // field becomes the user-facing message.
            let body = response.json::<serde_json::Value>().await.ok();
            tracing::warn!(status = status.as_u16(), "backend rejected request");
            Err(Error::request(Some(status.as_u16()), body.as_ref(), fallback))
        }
    }
}
