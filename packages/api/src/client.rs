//! # HTTP plumbing shared by every endpoint wrapper
//!
//! [`ApiClient`] owns a `reqwest::Client`, the [`ApiConfig`] and the bearer token of
//! the current session. It is cheap to clone; the UI rebuilds one whenever the
//! session token changes.
//!
//! Responses are read as text and decoded into an [`ApiResponse`] envelope:
//!
//! | HTTP status | Outcome |
//! |-------------|---------|
//! | 401, 403 | [`ApiError::Unauthorized`] |
//! | other non-2xx | [`ApiError::Status`] carrying the envelope message if any |
//! | 2xx, empty body | a successful envelope without `result` |
//! | 2xx | the decoded envelope |

use reqwest::{multipart::Form, Method, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::models::ApiResponse;
use crate::{ApiConfig, ApiError};

#[derive(Clone, Debug)]
pub struct ApiClient {
    config: ApiConfig,
    token: Option<String>,
    http: reqwest::Client,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(ApiConfig::default())
    }
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            token: None,
            http: reqwest::Client::new(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env())
    }

    /// Same client, authorised with `token` (blank tokens are dropped).
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let req = self.http.request(method, self.config.url(path));
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Send and decode the envelope, keeping the HTTP status for callers that
    /// care about it (sign-up reports success as 201).
    async fn execute<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
    ) -> Result<(StatusCode, ApiResponse<T>), ApiError> {
        let resp = req.send().await?;
        let status = resp.status();
        let url = resp.url().path().to_string();
        let text = resp.text().await?;
        debug!(%status, url = %url, "api response");

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            warn!(%status, url = %url, "api call rejected for missing or stale token");
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            let message = decode_envelope::<serde_json::Value>(&text)
                .map(|env| env.message)
                .unwrap_or_default();
            warn!(%status, url = %url, message = %message, "api call failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok((status, decode_envelope(&text)?))
    }

    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
    ) -> Result<ApiResponse<T>, ApiError> {
        self.execute(req).await.map(|(_, env)| env)
    }

    pub(crate) async fn send_status(&self, req: RequestBuilder) -> Result<StatusCode, ApiError> {
        let (status, env) = self.execute::<serde_json::Value>(req).await?;
        if status != StatusCode::CREATED {
            env.into_unit()?;
        }
        Ok(status)
    }

    pub(crate) fn get(&self, path: &str, query: &[(&str, String)]) -> RequestBuilder {
        let req = self.request(Method::GET, path);
        if query.is_empty() {
            req
        } else {
            req.query(query)
        }
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::POST, path)
    }

    pub(crate) fn put(&self, path: &str) -> RequestBuilder {
        self.request(Method::PUT, path)
    }

    pub(crate) fn patch(&self, path: &str) -> RequestBuilder {
        self.request(Method::PATCH, path)
    }

    pub(crate) fn delete(&self, path: &str) -> RequestBuilder {
        self.request(Method::DELETE, path)
    }

    pub(crate) async fn get_result<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        self.send(self.get(path, query)).await?.into_result()
    }

    pub(crate) async fn json_result<B, T>(
        &self,
        req: RequestBuilder,
        body: &B,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(req.json(body)).await?.into_result()
    }

    pub(crate) async fn json_unit<B: Serialize + ?Sized>(
        &self,
        req: RequestBuilder,
        body: &B,
    ) -> Result<(), ApiError> {
        self.send::<serde_json::Value>(req.json(body)).await?.into_unit()
    }

    pub(crate) async fn empty_unit(&self, req: RequestBuilder) -> Result<(), ApiError> {
        self.send::<serde_json::Value>(req).await?.into_unit()
    }

    pub(crate) async fn multipart_result<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        form: Form,
    ) -> Result<T, ApiError> {
        self.send(req.multipart(form)).await?.into_result()
    }

    pub(crate) async fn multipart_unit(
        &self,
        req: RequestBuilder,
        form: Form,
    ) -> Result<(), ApiError> {
        self.send::<serde_json::Value>(req.multipart(form))
            .await?
            .into_unit()
    }
}

fn decode_envelope<T: DeserializeOwned>(text: &str) -> Result<ApiResponse<T>, ApiError> {
    if text.trim().is_empty() {
        return Ok(ApiResponse {
            is_success: true,
            code: String::new(),
            message: String::new(),
            result: None,
        });
    }
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_header_only_with_token() {
        let anon = ApiClient::new(ApiConfig::new("http://api.test"));
        let req = anon.get("/api/post/top", &[]).build().unwrap();
        assert_eq!(req.url().as_str(), "http://api.test/api/post/top");
        assert!(req.headers().get("authorization").is_none());

        let authed = anon.with_token(Some("abc".to_string()));
        let req = authed.delete("/api/post/3").build().unwrap();
        assert_eq!(*req.method(), Method::DELETE);
        assert_eq!(req.headers()["authorization"], "Bearer abc");
    }

    #[test]
    fn test_blank_token_dropped() {
        let client = ApiClient::default().with_token(Some("  ".to_string()));
        assert_eq!(client.token(), None);
    }

    #[test]
    fn test_query_encoding() {
        let client = ApiClient::new(ApiConfig::new("http://api.test"));
        let req = client
            .get("/api/hashtag/search", &[("keyword", "golden hour".to_string())])
            .build()
            .unwrap();
        assert_eq!(req.url().query(), Some("keyword=golden+hour"));
    }

    #[test]
    fn test_decode_empty_body_is_success() {
        let env: ApiResponse<serde_json::Value> = decode_envelope("").unwrap();
        assert!(env.into_unit().is_ok());
        assert!(matches!(
            decode_envelope::<i64>("<html>"),
            Err(ApiError::Decode(_))
        ));
    }
}
