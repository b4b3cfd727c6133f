//! Authorization tokens that perform HTTP calls.

use std::future::Future;

use crate::config::Config;

use super::error::{BoxError, Error};
use super::response::Response;

/// Request body for POST and PUT.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Key/value pairs, form-encoded.
    Form(Vec<(String, String)>),
    /// Raw bytes sent as `application/octet-stream` (file uploads).
    Bytes(Vec<u8>),
}

impl Payload {
    pub fn empty() -> Self {
        Payload::Form(Vec::new())
    }
}

/// An authorization credential capable of performing authenticated HTTP calls.
///
/// Implementations return every HTTP response, whatever its status, and fail
/// only when no response was obtained at all.
pub trait Token: Send + Sync {
    fn get(
        &self,
        url: &str,
        headers: &[(String, String)],
    ) -> impl Future<Output = Result<Response, BoxError>> + Send;

    fn post(
        &self,
        url: &str,
        body: &Payload,
        headers: &[(String, String)],
    ) -> impl Future<Output = Result<Response, BoxError>> + Send;

    fn put(
        &self,
        url: &str,
        body: &Payload,
        headers: &[(String, String)],
    ) -> impl Future<Output = Result<Response, BoxError>> + Send;
}

/// OAuth2 bearer token backed by reqwest.
#[derive(Clone)]
pub struct ReqwestToken {
    http: reqwest::Client,
    access_token: String,
}

impl std::fmt::Debug for ReqwestToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestToken")
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

impl ReqwestToken {
    /// Build a token whose client uses the user agent and timeout from `config`.
    ///
    /// Redirects are not followed; 3xx responses reach the dispatcher.
    pub fn new(config: &Config, access_token: impl Into<String>) -> Result<Self, Error> {
        let mut builder = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .redirect(reqwest::redirect::Policy::none());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::with_client(builder.build()?, access_token))
    }

    /// Wrap an existing reqwest client.
    pub fn with_client(http: reqwest::Client, access_token: impl Into<String>) -> Self {
        Self {
            http,
            access_token: access_token.into(),
        }
    }

    async fn send(&self, builder: reqwest::RequestBuilder) -> Result<Response, BoxError> {
        let resp = builder.bearer_auth(&self.access_token).send().await?;
        Ok(Response::from_reqwest(resp).await?)
    }
}

fn with_headers(
    mut builder: reqwest::RequestBuilder,
    headers: &[(String, String)],
) -> reqwest::RequestBuilder {
    for (name, value) in headers {
        builder = builder.header(name, value);
    }
    builder
}

fn with_payload(builder: reqwest::RequestBuilder, body: &Payload) -> reqwest::RequestBuilder {
    match body {
        Payload::Form(pairs) => builder.form(pairs),
        Payload::Bytes(bytes) => builder
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(bytes.clone()),
    }
}

impl Token for ReqwestToken {
    async fn get(&self, url: &str, headers: &[(String, String)]) -> Result<Response, BoxError> {
        self.send(with_headers(self.http.get(url), headers)).await
    }

    async fn post(
        &self,
        url: &str,
        body: &Payload,
        headers: &[(String, String)],
    ) -> Result<Response, BoxError> {
        let builder = with_payload(self.http.post(url), body);
        self.send(with_headers(builder, headers)).await
    }

    async fn put(
        &self,
        url: &str,
        body: &Payload,
        headers: &[(String, String)],
    ) -> Result<Response, BoxError> {
        let builder = with_payload(self.http.put(url), body);
        self.send(with_headers(builder, headers)).await
    }
}
