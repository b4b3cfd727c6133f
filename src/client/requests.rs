//! Request dispatch and status classification.

use std::future::Future;

use serde::de::DeserializeOwned;

use crate::config::Endpoint;

use super::Connection;
use super::error::{BoxError, Error};
use super::query::request_url;
use super::response::{Response, ResponseBody};
use super::token::{Payload, Token};
use super::wire::ErrorBody;

const SERVER_ERROR_MESSAGE: &str = "Server error. Check http://status.dropbox.com/";

/// Options recognised by [`request`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestOptions {
    /// Return the unparsed body instead of decoding it as JSON.
    pub raw: bool,
}

impl RequestOptions {
    pub fn raw() -> Self {
        Self { raw: true }
    }
}

/// Perform one HTTP call via `send` and classify the result.
///
/// A transport failure becomes [`Error::ConnectionFailed`]; everything else
/// goes through [`handle_response`].
pub async fn request<F, Fut>(options: RequestOptions, send: F) -> Result<ResponseBody, Error>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Response, BoxError>>,
{
    let response = send().await.map_err(Error::ConnectionFailed)?;
    let status = response.status;
    handle_response(response, options).inspect_err(|err| {
        tracing::debug!(status, error = %err, "request failed");
    })
}

/// Map a response to a typed error, or return its body.
///
/// Statuses with no error rule (including 1xx) take the success path.
pub fn handle_response(response: Response, options: RequestOptions) -> Result<ResponseBody, Error> {
    let status = response.status;
    match status {
        400 => Err(Error::BadInput(error_detail(&response)?)),
        401 => Err(Error::Unauthorized),
        403 => {
            error_detail(&response)?;
            Err(Error::Forbidden)
        }
        404 => Err(Error::NotFound),
        405 => Err(Error::WrongMethod(error_detail(&response)?)),
        406 => Err(Error::Api {
            status,
            message: error_detail(&response)?,
        }),
        429 => Err(Error::RateLimit),
        300..=399 => Err(Error::Redirect { status }),
        503 => Err(service_unavailable(&response)?),
        507 => Err(Error::StorageQuota),
        500..=599 => {
            error_detail(&response)?;
            Err(Error::Api {
                status,
                message: SERVER_ERROR_MESSAGE.to_string(),
            })
        }
        _ if options.raw => Ok(ResponseBody::Raw(response.body)),
        _ if response.body.is_empty() => Ok(ResponseBody::Json(serde_json::Value::Null)),
        _ => Ok(ResponseBody::Json(serde_json::from_slice(&response.body)?)),
    }
}

/// The `error` field of a JSON error body.
fn error_detail(response: &Response) -> Result<String, Error> {
    let body: ErrorBody = serde_json::from_slice(&response.body)?;
    Ok(body.detail())
}

fn service_unavailable(response: &Response) -> Result<Error, Error> {
    let message = match &response.service_unavailable {
        Some(reason) => reason.clone(),
        None => {
            let detail = error_detail(response)?;
            let retry_after = response.header("Retry-After").unwrap_or_default();
            format!("{detail}. Retry after: {retry_after}")
        }
    };
    Ok(Error::Api {
        status: 503,
        message,
    })
}

impl<T: Token> Connection<T> {
    /// GET `path` with `params` as the query string and decode the JSON body.
    pub async fn get<R: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        path: &str,
        params: &[(String, String)],
        headers: &[(String, String)],
    ) -> Result<R, Error> {
        let url = request_url(self.config.prefix_for(endpoint), path, params);
        tracing::debug!(method = "GET", %url, "sending request");
        let token = self.token(endpoint);
        request(RequestOptions::default(), || token.get(&url, headers))
            .await?
            .into_json()
    }

    /// GET `path` and return the body bytes unparsed.
    pub async fn get_raw(
        &self,
        endpoint: Endpoint,
        path: &str,
        params: &[(String, String)],
        headers: &[(String, String)],
    ) -> Result<Vec<u8>, Error> {
        let url = request_url(self.config.prefix_for(endpoint), path, params);
        tracing::debug!(method = "GET", %url, raw = true, "sending request");
        let token = self.token(endpoint);
        request(RequestOptions::raw(), || token.get(&url, headers))
            .await?
            .into_raw()
    }

    /// POST `payload` to `path` and decode the JSON body.
    pub async fn post<R: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        path: &str,
        payload: &Payload,
        headers: &[(String, String)],
    ) -> Result<R, Error> {
        let url = request_url(self.config.prefix_for(endpoint), path, &[]);
        tracing::debug!(method = "POST", %url, "sending request");
        let token = self.token(endpoint);
        request(RequestOptions::default(), || token.post(&url, payload, headers))
            .await?
            .into_json()
    }

    /// PUT `payload` to `path` and decode the JSON body.
    pub async fn put<R: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        path: &str,
        payload: &Payload,
        headers: &[(String, String)],
    ) -> Result<R, Error> {
        let url = request_url(self.config.prefix_for(endpoint), path, &[]);
        tracing::debug!(method = "PUT", %url, "sending request");
        let token = self.token(endpoint);
        request(RequestOptions::default(), || token.put(&url, payload, headers))
            .await?
            .into_json()
    }
}
