//! Transport-neutral response and body types.

use super::error::Error;

/// An HTTP response as handed back by a [`Token`](super::Token).
///
/// Transports convert their client's response into this shape so the
/// dispatcher only ever reads one status accessor.
#[derive(Debug, Clone, Default)]
pub struct Response {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
    /// Reason phrase, set only when the transport recognised a typed
    /// "503 Service Unavailable" response.
    pub service_unavailable: Option<String>,
}

impl Response {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
            ..Self::default()
        }
    }

    /// A typed 503 carrying only the transport's reason phrase.
    pub fn service_unavailable(reason: impl Into<String>) -> Self {
        Self {
            status: 503,
            service_unavailable: Some(reason.into()),
            ..Self::default()
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// First header value matching `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Read a reqwest response fully into memory.
    pub async fn from_reqwest(resp: reqwest::Response) -> Result<Self, reqwest::Error> {
        let status = resp.status().as_u16();
        let headers = resp
            .headers()
            .iter()
            .map(|(k, v)| {
                (
                    k.as_str().to_string(),
                    String::from_utf8_lossy(v.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = resp.bytes().await?.to_vec();
        Ok(Self {
            status,
            headers,
            body,
            service_unavailable: None,
        })
    }
}

/// Successful result of a dispatched request.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(serde_json::Value),
    Raw(Vec<u8>),
}

impl ResponseBody {
    /// Deserialize into `T`. A raw body is parsed as JSON first.
    pub fn into_json<T: serde::de::DeserializeOwned>(self) -> Result<T, Error> {
        match self {
            ResponseBody::Json(value) => Ok(serde_json::from_value(value)?),
            ResponseBody::Raw(bytes) => Ok(serde_json::from_slice(&bytes)?),
        }
    }

    /// The body bytes. A decoded body is re-serialized.
    pub fn into_raw(self) -> Result<Vec<u8>, Error> {
        match self {
            ResponseBody::Raw(bytes) => Ok(bytes),
            ResponseBody::Json(value) => Ok(serde_json::to_vec(&value)?),
        }
    }
}
