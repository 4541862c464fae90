//! The HTTP transport and the request/response shapes it exchanges.
//!
//! Every call is one network attempt: no retries, no timeouts beyond the
//! HTTP client's defaults, no deduplication. The server answers every
//! request with the `{ success, data?, error? }` envelope, so a delivered
//! response can still be an application-level failure; [ApiResponse::into_result]
//! folds that flag into the error taxonomy.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::Error;

/// The HTTP verbs the tracker's API is called with.
///
/// PUT and DELETE are never issued natively; they travel as a `_method`
/// field inside a POST body (see [crate::ResourceClient]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Reads; `data` is sent as query parameters.
    Get,
    /// Writes; `data` is sent as a urlencoded form body.
    Post,
}

/// A request about to be sent: URL path, verb, and payload.
///
/// Constructed per call and discarded. `data` is an ordered list of pairs
/// so that `_method` overrides keep their position ahead of caller fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOptions {
    /// The URL path relative to the server origin, e.g. `/account/1`.
    pub url: String,
    /// The verb to send the request with.
    pub method: Method,
    /// Query parameters (GET) or form fields (POST).
    pub data: Vec<(String, String)>,
}

/// The JSON envelope every server response is wrapped in.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiResponse {
    /// Whether the server processed the request successfully.
    pub success: bool,
    /// The payload of a successful response.
    #[serde(default)]
    pub data: Option<Value>,
    /// The error payload of a failed response.
    #[serde(default)]
    pub error: Option<Value>,
}

impl ApiResponse {
    /// Fold the `success` flag into a [Result].
    ///
    /// A missing `data` or `error` field degrades to JSON `null` rather
    /// than being treated as a decoding failure, matching servers that
    /// omit the field entirely.
    pub fn into_result(self) -> Result<Value, Error> {
        if self.success {
            Ok(self.data.unwrap_or(Value::Null))
        } else {
            Err(Error::Api(self.error.unwrap_or(Value::Null)))
        }
    }
}

/// Performs the actual network call for a [RequestOptions].
///
/// The trait seam exists so page and form controllers can be exercised
/// against a scripted transport in tests.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send the request and decode the response envelope.
    async fn send(&self, options: RequestOptions) -> Result<ApiResponse, Error>;
}

/// The reqwest-backed [Transport] talking to a fixed server origin.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    origin: String,
}

impl HttpTransport {
    /// Create a transport for `origin`, e.g. `http://localhost:8000`.
    ///
    /// A trailing slash on the origin is dropped so that joining it with
    /// the API paths never produces a double slash.
    pub fn new(origin: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            origin: origin.trim_end_matches('/').to_owned(),
        }
    }

    fn absolute_url(&self, path: &str) -> String {
        format!("{}{}", self.origin, path)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, options: RequestOptions) -> Result<ApiResponse, Error> {
        let url = self.absolute_url(&options.url);

        let request = match options.method {
            Method::Get => self.client.get(&url).query(&options.data),
            Method::Post => self.client.post(&url).form(&options.data),
        };

        let response = request.send().await.map_err(|error| {
            tracing::error!("request to {url} failed: {error}");
            Error::Transport {
                url: options.url.clone(),
                reason: error.to_string(),
            }
        })?;

        let envelope: ApiResponse = response.json().await.map_err(|error| {
            tracing::error!("could not decode the response from {url}: {error}");
            Error::InvalidResponse {
                url: options.url.clone(),
                reason: error.to_string(),
            }
        })?;

        tracing::debug!("{url} answered success={}", envelope.success);

        Ok(envelope)
    }
}
