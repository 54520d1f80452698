//! HTTP API client for the Sonata backend.
//!
//! Requests are JSON in; responses come back as raw text and are decoded
//! by whoever needs a payload. The auth flows only see the
//! [`AuthTransport`] trait so they can be driven by an in-memory fake.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::Config;
use crate::error::ApiError;

/// Ergonomic result alias.
pub type ApiResult<T> = Result<T, ApiError>;

/// Sign-in endpoint path, relative to the API base.
pub const SIGN_IN_PATH: &str = "/user/sign-in";
/// Sign-up endpoint path, relative to the API base.
pub const SIGN_UP_PATH: &str = "/user/sign-up";

/// The one network operation the auth flows need.
///
/// Futures are not `Send`: everything runs on the browser main thread.
#[allow(async_fn_in_trait)]
pub trait AuthTransport {
    /// POST `body` as JSON to `path`. Any 2xx yields the response body as
    /// text, which may be empty; anything else is an error.
    async fn post<B>(&self, path: &str, body: &B) -> ApiResult<String>
    where
        B: Serialize + ?Sized;
}

/// Decode a 2xx response body as JSON.
pub fn decode_json<R: DeserializeOwned>(body: &str) -> ApiResult<R> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// [`AuthTransport`] backed by the browser's `fetch` via gloo-net.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    config: Config,
}

impl HttpTransport {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

/// Pull a human-readable reason out of a non-2xx response for the console.
///
/// FastAPI reports errors as `{"detail": ...}`.
async fn log_error_body(url: &str, resp: gloo_net::http::Response) {
    let status = resp.status();
    let detail = resp
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|v| v.get("detail").map(|d| d.to_string()));
    match detail {
        Some(d) => log::debug!("POST {url} -> HTTP {status}: {d}"),
        None => log::debug!("POST {url} -> HTTP {status}"),
    }
}

impl AuthTransport for HttpTransport {
    async fn post<B>(&self, path: &str, body: &B) -> ApiResult<String>
    where
        B: Serialize + ?Sized,
    {
        let url = self.config.endpoint(path);
        log::debug!("POST {url}");

        let resp = Request::post(&url)
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if resp.ok() {
            resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))
        } else {
            let status = resp.status();
            log_error_body(&url, resp).await;
            Err(ApiError::Status(status))
        }
    }
}
