use crate::{Error, Result};
use bytes::Bytes;
use std::fmt::Debug;
use std::sync::Arc;

/// Context carries the collaborators the service crates need to perform I/O.
///
/// ## Important
///
/// reviewly provides NO default transport. A context starts with a no-op
/// implementation that errors when called; configure a real [`HttpSend`]
/// (for example `reviewly-http-send-reqwest`) before issuing requests, or a
/// recording fake in tests.
///
/// ## Example
///
/// ```no_run
/// use reviewly_core::Context;
/// # fn http_sender() -> reviewly_core::NoopHttpSend { reviewly_core::NoopHttpSend }
///
/// let ctx = Context::new().with_http_send(http_sender());
/// ```
#[derive(Clone)]
pub struct Context {
    http: Arc<dyn HttpSend>,
}

impl Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context").field("http", &self.http).finish()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Create a new Context with a no-op HTTP implementation.
    pub fn new() -> Self {
        Self {
            http: Arc::new(NoopHttpSend),
        }
    }

    /// Replace the HTTP client implementation.
    pub fn with_http_send(mut self, http: impl HttpSend) -> Self {
        self.http = Arc::new(http);
        self
    }

    /// Send http request and return the response.
    #[inline]
    pub async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        self.http.http_send(req).await
    }

    /// Send http request and return the response with a `String` body.
    pub async fn http_send_as_string(
        &self,
        req: http::Request<Bytes>,
    ) -> Result<http::Response<String>> {
        let (parts, body) = self.http.http_send(req).await?.into_parts();
        let body = String::from_utf8_lossy(&body).to_string();
        Ok(http::Response::from_parts(parts, body))
    }
}

/// HttpSend is used to perform the network calls of the SDK.
///
/// One method covers the whole configure-and-send surface: every call builds
/// a fresh `http::Request`, so a single shared implementation can be reused
/// across calls without resetting per-request state. This trait is designed
/// for the SDK's own traffic, please don't use it as a general http client.
#[async_trait::async_trait]
pub trait HttpSend: Debug + Send + Sync + 'static {
    /// Send http request and return the response.
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>>;
}

/// NoopHttpSend is a no-op implementation that always returns an error.
///
/// This is used when no HTTP client is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHttpSend;

#[async_trait::async_trait]
impl HttpSend for NoopHttpSend {
    async fn http_send(&self, _req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        Err(Error::unexpected(
            "HTTP sending not supported: no HTTP client configured",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unconfigured_context_errors_on_send() {
        let ctx = Context::new();
        let req = http::Request::get("https://app.reviewly.io/widget/iframe")
            .body(Bytes::new())
            .unwrap();

        let err = ctx.http_send(req).await.unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Unexpected);
    }
}
