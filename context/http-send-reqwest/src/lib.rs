//! A [`reqwest`] backed [`HttpSend`] implementation.
//!
//! The review service expects embedding pages to stay responsive, so the
//! default client carries a short request timeout. Pass your own
//! `reqwest::Client` to [`ReqwestHttpSend::new`] to change it.

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::BodyExt;
use reviewly_core::{Error, HttpSend, Result};
use reqwest::{Client, Request};
use std::time::Duration;

/// The timeout applied by [`ReqwestHttpSend::default`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// Sends SDK requests through a shared `reqwest::Client`.
#[derive(Debug)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a custom reqwest::Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestHttpSend {
    fn default() -> Self {
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .expect("default reqwest client must build");
        Self { client }
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let req = Request::try_from(req)
            .map_err(|e| Error::request_invalid("failed to convert request").with_source(e))?;
        let resp: http::Response<_> = self
            .client
            .execute(req)
            .await
            .map_err(|e| Error::unexpected("http request failed").with_source(e))?
            .into();

        let (parts, body) = resp.into_parts();
        let bs = BodyExt::collect(body)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(|e| Error::unexpected("failed to read response body").with_source(e))?;
        Ok(http::Response::from_parts(parts, bs))
    }
}
