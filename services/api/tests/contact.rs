//! Mock-transport tests for the customer contact request flow.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use http::StatusCode;
use pretty_assertions::assert_eq;
use reviewly_api::ApiClient;
use reviewly_core::hash::DigestAlgorithm;
use reviewly_core::{Context, Credential, Error, ErrorKind, FailurePolicy, HttpSend, Result};
use serde_json::json;

#[derive(Debug, Clone)]
struct RecordedRequest {
    method: http::Method,
    uri: String,
    accept: String,
    content_type: String,
    body: serde_json::Value,
}

/// Replays a canned response and records every request it sees.
#[derive(Debug, Clone)]
struct StaticHttpSend {
    status: StatusCode,
    body: &'static str,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StaticHttpSend {
    fn new(status: StatusCode, body: &'static str) -> Self {
        Self {
            status,
            body,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpSend for StaticHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let header = |name: &str| {
            req.headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string()
        };

        self.requests.lock().unwrap().push(RecordedRequest {
            method: req.method().clone(),
            uri: req.uri().to_string(),
            accept: header("accept"),
            content_type: header("content-type"),
            body: serde_json::from_slice(req.body()).unwrap_or(serde_json::Value::Null),
        });

        Ok(http::Response::builder()
            .status(self.status)
            .body(Bytes::from_static(self.body.as_bytes()))
            .unwrap())
    }
}

/// Fails every request at the transport level.
#[derive(Debug, Clone, Copy)]
struct BrokenHttpSend;

#[async_trait]
impl HttpSend for BrokenHttpSend {
    async fn http_send(&self, _req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        Err(Error::unexpected("connection reset by peer"))
    }
}

fn client(http: impl HttpSend) -> ApiClient {
    ApiClient::new(
        Context::new().with_http_send(http),
        Credential::new("00000", "11111"),
    )
    .with_base_url("https://api.example.com/")
    .with_algorithm(DigestAlgorithm::LegacyMd5)
}

#[tokio::test]
async fn test_contact_request_posts_signed_envelope() -> Result<()> {
    let http = StaticHttpSend::new(StatusCode::OK, "{\"data\":{\"test\":\"one\"}}");
    let client = client(http.clone());

    let resource = client
        .customer_contact_request(&json!({"email": "customer@example.com"}))
        .await?;
    assert_eq!(resource, Some(json!({"data": {"test": "one"}})));

    let requests = http.requests();
    assert_eq!(requests.len(), 1);

    let req = &requests[0];
    assert_eq!(req.method, http::Method::POST);
    assert_eq!(
        req.uri,
        "https://api.example.com/merchant/00000/customer-contact-request"
    );
    assert_eq!(req.accept, "application/json");
    assert_eq!(req.content_type, "application/json");
    // signature = md5("POST" + url + secret)
    assert_eq!(
        req.body,
        json!({
            "data": {"email": "customer@example.com"},
            "signedRequest": {
                "token": "00000",
                "signature": "e866c341b2d8e95cf3d7be1b740aed91",
            },
        })
    );
    Ok(())
}

#[tokio::test]
async fn test_contact_request_signs_with_configured_algorithm() -> Result<()> {
    let http = StaticHttpSend::new(StatusCode::OK, "{\"data\":{\"test\":\"one\"}}");
    let client = client(http.clone()).with_algorithm(DigestAlgorithm::HmacSha256);

    client.customer_contact_request(&json!({})).await?;

    // openssl dgst -sha256 -hmac "11111" over "POST" + url
    assert_eq!(
        http.requests()[0].body["signedRequest"]["signature"],
        json!("3a449e8339a45b8f921d10a1ddabde6f73ae94b5fc42ca09ba570196775fc185")
    );
    Ok(())
}

#[tokio::test]
async fn test_bad_status_degrades_under_lenient_policy() -> Result<()> {
    let http = StaticHttpSend::new(StatusCode::BAD_GATEWAY, "upstream sad");
    let client = client(http);

    assert_eq!(client.customer_contact_request(&json!({})).await?, None);
    Ok(())
}

#[tokio::test]
async fn test_bad_status_errors_under_strict_policy() {
    let http = StaticHttpSend::new(StatusCode::BAD_GATEWAY, "upstream sad");
    let client = client(http).with_policy(FailurePolicy::Strict);

    let err = client
        .customer_contact_request(&json!({}))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ResponseInvalid);
    assert!(err.to_string().contains("502"));
}

#[tokio::test]
async fn test_unparseable_success_body_is_a_failure() {
    let http = StaticHttpSend::new(StatusCode::OK, "");
    let client = client(http).with_policy(FailurePolicy::Strict);

    let err = client
        .customer_contact_request(&json!({}))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ResponseInvalid);
}

#[tokio::test]
async fn test_transport_error_degrades_under_lenient_policy() -> Result<()> {
    let client = client(BrokenHttpSend);

    assert_eq!(client.customer_contact_request(&json!({})).await?, None);
    Ok(())
}
