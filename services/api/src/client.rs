use bytes::Bytes;
use http::header::{ACCEPT, CONTENT_TYPE};
use http::Method;
use log::debug;

use crate::envelope::{RequestEnvelope, SignedRequest};
use reviewly_core::hash::DigestAlgorithm;
use reviewly_core::{Context, Credential, Error, FailurePolicy, Result};

/// Default base URL of the merchant API.
pub(crate) const DEFAULT_BASE_URL: &str = "https://api.reviewly.io/";

/// Path template of the customer contact request endpoint, resolved against
/// the merchant id at call time.
const CONTACT_REQUEST_ENDPOINT: &str = "merchant/{merchantId}/customer-contact-request";

/// Client for the merchant API.
///
/// Owns its credential; the HTTP collaborator is shared through the
/// [`Context`] so one transport serves any number of clients and calls.
/// Every request is built fresh, signed with the configured digest and
/// interpreted strictly: only a 2xx status with a parseable JSON body counts
/// as success.
#[derive(Debug, Clone)]
pub struct ApiClient {
    ctx: Context,
    credential: Credential,
    base_url: String,
    algorithm: DigestAlgorithm,
    policy: FailurePolicy,
}

impl ApiClient {
    /// Create a client with the documented default base URL, the default
    /// digest algorithm and the lenient failure policy.
    pub fn new(ctx: Context, credential: Credential) -> Self {
        Self {
            ctx,
            credential,
            base_url: DEFAULT_BASE_URL.to_string(),
            algorithm: DigestAlgorithm::default(),
            policy: FailurePolicy::default(),
        }
    }

    /// Override the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Select the digest algorithm used for the request signature.
    pub fn with_algorithm(mut self, algorithm: DigestAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Select how failures resolve.
    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Ask the review service to contact a customer who recently purchased
    /// from the merchant.
    ///
    /// The service emails the customer asking them to review the product.
    /// The email is not sent immediately, the service decides the interval.
    /// On success returns the resource the service echoed back.
    pub async fn customer_contact_request(
        &self,
        payload: &serde_json::Value,
    ) -> Result<Option<serde_json::Value>> {
        let outcome = self.send_signed(Method::POST, payload).await;
        self.policy.settle(outcome)
    }

    async fn send_signed(
        &self,
        method: Method,
        payload: &serde_json::Value,
    ) -> Result<serde_json::Value> {
        let url = format!(
            "{}{}",
            self.base_url,
            CONTACT_REQUEST_ENDPOINT.replace("{merchantId}", &self.credential.merchant_id)
        );
        debug!("api request: {method} {url}");

        let envelope = RequestEnvelope {
            data: payload,
            signed_request: self.sign_request(&method, &url),
        };
        let body = serde_json::to_vec(&envelope)
            .map_err(|e| Error::request_invalid("failed to encode request body").with_source(e))?;

        let req = http::Request::builder()
            .method(method)
            .uri(url.as_str())
            .header(ACCEPT, "application/json")
            // Content-Type must be sent or the service answers 500.
            .header(CONTENT_TYPE, "application/json")
            .body(Bytes::from(body))?;

        let resp = self.ctx.http_send_as_string(req).await?;
        if !resp.status().is_success() {
            return Err(Error::response_invalid(format!(
                "{}: {}",
                resp.status().as_u16(),
                resp.into_body()
            )));
        }

        parse_resource(&resp.into_body())
    }

    /// Digest the method, resolved URL and shared secret into the signature
    /// the service verifies.
    fn sign_request(&self, method: &Method, url: &str) -> SignedRequest {
        let input = format!("{method}{url}");

        SignedRequest {
            token: self.credential.merchant_id.clone(),
            signature: self
                .algorithm
                .sign(&input, &self.credential.merchant_secret),
        }
    }
}

/// Parse the JSON resource out of a response body.
///
/// An empty or null body is a failure, not an empty resource.
fn parse_resource(body: &str) -> Result<serde_json::Value> {
    let resource: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| Error::response_invalid("failed to decode response from api").with_source(e))?;

    if resource.is_null() {
        return Err(Error::response_invalid("empty response from api"));
    }

    Ok(resource)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resource_rejects_empty_and_null() {
        assert!(parse_resource("").is_err());
        assert!(parse_resource("null").is_err());
        assert!(parse_resource("not json").is_err());
        assert_eq!(
            parse_resource("{\"data\":{\"test\":\"one\"}}").unwrap(),
            serde_json::json!({"data": {"test": "one"}})
        );
    }
}
