use bytes::Bytes;

use crate::canonical::{canonicalize, render_query};
use crate::constants::{DEFAULT_FRAGMENT_URL, DEFAULT_IFRAME_URL};
use crate::{ProductData, WidgetProfile};
use reviewly_core::hash::DigestAlgorithm;
use reviewly_core::{Context, Credential, Error, FailurePolicy, Result};

/// Builds signed widget artifacts for one product page.
///
/// A builder owns its credential and product data; the HTTP collaborator is
/// shared through the [`Context`]. Product data is validated against the
/// builder's profile before it is stored and again before every artifact, so
/// a signed URL can never be produced from invalid data.
///
/// Failed operations resolve according to the configured [`FailurePolicy`]:
/// by default they log a warning and yield `None` so the embedding page keeps
/// rendering without the widget.
#[derive(Debug, Clone)]
pub struct WidgetBuilder {
    ctx: Context,
    credential: Credential,
    profile: WidgetProfile,
    user_id: Option<String>,
    iframe_url: String,
    fragment_url: String,
    algorithm: DigestAlgorithm,
    policy: FailurePolicy,
    data: Option<ProductData>,
}

impl WidgetBuilder {
    /// Create a builder with the documented default endpoints, the default
    /// digest algorithm and the lenient failure policy.
    pub fn new(ctx: Context, credential: Credential, profile: WidgetProfile) -> Self {
        Self {
            ctx,
            credential,
            profile,
            user_id: None,
            iframe_url: DEFAULT_IFRAME_URL.to_string(),
            fragment_url: DEFAULT_FRAGMENT_URL.to_string(),
            algorithm: DigestAlgorithm::default(),
            policy: FailurePolicy::default(),
            data: None,
        }
    }

    /// Set the user id issued to the merchant, emitted as `userId` by the
    /// modern profile.
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Override the iframe endpoint.
    pub fn with_iframe_url(mut self, url: impl Into<String>) -> Self {
        self.iframe_url = url.into();
        self
    }

    /// Override the HTML fragment endpoint.
    pub fn with_fragment_url(mut self, url: impl Into<String>) -> Self {
        self.fragment_url = url.into();
        self
    }

    /// Select the digest algorithm used for the `hash` field.
    pub fn with_algorithm(mut self, algorithm: DigestAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Select how failures resolve.
    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Supply initial product data at construction time.
    ///
    /// Validation follows the failure policy: under the lenient policy
    /// invalid data is logged and discarded, and the builder is returned
    /// without data set.
    pub fn with_product_data(mut self, data: ProductData) -> Result<Self> {
        self.set_product_data(data)?;
        Ok(self)
    }

    /// Replace the product data, validating it first.
    ///
    /// Returns whether the data was stored. Invalid data is rejected before
    /// it is stored; previously stored data stays in effect unchanged.
    pub fn set_product_data(&mut self, data: ProductData) -> Result<bool> {
        let checked = self.profile.validate(&data).map(|()| data);
        match self.policy.settle(checked)? {
            Some(data) => {
                self.data = Some(data);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// The currently stored product data, if any.
    pub fn product_data(&self) -> Option<&ProductData> {
        self.data.as_ref()
    }

    /// URL of the iframe embed for the current product.
    pub fn iframe_url(&self) -> Result<Option<String>> {
        let url = self
            .signed_query(true)
            .map(|query| format!("{}?{}", self.iframe_url, query));
        self.policy.settle(url)
    }

    /// Value for the `data` property of an inline widget mount.
    ///
    /// Emitted raw by default to match what the service parses out of markup;
    /// pass `encoded` to get the form-encoded variant of the same string.
    pub fn data_property(&self, encoded: bool) -> Result<Option<String>> {
        self.policy.settle(self.signed_query(encoded))
    }

    /// Fetch the SEO-friendly HTML fragment for the current product.
    ///
    /// Performs a GET against the fragment endpoint; anything but a 2xx
    /// response resolves through the failure policy.
    pub async fn html_fragment(&self) -> Result<Option<String>> {
        let fragment = self.fetch_fragment().await;
        self.policy.settle(fragment)
    }

    async fn fetch_fragment(&self) -> Result<String> {
        let url = format!("{}?{}", self.fragment_url, self.signed_query(true)?);

        let req = http::Request::get(url.as_str()).body(Bytes::new())?;
        let resp = self.ctx.http_send_as_string(req).await?;

        if !resp.status().is_success() {
            return Err(Error::response_invalid(format!(
                "received {} from {}",
                resp.status(),
                url
            )));
        }

        Ok(resp.into_body())
    }

    /// Validate, canonicalize and render the current product data.
    fn signed_query(&self, encode: bool) -> Result<String> {
        let data = self
            .data
            .as_ref()
            .ok_or_else(|| Error::product_invalid("no product data set"))?;
        self.profile.validate(data)?;

        let pairs = canonicalize(
            self.profile,
            data,
            &self.credential,
            self.user_id.as_deref(),
            self.algorithm,
        );

        Ok(render_query(&pairs, encode))
    }
}
