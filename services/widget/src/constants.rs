/// Default URL of the iframe embed endpoint.
pub(crate) const DEFAULT_IFRAME_URL: &str = "https://app.reviewly.io/widget/iframe";

/// Default URL of the SEO HTML fragment endpoint.
pub(crate) const DEFAULT_FRAGMENT_URL: &str = "https://app.reviewly.io/widget/api/get";
