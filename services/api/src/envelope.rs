use serde::Serialize;

/// JSON body of a signed API request.
///
/// The service authenticates the sender from `signedRequest` and never looks
/// at `data` before the signature checks out.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RequestEnvelope<'a> {
    pub data: &'a serde_json::Value,
    pub signed_request: SignedRequest,
}

/// Identifies the merchant and proves the request was built with the shared
/// secret.
#[derive(Debug, Serialize)]
pub(crate) struct SignedRequest {
    pub token: String,
    pub signature: String,
}
