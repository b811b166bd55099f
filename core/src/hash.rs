//! Keyed digests used to authenticate signed artifacts.

use hmac::Hmac;
use hmac::Mac;
use md5::Md5;
use sha2::Digest;
use sha2::Sha256;

/// Hex encoded MD5 hash.
///
/// Only kept for [`DigestAlgorithm::LegacyMd5`]; new code signs with
/// [`DigestAlgorithm::HmacSha256`].
pub fn hex_md5(content: &[u8]) -> String {
    hex::encode(Md5::digest(content).as_slice())
}

/// Hex encoded SHA256 hash.
///
/// Use this function instead of `hex::encode(sha256(content))` can reduce
/// extra copy.
pub fn hex_sha256(content: &[u8]) -> String {
    hex::encode(Sha256::digest(content).as_slice())
}

/// Hex encoded HMAC with SHA256 hash.
pub fn hex_hmac_sha256(key: &[u8], content: &[u8]) -> String {
    // SAFETY: HMAC's new_from_slice always returns Ok - it handles any key length
    let mut h = Hmac::<Sha256>::new_from_slice(key).unwrap();
    h.update(content);

    hex::encode(h.finalize().into_bytes())
}

/// The keyed digest used to turn a derived hash-input string and the merchant
/// secret into the `hash`/`signature` value of a signed artifact.
///
/// The algorithm is chosen per builder and versioned by name so deployments
/// can move off the legacy digest without touching the field-ordering
/// contract: swapping the algorithm changes the digest value only, never
/// which fields feed it or the order they are concatenated in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DigestAlgorithm {
    /// `md5(input + secret)`, hex encoded.
    ///
    /// This is what the historical SDKs shipped and what existing fixture
    /// hashes were computed with. MD5 is not collision resistant; keep this
    /// only while the remote end still expects it.
    LegacyMd5,
    /// `hmac-sha256(secret, input)`, hex encoded.
    #[default]
    HmacSha256,
}

impl DigestAlgorithm {
    /// Sign the derived hash-input string with the merchant secret.
    pub fn sign(&self, input: &str, secret: &str) -> String {
        match self {
            DigestAlgorithm::LegacyMd5 => {
                let mut keyed = String::with_capacity(input.len() + secret.len());
                keyed.push_str(input);
                keyed.push_str(secret);
                hex_md5(keyed.as_bytes())
            }
            DigestAlgorithm::HmacSha256 => hex_hmac_sha256(secret.as_bytes(), input.as_bytes()),
        }
    }
}
