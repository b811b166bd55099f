//! Turns sparse product data into the ordered, signed query string the
//! review service authenticates.

use crate::{ProductData, WidgetProfile};
use log::debug;
use reviewly_core::hash::DigestAlgorithm;
use reviewly_core::Credential;

/// A field that may appear in a widget query string.
///
/// Two orderings are defined over these fields per profile and they are
/// deliberately independent: the digest input uses a narrow subset in its own
/// order, while the emitted query uses the full set. Changing one must never
/// change the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Name,
    Url,
    MerchantId,
    UserId,
    Brand,
    Mpn,
    Gtin,
    Kind,
    Lang,
    Title,
    Info,
    Price,
}

impl Field {
    /// Wire name of the field in emitted query strings.
    pub(crate) fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Url => "url",
            Field::MerchantId => "mid",
            Field::UserId => "userId",
            Field::Brand => "brand",
            Field::Mpn => "mpn",
            Field::Gtin => "gtin",
            Field::Kind => "type",
            Field::Lang => "lang",
            Field::Title => "title",
            Field::Info => "info",
            Field::Price => "price",
        }
    }
}

/// Merchant-side identity emitted alongside the product fields.
pub(crate) struct Identity<'a> {
    pub merchant_id: &'a str,
    pub user_id: Option<&'a str>,
}

fn field_value<'a>(field: Field, data: &'a ProductData, identity: &Identity<'a>) -> Option<&'a str> {
    match field {
        Field::Name => data.name.as_deref(),
        Field::Url => data.url.as_deref(),
        Field::MerchantId => Some(identity.merchant_id),
        Field::UserId => identity.user_id,
        Field::Brand => data.brand.as_deref(),
        Field::Mpn => data.mpn.as_deref(),
        Field::Gtin => data.gtin.as_deref(),
        Field::Kind => data.kind.as_deref(),
        Field::Lang => data.lang.as_deref(),
        Field::Title => data.title.as_deref(),
        Field::Info => data.info.as_deref(),
        Field::Price => data.price.as_deref(),
    }
}

/// Canonicalize product data into the ordered `(key, value)` pairs of a
/// signed query, ending with the `hash` field.
///
/// Absent fields are skipped entirely. Given identical inputs the output is
/// byte-for-byte identical; the digest is recomputed on every call.
pub(crate) fn canonicalize(
    profile: WidgetProfile,
    data: &ProductData,
    credential: &Credential,
    user_id: Option<&str>,
    algorithm: DigestAlgorithm,
) -> Vec<(String, String)> {
    let identity = Identity {
        merchant_id: &credential.merchant_id,
        user_id,
    };

    let mut hash_input = String::new();
    for field in profile.hash_fields() {
        if let Some(value) = field_value(*field, data, &identity) {
            hash_input.push_str(value);
        }
    }
    debug!("widget hash input: {hash_input}");

    let hash = algorithm.sign(&hash_input, &credential.merchant_secret);

    let emit = profile.emit_fields();
    let mut pairs = Vec::with_capacity(emit.len() + 1);
    for field in emit {
        if let Some(value) = field_value(*field, data, &identity) {
            pairs.push((field.key().to_string(), value.to_string()));
        }
    }
    pairs.push(("hash".to_string(), hash));

    pairs
}

/// Render canonicalized pairs as a query string.
///
/// With `encode` set, values get `application/x-www-form-urlencoded` escaping
/// (space becomes `+`, reserved bytes are percent-escaped) for use in URLs;
/// without it values are emitted verbatim for inline data properties. Keys
/// are plain ASCII and never escaped.
pub(crate) fn render_query(pairs: &[(String, String)], encode: bool) -> String {
    let mut out = String::new();

    for (idx, (key, value)) in pairs.iter().enumerate() {
        if idx != 0 {
            out.push('&');
        }

        out.push_str(key);
        out.push('=');
        if encode {
            out.extend(form_urlencoded::byte_serialize(value.as_bytes()));
        } else {
            out.push_str(value);
        }
    }

    out
}
