use crate::canonical::Field;
use crate::ProductData;
use reviewly_core::{Error, Result};

/// Selects the validation rules and field orderings for one widget artifact
/// family.
///
/// The review service grew two generations of embed endpoints with different
/// required-field contracts. Exactly one profile applies per builder; the
/// profile decides which fields must be present, which field values feed the
/// keyed digest, and the order fields are emitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetProfile {
    /// The HTML-fragment and data-property embeds.
    ///
    /// Products are identified by name, so `name` and `url` are required.
    Modern,
    /// The iframe embed.
    ///
    /// Products must be identifiable by GTIN alone or by brand plus MPN
    /// together; `url` is required as well.
    Legacy,
}

impl WidgetProfile {
    /// Field values concatenated (in order) into the digest input.
    pub(crate) fn hash_fields(&self) -> &'static [Field] {
        match self {
            WidgetProfile::Modern => &[Field::Name],
            WidgetProfile::Legacy => &[Field::Brand, Field::Mpn, Field::Gtin],
        }
    }

    /// Fields emitted (in order) into the query string. `hash` follows last.
    pub(crate) fn emit_fields(&self) -> &'static [Field] {
        match self {
            WidgetProfile::Modern => &[
                Field::Name,
                Field::Url,
                Field::MerchantId,
                Field::UserId,
                Field::Brand,
                Field::Mpn,
                Field::Gtin,
                Field::Kind,
                Field::Lang,
                Field::Title,
                Field::Info,
                Field::Price,
            ],
            WidgetProfile::Legacy => &[
                Field::Url,
                Field::MerchantId,
                Field::Brand,
                Field::Mpn,
                Field::Gtin,
                Field::Kind,
                Field::Lang,
                Field::Title,
                Field::Info,
            ],
        }
    }

    /// Check that `data` identifies a product well enough for this profile.
    ///
    /// Reports the first violation in the profile's documented check order.
    pub fn validate(&self, data: &ProductData) -> Result<()> {
        match self {
            WidgetProfile::Modern => {
                if blank(&data.name) {
                    return Err(Error::product_invalid("name must be set in product data"));
                }
                if blank(&data.url) {
                    return Err(Error::product_invalid("url must be set in product data"));
                }
            }
            WidgetProfile::Legacy => {
                if blank(&data.gtin) && (blank(&data.brand) || blank(&data.mpn)) {
                    return Err(Error::product_invalid(
                        "either gtin or brand and mpn must be set in product data",
                    ));
                }
                if blank(&data.url) {
                    return Err(Error::product_invalid(
                        "url of the product on the merchant site must be set in product data",
                    ));
                }
            }
        }

        Ok(())
    }
}

/// Absent and empty both fail the required-field rules.
fn blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn legacy_data() -> ProductData {
        ProductData::new()
            .with_gtin("00000000000")
            .with_mpn("Cool Shoes")
            .with_brand("Cool Shoe Maker")
            .with_url("http://cool-shoes.com/product/cool-shoe-1")
    }

    // A product is identifiable by gtin alone or by brand + mpn together.
    #[test_case(true,  true,  true  => true  ; "all identifiers")]
    #[test_case(true,  false, false => true  ; "gtin only")]
    #[test_case(false, true,  true  => true  ; "brand and mpn")]
    #[test_case(false, true,  false => false ; "brand only")]
    #[test_case(false, false, true  => false ; "mpn only")]
    #[test_case(false, false, false => false ; "no identifiers")]
    fn test_legacy_identifiability(gtin: bool, brand: bool, mpn: bool) -> bool {
        let mut data = legacy_data();
        if !gtin {
            data.gtin = None;
        }
        if !brand {
            data.brand = None;
        }
        if !mpn {
            data.mpn = None;
        }

        WidgetProfile::Legacy.validate(&data).is_ok()
    }

    #[test]
    fn test_legacy_requires_url() {
        let mut data = legacy_data();
        data.url = None;
        assert!(WidgetProfile::Legacy.validate(&data).is_err());

        data.url = Some(String::new());
        assert!(WidgetProfile::Legacy.validate(&data).is_err());
    }

    #[test]
    fn test_modern_requires_name_and_url() {
        let data = ProductData::new()
            .with_name("Cool Shoe 1")
            .with_url("http://cool-shoes.com/product/cool-shoe-1");
        assert!(WidgetProfile::Modern.validate(&data).is_ok());

        let mut missing_name = data.clone();
        missing_name.name = None;
        let err = WidgetProfile::Modern.validate(&missing_name).unwrap_err();
        assert!(err.to_string().contains("name"));

        let mut missing_url = data;
        missing_url.url = None;
        let err = WidgetProfile::Modern.validate(&missing_url).unwrap_err();
        assert!(err.to_string().contains("url"));
    }

    #[test]
    fn test_optional_fields_stay_optional() {
        // type, lang, title and info may all be absent.
        assert!(WidgetProfile::Legacy.validate(&legacy_data()).is_ok());
    }
}
