/// Attributes describing a single product page.
///
/// Every field is optional at this level; which combinations are acceptable
/// is decided by the [`WidgetProfile`] validating the data. Absent fields are
/// skipped when the data is canonicalized into a query string, they are never
/// emitted as empty `key=` pairs.
///
/// [`WidgetProfile`]: crate::WidgetProfile
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductData {
    /// Product name (the original SDK also accepted this as `sku`).
    pub name: Option<String>,
    /// URL of the product page on the merchant site.
    pub url: Option<String>,
    /// Brand name.
    pub brand: Option<String>,
    /// Manufacturer part number.
    pub mpn: Option<String>,
    /// Global trade item number.
    pub gtin: Option<String>,
    /// Page type, emitted as `type`.
    pub kind: Option<String>,
    /// Page language.
    pub lang: Option<String>,
    /// Display title for the widget.
    pub title: Option<String>,
    /// Free-form blurb shown with the widget.
    pub info: Option<String>,
    /// Display price.
    pub price: Option<String>,
}

impl ProductData {
    /// Create an empty ProductData.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the product name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the product page url.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the brand name.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Set the manufacturer part number.
    pub fn with_mpn(mut self, mpn: impl Into<String>) -> Self {
        self.mpn = Some(mpn.into());
        self
    }

    /// Set the global trade item number.
    pub fn with_gtin(mut self, gtin: impl Into<String>) -> Self {
        self.gtin = Some(gtin.into());
        self
    }

    /// Set the page type.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Set the page language.
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    /// Set the widget title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the widget blurb.
    pub fn with_info(mut self, info: impl Into<String>) -> Self {
        self.info = Some(info.into());
        self
    }

    /// Set the display price.
    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }
}
