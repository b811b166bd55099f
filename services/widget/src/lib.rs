//! Signed widget artifacts for the Reviewly product-review service.
//!
//! A merchant page embeds the review widget in one of three ways: an iframe
//! URL, an inline `data-*` property on the widget mount element, or a
//! server-fetched SEO HTML fragment. All three are query strings over the
//! same product data, authenticated with a keyed digest of a profile-specific
//! field subset.
//!
//! # Example
//!
//! ```rust,no_run
//! use reviewly_core::{Context, Credential};
//! use reviewly_widget::{ProductData, WidgetBuilder, WidgetProfile};
//!
//! # fn http_sender() -> reviewly_core::NoopHttpSend { reviewly_core::NoopHttpSend }
//! # fn main() -> reviewly_core::Result<()> {
//! let ctx = Context::new().with_http_send(http_sender());
//!
//! let data = ProductData::new()
//!     .with_url("https://shop.example.com/product/cool-shoe-1")
//!     .with_gtin("00000000000");
//!
//! let builder = WidgetBuilder::new(ctx, Credential::new("mid", "secret"), WidgetProfile::Legacy)
//!     .with_product_data(data)?;
//!
//! if let Some(url) = builder.iframe_url()? {
//!     println!("{url}");
//! }
//! # Ok(())
//! # }
//! ```

mod product;
pub use product::ProductData;

mod profile;
pub use profile::WidgetProfile;

mod canonical;

mod builder;
pub use builder::WidgetBuilder;

mod constants;
