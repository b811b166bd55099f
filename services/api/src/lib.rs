//! Client for the Reviewly merchant API.
//!
//! Currently the API exposes one operation: the customer contact request,
//! which asks the review service to email a recent customer for a product
//! review. Requests carry a JSON envelope signed with the merchant secret so
//! the service can authenticate the sender.
//!
//! # Example
//!
//! ```rust,no_run
//! use reviewly_api::ApiClient;
//! use reviewly_core::{Context, Credential};
//! use serde_json::json;
//!
//! # fn http_sender() -> reviewly_core::NoopHttpSend { reviewly_core::NoopHttpSend }
//! # async fn example() -> reviewly_core::Result<()> {
//! let ctx = Context::new().with_http_send(http_sender());
//! let client = ApiClient::new(ctx, Credential::new("mid", "secret"));
//!
//! let payload = json!({
//!     "email": "customer@example.com",
//!     "order": "1234",
//! });
//!
//! if let Some(resource) = client.customer_contact_request(&payload).await? {
//!     println!("{resource}");
//! }
//! # Ok(())
//! # }
//! ```

mod client;
pub use client::ApiClient;

mod envelope;
