//! Core components for talking to the Reviewly product-review service.
//!
//! This crate provides the foundational types shared by the Reviewly service
//! crates. It defines the HTTP collaborator abstraction, the error type, the
//! keyed digest strategies used to authenticate artifacts, and the failure
//! policy that decides whether a failed operation degrades or propagates.
//!
//! ## Overview
//!
//! - **Context**: a container holding the [`HttpSend`] implementation used
//!   for network calls, so the service crates never construct their own
//!   transport.
//! - **Credential**: the merchant id and shared secret issued to a merchant.
//! - **DigestAlgorithm**: the named, swappable keyed digest behind every
//!   signature.
//! - **FailurePolicy**: the single point where "raise an error" and "log and
//!   degrade" diverge.
//!
//! ## Example
//!
//! ```no_run
//! use reviewly_core::{Context, Credential, HttpSend, Result};
//! use async_trait::async_trait;
//! use bytes::Bytes;
//!
//! // Provide your own transport...
//! #[derive(Debug)]
//! struct MyHttpSend;
//!
//! #[async_trait]
//! impl HttpSend for MyHttpSend {
//!     async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
//!         todo!()
//!     }
//! }
//!
//! // ...and hand it to the service crates through a context.
//! let ctx = Context::new().with_http_send(MyHttpSend);
//! let credential = Credential::new("my-merchant-id", "my-merchant-secret");
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod utils;

mod context;
pub use context::Context;
pub use context::HttpSend;
pub use context::NoopHttpSend;

mod credential;
pub use credential::Credential;

mod error;
pub use error::{Error, ErrorKind, Result};

mod policy;
pub use policy::FailurePolicy;
