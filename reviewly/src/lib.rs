#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use reviewly_core::*;

#[cfg(feature = "widget")]
pub mod widget {
    pub use reviewly_widget::*;
}

#[cfg(feature = "api")]
pub mod api {
    pub use reviewly_api::*;
}
