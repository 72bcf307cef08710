//! Typed client for the storefront's remote commerce API.
//!
//! The backend owns products, coupons, reviews, orders, and site
//! configuration; this crate consumes its REST surface and converts the
//! wire shapes into `storefront-commerce` domain types.
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_api::StorefrontApi;
//!
//! let api = StorefrontApi::new("https://api.example.com");
//!
//! let product = api.product(&"prod-1".into())?;
//! let coupon = api.coupon("SAVE10")?; // None when the code is unknown
//! let order_id = api.place_order(&draft)?;
//! ```

mod client;
mod dto;
mod error;
mod http;

pub use client::{AvatarImage, BlockedIp, SiteSettings, StorefrontApi};
pub use error::ApiError;
pub use http::{Method, Request, Response};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{ApiError, StorefrontApi};
}
