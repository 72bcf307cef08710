//! Domain types and cart logic for the storefront.
//!
//! This crate provides the state the storefront UI renders from:
//!
//! - **Catalog**: product snapshots, categories, size options
//! - **Cart**: the persisted shopping cart with add/reduce/remove semantics
//! - **Coupon**: discount-code validation results and discount math
//! - **Checkout**: customer details, order drafts, order summaries
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use storefront_commerce::prelude::*;
//! use storefront_kv::MemoryStore;
//!
//! let cart = CartStore::load(Arc::new(MemoryStore::new()), Arc::new(TracingNotifier));
//!
//! let size = SelectedSize::new("Medium", "M");
//! cart.add_item(&product, Some(&size));
//! assert_eq!(cart.item_quantity(&product.id, Some(&size)), 1);
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod coupon;
pub mod error;
pub mod ids;
pub mod money;
pub mod notify;
pub mod review;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Category, Product, SelectedSize, SizeOption};

    // Cart
    pub use crate::cart::{CartState, CartStore, LineItem, CART_STORAGE_KEY};

    // Coupon
    pub use crate::coupon::{Coupon, CouponValue};

    // Checkout
    pub use crate::checkout::{
        CustomerDetails, OrderDraft, OrderLine, OrderStatus, OrderSummary, PaymentMethod,
        ShippingMethod,
    };

    // Reviews
    pub use crate::review::Review;

    // Notifications
    pub use crate::notify::{NoticeKind, Notifier, NullNotifier, TracingNotifier};
}
