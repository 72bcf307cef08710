//! Key-value persistence layer for the storefront.
//!
//! Durable state (the shopping cart, session scraps) lives in a string-keyed
//! store behind the [`KeyValue`] trait, with automatic JSON serialization via
//! [`KeyValueExt`]. On Spin hosts the store is backed by the platform
//! Key-Value Store; everywhere else [`MemoryStore`] provides the same
//! contract in process memory, which is also what tests inject.
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_kv::{KeyValueExt, MemoryStore};
//!
//! let store = MemoryStore::new();
//! store.set("cart-storage", &cart)?;
//! let cart: Option<Cart> = store.get("cart-storage")?;
//! ```

mod error;
mod kv;
mod memory;
#[cfg(target_arch = "wasm32")]
mod spin;

pub use error::StoreError;
pub use kv::{KeyValue, KeyValueExt};
pub use memory::MemoryStore;
#[cfg(target_arch = "wasm32")]
pub use spin::SpinStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{KeyValue, KeyValueExt, MemoryStore, StoreError};
    #[cfg(target_arch = "wasm32")]
    pub use crate::SpinStore;
}
