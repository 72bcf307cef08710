//! The persisted shopping cart.

mod line_item;
mod store;

pub use line_item::{CartState, LineItem};
pub use store::{CartStore, CART_STORAGE_KEY};
