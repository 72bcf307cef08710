//! Checkout types: customer details, order drafts, order summaries.

mod draft;
mod order;

pub use draft::{CustomerDetails, OrderDraft, OrderLine, PaymentMethod, ShippingMethod};
pub use order::{OrderStatus, OrderSummary};
