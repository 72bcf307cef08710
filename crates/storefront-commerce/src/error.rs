//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront domain operations.
///
/// Cart mutations never return these; they report through the notifier.
/// The enum serves checkout validation and wire-format parsing.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Phone number failed validation.
    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),

    /// Customer detail missing or empty.
    #[error("Missing customer detail: {0}")]
    MissingDetail(&'static str),

    /// Unknown payment method value.
    #[error("Unknown payment method: {0}")]
    UnknownPaymentMethod(String),

    /// Order placed from an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
