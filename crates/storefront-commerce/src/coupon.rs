//! Coupon types and discount math.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Value of a coupon.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum CouponValue {
    /// Percentage off the cart subtotal (0.0 - 100.0).
    Percentage(f64),
    /// Fixed amount off.
    Fixed(Money),
}

impl CouponValue {
    /// Calculate the discount amount for a given subtotal.
    ///
    /// A fixed discount never exceeds the subtotal.
    pub fn calculate(&self, subtotal: &Money) -> Money {
        match self {
            CouponValue::Percentage(percent) => subtotal.percentage(*percent),
            CouponValue::Fixed(amount) => amount.min(subtotal),
        }
    }
}

/// A coupon as validated by the backend.
///
/// The backend owns expiry and usage accounting; this type carries its
/// verdict (`is_valid`, `is_active`) alongside the discount value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Coupon {
    /// The code the shopper typed (e.g., "SAVE10").
    pub code: String,
    /// Discount value.
    pub value: CouponValue,
    /// Whether the backend considers the coupon currently valid.
    pub is_valid: bool,
    /// Whether the coupon is active.
    pub is_active: bool,
}

impl Coupon {
    /// Whether the coupon may discount an order at all.
    pub fn is_applicable(&self) -> bool {
        self.is_valid && self.is_active
    }

    /// The discount this coupon takes off `subtotal`.
    ///
    /// An inactive or invalid coupon discounts nothing.
    pub fn discount_for(&self, subtotal: &Money) -> Money {
        if !self.is_applicable() {
            return Money::zero(subtotal.currency);
        }
        self.value.calculate(subtotal)
    }
}
