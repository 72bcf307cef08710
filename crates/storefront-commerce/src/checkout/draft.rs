//! Order drafts assembled from the cart at checkout.

use crate::cart::{CartState, LineItem};
use crate::catalog::SelectedSize;
use crate::coupon::Coupon;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the shopper pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    /// Pay the courier on delivery.
    CashOnDelivery,
    /// Pay through a mobile banking wallet.
    MobileBanking,
}

impl PaymentMethod {
    /// Wire value for the checkout API.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::CashOnDelivery => "cash-on-delivery",
            PaymentMethod::MobileBanking => "mobile-banking",
        }
    }

    /// Parse a wire value.
    pub fn parse(value: &str) -> Result<Self, CommerceError> {
        match value {
            "cash-on-delivery" => Ok(PaymentMethod::CashOnDelivery),
            "mobile-banking" => Ok(PaymentMethod::MobileBanking),
            other => Err(CommerceError::UnknownPaymentMethod(other.to_string())),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A shipping option with its flat cost.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShippingMethod {
    /// Label shown to the shopper (e.g., "Inside Dhaka").
    pub label: String,
    /// Flat shipping cost.
    pub cost: Money,
}

impl ShippingMethod {
    /// Create a shipping method.
    pub fn new(label: impl Into<String>, cost: Money) -> Self {
        Self {
            label: label.into(),
            cost,
        }
    }
}

/// Validated customer contact details.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerDetails {
    /// Full name.
    pub name: String,
    /// Phone number; also the key orders are looked up by later.
    pub phone: String,
    /// Delivery address.
    pub address: String,
}

impl CustomerDetails {
    /// Validate and build customer details.
    ///
    /// The phone must be a local 11-digit number starting with "01".
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<Self, CommerceError> {
        let name = name.into().trim().to_string();
        let phone = phone.into().trim().to_string();
        let address = address.into().trim().to_string();

        if name.is_empty() {
            return Err(CommerceError::MissingDetail("name"));
        }
        if address.is_empty() {
            return Err(CommerceError::MissingDetail("address"));
        }
        if phone.len() != 11 || !phone.starts_with("01") || !phone.chars().all(|c| c.is_ascii_digit())
        {
            return Err(CommerceError::InvalidPhone(phone));
        }

        Ok(Self {
            name,
            phone,
            address,
        })
    }
}

/// One product line in an order payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    /// Product identifier.
    pub product_id: ProductId,
    /// Units ordered.
    pub quantity: u32,
    /// Discounted unit price the shopper was shown.
    pub unit_price: Money,
    /// Size picked, if any.
    pub size: Option<SelectedSize>,
}

impl From<&LineItem> for OrderLine {
    fn from(item: &LineItem) -> Self {
        Self {
            product_id: item.product_id.clone(),
            quantity: item.quantity,
            unit_price: item.discounted_unit_price(),
            size: item.selected_size.clone(),
        }
    }
}

/// An order ready to submit to the checkout API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderDraft {
    /// Product lines, in cart order.
    pub lines: Vec<OrderLine>,
    /// Payment method picked on the checkout form.
    pub payment_method: PaymentMethod,
    /// Shipping option picked on the checkout form.
    pub shipping: ShippingMethod,
    /// Cart subtotal (discounted prices) at draft time.
    pub subtotal: Money,
    /// Coupon discount taken off the subtotal.
    pub discount: Money,
    /// The coupon backing the discount, for the backend's records.
    pub coupon: Option<Coupon>,
    /// Who the order ships to.
    pub customer: CustomerDetails,
}

impl OrderDraft {
    /// Assemble a draft from the current cart contents.
    ///
    /// The coupon, when present, is applied to the cart subtotal; a coupon
    /// the backend marked inactive or invalid contributes no discount.
    pub fn from_cart(
        cart: &CartState,
        payment_method: PaymentMethod,
        shipping: ShippingMethod,
        coupon: Option<Coupon>,
        customer: CustomerDetails,
    ) -> Result<Self, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }

        let subtotal = cart.subtotal();
        let discount = coupon
            .as_ref()
            .map(|c| c.discount_for(&subtotal))
            .unwrap_or_else(|| Money::zero(subtotal.currency));

        Ok(Self {
            lines: cart.items.iter().map(OrderLine::from).collect(),
            payment_method,
            shipping,
            subtotal,
            discount,
            coupon,
            customer,
        })
    }

    /// Grand total: subtotal plus shipping minus discount.
    pub fn total(&self) -> Money {
        self.subtotal.add(&self.shipping.cost).subtract(&self.discount)
    }
}
