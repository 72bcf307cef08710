//! Cart line items and the cart snapshot.

use crate::catalog::{Product, SelectedSize};
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// One entry in the cart: a product snapshot, the size picked, and a count.
///
/// Price and offer are copied from the product at add time; later price
/// changes in the catalog do not retroactively alter cart totals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product identifier.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Unit price at the time the item was added.
    pub unit_price: Money,
    /// Discount percentage at the time the item was added (0 = none).
    pub offer_percent: f64,
    /// Stock ceiling at the time the item was added.
    pub stock: u32,
    /// Primary image URL, if the product had one.
    pub image: Option<String>,
    /// The size the shopper picked; `None` is itself a distinct identity.
    pub selected_size: Option<SelectedSize>,
    /// Count of units of this exact (product, size) pair.
    pub quantity: u32,
}

impl LineItem {
    /// Build a quantity-1 line from a product snapshot.
    pub fn from_product(product: &Product, selected_size: Option<SelectedSize>) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            offer_percent: product.offer_percent,
            stock: product.stock,
            image: product.primary_image().map(str::to_string),
            selected_size,
            quantity: 1,
        }
    }

    /// The size value this line is keyed on, if a size was picked.
    pub fn size_value(&self) -> Option<&str> {
        self.selected_size.as_ref().map(|s| s.value.as_str())
    }

    /// Whether this line matches the (product, size value) compound key.
    pub fn matches(&self, product_id: &ProductId, size_value: Option<&str>) -> bool {
        self.product_id == *product_id && self.size_value() == size_value
    }

    /// Unit price after the snapshotted offer.
    pub fn discounted_unit_price(&self) -> Money {
        if self.offer_percent > 0.0 {
            self.unit_price
                .subtract(&self.unit_price.percentage(self.offer_percent))
        } else {
            self.unit_price
        }
    }

    /// Discounted unit price times quantity.
    pub fn subtotal(&self) -> Money {
        self.discounted_unit_price().multiply(i64::from(self.quantity))
    }
}

/// The full cart contents: an ordered sequence of line items.
///
/// Order is insertion order and is used only for display. At most one
/// line exists per (product, size value) pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CartState {
    /// Line items, oldest first.
    pub items: Vec<LineItem>,
}

impl CartState {
    /// Find the line matching the compound key.
    pub fn find(&self, product_id: &ProductId, size_value: Option<&str>) -> Option<&LineItem> {
        self.items.iter().find(|i| i.matches(product_id, size_value))
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Total unit count across all lines.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of discounted line subtotals.
    ///
    /// The currency is taken from the first line. A line in any other
    /// currency (possible only through a hand-edited snapshot) is skipped
    /// with a warning rather than poisoning the total.
    pub fn subtotal(&self) -> Money {
        let currency = self
            .items
            .first()
            .map(|i| i.unit_price.currency)
            .unwrap_or(Currency::default());
        self.items.iter().fold(Money::zero(currency), |acc, item| {
            match acc.try_add(&item.subtotal()) {
                Some(sum) => sum,
                None => {
                    tracing::warn!(product = %item.product_id, "line currency differs from cart currency, skipping in subtotal");
                    acc
                }
            }
        })
    }
}
