//! Product snapshot types.

use crate::ids::{CategoryId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
}

/// A selectable size offered for a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SizeOption {
    /// Display name (e.g., "Medium").
    pub name: String,
    /// Short value shown on the size chip (e.g., "M").
    pub value: String,
}

/// The size a shopper picked when adding a product to the cart.
///
/// Identity is decided by `value` alone; `name` is carried for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectedSize {
    /// Display name (e.g., "Medium").
    pub name: String,
    /// Value identifying the physical variant (e.g., "M").
    pub value: String,
}

impl SelectedSize {
    /// Create a selected size.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl From<&SizeOption> for SelectedSize {
    fn from(option: &SizeOption) -> Self {
        Self {
            name: option.name.clone(),
            value: option.value.clone(),
        }
    }
}

/// A product as served by the catalog API.
///
/// The cart copies the fields it needs out of this record at add time;
/// it never holds a live reference back into the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Long-form description (may contain markup).
    pub description: Option<String>,
    /// Current list price.
    pub price: Money,
    /// Discount percentage currently offered (0 = no offer).
    pub offer_percent: f64,
    /// Units available; the cart will not grow a line past this.
    pub stock: u32,
    /// Image URLs, first is the primary image.
    pub images: Vec<String>,
    /// Sizes this product is sold in.
    pub sizes: Vec<SizeOption>,
    /// Category, when the API includes it.
    pub category: Option<Category>,
}

impl Product {
    /// Whether the product currently has a discount offer.
    pub fn has_offer(&self) -> bool {
        self.offer_percent > 0.0
    }

    /// The price after applying the current offer.
    pub fn discounted_price(&self) -> Money {
        if self.has_offer() {
            self.price.subtract(&self.price.percentage(self.offer_percent))
        } else {
            self.price
        }
    }

    /// Whether the product is out of stock.
    pub fn is_out_of_stock(&self) -> bool {
        self.stock == 0
    }

    /// The primary image URL, if any.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}
