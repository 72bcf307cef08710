//! Wire shapes for the commerce API and their domain conversions.
//!
//! The backend speaks camelCase JSON with decimal prices; everything is
//! converted into `storefront-commerce` types at this boundary.

use serde::{Deserialize, Serialize};
use storefront_commerce::prelude::*;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub offer: f64,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub images: Vec<ImageDto>,
    #[serde(default)]
    pub size: Vec<SizeEntryDto>,
    #[serde(default)]
    pub category: Option<CategoryDto>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ImageDto {
    pub url: String,
}

/// The size relation is nested: each entry wraps the actual size record.
#[derive(Debug, Deserialize)]
pub(crate) struct SizeEntryDto {
    pub size: SizeDto,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SizeDto {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CategoryDto {
    pub id: String,
    pub name: String,
}

impl ProductDto {
    pub fn into_domain(self, currency: Currency) -> Product {
        Product {
            id: ProductId::new(self.id),
            name: self.name,
            description: self.description,
            price: Money::from_decimal(self.price, currency),
            offer_percent: self.offer,
            stock: self.stock,
            images: self.images.into_iter().map(|i| i.url).collect(),
            sizes: self
                .size
                .into_iter()
                .map(|entry| SizeOption {
                    name: entry.size.name,
                    value: entry.size.value,
                })
                .collect(),
            category: self.category.map(|c| Category {
                id: CategoryId::new(c.id),
                name: c.name,
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CouponDto {
    #[serde(default)]
    pub code: String,
    pub discount_type: String,
    pub discount_amount: f64,
    #[serde(default)]
    pub is_valid: bool,
    #[serde(default)]
    pub is_active: bool,
}

impl CouponDto {
    /// Convert to a domain coupon; an unrecognized discount type yields
    /// `None`, which callers treat like an invalid code.
    pub fn into_domain(self, currency: Currency) -> Option<Coupon> {
        let value = match self.discount_type.as_str() {
            "PERCENTAGE" => CouponValue::Percentage(self.discount_amount),
            "FIXED" => CouponValue::Fixed(Money::from_decimal(self.discount_amount, currency)),
            other => {
                tracing::warn!(discount_type = other, "unrecognized coupon discount type");
                return None;
            }
        };
        Some(Coupon {
            code: self.code,
            value,
            is_valid: self.is_valid,
            is_active: self.is_active,
        })
    }
}

/// Reviews arrive wrapped in a `data` envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct ReviewsEnvelope {
    #[serde(default)]
    pub data: Vec<ReviewDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReviewDto {
    pub id: String,
    pub product_id: String,
    pub name: String,
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

impl From<ReviewDto> for Review {
    fn from(dto: ReviewDto) -> Self {
        Review {
            id: ReviewId::new(dto.id),
            product_id: ProductId::new(dto.product_id),
            author: dto.name,
            rating: dto.rating,
            comment: dto.comment,
            avatar_url: dto.avatar_url,
            created_at: dto.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct OrdersEnvelope {
    #[serde(default)]
    pub orders: Vec<OrderSummaryDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderSummaryDto {
    pub id: String,
    #[serde(default)]
    pub created_at: String,
    /// The backend formats the total as a decimal string.
    pub total: String,
    pub status: String,
    #[serde(default)]
    pub product_names: String,
}

impl OrderSummaryDto {
    pub fn into_domain(self, currency: Currency) -> OrderSummary {
        let total = self.total.parse::<f64>().unwrap_or_else(|_| {
            tracing::warn!(order = %self.id, total = %self.total, "unparseable order total");
            0.0
        });
        OrderSummary {
            id: OrderId::new(self.id),
            created_at: self.created_at,
            total: Money::from_decimal(total, currency),
            status: OrderStatus::parse(&self.status),
            product_names: self.product_names,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlacedOrderDto {
    pub order_id: String,
}

/// The checkout payload, in the field layout the backend expects.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CheckoutPayload {
    pub products: Vec<CheckoutLineDto>,
    pub payment_method: String,
    pub shipping_method: String,
    pub shipping_cost: f64,
    pub discount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_info: Option<Coupon>,
    pub customer_details: CustomerDto,
    pub phone_number: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct CheckoutLineDto {
    pub id: String,
    pub quantity: u32,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<SelectedSize>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CustomerDto {
    pub name: String,
    pub phone: String,
    pub address: String,
}

impl CheckoutPayload {
    pub fn from_draft(draft: &OrderDraft) -> Self {
        Self {
            products: draft
                .lines
                .iter()
                .map(|line| CheckoutLineDto {
                    id: line.product_id.as_str().to_string(),
                    quantity: line.quantity,
                    price: line.unit_price.to_decimal(),
                    size: line.size.clone(),
                })
                .collect(),
            payment_method: draft.payment_method.as_str().to_string(),
            shipping_method: draft.shipping.label.clone(),
            shipping_cost: draft.shipping.cost.to_decimal(),
            discount: draft.discount.to_decimal(),
            coupon_info: draft.coupon.clone(),
            customer_details: CustomerDto {
                name: draft.customer.name.clone(),
                phone: draft.customer.phone.clone(),
                address: draft.customer.address.clone(),
            },
            phone_number: draft.customer.phone.clone(),
        }
    }
}
