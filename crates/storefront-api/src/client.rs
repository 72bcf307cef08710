//! The typed endpoint surface of the commerce API.

use crate::dto::{
    CheckoutPayload, CouponDto, OrdersEnvelope, PlacedOrderDto, ProductDto, ReviewsEnvelope,
};
use crate::http::{Request, Response};
use crate::ApiError;
use serde::Deserialize;
use storefront_commerce::prelude::*;

/// Site-wide settings served by the backend.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteSettings {
    /// Store display name.
    pub site_name: Option<String>,
    /// Banner text shown across the top of every page.
    pub announcement: Option<String>,
    /// Support phone number shown in the footer.
    pub support_phone: Option<String>,
    /// Pixel identifier for the third-party tracker, when configured.
    pub facebook_pixel_id: Option<String>,
}

/// An IP address the backend wants gated out of the storefront.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockedIp {
    /// The blocked address.
    pub ip_address: String,
}

/// A stock avatar image assigned to reviewers.
#[derive(Debug, Clone, Deserialize)]
pub struct AvatarImage {
    /// Image URL.
    pub url: String,
}

/// Client for the remote commerce API.
///
/// Holds the base URL and the shop currency; every endpoint returns
/// domain types, never wire shapes.
pub struct StorefrontApi {
    base_url: String,
    currency: Currency,
}

impl StorefrontApi {
    /// Create a client for the API at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            currency: Currency::default(),
        }
    }

    /// Set the currency prices are interpreted in.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// List products, optionally filtered by category.
    pub fn products(&self, category: Option<&CategoryId>) -> Result<Vec<Product>, ApiError> {
        let url = match category {
            Some(id) => format!("{}?categoryId={}", self.url("/products"), id),
            None => self.url("/products"),
        };
        tracing::debug!(%url, "fetching products");

        let dtos: Vec<ProductDto> = Request::get(url).send()?.error_for_status()?.json()?;
        Ok(dtos
            .into_iter()
            .map(|dto| dto.into_domain(self.currency))
            .collect())
    }

    /// Fetch a single product.
    pub fn product(&self, id: &ProductId) -> Result<Product, ApiError> {
        let url = self.url(&format!("/products/{id}"));
        tracing::debug!(%url, "fetching product");

        let dto: ProductDto = Request::get(url).send()?.error_for_status()?.json()?;
        Ok(dto.into_domain(self.currency))
    }

    /// Validate a coupon code.
    ///
    /// Any failure (unknown code, backend error, malformed body) degrades
    /// to `Ok(None)`; the checkout flow treats it as an invalid code.
    pub fn coupon(&self, code: &str) -> Result<Option<Coupon>, ApiError> {
        let url = self.url(&format!("/coupons/{code}"));
        tracing::debug!(%url, "validating coupon");

        let fetched = Request::get(url)
            .send()
            .and_then(Response::error_for_status)
            .and_then(|r| r.json::<CouponDto>());
        match fetched {
            Ok(dto) => Ok(dto.into_domain(self.currency)),
            Err(e) => {
                tracing::warn!(code, error = %e, "coupon lookup failed");
                Ok(None)
            }
        }
    }

    /// Fetch reviews for a product.
    pub fn reviews(&self, product_id: &ProductId) -> Result<Vec<Review>, ApiError> {
        let url = self.url(&format!("/reviews/{product_id}"));
        let envelope: ReviewsEnvelope = Request::get(url).send()?.error_for_status()?.json()?;
        Ok(envelope.data.into_iter().map(Review::from).collect())
    }

    /// Fetch the stock avatar images used next to reviews.
    pub fn avatar_images(&self) -> Result<Vec<AvatarImage>, ApiError> {
        Request::get(self.url("/avatarImage"))
            .send()?
            .error_for_status()?
            .json()
    }

    /// Fetch site-wide settings.
    pub fn site_settings(&self) -> Result<SiteSettings, ApiError> {
        Request::get(self.url("/siteSetting"))
            .send()?
            .error_for_status()?
            .json()
    }

    /// Fetch the IP block list.
    pub fn blocked_ips(&self) -> Result<Vec<BlockedIp>, ApiError> {
        Request::get(self.url("/block-ip"))
            .send()?
            .error_for_status()?
            .json()
    }

    /// Submit an order draft; returns the placed order's id.
    pub fn place_order(&self, draft: &OrderDraft) -> Result<OrderId, ApiError> {
        let url = self.url("/checkout");
        tracing::debug!(%url, lines = draft.lines.len(), "placing order");

        let placed: PlacedOrderDto = Request::post(url)
            .json(&CheckoutPayload::from_draft(draft))?
            .send()?
            .error_for_status()?
            .json()?;
        Ok(OrderId::new(placed.order_id))
    }

    /// Fetch the order history for a phone number.
    pub fn orders_by_phone(&self, phone: &str) -> Result<Vec<OrderSummary>, ApiError> {
        let url = self.url(&format!("/orders/{phone}"));
        let envelope: OrdersEnvelope = Request::get(url).send()?.error_for_status()?.json()?;
        Ok(envelope
            .orders
            .into_iter()
            .map(|dto| dto.into_domain(self.currency))
            .collect())
    }
}
