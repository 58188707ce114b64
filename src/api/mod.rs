// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the storefront API.
//!
//! Two endpoints are used: `GET /products/{id}/variants` for the product
//! tree and `POST /add-to-cart` for cart submissions. Variant images are
//! fetched as raw bytes from whatever URL the catalog payload carries.

use crate::catalog::{EntityId, Product};
use crate::error::{Error, Result};
use reqwest::StatusCode;
use serde::Serialize;
use std::time::Duration;

/// Body of an add-to-cart submission. Quantity is always one: the detail
/// view has no quantity picker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddToCartRequest {
    pub product_variant_id: EntityId,
    pub size_id: EntityId,
    pub quantity: u32,
}

impl AddToCartRequest {
    #[must_use]
    pub fn new(product_variant_id: EntityId, size_id: EntityId) -> Self {
        Self {
            product_variant_id,
            size_id,
            quantity: 1,
        }
    }
}

/// What the add-to-cart endpoint answered, separated from transport errors.
///
/// The cart service signals success with either `201 Created` or
/// `202 Accepted` (queued). Everything else is reported as-is and left for
/// the caller to interpret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOutcome {
    /// 201: the cart line was created.
    Created,
    /// 202: the submission was accepted for asynchronous processing.
    Accepted,
    /// Any other status the server answered with.
    Unexpected(u16),
}

impl CartOutcome {
    /// Maps an HTTP status to the outcome.
    #[must_use]
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::CREATED => CartOutcome::Created,
            StatusCode::ACCEPTED => CartOutcome::Accepted,
            other => CartOutcome::Unexpected(other.as_u16()),
        }
    }

    /// Whether the outcome counts as a successful submission.
    #[must_use]
    pub fn is_success(self) -> bool {
        matches!(self, CartOutcome::Created | CartOutcome::Accepted)
    }
}

/// Typed client over the storefront REST API.
///
/// Cheap to clone: the underlying `reqwest::Client` is a shared handle, so
/// the application hands clones into async tasks freely.
#[derive(Debug, Clone)]
pub struct StoreClient {
    http: reqwest::Client,
    base_url: String,
}

impl StoreClient {
    /// Builds a client against `base_url` with the given request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Joins a path onto the base URL. Absolute URLs pass through untouched
    /// so image URLs pointing at a CDN work as-is.
    fn endpoint(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}/{}", self.base_url, path.trim_start_matches('/'))
        }
    }

    /// Fetches the product tree for `id`.
    ///
    /// Every failure mode (transport, non-2xx, undecodable body) comes back
    /// as an `Err`; the view treats them all as "product not found".
    pub async fn fetch_product_variants(&self, id: &EntityId) -> Result<Product> {
        let url = self.endpoint(&format!("products/{}/variants", id));
        let response = self.http.get(url).send().await?.error_for_status()?;
        let product = response.json::<Product>().await?;
        Ok(product)
    }

    /// Submits one cart line.
    ///
    /// Transport errors are `Err`; any HTTP answer, success or not, is an
    /// `Ok(CartOutcome)` so the caller can distinguish the two.
    pub async fn add_to_cart(&self, request: &AddToCartRequest) -> Result<CartOutcome> {
        let url = self.endpoint("add-to-cart");
        let response = self.http.post(url).json(request).send().await?;
        Ok(CartOutcome::from_status(response.status()))
    }

    /// Fetches image bytes for a variant image URL (absolute or relative).
    pub async fn fetch_image(&self, url: &str) -> Result<Vec<u8>> {
        let url = self.endpoint(url);
        let response = self.http.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cart_outcome_maps_created_and_accepted() {
        assert_eq!(
            CartOutcome::from_status(StatusCode::CREATED),
            CartOutcome::Created
        );
        assert_eq!(
            CartOutcome::from_status(StatusCode::ACCEPTED),
            CartOutcome::Accepted
        );
    }

    #[test]
    fn cart_outcome_reports_other_statuses_verbatim() {
        assert_eq!(
            CartOutcome::from_status(StatusCode::OK),
            CartOutcome::Unexpected(200)
        );
        assert_eq!(
            CartOutcome::from_status(StatusCode::CONFLICT),
            CartOutcome::Unexpected(409)
        );
    }

    #[test]
    fn only_created_and_accepted_are_success() {
        assert!(CartOutcome::Created.is_success());
        assert!(CartOutcome::Accepted.is_success());
        assert!(!CartOutcome::Unexpected(200).is_success());
        assert!(!CartOutcome::Unexpected(500).is_success());
    }

    #[test]
    fn endpoint_joins_relative_paths() {
        let client =
            StoreClient::new("http://shop.local/api/", Duration::from_secs(5)).expect("client");
        assert_eq!(
            client.endpoint("products/7/variants"),
            "http://shop.local/api/products/7/variants"
        );
        assert_eq!(
            client.endpoint("/add-to-cart"),
            "http://shop.local/api/add-to-cart"
        );
    }

    #[test]
    fn endpoint_passes_absolute_urls_through() {
        let client =
            StoreClient::new("http://shop.local/api", Duration::from_secs(5)).expect("client");
        assert_eq!(
            client.endpoint("https://cdn.example.com/img.jpg"),
            "https://cdn.example.com/img.jpg"
        );
    }

    #[test]
    fn add_to_cart_request_always_has_quantity_one() {
        let request = AddToCartRequest::new(EntityId::Number(3), EntityId::Text("s".into()));
        assert_eq!(request.quantity, 1);

        let body = serde_json::to_value(&request).expect("serialize");
        assert_eq!(body["product_variant_id"], 3);
        assert_eq!(body["size_id"], "s");
        assert_eq!(body["quantity"], 1);
    }
}
