// SPDX-License-Identifier: MPL-2.0
//! Product, variant, and size types as served by the storefront API.
//!
//! The shapes mirror the `/products/{id}/variants` payload: a product owns
//! an ordered list of color variants, and each variant owns its images and
//! its own size list.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier as the API sends it: some deployments use numeric ids, others
/// opaque strings. Serialization preserves the original shape so the value
/// round-trips unchanged into the add-to-cart body.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Number(i64),
    Text(String),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Number(n) => write!(f, "{}", n),
            EntityId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl FromStr for EntityId {
    type Err = std::convert::Infallible;

    /// Never fails: anything that is not an integer is an opaque text id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(EntityId::from(s))
    }
}

impl From<i64> for EntityId {
    fn from(n: i64) -> Self {
        EntityId::Number(n)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        match s.parse::<i64>() {
            Ok(n) => EntityId::Number(n),
            Err(_) => EntityId::Text(s.to_string()),
        }
    }
}

/// A purchasable size option scoped to one variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeOption {
    pub id: EntityId,
    pub name: String,
}

/// One image of a variant. Only the URL is served; the bytes are fetched
/// separately when the variant is shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantImage {
    pub url: String,
}

/// A purchasable color/style option of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub id: EntityId,
    /// Color label shown on the variant selector button.
    pub name: String,
    #[serde(default)]
    pub images: Vec<VariantImage>,
    #[serde(default)]
    pub sizes: Vec<SizeOption>,
}

impl Variant {
    /// URL of the image shown in the detail view, when the variant has one.
    #[must_use]
    pub fn first_image_url(&self) -> Option<&str> {
        self.images.first().map(|image| image.url.as_str())
    }
}

/// A product with its variant tree, as returned by the read endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: EntityId,
    pub name: String,
    /// Unit price. Kept as a decimal, never a float: display rounds to two
    /// places but the stored value stays exact.
    pub price: Decimal,
    #[serde(default)]
    pub variants: Vec<Variant>,
}

impl Product {
    /// Formats the price for display: currency-prefixed, two decimal places.
    #[must_use]
    pub fn price_display(&self) -> String {
        format!("${:.2}", self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn sample_payload() -> &'static str {
        r#"{
            "id": 42,
            "name": "Trail Jacket",
            "price": 89.9,
            "variants": [
                {
                    "id": "vr-1",
                    "name": "Forest Green",
                    "images": [{"url": "https://cdn.example.com/vr-1.jpg"}],
                    "sizes": [
                        {"id": 1, "name": "S"},
                        {"id": 2, "name": "M"}
                    ]
                },
                {
                    "id": "vr-2",
                    "name": "Slate",
                    "images": [],
                    "sizes": []
                }
            ]
        }"#
    }

    #[test]
    fn product_deserializes_from_api_payload() {
        let product: Product = serde_json::from_str(sample_payload()).expect("valid payload");

        assert_eq!(product.id, EntityId::Number(42));
        assert_eq!(product.name, "Trail Jacket");
        assert_eq!(product.variants.len(), 2);
        assert_eq!(product.variants[0].sizes.len(), 2);
        assert_eq!(product.variants[0].id, EntityId::Text("vr-1".into()));
    }

    #[test]
    fn price_display_pads_to_two_decimals() {
        let product: Product = serde_json::from_str(sample_payload()).expect("valid payload");
        assert_eq!(product.price_display(), "$89.90");
    }

    #[test]
    fn price_display_rounds_whole_numbers() {
        let product = Product {
            id: EntityId::Number(1),
            name: "Cap".into(),
            price: Decimal::new(15, 0),
            variants: Vec::new(),
        };
        assert_eq!(product.price_display(), "$15.00");
    }

    #[test]
    fn entity_id_accepts_number_and_string() {
        let numeric: EntityId = serde_json::from_str("7").expect("number id");
        let textual: EntityId = serde_json::from_str("\"sku-7\"").expect("string id");

        assert_eq!(numeric, EntityId::Number(7));
        assert_eq!(textual, EntityId::Text("sku-7".into()));
    }

    #[test]
    fn entity_id_serializes_in_original_shape() {
        let numeric = serde_json::to_string(&EntityId::Number(7)).expect("serialize");
        let textual = serde_json::to_string(&EntityId::Text("sku-7".into())).expect("serialize");

        assert_eq!(numeric, "7");
        assert_eq!(textual, "\"sku-7\"");
    }

    #[test]
    fn entity_id_parses_from_cli_text() {
        let numeric: EntityId = "42".parse().expect("infallible");
        let textual: EntityId = "sku-42".parse().expect("infallible");

        assert_eq!(numeric, EntityId::Number(42));
        assert_eq!(textual, EntityId::Text("sku-42".into()));
    }

    #[test]
    fn missing_variant_lists_default_to_empty() {
        let product: Product =
            serde_json::from_str(r#"{"id": 1, "name": "Bare", "price": 5.0}"#).expect("payload");
        assert!(product.variants.is_empty());
    }

    #[test]
    fn first_image_url_is_none_for_imageless_variant() {
        let product: Product = serde_json::from_str(sample_payload()).expect("valid payload");
        assert!(product.variants[0].first_image_url().is_some());
        assert!(product.variants[1].first_image_url().is_none());
    }
}
