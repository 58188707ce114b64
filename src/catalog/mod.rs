// SPDX-License-Identifier: MPL-2.0
//! Catalog domain types shared between the API client and the UI.

mod types;

pub use types::{EntityId, Product, SizeOption, Variant, VariantImage};
