// SPDX-License-Identifier: MPL-2.0
//! `iced_boutique` is a storefront product viewer built with the Iced GUI framework.
//!
//! It renders a single product's detail view against an existing storefront
//! REST API: color variant and size selection, add-to-cart submission, toast
//! feedback, and internationalization with Fluent.

pub mod api;
pub mod app;
pub mod catalog;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod ui;
