// SPDX-License-Identifier: MPL-2.0
//! Product detail view: image pane, variant and size pickers, add to cart.

pub mod component;
mod not_found;
mod view;

pub use component::{Effect, ImageState, Message, State};
