// SPDX-License-Identifier: MPL-2.0
//! Product detail component encapsulating state and update logic.
//!
//! The component is deliberately free of I/O: `handle` mutates state and
//! returns an [`Effect`] describing the side work the application shell
//! should perform. Responses from that side work come back as messages
//! tagged with the generation they were issued under, so answers to an
//! abandoned request can never touch the state of a newer one.

use crate::api::{AddToCartRequest, CartOutcome};
use crate::catalog::{EntityId, Product, SizeOption, Variant};
use crate::diagnostics::ErrorType;
use crate::error::Error;
use iced::widget::image;

/// Spinner rotation speed in radians per tick.
const SPINNER_SPEED: f32 = 0.1;

/// The variant image slot.
#[derive(Debug, Clone, Default)]
pub enum ImageState {
    /// Nothing to show (no product, or the variant has no image).
    #[default]
    Unavailable,
    /// Bytes are being fetched.
    Loading,
    /// Decoded handle ready for the image widget.
    Ready(image::Handle),
}

/// Messages emitted by the detail view and by the async work it requested.
#[derive(Debug, Clone)]
pub enum Message {
    /// Load (or reload) a product by id.
    ProductRequested(EntityId),
    /// The product fetch resolved.
    ProductLoaded {
        generation: u64,
        result: Result<Product, Error>,
    },
    /// A variant button was pressed (index into the product's variants).
    VariantSelected(usize),
    /// A size button was pressed.
    SizeSelected(SizeOption),
    /// The add-to-cart button was pressed.
    AddToCartPressed,
    /// The add-to-cart submission resolved.
    CartSubmitted(Result<CartOutcome, Error>),
    /// The variant image fetch resolved.
    ImageLoaded {
        generation: u64,
        result: Result<image::Handle, Error>,
    },
    /// Animate the loading spinner.
    SpinnerTick,
}

/// Side effects the application should perform after handling a message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Fetch the product tree; the answer must echo `generation`.
    FetchProduct { id: EntityId, generation: u64 },
    /// Fetch variant image bytes; the answer must echo `generation`.
    FetchImage { url: String, generation: u64 },
    /// Submit one cart line.
    SubmitCart(AddToCartRequest),
    /// Show a success toast.
    ShowSuccessNotification { key: &'static str },
    /// Show an error toast.
    ShowErrorNotification { key: &'static str },
    /// The cart endpoint answered with a status outside 201/202. Whether
    /// this reaches the user is the application's (configurable) call.
    UnexpectedCartStatus { status: u16 },
    /// Record an error in the diagnostics log without user-facing output.
    RecordError {
        error_type: ErrorType,
        message: String,
    },
}

/// State of the product detail view.
#[derive(Debug, Default)]
pub struct State {
    /// Id of the product being shown or loaded.
    product_id: Option<EntityId>,
    /// Load generation; bumped by every `ProductRequested`.
    generation: u64,
    /// Image load generation, independent of the product generation so a
    /// variant switch invalidates only the image slot.
    image_generation: u64,
    is_loading: bool,
    spinner_rotation: f32,
    product: Option<Product>,
    selected_variant: Option<usize>,
    selected_size: Option<SizeOption>,
    image: ImageState,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a message, returning the effect the shell should run.
    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::ProductRequested(id) => self.start_load(id),
            Message::ProductLoaded { generation, result } => {
                self.finish_load(generation, result)
            }
            Message::VariantSelected(index) => self.select_variant(index),
            Message::SizeSelected(size) => {
                self.selected_size = Some(size);
                Effect::None
            }
            Message::AddToCartPressed => self.submit_cart(),
            Message::CartSubmitted(result) => Self::cart_submitted(result),
            Message::ImageLoaded { generation, result } => {
                self.finish_image_load(generation, result)
            }
            Message::SpinnerTick => {
                if self.is_loading {
                    self.spinner_rotation += SPINNER_SPEED;
                    if self.spinner_rotation > std::f32::consts::TAU {
                        self.spinner_rotation -= std::f32::consts::TAU;
                    }
                }
                Effect::None
            }
        }
    }

    /// Begins a new load generation, discarding everything shown so far.
    fn start_load(&mut self, id: EntityId) -> Effect {
        self.generation += 1;
        self.product = None;
        self.selected_variant = None;
        self.selected_size = None;
        self.image = ImageState::Unavailable;
        self.is_loading = true;
        self.spinner_rotation = 0.0;
        self.product_id = Some(id.clone());

        Effect::FetchProduct {
            id,
            generation: self.generation,
        }
    }

    fn finish_load(&mut self, generation: u64, result: Result<Product, Error>) -> Effect {
        if generation != self.generation {
            // Answer to an abandoned request; a newer load owns the state.
            return Effect::None;
        }

        self.is_loading = false;

        match result {
            Ok(product) => {
                self.product = Some(product);
                if self.variants().is_empty() {
                    self.image = ImageState::Unavailable;
                    return Effect::None;
                }
                self.selected_variant = Some(0);
                self.selected_size = self
                    .selected_variant_ref()
                    .and_then(|variant| variant.sizes.first().cloned());
                self.request_image()
            }
            Err(error) => {
                self.product = None;
                Effect::RecordError {
                    error_type: ErrorType::ProductFetch,
                    message: error.i18n_key().to_string(),
                }
            }
        }
    }

    fn select_variant(&mut self, index: usize) -> Effect {
        if index >= self.variants().len() {
            return Effect::None;
        }
        self.selected_variant = Some(index);
        // The selected size is intentionally left alone, even when the new
        // variant has no size with the same id. Clearing it here would
        // change long-standing storefront behavior.
        self.request_image()
    }

    /// Starts an image fetch for the selected variant, or parks the slot on
    /// the placeholder when there is nothing to fetch.
    fn request_image(&mut self) -> Effect {
        self.image_generation += 1;
        let url = self
            .selected_variant_ref()
            .and_then(Variant::first_image_url)
            .map(str::to_string);
        match url {
            Some(url) => {
                self.image = ImageState::Loading;
                Effect::FetchImage {
                    url,
                    generation: self.image_generation,
                }
            }
            None => {
                self.image = ImageState::Unavailable;
                Effect::None
            }
        }
    }

    fn finish_image_load(
        &mut self,
        generation: u64,
        result: Result<image::Handle, Error>,
    ) -> Effect {
        if generation != self.image_generation {
            return Effect::None;
        }
        match result {
            Ok(handle) => {
                self.image = ImageState::Ready(handle);
                Effect::None
            }
            Err(error) => {
                self.image = ImageState::Unavailable;
                Effect::RecordError {
                    error_type: ErrorType::ImageFetch,
                    message: error.i18n_key().to_string(),
                }
            }
        }
    }

    fn submit_cart(&mut self) -> Effect {
        let variant_id = self.selected_variant_ref().map(|variant| variant.id.clone());
        let size_id = self.selected_size.as_ref().map(|size| size.id.clone());

        match (variant_id, size_id) {
            (Some(variant_id), Some(size_id)) => {
                Effect::SubmitCart(AddToCartRequest::new(variant_id, size_id))
            }
            _ => Effect::ShowErrorNotification {
                key: "notification-select-options",
            },
        }
    }

    fn cart_submitted(result: Result<CartOutcome, Error>) -> Effect {
        match result {
            Ok(CartOutcome::Created | CartOutcome::Accepted) => Effect::ShowSuccessNotification {
                key: "notification-cart-added",
            },
            Ok(CartOutcome::Unexpected(status)) => Effect::UnexpectedCartStatus { status },
            Err(_) => Effect::ShowErrorNotification {
                key: "notification-cart-error",
            },
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    #[must_use]
    pub fn product(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    #[must_use]
    pub fn product_id(&self) -> Option<&EntityId> {
        self.product_id.as_ref()
    }

    fn variants(&self) -> &[Variant] {
        self.product
            .as_ref()
            .map_or(&[], |product| product.variants.as_slice())
    }

    /// Index of the selected variant, when any.
    #[must_use]
    pub fn selected_variant_index(&self) -> Option<usize> {
        self.selected_variant
    }

    /// The selected variant itself.
    #[must_use]
    pub fn selected_variant_ref(&self) -> Option<&Variant> {
        self.selected_variant
            .and_then(|index| self.variants().get(index))
    }

    #[must_use]
    pub fn selected_size(&self) -> Option<&SizeOption> {
        self.selected_size.as_ref()
    }

    /// Sizes offered by the selected variant. The size row is always derived
    /// from here, never from the product as a whole.
    #[must_use]
    pub fn available_sizes(&self) -> &[SizeOption] {
        self.selected_variant_ref()
            .map_or(&[], |variant| variant.sizes.as_slice())
    }

    #[must_use]
    pub fn image(&self) -> &ImageState {
        &self.image
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    /// Renders the view for the current state.
    pub fn view<'a>(
        &'a self,
        i18n: &'a crate::i18n::fluent::I18n,
    ) -> iced::Element<'a, Message> {
        super::view::view(self, i18n)
    }
}
