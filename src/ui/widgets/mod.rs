// SPDX-License-Identifier: MPL-2.0
//! Custom widgets.

mod animated_spinner;

pub use animated_spinner::AnimatedSpinner;
