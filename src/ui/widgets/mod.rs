// SPDX-License-Identifier: MPL-2.0
pub mod animated_spinner;

pub use animated_spinner::Spinner;
