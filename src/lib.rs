// SPDX-License-Identifier: MPL-2.0
//! `iced_picker` is a drag-and-drop image picker built with the Iced GUI framework.
//!
//! Images enter an uploaded pool through OS file drops or a native file
//! dialog and can be dragged between the pool and a fixed-width selection
//! strip whose items share the strip width equally. The crate also
//! demonstrates internationalization with Fluent, user preference
//! management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/iced_picker/0.1.0")]

pub mod app;
pub mod error;
pub mod i18n;
pub mod picker;
pub mod ui;
