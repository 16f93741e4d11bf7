// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`settings`] - Application preferences (language, theme)
//!
//! # Picker surfaces
//!
//! - [`dropzone`] - File drop target and dialog trigger
//! - [`pool`] - Uploaded thumbnails grid
//! - [`strip`] - Fixed-width selection strip
//! - [`drag`] - Grab-and-drop gesture state
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod design_tokens;
pub mod drag;
pub mod dropzone;
pub mod notifications;
pub mod pool;
pub mod settings;
pub mod strip;
pub mod styles;
pub mod theming;
