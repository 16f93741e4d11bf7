// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent
//! localization system. It handles language detection, translation file
//! loading, and string formatting.
//!
//! The Spanish locale is the fallback so the picker's original drop-zone
//! copy is what users see out of the box; the language remains
//! configurable through the CLI, the config file, or the OS locale.

pub mod fluent;
