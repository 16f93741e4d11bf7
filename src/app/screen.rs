// SPDX-License-Identifier: MPL-2.0
//! The application's screens.

/// Which top-level view is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// The picker: drop zone, uploaded pool, and selection strip.
    #[default]
    Picker,
    /// Application preferences.
    Settings,
}
