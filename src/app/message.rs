// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::ui::drag;
use crate::ui::notifications;
use crate::ui::settings;
use iced::widget::image;
use iced::Size;
use std::path::PathBuf;
use std::time::Instant;

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update
/// entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Drag(drag::Message),
    Settings(settings::Message),
    SwitchScreen(Screen),
    Notification(notifications::NotificationMessage),
    /// Open the native file dialog from the drop zone.
    OpenFileDialog,
    /// Result from the open file dialog.
    OpenFileDialogResult(Option<Vec<PathBuf>>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// OS files started hovering over the window.
    FileHovered,
    /// OS files left the window without being dropped.
    FilesHoveredLeft,
    /// A queued file finished decoding (successfully or not).
    IntakeCompleted {
        path: PathBuf,
        result: Result<image::Handle, Error>,
    },
    /// The window was resized.
    WindowResized(Size),
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `es`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `ICED_PICKER_CONFIG_DIR` environment
    /// variable.
    pub config_dir: Option<String>,
    /// Image paths to preload into the uploaded pool on startup.
    pub file_paths: Vec<String>,
}
