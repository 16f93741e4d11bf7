// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application update loop.
//!
//! `UpdateContext` bundles mutable borrows of the pieces of `App` state
//! the handlers touch, so each handler states what it needs instead of
//! taking the whole application.

use super::{config, Message, Screen};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::picker::intake::{self, IntakeQueue};
use crate::picker::layout::StripLayout;
use crate::picker::lists::Lists;
use crate::picker::record::ImageRecord;
use crate::ui::drag::{self, DragState};
use crate::ui::notifications::{Manager, Notification};
use crate::ui::settings;
use crate::ui::theming::ThemeMode;
use iced::widget::image;
use iced::{Size, Task};
use std::path::PathBuf;

/// Mutable view of the application state for the message handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub lists: &'a mut Lists,
    pub drag: &'a mut DragState,
    pub layout: &'a mut StripLayout,
    pub content_width: &'a mut f32,
    pub intake: &'a mut IntakeQueue,
    pub drop_hover: &'a mut bool,
    pub theme_mode: &'a mut ThemeMode,
    pub notifications: &'a mut Manager,
}

/// Handles drag gesture messages from the pool, the strip, and the
/// global button-release listener.
pub fn handle_drag_message(ctx: &mut UpdateContext<'_>, message: drag::Message) -> Task<Message> {
    match message {
        drag::Message::Pressed(slot) => ctx.drag.arm(slot),
        drag::Message::SlotEntered(slot) => ctx.drag.hover_slot(slot),
        drag::Message::SlotLeft(slot) => ctx.drag.leave_slot(slot),
        drag::Message::ListEntered(list) => ctx.drag.hover_list(list),
        drag::Message::ListLeft(list) => ctx.drag.leave_list(list),
        drag::Message::Released => {
            if let Some(event) = ctx.drag.release(ctx.lists) {
                if ctx.lists.apply(event).is_err() {
                    // Rendered slots are always in range, so this only
                    // fires if view and state went out of sync. Refuse
                    // the drop and say so instead of corrupting order.
                    ctx.notifications
                        .push(Notification::error("notification-drop-error"));
                }
            }
        }
    }
    Task::none()
}

/// Opens the native multi-file dialog, filtered to image formats.
pub fn handle_open_file_dialog() -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .add_filter("Images", intake::IMAGE_EXTENSIONS)
                .pick_files()
                .await
                .map(|handles| {
                    handles
                        .iter()
                        .map(|handle| handle.path().to_path_buf())
                        .collect()
                })
        },
        Message::OpenFileDialogResult,
    )
}

/// Handles the result of the open file dialog.
pub fn handle_open_file_dialog_result(
    ctx: &mut UpdateContext<'_>,
    paths: Option<Vec<PathBuf>>,
) -> Task<Message> {
    let Some(paths) = paths else {
        // User cancelled the dialog
        return Task::none();
    };
    start_intake(ctx, paths)
}

/// Handles a file dropped on the window.
pub fn handle_file_dropped(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    *ctx.drop_hover = false;
    start_intake(ctx, vec![path])
}

/// Queues paths for intake and kicks off decoding if the pipeline was
/// idle.
pub fn start_intake(ctx: &mut UpdateContext<'_>, paths: Vec<PathBuf>) -> Task<Message> {
    match ctx.intake.enqueue(paths) {
        Some(next) => decode_task(next),
        None => Task::none(),
    }
}

/// Spawns the background decode of one file.
pub fn decode_task(path: PathBuf) -> Task<Message> {
    Task::perform(intake::decode_file_async(path), |(path, result)| {
        Message::IntakeCompleted { path, result }
    })
}

/// Handles a finished decode: appends the record on success, surfaces a
/// notification naming the file on failure, and starts the next queued
/// decode either way.
pub fn handle_intake_completed(
    ctx: &mut UpdateContext<'_>,
    path: PathBuf,
    result: Result<image::Handle, Error>,
) -> Task<Message> {
    match result {
        Ok(handle) => ctx.lists.intake([ImageRecord::new(handle)]),
        Err(err) => {
            let filename = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            ctx.notifications
                .push(Notification::error(err.i18n_key()).with_arg("filename", filename));
        }
    }

    match ctx.intake.complete() {
        Some(next) => decode_task(next),
        None => Task::none(),
    }
}

/// Recomputes the strip layout basis from the new window size.
pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) -> Task<Message> {
    *ctx.content_width = (size.width - 2.0 * super::PAGE_PADDING).max(0.0);
    ctx.layout.update(*ctx.content_width);
    Task::none()
}

/// Handles settings screen messages.
pub fn handle_settings_message(
    ctx: &mut UpdateContext<'_>,
    message: settings::Message,
) -> Task<Message> {
    match message {
        settings::Message::LanguageSelected(locale) => {
            ctx.i18n.set_locale(locale);
            persist_preferences(ctx);
        }
        settings::Message::ThemeModeSelected(mode) => {
            *ctx.theme_mode = mode;
            persist_preferences(ctx);
        }
        settings::Message::Back => *ctx.screen = Screen::Picker,
    }
    Task::none()
}

/// Writes the current language and theme back to `settings.toml`.
fn persist_preferences(ctx: &mut UpdateContext<'_>) {
    let (mut config, _) = config::load();
    config.general.language = Some(ctx.i18n.current_locale().to_string());
    config.general.theme_mode = *ctx.theme_mode;
    if config::save(&config).is_err() {
        ctx.notifications
            .push(Notification::warning("notification-config-save-error"));
    }
}
