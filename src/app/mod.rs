// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the picker and
//! settings views.
//!
//! The `App` struct wires together the domains (picker lists, drag
//! gesture, layout, localization, notifications) and translates messages
//! into side effects like config persistence or file decoding. Policy
//! decisions (window sizing, page padding, persistence format) stay
//! close to the main update loop so user-facing behavior is easy to
//! audit.

pub mod config;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::i18n::fluent::I18n;
use crate::picker::intake::IntakeQueue;
use crate::picker::layout::{self, StripLayout};
use crate::picker::lists::Lists;
use crate::ui::drag::DragState;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Padding around the picker page. The strip container width derives
/// from the window width minus twice this value.
pub const PAGE_PADDING: f32 = 16.0;

/// Root Iced application state that bridges the picker domain,
/// localization, and persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    /// The uploaded pool and the selection strip.
    lists: Lists,
    /// The armed drag gesture, if any.
    drag: DragState,
    /// Strip basis recomputed on window resize.
    layout: StripLayout,
    /// Page content width the layout and pool grid derive from.
    content_width: f32,
    /// Ordered decode pipeline for dropped and picked files.
    intake: IntakeQueue,
    /// Whether OS files are currently hovering over the window.
    drop_hover: bool,
    theme_mode: ThemeMode,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("uploaded", &self.lists.uploaded().len())
            .field("selected", &self.lists.selected().len())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Picker,
            lists: Lists::new(),
            drag: DragState::default(),
            layout: StripLayout::default(),
            content_width: layout::MAX_STRIP_WIDTH,
            intake: IntakeQueue::new(),
            drop_hover: false,
            theme_mode: ThemeMode::System,
            notifications: notifications::Manager::new(),
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone());

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and queues any CLI-provided image
    /// paths through the normal intake pipeline.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };

        app.theme_mode = config.general.theme_mode;

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }

        let preload: Vec<PathBuf> = flags.file_paths.iter().map(PathBuf::from).collect();
        let task = match app.intake.enqueue(preload) {
            Some(next) => update::decode_task(next),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
            lists: &mut self.lists,
            drag: &mut self.drag,
            layout: &mut self.layout,
            content_width: &mut self.content_width,
            intake: &mut self.intake,
            drop_hover: &mut self.drop_hover,
            theme_mode: &mut self.theme_mode,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Drag(drag_message) => update::handle_drag_message(&mut ctx, drag_message),
            Message::Settings(settings_message) => {
                update::handle_settings_message(&mut ctx, settings_message)
            }
            Message::SwitchScreen(target) => {
                *ctx.screen = target;
                Task::none()
            }
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::OpenFileDialog => update::handle_open_file_dialog(),
            Message::OpenFileDialogResult(paths) => {
                update::handle_open_file_dialog_result(&mut ctx, paths)
            }
            Message::FileDropped(path) => update::handle_file_dropped(&mut ctx, path),
            Message::FileHovered => {
                *ctx.drop_hover = true;
                Task::none()
            }
            Message::FilesHoveredLeft => {
                *ctx.drop_hover = false;
                Task::none()
            }
            Message::IntakeCompleted { path, result } => {
                update::handle_intake_completed(&mut ctx, path, result)
            }
            Message::WindowResized(size) => update::handle_window_resized(&mut ctx, size),
            Message::Tick(_instant) => {
                ctx.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            lists: &self.lists,
            drag: &self.drag,
            layout: &self.layout,
            pool_columns: layout::pool_columns(self.content_width),
            drop_hover: self.drop_hover,
            theme_mode: self.theme_mode,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::picker::lists::{ListKind, SlotRef};
    use crate::picker::record::{ImageRecord, RecordId};
    use crate::ui::drag;
    use crate::ui::settings;
    use iced::widget::image::Handle;
    use iced::Size;
    use std::fs;
    use std::path::PathBuf;
    use std::sync::{Mutex, OnceLock};
    use tempfile::tempdir;

    fn config_env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    fn with_temp_config_dir<F>(test: F)
    where
        F: FnOnce(&std::path::Path),
    {
        let _guard = config_env_lock().lock().expect("failed to lock mutex");
        let temp_dir = tempdir().expect("failed to create temp dir");
        let previous = std::env::var(paths::ENV_CONFIG_DIR).ok();
        std::env::set_var(paths::ENV_CONFIG_DIR, temp_dir.path());

        test(temp_dir.path());

        if let Some(value) = previous {
            std::env::set_var(paths::ENV_CONFIG_DIR, value);
        } else {
            std::env::remove_var(paths::ENV_CONFIG_DIR);
        }
    }

    fn sample_handle() -> Handle {
        Handle::from_rgba(1, 1, vec![255_u8; 4])
    }

    fn seed_uploaded(app: &mut App, count: usize) -> Vec<RecordId> {
        app.lists
            .intake((0..count).map(|_| ImageRecord::new(sample_handle())));
        app.lists.uploaded().iter().map(|r| r.id).collect()
    }

    fn slot(list: ListKind, index: usize) -> SlotRef {
        SlotRef { list, index }
    }

    #[test]
    fn new_starts_on_picker_screen_with_empty_lists() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags::default());
            assert_eq!(app.screen, Screen::Picker);
            assert!(app.lists.is_empty());
            assert_eq!(app.layout.width(), layout::MAX_STRIP_WIDTH);
        });
    }

    #[test]
    fn new_queues_cli_paths_for_intake() {
        with_temp_config_dir(|_| {
            let flags = Flags {
                file_paths: vec!["a.png".into(), "b.png".into()],
                ..Flags::default()
            };
            let (app, _task) = App::new(flags);
            assert_eq!(app.intake.pending(), 2);
        });
    }

    #[test]
    fn intake_completions_append_records_in_order() {
        let mut app = App::default();

        let _ = app.update(Message::FileDropped(PathBuf::from("a.png")));
        let _ = app.update(Message::FileDropped(PathBuf::from("b.png")));
        assert_eq!(app.intake.pending(), 2);

        let _ = app.update(Message::IntakeCompleted {
            path: PathBuf::from("a.png"),
            result: Ok(sample_handle()),
        });
        let _ = app.update(Message::IntakeCompleted {
            path: PathBuf::from("b.png"),
            result: Ok(sample_handle()),
        });

        assert_eq!(app.lists.uploaded().len(), 2);
        assert!(app.intake.is_idle());
        assert_ne!(app.lists.uploaded()[0].id, app.lists.uploaded()[1].id);
    }

    #[test]
    fn failed_intake_produces_notification_instead_of_record() {
        let mut app = App::default();

        let _ = app.update(Message::FileDropped(PathBuf::from("broken.png")));
        let _ = app.update(Message::IntakeCompleted {
            path: PathBuf::from("broken.png"),
            result: Err(Error::Image("bad data".into())),
        });

        assert!(app.lists.is_empty());
        assert!(app.notifications.has_notifications());
    }

    #[test]
    fn dialog_cancel_changes_nothing() {
        let mut app = App::default();
        let _ = app.update(Message::OpenFileDialogResult(None));

        assert!(app.lists.is_empty());
        assert!(app.intake.is_idle());
    }

    #[test]
    fn drag_messages_reorder_the_pool() {
        let mut app = App::default();
        let ids = seed_uploaded(&mut app, 3);

        let _ = app.update(Message::Drag(drag::Message::Pressed(slot(
            ListKind::Uploaded,
            0,
        ))));
        let _ = app.update(Message::Drag(drag::Message::SlotEntered(slot(
            ListKind::Uploaded,
            2,
        ))));
        let _ = app.update(Message::Drag(drag::Message::Released));

        let order: Vec<RecordId> = app.lists.uploaded().iter().map(|r| r.id).collect();
        assert_eq!(order, vec![ids[1], ids[2], ids[0]]);
        assert!(!app.drag.is_armed());
    }

    #[test]
    fn drag_messages_move_between_lists() {
        let mut app = App::default();
        let ids = seed_uploaded(&mut app, 2);

        let _ = app.update(Message::Drag(drag::Message::Pressed(slot(
            ListKind::Uploaded,
            1,
        ))));
        let _ = app.update(Message::Drag(drag::Message::SlotLeft(slot(
            ListKind::Uploaded,
            1,
        ))));
        let _ = app.update(Message::Drag(drag::Message::ListLeft(ListKind::Uploaded)));
        let _ = app.update(Message::Drag(drag::Message::ListEntered(
            ListKind::Selected,
        )));
        let _ = app.update(Message::Drag(drag::Message::Released));

        assert_eq!(app.lists.uploaded().len(), 1);
        assert_eq!(app.lists.selected().len(), 1);
        assert_eq!(app.lists.selected()[0].id, ids[1]);
    }

    #[test]
    fn release_without_destination_leaves_lists_unchanged() {
        let mut app = App::default();
        let ids = seed_uploaded(&mut app, 3);

        let _ = app.update(Message::Drag(drag::Message::Pressed(slot(
            ListKind::Uploaded,
            1,
        ))));
        let _ = app.update(Message::Drag(drag::Message::SlotLeft(slot(
            ListKind::Uploaded,
            1,
        ))));
        let _ = app.update(Message::Drag(drag::Message::ListLeft(ListKind::Uploaded)));
        let _ = app.update(Message::Drag(drag::Message::Released));

        let order: Vec<RecordId> = app.lists.uploaded().iter().map(|r| r.id).collect();
        assert_eq!(order, ids);
        assert!(app.lists.selected().is_empty());
        assert!(!app.drag.is_armed());
    }

    #[test]
    fn window_resize_updates_the_strip_basis() {
        let mut app = App::default();

        let _ = app.update(Message::WindowResized(Size::new(1232.0, 800.0)));
        assert_eq!(app.layout.width(), 900.0);

        let _ = app.update(Message::WindowResized(Size::new(532.0, 800.0)));
        assert_eq!(app.layout.width(), 500.0);
        assert_eq!(app.layout.height(), 100.0);
    }

    #[test]
    fn per_item_width_follows_selection_count() {
        let mut app = App::default();
        let _ = app.update(Message::WindowResized(Size::new(1232.0, 800.0)));

        seed_uploaded(&mut app, 3);
        for index in 0..3 {
            let _ = app.update(Message::Drag(drag::Message::Pressed(slot(
                ListKind::Uploaded,
                0,
            ))));
            let _ = app.update(Message::Drag(drag::Message::SlotEntered(slot(
                ListKind::Selected,
                index,
            ))));
            let _ = app.update(Message::Drag(drag::Message::Released));
        }

        assert_eq!(app.lists.selected().len(), 3);
        assert_eq!(app.layout.item_width(app.lists.selected().len()), 300.0);
    }

    #[test]
    fn file_hover_toggles_the_dropzone_state() {
        let mut app = App::default();
        assert!(!app.drop_hover);

        let _ = app.update(Message::FileHovered);
        assert!(app.drop_hover);

        let _ = app.update(Message::FilesHoveredLeft);
        assert!(!app.drop_hover);
    }

    #[test]
    fn switching_screens_round_trips() {
        let mut app = App::default();

        let _ = app.update(Message::SwitchScreen(Screen::Settings));
        assert_eq!(app.screen, Screen::Settings);

        let _ = app.update(Message::Settings(settings::Message::Back));
        assert_eq!(app.screen, Screen::Picker);
    }

    #[test]
    fn language_selected_updates_config_file() {
        with_temp_config_dir(|config_root| {
            let mut app = App::default();

            let _ = app.update(Message::Settings(settings::Message::LanguageSelected(
                "en-US".parse().unwrap(),
            )));

            assert_eq!(app.i18n.current_locale().to_string(), "en-US");

            let config_path = config_root.join("settings.toml");
            assert!(config_path.exists());
            let contents = fs::read_to_string(config_path).expect("config should be readable");
            assert!(contents.contains("en-US"));
        });
    }

    #[test]
    fn theme_mode_selected_is_persisted() {
        with_temp_config_dir(|config_root| {
            let mut app = App::default();

            let _ = app.update(Message::Settings(settings::Message::ThemeModeSelected(
                crate::ui::theming::ThemeMode::Dark,
            )));

            assert!(app.theme_mode.is_dark());

            let contents = fs::read_to_string(config_root.join("settings.toml"))
                .expect("config should be readable");
            assert!(contents.contains("theme_mode = \"dark\""));
        });
    }

    #[test]
    fn title_is_the_localized_app_name() {
        let app = App::default();
        assert_eq!(app.title(), "IcedPicker");
    }

    #[test]
    fn corrupted_config_warns_and_falls_back_to_defaults() {
        with_temp_config_dir(|config_root| {
            fs::write(config_root.join("settings.toml"), "not = valid = toml")
                .expect("write corrupted config");

            let (app, _task) = App::new(Flags::default());

            assert!(app.notifications.has_notifications());
            assert_eq!(app.theme_mode, crate::ui::theming::ThemeMode::System);
        });
    }
}
