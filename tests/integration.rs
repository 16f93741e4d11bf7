// SPDX-License-Identifier: MPL-2.0
use iced_picker::app::config::{self, Config, GeneralConfig};
use iced_picker::i18n::fluent::I18n;
use iced_picker::picker::layout::StripLayout;
use iced_picker::picker::lists::{DropEvent, ListKind, Lists, SlotRef};
use iced_picker::picker::record::ImageRecord;
use iced_picker::ui::theming::ThemeMode;
use tempfile::tempdir;

fn record() -> ImageRecord {
    ImageRecord::new(iced::widget::image::Handle::from_rgba(1, 1, vec![255_u8; 4]))
}

fn slot(list: ListKind, index: usize) -> SlotRef {
    SlotRef { list, index }
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            theme_mode: ThemeMode::System,
        },
    };
    config::save_to_path(&initial_config, &config_file_path)
        .expect("Failed to write initial config file");

    let loaded = config::load_from_path(&config_file_path).expect("Failed to load config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(
        i18n_en.tr("dropzone-prompt-idle"),
        "Drag and drop images here, or click to select files"
    );

    // 2. Change config to es
    let spanish_config = Config {
        general: GeneralConfig {
            language: Some("es".to_string()),
            theme_mode: ThemeMode::System,
        },
    };
    config::save_to_path(&spanish_config, &config_file_path)
        .expect("Failed to write spanish config file");

    let loaded = config::load_from_path(&config_file_path).expect("Failed to load config");
    let i18n_es = I18n::new(None, &loaded);
    assert_eq!(i18n_es.current_locale().to_string(), "es");
    assert_eq!(
        i18n_es.tr("dropzone-prompt-idle"),
        "Arrastra y suelta imágenes aquí, o haz clic para seleccionar archivos"
    );
}

#[test]
fn cli_language_overrides_config_language() {
    let config = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            theme_mode: ThemeMode::System,
        },
    };
    let i18n = I18n::new(Some("es".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "es");
}

#[test]
fn moving_every_image_to_the_strip_divides_the_basis() {
    let mut lists = Lists::new();
    lists.intake((0..3).map(|_| record()));

    for index in 0..3 {
        lists
            .apply(DropEvent {
                source: slot(ListKind::Uploaded, 0),
                destination: slot(ListKind::Selected, index),
            })
            .expect("move should succeed");
    }

    assert!(lists.uploaded().is_empty());
    assert_eq!(lists.selected().len(), 3);

    let layout = StripLayout::from_container_width(1200.0);
    assert_eq!(layout.width(), 900.0);
    assert_eq!(layout.item_width(lists.selected().len()), 300.0);
}

#[test]
fn shuttling_records_back_and_forth_preserves_identity() {
    let mut lists = Lists::new();
    lists.intake((0..4).map(|_| record()));
    let original: Vec<_> = lists.uploaded().iter().map(|r| r.id).collect();

    // Uploaded -> Selected, then straight back to the front of the pool.
    lists
        .apply(DropEvent {
            source: slot(ListKind::Uploaded, 3),
            destination: slot(ListKind::Selected, 0),
        })
        .expect("move to strip");
    lists
        .apply(DropEvent {
            source: slot(ListKind::Selected, 0),
            destination: slot(ListKind::Uploaded, 0),
        })
        .expect("move back to pool");

    assert_eq!(lists.total(), 4);
    assert!(lists.selected().is_empty());

    let shuttled: Vec<_> = lists.uploaded().iter().map(|r| r.id).collect();
    assert_eq!(
        shuttled,
        vec![original[3], original[0], original[1], original[2]]
    );
}

#[test]
fn narrow_layout_splits_evenly_between_two_images() {
    let layout = StripLayout::from_container_width(500.0);
    assert_eq!(layout.item_width(2), 250.0);
    assert_eq!(layout.height(), 100.0);
}
