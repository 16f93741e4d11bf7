// SPDX-License-Identifier: MPL-2.0
//! File intake: decoding dropped or picked files into display handles.
//!
//! Decoding happens on a blocking worker so the UI thread never stalls
//! on a large file. Files are decoded one at a time through
//! [`IntakeQueue`], which preserves the order files were given in even
//! though each decode completes asynchronously. A file that fails to
//! decode produces no record; the caller surfaces the error to the user.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use resvg::usvg;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

/// Extensions offered by the file dialog filter.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "tiff", "webp", "bmp", "ico", "svg",
];

/// Decodes a single file into a display handle.
///
/// SVG files are rasterized with resvg; everything else goes through the
/// `image` crate. A read failure maps to [`Error::Io`], a decode failure
/// to [`Error::Image`] or [`Error::Svg`].
pub fn decode_file<P: AsRef<Path>>(path: P) -> Result<image::Handle> {
    let path = path.as_ref();
    let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");

    if extension.eq_ignore_ascii_case("svg") {
        let svg_data = fs::read(path).map_err(|e| Error::Io(e.to_string()))?;
        let tree = usvg::Tree::from_data(&svg_data, &usvg::Options::default())
            .map_err(|e| Error::Svg(e.to_string()))?;

        let pixmap_size = tree.size().to_int_size();
        let width = pixmap_size.width();
        let height = pixmap_size.height();
        if width == 0 || height == 0 {
            return Err(Error::Svg("SVG has empty dimensions".into()));
        }

        let mut pixmap = tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| Error::Svg("Failed to allocate SVG pixmap".into()))?;

        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

        Ok(image::Handle::from_rgba(
            width,
            height,
            pixmap.data().to_vec(),
        ))
    } else {
        let bytes = fs::read(path).map_err(|e| Error::Io(e.to_string()))?;
        let decoded =
            image_rs::load_from_memory(&bytes).map_err(|e| Error::Image(e.to_string()))?;

        let (width, height) = decoded.dimensions();
        Ok(image::Handle::from_rgba(
            width,
            height,
            decoded.to_rgba8().into_vec(),
        ))
    }
}

/// Decodes a file on a blocking worker thread.
pub async fn decode_file_async(path: PathBuf) -> (PathBuf, Result<image::Handle>) {
    let worker = {
        let path = path.clone();
        tokio::task::spawn_blocking(move || decode_file(&path))
    };
    let result = match worker.await {
        Ok(result) => result,
        Err(e) => Err(Error::Io(e.to_string())),
    };
    (path, result)
}

/// Serializes decodes so records are appended in the order the files
/// were given, regardless of how long each decode takes.
#[derive(Debug, Default)]
pub struct IntakeQueue {
    queued: VecDeque<PathBuf>,
    in_flight: bool,
}

impl IntakeQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues paths in order. Returns the path to start decoding now
    /// if the pipeline was idle.
    pub fn enqueue(&mut self, paths: impl IntoIterator<Item = PathBuf>) -> Option<PathBuf> {
        self.queued.extend(paths);
        self.start_next()
    }

    /// Marks the in-flight decode as finished and returns the next path
    /// to decode, if any.
    pub fn complete(&mut self) -> Option<PathBuf> {
        self.in_flight = false;
        self.start_next()
    }

    fn start_next(&mut self) -> Option<PathBuf> {
        if self.in_flight {
            return None;
        }
        let next = self.queued.pop_front()?;
        self.in_flight = true;
        Some(next)
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        !self.in_flight && self.queued.is_empty()
    }

    /// Number of files not yet fully taken in.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queued.len() + usize::from(self.in_flight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn decode_png_returns_a_handle() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("sample.png");

        let image = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]));
        image
            .save(&image_path)
            .expect("failed to write temporary png");

        decode_file(&image_path).expect("png should decode successfully");
    }

    #[test]
    fn decode_svg_rasterizes_successfully() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let svg_path = temp_dir.path().join("sample.svg");
        let svg_content = r#"
            <svg xmlns="http://www.w3.org/2000/svg" width="6" height="3">
                <rect width="6" height="3" fill="blue" />
            </svg>
        "#;
        fs::write(&svg_path, svg_content.trim()).expect("failed to write svg");

        decode_file(&svg_path).expect("svg should decode successfully");
    }

    #[test]
    fn decode_missing_file_returns_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing_path = temp_dir.path().join("does_not_exist.png");

        match decode_file(&missing_path) {
            Err(Error::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn decode_invalid_bytes_returns_image_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let bad_path = temp_dir.path().join("invalid.png");
        fs::write(&bad_path, b"not a png").expect("failed to write invalid data");

        match decode_file(&bad_path) {
            Err(Error::Image(message)) => assert!(!message.is_empty()),
            other => panic!("expected Image error, got {other:?}"),
        }
    }

    #[test]
    fn decode_svg_with_zero_dimensions_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let svg_path = temp_dir.path().join("zero.svg");
        let svg = r"<svg xmlns='http://www.w3.org/2000/svg' width='0' height='10'></svg>";
        fs::write(&svg_path, svg).expect("write svg");

        match decode_file(&svg_path) {
            Err(Error::Svg(_)) => {}
            other => panic!("expected Svg error, got {other:?}"),
        }
    }

    #[test]
    fn queue_starts_first_path_immediately() {
        let mut queue = IntakeQueue::new();
        let started = queue.enqueue([PathBuf::from("a.png"), PathBuf::from("b.png")]);

        assert_eq!(started, Some(PathBuf::from("a.png")));
        assert!(!queue.is_idle());
        assert_eq!(queue.pending(), 2);
    }

    #[test]
    fn queue_holds_later_paths_until_completion() {
        let mut queue = IntakeQueue::new();
        let _ = queue.enqueue([PathBuf::from("a.png")]);

        // Still busy with a.png, so b.png must wait.
        assert_eq!(queue.enqueue([PathBuf::from("b.png")]), None);

        assert_eq!(queue.complete(), Some(PathBuf::from("b.png")));
        assert_eq!(queue.complete(), None);
        assert!(queue.is_idle());
    }

    #[test]
    fn queue_preserves_enqueue_order() {
        let mut queue = IntakeQueue::new();
        let first = queue.enqueue([
            PathBuf::from("1.png"),
            PathBuf::from("2.png"),
            PathBuf::from("3.png"),
        ]);

        let mut order = vec![first.unwrap()];
        while let Some(next) = queue.complete() {
            order.push(next);
        }

        assert_eq!(
            order,
            vec![
                PathBuf::from("1.png"),
                PathBuf::from("2.png"),
                PathBuf::from("3.png"),
            ]
        );
    }

    #[test]
    fn completing_an_idle_queue_is_harmless() {
        let mut queue = IntakeQueue::new();
        assert_eq!(queue.complete(), None);
        assert!(queue.is_idle());
    }
}
