// SPDX-License-Identifier: MPL-2.0
//! Image records held by the picker lists.

use iced::widget::image;

/// Unique identifier for an image record.
///
/// Drawn from a process-wide monotonic counter, so uniqueness is
/// guaranteed for the lifetime of the process rather than merely
/// probable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(u64);

impl RecordId {
    /// Returns the next unused record ID.
    pub fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// A single image in the picker.
///
/// The handle owns the decoded pixels for the session; dropping the
/// record releases them. Nothing is persisted.
#[derive(Debug, Clone)]
pub struct ImageRecord {
    pub id: RecordId,
    pub handle: image::Handle,
}

impl ImageRecord {
    /// Wraps a decoded display handle in a record with a fresh ID.
    #[must_use]
    pub fn new(handle: image::Handle) -> Self {
        Self {
            id: RecordId::next(),
            handle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_handle() -> image::Handle {
        image::Handle::from_rgba(1, 1, vec![255_u8; 4])
    }

    #[test]
    fn record_ids_are_unique() {
        let a = ImageRecord::new(sample_handle());
        let b = ImageRecord::new(sample_handle());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn record_ids_are_monotonic() {
        let ids: Vec<RecordId> = (0..16).map(|_| RecordId::next()).collect();
        for pair in ids.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }
    }
}
