// SPDX-License-Identifier: MPL-2.0
//! The two ordered image lists and the single transition applied when a
//! drag gesture completes.
//!
//! Every drag completion, whether a reorder within one list or a move
//! across lists, goes through [`Lists::apply`] so both lists change in
//! one call and no intermediate state is ever observable. Indices are
//! validated before anything is mutated; an out-of-range index is
//! reported as an error instead of corrupting list order.

use super::record::ImageRecord;
use std::fmt;

/// Which of the two lists a position refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Uploaded,
    Selected,
}

impl ListKind {
    /// Returns the other list.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            ListKind::Uploaded => ListKind::Selected,
            ListKind::Selected => ListKind::Uploaded,
        }
    }
}

/// A position in one of the two lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotRef {
    pub list: ListKind,
    pub index: usize,
}

/// A completed drag gesture with a resolved destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropEvent {
    pub source: SlotRef,
    pub destination: SlotRef,
}

/// Precondition failure for [`Lists::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropError {
    SourceOutOfRange { slot: SlotRef, len: usize },
    DestinationOutOfRange { slot: SlotRef, len: usize },
}

impl fmt::Display for DropError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropError::SourceOutOfRange { slot, len } => write!(
                f,
                "drag source index {} out of range for {:?} (len {})",
                slot.index, slot.list, len
            ),
            DropError::DestinationOutOfRange { slot, len } => write!(
                f,
                "drop destination index {} out of range for {:?} (len {})",
                slot.index, slot.list, len
            ),
        }
    }
}

/// The uploaded pool and the selection strip.
#[derive(Debug, Clone, Default)]
pub struct Lists {
    uploaded: Vec<ImageRecord>,
    selected: Vec<ImageRecord>,
}

impl Lists {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn uploaded(&self) -> &[ImageRecord] {
        &self.uploaded
    }

    pub fn selected(&self) -> &[ImageRecord] {
        &self.selected
    }

    #[must_use]
    pub fn len(&self, list: ListKind) -> usize {
        match list {
            ListKind::Uploaded => self.uploaded.len(),
            ListKind::Selected => self.selected.len(),
        }
    }

    /// Total record count across both lists.
    #[must_use]
    pub fn total(&self) -> usize {
        self.uploaded.len() + self.selected.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.uploaded.is_empty() && self.selected.is_empty()
    }

    /// Appends newly taken-in records to the end of the uploaded pool,
    /// preserving their order.
    pub fn intake(&mut self, records: impl IntoIterator<Item = ImageRecord>) {
        self.uploaded.extend(records);
    }

    fn list_mut(&mut self, list: ListKind) -> &mut Vec<ImageRecord> {
        match list {
            ListKind::Uploaded => &mut self.uploaded,
            ListKind::Selected => &mut self.selected,
        }
    }

    /// Applies a completed drag gesture.
    ///
    /// Same-list gestures remove the record at the source index and
    /// reinsert it at the destination index. Cross-list gestures remove
    /// it from the source list and insert it at the destination index in
    /// the other list. Both indices are checked up front, so on error
    /// neither list has changed.
    pub fn apply(&mut self, event: DropEvent) -> Result<(), DropError> {
        let DropEvent {
            source,
            destination,
        } = event;

        let source_len = self.len(source.list);
        if source.index >= source_len {
            return Err(DropError::SourceOutOfRange {
                slot: source,
                len: source_len,
            });
        }

        if source.list == destination.list {
            // Destination must be an existing position in the list.
            if destination.index >= source_len {
                return Err(DropError::DestinationOutOfRange {
                    slot: destination,
                    len: source_len,
                });
            }
            let list = self.list_mut(source.list);
            let record = list.remove(source.index);
            list.insert(destination.index, record);
        } else {
            // Cross-list drops may land one past the end (append).
            let destination_len = self.len(destination.list);
            if destination.index > destination_len {
                return Err(DropError::DestinationOutOfRange {
                    slot: destination,
                    len: destination_len,
                });
            }
            let record = self.list_mut(source.list).remove(source.index);
            self.list_mut(destination.list).insert(destination.index, record);
        }

        Ok(())
    }
}
