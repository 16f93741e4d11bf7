// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Tracks the grab-and-drop gesture that moves thumbnails within and
//! between the uploaded pool and the selection strip. A press on a
//! thumbnail arms the drag; the slots and list surfaces report the
//! cursor entering and leaving them; the global left-button release
//! resolves the gesture into a [`DropEvent`], or into nothing when no
//! target is under the cursor.
//!
//! Slot hover and list-surface hover are tracked independently, with
//! exits guarded by equality, so the gesture survives enter/exit events
//! arriving in either order when the cursor crosses from one widget to
//! another.

use crate::picker::lists::{DropEvent, ListKind, Lists, SlotRef};

/// Messages produced by the pool and strip widgets plus the global
/// button-release listener.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// The left button went down on a thumbnail.
    Pressed(SlotRef),
    /// The cursor entered a thumbnail slot.
    SlotEntered(SlotRef),
    /// The cursor left a thumbnail slot.
    SlotLeft(SlotRef),
    /// The cursor entered a list surface.
    ListEntered(ListKind),
    /// The cursor left a list surface.
    ListLeft(ListKind),
    /// The left button was released anywhere in the window.
    Released,
}

/// Where a release would drop the dragged record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// Exactly on a rendered slot.
    Slot(SlotRef),
    /// On a list's surface past its last slot.
    End(ListKind),
}

/// Manages the armed drag gesture and the cursor's hover position.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragState {
    source: Option<SlotRef>,
    over_slot: Option<SlotRef>,
    over_list: Option<ListKind>,
}

impl DragState {
    /// Whether a drag gesture is currently armed.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.source.is_some()
    }

    #[must_use]
    pub fn source(&self) -> Option<SlotRef> {
        self.source
    }

    /// Current drop target: only meaningful while a drag is armed. An
    /// exact slot wins over the list surface around it.
    #[must_use]
    pub fn target(&self) -> Option<DropTarget> {
        self.source?;
        if let Some(slot) = self.over_slot {
            return Some(DropTarget::Slot(slot));
        }
        self.over_list.map(DropTarget::End)
    }

    /// Arms a drag from the given slot. The press necessarily happened
    /// inside the source slot, so releasing in place drops the record
    /// back where it came from.
    pub fn arm(&mut self, source: SlotRef) {
        self.source = Some(source);
        self.over_slot = Some(source);
        self.over_list = Some(source.list);
    }

    /// Records the cursor entering a slot.
    pub fn hover_slot(&mut self, slot: SlotRef) {
        self.over_slot = Some(slot);
    }

    /// Records the cursor leaving a slot. Guarded so a stale exit
    /// cannot clobber a newer slot hover.
    pub fn leave_slot(&mut self, slot: SlotRef) {
        if self.over_slot == Some(slot) {
            self.over_slot = None;
        }
    }

    /// Records the cursor entering a list surface.
    pub fn hover_list(&mut self, list: ListKind) {
        self.over_list = Some(list);
    }

    /// Records the cursor leaving a list surface, with the same
    /// stale-exit guard as slots.
    pub fn leave_list(&mut self, list: ListKind) {
        if self.over_list == Some(list) {
            self.over_list = None;
        }
    }

    /// Resolves the release of the left button.
    ///
    /// Returns the drop event to apply, or `None` when the gesture had
    /// no destination (which must leave both lists untouched). Either
    /// way the drag is disarmed; hover tracking continues since the
    /// cursor has not moved.
    pub fn release(&mut self, lists: &Lists) -> Option<DropEvent> {
        let target = self.target();
        let source = self.source.take()?;

        let destination = match target? {
            DropTarget::Slot(slot) => slot,
            DropTarget::End(list) => {
                let len = lists.len(list);
                // Same-list "past the end" means the last position;
                // cross-list it means appending after the current tail.
                let index = if list == source.list {
                    len.saturating_sub(1)
                } else {
                    len
                };
                SlotRef { list, index }
            }
        };

        Some(DropEvent {
            source,
            destination,
        })
    }
}
