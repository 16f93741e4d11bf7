// SPDX-License-Identifier: MPL-2.0
//! Domain core of the picker: image records, the two ordered lists they
//! live in, the strip layout math, and the file intake pipeline.
//!
//! Everything here is plain state with no Iced widgets, so the list and
//! layout invariants can be tested without a running event loop.

pub mod intake;
pub mod layout;
pub mod lists;
pub mod record;
