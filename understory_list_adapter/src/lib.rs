// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_list_adapter --heading-base-level=0

//! Understory List Adapter: an ordered item store that animates toward new contents.
//!
//! This crate provides the model side of an animated list: a dense sequence of
//! items indexed `0..len`, structural-change notifications for a display layer,
//! and a reconciliation pass that turns "here is the new list" into individual
//! removals, insertions, and moves that a host can animate.
//!
//! The core concepts are:
//!
//! - [`ItemList`]: owns the items and a [`ChangeSink`]. Its primitives
//!   ([`ItemList::insert_item`], [`ItemList::remove_item`], [`ItemList::move_item`])
//!   apply one structural change and then report it, so the sink never sees a
//!   notification that does not match the current list.
//! - Bulk loaders: [`ItemList::insert_items`] appends, [`ItemList::clear_items`]
//!   empties, and [`ItemList::insert_ignore_items`] replaces the whole list with
//!   one that is at least as long. Each reports whole ranges.
//! - [`ItemList::animate_to`]: reconciles the list against a target sequence in
//!   three phases (removals, additions, moves) and returns a [`Reconciliation`]
//!   summary. It never fails outright; a phase that stops early is recorded in
//!   the summary instead. See the [`reconcile`] module for details.
//! - [`ChangeSink`]: the notification contract. `()` discards notifications and
//!   `Vec<Change>` records them as [`Change`] values.
//! - [`ViewBinder`] and [`FallbackBinders`]: the seam where a host creates and
//!   binds views for items, with per-category fallback writers.
//!
//! This crate deliberately does **not** know about widgets, display trees, or
//! any particular UI framework. Host frameworks are responsible for:
//!
//! - Implementing [`ChangeSink`] to insert, remove, and move their children.
//! - Creating and binding views through [`ViewBinder`].
//! - Serializing access: every mutating call takes `&mut self`, and the list
//!   is meant to be driven from one thread.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_list_adapter::{Change, ItemList};
//!
//! let mut list = ItemList::new(Vec::<Change>::new());
//! list.insert_items(["apple", "banana", "cherry"]);
//!
//! // New contents arrive: banana is gone, date is new, cherry moved up.
//! let report = list.animate_to(&["cherry", "apple", "date"]);
//!
//! assert!(report.is_complete());
//! assert_eq!(list.items(), &["cherry", "apple", "date"]);
//! assert_eq!((report.removed, report.inserted, report.moved), (1, 1, 1));
//!
//! // The recorded notifications replay the same steps.
//! assert_eq!(
//!     list.sink(),
//!     &vec![
//!         Change::Inserted { start: 0, count: 3 },
//!         Change::Removed { index: 1 },
//!         Change::Inserted { start: 2, count: 1 },
//!         Change::Moved { from: 0, to: 1 },
//!     ]
//! );
//! ```
//!
//! ## Features
//!
//! - `hashed_reconcile` *(default)*: enables `ItemList::animate_to_hashed`,
//!   which plans removals and additions with `hashbrown` occurrence counts.
//!   Disable this feature to avoid the `hashbrown` dependency.
//! - `tracing`: emits a `debug` span per reconciliation with the applied step
//!   counts, and a `warn` event when a phase stops early.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod binding;
mod bulk;
mod error;
#[cfg(feature = "hashed_reconcile")]
mod hashed;
pub mod reconcile;
mod sink;
mod store;

pub use binding::{Bound, FallbackBinders, ViewBinder, ViewType, bind_item};
pub use error::ListError;
pub use reconcile::{Phase, ReconcileFailure, Reconciliation};
pub use sink::{Change, ChangeSink};
pub use store::ItemList;
