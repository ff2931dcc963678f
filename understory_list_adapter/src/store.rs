// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ordered item store and its single-item primitives.

use alloc::vec::Vec;

use crate::{ChangeSink, ListError};

/// An ordered, index-addressable list of items that reports every mutation.
///
/// This type:
/// - owns the item sequence (indices are always `0..len`),
/// - owns (or borrows, via `&mut S`) a [`ChangeSink`],
/// - exposes insert/remove/move primitives, bulk loaders, and reconciliation.
///
/// Each successful mutation is applied first and then reported to the sink
/// exactly once, so a sink that reads the list state during a notification
/// always sees the effect of that notification. Failed calls leave both the
/// items and the sink untouched.
///
/// The initial contents passed to [`ItemList::with_items`] are not reported.
#[derive(Clone, Debug)]
pub struct ItemList<M, S = ()> {
    pub(crate) items: Vec<M>,
    pub(crate) sink: S,
}

impl<M, S: Default> Default for ItemList<M, S> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            sink: S::default(),
        }
    }
}

impl<M, S: ChangeSink> ItemList<M, S> {
    /// Creates an empty list reporting to `sink`.
    #[must_use]
    pub fn new(sink: S) -> Self {
        Self {
            items: Vec::new(),
            sink,
        }
    }

    /// Creates a list that starts out holding `items`, reporting later changes to `sink`.
    #[must_use]
    pub fn with_items(items: Vec<M>, sink: S) -> Self {
        Self { items, sink }
    }

    /// Number of items in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the list holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the item at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&M> {
        self.items.get(index)
    }

    /// Returns the items in order.
    #[must_use]
    pub fn items(&self) -> &[M] {
        &self.items
    }

    /// Iterates over the items in order.
    pub fn iter(&self) -> core::slice::Iter<'_, M> {
        self.items.iter()
    }

    /// Returns a shared reference to the sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns a mutable reference to the sink.
    ///
    /// The list never calls the sink re-entrantly, so a host may drain or reset
    /// recorded notifications between operations.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the list, returning its items and sink.
    #[must_use]
    pub fn into_parts(self) -> (Vec<M>, S) {
        (self.items, self.sink)
    }

    /// Consumes the list, returning its items.
    #[must_use]
    pub fn into_items(self) -> Vec<M> {
        self.items
    }

    /// Inserts `item` at `position`, shifting later items right.
    ///
    /// Reports `range_inserted(position, 1)`. Fails if `position > len`.
    pub fn insert_item(&mut self, position: usize, item: M) -> Result<(), ListError> {
        if position > self.items.len() {
            return Err(self.out_of_range(position));
        }
        self.items.insert(position, item);
        self.sink.range_inserted(position, 1);
        Ok(())
    }

    /// Appends `item`, reporting `range_inserted(len, 1)`.
    pub fn push_item(&mut self, item: M) {
        let position = self.items.len();
        self.items.push(item);
        self.sink.range_inserted(position, 1);
    }

    /// Removes and returns the item at `position`, shifting later items left.
    ///
    /// Reports `item_removed(position)`. Fails if `position >= len`.
    pub fn remove_item(&mut self, position: usize) -> Result<M, ListError> {
        self.check_index(position)?;
        let item = self.items.remove(position);
        self.sink.item_removed(position);
        Ok(item)
    }

    /// Moves the item at `from` so that it ends up at index `to`.
    ///
    /// `to` is the final resting index, i.e. it is interpreted against the
    /// list after the item has been taken out. Reports `item_moved(from, to)`,
    /// even when `from == to`. Fails if either index is `>= len`.
    pub fn move_item(&mut self, from: usize, to: usize) -> Result<(), ListError> {
        self.check_index(from)?;
        self.check_index(to)?;
        if from < to {
            self.items[from..=to].rotate_left(1);
        } else {
            self.items[to..=from].rotate_right(1);
        }
        self.sink.item_moved(from, to);
        Ok(())
    }

    /// Replaces the item at `position`, returning the previous one.
    ///
    /// Reports `item_changed(position)`. Fails if `position >= len`.
    pub fn set_item(&mut self, position: usize, item: M) -> Result<M, ListError> {
        self.check_index(position)?;
        let previous = core::mem::replace(&mut self.items[position], item);
        self.sink.item_changed(position);
        Ok(previous)
    }

    /// Reports `item_changed(position)` without touching the item.
    ///
    /// Use this after mutating an item's contents through interior mutability
    /// or after a rebind. Fails if `position >= len`.
    pub fn notify_item_changed(&mut self, position: usize) -> Result<(), ListError> {
        self.check_index(position)?;
        self.sink.item_changed(position);
        Ok(())
    }

    pub(crate) fn check_index(&self, index: usize) -> Result<(), ListError> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(self.out_of_range(index))
        }
    }

    pub(crate) fn out_of_range(&self, index: usize) -> ListError {
        ListError::IndexOutOfRange {
            index,
            len: self.items.len(),
        }
    }
}

impl<M: PartialEq, S: ChangeSink> ItemList<M, S> {
    /// Returns the index of the first item equal to `item`.
    #[must_use]
    pub fn position_of(&self, item: &M) -> Option<usize> {
        self.items.iter().position(|it| it == item)
    }

    /// Returns `true` if some item equals `item`.
    #[must_use]
    pub fn contains(&self, item: &M) -> bool {
        self.items.contains(item)
    }
}

impl<'a, M, S> IntoIterator for &'a ItemList<M, S> {
    type Item = &'a M;
    type IntoIter = core::slice::Iter<'a, M>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
