// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bulk loaders: append, clear, and non-shrinking replace.

use alloc::vec::Vec;

use crate::{ChangeSink, ItemList, ListError};

impl<M, S: ChangeSink> ItemList<M, S> {
    /// Appends every item of `tail`, reporting one `range_inserted` for the new span.
    ///
    /// An empty `tail` is not a mutation and reports nothing.
    pub fn insert_items<I>(&mut self, tail: I)
    where
        I: IntoIterator<Item = M>,
    {
        let start = self.items.len();
        self.items.extend(tail);
        let count = self.items.len() - start;
        if count > 0 {
            self.sink.range_inserted(start, count);
        }
    }

    /// Removes every item, reporting one `range_removed(0, len)`.
    ///
    /// Does nothing (and reports nothing) when the list is already empty.
    pub fn clear_items(&mut self) {
        let count = self.items.len();
        if count == 0 {
            return;
        }
        self.items.clear();
        self.sink.range_removed(0, count);
    }

    /// Replaces the whole list with `replacement`, which must not be shorter.
    ///
    /// This is a positional bulk replace, not a reconciliation: the old span is
    /// reported as removed and the new span as inserted, each only if non-empty.
    ///
    /// Fails with [`ListError::ShrinkingReplacement`] before touching anything
    /// if `replacement` holds fewer items than the list.
    pub fn insert_ignore_items(&mut self, replacement: Vec<M>) -> Result<(), ListError> {
        let current = self.items.len();
        if replacement.len() < current {
            return Err(ListError::ShrinkingReplacement {
                current,
                replacement: replacement.len(),
            });
        }
        self.clear_items();
        self.insert_items(replacement);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::{Change, ItemList, ListError};

    #[test]
    fn insert_items_reports_one_range_after_existing_items() {
        let mut l: ItemList<i32, Vec<Change>> = ItemList::with_items(vec![1, 2], Vec::new());
        l.insert_items([3, 4, 5]);
        assert_eq!(l.items(), &[1, 2, 3, 4, 5]);
        assert_eq!(l.sink(), &vec![Change::Inserted { start: 2, count: 3 }]);
    }

    #[test]
    fn insert_items_with_empty_tail_reports_nothing() {
        let mut l: ItemList<i32, Vec<Change>> = ItemList::with_items(vec![1], Vec::new());
        l.insert_items(core::iter::empty());
        assert_eq!(l.items(), &[1]);
        assert!(l.sink().is_empty());
    }

    #[test]
    fn clear_items_is_silent_when_empty() {
        let mut l: ItemList<u8, Vec<Change>> = ItemList::new(Vec::new());
        l.clear_items();
        assert!(l.sink().is_empty());

        l.insert_items([7, 8, 9]);
        l.sink_mut().clear();
        l.clear_items();
        assert!(l.is_empty());
        assert_eq!(l.sink(), &vec![Change::RangeRemoved { start: 0, count: 3 }]);
    }

    #[test]
    fn insert_ignore_items_rejects_shrinking_replacement() {
        let mut l: ItemList<char, Vec<Change>> =
            ItemList::with_items(vec!['a', 'b', 'c'], Vec::new());
        assert_eq!(
            l.insert_ignore_items(vec!['x', 'y']),
            Err(ListError::ShrinkingReplacement {
                current: 3,
                replacement: 2,
            })
        );
        assert_eq!(l.items(), &['a', 'b', 'c']);
        assert!(l.sink().is_empty());
    }

    #[test]
    fn insert_ignore_items_replaces_positionally() {
        let mut l: ItemList<char, Vec<Change>> = ItemList::with_items(vec!['a', 'b'], Vec::new());
        l.insert_ignore_items(vec!['a', 'x', 'y']).unwrap();
        assert_eq!(l.items(), &['a', 'x', 'y']);
        assert_eq!(
            l.sink(),
            &vec![
                Change::RangeRemoved { start: 0, count: 2 },
                Change::Inserted { start: 0, count: 3 },
            ]
        );
    }

    #[test]
    fn insert_ignore_items_accepts_equal_length() {
        let mut l: ItemList<char, Vec<Change>> = ItemList::new(Vec::new());
        l.insert_ignore_items(vec!['q']).unwrap();
        // Nothing to remove from an empty list.
        assert_eq!(l.sink(), &vec![Change::Inserted { start: 0, count: 1 }]);
        l.sink_mut().clear();
        l.insert_ignore_items(vec!['r']).unwrap();
        assert_eq!(l.items(), &['r']);
        assert_eq!(
            l.sink(),
            &vec![
                Change::RangeRemoved { start: 0, count: 1 },
                Change::Inserted { start: 0, count: 1 },
            ]
        );

        let mut empty: ItemList<char, Vec<Change>> = ItemList::new(Vec::new());
        empty.insert_ignore_items(Vec::new()).unwrap();
        assert!(empty.sink().is_empty());
    }
}
