// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outbound change notifications.
//!
//! An [`ItemList`](crate::ItemList) reports every structural mutation to a
//! [`ChangeSink`] right after applying it and before the next mutation starts.
//! A host display layer implements the trait to keep its on-screen children in
//! step with the list; tests and simple hosts can record into a `Vec<Change>`.

use alloc::vec::Vec;

/// Receiver for structural-change notifications.
///
/// Calls arrive synchronously, one per applied mutation, in application order.
/// Indices always refer to the list *after* the mutation described.
pub trait ChangeSink {
    /// `count` items were inserted starting at `start`.
    fn range_inserted(&mut self, start: usize, count: usize);

    /// The item at `index` was removed.
    fn item_removed(&mut self, index: usize);

    /// `count` items starting at `start` were removed.
    fn range_removed(&mut self, start: usize, count: usize);

    /// The item at `from` was removed and reinserted so that it now sits at `to`.
    fn item_moved(&mut self, from: usize, to: usize);

    /// The contents of the item at `index` changed without a structural mutation.
    ///
    /// The default implementation ignores the notification.
    fn item_changed(&mut self, index: usize) {
        let _ = index;
    }
}

/// Discards all notifications.
impl ChangeSink for () {
    fn range_inserted(&mut self, _start: usize, _count: usize) {}

    fn item_removed(&mut self, _index: usize) {}

    fn range_removed(&mut self, _start: usize, _count: usize) {}

    fn item_moved(&mut self, _from: usize, _to: usize) {}
}

impl<S: ChangeSink + ?Sized> ChangeSink for &mut S {
    fn range_inserted(&mut self, start: usize, count: usize) {
        (**self).range_inserted(start, count);
    }

    fn item_removed(&mut self, index: usize) {
        (**self).item_removed(index);
    }

    fn range_removed(&mut self, start: usize, count: usize) {
        (**self).range_removed(start, count);
    }

    fn item_moved(&mut self, from: usize, to: usize) {
        (**self).item_moved(from, to);
    }

    fn item_changed(&mut self, index: usize) {
        (**self).item_changed(index);
    }
}

/// A single recorded notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Change {
    /// See [`ChangeSink::range_inserted`].
    Inserted {
        /// First inserted index.
        start: usize,
        /// Number of inserted items.
        count: usize,
    },
    /// See [`ChangeSink::item_removed`].
    Removed {
        /// Index the item was removed from.
        index: usize,
    },
    /// See [`ChangeSink::range_removed`].
    RangeRemoved {
        /// First removed index.
        start: usize,
        /// Number of removed items.
        count: usize,
    },
    /// See [`ChangeSink::item_moved`].
    Moved {
        /// Index before the move.
        from: usize,
        /// Index after the move.
        to: usize,
    },
    /// See [`ChangeSink::item_changed`].
    Changed {
        /// Index of the changed item.
        index: usize,
    },
}

impl Change {
    /// Returns the item count after this change, given the count `len` before it.
    ///
    /// Hosts that only need to answer "how many items exist" can fold this over
    /// the notifications they receive.
    #[must_use]
    pub const fn apply_len(self, len: usize) -> usize {
        match self {
            Self::Inserted { count, .. } => len + count,
            Self::Removed { .. } => len.saturating_sub(1),
            Self::RangeRemoved { count, .. } => len.saturating_sub(count),
            Self::Moved { .. } | Self::Changed { .. } => len,
        }
    }

    /// Returns `true` for insertions, removals, and moves.
    #[must_use]
    pub const fn is_structural(self) -> bool {
        !matches!(self, Self::Changed { .. })
    }
}

/// Records every notification in order.
impl ChangeSink for Vec<Change> {
    fn range_inserted(&mut self, start: usize, count: usize) {
        self.push(Change::Inserted { start, count });
    }

    fn item_removed(&mut self, index: usize) {
        self.push(Change::Removed { index });
    }

    fn range_removed(&mut self, start: usize, count: usize) {
        self.push(Change::RangeRemoved { start, count });
    }

    fn item_moved(&mut self, from: usize, to: usize) {
        self.push(Change::Moved { from, to });
    }

    fn item_changed(&mut self, index: usize) {
        self.push(Change::Changed { index });
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{Change, ChangeSink};

    #[test]
    fn vec_sink_records_in_call_order() {
        let mut log: Vec<Change> = Vec::new();
        log.range_inserted(0, 3);
        log.item_moved(2, 0);
        log.item_changed(1);
        log.item_removed(0);
        log.range_removed(0, 2);
        assert_eq!(
            log,
            vec![
                Change::Inserted { start: 0, count: 3 },
                Change::Moved { from: 2, to: 0 },
                Change::Changed { index: 1 },
                Change::Removed { index: 0 },
                Change::RangeRemoved { start: 0, count: 2 },
            ]
        );
    }

    #[test]
    fn borrowed_sink_forwards_to_owner() {
        fn announce<S: ChangeSink>(mut sink: S) {
            sink.item_changed(4);
            sink.item_moved(0, 1);
        }

        let mut log: Vec<Change> = Vec::new();
        announce(&mut log);
        assert_eq!(
            log,
            vec![Change::Changed { index: 4 }, Change::Moved { from: 0, to: 1 }]
        );
    }

    #[test]
    fn apply_len_tracks_item_count() {
        let changes = [
            Change::Inserted { start: 0, count: 4 },
            Change::Removed { index: 1 },
            Change::Moved { from: 0, to: 2 },
            Change::Changed { index: 0 },
            Change::RangeRemoved { start: 0, count: 2 },
        ];
        let len = changes.iter().fold(0, |len, c| c.apply_len(len));
        assert_eq!(len, 1);
        assert!(!Change::Changed { index: 0 }.is_structural());
        assert!(Change::Moved { from: 0, to: 1 }.is_structural());
    }
}
