// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hashed occurrence counting for reconciliation (feature `hashed_reconcile`).

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;

use crate::reconcile::{Lookup, Reconciliation, Tally, mark_surplus};
use crate::{ChangeSink, ItemList};

struct HashTally<'a, M> {
    counts: HashMap<&'a M, usize>,
}

impl<M> Default for HashTally<'_, M> {
    fn default() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }
}

impl<'a, M: Eq + Hash> Tally<'a, M> for HashTally<'a, M> {
    fn count(&self, item: &M) -> usize {
        self.counts.get(item).copied().unwrap_or(0)
    }

    fn bump(&mut self, item: &'a M) -> usize {
        let count = self.counts.entry(item).or_insert(0);
        *count += 1;
        *count
    }

    fn from_items(items: &'a [M]) -> Self {
        let mut tally = Self {
            counts: HashMap::with_capacity(items.len()),
        };
        for item in items {
            tally.bump(item);
        }
        tally
    }
}

/// Hash-based lookup.
pub(crate) struct Hashed;

impl<M: Eq + Hash> Lookup<M> for Hashed {
    fn surplus(items: &[M], reference: &[M]) -> Vec<bool> {
        mark_surplus::<M, HashTally<'_, M>>(items, reference)
    }
}

impl<M: Eq + Hash + Clone, S: ChangeSink> ItemList<M, S> {
    /// Like [`ItemList::animate_to`], with hashed lookups for removals and additions.
    ///
    /// Planning the first two phases takes expected linear time instead of
    /// `O(n * m)`. The move phase still searches linearly. Both methods apply
    /// and report exactly the same sequence of steps for the same input, so
    /// hosts can switch between them freely.
    pub fn animate_to_hashed(&mut self, target: &[M]) -> Reconciliation {
        self.reconcile::<Hashed>(target)
    }
}
