// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Three-phase reconciliation of an [`ItemList`] against a target sequence.
//!
//! [`ItemList::animate_to`] rewrites the list into the target through the
//! single-item primitives, so the sink sees one notification per step and a
//! host can animate each removal, insertion, and move. The phases run in a
//! fixed order:
//!
//! 1. **Removals**, scanning the list from last to first. An item is removed
//!    when the target has no counterpart left for it. Scanning backwards keeps
//!    the indices still to be visited valid.
//! 2. **Additions**, scanning the target from first to last. `target[i]` is
//!    inserted at `i` when the list has no counterpart for it. Afterwards the
//!    list holds exactly the target's items, in some order.
//! 3. **Moves**, scanning the target from last to first. The counterpart of
//!    `target[to]` is looked up in the not yet placed prefix `0..=to` and moved
//!    to `to` unless it is already there. Positions above `to` are final, and
//!    the prefix always holds exactly the items of `target[..=to]`.
//!
//! Items correspond by equality. Repeated values are matched by occurrence:
//! the list keeps the leftmost `n` copies of a value that appears `n` times in
//! the target, the `k`-th copy in the target is inserted only if the list holds
//! fewer than `k`, and a move picks the rightmost equal item of the unplaced
//! prefix. Without repeated values this is plain `contains`/`position` lookup.
//!
//! The move count is not minimized. For `[a, b, c]` to `[c, a, b]` the list
//! reports `b` moving `1 -> 2` and then `a` moving `0 -> 1`.
//!
//! Lookups are linear, which makes a pass `O(n * m)`. That is fine for
//! on-screen list sizes; see `animate_to_hashed` (feature `hashed_reconcile`)
//! for hashed occurrence counting in the first two phases.

use alloc::vec::Vec;
use core::fmt;

use crate::{ChangeSink, ItemList, ListError};

/// A phase of [`ItemList::animate_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Removing items without a counterpart in the target.
    Removals,
    /// Inserting target items without a counterpart in the list.
    Additions,
    /// Moving items into target order.
    Moves,
}

impl Phase {
    fn failed(self, error: ListError) -> ReconcileFailure {
        ReconcileFailure { phase: self, error }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Removals => "removals",
            Self::Additions => "additions",
            Self::Moves => "moves",
        })
    }
}

/// Where and why a reconciliation stopped early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconcileFailure {
    /// The phase that was running.
    pub phase: Phase,
    /// The error returned by the failing primitive.
    pub error: ListError,
}

impl fmt::Display for ReconcileFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "reconciliation stopped during {}: {}", self.phase, self.error)
    }
}

impl core::error::Error for ReconcileFailure {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Summary of one reconciliation.
///
/// The counts are the mutations actually applied (and therefore reported to
/// the sink). A failure does not roll those mutations back; the list is then
/// left somewhere between its old contents and the target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reconciliation {
    /// Items removed in the first phase.
    pub removed: usize,
    /// Items inserted in the second phase.
    pub inserted: usize,
    /// Items moved in the third phase.
    pub moved: usize,
    /// Set if a phase stopped early.
    pub failure: Option<ReconcileFailure>,
}

impl Reconciliation {
    /// Returns `true` if all three phases ran to completion.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.failure.is_none()
    }

    /// Total number of applied mutations.
    #[must_use]
    pub const fn mutations(&self) -> usize {
        self.removed + self.inserted + self.moved
    }

    /// Returns `true` if the list already matched the target.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.is_complete() && self.mutations() == 0
    }
}

/// Occurrence counter over borrowed items.
pub(crate) trait Tally<'a, M: 'a>: Default {
    /// How many items equal to `item` have been counted.
    fn count(&self, item: &M) -> usize;

    /// Counts `item` and returns the new count for its value.
    fn bump(&mut self, item: &'a M) -> usize;

    fn from_items(items: &'a [M]) -> Self {
        let mut tally = Self::default();
        for item in items {
            tally.bump(item);
        }
        tally
    }
}

/// Marks each item of `items` whose occurrence has no counterpart in `reference`.
///
/// The `k`-th occurrence of a value is surplus when `reference` holds fewer
/// than `k` equal items.
pub(crate) fn mark_surplus<'a, M, T>(items: &'a [M], reference: &'a [M]) -> Vec<bool>
where
    T: Tally<'a, M>,
{
    let available = T::from_items(reference);
    let mut seen = T::default();
    items
        .iter()
        .map(|item| seen.bump(item) > available.count(item))
        .collect()
}

/// Counting strategy used to plan the removal and addition phases.
pub(crate) trait Lookup<M> {
    fn surplus(items: &[M], reference: &[M]) -> Vec<bool>;
}

struct LinearTally<'a, M> {
    seen: Vec<&'a M>,
}

impl<M> Default for LinearTally<'_, M> {
    fn default() -> Self {
        Self { seen: Vec::new() }
    }
}

impl<'a, M: PartialEq> Tally<'a, M> for LinearTally<'a, M> {
    fn count(&self, item: &M) -> usize {
        self.seen.iter().filter(|&&seen| seen == item).count()
    }

    fn bump(&mut self, item: &'a M) -> usize {
        self.seen.push(item);
        self.count(item)
    }
}

/// Equality-only lookup.
pub(crate) struct Linear;

impl<M: PartialEq> Lookup<M> for Linear {
    fn surplus(items: &[M], reference: &[M]) -> Vec<bool> {
        mark_surplus::<M, LinearTally<'_, M>>(items, reference)
    }
}

impl<M: PartialEq + Clone, S: ChangeSink> ItemList<M, S> {
    /// Rewrites the list into `target` through single-item removals, insertions, and moves.
    ///
    /// Every applied step is reported to the sink as it happens. The call does
    /// not panic on its own (a panicking sink still unwinds through it) and
    /// never fails outright; the returned [`Reconciliation`] says how many
    /// steps were applied and whether a phase stopped early. The planned steps
    /// always stay in range, so a failure means the phase plan disagreed with
    /// the list. See the [module docs](crate::reconcile) for the algorithm.
    ///
    /// ```rust
    /// use understory_list_adapter::{Change, ItemList};
    ///
    /// let mut list = ItemList::with_items(vec!['a', 'b', 'c'], Vec::<Change>::new());
    /// let report = list.animate_to(&['b', 'c', 'd']);
    ///
    /// assert!(report.is_complete());
    /// assert_eq!(list.items(), &['b', 'c', 'd']);
    /// assert_eq!(
    ///     list.sink(),
    ///     &vec![
    ///         Change::Removed { index: 0 },
    ///         Change::Inserted { start: 2, count: 1 },
    ///     ]
    /// );
    /// ```
    pub fn animate_to(&mut self, target: &[M]) -> Reconciliation {
        self.reconcile::<Linear>(target)
    }

    pub(crate) fn reconcile<L: Lookup<M>>(&mut self, target: &[M]) -> Reconciliation {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "animate_to",
            current_len = self.items.len(),
            target_len = target.len()
        )
        .entered();

        let mut report = Reconciliation::default();
        if let Err(failure) = self.run_phases::<L>(target, &mut report) {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                phase = %failure.phase,
                error = %failure.error,
                removed = report.removed,
                inserted = report.inserted,
                moved = report.moved,
                "reconciliation stopped early"
            );
            report.failure = Some(failure);
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                removed = report.removed,
                inserted = report.inserted,
                moved = report.moved,
                "reconciled"
            );
        }
        report
    }

    fn run_phases<L: Lookup<M>>(
        &mut self,
        target: &[M],
        report: &mut Reconciliation,
    ) -> Result<(), ReconcileFailure> {
        // Removals, highest index first.
        let removals = L::surplus(&self.items, target);
        for (index, &surplus) in removals.iter().enumerate().rev() {
            if surplus {
                self.remove_item(index)
                    .map_err(|e| Phase::Removals.failed(e))?;
                report.removed += 1;
            }
        }

        // Additions, lowest index first.
        let additions = L::surplus(target, &self.items);
        for (index, (item, &missing)) in target.iter().zip(&additions).enumerate() {
            if missing {
                self.insert_item(index, item.clone())
                    .map_err(|e| Phase::Additions.failed(e))?;
                report.inserted += 1;
            }
        }

        // Moves, highest index first; everything above `to` is already placed.
        for (to, item) in target.iter().enumerate().rev() {
            let unplaced = self
                .items
                .get(..=to)
                .ok_or_else(|| Phase::Moves.failed(self.out_of_range(to)))?;
            let Some(from) = unplaced.iter().rposition(|it| it == item) else {
                continue;
            };
            if from != to {
                self.move_item(from, to)
                    .map_err(|e| Phase::Moves.failed(e))?;
                report.moved += 1;
            }
        }
        Ok(())
    }
}
