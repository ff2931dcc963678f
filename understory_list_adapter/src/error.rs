// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type shared by the store primitives and bulk loaders.

use core::fmt;

/// Failure of a primitive or bulk operation on an [`ItemList`](crate::ItemList).
///
/// A failed call never mutates the list and never reaches the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// A position was outside the bounds valid for the operation.
    ///
    /// Insertion accepts `0..=len`; every other primitive accepts `0..len`.
    IndexOutOfRange {
        /// The rejected position.
        index: usize,
        /// Length of the list at the time of the call.
        len: usize,
    },
    /// [`ItemList::insert_ignore_items`](crate::ItemList::insert_ignore_items)
    /// was given fewer items than the list currently holds.
    ShrinkingReplacement {
        /// Length of the list at the time of the call.
        current: usize,
        /// Length of the rejected replacement.
        replacement: usize,
    },
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for list of length {len}")
            }
            Self::ShrinkingReplacement {
                current,
                replacement,
            } => write!(
                f,
                "shrinking replacement not permitted: {replacement} items would replace {current}"
            ),
        }
    }
}

impl core::error::Error for ListError {}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::ListError;

    #[test]
    fn display_names_the_offending_values() {
        let err = ListError::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(err.to_string(), "index 7 out of range for list of length 3");

        let err = ListError::ShrinkingReplacement {
            current: 4,
            replacement: 2,
        };
        assert_eq!(
            err.to_string(),
            "shrinking replacement not permitted: 2 items would replace 4"
        );
    }
}
