// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! View construction and binding seam.
//!
//! The list itself knows nothing about views. Hosts implement [`ViewBinder`] to
//! create a view for a category code and write an item into it. A binder may
//! decline a write by returning `false`; the host can then supply per-category
//! writers through [`FallbackBinders`]. Writers are registered up front, so a
//! missing writer is a plain [`Bound::Unhandled`] result rather than a failed
//! lookup at bind time.
//!
//! ```rust
//! use understory_list_adapter::{Bound, FallbackBinders, ItemList, ViewBinder, ViewType};
//!
//! enum Row {
//!     Header(&'static str),
//!     Entry(u32),
//! }
//!
//! const HEADER: ViewType = 1;
//!
//! struct Rows;
//!
//! impl ViewBinder<Row> for Rows {
//!     type View = String;
//!
//!     fn view_type(&self, item: &Row, _index: usize) -> ViewType {
//!         match item {
//!             Row::Header(_) => HEADER,
//!             Row::Entry(_) => 0,
//!         }
//!     }
//!
//!     fn create_view(&mut self, _view_type: ViewType) -> String {
//!         String::new()
//!     }
//!
//!     fn bind_view(&mut self, view: &mut String, item: &Row, index: usize) -> bool {
//!         match item {
//!             Row::Entry(n) => {
//!                 *view = format!("{index}: {n}");
//!                 true
//!             }
//!             Row::Header(_) => false,
//!         }
//!     }
//! }
//!
//! let mut fallbacks = FallbackBinders::new();
//! fallbacks.register(HEADER, |view: &mut String, item: &Row, _| {
//!     if let Row::Header(title) = item {
//!         *view = title.to_uppercase();
//!     }
//! });
//!
//! let rows_in_order = vec![Row::Header("fruit"), Row::Entry(7)];
//! let list: ItemList<Row> = ItemList::with_items(rows_in_order, ());
//! let mut rows = Rows;
//!
//! let mut view = list.create_view(0, &mut rows).unwrap();
//! assert_eq!(list.bind_view(0, &mut rows, &fallbacks, &mut view), Ok(Bound::Fallback));
//! assert_eq!(view, "FRUIT");
//!
//! let mut view = list.create_view(1, &mut rows).unwrap();
//! assert_eq!(list.bind_view(1, &mut rows, &fallbacks, &mut view), Ok(Bound::Primary));
//! assert_eq!(view, "1: 7");
//! ```

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use core::fmt;

use crate::{ChangeSink, ItemList, ListError};

/// Category code selecting a view template for an item.
pub type ViewType = u32;

/// Host-side view construction and binding.
pub trait ViewBinder<M> {
    /// The renderable unit produced by [`ViewBinder::create_view`].
    type View;

    /// Returns the category code for `item` at `index`.
    ///
    /// The default puts every item in category `0`.
    fn view_type(&self, item: &M, index: usize) -> ViewType {
        let _ = (item, index);
        0
    }

    /// Creates an empty view for `view_type`.
    fn create_view(&mut self, view_type: ViewType) -> Self::View;

    /// Writes `item` (at `index`) into `view`.
    ///
    /// Returns `false` to decline, letting the caller try a fallback writer.
    fn bind_view(&mut self, view: &mut Self::View, item: &M, index: usize) -> bool;
}

/// Outcome of [`bind_item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// The [`ViewBinder`] wrote the item.
    Primary,
    /// The binder declined and the writer registered for the view type wrote the item.
    Fallback,
    /// The binder declined and no writer is registered for the view type.
    Unhandled,
}

type Writer<M, V> = Box<dyn Fn(&mut V, &M, usize)>;

/// Per-category writers consulted when a [`ViewBinder`] declines a bind.
pub struct FallbackBinders<M, V> {
    writers: BTreeMap<ViewType, Writer<M, V>>,
}

impl<M, V> FallbackBinders<M, V> {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            writers: BTreeMap::new(),
        }
    }

    /// Registers `writer` for `view_type`, replacing any previous writer.
    pub fn register<F>(&mut self, view_type: ViewType, writer: F)
    where
        F: Fn(&mut V, &M, usize) + 'static,
    {
        self.writers.insert(view_type, Box::new(writer));
    }

    /// Removes the writer for `view_type`. Returns `true` if one was registered.
    pub fn unregister(&mut self, view_type: ViewType) -> bool {
        self.writers.remove(&view_type).is_some()
    }

    /// Returns `true` if a writer is registered for `view_type`.
    #[must_use]
    pub fn contains(&self, view_type: ViewType) -> bool {
        self.writers.contains_key(&view_type)
    }

    /// Runs the writer for `view_type`, if any. Returns `true` if one ran.
    pub fn write(&self, view_type: ViewType, view: &mut V, item: &M, index: usize) -> bool {
        match self.writers.get(&view_type) {
            Some(writer) => {
                writer(view, item, index);
                true
            }
            None => false,
        }
    }
}

impl<M, V> Default for FallbackBinders<M, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M, V> fmt::Debug for FallbackBinders<M, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.writers.keys()).finish()
    }
}

/// Binds `item` into `view`, trying `binder` first and then `fallbacks`.
pub fn bind_item<M, B>(
    binder: &mut B,
    fallbacks: &FallbackBinders<M, B::View>,
    view: &mut B::View,
    item: &M,
    index: usize,
) -> Bound
where
    B: ViewBinder<M>,
{
    if binder.bind_view(view, item, index) {
        return Bound::Primary;
    }
    let view_type = binder.view_type(item, index);
    if fallbacks.write(view_type, view, item, index) {
        Bound::Fallback
    } else {
        Bound::Unhandled
    }
}

impl<M, S: ChangeSink> ItemList<M, S> {
    /// Returns the category code of the item at `index`.
    pub fn view_type<B: ViewBinder<M>>(
        &self,
        index: usize,
        binder: &B,
    ) -> Result<ViewType, ListError> {
        let item = self.get(index).ok_or_else(|| self.out_of_range(index))?;
        Ok(binder.view_type(item, index))
    }

    /// Creates a view suited to the item at `index`.
    pub fn create_view<B: ViewBinder<M>>(
        &self,
        index: usize,
        binder: &mut B,
    ) -> Result<B::View, ListError> {
        let view_type = self.view_type(index, binder)?;
        Ok(binder.create_view(view_type))
    }

    /// Binds the item at `index` into `view`; see [`bind_item`].
    pub fn bind_view<B: ViewBinder<M>>(
        &self,
        index: usize,
        binder: &mut B,
        fallbacks: &FallbackBinders<M, B::View>,
        view: &mut B::View,
    ) -> Result<Bound, ListError> {
        let item = self.get(index).ok_or_else(|| self.out_of_range(index))?;
        Ok(bind_item(binder, fallbacks, view, item, index))
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{Bound, FallbackBinders, ViewBinder, ViewType, bind_item};
    use crate::{ItemList, ListError};

    /// Binds even numbers only; odd numbers are category 1.
    struct EvenOnly {
        created: Vec<ViewType>,
    }

    impl ViewBinder<u32> for EvenOnly {
        type View = Option<u32>;

        fn view_type(&self, item: &u32, _index: usize) -> ViewType {
            item % 2
        }

        fn create_view(&mut self, view_type: ViewType) -> Option<u32> {
            self.created.push(view_type);
            None
        }

        fn bind_view(&mut self, view: &mut Option<u32>, item: &u32, _index: usize) -> bool {
            if item % 2 == 0 {
                *view = Some(*item);
                true
            } else {
                false
            }
        }
    }

    #[test]
    fn fallback_runs_only_when_primary_declines() {
        let mut binder = EvenOnly {
            created: Vec::new(),
        };
        let mut fallbacks = FallbackBinders::new();
        fallbacks.register(1, |view: &mut Option<u32>, item: &u32, index| {
            *view = Some(item * 100 + u32::try_from(index).unwrap());
        });

        let mut view = None;
        assert_eq!(bind_item(&mut binder, &fallbacks, &mut view, &4, 0), Bound::Primary);
        assert_eq!(view, Some(4));
        assert_eq!(bind_item(&mut binder, &fallbacks, &mut view, &3, 2), Bound::Fallback);
        assert_eq!(view, Some(302));
    }

    #[test]
    fn missing_writer_is_unhandled() {
        let mut binder = EvenOnly {
            created: Vec::new(),
        };
        let mut fallbacks: FallbackBinders<u32, Option<u32>> = FallbackBinders::default();
        let mut view = None;
        assert_eq!(bind_item(&mut binder, &fallbacks, &mut view, &5, 0), Bound::Unhandled);
        assert_eq!(view, None);

        fallbacks.register(1, |view, item, _| *view = Some(*item));
        assert!(fallbacks.contains(1));
        assert!(fallbacks.unregister(1));
        assert!(!fallbacks.unregister(1));
        assert_eq!(bind_item(&mut binder, &fallbacks, &mut view, &5, 0), Bound::Unhandled);
    }

    #[test]
    fn list_resolves_items_by_index() {
        let list: ItemList<u32> = ItemList::with_items(vec![2, 7], ());
        let mut binder = EvenOnly {
            created: Vec::new(),
        };
        let fallbacks = FallbackBinders::new();

        assert_eq!(list.view_type(1, &binder), Ok(1));
        let mut view = list.create_view(1, &mut binder).unwrap();
        assert_eq!(binder.created, vec![1]);
        assert_eq!(list.bind_view(0, &mut binder, &fallbacks, &mut view), Ok(Bound::Primary));
        assert_eq!(view, Some(2));

        assert_eq!(
            list.create_view(2, &mut binder),
            Err(ListError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            list.bind_view(5, &mut binder, &fallbacks, &mut view),
            Err(ListError::IndexOutOfRange { index: 5, len: 2 })
        );
    }
}
