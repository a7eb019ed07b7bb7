//! Adapter contract consumed from the data source.
//!
//! The core only needs a narrow slice of the data source: how many items
//! exist, whether items carry stable identity, and an id lookup. View
//! materialization goes through the separate [`ViewPool`](crate::ViewPool)
//! contract so that adapters stay pure data.

/// Provides item count and stable identity for the pages shown by a flip
/// view.
///
/// Implementations should be cheap to query; `item_count` and `item_id` are
/// called on every data-set mutation and on every accepted scroll that
/// changes the current page.
pub trait FlipAdapter {
    /// The total number of items.
    fn item_count(&self) -> usize;

    /// Whether [`item_id`](Self::item_id) returns identity that survives
    /// reordering and removal. Defaults to `false`.
    fn has_stable_ids(&self) -> bool {
        false
    }

    /// Returns the stable id for the item at `index`.
    ///
    /// Only meaningful when [`has_stable_ids`](Self::has_stable_ids) is
    /// true. The default maps every item to its own index.
    fn item_id(&self, index: usize) -> u64 {
        index as u64
    }

    /// Finds the current index of the item with the given stable id.
    ///
    /// Returns `None` when the adapter has no stable ids or the id is gone.
    /// The default implementation is a linear scan; adapters with an index
    /// structure can override it.
    fn find_index_by_id(&self, id: u64) -> Option<usize> {
        if !self.has_stable_ids() {
            return None;
        }

        (0..self.item_count()).find(|&index| self.item_id(index) == id)
    }
}

/// A data-set mutation reported by the host after the adapter contents
/// changed.
///
/// Ranges use the pre-change indices for `Removed` and `Moved` sources; the
/// adapter itself must already reflect the post-change state when the
/// notification is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSetChange {
    /// `count` items were inserted starting at `start`.
    Inserted { start: usize, count: usize },
    /// `count` items were removed starting at `start`.
    Removed { start: usize, count: usize },
    /// A block of `count` items moved from `from` to `to`.
    Moved { from: usize, to: usize, count: usize },
    /// Item contents changed without any index shift.
    Changed,
}
