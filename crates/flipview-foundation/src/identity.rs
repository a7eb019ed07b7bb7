//! Stable-identity tracking across data-set mutations.
//!
//! When items are inserted, removed, or moved, the current page should keep
//! pointing at the same logical item. [`IdentityTracker`] remembers the
//! stable id of the current item and re-resolves its index after each
//! mutation; when the adapter has no stable ids (or the item is truly
//! gone) it falls back to index arithmetic.

use crate::adapter::{DataSetChange, FlipAdapter};

/// Re-anchors the current page index after external data-set mutations.
///
/// The tracker holds the last known stable id of the current item, updated
/// by the container after every accepted index change. Resolution never
/// fails: an identity miss silently degrades to index arithmetic.
#[derive(Debug, Default)]
pub struct IdentityTracker {
    last_known_id: Option<u64>,
}

impl IdentityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the stable id of the current item, if the adapter provides
    /// one. Call after every accepted index change so later mutations can
    /// re-anchor.
    pub fn note_current(&mut self, adapter: &dyn FlipAdapter, current: Option<usize>) {
        self.last_known_id = match current {
            Some(index) if adapter.has_stable_ids() && index < adapter.item_count() => {
                Some(adapter.item_id(index))
            }
            _ => None,
        };
    }

    /// Resolves the new current index after a data-set mutation.
    ///
    /// The adapter must already reflect the post-change state. Returns
    /// `None` when the data set is now empty or no page was current.
    ///
    /// Resolution order:
    /// 1. stable-id lookup of the remembered current item,
    /// 2. index arithmetic on the mutated range,
    /// 3. for a removal covering the current index with no identity:
    ///    `current - 1` clamped to the valid range.
    pub fn resolve(
        &self,
        adapter: &dyn FlipAdapter,
        current: Option<usize>,
        change: &DataSetChange,
    ) -> Option<usize> {
        let item_count = adapter.item_count();
        if item_count == 0 {
            return None;
        }

        let current = current?;

        if let Some(found) = self.find_by_id(adapter) {
            if found != current {
                log::debug!("re-anchored current page by stable id: {current} -> {found}");
            }
            return Some(found);
        }

        let resolved = match *change {
            DataSetChange::Inserted { start, count } => {
                if start <= current {
                    current + count
                } else {
                    current
                }
            }
            DataSetChange::Removed { start, count } => {
                let end = start + count;
                if current < start {
                    current
                } else if current >= end {
                    current - count
                } else {
                    // The current item itself is gone: step back one page.
                    current.saturating_sub(1)
                }
            }
            DataSetChange::Moved { from, to, count } => {
                let end = from + count;
                if current >= from && current < end {
                    current - from + to
                } else if from < to && current >= end && current < to + count {
                    current - count
                } else if to < from && current >= to && current < from {
                    current + count
                } else {
                    current
                }
            }
            // Content-only change: indices are assumed unchanged unless
            // identity resolution said otherwise above.
            DataSetChange::Changed => current,
        };

        Some(resolved.min(item_count - 1))
    }

    fn find_by_id(&self, adapter: &dyn FlipAdapter) -> Option<usize> {
        let id = self.last_known_id?;
        adapter.find_index_by_id(id)
    }
}
