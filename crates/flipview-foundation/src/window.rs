//! Virtualization window: which child views exist at any moment.
//!
//! Regardless of data-set size, a flip view materializes at most three
//! children: the previous, current, and next pages. When the view is idle
//! and page-aligned only the current page is kept, so a resting view is a
//! single full-page render with no flip compositing.
//!
//! Views are acquired from and released to a [`ViewPool`], the recycling
//! collaborator provided by the host. All pages share one fixed size; the
//! decorated size of the first view ever materialized is cached and reused
//! for every later placement.

use smallvec::SmallVec;

/// Decorated size of a materialized child view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChildSize {
    pub width: f32,
    pub height: f32,
}

/// View materialization and recycling contract provided by the host.
pub trait ViewPool {
    /// Handle to a materialized child view.
    type View;

    /// Materializes (or rebinds from the recycle pool) the view for a page.
    fn acquire(&mut self, index: usize) -> Self::View;

    /// Measures the decorated size of a view. Called at most once per
    /// window lifetime; all pages share the first measured size.
    fn measure(&mut self, view: &Self::View) -> ChildSize;

    /// Releases a view back to the recycle pool.
    fn release(&mut self, index: usize, view: Self::View);
}

/// The live set of materialized views, keyed by page index.
///
/// Always a subset of `{current - 1, current, current + 1}` intersected
/// with the valid index range, kept in ascending index order.
pub struct VirtualizationWindow<V> {
    views: SmallVec<[(usize, V); 3]>,
    child_size: Option<ChildSize>,
}

impl<V> Default for VirtualizationWindow<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> VirtualizationWindow<V> {
    pub fn new() -> Self {
        Self {
            views: SmallVec::new(),
            child_size: None,
        }
    }

    /// Reconciles the live view set against the target window.
    ///
    /// `show_neighbors` is true while scrolling or when a settle is
    /// pending; otherwise only the current page is kept. Stale views are
    /// released to the pool before missing ones are acquired, so the pool
    /// can rebind a just-released view.
    pub fn reconcile<P>(
        &mut self,
        pool: &mut P,
        current: Option<usize>,
        item_count: usize,
        show_neighbors: bool,
    ) where
        P: ViewPool<View = V>,
    {
        let target = target_indices(current, item_count, show_neighbors);

        let mut index = 0;
        while index < self.views.len() {
            if target.contains(&self.views[index].0) {
                index += 1;
            } else {
                let (page, view) = self.views.remove(index);
                log::trace!("releasing view for page {page}");
                pool.release(page, view);
            }
        }

        for &page in &target {
            if self.views.iter().any(|(existing, _)| *existing == page) {
                continue;
            }

            let view = pool.acquire(page);
            if self.child_size.is_none() {
                self.child_size = Some(pool.measure(&view));
            }
            self.views.push((page, view));
        }

        self.views.sort_unstable_by_key(|(page, _)| *page);
    }

    /// Releases every materialized view.
    pub fn clear<P>(&mut self, pool: &mut P)
    where
        P: ViewPool<View = V>,
    {
        for (page, view) in self.views.drain(..) {
            pool.release(page, view);
        }
    }

    /// The materialized page indices in ascending order.
    pub fn materialized_indices(&self) -> SmallVec<[usize; 3]> {
        self.views.iter().map(|(page, _)| *page).collect()
    }

    /// The view materialized for a page, if any.
    pub fn view_for(&self, index: usize) -> Option<&V> {
        self.views
            .iter()
            .find(|(page, _)| *page == index)
            .map(|(_, view)| view)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.views.iter().any(|(page, _)| *page == index)
    }

    /// The shared child size measured from the first-ever materialized
    /// view, if one has been materialized yet.
    pub fn child_size(&self) -> Option<ChildSize> {
        self.child_size
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

/// Computes the target window for the given scroll/settle state.
pub fn target_indices(
    current: Option<usize>,
    item_count: usize,
    show_neighbors: bool,
) -> SmallVec<[usize; 3]> {
    let mut target = SmallVec::new();

    let Some(current) = current else {
        return target;
    };
    if item_count == 0 || current >= item_count {
        return target;
    }

    if show_neighbors {
        if let Some(previous) = current.checked_sub(1) {
            target.push(previous);
        }
    }

    target.push(current);

    if show_neighbors && current + 1 < item_count {
        target.push(current + 1);
    }

    target
}
