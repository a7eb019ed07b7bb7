//! The flip view container.
//!
//! [`FlipView`] wires a [`ScrollController`], a [`VirtualizationWindow`],
//! an [`IdentityTracker`], and a [`SmoothScrollPlanner`] behind the narrow
//! surface the host interacts with. The host forwards raw gesture deltas
//! and scroll-state transitions; the container answers with how much it
//! consumed and, once per frame, with the paint plan to draw.

use std::rc::Rc;

use flipview_animation::{SmoothScrollPlan, SmoothScrollPlanner};
use flipview_foundation::{
    ChildSize, DataSetChange, FlipAdapter, FlipError, IdentityTracker, Orientation,
    PositionChangeListener, ScrollController, ScrollState, ViewPool, VirtualizationWindow,
};

use crate::flip_frame::{self, FlipFrame, Viewport};

/// A scrollable container that pages through adapter items with a 3-D
/// flip, materializing at most three child views at a time.
pub struct FlipView<P: ViewPool> {
    pool: P,
    adapter: Option<Rc<dyn FlipAdapter>>,
    controller: ScrollController,
    window: VirtualizationWindow<P::View>,
    tracker: IdentityTracker,
    planner: SmoothScrollPlanner,
    orientation: Orientation,
    viewport: Viewport,
}

impl<P: ViewPool> FlipView<P> {
    /// Creates an empty container. `density_dpi` calibrates the guided
    /// scroll speed to the display.
    pub fn new(pool: P, orientation: Orientation, density_dpi: f32) -> Self {
        Self {
            pool,
            adapter: None,
            controller: ScrollController::new(),
            window: VirtualizationWindow::new(),
            tracker: IdentityTracker::new(),
            planner: SmoothScrollPlanner::new(density_dpi),
            orientation,
            viewport: Viewport {
                width: 0.0,
                height: 0.0,
            },
        }
    }

    /// Updates the drawing area used by the paint plan.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Attaches (or replaces) the adapter. The current page re-anchors to
    /// page 0 of the new data set; an empty adapter clears it.
    pub fn set_adapter(&mut self, adapter: Rc<dyn FlipAdapter>) {
        let item_count = adapter.item_count();
        self.adapter = Some(adapter);
        self.window.clear(&mut self.pool);
        self.controller.apply_data_change(item_count, None);
        self.note_current();
        self.reconcile();
    }

    /// Registers a position-change listener; returns an id for removal.
    pub fn add_position_change_listener(&mut self, listener: PositionChangeListener) -> u64 {
        self.controller.add_position_change_listener(listener)
    }

    /// Removes a previously registered listener.
    pub fn remove_position_change_listener(&mut self, id: u64) {
        self.controller.remove_position_change_listener(id);
    }

    /// Consumes a raw scroll delta from the host gesture pipeline and
    /// returns the portion actually accepted.
    pub fn on_scroll_delta(&mut self, delta: i32) -> i32 {
        let accepted = self.controller.scroll_by(delta);
        if accepted != 0 {
            self.note_current();
            self.reconcile();
        }

        accepted
    }

    /// Records a scroll-state transition reported by the host.
    ///
    /// Entering idle collapses the window back to the current page and,
    /// when the view rests mid-flip, returns the settle plan the host
    /// should animate to page alignment.
    pub fn on_scroll_state_changed(&mut self, state: ScrollState) -> Option<SmoothScrollPlan> {
        let entered_idle = self.controller.set_scroll_state(state);
        if !entered_idle {
            return None;
        }

        self.reconcile();

        if !self.controller.requires_settling() {
            return None;
        }

        let target = self.controller.current_index()?;
        match self.smooth_scroll_to_index(target) {
            Ok(plan) => Some(plan),
            Err(error) => {
                log::warn!("could not plan settle to page {target}: {error}");
                None
            }
        }
    }

    /// Immediate, non-animated jump to the given page. `None` clears the
    /// current page.
    pub fn scroll_to_index(&mut self, target: Option<usize>) -> Result<(), FlipError> {
        self.controller.scroll_to(target)?;
        self.note_current();
        self.reconcile();
        Ok(())
    }

    /// Plans a guided scroll to the given page. The host drives the
    /// returned plan frame by frame, feeding the movement back through
    /// [`on_scroll_delta`](Self::on_scroll_delta).
    pub fn smooth_scroll_to_index(&mut self, target: usize) -> Result<SmoothScrollPlan, FlipError> {
        self.planner.plan(
            target,
            self.controller.item_count(),
            self.orientation,
            &self.window.materialized_indices(),
            self.controller.scroll_distance(),
        )
    }

    /// Applies an external data-set mutation.
    ///
    /// The adapter must already reflect the post-change state. The current
    /// page re-anchors by stable id when the adapter provides ids, by index
    /// arithmetic otherwise, with at most one net position-change event.
    pub fn notify_data_set_changed(&mut self, change: DataSetChange) {
        let Some(adapter) = self.adapter.clone() else {
            return;
        };

        let resolved =
            self.tracker
                .resolve(adapter.as_ref(), self.controller.current_index(), &change);
        self.controller
            .apply_data_change(adapter.item_count(), resolved);
        self.note_current();
        self.reconcile();
    }

    /// Composes the paint plan for the current frame.
    pub fn frame(&self) -> FlipFrame {
        let has_current = self
            .controller
            .current_index()
            .is_some_and(|index| self.window.contains(index));

        flip_frame::compose_frame(
            self.orientation,
            self.controller.angle(),
            self.viewport,
            self.mid_flip(),
            has_current,
        )
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn current_index(&self) -> Option<usize> {
        self.controller.current_index()
    }

    pub fn previous_index(&self) -> Option<usize> {
        self.controller.previous_index()
    }

    pub fn next_index(&self) -> Option<usize> {
        self.controller.next_index()
    }

    pub fn item_count(&self) -> usize {
        self.controller.item_count()
    }

    pub fn scroll_distance(&self) -> i32 {
        self.controller.scroll_distance()
    }

    /// The flip rotation angle in `[0, 180)`.
    pub fn angle(&self) -> i32 {
        self.controller.angle()
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.controller.scroll_state()
    }

    pub fn is_scrolling(&self) -> bool {
        self.controller.is_scrolling()
    }

    pub fn is_interactive_scroll(&self) -> bool {
        self.controller.is_interactive_scroll()
    }

    pub fn requires_settling(&self) -> bool {
        self.controller.requires_settling()
    }

    /// The materialized page indices in ascending order.
    pub fn materialized_indices(&self) -> smallvec::SmallVec<[usize; 3]> {
        self.window.materialized_indices()
    }

    /// The view materialized for a page, if any.
    pub fn view_for(&self, index: usize) -> Option<&P::View> {
        self.window.view_for(index)
    }

    /// The shared child size measured from the first materialized view.
    pub fn child_size(&self) -> Option<ChildSize> {
        self.window.child_size()
    }

    /// The host-provided view pool. The container owns the pool for its
    /// lifetime; this gives the host back read access, e.g. to inspect
    /// recycle traffic.
    pub fn pool(&self) -> &P {
        &self.pool
    }

    fn mid_flip(&self) -> bool {
        self.controller.is_scrolling() || self.controller.requires_settling()
    }

    fn note_current(&mut self) {
        if let Some(adapter) = &self.adapter {
            self.tracker
                .note_current(adapter.as_ref(), self.controller.current_index());
        }
    }

    fn reconcile(&mut self) {
        let show_neighbors = self.mid_flip();
        self.window.reconcile(
            &mut self.pool,
            self.controller.current_index(),
            self.controller.item_count(),
            show_neighbors,
        );
    }
}
