//! The scroll-position state machine.
//!
//! [`ScrollController`] owns the scroll distance, the current page index,
//! and the drag bookkeeping for a flip view. It consumes raw scroll deltas
//! from the host container and returns the portion actually accepted, so the
//! host never advances its own offset by more than the controller moved.
//!
//! All state transitions are synchronous: within one [`scroll_by`] call the
//! distance/index update happens before the position-change notification,
//! which happens before the caller reconciles the virtualization window.
//!
//! [`scroll_by`]: ScrollController::scroll_by

use std::rc::Rc;

use crate::error::FlipError;
use crate::position::{self, DISTANCE_PER_POSITION};

/// Axis of travel for the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Scroll state reported by the host container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollState {
    /// No scroll in progress. Distance is page-aligned or a settle is
    /// pending.
    Idle,
    /// The user is interactively dragging; damping and the drag-window
    /// clamp apply.
    Dragging,
    /// A guided (programmatic) scroll animation is in flight.
    Settling,
}

/// Extra distance permitted beyond the first/last page while dragging
/// before further movement is rejected outright.
pub const MAX_OVERSCROLL_DISTANCE: i32 = 70;

/// Damping factor applied to interactive deltas so a flip tracks slower
/// than raw touch movement.
const INTERACTIVE_SCROLL_SPEED: f32 = 0.5;

/// Listener invoked with the new current index after every accepted index
/// change. `None` means the data set became empty or the page was cleared.
pub type PositionChangeListener = Rc<dyn Fn(Option<usize>)>;

/// Scroll-position state machine for a flip view.
///
/// The controller is an explicitly owned struct: the container component
/// holds exactly one instance for its lifetime and every mutation goes
/// through `&mut self`. There is no interior mutability and no global
/// state.
///
/// # Invariants
///
/// - `current_index()` is `None` iff the item count is 0 (until an explicit
///   [`scroll_to`](Self::scroll_to) clear, which the next data-set update
///   re-anchors).
/// - `index == round(distance / 180)` after every accepted scroll.
/// - A position-change notification fires exactly once per distinct
///   (old, new) index transition, never when old == new. The lazy first
///   anchor of a previously empty view is silent.
pub struct ScrollController {
    item_count: usize,
    scroll_distance: i32,
    current: Option<usize>,
    scroll_state: ScrollState,
    /// Index in effect when the active drag started. Captured on the first
    /// nonzero delta of the drag, cleared when the drag ends.
    drag_anchor: Option<i32>,
    /// Direction lock for the active drag: +1 forward, -1 backward, 0 not
    /// yet locked.
    drag_vector: i32,
    listeners: Vec<(u64, PositionChangeListener)>,
    next_listener_id: u64,
}

impl Default for ScrollController {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollController {
    /// Creates a controller for an empty data set.
    pub fn new() -> Self {
        Self {
            item_count: 0,
            scroll_distance: 0,
            current: None,
            scroll_state: ScrollState::Idle,
            drag_anchor: None,
            drag_vector: 0,
            listeners: Vec::new(),
            next_listener_id: 1,
        }
    }

    /// Consumes a raw scroll delta from the host and returns the portion
    /// actually accepted (after interactive damping).
    ///
    /// The delta is rejected entirely (returns 0) when:
    /// - the data set is empty,
    /// - the nearest page to the desired distance falls outside the data
    ///   set,
    /// - the desired distance exceeds the data-set bounds by more than
    ///   [`MAX_OVERSCROLL_DISTANCE`].
    ///
    /// While dragging, movement is additionally clamped to one page around
    /// the drag anchor in the locked direction; a delta that would cross
    /// the window boundary is partially accepted up to the boundary.
    pub fn scroll_by(&mut self, delta: i32) -> i32 {
        if self.item_count == 0 || delta == 0 {
            return 0;
        }

        let scaled = if self.is_interactive_scroll() {
            damp_interactive(delta)
        } else {
            delta
        };

        let desired_distance = self.scroll_distance + scaled;

        let desired_index = position::index_for_distance(desired_distance);
        if desired_index < 0 || desired_index >= self.item_count as i32 {
            log::trace!(
                "rejecting delta {delta}: nearest page {desired_index} is out of bounds"
            );
            return 0;
        }

        if self.scroll_state == ScrollState::Dragging {
            if self.drag_anchor.is_none() {
                self.drag_anchor = Some(self.current.unwrap_or(0) as i32);
            }
            if self.drag_vector == 0 {
                self.drag_vector = scaled.signum();
            }
        }

        let max_distance = (self.item_count as i32 - 1) * DISTANCE_PER_POSITION;
        if desired_distance < -MAX_OVERSCROLL_DISTANCE
            || desired_distance > max_distance + MAX_OVERSCROLL_DISTANCE
        {
            log::trace!("rejecting delta {delta}: beyond overscroll slack");
            return 0;
        }

        let mut accepted = scaled;
        if self.scroll_state == ScrollState::Dragging {
            // One page at a time: restrict movement to the page boundary
            // adjacent to the anchor in the locked direction. Deltas that
            // cross the boundary are accepted up to it.
            let anchor = self.drag_anchor.unwrap_or(0);
            let (window_min, window_max) = if self.drag_vector > 0 {
                (
                    anchor * DISTANCE_PER_POSITION,
                    (anchor + 1) * DISTANCE_PER_POSITION,
                )
            } else {
                (
                    (anchor - 1) * DISTANCE_PER_POSITION,
                    anchor * DISTANCE_PER_POSITION,
                )
            };

            let clamped = desired_distance.clamp(window_min, window_max);
            accepted = clamped - self.scroll_distance;
            if accepted == 0 {
                return 0;
            }
        }

        self.scroll_distance += accepted;

        let new_index = position::index_for_distance(self.scroll_distance);
        debug_assert!(new_index >= 0 && (new_index as usize) < self.item_count);

        let old = self.current;
        self.current = Some(new_index as usize);
        if old != self.current {
            self.notify_position_change();
        }

        accepted
    }

    /// Records a scroll-state transition reported by the host.
    ///
    /// Returns `true` when the controller entered idle from a non-idle
    /// state; the caller must run a reconciliation pass then, because the
    /// window may need to collapse from three materialized views to one.
    /// Leaving [`ScrollState::Dragging`] clears the drag anchor and
    /// direction lock unconditionally.
    pub fn set_scroll_state(&mut self, state: ScrollState) -> bool {
        let previous = self.scroll_state;
        self.scroll_state = state;

        if previous == ScrollState::Dragging && state != ScrollState::Dragging {
            self.drag_anchor = None;
            self.drag_vector = 0;
        }

        state == ScrollState::Idle && previous != ScrollState::Idle
    }

    /// Immediate, non-animated jump to the given page.
    ///
    /// `None` clears the current page (the next data-set update re-anchors
    /// to page 0). A `Some` index outside `[0, item_count)` fails with
    /// [`FlipError::IndexOutOfBounds`].
    pub fn scroll_to(&mut self, target: Option<usize>) -> Result<(), FlipError> {
        if let Some(index) = target {
            if index >= self.item_count {
                return Err(FlipError::IndexOutOfBounds {
                    index,
                    item_count: self.item_count,
                });
            }
        }

        self.set_current(target);
        Ok(())
    }

    /// Updates the item count and re-anchors the current page.
    ///
    /// A zero count resets to (index `None`, distance 0). A current index
    /// that fell off the end clamps to the last page with a single
    /// notification. Transitioning from empty to non-empty anchors to page
    /// 0 silently.
    pub fn set_item_count(&mut self, count: usize) {
        let current = self.current;
        self.apply_data_change(count, current);
    }

    /// Applies a data-set mutation: new item count plus the re-anchored
    /// index resolved by the identity tracker.
    ///
    /// This is a silent jump, not an animation: distance snaps to the
    /// page-aligned value and exactly one net position-change event fires
    /// when the index actually changed. The very first anchor of a
    /// previously empty view is lazy and fires no notification.
    pub fn apply_data_change(&mut self, item_count: usize, new_index: Option<usize>) {
        self.item_count = item_count;

        if item_count == 0 {
            self.scroll_distance = 0;
            if self.current.is_some() {
                self.current = None;
                self.notify_position_change();
            }
            return;
        }

        let target = new_index.map(|index| index.min(item_count - 1)).or(Some(0));

        if self.current.is_none() {
            // First anchor: no page was current, so there is no transition
            // to report.
            self.current = target;
            self.scroll_distance =
                target.map_or(0, |index| position::distance_for_index(index as i32));
            return;
        }

        self.set_current(target);
    }

    /// Registers a position-change listener; returns an id for removal.
    pub fn add_position_change_listener(&mut self, listener: PositionChangeListener) -> u64 {
        let id = self.next_listener_id;
        self.next_listener_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Removes a previously registered listener.
    pub fn remove_position_change_listener(&mut self, id: u64) {
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
    }

    /// The index of the current page, `None` when the data set is empty.
    pub fn current_index(&self) -> Option<usize> {
        if self.item_count == 0 {
            return None;
        }

        self.current
    }

    /// The index of the page before the current one, if any.
    pub fn previous_index(&self) -> Option<usize> {
        self.current_index()?.checked_sub(1)
    }

    /// The index of the page after the current one, if any.
    pub fn next_index(&self) -> Option<usize> {
        let next = self.current_index()? + 1;
        (next < self.item_count).then_some(next)
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn scroll_distance(&self) -> i32 {
        self.scroll_distance
    }

    /// The flip rotation angle in `[0, 180)` for the current distance.
    pub fn angle(&self) -> i32 {
        position::angle_for_distance(self.scroll_distance)
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.scroll_state
    }

    pub fn is_scrolling(&self) -> bool {
        self.scroll_state != ScrollState::Idle
    }

    pub fn is_interactive_scroll(&self) -> bool {
        self.scroll_state == ScrollState::Dragging
    }

    /// True when the view is resting mid-flip: idle queries see a distance
    /// that is not an exact page multiple and must nudge it to the nearest
    /// page.
    pub fn requires_settling(&self) -> bool {
        self.scroll_distance % DISTANCE_PER_POSITION != 0
    }

    /// Sets the current page, snapping the distance to the page-aligned
    /// value and notifying listeners. No-op when the index is unchanged.
    fn set_current(&mut self, target: Option<usize>) {
        if target == self.current {
            return;
        }

        self.current = target;
        self.scroll_distance = target.map_or(0, |index| position::distance_for_index(index as i32));
        self.notify_position_change();
    }

    fn notify_position_change(&self) {
        log::debug!("position changed to {:?}", self.current);
        for (_, listener) in &self.listeners {
            listener(self.current);
        }
    }
}

/// Scales an interactive delta by the damping factor, with a floor of
/// magnitude 1 in the direction of travel so a nonzero delta never rounds
/// to zero.
fn damp_interactive(delta: i32) -> i32 {
    let scaled = delta as f32 * INTERACTIVE_SCROLL_SPEED;
    if delta > 0 {
        scaled.max(1.0) as i32
    } else {
        scaled.min(-1.0) as i32
    }
}
