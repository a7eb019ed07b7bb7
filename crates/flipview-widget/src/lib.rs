//! The flip view container component.
//!
//! [`FlipView`] is the single concrete owned component tying the
//! foundation pieces together: it owns the scroll controller, the
//! virtualization window, the identity tracker, and the smooth-scroll
//! planner, and exposes three narrow contracts:
//!
//! - the **host contract** ([`FlipView::on_scroll_delta`],
//!   [`FlipView::on_scroll_state_changed`], [`FlipView::scroll_to_index`],
//!   [`FlipView::smooth_scroll_to_index`]),
//! - the **paint-query contract** (current/previous/next index, distance,
//!   angle, scrolling flags), queried once per frame,
//! - the **paint plan** ([`FlipView::frame`]): the clip/rotation/overlay
//!   data a renderer needs to draw the 3-D flip, with no rendering
//!   internals of its own.

pub mod flip_frame;
pub mod flip_view;

#[cfg(test)]
mod tests;

pub use flip_frame::{
    compose_frame, FlipFrame, FlippingLayer, HalfLayer, Overlay, OverlayKind, PageSlot, Rect,
    Rotation, RotationAxis, Viewport, MAX_SHADE_ALPHA, MAX_SHADOW_ALPHA, MAX_SHINE_ALPHA,
};
pub use flip_view::FlipView;

pub use flipview_animation::{ScrollVector, SmoothScrollPlan, SmoothScrollPlanner};
pub use flipview_foundation::{
    ChildSize, DataSetChange, FlipAdapter, FlipError, Orientation, ScrollState, ViewPool,
};
