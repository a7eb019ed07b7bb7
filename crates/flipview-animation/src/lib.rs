//! Guided scroll planning for flipview.
//!
//! A guided ("smooth") scroll is a single-step animated transition to a
//! target page: the planner resolves the travel direction from the
//! currently materialized views, produces an axis-appropriate unit vector,
//! and fixes the speed/time function. The host container drives the actual
//! frames by feeding deltas back to the scroll controller with the
//! [`Settling`](flipview_foundation::ScrollState::Settling) state.

pub mod planner;


pub use planner::{
    settle_delta, ScrollVector, SmoothScrollPlan, SmoothScrollPlanner, BASE_MILLIS_PER_UNIT,
};
