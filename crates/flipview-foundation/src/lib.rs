//! Foundation elements for flipview: the scroll-position state machine,
//! the virtualization window, and the adapter contract.
//!
//! A flip view presents one page at a time and renders the transition to an
//! adjacent page as a 3-D card flip. This crate owns the hard part of that:
//! converting a continuous, possibly overscrolled scroll distance into a
//! discrete current page, a flip angle, and a bounded set of at most three
//! materialized child views.
//!
//! # Architecture
//!
//! - [`position`] - pure mapping between scroll distance, page index, and
//!   flip angle
//! - [`ScrollController`] - owns scroll distance, current index, and the
//!   drag/settle state machine
//! - [`VirtualizationWindow`] - reconciles the materialized view set against
//!   the `{previous, current, next}` target window
//! - [`IdentityTracker`] - re-anchors the current page across data-set
//!   mutations using stable item identity
//! - [`FlipAdapter`] - the narrow contract consumed from the data source

pub mod adapter;
pub mod controller;
pub mod error;
pub mod identity;
pub mod position;
pub mod window;

#[cfg(test)]
mod tests;

pub use adapter::{DataSetChange, FlipAdapter};
pub use controller::{
    Orientation, PositionChangeListener, ScrollController, ScrollState, MAX_OVERSCROLL_DISTANCE,
};
pub use error::FlipError;
pub use identity::IdentityTracker;
pub use position::{
    angle_for_distance, distance_for_index, index_for_distance, DISTANCE_PER_POSITION,
};
pub use window::{ChildSize, ViewPool, VirtualizationWindow};
