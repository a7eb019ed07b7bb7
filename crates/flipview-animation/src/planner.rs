//! Smooth-scroll planning: direction, axis vector, and the speed function.

use flipview_foundation::error::FlipError;
use flipview_foundation::position::distance_for_index;
use flipview_foundation::Orientation;

/// Numerator of the fixed speed function, in millisecond-dots-per-inch.
///
/// `BASE_MILLIS_PER_UNIT / density_dpi` milliseconds per distance unit
/// gives a fixed perceived flip duration independent of pixel density.
pub const BASE_MILLIS_PER_UNIT: f32 = 200.0;

/// Baseline density used when the host reports a non-positive density.
const FALLBACK_DENSITY_DPI: f32 = 160.0;

/// Axis-aligned unit vector pointing toward the scroll target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollVector {
    pub x: f32,
    pub y: f32,
}

/// A fully resolved guided scroll: everything the host needs to drive one
/// animated transition.
///
/// A plan is superseded (not cancelled explicitly) by any new drag or any
/// new guided request; the host simply stops feeding its deltas.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothScrollPlan {
    /// The page the scroll is heading to.
    pub target_index: usize,
    /// +1 toward higher indices, -1 toward lower ones.
    pub direction: i32,
    /// Unit vector on the container's scroll axis.
    pub vector: ScrollVector,
    /// Signed distance still to travel, in scroll units.
    pub remaining_distance: i32,
    /// Milliseconds the animation should spend per scroll unit.
    pub millis_per_unit: f32,
    /// Total duration for the remaining distance, rounded up.
    pub duration_ms: u32,
}

/// Resolves a target page into a guided scroll plan.
pub struct SmoothScrollPlanner {
    density_dpi: f32,
}

impl SmoothScrollPlanner {
    pub fn new(density_dpi: f32) -> Self {
        let density_dpi = if density_dpi > 0.0 {
            density_dpi
        } else {
            log::warn!("non-positive density {density_dpi}, falling back to mdpi baseline");
            FALLBACK_DENSITY_DPI
        };

        Self { density_dpi }
    }

    /// Milliseconds per scroll unit for this display density.
    pub fn millis_per_unit(&self) -> f32 {
        BASE_MILLIS_PER_UNIT / self.density_dpi
    }

    /// Plans a guided scroll to `target_index`.
    ///
    /// Direction resolves against the first materialized view: -1 when the
    /// target lies before it, +1 otherwise. Fails with
    /// [`FlipError::IndexOutOfBounds`] for a target outside the data set
    /// and with [`FlipError::EmptyWindow`] when no views are materialized
    /// (a guided animation must never be in flight with zero visible
    /// children).
    pub fn plan(
        &self,
        target_index: usize,
        item_count: usize,
        orientation: Orientation,
        materialized: &[usize],
        scroll_distance: i32,
    ) -> Result<SmoothScrollPlan, FlipError> {
        if target_index >= item_count {
            return Err(FlipError::IndexOutOfBounds {
                index: target_index,
                item_count,
            });
        }

        let Some(&first_materialized) = materialized.first() else {
            return Err(FlipError::EmptyWindow);
        };

        let direction = if target_index < first_materialized {
            -1
        } else {
            1
        };

        let vector = match orientation {
            Orientation::Horizontal => ScrollVector {
                x: direction as f32,
                y: 0.0,
            },
            Orientation::Vertical => ScrollVector {
                x: 0.0,
                y: direction as f32,
            },
        };

        let remaining_distance = distance_for_index(target_index as i32) - scroll_distance;
        let millis_per_unit = self.millis_per_unit();
        let duration_ms = (remaining_distance.unsigned_abs() as f32 * millis_per_unit).ceil() as u32;

        Ok(SmoothScrollPlan {
            target_index,
            direction,
            vector,
            remaining_distance,
            millis_per_unit,
            duration_ms,
        })
    }
}

/// Signed distance from a page's at-rest position to the current scroll
/// distance: how far the view has to travel back to align on `index`.
pub fn settle_delta(scroll_distance: i32, index: usize) -> i32 {
    scroll_distance - distance_for_index(index as i32)
}
