//! Pure mapping between scroll distance, page index, and flip angle.
//!
//! Scroll distance is measured in abstract units where one whole page equals
//! [`DISTANCE_PER_POSITION`] units. At rest `distance = index * 180`, which
//! makes the flip angle fall out of the distance for free: the remainder of
//! the distance within the current page *is* the rotation in degrees.

/// Scroll distance covered by one whole page.
///
/// Chosen to equal the flip rotation range in degrees so that
/// `angle_for_distance` is a plain remainder.
pub const DISTANCE_PER_POSITION: i32 = 180;

/// Returns the page index nearest to the given scroll distance.
///
/// Uses mathematical rounding (half away from zero), so the index flips to
/// the adjacent page exactly when the rotation passes 90 degrees. The result
/// may be negative or beyond the last page while overscrolled; bounds
/// validation lives in the scroll controller.
pub fn index_for_distance(distance: i32) -> i32 {
    (distance as f32 / DISTANCE_PER_POSITION as f32).round() as i32
}

/// Returns the flip rotation angle for the given scroll distance.
///
/// The result is always in `[0, 180)`: 0 means the current page is fully
/// shown, values near 180 mean the adjacent page is almost fully shown.
/// Negative distances normalize into the same range.
pub fn angle_for_distance(distance: i32) -> i32 {
    ((distance % DISTANCE_PER_POSITION) + DISTANCE_PER_POSITION) % DISTANCE_PER_POSITION
}

/// Returns the at-rest scroll distance for a page index.
pub fn distance_for_index(index: i32) -> i32 {
    index * DISTANCE_PER_POSITION
}
