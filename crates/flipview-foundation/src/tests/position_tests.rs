use crate::position::{
    angle_for_distance, distance_for_index, index_for_distance, DISTANCE_PER_POSITION,
};

#[test]
fn angle_is_always_in_range() {
    for distance in (-720..=720).step_by(37) {
        let angle = angle_for_distance(distance);
        assert!(
            (0..DISTANCE_PER_POSITION).contains(&angle),
            "angle {angle} for distance {distance} is out of [0, 180)"
        );
    }
}

#[test]
fn angle_is_periodic_per_page() {
    for distance in (-400..=400).step_by(23) {
        let base = angle_for_distance(distance);
        for k in -3..=3 {
            assert_eq!(
                angle_for_distance(distance + DISTANCE_PER_POSITION * k),
                base,
                "angle must repeat every page (distance {distance}, k {k})"
            );
        }
    }
}

#[test]
fn angle_examples() {
    assert_eq!(angle_for_distance(0), 0);
    assert_eq!(angle_for_distance(90), 90);
    assert_eq!(angle_for_distance(180), 0);
    assert_eq!(angle_for_distance(190), 10);
    // Negative distances normalize into [0, 180).
    assert_eq!(angle_for_distance(-10), 170);
    assert_eq!(angle_for_distance(-90), 90);
}

#[test]
fn index_rounds_half_away_from_zero() {
    assert_eq!(index_for_distance(89), 0);
    assert_eq!(index_for_distance(90), 1);
    assert_eq!(index_for_distance(269), 1);
    assert_eq!(index_for_distance(270), 2);
    assert_eq!(index_for_distance(-89), 0);
    assert_eq!(index_for_distance(-90), -1);
    assert_eq!(index_for_distance(-270), -2);
}

#[test]
fn round_trip_is_stable_at_page_granularity() {
    for distance in (-600..=600).step_by(17) {
        let index = index_for_distance(distance);
        assert_eq!(
            index_for_distance(distance_for_index(index)),
            index,
            "round trip through distance_for_index must be stable (distance {distance})"
        );
    }
}

#[test]
fn distance_for_index_is_exact_multiple() {
    assert_eq!(distance_for_index(0), 0);
    assert_eq!(distance_for_index(3), 540);
    assert_eq!(distance_for_index(-1), -180);
}
