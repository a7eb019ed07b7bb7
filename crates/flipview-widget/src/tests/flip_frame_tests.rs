use flipview_foundation::Orientation;

use crate::flip_frame::{
    compose_frame, FlipFrame, OverlayKind, PageSlot, Rect, Rotation, RotationAxis, Viewport,
};

const VIEWPORT: Viewport = Viewport {
    width: 100.0,
    height: 200.0,
};

fn flipping_parts(frame: FlipFrame) -> (crate::HalfLayer, crate::HalfLayer, crate::FlippingLayer) {
    match frame {
        FlipFrame::Flipping {
            near,
            far,
            flipping,
        } => (near, far, flipping),
        other => panic!("expected a flipping frame, got {other:?}"),
    }
}

#[test]
fn no_current_page_composes_an_empty_frame() {
    let frame = compose_frame(Orientation::Vertical, 0, VIEWPORT, true, false);
    assert_eq!(frame, FlipFrame::Empty);
}

#[test]
fn resting_page_aligned_frame_is_static() {
    let frame = compose_frame(Orientation::Vertical, 0, VIEWPORT, false, true);
    assert_eq!(frame, FlipFrame::Static);
}

#[test]
fn first_quarter_vertical_flip() {
    // Angle 45: the top half still shows the outgoing current page, the
    // bottom half shows the incoming next page under a waning shadow, and
    // the current page rotates over the bottom half with a waxing shine.
    let frame = compose_frame(Orientation::Vertical, 45, VIEWPORT, true, true);
    let (near, far, flipping) = flipping_parts(frame);

    assert_eq!(
        near.clip,
        Rect {
            x: 0.0,
            y: 0.0,
            width: 100.0,
            height: 100.0
        }
    );
    assert_eq!(near.source, PageSlot::Current);
    assert_eq!(near.overlay, None);

    assert_eq!(
        far.clip,
        Rect {
            x: 0.0,
            y: 100.0,
            width: 100.0,
            height: 100.0
        }
    );
    assert_eq!(far.source, PageSlot::Next);
    let shadow = far.overlay.expect("far half carries the shadow");
    assert_eq!(shadow.kind, OverlayKind::Shadow);
    assert_eq!(shadow.alpha, 90);

    assert_eq!(flipping.clip, far.clip);
    assert_eq!(flipping.source, PageSlot::Current);
    assert_eq!(
        flipping.rotation,
        Rotation {
            axis: RotationAxis::X,
            degrees: 45.0
        }
    );
    assert_eq!(flipping.overlay.kind, OverlayKind::Shine);
    assert_eq!(flipping.overlay.alpha, 50);
}

#[test]
fn past_halfway_horizontal_flip() {
    // Angle 135: the left half has been uncovered and shows the previous
    // page behind a deepening shadow; the current page rotates over the
    // left half with a fading shade.
    let frame = compose_frame(Orientation::Horizontal, 135, VIEWPORT, true, true);
    let (near, far, flipping) = flipping_parts(frame);

    assert_eq!(
        near.clip,
        Rect {
            x: 0.0,
            y: 0.0,
            width: 50.0,
            height: 200.0
        }
    );
    assert_eq!(near.source, PageSlot::Previous);
    let shadow = near.overlay.expect("near half carries the shadow");
    assert_eq!(shadow.kind, OverlayKind::Shadow);
    assert_eq!(shadow.alpha, 90);

    assert_eq!(
        far.clip,
        Rect {
            x: 50.0,
            y: 0.0,
            width: 50.0,
            height: 200.0
        }
    );
    assert_eq!(far.source, PageSlot::Current);
    assert_eq!(far.overlay, None);

    assert_eq!(flipping.clip, near.clip);
    assert_eq!(
        flipping.rotation,
        Rotation {
            axis: RotationAxis::Y,
            degrees: 45.0
        }
    );
    assert_eq!(flipping.overlay.kind, OverlayKind::Shade);
    assert_eq!(flipping.overlay.alpha, 65);
}

#[test]
fn perpendicular_angle_shows_both_incoming_faces() {
    // At exactly 90 degrees the card is edge-on: both halves already show
    // the post-flip content, no shadow remains, and the rotating half has
    // crossed to the near side under a full-strength shade.
    let frame = compose_frame(Orientation::Vertical, 90, VIEWPORT, true, true);
    let (near, far, flipping) = flipping_parts(frame);

    assert_eq!(near.source, PageSlot::Previous);
    assert_eq!(near.overlay, None);
    assert_eq!(far.source, PageSlot::Current);
    assert_eq!(far.overlay, None);
    assert_eq!(flipping.clip, near.clip);
    assert_eq!(flipping.rotation.degrees, -90.0);
    assert_eq!(flipping.overlay.kind, OverlayKind::Shade);
    assert_eq!(flipping.overlay.alpha, 130);
}

#[test]
fn horizontal_first_quarter_rotates_negative() {
    let frame = compose_frame(Orientation::Horizontal, 30, VIEWPORT, true, true);
    let (_, _, flipping) = flipping_parts(frame);

    assert_eq!(
        flipping.rotation,
        Rotation {
            axis: RotationAxis::Y,
            degrees: -30.0
        }
    );
}
