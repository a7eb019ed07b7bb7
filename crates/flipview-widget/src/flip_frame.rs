//! Per-frame paint plan for the 3-D flip.
//!
//! The renderer queries the container once per frame and receives a
//! [`FlipFrame`]: pure data describing what to clip, which page to source
//! into each half, how far to rotate the flipping half, and how strong the
//! shadow/shade/shine overlays are. Executing the plan (camera transform,
//! actual clipping, blending) is entirely the renderer's business.
//!
//! The viewport splits into two halves along the scroll axis. The half the
//! flip rotates *away from* shows the outgoing page; the other half shows
//! the incoming page behind the rotating current page.

use flipview_foundation::Orientation;

/// Peak alpha of the shadow drawn over the half being covered.
pub const MAX_SHADOW_ALPHA: u8 = 180;

/// Peak alpha of the shade over the flipping half from 90 degrees onward.
pub const MAX_SHADE_ALPHA: u8 = 130;

/// Peak alpha of the shine over the flipping half before 90 degrees.
pub const MAX_SHINE_ALPHA: u8 = 100;

/// Axis-aligned rectangle in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Size of the container's drawing area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

/// Which materialized page a layer sources its pixels from.
///
/// The renderer skips a layer whose slot has no materialized view (the
/// previous/next page may not exist at the data-set edges).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    Previous,
    Current,
    Next,
}

/// Rotation axis of the flipping half: `X` for vertical scrolling, `Y`
/// for horizontal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationAxis {
    X,
    Y,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    pub axis: RotationAxis,
    pub degrees: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    Shadow,
    Shade,
    Shine,
}

/// A translucent black (shadow/shade) or white (shine) fill over a layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlay {
    pub kind: OverlayKind,
    pub alpha: u8,
}

/// One of the two non-rotating halves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfLayer {
    pub clip: Rect,
    pub source: PageSlot,
    pub overlay: Option<Overlay>,
}

/// The rotating half, always sourced from the current page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlippingLayer {
    pub clip: Rect,
    pub source: PageSlot,
    pub rotation: Rotation,
    pub overlay: Overlay,
}

/// Everything the renderer draws for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlipFrame {
    /// No current page; draw nothing.
    Empty,
    /// Idle and page-aligned: draw the current page full-size, no flip
    /// compositing.
    Static,
    /// Mid-flip: draw `near`, then `far`, then the rotating half on top.
    Flipping {
        near: HalfLayer,
        far: HalfLayer,
        flipping: FlippingLayer,
    },
}

/// Composes the paint plan for one frame.
///
/// `mid_flip` is true while scrolling or when a settle is pending;
/// `has_current` is true when the current page has a materialized view.
/// `angle` is the flip rotation in `[0, 180)`.
pub fn compose_frame(
    orientation: Orientation,
    angle: i32,
    viewport: Viewport,
    mid_flip: bool,
    has_current: bool,
) -> FlipFrame {
    if !has_current {
        return FlipFrame::Empty;
    }

    if !mid_flip {
        return FlipFrame::Static;
    }

    let (near_clip, far_clip) = half_rects(orientation, viewport);

    // Once the rotation passes 90 degrees the outgoing page has turned
    // away: the near half reveals the previous page and the current page
    // becomes the incoming face of the far half.
    let near = HalfLayer {
        clip: near_clip,
        source: if angle >= 90 {
            PageSlot::Previous
        } else {
            PageSlot::Current
        },
        overlay: (angle > 90).then(|| Overlay {
            kind: OverlayKind::Shadow,
            alpha: scaled_alpha(angle - 90, MAX_SHADOW_ALPHA),
        }),
    };

    let far = HalfLayer {
        clip: far_clip,
        source: if angle >= 90 {
            PageSlot::Current
        } else {
            PageSlot::Next
        },
        overlay: (angle < 90).then(|| Overlay {
            kind: OverlayKind::Shadow,
            alpha: scaled_alpha(90 - angle, MAX_SHADOW_ALPHA),
        }),
    };

    let axis = match orientation {
        Orientation::Vertical => RotationAxis::X,
        Orientation::Horizontal => RotationAxis::Y,
    };

    // At 90 and beyond the rotating half sits over the near half and
    // carries the shade; below 90 it sits over the far half with the shine.
    let flipping = if angle >= 90 {
        FlippingLayer {
            clip: near_clip,
            source: PageSlot::Current,
            rotation: Rotation {
                axis,
                degrees: match orientation {
                    Orientation::Vertical => (angle - 180) as f32,
                    Orientation::Horizontal => (180 - angle) as f32,
                },
            },
            overlay: Overlay {
                kind: OverlayKind::Shade,
                alpha: scaled_alpha(180 - angle, MAX_SHADE_ALPHA),
            },
        }
    } else {
        FlippingLayer {
            clip: far_clip,
            source: PageSlot::Current,
            rotation: Rotation {
                axis,
                degrees: match orientation {
                    Orientation::Vertical => angle as f32,
                    Orientation::Horizontal => -angle as f32,
                },
            },
            overlay: Overlay {
                kind: OverlayKind::Shine,
                alpha: scaled_alpha(angle, MAX_SHINE_ALPHA),
            },
        }
    };

    FlipFrame::Flipping {
        near,
        far,
        flipping,
    }
}

/// Splits the viewport into the two flip halves along the scroll axis.
fn half_rects(orientation: Orientation, viewport: Viewport) -> (Rect, Rect) {
    match orientation {
        Orientation::Vertical => {
            let half = viewport.height / 2.0;
            (
                Rect {
                    x: 0.0,
                    y: 0.0,
                    width: viewport.width,
                    height: half,
                },
                Rect {
                    x: 0.0,
                    y: half,
                    width: viewport.width,
                    height: half,
                },
            )
        }
        Orientation::Horizontal => {
            let half = viewport.width / 2.0;
            (
                Rect {
                    x: 0.0,
                    y: 0.0,
                    width: half,
                    height: viewport.height,
                },
                Rect {
                    x: half,
                    y: 0.0,
                    width: half,
                    height: viewport.height,
                },
            )
        }
    }
}

/// Scales `degrees` out of a 90-degree quarter into an alpha value.
fn scaled_alpha(degrees: i32, max: u8) -> u8 {
    ((degrees as f32 / 90.0) * max as f32) as u8
}
