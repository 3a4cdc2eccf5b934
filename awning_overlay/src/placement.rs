// Copyright 2026 the Awning Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay placement relative to the anchor rectangle.

use kurbo::{Point, Rect};

/// Which side of the anchor the overlay opens toward.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Overlay top edge sits on the anchor's bottom edge.
    Below,
    /// Overlay bottom edge sits on the anchor's top edge.
    Above,
}

/// A computed overlay position, in the same viewport-relative space as the
/// anchor rectangle.
///
/// The host contract attaches the overlay surface at the document/scene root,
/// so these coordinates hold regardless of ancestor clipping or scrolling
/// containers between the anchor and the root.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    /// Top-left corner of the overlay.
    pub origin: Point,
    /// Overlay width; always the anchor's width.
    pub width: f64,
    /// Overlay content extent (height).
    pub extent: f64,
    /// Which way the overlay opened.
    pub side: Side,
}

/// Computes where the overlay goes for the given anchor.
///
/// Default placement opens below the anchor, left-aligned and anchor-wide.
/// When the overlay would reach past the bottom of the viewport
/// (`anchor.y1 + extent >= viewport_height`), it flips to open upward
/// instead. There is no horizontal flip.
///
/// ```
/// use kurbo::Rect;
/// use awning_overlay::{Side, compute_placement};
///
/// let anchor = Rect::new(30.0, 30.0, 230.0, 40.0);
/// let p = compute_placement(anchor, 100.0, 600.0);
/// assert_eq!(p.origin.y, 40.0);
/// assert_eq!(p.origin.x, 30.0);
/// assert_eq!(p.side, Side::Below);
/// ```
#[must_use]
pub fn compute_placement(anchor: Rect, overlay_extent: f64, viewport_height: f64) -> Placement {
    let side = if anchor.y1 + overlay_extent >= viewport_height {
        Side::Above
    } else {
        Side::Below
    };
    let top = match side {
        Side::Below => anchor.y1,
        Side::Above => anchor.y0 - overlay_extent,
    };
    Placement {
        origin: Point::new(anchor.x0, top),
        width: anchor.width(),
        extent: overlay_extent,
        side,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_below_when_there_is_room() {
        let anchor = Rect::new(30.0, 30.0, 230.0, 40.0);
        let p = compute_placement(anchor, 100.0, 768.0);
        assert_eq!(p.origin, Point::new(30.0, 40.0));
        assert_eq!(p.width, 200.0);
        assert_eq!(p.side, Side::Below);
    }

    #[test]
    fn flips_above_when_cropped_by_the_viewport() {
        let viewport_height = 768.0;
        // Anchor hugging the bottom edge: top at viewport_height - 10.
        let anchor = Rect::new(
            30.0,
            viewport_height - 10.0,
            230.0,
            viewport_height,
        );
        let p = compute_placement(anchor, 100.0, viewport_height);
        assert_eq!(p.side, Side::Above);
        assert_eq!(p.origin.y, anchor.y0 - 100.0);
        assert_eq!(p.origin.x, 30.0);
    }

    #[test]
    fn exact_fit_still_flips() {
        // The boundary condition is >=, matching "would touch the edge".
        let anchor = Rect::new(0.0, 0.0, 100.0, 500.0);
        let p = compute_placement(anchor, 100.0, 600.0);
        assert_eq!(p.side, Side::Above);
    }

    #[test]
    fn no_horizontal_flip() {
        // Anchor flush against the right edge: left stays put.
        let anchor = Rect::new(900.0, 10.0, 1100.0, 20.0);
        let p = compute_placement(anchor, 50.0, 768.0);
        assert_eq!(p.origin.x, 900.0);
    }
}
