//! Candidate geometry for drag, resize and nudge.

use super::types::ResizeHandle;
use crate::model::{CanvasSize, Geometry, Point};

/// Smallest width or height a resize may produce
pub const MIN_ELEMENT_SIZE: f64 = 1.0;

/// Translate `start` by `delta`, origin clamped to `[0, canvas - size]`.
pub(crate) fn translated(start: &Geometry, delta: Point, canvas: &CanvasSize) -> Geometry {
    Geometry {
        x: start.x + delta.x,
        y: start.y + delta.y,
        ..*start
    }
    .clamped_to(canvas)
}

/// Move the grabbed corner of `start` by `delta`.
///
/// The opposite corner stays fixed. Each edge is clamped to the canvas and
/// to at least [`MIN_ELEMENT_SIZE`] from the fixed edge.
pub(crate) fn resized(
    start: &Geometry,
    handle: ResizeHandle,
    delta: Point,
    canvas: &CanvasSize,
) -> Geometry {
    let (mut left, mut right) = (start.x, start.right());
    let (mut top, mut bottom) = (start.y, start.bottom());

    if handle.moves_left() {
        left = (left + delta.x).max(0.0).min(right - MIN_ELEMENT_SIZE);
    } else {
        right = (right + delta.x).min(canvas.width).max(left + MIN_ELEMENT_SIZE);
    }

    if handle.moves_top() {
        top = (top + delta.y).max(0.0).min(bottom - MIN_ELEMENT_SIZE);
    } else {
        bottom = (bottom + delta.y).min(canvas.height).max(top + MIN_ELEMENT_SIZE);
    }

    Geometry::new(left, top, right - left, bottom - top).fitted_to(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> CanvasSize {
        CanvasSize::new(400.0, 250.0)
    }

    #[test]
    fn test_translated_clamps_both_axes() {
        let start = Geometry::new(100.0, 20.0, 180.0, 30.0);
        assert_eq!(
            translated(&start, Point::new(350.0, 0.0), &canvas()),
            Geometry::new(220.0, 20.0, 180.0, 30.0)
        );
        assert_eq!(
            translated(&start, Point::new(-500.0, -500.0), &canvas()),
            Geometry::new(0.0, 0.0, 180.0, 30.0)
        );
    }

    #[test]
    fn test_bottom_right_grows_and_stops_at_canvas() {
        let start = Geometry::new(100.0, 20.0, 180.0, 30.0);
        let g = resized(
            &start,
            ResizeHandle::BottomRight,
            Point::new(500.0, 10.0),
            &canvas(),
        );
        assert_eq!(g, Geometry::new(100.0, 20.0, 300.0, 40.0));
    }

    #[test]
    fn test_top_left_moves_origin() {
        let start = Geometry::new(100.0, 20.0, 180.0, 30.0);
        let g = resized(
            &start,
            ResizeHandle::TopLeft,
            Point::new(-20.0, -5.0),
            &canvas(),
        );
        assert_eq!(g, Geometry::new(80.0, 15.0, 200.0, 35.0));
        assert_eq!(g.right(), start.right());
        assert_eq!(g.bottom(), start.bottom());
    }

    #[test]
    fn test_minimum_size() {
        let start = Geometry::new(100.0, 20.0, 180.0, 30.0);
        let g = resized(
            &start,
            ResizeHandle::TopRight,
            Point::new(-1000.0, 1000.0),
            &canvas(),
        );
        assert_eq!(g.width, MIN_ELEMENT_SIZE);
        assert_eq!(g.height, MIN_ELEMENT_SIZE);
        assert_eq!(g.x, 100.0);
        assert_eq!(g.bottom(), 50.0);
    }
}
