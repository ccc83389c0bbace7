//! Label template model: canvas, elements and label rows.
//!
//! Coordinates are canvas-local display units with the origin at the top-left
//! corner. Nothing here knows about millimeters or points; conversion happens
//! only when a render request is built.

mod element;
mod row;
mod template;

pub use element::{Element, ElementKind, TextStyle};
pub use row::{fields, LabelRow};
pub use template::{preview, resolve_text, PreviewText, Template};

use labelkit_core::clamp;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset from `origin` to this point.
    pub fn delta_from(&self, origin: &Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }
}

/// Canvas size in display units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::new(400.0, 250.0)
    }
}

/// Position and size of an element relative to the canvas origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Geometry {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Whether every component is finite and the size is strictly positive.
    pub fn is_valid(&self) -> bool {
        [self.x, self.y, self.width, self.height]
            .iter()
            .all(|v| v.is_finite())
            && self.width > 0.0
            && self.height > 0.0
    }

    /// Whether the box lies fully inside `canvas`.
    pub fn is_within(&self, canvas: &CanvasSize) -> bool {
        self.x >= 0.0
            && self.y >= 0.0
            && self.right() <= canvas.width
            && self.bottom() <= canvas.height
    }

    /// Same size with the origin clamped to `[0, canvas - size]`.
    pub fn clamped_to(&self, canvas: &CanvasSize) -> Geometry {
        Geometry {
            x: clamp(self.x, 0.0, (canvas.width - self.width).max(0.0)),
            y: clamp(self.y, 0.0, (canvas.height - self.height).max(0.0)),
            ..*self
        }
    }

    /// Size capped to the canvas, then origin clamped.
    pub fn fitted_to(&self, canvas: &CanvasSize) -> Geometry {
        Geometry {
            width: self.width.min(canvas.width),
            height: self.height.min(canvas.height),
            ..*self
        }
        .clamped_to(canvas)
    }
}
