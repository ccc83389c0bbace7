//! Unit conversion and input validation
//!
//! Label dimensions are entered in millimeters and sent to the rendering
//! service in PostScript points. All conversions go through [`MM_TO_POINTS`];
//! no other factor may appear anywhere in the workspace.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Points per millimeter (1 pt = 1/72 in, 1 in = 25.4 mm).
pub const MM_TO_POINTS: f64 = 2.83465;

/// A4 page width in points
pub const A4_WIDTH_PT: f64 = 595.28;

/// A4 page height in points
pub const A4_HEIGHT_PT: f64 = 841.89;

/// Allowed number of copies per label row
pub const COPIES_RANGE: (u32, u32) = (1, 35);

/// Allowed corner radius in millimeters
pub const RADIUS_RANGE_MM: (f64, f64) = (0.0, 8.0);

/// Allowed font sizes in points
pub const FONT_SIZE_RANGE: (f64, f64) = (6.0, 72.0);

/// Convert millimeters to points.
pub fn mm_to_points(mm: f64) -> f64 {
    mm * MM_TO_POINTS
}

/// Convert points to millimeters.
pub fn points_to_mm(points: f64) -> f64 {
    points / MM_TO_POINTS
}

/// Clamp `value` into `[min, max]`.
///
/// NaN is mapped to `min` so that a garbage input never leaks into a payload.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    debug_assert!(min <= max, "clamp called with min {min} > max {max}");
    if value.is_nan() {
        return min;
    }
    value.max(min).min(max)
}

/// Clamp a copy count into [`COPIES_RANGE`].
pub fn clamp_copies(copies: u32) -> u32 {
    copies.clamp(COPIES_RANGE.0, COPIES_RANGE.1)
}

/// Clamp a corner radius into [`RADIUS_RANGE_MM`].
pub fn clamp_radius_mm(radius_mm: f64) -> f64 {
    clamp(radius_mm, RADIUS_RANGE_MM.0, RADIUS_RANGE_MM.1)
}

/// Clamp a font size into [`FONT_SIZE_RANGE`].
pub fn clamp_font_size(size: f64) -> f64 {
    clamp(size, FONT_SIZE_RANGE.0, FONT_SIZE_RANGE.1)
}

/// Returns true when `s` contains ASCII digits only.
///
/// The empty string is accepted so an input field can be cleared. Used to
/// gate every edit of price and multiplier fields, not only at submit time.
pub fn digits_only(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Physical label size in millimeters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalSize {
    pub width_mm: f64,
    pub height_mm: f64,
}

impl PhysicalSize {
    pub fn new(width_mm: f64, height_mm: f64) -> Self {
        Self {
            width_mm,
            height_mm,
        }
    }

    /// Both dimensions finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        self.width_mm.is_finite()
            && self.height_mm.is_finite()
            && self.width_mm > 0.0
            && self.height_mm > 0.0
    }

    /// Width and height converted to points.
    pub fn to_points(&self) -> (f64, f64) {
        (mm_to_points(self.width_mm), mm_to_points(self.height_mm))
    }
}

impl Default for PhysicalSize {
    fn default() -> Self {
        Self::new(40.0, 40.0)
    }
}

impl fmt::Display for PhysicalSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} mm", self.width_mm, self.height_mm)
    }
}

/// Printable page, stored in points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSize {
    pub width_pt: f64,
    pub height_pt: f64,
}

impl PageSize {
    /// ISO A4 portrait
    pub const A4: PageSize = PageSize {
        width_pt: A4_WIDTH_PT,
        height_pt: A4_HEIGHT_PT,
    };

    /// Page from millimeter dimensions.
    pub fn from_mm(width_mm: f64, height_mm: f64) -> Self {
        Self {
            width_pt: mm_to_points(width_mm),
            height_pt: mm_to_points(height_mm),
        }
    }

    pub fn width_mm(&self) -> f64 {
        points_to_mm(self.width_pt)
    }

    pub fn height_mm(&self) -> f64 {
        points_to_mm(self.height_pt)
    }

    /// Whether a label footprint given in millimeters fits on this page.
    ///
    /// The comparison happens in points. Non-finite or non-positive label
    /// dimensions never fit.
    pub fn contains_mm(&self, width_mm: f64, height_mm: f64) -> bool {
        if !PhysicalSize::new(width_mm, height_mm).is_valid() {
            return false;
        }
        mm_to_points(width_mm) <= self.width_pt && mm_to_points(height_mm) <= self.height_pt
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::A4
    }
}

/// Whether a `width_mm` x `height_mm` label fits a `page_width_mm` x
/// `page_height_mm` page.
pub fn within_page(width_mm: f64, height_mm: f64, page_width_mm: f64, page_height_mm: f64) -> bool {
    PageSize::from_mm(page_width_mm, page_height_mm).contains_mm(width_mm, height_mm)
}
