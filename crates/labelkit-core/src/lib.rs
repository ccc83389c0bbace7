//! # LabelKit Core
//!
//! Core types and utilities for LabelKit.
//! Provides unit conversion, input validation and the error types shared by
//! the settings, designer and communication crates.

pub mod error;
pub mod units;

pub use error::{BoundsError, Error, Result, TemplateError, ValidationError};

pub use units::{
    clamp, clamp_copies, clamp_font_size, clamp_radius_mm, digits_only, mm_to_points,
    points_to_mm, within_page, PageSize, PhysicalSize, COPIES_RANGE, FONT_SIZE_RANGE,
    MM_TO_POINTS, RADIUS_RANGE_MM,
};
