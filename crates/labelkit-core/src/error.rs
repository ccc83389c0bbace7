//! Error handling for LabelKit
//!
//! Provides the error types shared by every layer of the workspace:
//! - Validation errors (missing or out-of-range input)
//! - Bounds errors (label footprint larger than the page)
//! - Template errors (structural problems in a label template)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Validation error type
///
/// Raised before any network I/O when user input cannot produce a valid
/// render request. The whole action is aborted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Copy count outside the accepted range
    #[error("Copies must be between {min} and {max}, got {copies}")]
    CopiesOutOfRange {
        /// The rejected copy count.
        copies: u32,
        /// Lowest accepted value.
        min: u32,
        /// Highest accepted value.
        max: u32,
    },

    /// A dimension is zero, negative or not a number
    #[error("Invalid {field}: {value}")]
    InvalidDimension {
        /// The dimension name.
        field: String,
        /// The rejected value.
        value: f64,
    },

    /// No label rows were supplied
    #[error("At least one label row is required")]
    NoRows,

    /// A required field of a row is empty
    #[error("Row {row}: '{field}' is required")]
    MissingField {
        /// One-based row number.
        row: usize,
        /// The element id of the empty field.
        field: String,
    },

    /// No shop name in the print options and none on the row
    #[error("Row {row}: a shop name is required")]
    MissingShopName {
        /// One-based row number.
        row: usize,
    },

    /// A numeric-only field contains other characters
    #[error("Row {row}: '{field}' must contain digits only, got '{value}'")]
    NotDigits {
        /// One-based row number.
        row: usize,
        /// The field name.
        field: String,
        /// The rejected value.
        value: String,
    },

    /// Index does not refer to an existing row
    #[error("Row {row} does not exist")]
    UnknownRow {
        /// One-based row number.
        row: usize,
    },
}

/// Bounds error
///
/// The physical label does not fit on the printable page.
#[derive(Error, Debug, Clone, PartialEq)]
#[error(
    "Label {width_mm}x{height_mm} mm exceeds the page; maximum is {max_width_mm:.0}x{max_height_mm:.0} mm"
)]
pub struct BoundsError {
    /// Requested label width.
    pub width_mm: f64,
    /// Requested label height.
    pub height_mm: f64,
    /// Page width.
    pub max_width_mm: f64,
    /// Page height.
    pub max_height_mm: f64,
}

/// Template error type
///
/// Structural problems with a label template or a reference into it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TemplateError {
    /// Two elements share an id
    #[error("Duplicate element id: {0}")]
    DuplicateElementId(String),

    /// No element with this id exists
    #[error("Unknown element: {0}")]
    UnknownElement(String),

    /// Canvas width or height is not a positive number
    #[error("Invalid canvas size {width}x{height}")]
    InvalidCanvas {
        /// Canvas width.
        width: f64,
        /// Canvas height.
        height: f64,
    },

    /// Element size is not a positive number
    #[error("Invalid geometry for element {id}")]
    InvalidGeometry {
        /// The offending element.
        id: String,
    },

    /// Text element has no style
    #[error("Text element {id} has no style")]
    MissingStyle {
        /// The offending element.
        id: String,
    },

    /// Font size override is not a positive number
    #[error("Invalid font size {size} for element {id}")]
    InvalidFontSize {
        /// The offending element.
        id: String,
        /// The rejected size.
        size: f64,
    },
}

/// Main error type for LabelKit
///
/// A unified error type for the model and payload layers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Validation error
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Bounds error
    #[error(transparent)]
    Bounds(#[from] BoundsError),

    /// Template error
    #[error(transparent)]
    Template(#[from] TemplateError),
}

impl Error {
    /// Check if this is a validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Check if this is a bounds error
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Error::Bounds(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::CopiesOutOfRange {
            copies: 36,
            min: 1,
            max: 35,
        };
        assert_eq!(err.to_string(), "Copies must be between 1 and 35, got 36");

        let err = ValidationError::MissingField {
            row: 2,
            field: "perfume_name".to_string(),
        };
        assert_eq!(err.to_string(), "Row 2: 'perfume_name' is required");

        let err = ValidationError::NotDigits {
            row: 1,
            field: "price".to_string(),
            value: "12a".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Row 1: 'price' must contain digits only, got '12a'"
        );
    }

    #[test]
    fn test_template_error_display() {
        let err = TemplateError::InvalidFontSize {
            id: "price".to_string(),
            size: -5.0,
        };
        assert_eq!(err.to_string(), "Invalid font size -5 for element price");

        let err = ValidationError::MissingShopName { row: 3 };
        assert_eq!(err.to_string(), "Row 3: a shop name is required");
    }

    #[test]
    fn test_bounds_error_display() {
        let err = BoundsError {
            width_mm: 250.0,
            height_mm: 40.0,
            max_width_mm: 210.0,
            max_height_mm: 297.0,
        };
        assert_eq!(
            err.to_string(),
            "Label 250x40 mm exceeds the page; maximum is 210x297 mm"
        );
    }

    #[test]
    fn test_error_conversion() {
        let err: Error = ValidationError::NoRows.into();
        assert!(err.is_validation_error());
        assert!(!err.is_bounds_error());

        let err: Error = TemplateError::DuplicateElementId("logo".to_string()).into();
        assert!(matches!(err, Error::Template(_)));
        assert_eq!(err.to_string(), "Duplicate element id: logo");
    }
}
