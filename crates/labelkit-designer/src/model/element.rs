//! Label elements.

use super::Geometry;
use labelkit_settings::{ColorRef, FontRole};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Image,
    Text,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Image => write!(f, "image"),
            Self::Text => write!(f, "text"),
        }
    }
}

/// Symbolic style of a text element
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Size override in points; the role's global size applies when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    pub color: ColorRef,
    pub font: FontRole,
}

impl TextStyle {
    pub fn new(color: ColorRef, font: FontRole) -> Self {
        Self {
            font_size: None,
            color,
            font,
        }
    }
}

/// One placeable item on a label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: String,
    pub kind: ElementKind,
    pub geometry: Geometry,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<TextStyle>,
    #[serde(default)]
    pub placeholder: String,
    /// Rows must supply a non-empty value for this element
    #[serde(default)]
    pub required: bool,
}

impl Element {
    pub fn image(id: impl Into<String>, geometry: Geometry) -> Self {
        Self {
            id: id.into(),
            kind: ElementKind::Image,
            geometry,
            style: None,
            placeholder: String::new(),
            required: false,
        }
    }

    pub fn text(
        id: impl Into<String>,
        geometry: Geometry,
        style: TextStyle,
        placeholder: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: ElementKind::Text,
            geometry,
            style: Some(style),
            placeholder: placeholder.into(),
            required: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn is_text(&self) -> bool {
        self.kind == ElementKind::Text
    }
}
