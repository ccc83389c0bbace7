//! Render request builder
//!
//! Projects a template, its rows and the session style into the document
//! the rendering service consumes. This is the only place where
//! millimeters become points.
//!
//! Validation runs before anything is built and stops at the first
//! violation: copies, label size, page bounds, presence of rows, then each
//! row in order with its text elements in declaration order.

use crate::model::{fields, Element, ElementKind, LabelRow, Template};
use labelkit_core::{
    clamp_font_size, clamp_radius_mm, digits_only, mm_to_points, BoundsError, Result,
    ValidationError, COPIES_RANGE,
};
use labelkit_settings::{PrintOptions, StyleSettings};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Frame of one element in label points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementFrame {
    pub id: String,
    pub kind: ElementKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One resolved text element of one row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextEntry {
    pub id: String,
    pub text: String,
    pub font_family: String,
    pub font_size: f64,
    pub color: String,
    pub is_placeholder: bool,
}

/// One printable row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderRow {
    pub entries: Vec<TextEntry>,
}

impl RenderRow {
    pub fn entry(&self, id: &str) -> Option<&TextEntry> {
        self.entries.iter().find(|e| e.id == id)
    }
}

/// Document sent to the rendering service. All lengths are in points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest {
    pub label_width: f64,
    pub label_height: f64,
    pub radius: f64,
    pub copies: u32,
    pub page_width: f64,
    pub page_height: f64,
    pub border_color: String,
    pub elements: Vec<ElementFrame>,
    pub rows: Vec<RenderRow>,
}

impl RenderRequest {
    /// Total number of labels the request prints.
    pub fn label_count(&self) -> usize {
        self.rows.len() * self.copies as usize
    }
}

/// Build the render request, or fail with the first violation found.
pub fn build_request(
    template: &Template,
    rows: &[LabelRow],
    style: &StyleSettings,
    options: &PrintOptions,
) -> Result<RenderRequest> {
    let (min_copies, max_copies) = COPIES_RANGE;
    if options.copies < min_copies || options.copies > max_copies {
        return Err(ValidationError::CopiesOutOfRange {
            copies: options.copies,
            min: min_copies,
            max: max_copies,
        }
        .into());
    }

    let size = options.physical_size;
    for (field, value) in [("label width", size.width_mm), ("label height", size.height_mm)] {
        if !(value.is_finite() && value > 0.0) {
            return Err(ValidationError::InvalidDimension {
                field: field.to_string(),
                value,
            }
            .into());
        }
    }

    if !options.page.contains_mm(size.width_mm, size.height_mm) {
        return Err(BoundsError {
            width_mm: size.width_mm,
            height_mm: size.height_mm,
            max_width_mm: options.page.width_mm(),
            max_height_mm: options.page.height_mm(),
        }
        .into());
    }

    if rows.is_empty() {
        return Err(ValidationError::NoRows.into());
    }

    if template.element(fields::SHOP_NAME).is_some() && options.shop_name.trim().is_empty() {
        if let Some(index) = rows.iter().position(|row| row.value(fields::SHOP_NAME).is_none()) {
            return Err(ValidationError::MissingShopName { row: index + 1 }.into());
        }
    }

    let render_rows = rows
        .iter()
        .enumerate()
        .map(|(index, row)| build_row(template, index + 1, row, style, options))
        .collect::<Result<Vec<_>>>()?;

    let (label_width, label_height) = size.to_points();
    let canvas = template.canvas();
    let sx = label_width / canvas.width;
    let sy = label_height / canvas.height;

    let elements = template
        .elements()
        .iter()
        .map(|e| ElementFrame {
            id: e.id.clone(),
            kind: e.kind,
            x: e.geometry.x * sx,
            y: e.geometry.y * sy,
            width: e.geometry.width * sx,
            height: e.geometry.height * sy,
        })
        .collect();

    let request = RenderRequest {
        label_width,
        label_height,
        radius: mm_to_points(clamp_radius_mm(options.radius_mm)),
        copies: options.copies,
        page_width: options.page.width_pt,
        page_height: options.page.height_pt,
        border_color: style.palette.border_color.to_string(),
        elements,
        rows: render_rows,
    };

    debug!(
        "Built render request: {} rows x {} copies, {:.2}x{:.2} pt",
        request.rows.len(),
        request.copies,
        request.label_width,
        request.label_height
    );

    Ok(request)
}

fn check_digits(row_number: usize, row: &LabelRow) -> Result<()> {
    for field in fields::NUMERIC {
        if let Some(value) = row.get(field) {
            if !digits_only(value.trim()) {
                return Err(ValidationError::NotDigits {
                    row: row_number,
                    field: field.to_string(),
                    value: value.to_string(),
                }
                .into());
            }
        }
    }
    Ok(())
}

fn build_row(
    template: &Template,
    row_number: usize,
    row: &LabelRow,
    style: &StyleSettings,
    options: &PrintOptions,
) -> Result<RenderRow> {
    let mut digits_checked = false;
    let mut entries = Vec::new();

    for element in template.text_elements() {
        if element.id == fields::PRICE {
            check_digits(row_number, row)?;
            digits_checked = true;
        }

        let (text, is_placeholder) = element_text(element, row, options);
        if element.required && is_placeholder {
            return Err(ValidationError::MissingField {
                row: row_number,
                field: element.id.clone(),
            }
            .into());
        }

        // Text elements always carry a style once inside a Template
        let Some(text_style) = element.style else {
            continue;
        };
        let font = style.font(text_style.font);
        entries.push(TextEntry {
            id: element.id.clone(),
            text,
            font_family: font.family.clone(),
            font_size: clamp_font_size(text_style.font_size.unwrap_or(font.size)),
            color: style.color(text_style.color).to_string(),
            is_placeholder,
        });
    }

    if !digits_checked {
        check_digits(row_number, row)?;
    }

    Ok(RenderRow { entries })
}

/// Concrete text for one element and whether the placeholder was used.
fn element_text(element: &Element, row: &LabelRow, options: &PrintOptions) -> (String, bool) {
    let id = element.id.as_str();
    let value = match id {
        fields::SHOP_NAME => row
            .value(fields::SHOP_NAME)
            .or_else(|| Some(options.shop_name.trim()).filter(|s| !s.is_empty()))
            .map(str::to_string),
        fields::PRICE => row.value(fields::PRICE).map(|price| {
            let currency = options.currency.trim();
            let mut text = if currency.is_empty() {
                price.to_string()
            } else {
                format!("{price} {currency}")
            };
            if let Some(multiplier) = row.value(fields::MULTIPLIER) {
                text.push_str(&format!(" (×{multiplier})"));
            }
            text
        }),
        _ => row.value(id).map(str::to_string),
    };

    match value {
        Some(text) => (text, false),
        None => (element.placeholder.clone(), true),
    }
}
