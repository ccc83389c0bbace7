//! Label template: a canvas and its ordered elements.

use super::{fields, CanvasSize, Element, Geometry, LabelRow, TextStyle};
use labelkit_core::TemplateError;
use labelkit_settings::{ColorRef, FontRole};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Canvas plus elements in paint order
///
/// Constructed only through [`Template::new`], which also runs on
/// deserialization, so every reachable value satisfies the containment
/// invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TemplateData")]
pub struct Template {
    canvas: CanvasSize,
    elements: Vec<Element>,
}

#[derive(Deserialize)]
struct TemplateData {
    canvas: CanvasSize,
    elements: Vec<Element>,
}

impl TryFrom<TemplateData> for Template {
    type Error = TemplateError;

    fn try_from(data: TemplateData) -> Result<Self, Self::Error> {
        Template::new(data.canvas, data.elements)
    }
}

impl Template {
    /// Validate and build a template. Element geometry is fitted into the canvas.
    pub fn new(canvas: CanvasSize, mut elements: Vec<Element>) -> Result<Self, TemplateError> {
        if !canvas.is_valid() {
            return Err(TemplateError::InvalidCanvas {
                width: canvas.width,
                height: canvas.height,
            });
        }

        let mut seen = HashSet::new();
        for element in &mut elements {
            if !seen.insert(element.id.clone()) {
                return Err(TemplateError::DuplicateElementId(element.id.clone()));
            }
            if !element.geometry.is_valid() {
                return Err(TemplateError::InvalidGeometry {
                    id: element.id.clone(),
                });
            }
            if element.is_text() && element.style.is_none() {
                return Err(TemplateError::MissingStyle {
                    id: element.id.clone(),
                });
            }
            if let Some(size) = element.style.as_ref().and_then(|s| s.font_size) {
                check_font_size(&element.id, size)?;
            }
            element.geometry = element.geometry.fitted_to(&canvas);
        }

        Ok(Self { canvas, elements })
    }

    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Element by id, failing with `UnknownElement`.
    pub fn get(&self, id: &str) -> Result<&Element, TemplateError> {
        self.element(id)
            .ok_or_else(|| TemplateError::UnknownElement(id.to_string()))
    }

    pub fn text_elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(|e| e.is_text())
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Element, TemplateError> {
        self.elements
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| TemplateError::UnknownElement(id.to_string()))
    }

    /// Write committed geometry, fitted into the canvas. Returns what was stored.
    pub(crate) fn set_geometry(
        &mut self,
        id: &str,
        geometry: Geometry,
    ) -> Result<Geometry, TemplateError> {
        if !geometry.is_valid() {
            return Err(TemplateError::InvalidGeometry { id: id.to_string() });
        }
        let canvas = self.canvas;
        let element = self.get_mut(id)?;
        element.geometry = geometry.fitted_to(&canvas);
        Ok(element.geometry)
    }

    /// Set or clear the per-element font size override of a text element.
    pub fn set_font_size(&mut self, id: &str, size: Option<f64>) -> Result<(), TemplateError> {
        if let Some(size) = size {
            check_font_size(id, size)?;
        }
        let element = self.get_mut(id)?;
        let style = element
            .style
            .as_mut()
            .ok_or_else(|| TemplateError::MissingStyle { id: id.to_string() })?;
        style.font_size = size;
        Ok(())
    }
}

fn check_font_size(id: &str, size: f64) -> Result<(), TemplateError> {
    if size.is_finite() && size > 0.0 {
        Ok(())
    } else {
        Err(TemplateError::InvalidFontSize {
            id: id.to_string(),
            size,
        })
    }
}

impl Default for Template {
    fn default() -> Self {
        Self {
            canvas: CanvasSize::default(),
            elements: vec![
                Element::image(fields::LOGO, Geometry::new(10.0, 10.0, 60.0, 60.0)),
                Element::text(
                    fields::PERFUME_NAME,
                    Geometry::new(100.0, 20.0, 180.0, 30.0),
                    TextStyle::new(ColorRef::PrimaryColor, FontRole::PerfumeName),
                    "Perfume name",
                )
                .required(),
                Element::text(
                    fields::SHOP_NAME,
                    Geometry::new(100.0, 60.0, 180.0, 24.0),
                    TextStyle::new(ColorRef::ShopNameColor, FontRole::ShopName),
                    "Shop name",
                ),
                Element::text(
                    fields::PRICE,
                    Geometry::new(100.0, 100.0, 180.0, 24.0),
                    TextStyle::new(ColorRef::QuantityColor, FontRole::Price),
                    "Price",
                ),
                Element::text(
                    fields::EXTRA_INFO,
                    Geometry::new(20.0, 200.0, 360.0, 30.0),
                    TextStyle::new(ColorRef::ExtraInfoColor, FontRole::ExtraInfo),
                    "Extra info",
                ),
            ],
        }
    }
}

/// Text shown for `element_id`: the row value when present and non-blank,
/// the element's placeholder otherwise.
pub fn resolve_text<'a>(
    template: &'a Template,
    row: &'a LabelRow,
    element_id: &str,
) -> Result<&'a str, TemplateError> {
    let element = template.get(element_id)?;
    Ok(row
        .value(element_id)
        .unwrap_or(element.placeholder.as_str()))
}

/// Resolved text of one element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewText {
    pub id: String,
    pub text: String,
    pub is_placeholder: bool,
}

/// Resolved text of every text element, in paint order.
pub fn preview(template: &Template, row: &LabelRow) -> Vec<PreviewText> {
    template
        .text_elements()
        .map(|element| match row.value(&element.id) {
            Some(value) => PreviewText {
                id: element.id.clone(),
                text: value.to_string(),
                is_placeholder: false,
            },
            None => PreviewText {
                id: element.id.clone(),
                text: element.placeholder.clone(),
                is_placeholder: true,
            },
        })
        .collect()
}
