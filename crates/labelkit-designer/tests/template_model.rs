//! Template model integration tests

use labelkit_core::TemplateError;
use labelkit_designer::{
    fields, preview, resolve_text, CanvasSize, Element, Geometry, LabelRow, Template, TextStyle,
};
use labelkit_settings::{ColorRef, FontRole};

fn name_style() -> TextStyle {
    TextStyle::new(ColorRef::PrimaryColor, FontRole::PerfumeName)
}

#[test]
fn test_duplicate_ids_rejected() {
    let elements = vec![
        Element::text("name", Geometry::new(0.0, 0.0, 10.0, 10.0), name_style(), "Name"),
        Element::text("name", Geometry::new(20.0, 0.0, 10.0, 10.0), name_style(), "Name"),
    ];
    let err = Template::new(CanvasSize::new(100.0, 100.0), elements).unwrap_err();
    assert_eq!(err, TemplateError::DuplicateElementId("name".to_string()));
}

#[test]
fn test_invalid_inputs_rejected() {
    let ok = Element::image("logo", Geometry::new(0.0, 0.0, 10.0, 10.0));

    assert!(matches!(
        Template::new(CanvasSize::new(0.0, 100.0), vec![ok.clone()]),
        Err(TemplateError::InvalidCanvas { .. })
    ));

    let flat = Element::image("logo", Geometry::new(0.0, 0.0, 10.0, 0.0));
    assert!(matches!(
        Template::new(CanvasSize::new(100.0, 100.0), vec![flat]),
        Err(TemplateError::InvalidGeometry { .. })
    ));

    let mut unstyled = Element::text("name", Geometry::new(0.0, 0.0, 10.0, 10.0), name_style(), "");
    unstyled.style = None;
    assert!(matches!(
        Template::new(CanvasSize::new(100.0, 100.0), vec![unstyled]),
        Err(TemplateError::MissingStyle { .. })
    ));
}

#[test]
fn test_font_size_override_must_be_positive() {
    for size in [0.0, -5.0, f64::NAN, f64::INFINITY] {
        let mut style = name_style();
        style.font_size = Some(size);
        let element = Element::text("name", Geometry::new(0.0, 0.0, 10.0, 10.0), style, "Name");
        assert!(matches!(
            Template::new(CanvasSize::new(100.0, 100.0), vec![element]),
            Err(TemplateError::InvalidFontSize { .. })
        ));
    }

    let mut template = Template::default();
    template.set_font_size(fields::PRICE, Some(12.0)).unwrap();
    for size in [0.0, -5.0, f64::NAN] {
        assert!(matches!(
            template.set_font_size(fields::PRICE, Some(size)),
            Err(TemplateError::InvalidFontSize { .. })
        ));
    }
    // Rejected sizes leave the previous override in place
    let style = template.get(fields::PRICE).unwrap().style.as_ref().unwrap();
    assert_eq!(style.font_size, Some(12.0));

    template.set_font_size(fields::PRICE, None).unwrap();
    let style = template.get(fields::PRICE).unwrap().style.as_ref().unwrap();
    assert_eq!(style.font_size, None);
}

#[test]
fn test_construction_fits_geometry_into_canvas() {
    let elements = vec![Element::image("logo", Geometry::new(90.0, -5.0, 30.0, 20.0))];
    let template = Template::new(CanvasSize::new(100.0, 50.0), elements).unwrap();
    let g = template.get("logo").unwrap().geometry;
    assert_eq!(g, Geometry::new(70.0, 0.0, 30.0, 20.0));
    assert!(g.is_within(&template.canvas()));
}

#[test]
fn test_resolve_text_prefers_row_value() {
    let template = Template::default();
    let row = LabelRow::new().with(fields::PERFUME_NAME, "Oud Royal");

    assert_eq!(
        resolve_text(&template, &row, fields::PERFUME_NAME).unwrap(),
        "Oud Royal"
    );
    assert_eq!(
        resolve_text(&template, &row, fields::SHOP_NAME).unwrap(),
        "Shop name"
    );
}

#[test]
fn test_resolve_text_blank_value_uses_placeholder() {
    let template = Template::default();
    let row = LabelRow::new().with(fields::PERFUME_NAME, "   ");
    assert_eq!(
        resolve_text(&template, &row, fields::PERFUME_NAME).unwrap(),
        "Perfume name"
    );
}

#[test]
fn test_resolve_text_unknown_element() {
    let template = Template::default();
    assert_eq!(
        resolve_text(&template, &LabelRow::new(), "barcode"),
        Err(TemplateError::UnknownElement("barcode".to_string()))
    );
}

#[test]
fn test_preview_follows_paint_order() {
    let template = Template::default();
    let row = LabelRow::new()
        .with(fields::PERFUME_NAME, "Musk")
        .with(fields::EXTRA_INFO, "100 ml");

    let texts = preview(&template, &row);
    let ids: Vec<_> = texts.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(
        ids,
        [fields::PERFUME_NAME, fields::SHOP_NAME, fields::PRICE, fields::EXTRA_INFO]
    );
    assert!(!texts[0].is_placeholder);
    assert!(texts[1].is_placeholder);
    assert_eq!(texts[3].text, "100 ml");
}

#[test]
fn test_template_json_round_trip() {
    let template = Template::default();
    let json = serde_json::to_string(&template).unwrap();
    let back: Template = serde_json::from_str(&json).unwrap();
    assert_eq!(back, template);
}

#[test]
fn test_deserialization_validates() {
    let json = r#"{
        "canvas": {"width": 100.0, "height": 100.0},
        "elements": [
            {"id": "a", "kind": "image", "geometry": {"x": 0, "y": 0, "width": 10, "height": 10}},
            {"id": "a", "kind": "image", "geometry": {"x": 0, "y": 0, "width": 10, "height": 10}}
        ]
    }"#;
    assert!(serde_json::from_str::<Template>(json).is_err());
}
