//! Editing session integration tests

use labelkit_core::ValidationError;
use labelkit_designer::{
    fields, BlobStore, DesignerError, LabelSession, MemoryBlobStore, Point, ResizeHandle,
    StoreError, Template, TemplateStore, DEFAULT_BLOB_KEY,
};
use labelkit_settings::{ColorRef, FontRole, StyleSettings, Theme, ThemePreset};

fn session_with(backend: &MemoryBlobStore) -> LabelSession {
    LabelSession::open(TemplateStore::new(backend.clone(), DEFAULT_BLOB_KEY))
}

fn saved(backend: &MemoryBlobStore) -> Option<labelkit_designer::SessionSnapshot> {
    TemplateStore::new(backend.clone(), DEFAULT_BLOB_KEY).load()
}

#[test]
fn test_starts_with_defaults() {
    let backend = MemoryBlobStore::new();
    let session = session_with(&backend);
    assert_eq!(session.template(), &Template::default());
    assert_eq!(session.style(), &StyleSettings::default());
    assert_eq!(session.rows().len(), 1);
}

#[test]
fn test_drag_persists_only_on_commit() {
    let backend = MemoryBlobStore::new();
    let mut session = session_with(&backend);

    session.begin_drag(fields::PRICE, Point::new(0.0, 0.0)).unwrap();
    session.update_drag(fields::PRICE, Point::new(10.0, 10.0)).unwrap();
    assert!(saved(&backend).is_none());

    session.commit_drag(fields::PRICE).unwrap();
    let snapshot = saved(&backend).unwrap();
    let g = snapshot.template.get(fields::PRICE).unwrap().geometry;
    assert_eq!((g.x, g.y), (110.0, 110.0));
}

#[test]
fn test_cancel_does_not_persist() {
    let backend = MemoryBlobStore::new();
    let mut session = session_with(&backend);
    session
        .begin_resize(fields::PRICE, ResizeHandle::BottomRight, Point::new(0.0, 0.0))
        .unwrap();
    session.update_resize(fields::PRICE, Point::new(20.0, 0.0)).unwrap();
    session.cancel_resize(fields::PRICE).unwrap();
    assert!(saved(&backend).is_none());
    assert_eq!(session.template(), &Template::default());
}

#[test]
fn test_nudge_persists_and_reopens() {
    let backend = MemoryBlobStore::new();
    {
        let mut session = session_with(&backend);
        session.nudge(fields::PERFUME_NAME, 350.0, 0.0).unwrap();
        session.apply_preset(ThemePreset::Rose).unwrap();
    }

    let reopened = session_with(&backend);
    assert_eq!(
        reopened
            .template()
            .get(fields::PERFUME_NAME)
            .unwrap()
            .geometry
            .x,
        220.0
    );
    assert_eq!(
        reopened.style().theme,
        Theme::Preset {
            name: ThemePreset::Rose
        }
    );
}

#[test]
fn test_row_editing() {
    let backend = MemoryBlobStore::new();
    let mut session = session_with(&backend);

    session.set_row_field(0, fields::PERFUME_NAME, "Oud Royal").unwrap();
    session.set_row_field(0, fields::PRICE, "1500").unwrap();

    let err = session.set_row_field(0, fields::PRICE, "15oo").unwrap_err();
    assert!(matches!(
        err,
        DesignerError::Core(labelkit_core::Error::Validation(
            ValidationError::NotDigits { row: 1, .. }
        ))
    ));
    assert_eq!(session.rows()[0].get(fields::PRICE), Some("1500"));

    let index = session.add_row().unwrap();
    assert_eq!(index, 1);
    assert!(session.set_row_field(5, fields::PRICE, "1").is_err());

    session.remove_row(1).unwrap();
    assert_eq!(saved(&backend).unwrap().rows.len(), 1);
}

#[test]
fn test_style_and_options() {
    let backend = MemoryBlobStore::new();
    let mut session = session_with(&backend);

    assert!(session.set_color(ColorRef::BorderColor, "gold").is_err());
    assert!(saved(&backend).is_none());

    session.set_color(ColorRef::BorderColor, "#101010").unwrap();
    assert_eq!(session.style().theme, Theme::Custom);
    assert_eq!(session.set_font_size(FontRole::Price, 3.0).unwrap(), 6.0);
    assert_eq!(session.set_copies(50).unwrap(), 35);
    assert_eq!(session.set_radius_mm(9.0).unwrap(), 8.0);
    assert!(session.set_physical_size(-1.0, 10.0).is_err());

    let snapshot = saved(&backend).unwrap();
    assert_eq!(snapshot.options.copies, 35);
    assert_eq!(snapshot.style.palette.border_color.as_str(), "#101010");
}

#[test]
fn test_build_request_from_session() {
    let backend = MemoryBlobStore::new();
    let mut session = session_with(&backend);
    assert!(session.build_request().is_err());

    session.set_row_field(0, fields::PERFUME_NAME, "Oud Royal").unwrap();
    session.set_shop_name("Maison").unwrap();
    let request = session.build_request().unwrap();
    assert_eq!(
        request.rows[0].entry(fields::SHOP_NAME).unwrap().text,
        "Maison"
    );

    let texts = session.preview(0).unwrap();
    assert_eq!(texts[0].text, "Oud Royal");
    assert!(session.preview(3).is_err());
}

#[test]
fn test_corrupt_blob_falls_back_to_defaults() {
    let mut backend = MemoryBlobStore::new();
    labelkit_designer::BlobStore::write(&mut backend, DEFAULT_BLOB_KEY, "[1, 2, 3]").unwrap();

    let session = session_with(&backend);
    assert_eq!(session.template(), &Template::default());
}

#[test]
fn test_reset() {
    let backend = MemoryBlobStore::new();
    let mut session = session_with(&backend);
    session.nudge(fields::LOGO, 5.0, 5.0).unwrap();
    session.set_row_field(0, fields::PERFUME_NAME, "Musk").unwrap();

    session.reset().unwrap();
    assert!(saved(&backend).is_none());
    assert_eq!(session.template(), &Template::default());
    assert!(session.rows()[0].is_empty());
}

/// Storage whose writes always fail
struct ReadOnlyBlobStore;

impl BlobStore for ReadOnlyBlobStore {
    fn read(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Ok(None)
    }

    fn write(&mut self, key: &str, _data: &str) -> Result<(), StoreError> {
        Err(StoreError::Io {
            path: key.into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        })
    }

    fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
        Ok(())
    }
}

#[test]
fn test_failed_save_keeps_previous_state() {
    let mut session = LabelSession::open(TemplateStore::new(ReadOnlyBlobStore, DEFAULT_BLOB_KEY));

    assert!(matches!(
        session.set_copies(12),
        Err(DesignerError::Store(_))
    ));
    assert_eq!(session.options().copies, 4);

    assert!(session.apply_preset(ThemePreset::Rose).is_err());
    assert_eq!(session.style(), &StyleSettings::default());

    assert!(session.set_row_field(0, fields::PERFUME_NAME, "Oud Royal").is_err());
    assert!(session.rows()[0].is_empty());
    assert!(session.add_row().is_err());
    assert_eq!(session.rows().len(), 1);

    assert!(session.nudge(fields::LOGO, 5.0, 5.0).is_err());
    session.begin_drag(fields::PRICE, Point::new(0.0, 0.0)).unwrap();
    session.update_drag(fields::PRICE, Point::new(10.0, 10.0)).unwrap();
    assert!(session.commit_drag(fields::PRICE).is_err());
    assert!(session.set_element_font_size(fields::PRICE, Some(20.0)).is_err());
    assert_eq!(session.template(), &Template::default());
}
