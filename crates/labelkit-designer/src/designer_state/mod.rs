//! Editing session state.
//!
//! `LabelSession` is the single owner of the template, style settings, print
//! options and rows. Every committed mutation is persisted through the
//! [`TemplateStore`]; provisional drag and resize updates are not.
//!
//! This module is split into submodules:
//! - `layout`: drag, resize and nudge
//! - `style`: palette, fonts and print options
//! - `rows`: label row editing

mod layout;
mod rows;
mod style;

use crate::canvas::LayoutEditor;
use crate::error::DesignerResult;
use crate::model::{preview, LabelRow, PreviewText, Template};
use crate::payload::{build_request, RenderRequest};
use crate::store::TemplateStore;
use labelkit_core::ValidationError;
use labelkit_settings::{PrintOptions, StyleSettings};
use tracing::{info, warn};

/// State to return to when an edit cannot be persisted
struct Checkpoint {
    template: Template,
    style: StyleSettings,
    options: PrintOptions,
    rows: Vec<LabelRow>,
}

/// Session-scoped owner of all editable label state
#[derive(Debug)]
pub struct LabelSession {
    editor: LayoutEditor,
    style: StyleSettings,
    options: PrintOptions,
    rows: Vec<LabelRow>,
    store: TemplateStore,
}

impl LabelSession {
    /// Restore the last saved session, or start from defaults.
    pub fn open(store: TemplateStore) -> Self {
        match store.load() {
            Some(snapshot) => Self {
                editor: LayoutEditor::new(snapshot.template),
                style: snapshot.style,
                options: snapshot.options,
                rows: snapshot.rows,
                store,
            },
            None => {
                info!("Starting with the default label layout");
                Self::with_defaults(store)
            }
        }
    }

    /// Default state, ignoring anything saved.
    pub fn with_defaults(store: TemplateStore) -> Self {
        Self {
            editor: LayoutEditor::new(Template::default()),
            style: StyleSettings::default(),
            options: PrintOptions::default(),
            rows: vec![LabelRow::new()],
            store,
        }
    }

    pub fn template(&self) -> &Template {
        self.editor.template()
    }

    pub fn editor(&self) -> &LayoutEditor {
        &self.editor
    }

    pub fn style(&self) -> &StyleSettings {
        &self.style
    }

    pub fn options(&self) -> &PrintOptions {
        &self.options
    }

    pub fn rows(&self) -> &[LabelRow] {
        &self.rows
    }

    /// Persist the current state.
    pub fn save(&mut self) -> DesignerResult<()> {
        self.store.save(
            self.editor.template(),
            &self.style,
            &self.options,
            &self.rows,
        )?;
        Ok(())
    }

    fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            template: self.editor.template().clone(),
            style: self.style.clone(),
            options: self.options.clone(),
            rows: self.rows.clone(),
        }
    }

    fn rollback(&mut self, checkpoint: Checkpoint) {
        self.editor.restore_template(checkpoint.template);
        self.style = checkpoint.style;
        self.options = checkpoint.options;
        self.rows = checkpoint.rows;
    }

    /// Save, or roll back to `checkpoint` if the write fails.
    fn persist(&mut self, checkpoint: Checkpoint) -> DesignerResult<()> {
        if let Err(e) = self.save() {
            warn!("Save failed, edit reverted: {}", e);
            self.rollback(checkpoint);
            return Err(e);
        }
        Ok(())
    }

    /// Run an edit and persist it. A rejected edit or a failed save leaves
    /// the session as it was.
    fn transact<T>(
        &mut self,
        edit: impl FnOnce(&mut Self) -> DesignerResult<T>,
    ) -> DesignerResult<T> {
        let checkpoint = self.checkpoint();
        match edit(self) {
            Ok(value) => {
                self.persist(checkpoint)?;
                Ok(value)
            }
            Err(e) => {
                self.rollback(checkpoint);
                Err(e)
            }
        }
    }

    /// Forget the saved session and return to defaults.
    pub fn reset(&mut self) -> DesignerResult<()> {
        self.store.clear()?;
        self.editor.replace_template(Template::default());
        self.style = StyleSettings::default();
        self.options = PrintOptions::default();
        self.rows = vec![LabelRow::new()];
        info!("Session reset to defaults");
        Ok(())
    }

    /// Build the render request from the current state.
    pub fn build_request(&self) -> labelkit_core::Result<RenderRequest> {
        build_request(self.editor.template(), &self.rows, &self.style, &self.options)
    }

    /// Resolved texts of a row (zero-based index).
    pub fn preview(&self, index: usize) -> DesignerResult<Vec<PreviewText>> {
        let row = self
            .rows
            .get(index)
            .ok_or(ValidationError::UnknownRow { row: index + 1 })?;
        Ok(preview(self.editor.template(), row))
    }
}
