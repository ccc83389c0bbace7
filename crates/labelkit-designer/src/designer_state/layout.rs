//! Drag, resize and nudge operations for the editing session.

use super::LabelSession;
use crate::canvas::ResizeHandle;
use crate::error::DesignerResult;
use crate::model::{Geometry, Point};

impl LabelSession {
    pub fn begin_drag(&mut self, id: &str, pointer: Point) -> DesignerResult<bool> {
        Ok(self.editor.begin_drag(id, pointer)?)
    }

    pub fn update_drag(&mut self, id: &str, delta: Point) -> DesignerResult<Option<Geometry>> {
        Ok(self.editor.update_drag(id, delta)?)
    }

    pub fn update_drag_to(&mut self, id: &str, pointer: Point) -> DesignerResult<Option<Geometry>> {
        Ok(self.editor.update_drag_to(id, pointer)?)
    }

    /// Commit the drag and persist.
    pub fn commit_drag(&mut self, id: &str) -> DesignerResult<Option<Geometry>> {
        let checkpoint = self.checkpoint();
        let committed = self.editor.commit_drag(id)?;
        if committed.is_some() {
            self.persist(checkpoint)?;
        }
        Ok(committed)
    }

    pub fn cancel_drag(&mut self, id: &str) -> DesignerResult<bool> {
        Ok(self.editor.cancel_drag(id)?)
    }

    pub fn begin_resize(
        &mut self,
        id: &str,
        handle: ResizeHandle,
        pointer: Point,
    ) -> DesignerResult<bool> {
        Ok(self.editor.begin_resize(id, handle, pointer)?)
    }

    pub fn update_resize(&mut self, id: &str, delta: Point) -> DesignerResult<Option<Geometry>> {
        Ok(self.editor.update_resize(id, delta)?)
    }

    pub fn update_resize_to(
        &mut self,
        id: &str,
        pointer: Point,
    ) -> DesignerResult<Option<Geometry>> {
        Ok(self.editor.update_resize_to(id, pointer)?)
    }

    /// Commit the resize and persist.
    pub fn commit_resize(&mut self, id: &str) -> DesignerResult<Option<Geometry>> {
        let checkpoint = self.checkpoint();
        let committed = self.editor.commit_resize(id)?;
        if committed.is_some() {
            self.persist(checkpoint)?;
        }
        Ok(committed)
    }

    pub fn cancel_resize(&mut self, id: &str) -> DesignerResult<bool> {
        Ok(self.editor.cancel_resize(id)?)
    }

    /// Move by a fixed offset and persist.
    pub fn nudge(&mut self, id: &str, dx: f64, dy: f64) -> DesignerResult<Option<Geometry>> {
        let checkpoint = self.checkpoint();
        let committed = self.editor.nudge(id, dx, dy)?;
        if committed.is_some() {
            self.persist(checkpoint)?;
        }
        Ok(committed)
    }

    /// Set or clear a text element's own font size and persist.
    pub fn set_element_font_size(&mut self, id: &str, size: Option<f64>) -> DesignerResult<()> {
        self.transact(|s| Ok(s.editor.set_font_size(id, size)?))
    }
}
