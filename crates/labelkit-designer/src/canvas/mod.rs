//! Layout editor: drag, resize and nudge of template elements.
//!
//! Every element has its own state machine (`Idle -> Dragging -> Idle`,
//! `Idle -> Resizing -> Idle`). Updates only touch the candidate geometry;
//! the template changes on commit and on nudge.

mod operations;
mod types;

pub use operations::MIN_ELEMENT_SIZE;
pub use types::{InteractionState, ResizeHandle};

use crate::model::{Geometry, Point, Template};
use labelkit_core::TemplateError;
use std::collections::HashMap;
use tracing::debug;
use types::Interaction;

/// Template plus the open interactions on its elements.
#[derive(Debug, Clone)]
pub struct LayoutEditor {
    template: Template,
    interactions: HashMap<String, Interaction>,
}

impl LayoutEditor {
    pub fn new(template: Template) -> Self {
        Self {
            template,
            interactions: HashMap::new(),
        }
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Swap in another template. Open interactions are dropped.
    pub fn replace_template(&mut self, template: Template) {
        self.interactions.clear();
        self.template = template;
    }

    /// Put back an earlier template, keeping open interactions.
    pub(crate) fn restore_template(&mut self, template: Template) {
        self.template = template;
    }

    /// Set or clear a text element's font size override.
    pub fn set_font_size(&mut self, id: &str, size: Option<f64>) -> Result<(), TemplateError> {
        self.template.set_font_size(id, size)
    }

    pub fn state(&self, id: &str) -> Result<InteractionState, TemplateError> {
        self.template.get(id)?;
        Ok(self
            .interactions
            .get(id)
            .map(|i| i.state)
            .unwrap_or_default())
    }

    /// Provisional geometry of an open drag or resize.
    pub fn candidate(&self, id: &str) -> Option<Geometry> {
        self.interactions.get(id).map(|i| i.candidate)
    }

    /// Whether any element is being dragged or resized.
    pub fn is_interacting(&self) -> bool {
        !self.interactions.is_empty()
    }

    fn begin(
        &mut self,
        id: &str,
        state: InteractionState,
        pointer: Point,
    ) -> Result<bool, TemplateError> {
        let start = self.template.get(id)?.geometry;
        if self.interactions.contains_key(id) {
            return Ok(false);
        }
        self.interactions
            .insert(id.to_string(), Interaction::new(state, pointer, start));
        Ok(true)
    }

    fn open(&mut self, id: &str, dragging: bool) -> Result<Option<&mut Interaction>, TemplateError> {
        self.template.get(id)?;
        Ok(self.interactions.get_mut(id).filter(|i| match i.state {
            InteractionState::Dragging => dragging,
            InteractionState::Resizing(_) => !dragging,
            InteractionState::Idle => false,
        }))
    }

    fn finish(&mut self, id: &str, dragging: bool) -> Result<Option<Geometry>, TemplateError> {
        let Some(candidate) = self.open(id, dragging)?.map(|i| i.candidate) else {
            return Ok(None);
        };
        self.interactions.remove(id);
        let committed = self.template.set_geometry(id, candidate)?;
        debug!(
            "Committed {} at ({}, {}) {}x{}",
            id, committed.x, committed.y, committed.width, committed.height
        );
        Ok(Some(committed))
    }

    fn abort(&mut self, id: &str, dragging: bool) -> Result<bool, TemplateError> {
        if self.open(id, dragging)?.is_none() {
            return Ok(false);
        }
        self.interactions.remove(id);
        Ok(true)
    }

    /// Start dragging. Returns false (and changes nothing) when the element
    /// is already being dragged or resized.
    pub fn begin_drag(&mut self, id: &str, pointer: Point) -> Result<bool, TemplateError> {
        self.begin(id, InteractionState::Dragging, pointer)
    }

    /// Move the candidate to `start + delta`, clamped to the canvas.
    pub fn update_drag(&mut self, id: &str, delta: Point) -> Result<Option<Geometry>, TemplateError> {
        let canvas = self.template.canvas();
        Ok(self.open(id, true)?.map(|i| {
            i.candidate = operations::translated(&i.start, delta, &canvas);
            i.candidate
        }))
    }

    /// [`update_drag`](Self::update_drag) with an absolute pointer position.
    pub fn update_drag_to(&mut self, id: &str, pointer: Point) -> Result<Option<Geometry>, TemplateError> {
        let Some(start_pointer) = self.open(id, true)?.map(|i| i.start_pointer) else {
            return Ok(None);
        };
        self.update_drag(id, pointer.delta_from(&start_pointer))
    }

    /// Write the candidate into the template. `None` when no drag is open.
    pub fn commit_drag(&mut self, id: &str) -> Result<Option<Geometry>, TemplateError> {
        self.finish(id, true)
    }

    /// Drop the candidate. The template keeps the geometry from `begin_drag`.
    pub fn cancel_drag(&mut self, id: &str) -> Result<bool, TemplateError> {
        self.abort(id, true)
    }

    /// Start resizing from `handle`. Same no-op rule as `begin_drag`.
    pub fn begin_resize(
        &mut self,
        id: &str,
        handle: ResizeHandle,
        pointer: Point,
    ) -> Result<bool, TemplateError> {
        self.begin(id, InteractionState::Resizing(handle), pointer)
    }

    pub fn update_resize(&mut self, id: &str, delta: Point) -> Result<Option<Geometry>, TemplateError> {
        let canvas = self.template.canvas();
        Ok(self.open(id, false)?.map(|i| {
            if let InteractionState::Resizing(handle) = i.state {
                i.candidate = operations::resized(&i.start, handle, delta, &canvas);
            }
            i.candidate
        }))
    }

    pub fn update_resize_to(&mut self, id: &str, pointer: Point) -> Result<Option<Geometry>, TemplateError> {
        let Some(start_pointer) = self.open(id, false)?.map(|i| i.start_pointer) else {
            return Ok(None);
        };
        self.update_resize(id, pointer.delta_from(&start_pointer))
    }

    pub fn commit_resize(&mut self, id: &str) -> Result<Option<Geometry>, TemplateError> {
        self.finish(id, false)
    }

    pub fn cancel_resize(&mut self, id: &str) -> Result<bool, TemplateError> {
        self.abort(id, false)
    }

    /// Discrete move, committed immediately. `None` while the element is
    /// being dragged or resized.
    pub fn nudge(&mut self, id: &str, dx: f64, dy: f64) -> Result<Option<Geometry>, TemplateError> {
        let current = self.template.get(id)?.geometry;
        if self.interactions.contains_key(id) {
            return Ok(None);
        }
        let moved = operations::translated(&current, Point::new(dx, dy), &self.template.canvas());
        let committed = self.template.set_geometry(id, moved)?;
        debug!("Nudged {} to ({}, {})", id, committed.x, committed.y);
        Ok(Some(committed))
    }
}
