//! # LabelKit Designer
//!
//! Label template layout model and everything built on it.
//!
//! ## Core Components
//!
//! - **Model**: canvas, elements and label rows
//! - **Canvas**: drag/resize/nudge state machine with bounds clipping
//! - **Store**: persistence of the editing session as one JSON blob
//! - **Payload**: conversion of a template and its rows into a render request
//! - **Designer state**: the session that owns all of the above
//!
//! ## Architecture
//!
//! ```text
//! LabelSession
//!   ├── LayoutEditor (Template + open interactions)
//!   ├── StyleSettings / PrintOptions / rows
//!   └── TemplateStore (BlobStore)
//!          │
//!          └── build_request ──► RenderRequest
//! ```

pub mod canvas;
pub mod designer_state;
pub mod error;
pub mod model;
pub mod payload;
pub mod store;

pub use canvas::{InteractionState, LayoutEditor, ResizeHandle, MIN_ELEMENT_SIZE};
pub use designer_state::LabelSession;
pub use error::{DesignerError, DesignerResult};
pub use model::{
    fields, preview, resolve_text, CanvasSize, Element, ElementKind, Geometry, LabelRow, Point,
    PreviewText, Template, TextStyle,
};
pub use payload::{build_request, ElementFrame, RenderRequest, RenderRow, TextEntry};
pub use store::{
    BlobStore, FileBlobStore, MemoryBlobStore, SessionSnapshot, StoreError, TemplateStore,
    DEFAULT_BLOB_KEY,
};
