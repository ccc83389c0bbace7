//! # LabelKit Communication
//!
//! Client side of the rendering service: logo upload, render requests and
//! the serialized print pipeline.

pub mod document;
pub mod error;
pub mod http;
pub mod logo;
pub mod print_job;
pub mod service;

pub use document::RenderedDocument;
pub use error::ServiceError;
pub use http::HttpRenderService;
pub use logo::LogoFile;
pub use print_job::PrintJob;
pub use service::RenderService;
