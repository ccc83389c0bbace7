//! Rendering service abstraction.

use crate::document::RenderedDocument;
use crate::error::ServiceError;
use crate::logo::LogoFile;
use async_trait::async_trait;
use labelkit_designer::RenderRequest;

/// Remote collaborator that stores logos and renders label PDFs
#[async_trait]
pub trait RenderService: Send + Sync {
    /// Upload the logo used by subsequent render requests.
    async fn upload_logo(&self, logo: &LogoFile) -> Result<(), ServiceError>;

    /// Render a request into a document.
    async fn render(&self, request: &RenderRequest) -> Result<RenderedDocument, ServiceError>;
}
