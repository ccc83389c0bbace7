//! Rendered label documents.

use crate::error::ServiceError;
use std::path::Path;

const PDF_SIGNATURE: &[u8] = b"%PDF-";

/// Body returned by a successful render request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    bytes: Vec<u8>,
}

impl RenderedDocument {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Whether the body starts with the PDF signature.
    pub fn is_pdf(&self) -> bool {
        self.bytes.starts_with(PDF_SIGNATURE)
    }

    /// Write the document to `path`, creating parent directories.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), ServiceError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &self.bytes)?;
        Ok(())
    }
}
