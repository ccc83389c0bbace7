//! Logo files attached to a print action.

use crate::error::ServiceError;
use image::{ImageFormat, ImageReader};
use std::io::Cursor;
use std::path::Path;

/// A validated image ready for upload
#[derive(Debug, Clone, PartialEq)]
pub struct LogoFile {
    file_name: String,
    bytes: Vec<u8>,
    format: ImageFormat,
    dimensions: (u32, u32),
}

impl LogoFile {
    /// Sniff the format from the content and read the image header.
    pub fn from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> Result<Self, ServiceError> {
        let file_name = file_name.into();
        let invalid = |reason: String| ServiceError::InvalidLogo(format!("{file_name}: {reason}"));

        let format = image::guess_format(&bytes).map_err(|e| invalid(e.to_string()))?;
        let dimensions = ImageReader::with_format(Cursor::new(&bytes), format)
            .into_dimensions()
            .map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            file_name,
            bytes,
            format,
            dimensions,
        })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ServiceError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "logo".to_string());
        Self::from_bytes(file_name, bytes)
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn mime_type(&self) -> &'static str {
        self.format.to_mime_type()
    }

    /// Width and height in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        self.dimensions
    }
}
