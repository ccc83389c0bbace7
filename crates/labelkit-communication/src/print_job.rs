//! Serialized print pipeline.
//!
//! A print action uploads the logo (when one is attached), then sends the
//! render request. Upload failure aborts the action before any render
//! request goes out. Only one action runs at a time.

use crate::document::RenderedDocument;
use crate::error::ServiceError;
use crate::logo::LogoFile;
use crate::service::RenderService;
use labelkit_designer::RenderRequest;
use tokio::sync::Mutex;
use tracing::{info, warn};

/// Runs print actions against a [`RenderService`], one at a time
#[derive(Debug)]
pub struct PrintJob<S> {
    service: S,
    in_flight: Mutex<()>,
}

impl<S: RenderService> PrintJob<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            in_flight: Mutex::new(()),
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Whether an action is currently running.
    pub fn is_busy(&self) -> bool {
        self.in_flight.try_lock().is_err()
    }

    /// Upload the logo if any, then render. Fails with `PrintInProgress`
    /// when another action has not finished.
    pub async fn run(
        &self,
        request: &RenderRequest,
        logo: Option<&LogoFile>,
    ) -> Result<RenderedDocument, ServiceError> {
        let _guard = self
            .in_flight
            .try_lock()
            .map_err(|_| ServiceError::PrintInProgress)?;

        if let Some(logo) = logo {
            if let Err(e) = self.service.upload_logo(logo).await {
                warn!("Print aborted: {}", e);
                return Err(e);
            }
        }

        info!(
            "Requesting {} labels ({} rows x {} copies)",
            request.label_count(),
            request.rows.len(),
            request.copies
        );
        let document = self.service.render(request).await?;
        info!("Received rendered document ({} bytes)", document.len());
        Ok(document)
    }
}
