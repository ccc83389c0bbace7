//! HTTP client for the rendering service.
//!
//! - `POST {base}/upload_logo`: multipart form with a single `file` field
//! - `POST {base}/generate_label`: JSON render request, PDF response

use crate::document::RenderedDocument;
use crate::error::ServiceError;
use crate::logo::LogoFile;
use crate::service::RenderService;
use async_trait::async_trait;
use labelkit_designer::RenderRequest;
use labelkit_settings::{Config, ServiceSettings};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::{debug, info, warn};

const UPLOAD_LOGO_PATH: &str = "upload_logo";
const GENERATE_LABEL_PATH: &str = "generate_label";

/// [`RenderService`] over HTTP
#[derive(Debug, Clone)]
pub struct HttpRenderService {
    client: Client,
    base_url: String,
}

impl HttpRenderService {
    pub fn new(settings: &ServiceSettings) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: settings.normalized_url().to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ServiceError> {
        Self::new(&config.service)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

/// Status code and the most useful description of a failed response.
///
/// JSON bodies of the form `{"detail": ...}` are unwrapped; an empty body
/// falls back to the status reason.
async fn failure_detail(response: Response) -> (u16, String) {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    let detail = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| match v.get("detail") {
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
            None => None,
        })
        .unwrap_or_else(|| body.trim().to_string());

    let detail = if detail.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("no detail")
            .to_string()
    } else {
        detail
    };
    (status.as_u16(), detail)
}

#[async_trait]
impl RenderService for HttpRenderService {
    async fn upload_logo(&self, logo: &LogoFile) -> Result<(), ServiceError> {
        let part = Part::bytes(logo.bytes().to_vec())
            .file_name(logo.file_name().to_string())
            .mime_str(logo.mime_type())?;
        let form = Form::new().part("file", part);

        let (w, h) = logo.dimensions();
        debug!(
            "Uploading logo {} ({}x{}, {} bytes)",
            logo.file_name(),
            w,
            h,
            logo.bytes().len()
        );

        let response = self
            .client
            .post(self.url(UPLOAD_LOGO_PATH))
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let (status, detail) = failure_detail(response).await;
            return Err(ServiceError::UploadFailure { status, detail });
        }

        info!("Logo {} uploaded", logo.file_name());
        Ok(())
    }

    async fn render(&self, request: &RenderRequest) -> Result<RenderedDocument, ServiceError> {
        let response = self
            .client
            .post(self.url(GENERATE_LABEL_PATH))
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            let (status, body) = failure_detail(response).await;
            return Err(ServiceError::RenderServiceFailure { status, body });
        }

        let document = RenderedDocument::new(response.bytes().await?.to_vec());
        if !document.is_pdf() {
            warn!(
                "Rendering service response does not look like a PDF ({} bytes)",
                document.len()
            );
        }
        Ok(document)
    }
}
