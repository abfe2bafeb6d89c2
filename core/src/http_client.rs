use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use tracing::{error, info};

use crate::analyzer::{AnalysisResponse, ImageUpload};
use crate::backend::{AnalysisBackend, TranslationBackend};
use crate::config::ClientConfig;
use crate::error::MacroLingoError;
use crate::translator::{TranslationRequest, TranslationResponse};

/// Multipart field carrying the uploaded image.
pub const UPLOAD_FIELD: &str = "file";

/// reqwest-backed client for both endpoints.
///
/// No timeout and no retries: a request lives until the server answers or
/// the connection drops.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpBackend {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

/// Check the status and decode the body, keeping the body text on failure.
async fn handle_api_response<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
    endpoint: &str,
) -> Result<T, MacroLingoError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        error!("{} returned {}: {}", endpoint, status, body);
        return Err(MacroLingoError::Http {
            status: status.as_u16(),
            body,
        });
    }

    let text = response.text().await?;
    serde_json::from_str(&text).map_err(|e| {
        let msg = format!("Invalid JSON from {}: {}", endpoint, e);
        error!("{}", msg);
        MacroLingoError::Decode(msg)
    })
}

#[async_trait(?Send)]
impl AnalysisBackend for HttpBackend {
    async fn analyze_image(&self, upload: &ImageUpload) -> Result<AnalysisResponse, MacroLingoError> {
        let endpoint = self.config.analyze_endpoint()?;
        info!(
            "Uploading '{}' ({} bytes) to {}",
            upload.file_name,
            upload.bytes.len(),
            endpoint
        );

        let mut part = Part::bytes(upload.bytes.clone()).file_name(upload.file_name.clone());
        if let Some(mime) = &upload.mime_type {
            part = part
                .mime_str(mime)
                .map_err(|e| MacroLingoError::Transport(format!("Invalid MIME type '{}': {}", mime, e)))?;
        }
        let form = Form::new().part(UPLOAD_FIELD, part);

        let response = self
            .client
            .post(endpoint.clone())
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                error!("Upload to {} failed: {}", endpoint, e);
                MacroLingoError::from(e)
            })?;

        handle_api_response(response, endpoint.as_str()).await
    }
}

#[async_trait(?Send)]
impl TranslationBackend for HttpBackend {
    async fn translate(&self, request: &TranslationRequest) -> Result<TranslationResponse, MacroLingoError> {
        let endpoint = self.config.translate_endpoint()?;
        info!(
            "Translating {} chars {} -> {} (style '{}') via {}",
            request.text.chars().count(),
            request.input_language,
            request.output_language,
            request.style,
            endpoint
        );

        let response = self
            .client
            .post(endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!("Translation request to {} failed: {}", endpoint, e);
                MacroLingoError::from(e)
            })?;

        handle_api_response(response, endpoint.as_str()).await
    }
}
