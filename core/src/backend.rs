//! Network seams for the two flows.
//!
//! Futures are `?Send`: in the browser they run on the single-threaded event
//! loop via `spawn_local`.

use async_trait::async_trait;

use crate::analyzer::{AnalysisResponse, ImageUpload};
use crate::error::MacroLingoError;
use crate::translator::{TranslationRequest, TranslationResponse};

#[async_trait(?Send)]
pub trait AnalysisBackend {
    /// Upload one image and return the decoded reply.
    ///
    /// Non-success statuses come back as [`MacroLingoError::Http`] carrying the
    /// response body.
    async fn analyze_image(&self, upload: &ImageUpload) -> Result<AnalysisResponse, MacroLingoError>;
}

#[async_trait(?Send)]
pub trait TranslationBackend {
    async fn translate(&self, request: &TranslationRequest) -> Result<TranslationResponse, MacroLingoError>;
}
