//! Translation submission with an offline fallback.
//!
//! When the backend is missing or misbehaves the flow does not report an
//! error; it shows a canned translation for the selected style instead.

use tracing::{error, info};

use super::styles::placeholder_translation;
use super::types::{TranslationForm, TranslationRequest};
use crate::backend::TranslationBackend;

pub const MSG_ENTER_TEXT: &str = "Please enter text to translate.";
pub const MSG_TRANSLATING: &str = "Translating\u{2026}";
pub const MSG_COMPLETE: &str = "Translation complete.";
pub const MSG_NO_BACKEND: &str = "Running without backend; showing a style-aware placeholder translation.";
pub const NO_TRANSLATION: &str = "No translation received.";

/// View elements the translation flow writes to.
pub trait TranslatorSurface {
    fn set_status(&mut self, message: &str);
    fn set_trigger_enabled(&mut self, enabled: bool);
    fn set_output(&mut self, text: &str);
}

pub struct TranslatorFlow<B> {
    backend: B,
}

impl<B: TranslationBackend> TranslatorFlow<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub async fn submit<S: TranslatorSurface>(&self, surface: &mut S, form: &TranslationForm) {
        let request = TranslationRequest::from_form(form);
        if request.text.is_empty() {
            surface.set_status(MSG_ENTER_TEXT);
            return;
        }

        surface.set_trigger_enabled(false);
        surface.set_status(MSG_TRANSLATING);

        match self.backend.translate(&request).await {
            Ok(response) => {
                let translation = response.translation.filter(|t| !t.is_empty());
                info!("Translation received: {}", translation.is_some());
                surface.set_output(translation.as_deref().unwrap_or(NO_TRANSLATION));
                surface.set_status(MSG_COMPLETE);
            }
            Err(e) => {
                error!("Translation failed, using placeholder for '{}': {}", request.style, e);
                surface.set_output(placeholder_translation(&request.style));
                surface.set_status(MSG_NO_BACKEND);
            }
        }

        surface.set_trigger_enabled(true);
    }
}
