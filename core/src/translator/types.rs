use serde::{Deserialize, Serialize};

use super::styles::style_instruction;

/// Languages offered by the selectors, as sent to the backend.
pub const LANGUAGES: &[&str] = &[
    "English",
    "German",
    "Cantonese",
    "Mandarin",
    "Japanese",
    "French",
    "Spanish",
];

/// Raw values read from the translator form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationForm {
    pub input_language: String,
    pub output_language: String,
    /// Untrimmed text as typed
    pub text: String,
    pub style: String,
}

/// Body of `POST /translate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRequest {
    pub input_language: String,
    pub output_language: String,
    pub text: String,
    pub style: String,
    /// Omitted from the body when the style has no instruction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instruction: Option<String>,
}

impl TranslationRequest {
    /// Trim the text and attach the style's instruction.
    pub fn from_form(form: &TranslationForm) -> Self {
        Self {
            input_language: form.input_language.clone(),
            output_language: form.output_language.clone(),
            text: form.text.trim().to_string(),
            style: form.style.clone(),
            instruction: style_instruction(&form.style).map(str::to_string),
        }
    }
}

/// Reply from the translation endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResponse {
    #[serde(default)]
    pub translation: Option<String>,
}
