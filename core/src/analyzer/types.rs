//! Type definitions for image analysis.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A macronutrient tracked by the breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacroKey {
    /// Field name in the parsed analysis object
    pub key: &'static str,
    /// Label shown in the list and chart legend
    pub label: &'static str,
    /// Chart slice colour
    pub color: &'static str,
}

/// The three tracked macros, in display order.
pub const MACRO_KEYS: [MacroKey; 3] = [
    MacroKey { key: "protein_g", label: "Protein", color: "#2563eb" },
    MacroKey { key: "carbs_g", label: "Carbs", color: "#10b981" },
    MacroKey { key: "fat_g", label: "Fat", color: "#f97316" },
];

/// Shown in the label list when a macro is missing from the analysis.
pub const MISSING_VALUE: &str = "\u{2014}";

/// Reply from the analysis endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// Free model output, expected to contain a JSON object
    #[serde(default)]
    pub analysis: Option<String>,
}

/// An image picked by the user, ready for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
    /// MIME type reported by the browser, if any
    pub mime_type: Option<String>,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
            mime_type: None,
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        let mime_type = mime_type.into();
        self.mime_type = (!mime_type.is_empty()).then_some(mime_type);
        self
    }
}

/// One row of the macro label list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroRow {
    pub label: String,
    pub value: String,
}

/// Build the label list from a parsed analysis, one row per tracked macro.
///
/// Values are shown as the model wrote them; missing keys show a dash.
pub fn macro_rows(record: &Value) -> Vec<MacroRow> {
    MACRO_KEYS
        .iter()
        .map(|macro_key| MacroRow {
            label: macro_key.label.to_string(),
            value: record
                .get(macro_key.key)
                .map(display_value)
                .unwrap_or_else(|| MISSING_VALUE.to_string()),
        })
        .collect()
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}
