//! Best-effort recovery of a JSON object from model output.
//!
//! The analysis endpoint returns free text that is usually JSON, but may be
//! wrapped in Markdown fences or surrounded by prose. Parsing degrades through
//! three levels: strict parse of the fence-stripped text, then a strict parse
//! of the outermost `{ ... }` span, then nothing.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::warn;

static FENCE_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)```[a-z]*\s*").unwrap());

/// Parse analysis text into a JSON value.
///
/// Returns `None` for absent, blank, or unrecoverable input and for a falsy
/// result (`null`, `false`, zero, `""`). Never fails.
pub fn parse_analysis_text(text: Option<&str>) -> Option<Value> {
    let trimmed = text.map(str::trim).filter(|t| !t.is_empty())?;
    let cleaned = strip_code_fences(trimmed);

    parse_strict(&cleaned)
        .or_else(|| parse_brace_span(&cleaned))
        .filter(is_truthy)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Remove every fence marker, opening (with optional language tag) or closing.
fn strip_code_fences(text: &str) -> String {
    FENCE_OPEN.replace_all(text, "").replace("```", "")
}

fn parse_strict(text: &str) -> Option<Value> {
    serde_json::from_str(text).ok()
}

fn parse_brace_span(text: &str) -> Option<Value> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if start >= end {
        return None;
    }

    match serde_json::from_str(&text[start..=end]) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Partial JSON parse failed: {}", e);
            None
        }
    }
}
