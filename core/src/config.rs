//! Endpoint configuration for both flows.
//!
//! Each flow talks to its own base URL. In the browser the bases come from
//! `window.IMAGE_ANALYSIS_API_URL` / `window.TRANSLATOR_API_URL`; native hosts
//! read environment variables of the same names.

use std::env;

use tracing::warn;
use url::Url;

use crate::error::MacroLingoError;

pub const DEFAULT_ANALYSIS_BASE: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TRANSLATOR_BASE: &str = "http://localhost:8000";

pub const ANALYSIS_URL_VAR: &str = "IMAGE_ANALYSIS_API_URL";
pub const TRANSLATOR_URL_VAR: &str = "TRANSLATOR_API_URL";

const ANALYZE_PATH: &str = "/analyze-image";
const TRANSLATE_PATH: &str = "/translate";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    analysis_base: Url,
    translator_base: Url,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            analysis_base: Url::parse(DEFAULT_ANALYSIS_BASE).expect("default analysis base is a valid URL"),
            translator_base: Url::parse(DEFAULT_TRANSLATOR_BASE)
                .expect("default translator base is a valid URL"),
        }
    }
}

impl ClientConfig {
    /// Build a config from explicit base URLs.
    pub fn new(analysis_base: &str, translator_base: &str) -> Result<Self, MacroLingoError> {
        Ok(Self {
            analysis_base: parse_base(analysis_base)?,
            translator_base: parse_base(translator_base)?,
        })
    }

    /// Defaults, overridden by `IMAGE_ANALYSIS_API_URL` and `TRANSLATOR_API_URL`.
    pub fn from_env() -> Self {
        let analysis = env::var(ANALYSIS_URL_VAR).ok();
        let translator = env::var(TRANSLATOR_URL_VAR).ok();
        Self::default().with_overrides(analysis.as_deref(), translator.as_deref())
    }

    /// Apply optional overrides. Empty or unparseable values keep the current
    /// base and are logged.
    pub fn with_overrides(mut self, analysis: Option<&str>, translator: Option<&str>) -> Self {
        if let Some(url) = override_base(ANALYSIS_URL_VAR, analysis) {
            self.analysis_base = url;
        }
        if let Some(url) = override_base(TRANSLATOR_URL_VAR, translator) {
            self.translator_base = url;
        }
        self
    }

    pub fn analysis_base(&self) -> &Url {
        &self.analysis_base
    }

    pub fn translator_base(&self) -> &Url {
        &self.translator_base
    }

    /// `{analysis_base}/analyze-image`; the path replaces any path on the base.
    pub fn analyze_endpoint(&self) -> Result<Url, MacroLingoError> {
        join_endpoint(&self.analysis_base, ANALYZE_PATH)
    }

    /// `{translator_base}/translate`; the path replaces any path on the base.
    pub fn translate_endpoint(&self) -> Result<Url, MacroLingoError> {
        join_endpoint(&self.translator_base, TRANSLATE_PATH)
    }
}

fn parse_base(raw: &str) -> Result<Url, MacroLingoError> {
    Url::parse(raw.trim()).map_err(|e| MacroLingoError::Config(format!("Invalid base URL '{}': {}", raw, e)))
}

fn override_base(name: &str, raw: Option<&str>) -> Option<Url> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty())?;
    match parse_base(raw) {
        Ok(url) => Some(url),
        Err(e) => {
            warn!("Ignoring {} override: {}", name, e);
            None
        }
    }
}

fn join_endpoint(base: &Url, path: &str) -> Result<Url, MacroLingoError> {
    base.join(path)
        .map_err(|e| MacroLingoError::Config(format!("Cannot build endpoint {} from {}: {}", path, base, e)))
}
