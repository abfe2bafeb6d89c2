//! Image submission: upload, parse, render.

use std::cell::RefCell;

use tracing::{error, info};

use super::chart::{MacroChart, PieChart};
use super::parser::parse_analysis_text;
use super::types::{macro_rows, ImageUpload, MacroRow};
use crate::backend::AnalysisBackend;
use crate::error::MacroLingoError;

pub const MSG_SELECT_IMAGE: &str = "Please select an image before analyzing.";
pub const MSG_ANALYZING: &str = "Uploading and analyzing\u{2026}";
pub const MSG_READY: &str = "Macronutrient breakdown ready.";
pub const MSG_FAILED: &str = "Analysis failed. Try a clearer image or check the server.";
pub const ERR_DEFAULT_HTTP: &str = "Failed to analyze the image.";
pub const ERR_UNPARSEABLE: &str = "Unable to parse macronutrient data from the response.";

/// View elements the image flow writes to.
pub trait AnalysisSurface {
    fn set_status(&mut self, message: &str);
    fn set_trigger_enabled(&mut self, enabled: bool);
    fn show_macros(&mut self, rows: &[MacroRow]);
    /// `None` clears the dump.
    fn show_raw(&mut self, dump: Option<&str>);
    fn draw_chart(&mut self, pie: &PieChart);
}

/// Successful outcome of one submission.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisView {
    pub rows: Vec<MacroRow>,
    pub pie: PieChart,
    pub raw: String,
}

/// Drives one image submission at a time and owns the macro chart.
pub struct ImageAnalysisFlow<B> {
    backend: B,
    chart: RefCell<MacroChart>,
}

impl<B: AnalysisBackend> ImageAnalysisFlow<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            chart: RefCell::new(MacroChart::default()),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn chart(&self) -> MacroChart {
        self.chart.borrow().clone()
    }

    /// Handle a form submission.
    ///
    /// Without a file only the guidance status is shown. Otherwise the trigger
    /// is disabled for the duration of the request and re-enabled afterwards
    /// whatever the outcome.
    pub async fn submit<S: AnalysisSurface>(&self, surface: &mut S, upload: Option<ImageUpload>) {
        let Some(upload) = upload else {
            surface.set_status(MSG_SELECT_IMAGE);
            return;
        };

        surface.set_trigger_enabled(false);
        surface.set_status(MSG_ANALYZING);

        match self.analyze(&upload).await {
            Ok(view) => {
                surface.show_macros(&view.rows);
                surface.draw_chart(&view.pie);
                surface.show_raw(Some(&view.raw));
                surface.set_status(MSG_READY);
            }
            Err(e) => {
                error!("Analysis of '{}' failed: {}", upload.file_name, e);
                self.reset_display(surface, MSG_FAILED);
            }
        }

        surface.set_trigger_enabled(true);
    }

    async fn analyze(&self, upload: &ImageUpload) -> Result<AnalysisView, MacroLingoError> {
        let response = self.backend.analyze_image(upload).await.map_err(failure_reason)?;

        let record = parse_analysis_text(response.analysis.as_deref())
            .ok_or_else(|| MacroLingoError::Parse(ERR_UNPARSEABLE.to_string()))?;

        let rows = macro_rows(&record);
        let pie = self.chart.borrow_mut().render(&record);
        let raw = serde_json::to_string_pretty(&record)
            .map_err(|e| MacroLingoError::Parse(e.to_string()))?;

        info!("Macronutrient breakdown ready: {:?}", pie.values());
        Ok(AnalysisView { rows, pie, raw })
    }

    /// Put every surface back into the failed state: status set, rows and
    /// dump cleared, chart zeroed if it exists.
    pub fn reset_display<S: AnalysisSurface>(&self, surface: &mut S, message: &str) {
        surface.set_status(message);
        surface.show_macros(&[]);
        surface.show_raw(None);
        let mut chart = self.chart.borrow_mut();
        chart.reset();
        if let Some(pie) = chart.pie() {
            surface.draw_chart(pie);
        }
    }
}

/// A non-success reply fails with its body text, or a stock reason when empty.
fn failure_reason(err: MacroLingoError) -> MacroLingoError {
    match err {
        MacroLingoError::Http { status, body } if body.trim().is_empty() => MacroLingoError::Http {
            status,
            body: ERR_DEFAULT_HTTP.to_string(),
        },
        other => other,
    }
}
