//! Signal-backed implementations of the flow surfaces.

use leptos::prelude::*;
use macrolingo_core::analyzer::{AnalysisSurface, MacroRow, PieChart};
use macrolingo_core::translator::TranslatorSurface;

#[derive(Clone, Copy)]
pub struct AnalysisSignals {
    pub set_status: WriteSignal<String>,
    pub set_trigger_enabled: WriteSignal<bool>,
    pub set_rows: WriteSignal<Vec<MacroRow>>,
    pub set_raw: WriteSignal<Option<String>>,
    pub set_chart: WriteSignal<Option<PieChart>>,
}

impl AnalysisSurface for AnalysisSignals {
    fn set_status(&mut self, message: &str) {
        self.set_status.set(message.to_string());
    }

    fn set_trigger_enabled(&mut self, enabled: bool) {
        self.set_trigger_enabled.set(enabled);
    }

    fn show_macros(&mut self, rows: &[MacroRow]) {
        self.set_rows.set(rows.to_vec());
    }

    fn show_raw(&mut self, dump: Option<&str>) {
        self.set_raw.set(dump.map(str::to_string));
    }

    fn draw_chart(&mut self, pie: &PieChart) {
        self.set_chart.set(Some(pie.clone()));
    }
}

#[derive(Clone, Copy)]
pub struct TranslatorSignals {
    pub set_status: WriteSignal<String>,
    pub set_trigger_enabled: WriteSignal<bool>,
    pub set_output: WriteSignal<String>,
}

impl TranslatorSurface for TranslatorSignals {
    fn set_status(&mut self, message: &str) {
        self.set_status.set(message.to_string());
    }

    fn set_trigger_enabled(&mut self, enabled: bool) {
        self.set_trigger_enabled.set(enabled);
    }

    fn set_output(&mut self, text: &str) {
        self.set_output.set(text.to_string());
    }
}
