//! Pie chart state for the macro breakdown.
//!
//! The chart is created by the first successful render and updated in place
//! afterwards. Until then it is `NotCreated` and a reset leaves it that way.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::grams::parse_gram_value;
use super::types::MACRO_KEYS;

/// One labelled slice value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub color: String,
    pub value: f64,
}

/// Drawable geometry of a slice, angles in radians clockwise from 12 o'clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliceArc {
    pub label: String,
    pub color: String,
    pub start_angle: f64,
    pub end_angle: f64,
    /// Fraction of the whole, 0.0..=1.0
    pub share: f64,
}

/// A created pie: one slice per tracked macro, in fixed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    fn new(values: [f64; 3]) -> Self {
        Self {
            slices: MACRO_KEYS
                .iter()
                .zip(values)
                .map(|(macro_key, value)| PieSlice {
                    label: macro_key.label.to_string(),
                    color: macro_key.color.to_string(),
                    value,
                })
                .collect(),
        }
    }

    fn set_values(&mut self, values: [f64; 3]) {
        for (slice, value) in self.slices.iter_mut().zip(values) {
            slice.value = value;
        }
    }

    pub fn values(&self) -> Vec<f64> {
        self.slices.iter().map(|s| s.value).collect()
    }

    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value).sum()
    }

    /// Arcs for the non-empty slices. An all-zero pie has nothing to draw.
    pub fn arcs(&self) -> Vec<SliceArc> {
        let total = self.total();
        if total <= 0.0 {
            return Vec::new();
        }

        let mut angle = 0.0;
        self.slices
            .iter()
            .filter(|s| s.value > 0.0)
            .map(|s| {
                let share = s.value / total;
                let start_angle = angle;
                angle += share * TAU;
                SliceArc {
                    label: s.label.clone(),
                    color: s.color.clone(),
                    start_angle,
                    end_angle: angle,
                    share,
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum MacroChart {
    #[default]
    NotCreated,
    Ready(PieChart),
}

impl MacroChart {
    /// Size the slices from a parsed analysis, creating the chart on first use.
    ///
    /// Negative estimates are clamped to zero.
    pub fn render(&mut self, record: &Value) -> PieChart {
        let values = MACRO_KEYS.map(|macro_key| parse_gram_value(record.get(macro_key.key)).max(0.0));
        let pie = match std::mem::take(self) {
            MacroChart::NotCreated => PieChart::new(values),
            MacroChart::Ready(mut pie) => {
                pie.set_values(values);
                pie
            }
        };
        *self = MacroChart::Ready(pie.clone());
        pie
    }

    /// Zero every slice of an existing chart.
    pub fn reset(&mut self) {
        if let MacroChart::Ready(pie) = self {
            pie.set_values([0.0; 3]);
        }
    }

    pub fn pie(&self) -> Option<&PieChart> {
        match self {
            MacroChart::Ready(pie) => Some(pie),
            MacroChart::NotCreated => None,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, MacroChart::Ready(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_starts_not_created() {
        let chart = MacroChart::default();
        assert!(!chart.is_created());
        assert!(chart.pie().is_none());
    }

    #[test]
    fn test_first_render_creates_with_labels_and_colors() {
        let mut chart = MacroChart::default();
        let pie = chart.render(&json!({"protein_g": "20-25", "carbs_g": 40, "fat_g": "10g"}));
        assert_eq!(pie.values(), vec![22.5, 40.0, 10.0]);
        assert_eq!(pie.slices[0].label, "Protein");
        assert_eq!(pie.slices[2].color, "#f97316");
        assert!(chart.is_created());
    }

    #[test]
    fn test_render_updates_in_place_and_clamps() {
        let mut chart = MacroChart::default();
        chart.render(&json!({"protein_g": 10}));
        let pie = chart.render(&json!({"protein_g": -3, "carbs_g": "5", "fat_g": null}));
        assert_eq!(pie.values(), vec![0.0, 5.0, 0.0]);
    }

    #[test]
    fn test_reset_zeroes_existing_chart() {
        let mut chart = MacroChart::default();
        chart.render(&json!({"protein_g": 10, "carbs_g": 20, "fat_g": 30}));
        chart.reset();
        assert_eq!(chart.pie().unwrap().values(), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_reset_before_creation_stays_uncreated() {
        let mut chart = MacroChart::default();
        chart.reset();
        assert_eq!(chart, MacroChart::NotCreated);
    }

    #[test]
    fn test_arcs_cover_full_circle() {
        let mut chart = MacroChart::default();
        let pie = chart.render(&json!({"protein_g": 25, "carbs_g": 50, "fat_g": 25}));
        let arcs = pie.arcs();
        assert_eq!(arcs.len(), 3);
        assert_eq!(arcs[0].start_angle, 0.0);
        assert!((arcs[1].share - 0.5).abs() < 1e-9);
        assert!((arcs[2].end_angle - TAU).abs() < 1e-9);
    }

    #[test]
    fn test_arcs_skip_empty_slices() {
        let mut chart = MacroChart::default();
        let arcs = chart.render(&json!({"carbs_g": 12})).arcs();
        assert_eq!(arcs.len(), 1);
        assert_eq!(arcs[0].label, "Carbs");
        assert_eq!(arcs[0].share, 1.0);

        chart.reset();
        assert!(chart.pie().unwrap().arcs().is_empty());
    }
}
