//! Macronutrient breakdown from a meal photo.

pub mod chart;
pub mod flow;
pub mod grams;
pub mod parser;
pub mod types;

pub use chart::{MacroChart, PieChart, PieSlice, SliceArc};
pub use flow::{AnalysisSurface, ImageAnalysisFlow};
pub use grams::parse_gram_value;
pub use parser::parse_analysis_text;
pub use types::*;
