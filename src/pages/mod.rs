pub mod image_analysis;
pub mod translator;
