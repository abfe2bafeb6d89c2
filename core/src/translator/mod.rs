//! Text translation through the remote translator endpoint.

pub mod flow;
pub mod styles;
pub mod types;

pub use flow::{TranslatorFlow, TranslatorSurface};
pub use styles::{placeholder_translation, style_instruction};
pub use types::*;
