pub mod analyzer;
pub mod backend;
pub mod config;
mod error;
pub mod http_client;
pub mod telemetry;
pub mod translator;

pub use backend::{AnalysisBackend, TranslationBackend};
pub use config::ClientConfig;
pub use error::MacroLingoError;
pub use http_client::HttpBackend;
