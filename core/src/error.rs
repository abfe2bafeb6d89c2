use thiserror::Error;

#[derive(Debug, Error)]
pub enum MacroLingoError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("{0}")]
    Parse(String),
}

impl From<MacroLingoError> for String {
    fn from(err: MacroLingoError) -> Self {
        err.to_string()
    }
}

impl From<reqwest::Error> for MacroLingoError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            MacroLingoError::Decode(err.to_string())
        } else {
            MacroLingoError::Transport(err.to_string())
        }
    }
}
