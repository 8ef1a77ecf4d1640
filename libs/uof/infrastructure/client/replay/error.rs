use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReplayError {
    /// The API answered with a non-success status
    #[error("Replay control failed ({status}): {body}")]
    ReplayControl { status: u16, body: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Template parameter not provided: {0}")]
    MissingParameter(String),
}

pub type Result<T> = std::result::Result<T, ReplayError>;
