use thiserror::Error;

/// Conditions that abort an extraction run. Everything else degrades to a default.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no <title> element found in {url}")]
    MissingTitle { url: String },
}
