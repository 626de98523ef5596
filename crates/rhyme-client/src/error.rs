use thiserror::Error;

/// Failure of a single rhyme lookup. Only visible through `try_fetch`; the [`crate::RhymeProvider`]
/// impls swallow it.
#[derive(Error, Debug)]
pub enum RhymeClientError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Rhyme service returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("Invalid base URL: {0}")]
    BaseUrl(String),
}
