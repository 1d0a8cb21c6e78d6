//! Error types for rendering.

use thiserror::Error;

/// Result type alias for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while rendering a resume document.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error(
        "Position at '{company}' has malformed period '{period}': \
         expected exactly one ' - ' separator"
    )]
    MalformedPeriod { company: String, period: String },
}
