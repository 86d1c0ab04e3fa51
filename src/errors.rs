use thiserror::Error;

/// Errors surfaced by the fallible conversions around extracted data.
///
/// Extraction itself never fails: malformed input degrades to empty fields
/// or skipped blocks. The variants here only cover operations the caller
/// opts into after extraction.
#[derive(Error, Debug)]
pub enum StatementExtractError {
    /// Posting date components are empty or do not form a calendar date
    #[error("Invalid OFX posting date")]
    InvalidPostingDate,
}

/// Alias for Result with the crate's error type
pub type ExtractResult<T> = Result<T, StatementExtractError>;
