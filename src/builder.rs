use std::fs;

use log::debug;

use crate::ofx::{OfxExtractor, resolve_separator};
use crate::types::Statement;

/// Entry point for running an extraction over a document or a file.
///
/// Extraction never fails. When no content is supplied and the path cannot
/// be read as a regular file, the result is an empty vector.
#[derive(Default)]
pub struct ExtractorBuilder {
    content: Option<String>,
    filepath: Option<String>,
    decimal_separator: Option<char>,
}

impl ExtractorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(mut self, content: &str) -> Self {
        self.content = Some(content.to_string());
        self
    }

    pub fn filepath(mut self, path: &str) -> Self {
        self.filepath = Some(path.to_string());
        self
    }

    /// Override the decimal separator used for amounts. Without an override
    /// the separator is derived from the host locale, falling back to `.`.
    pub fn decimal_separator(mut self, separator: char) -> Self {
        self.decimal_separator = Some(separator);
        self
    }

    pub fn extract(self) -> Vec<Statement> {
        let separator = resolve_separator(self.decimal_separator);

        let content = self
            .content
            .or_else(|| self.filepath.as_deref().and_then(read_regular_file));

        match content {
            Some(content) => OfxExtractor::new(separator).extract(&content),
            None => Vec::new(),
        }
    }
}

fn read_regular_file(path: &str) -> Option<String> {
    let is_regular = fs::metadata(path).map(|meta| meta.is_file());
    if !is_regular.unwrap_or(false) {
        debug!("not a readable regular file, treating as empty: {}", path);
        return None;
    }
    fs::read_to_string(path).ok()
}
