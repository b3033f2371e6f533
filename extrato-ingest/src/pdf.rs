//! PDF text retrieval.
//!
//! Pages are extracted one at a time, in document order, and joined with
//! a newline after every page so downstream line scanning never sees two
//! pages glued together.

use anyhow::{Context, Result};
use lopdf::Document;
use std::path::Path;

/// Extract the full text of a statement PDF.
///
/// Open or decode failures propagate: an unreadable input aborts the run
/// before any output is written.
pub fn extract_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let document =
        Document::load(path).with_context(|| format!("opening {}", path.display()))?;

    let mut text = String::new();
    for page_number in 1..=document.get_pages().len() {
        let page_text = document
            .extract_text(&[page_number as u32])
            .with_context(|| format!("extracting text from page {page_number}"))?;
        text.push_str(&page_text);
        text.push('\n');
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_an_error() {
        let err = extract_text("/nonexistent/extrato.pdf").unwrap_err();
        assert!(err.to_string().contains("extrato.pdf"));
    }
}
