//! In-memory vector documents

use std::fmt;

/// Self-contained SVG text produced for one seed
///
/// A document is never empty; an empty seed means "no document" and is
/// represented by the absence of a `VectorDocument`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorDocument(String);

impl VectorDocument {
    /// Wrap SVG text, returning `None` if it is empty
    pub fn new(svg: impl Into<String>) -> Option<Self> {
        let svg = svg.into();
        if svg.is_empty() {
            None
        } else {
            Some(Self(svg))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// UTF-8 bytes of the document, exactly as held in memory
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for VectorDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_rejected() {
        assert!(VectorDocument::new("").is_none());
    }

    #[test]
    fn test_bytes_match_text() {
        let doc = VectorDocument::new("<svg/>").unwrap();
        assert_eq!(doc.as_bytes(), b"<svg/>");
        assert_eq!(doc.len(), 6);
        assert!(!doc.is_empty());
    }
}
