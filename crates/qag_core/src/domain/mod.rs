use serde::{Deserialize, Serialize};

/// One question/answer pair with the citation that is claimed to back it.
///
/// The citation is untrusted input: the upstream generator is asked for a
/// verbatim excerpt but may drift in case, collapse whitespace, or elide
/// text with an ellipsis marker. Validation and span recovery live in
/// `crate::validate` and `crate::locate`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QaTriple {
    pub question: String,
    pub answer: String,
    pub citation: String,
}

/// Half-open byte range `[start, end)` into a document's original text.
///
/// Offsets always fall on `char` boundaries of the document they were
/// produced for, so a span can slice the document directly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Whether the span is well-formed for `document`: ordered, in range,
    /// and sliceable (both offsets on char boundaries).
    pub fn is_valid_for(&self, document: &str) -> bool {
        self.start <= self.end
            && self.end <= document.len()
            && document.is_char_boundary(self.start)
            && document.is_char_boundary(self.end)
    }
}

/// Per-citation outcome of a document review.
///
/// `citation_valid` and `span` are independent judgments: a citation can
/// validate without being locatable (and vice versa). Reconciling the two is
/// caller policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CitationReview {
    pub ordinal: u32,
    pub triple: QaTriple,
    pub citation_valid: bool,
    pub span: Option<Span>,
}

/// Non-fatal, structured finding surfaced to the caller instead of a log line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationWarning {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

impl ValidationWarning {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::Span;

    #[test]
    fn span_validity_checks_range_and_char_boundaries() {
        let doc = "caf\u{e9} au lait";
        assert!(Span::new(0, 3).is_valid_for(doc));
        assert!(Span::new(0, doc.len()).is_valid_for(doc));
        // Offset 4 lands inside the two-byte 'é'.
        assert!(!Span::new(0, 4).is_valid_for(doc));
        assert!(!Span::new(3, 2).is_valid_for(doc));
        assert!(!Span::new(0, doc.len() + 1).is_valid_for(doc));
    }

    #[test]
    fn span_len_is_saturating() {
        assert_eq!(Span::new(5, 3).len(), 0);
        assert!(Span::new(5, 5).is_empty());
        assert_eq!(Span::new(2, 7).len(), 5);
    }
}
