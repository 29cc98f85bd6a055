//! Highlight assembly: turn located spans into one annotated rendition of
//! the whole document.
//!
//! The output is a lossless, non-duplicating partition of the original text
//! into plain and marked segments, covering `[0, len)` exactly once, for a
//! downstream renderer to present however it likes.

use serde::{Deserialize, Serialize};

use crate::domain::{QaTriple, Span};

/// A located citation plus the payload that should annotate its span.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Highlight {
    pub span: Span,
    pub ordinal: u32,
    pub triple: QaTriple,
}

/// One slice of the assembled document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum DocumentSegment {
    Plain {
        text: String,
    },
    Marked {
        text: String,
        ordinal: u32,
        triple: QaTriple,
    },
}

impl DocumentSegment {
    pub fn text(&self) -> &str {
        match self {
            DocumentSegment::Plain { text } => text,
            DocumentSegment::Marked { text, .. } => text,
        }
    }
}

/// Assemble highlights into an ordered plain/marked partition of `document`.
///
/// Input highlights may arrive unordered and may overlap. Overlapping
/// highlights are clipped to start at the cursor (or skipped entirely once
/// clipping empties them); malformed spans are skipped rather than allowed
/// to panic a rendering pass.
pub fn assemble_highlights(document: &str, highlights: &[Highlight]) -> Vec<DocumentSegment> {
    let mut ordered: Vec<&Highlight> = highlights
        .iter()
        .filter(|h| h.span.is_valid_for(document) && !h.span.is_empty())
        .collect();
    ordered.sort_by_key(|h| (h.span.start, h.span.end, h.ordinal));

    let mut segments = Vec::new();
    let mut cursor = 0usize;
    for h in ordered {
        let start = h.span.start.max(cursor);
        let end = h.span.end;
        if start >= end {
            // Fully inside an already-emitted region.
            continue;
        }
        if start > cursor {
            segments.push(DocumentSegment::Plain {
                text: document[cursor..start].to_string(),
            });
        }
        segments.push(DocumentSegment::Marked {
            text: document[start..end].to_string(),
            ordinal: h.ordinal,
            triple: h.triple.clone(),
        });
        cursor = end;
    }
    if cursor < document.len() {
        segments.push(DocumentSegment::Plain {
            text: document[cursor..].to_string(),
        });
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triple(n: &str) -> QaTriple {
        QaTriple {
            question: format!("q{n}"),
            answer: format!("a{n}"),
            citation: format!("c{n}"),
        }
    }

    #[test]
    fn no_highlights_yields_single_plain_segment() {
        let segments = assemble_highlights("abc", &[]);
        assert_eq!(
            segments,
            vec![DocumentSegment::Plain {
                text: "abc".to_string()
            }]
        );
    }

    #[test]
    fn empty_document_yields_empty_partition() {
        assert!(assemble_highlights("", &[]).is_empty());
    }

    #[test]
    fn malformed_spans_are_skipped() {
        let doc = "caf\u{e9} au lait";
        let highlights = vec![
            Highlight {
                span: Span::new(0, 4), // splits the 'é'
                ordinal: 0,
                triple: triple("0"),
            },
            Highlight {
                span: Span::new(0, doc.len() + 10),
                ordinal: 1,
                triple: triple("1"),
            },
        ];
        let segments = assemble_highlights(doc, &highlights);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text(), doc);
    }
}
