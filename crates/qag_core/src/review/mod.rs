//! Batch review: validate and locate every citation against one document,
//! then assemble the highlighted rendition.
//!
//! Citations are independent reads of the same immutable document, so the
//! per-citation work fans out across a worker pool; the assembler is the one
//! serialization point and runs only after every citation's result is in.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::{CitationReview, QaTriple};
use crate::highlight::{assemble_highlights, DocumentSegment, Highlight};
use crate::locate::locate_citation;
use crate::validate::validate_citation;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentReview {
    pub reviews: Vec<CitationReview>,
    pub segments: Vec<DocumentSegment>,
}

impl DocumentReview {
    pub fn valid_count(&self) -> u32 {
        self.reviews.iter().filter(|r| r.citation_valid).count() as u32
    }

    pub fn invalid_count(&self) -> u32 {
        self.reviews.len() as u32 - self.valid_count()
    }
}

/// Review every triple's citation against `document`.
///
/// Validity and locatability are judged independently per citation and both
/// reported. Highlights are assembled from citations that are valid AND
/// located; invalid citations are never rendered.
pub fn review_document(document: &str, triples: &[QaTriple]) -> DocumentReview {
    let mut reviews: Vec<CitationReview> = triples
        .par_iter()
        .enumerate()
        .map(|(i, triple)| CitationReview {
            ordinal: i as u32,
            triple: triple.clone(),
            citation_valid: validate_citation(&triple.citation, document),
            span: locate_citation(&triple.citation, document),
        })
        .collect();
    // Stable ordering by input ordinal.
    reviews.sort_by_key(|r| r.ordinal);

    let highlights: Vec<Highlight> = reviews
        .iter()
        .filter(|r| r.citation_valid)
        .filter_map(|r| {
            r.span.map(|span| Highlight {
                span,
                ordinal: r.ordinal,
                triple: r.triple.clone(),
            })
        })
        .collect();
    let segments = assemble_highlights(document, &highlights);

    DocumentReview { reviews, segments }
}
