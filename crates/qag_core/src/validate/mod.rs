//! Citation validation: is the citation a legitimate excerpt of the document?
//!
//! Two paths: exact containment of the normalized citation, and an elided
//! path for citations where the generator replaced omitted text with an
//! ellipsis marker. Both operate on comparison-normalized text only; span
//! recovery against the original text lives in `crate::locate`.

use crate::normalize::normalize_for_match;

/// Recognized elision marker kinds, in fixed priority order.
///
/// Bracketed forms are tried before bare forms: the bare three-dot token is
/// a substring of the bracketed one, so the reverse order would shred
/// `[...]` citations into unmatchable fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElisionMarker {
    BracketedDots,
    BracketedGlyph,
    Dots,
    Glyph,
}

impl ElisionMarker {
    pub const PRIORITY: [ElisionMarker; 4] = [
        ElisionMarker::BracketedDots,
        ElisionMarker::BracketedGlyph,
        ElisionMarker::Dots,
        ElisionMarker::Glyph,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            ElisionMarker::BracketedDots => "[...]",
            ElisionMarker::BracketedGlyph => "[\u{2026}]",
            ElisionMarker::Dots => "...",
            ElisionMarker::Glyph => "\u{2026}",
        }
    }
}

/// Outcome of the elided-citation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElidedOutcome {
    /// No recognized marker split the citation; fall back to the exact result.
    NotApplicable,
    Valid,
    Invalid,
}

/// True iff the normalized citation is a contiguous substring of the
/// normalized document. Fast path; tried before the elided path.
pub fn validate_exact(citation: &str, document: &str) -> bool {
    let normalized_citation = normalize_for_match(citation);
    if normalized_citation.is_empty() {
        return false;
    }
    normalize_for_match(document).contains(&normalized_citation)
}

/// Split a normalized citation on the highest-priority marker that yields
/// more than one raw part. Returns the winning marker and the trimmed,
/// non-empty surviving fragments.
fn split_on_marker(normalized_citation: &str) -> Option<(ElisionMarker, Vec<String>)> {
    for marker in ElisionMarker::PRIORITY {
        let raw: Vec<&str> = normalized_citation.split(marker.token()).collect();
        if raw.len() > 1 {
            let parts: Vec<String> = raw
                .iter()
                .map(|p| p.trim())
                .filter(|p| !p.is_empty())
                .map(|p| p.to_string())
                .collect();
            return Some((marker, parts));
        }
    }
    None
}

/// Validate a citation whose generator elided intervening text.
///
/// Each surviving fragment must appear in the normalized document strictly
/// after the position where the previous fragment was found, enforcing the
/// same left-to-right order as in the citation.
pub fn validate_elided(citation: &str, document: &str) -> ElidedOutcome {
    let normalized_citation = normalize_for_match(citation);
    let Some((_, parts)) = split_on_marker(&normalized_citation) else {
        return ElidedOutcome::NotApplicable;
    };
    if parts.is_empty() {
        return ElidedOutcome::Invalid;
    }

    let normalized_doc = normalize_for_match(document);
    // Search floor: one past the previous fragment's start (unconstrained
    // for the first fragment), rounded up to the next char boundary.
    let mut floor: usize = 0;
    for part in &parts {
        if floor > normalized_doc.len() {
            return ElidedOutcome::Invalid;
        }
        let Some(found) = normalized_doc[floor..].find(part.as_str()) else {
            return ElidedOutcome::Invalid;
        };
        floor = floor + found + 1;
        while floor < normalized_doc.len() && !normalized_doc.is_char_boundary(floor) {
            floor += 1;
        }
    }
    ElidedOutcome::Valid
}

/// Combined per-citation validity: exact containment, or a valid elided
/// citation. The exact result short-circuits.
pub fn validate_citation(citation: &str, document: &str) -> bool {
    if validate_exact(citation, document) {
        return true;
    }
    match validate_elided(citation, document) {
        ElidedOutcome::Valid => true,
        ElidedOutcome::Invalid | ElidedOutcome::NotApplicable => false,
    }
}
