//! Span recovery: map a citation back onto the original, unmodified document
//! text for highlighting.
//!
//! Three strategies of increasing tolerance, tried in order; the first that
//! produces a span wins. All spans are byte ranges on char boundaries of the
//! original text. `None` means the citation cannot be highlighted at all,
//! independent of whether `crate::validate` judged it valid.

use regex::Regex;

use crate::domain::Span;
use crate::normalize::normalize_for_match;

/// One attempt at recovering a citation's span.
pub trait MatchStrategy {
    fn attempt(&self, citation: &str, document: &str) -> Option<Span>;
}

/// Case-sensitive verbatim search, no normalization.
pub struct DirectMatch;

impl MatchStrategy for DirectMatch {
    fn attempt(&self, citation: &str, document: &str) -> Option<Span> {
        if citation.is_empty() {
            return None;
        }
        document
            .find(citation)
            .map(|pos| Span::new(pos, pos + citation.len()))
    }
}

/// Case-sensitive search tolerating whitespace drift: every literal
/// character is pattern-escaped and every whitespace run becomes `\s+`, so a
/// citation whose internal spacing or newlines differ from the document
/// still matches.
pub struct WhitespaceTolerantMatch;

impl MatchStrategy for WhitespaceTolerantMatch {
    fn attempt(&self, citation: &str, document: &str) -> Option<Span> {
        if citation.trim().is_empty() {
            return None;
        }
        let pattern = whitespace_tolerant_pattern(citation);
        let re = Regex::new(&pattern).ok()?;
        re.find(document)
            .map(|m| Span::new(m.start(), m.end()))
    }
}

fn whitespace_tolerant_pattern(citation: &str) -> String {
    let mut pattern = String::with_capacity(citation.len() * 2);
    let mut chars = citation.chars().peekable();
    let mut buf = [0u8; 4];
    while let Some(c) = chars.next() {
        if c.is_whitespace() {
            while chars.peek().is_some_and(|n| n.is_whitespace()) {
                chars.next();
            }
            pattern.push_str(r"\s+");
        } else {
            pattern.push_str(&regex::escape(c.encode_utf8(&mut buf)));
        }
    }
    pattern
}

/// Approximate word-count alignment for citations whose wording drifted
/// enough (case changes mixed with reformatting) that the literal strategies
/// fail.
///
/// Finds the normalized citation inside the normalized document, counts the
/// words preceding that match, then walks the original text across the same
/// number of word boundaries to recover a start offset, and across as many
/// further boundaries as the citation has words for the end offset. When the
/// matched phrase repeats verbatim, this always aligns to the first
/// normalized occurrence; the whole walk is best-effort by construction.
pub struct WordCountAlignMatch;

impl MatchStrategy for WordCountAlignMatch {
    fn attempt(&self, citation: &str, document: &str) -> Option<Span> {
        let normalized_citation = normalize_for_match(citation);
        if normalized_citation.is_empty() {
            return None;
        }
        let normalized_doc = normalize_for_match(document);
        let pos = normalized_doc.find(&normalized_citation)?;

        let preceding_words = normalized_doc[..pos].split_whitespace().count();
        let citation_words = normalized_citation.split_whitespace().count();

        let start = skip_whitespace(
            document,
            offset_after_word_boundaries(document, 0, preceding_words),
        );
        let mut end = offset_after_word_boundaries(document, start, citation_words);
        if end <= start {
            // The aligned span reaches the end of the document without a
            // trailing boundary; clamp by citation length instead.
            end = document.len().min(start + citation.len());
            while end > start && !document.is_char_boundary(end) {
                end -= 1;
            }
        }
        Some(Span::new(start, end))
    }
}

/// Byte offset just past the `boundaries`-th word boundary at or after
/// `from`, where a word boundary is a non-whitespace char immediately
/// followed by a whitespace char. Returns the text length when fewer
/// boundaries remain.
fn offset_after_word_boundaries(text: &str, from: usize, boundaries: usize) -> usize {
    if boundaries == 0 {
        return from;
    }
    let mut crossed = 0usize;
    let mut prev_non_ws = false;
    for (i, c) in text[from..].char_indices() {
        let ws = c.is_whitespace();
        if ws && prev_non_ws {
            crossed += 1;
            if crossed == boundaries {
                return from + i;
            }
        }
        prev_non_ws = !ws;
    }
    text.len()
}

fn skip_whitespace(text: &str, from: usize) -> usize {
    text[from..]
        .char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map(|(i, _)| from + i)
        .unwrap_or(text.len())
}

/// Recover the citation's span in the original document text, or `None` when
/// no strategy can place it.
pub fn locate_citation(citation: &str, document: &str) -> Option<Span> {
    let strategies: [&dyn MatchStrategy; 3] =
        [&DirectMatch, &WhitespaceTolerantMatch, &WordCountAlignMatch];
    strategies
        .iter()
        .find_map(|s| s.attempt(citation, document))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_pattern_escapes_literals_and_collapses_runs() {
        assert_eq!(
            whitespace_tolerant_pattern("a+b  c\nd"),
            r"a\+b\s+c\s+d"
        );
    }

    #[test]
    fn boundary_walk_counts_transitions() {
        let text = "The sky is blue";
        // Past "The" -> offset of the space after it.
        assert_eq!(offset_after_word_boundaries(text, 0, 1), 3);
        assert_eq!(offset_after_word_boundaries(text, 0, 2), 7);
        // The last word has no trailing whitespace: walk reports text end.
        assert_eq!(offset_after_word_boundaries(text, 0, 4), text.len());
    }

    #[test]
    fn boundary_walk_treats_runs_as_single_boundaries() {
        let text = "one  \t two";
        assert_eq!(offset_after_word_boundaries(text, 0, 1), 3);
        assert_eq!(skip_whitespace(text, 3), 7);
    }
}
