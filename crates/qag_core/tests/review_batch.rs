use pretty_assertions::assert_eq;
use qag_core::domain::{QaTriple, Span};
use qag_core::highlight::DocumentSegment;
use qag_core::review::review_document;

const DOC: &str = "The sky is blue. Water boils at 100 degrees Celsius at sea level.";

fn triple(question: &str, answer: &str, citation: &str) -> QaTriple {
    QaTriple {
        question: question.to_string(),
        answer: answer.to_string(),
        citation: citation.to_string(),
    }
}

#[test]
fn reviews_and_segments_for_mixed_batch() {
    let triples = vec![
        triple(
            "At what temperature does water boil?",
            "100 degrees Celsius at sea level.",
            "Water boils at 100 degrees Celsius",
        ),
        triple(
            "What do we know about the sky?",
            "It is blue.",
            "sky is blue ... boils at 100 degrees",
        ),
        triple(
            "When does water freeze?",
            "Not supported by the document.",
            "Water freezes at 100 degrees",
        ),
    ];

    let review = review_document(DOC, &triples);
    assert_eq!(review.reviews.len(), 3);
    assert_eq!(review.valid_count(), 2);
    assert_eq!(review.invalid_count(), 1);

    // Verbatim citation: valid and located at its exact offset.
    let first = &review.reviews[0];
    assert!(first.citation_valid);
    assert_eq!(first.span, Some(Span::new(17, 51)));

    // Elided citation: valid but unplaceable (the marker never occurs in
    // the document text); the two judgments are independent.
    let second = &review.reviews[1];
    assert!(second.citation_valid);
    assert_eq!(second.span, None);

    // Fabricated citation: invalid and unplaceable.
    let third = &review.reviews[2];
    assert!(!third.citation_valid);
    assert_eq!(third.span, None);

    // Only the valid AND located citation is rendered.
    let rendered: String = review.segments.iter().map(|s| s.text()).collect();
    assert_eq!(rendered, DOC);
    let marked: Vec<(&str, u32)> = review
        .segments
        .iter()
        .filter_map(|s| match s {
            DocumentSegment::Marked { text, ordinal, .. } => Some((text.as_str(), *ordinal)),
            _ => None,
        })
        .collect();
    assert_eq!(marked, vec![("Water boils at 100 degrees Celsius", 0)]);
}

#[test]
fn reviews_keep_input_order() {
    let triples: Vec<QaTriple> = (0..16)
        .map(|i| triple(&format!("q{i}"), &format!("a{i}"), "sky"))
        .collect();
    let review = review_document(DOC, &triples);
    let ordinals: Vec<u32> = review.reviews.iter().map(|r| r.ordinal).collect();
    assert_eq!(ordinals, (0..16).collect::<Vec<u32>>());
}

#[test]
fn empty_batch_yields_plain_document() {
    let review = review_document(DOC, &[]);
    assert!(review.reviews.is_empty());
    assert_eq!(review.segments.len(), 1);
    assert_eq!(review.segments[0].text(), DOC);
}

#[test]
fn empty_document_degrades_without_panicking() {
    let review = review_document("", &[triple("q", "a", "anything")]);
    assert_eq!(review.reviews.len(), 1);
    assert!(!review.reviews[0].citation_valid);
    assert_eq!(review.reviews[0].span, None);
    assert!(review.segments.is_empty());
}
