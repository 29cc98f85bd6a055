use qag_core::domain::{QaTriple, ValidationWarning};
use qag_core::error::AppError;
use qag_core::review::{review_document, DocumentReview};
use serde::{Deserialize, Serialize};

use crate::config::GeneratorConfig;
use crate::llm::Llm;

mod parse;
mod prompts;

pub use parse::parse_triples_response;
pub use prompts::qa_triples_prompt;

/// Triples plus whatever the response parser had to skip over.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneratedTriples {
    pub triples: Vec<QaTriple>,
    pub warnings: Vec<ValidationWarning>,
}

/// A full generate-and-review result for one document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneratedReview {
    pub triples: Vec<QaTriple>,
    pub review: DocumentReview,
    pub warnings: Vec<ValidationWarning>,
}

/// Ask the model for Q/A/Citation triples over `document`.
///
/// The document must be non-empty: with nothing to cite against, a
/// generation request is a caller error rather than a negative result.
pub fn generate_triples(
    llm: &dyn Llm,
    config: &GeneratorConfig,
    document: &str,
) -> Result<GeneratedTriples, AppError> {
    config.validate()?;
    if document.trim().is_empty() {
        return Err(AppError::new(
            "GEN_DOCUMENT_EMPTY",
            "Document text is required for generation",
        ));
    }

    let prompt = qa_triples_prompt(config.min_triples, config.max_triples, document);
    let response = llm.generate(&config.model, &prompt)?;
    let (triples, warnings) = parse_triples_response(&response);
    Ok(GeneratedTriples { triples, warnings })
}

/// Generate triples and review every citation against the source document:
/// validity, span recovery, and the assembled highlight partition.
pub fn generate_reviewed(
    llm: &dyn Llm,
    config: &GeneratorConfig,
    document: &str,
) -> Result<GeneratedReview, AppError> {
    let generated = generate_triples(llm, config, document)?;
    let review = review_document(document, &generated.triples);
    Ok(GeneratedReview {
        triples: generated.triples,
        review,
        warnings: generated.warnings,
    })
}

/// Rough cost estimate for a generation run, in USD.
///
/// Assumes the model produces roughly twice the input volume when drafting
/// Q/A triples. Pricing drifts; treat as an order-of-magnitude figure.
pub fn estimate_cost_usd(input_tokens: u64) -> f64 {
    const INPUT_COST_PER_1K: f64 = 0.03;
    const OUTPUT_COST_PER_1K: f64 = 0.06;
    let input_cost = (input_tokens as f64 / 1000.0) * INPUT_COST_PER_1K;
    let output_cost = (input_tokens as f64 * 2.0 / 1000.0) * OUTPUT_COST_PER_1K;
    input_cost + output_cost
}
