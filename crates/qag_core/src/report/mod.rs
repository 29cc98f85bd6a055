//! Human-readable processing summary for a batch of documents.

use serde::{Deserialize, Serialize};

/// Per-document outcome of a generate-and-review run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProcessOutcome {
    pub source_label: String,
    pub success: bool,
    pub triple_count: u32,
    pub invalid_citations: u32,
    pub error: Option<String>,
}

/// Render the batch summary as a Markdown block.
pub fn format_results_summary(outcomes: &[ProcessOutcome]) -> String {
    let successful = outcomes.iter().filter(|o| o.success).count();
    let failed = outcomes.len() - successful;
    let total_triples: u32 = outcomes
        .iter()
        .filter(|o| o.success)
        .map(|o| o.triple_count)
        .sum();

    let mut summary = format!(
        "## Processing Summary\n\n\
         - **Total Documents:** {}\n\
         - **Successful:** {}\n\
         - **Failed:** {}\n\
         - **Total Q/A Triples:** {}\n\n\
         ### Details:\n",
        outcomes.len(),
        successful,
        failed,
        total_triples,
    );

    for outcome in outcomes {
        let status = if outcome.success { "ok" } else { "failed" };
        summary.push_str(&format!("\n[{status}] **{}**", outcome.source_label));
        if outcome.success {
            summary.push_str(&format!(" - {} questions", outcome.triple_count));
            if outcome.invalid_citations > 0 {
                summary.push_str(&format!(
                    " ({} invalid citations)",
                    outcome.invalid_citations
                ));
            }
        } else if let Some(error) = outcome.error.as_deref() {
            summary.push_str(&format!(" - Error: {error}"));
        }
    }

    summary
}
