use qag_core::domain::{QaTriple, ValidationWarning};

/// Pull the JSON payload out of a model response.
///
/// Models frequently wrap the array in a markdown code fence or surround it
/// with prose; prefer a fenced ```json block, else the outermost `[...]`
/// slice, else the raw text.
fn extract_json_slice(response: &str) -> &str {
    if let Some(fence_start) = response.find("```json") {
        let body = &response[fence_start + "```json".len()..];
        if let Some(fence_end) = body.find("```") {
            return body[..fence_end].trim();
        }
    }
    if let (Some(open), Some(close)) = (response.find('['), response.rfind(']')) {
        if open < close {
            return response[open..=close].trim();
        }
    }
    response.trim()
}

/// Decode a model response into triples.
///
/// An undecodable response or a malformed element is an expected outcome of
/// an untrusted generator: both degrade to warnings, never to an error.
pub fn parse_triples_response(response: &str) -> (Vec<QaTriple>, Vec<ValidationWarning>) {
    let mut warnings = Vec::new();
    let slice = extract_json_slice(response);

    let value: serde_json::Value = match serde_json::from_str(slice) {
        Ok(v) => v,
        Err(e) => {
            warnings.push(
                ValidationWarning::new(
                    "GEN_RESPONSE_PARSE_FAILED",
                    "Failed to parse model response as JSON",
                )
                .with_details(e.to_string()),
            );
            return (Vec::new(), warnings);
        }
    };

    let Some(items) = value.as_array() else {
        warnings.push(ValidationWarning::new(
            "GEN_RESPONSE_PARSE_FAILED",
            "Model response is not a JSON array",
        ));
        return (Vec::new(), warnings);
    };

    let mut triples = Vec::new();
    for (index, item) in items.iter().enumerate() {
        let question = item.get("question").and_then(|v| v.as_str());
        let answer = item.get("answer").and_then(|v| v.as_str());
        let citation = item.get("citation").and_then(|v| v.as_str());
        match (question, answer, citation) {
            (Some(question), Some(answer), Some(citation)) => triples.push(QaTriple {
                question: question.trim().to_string(),
                answer: answer.trim().to_string(),
                citation: citation.trim().to_string(),
            }),
            _ => warnings.push(
                ValidationWarning::new(
                    "GEN_TRIPLE_MALFORMED",
                    "Model triple is missing question, answer, or citation",
                )
                .with_details(format!("index={index}")),
            ),
        }
    }
    (triples, warnings)
}
