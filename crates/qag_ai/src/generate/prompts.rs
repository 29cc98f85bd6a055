pub fn qa_triples_prompt(min_triples: u32, max_triples: u32, document: &str) -> String {
    // Keep the contract explicit:
    // - Citations are EXACT snippets, word-for-word, no paraphrasing.
    // - Each citation is one continuous passage.
    // - Response is a bare JSON array of question/answer/citation objects.
    format!(
        r#"You are tasked with generating question-answer-citation triples from a document for RAG evaluation.

Generate between {min_triples} and {max_triples} question/answer/citation triples based on the content below. The questions should be natural questions that a naive user (someone unfamiliar with the topic) might ask.

IMPORTANT RULES:
1. Questions should be clear and specific
2. Answers should be accurate and based solely on the document
3. Citations MUST be EXACT text snippets from the document (word-for-word, no paraphrasing, same formatting)
4. Each citation should be a continuous passage from the document
5. The citation should support the answer directly
6. Generate only as many triples as make sense for the document (minimum {min_triples}, maximum {max_triples})
7. For short documents with limited content, generate fewer triples
8. Questions should vary in complexity and topic

Return your response as a JSON array with this exact structure:
[
  {{
    "question": "What is...?",
    "answer": "The answer based on the document...",
    "citation": "Exact text snippet from the document that supports this answer"
  }}
]

DOCUMENT:
{document}

Generate the Q/A/Citation triples in JSON format:"#
    )
}
