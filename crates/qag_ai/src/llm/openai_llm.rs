use qag_core::error::AppError;
use serde::{Deserialize, Serialize};

use super::Llm;
use crate::client::ChatEndpoint;

const SYSTEM_MESSAGE: &str = "You are a helpful assistant that generates training data for RAG systems. You always respond with valid JSON.";

/// Chat-completions implementation of the `Llm` seam.
#[derive(Debug, Clone)]
pub struct OpenAiLlm {
    endpoint: ChatEndpoint,
    temperature: f32,
}

impl OpenAiLlm {
    pub fn new(endpoint: ChatEndpoint, temperature: f32) -> Self {
        Self {
            endpoint,
            temperature,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Clone, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Clone, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Clone, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

impl Llm for OpenAiLlm {
    fn generate(&self, model: &str, prompt: &str) -> Result<String, AppError> {
        let url = format!("{}/v1/chat/completions", self.endpoint.base_url());
        let req = ChatRequest {
            model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_MESSAGE,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: self.temperature,
        };

        let resp = ureq::post(&url)
            .set(
                "Authorization",
                &format!("Bearer {}", self.endpoint.api_key()),
            )
            .timeout(std::time::Duration::from_secs(120))
            .send_json(serde_json::to_value(req).map_err(|e| {
                AppError::new("GEN_REQUEST_FAILED", "Failed to encode chat request")
                    .with_details(e.to_string())
            })?);

        match resp {
            Ok(r) if r.status() == 200 => {
                let v: ChatResponse = r.into_json().map_err(|e| {
                    AppError::new("GEN_RESPONSE_FAILED", "Failed to decode chat response")
                        .with_details(e.to_string())
                })?;
                let content = v
                    .choices
                    .into_iter()
                    .next()
                    .and_then(|c| c.message.content)
                    .unwrap_or_default();
                if content.trim().is_empty() {
                    return Err(AppError::new(
                        "GEN_RESPONSE_FAILED",
                        "Chat response was empty",
                    ));
                }
                Ok(content)
            }
            Ok(r) => Err(
                AppError::new("GEN_REQUEST_FAILED", "Chat request failed")
                    .with_details(format!("status={}", r.status())),
            ),
            Err(e) => Err(
                AppError::new("GEN_REQUEST_FAILED", "Failed to call chat endpoint")
                    .with_details(e.to_string())
                    .with_retryable(true),
            ),
        }
    }
}
