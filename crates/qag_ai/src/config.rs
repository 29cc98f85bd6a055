use qag_core::error::AppError;
use serde::{Deserialize, Serialize};

/// Generation settings supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratorConfig {
    pub model: String,
    pub temperature: f32,
    /// Minimum number of Q/A/Citation triples to ask for.
    pub min_triples: u32,
    /// Maximum number of Q/A/Citation triples to ask for.
    pub max_triples: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4.1".to_string(),
            temperature: 0.7,
            min_triples: 0,
            max_triples: 10,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.model.trim().is_empty() {
            return Err(AppError::new("GEN_CONFIG_INVALID", "Model name is required"));
        }
        if self.min_triples > self.max_triples {
            return Err(AppError::new(
                "GEN_CONFIG_INVALID",
                "min_triples must not exceed max_triples",
            )
            .with_details(format!(
                "min={}; max={}",
                self.min_triples, self.max_triples
            )));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(AppError::new(
                "GEN_CONFIG_INVALID",
                "Temperature must be within 0.0..=2.0",
            )
            .with_details(format!("temperature={}", self.temperature)));
        }
        Ok(())
    }
}
