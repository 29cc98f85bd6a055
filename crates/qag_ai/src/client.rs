use qag_core::error::AppError;

/// Client for an OpenAI-compatible chat API.
///
/// Construction is validated: https only (a plain-http 127.0.0.1 gateway is
/// allowed for local testing), trailing slash trimmed, non-empty API key.
#[derive(Debug, Clone)]
pub struct ChatEndpoint {
    base_url: String,
    api_key: String,
}

impl ChatEndpoint {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, AppError> {
        let base_url = base_url.trim_end_matches('/').to_string();

        let local_http = base_url.starts_with("http://127.0.0.1:") || base_url == "http://127.0.0.1";
        if !base_url.starts_with("https://") && !local_http {
            return Err(AppError::new(
                "GEN_ENDPOINT_INVALID",
                "Chat endpoint must use https (or a 127.0.0.1 http gateway)",
            )
            .with_details(format!("base_url={base_url}")));
        }
        if base_url == "https://" {
            return Err(AppError::new(
                "GEN_ENDPOINT_INVALID",
                "Chat endpoint host is missing",
            ));
        }
        if api_key.trim().is_empty() {
            return Err(AppError::new(
                "GEN_API_KEY_REQUIRED",
                "An API key is required",
            ));
        }

        Ok(Self {
            base_url,
            api_key: api_key.trim().to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn health_check(&self) -> Result<(), AppError> {
        let url = format!("{}/v1/models", self.base_url);
        let resp = ureq::get(&url)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .timeout(std::time::Duration::from_millis(800))
            .call();

        match resp {
            Ok(r) if r.status() == 200 => Ok(()),
            Ok(r) => Err(
                AppError::new("GEN_ENDPOINT_UNHEALTHY", "Chat endpoint health check failed")
                    .with_details(format!("status={}", r.status())),
            ),
            Err(e) => Err(AppError::new(
                "GEN_ENDPOINT_UNREACHABLE",
                "Failed to reach chat endpoint",
            )
            .with_details(e.to_string())
            .with_retryable(true)),
        }
    }
}
