//! Generative service boundary and the Gemini HTTP client
//!
//! Credential presence is resolved once into [`GenerativeConfig`] and
//! injected; nothing here reads the environment ad hoc at call time.

use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Text-completion boundary: one system instruction, one user instruction,
/// deterministic sampling controls.
#[async_trait]
pub trait TextCompletion: Send + Sync {
    async fn generate(
        &self,
        system: &str,
        user: &str,
        temperature: f32,
        max_output_tokens: u32,
    ) -> anyhow::Result<String>;
}

/// Configuration for the generative service client.
///
/// A missing API key is a valid configuration: it selects the documented
/// degraded mode (heuristics-only findings), not an error.
#[derive(Debug, Clone)]
pub struct GenerativeConfig {
    api_key: Option<Secret<String>>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl Default for GenerativeConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-pro".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            timeout: Duration::from_secs(30),
            temperature: 0.0,
            max_output_tokens: 800,
        }
    }
}

impl GenerativeConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(Secret::new(api_key.into())),
            ..Self::default()
        }
    }

    /// Resolve from the environment, once, at process start.
    ///
    /// Reads `GEMINI_API_KEY` (absence selects degraded mode),
    /// `GEMINI_MODEL`, `GEMINI_BASE_URL` and `GEMINI_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        let mut config = match std::env::var("GEMINI_API_KEY") {
            Ok(key) if !key.trim().is_empty() => Self::new(key),
            _ => Self::default(),
        };
        if let Ok(model) = std::env::var("GEMINI_MODEL") {
            config.model = model;
        }
        if let Ok(base_url) = std::env::var("GEMINI_BASE_URL") {
            config.base_url = base_url;
        }
        if let Some(secs) = std::env::var("GEMINI_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            config.timeout = Duration::from_secs(secs);
        }
        config
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_ref().map(|k| k.expose_secret().as_str())
    }
}

// ============================================================================
// Gemini wire format
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    system_instruction: GeminiContent,
    contents: Vec<GeminiContent>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}

/// Gemini `generateContent` client.
pub struct GeminiClient {
    config: GenerativeConfig,
    client: reqwest::Client,
}

impl GeminiClient {
    /// Build a client from a configuration carrying a credential.
    /// Returns `Ok(None)` when no API key is configured.
    pub fn from_config(config: &GenerativeConfig) -> anyhow::Result<Option<Self>> {
        if !config.has_credential() {
            return Ok(None);
        }
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Some(Self {
            config: config.clone(),
            client,
        }))
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }
}

#[async_trait]
impl TextCompletion for GeminiClient {
    async fn generate(
        &self,
        system: &str,
        user: &str,
        temperature: f32,
        max_output_tokens: u32,
    ) -> anyhow::Result<String> {
        let request = GeminiRequest {
            system_instruction: GeminiContent {
                role: None,
                parts: vec![GeminiPart {
                    text: system.to_string(),
                }],
            },
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart {
                    text: user.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature,
                max_output_tokens,
            },
        };

        let api_key = self
            .config
            .api_key()
            .ok_or_else(|| anyhow::anyhow!("generative client built without credential"))?;

        let response = self
            .client
            .post(self.generate_url())
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("generative service returned {}: {}", status, body);
        }

        let parsed: GeminiResponse = response.json().await?;
        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| anyhow::anyhow!("generative response carried no candidates"))?;

        Ok(text)
    }
}
