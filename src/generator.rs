use crate::config::Config;
use crate::types::SamplingConfig;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A hosted text-generation endpoint. `Ok(None)` means the call succeeded but
/// the model produced no text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        system_instruction: &str,
        user_content: &str,
        sampling: &SamplingConfig,
    ) -> Result<Option<String>, BoxError>;

    fn name(&self) -> &str;
}

/// Builds the HTTP client for the generation endpoint. No deadline is set
/// unless the configuration asks for one.
pub fn http_client(config: &Config) -> reqwest::Result<Client> {
    let mut builder = Client::builder();
    if let Some(secs) = config.request_timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder.build()
}

pub struct GeminiGenerator {
    client: Client,
    api_base_url: String,
    api_key: Option<String>,
    model: String,
    debug: bool,
}

impl GeminiGenerator {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            debug: config.debug,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base_url, self.model
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    async fn generate(
        &self,
        system_instruction: &str,
        user_content: &str,
        sampling: &SamplingConfig,
    ) -> Result<Option<String>, BoxError> {
        let request_body = serde_json::json!({
            "systemInstruction": {
                "parts": [{ "text": system_instruction }]
            },
            "contents": [{
                "role": "user",
                "parts": [{ "text": user_content }]
            }],
            "generationConfig": {
                "temperature": sampling.temperature,
                "topP": sampling.top_p
            }
        });

        if self.debug {
            log::debug!("==== GENERATION REQUEST ====");
            log::debug!("Endpoint: {}", self.endpoint());
            log::debug!("User content ({} chars)", user_content.chars().count());
            log::debug!(
                "Sampling: temperature={} top_p={}",
                sampling.temperature,
                sampling.top_p
            );
        }

        let mut request = self.client.post(self.endpoint()).json(&request_body);
        if let Some(key) = &self.api_key {
            request = request.header("x-goog-api-key", key);
        } else {
            log::warn!("No API key configured, sending unauthenticated request");
        }

        let response = request
            .send()
            .await
            .map_err(|e| format!("Connection error: {e}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error body".into());
            return Err(format!("Generation API error: HTTP {status}, body: {error_text}").into());
        }

        let json = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| format!("JSON parsing error: {e}"))?;

        let text = extract_text(&json);
        match &text {
            Some(text) => log::info!(
                "Got generation ({} chars): \"{}...\"",
                text.chars().count(),
                text.chars().take(30).collect::<String>()
            ),
            None => log::warn!("No text in generation response: {json}"),
        }

        Ok(text)
    }

    fn name(&self) -> &str {
        &self.model
    }
}

/// Joins the text parts of the first candidate. Empty text counts as absent.
pub fn extract_text(json: &serde_json::Value) -> Option<String> {
    let parts = json
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .as_array()?;

    let text: String = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(|t| t.as_str()))
        .collect();

    if text.is_empty() { None } else { Some(text) }
}
