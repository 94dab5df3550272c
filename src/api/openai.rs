//! OpenAI-compatible chat-completions [`ReportGenerator`].

use super::ReportGenerator;
use anyhow::{anyhow, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

const SYSTEM_MESSAGE: &str = "You are a professional work report assistant. You write clear, well-structured work reports.";
const TEMPERATURE: f32 = 0.7;

#[derive(Debug)]
pub struct OpenAi {
    client: Client,
    api_url: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

impl OpenAi {
    /// `api_url` is the API base, e.g. `https://api.openai.com/v1`.
    pub fn new(api_url: &str) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.api_url)
    }
}

impl ReportGenerator for OpenAi {
    async fn generate_report(&self, api_key: &str, model: &str, prompt: &str) -> Result<String> {
        let request = ChatRequest {
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
            temperature: TEMPERATURE,
        };

        tracing::debug!(model, url = %self.endpoint(), "requesting report");
        let response = self.client.post(self.endpoint()).bearer_auth(api_key).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("API request failed with status {}: {}", status, body));
        }

        let response = response.json::<ChatResponse>().await?;
        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| anyhow!("API response contained no choices"))
    }
}
