use serde::{Deserialize, Serialize};

use crate::prelude::{Error, Result};

/// Thin client for any OpenAI-compatible chat-completions endpoint. The
/// provider (openai, gemini, ollama) only changes the base url and key.
#[derive(Debug)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: &str) -> Self {
        ChatMessage {
            role: "system".into(),
            content: content.into(),
        }
    }

    pub fn user(content: &str) -> Self {
        ChatMessage {
            role: "user".into(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
pub struct AssistantMessage {
    pub content: Option<String>,
}

impl Client {
    pub fn from_url(api_key: &str, base_url: &str) -> Result<Self> {
        Ok(Client {
            http: reqwest::Client::builder().build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub async fn chat_completions(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        let res = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;
        let status = res.status();
        if !status.is_success() {
            tracing::warn!("completion endpoint returned {}", status);
            return Err(Error::CompletionStatus(status));
        }
        Ok(res.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_with_openai_field_names() {
        let request = ChatCompletionRequest {
            model: "gpt-3.5-turbo".into(),
            messages: vec![
                ChatMessage::system("context"),
                ChatMessage::user("question"),
            ],
            max_tokens: 500,
            temperature: 0.7,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-3.5-turbo");
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["content"], "question");
        assert_eq!(value["max_tokens"], 500);
    }

    #[test]
    fn response_parses_with_missing_content() {
        let raw = r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#;
        let response: ChatCompletionResponse = serde_json::from_str(raw).unwrap();
        assert!(response.choices[0].message.content.is_none());
    }

    #[test]
    fn response_ignores_unknown_fields() {
        let raw = r#"{"id":"cmpl-1","object":"chat.completion","choices":[
            {"index":0,"message":{"role":"assistant","content":"hi"},"finish_reason":"stop"}
        ],"usage":{"total_tokens":12}}"#;
        let response: ChatCompletionResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.choices[0].message.content.as_deref(), Some("hi"));
    }
}
