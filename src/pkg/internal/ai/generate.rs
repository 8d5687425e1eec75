use std::sync::Arc;

use crate::{
    conf::settings,
    pkg::internal::ai::client::{ChatCompletionRequest, ChatMessage, Client},
    prelude::Result,
};

const FALLBACK_REPLY: &str = "I'm sorry, I couldn't generate a response.";

#[async_trait::async_trait]
pub trait GenerateOps {
    async fn answer_visitor(&self, context: &str, query: &str) -> Result<String>;
}

#[async_trait::async_trait]
impl GenerateOps for Arc<Client> {
    async fn answer_visitor(&self, context: &str, query: &str) -> Result<String> {
        let request = ChatCompletionRequest {
            model: settings.ai_model.clone(),
            messages: vec![ChatMessage::system(context), ChatMessage::user(query)],
            max_tokens: 500,
            temperature: 0.7,
        };
        let response = self.chat_completions(&request).await?;
        let answer = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_else(|| FALLBACK_REPLY.to_string());
        Ok(answer)
    }
}
