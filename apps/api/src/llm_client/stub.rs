//! Recording `TextProvider` for tests. Never touches the network.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::composer::ComposedPrompt;
use crate::llm_client::{LlmError, TextProvider};

pub struct StubProvider {
    reply: Result<String, String>,
    calls: Mutex<Vec<(String, ComposedPrompt)>>,
}

impl StubProvider {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Fails every call with an API error carrying `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, ComposedPrompt)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextProvider for StubProvider {
    async fn generate(&self, api_key: &str, prompt: &ComposedPrompt) -> Result<String, LlmError> {
        self.calls
            .lock()
            .unwrap()
            .push((api_key.to_string(), prompt.clone()));
        self.reply.clone().map_err(|message| LlmError::Api {
            status: 503,
            message,
        })
    }
}
