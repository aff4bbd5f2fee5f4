//! Scripted `GenerativeService` for tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::llm_client::{GenerativeService, InlineImage, LlmError};

#[derive(Debug, Clone)]
pub enum ImageReply {
    Image,
    Empty,
    Fail,
}

/// Replies with a fixed text (or a 500) and a fixed image outcome.
/// Image calls can be held behind `image_gate` until the test releases them.
pub struct ScriptedService {
    text: Option<String>,
    image: ImageReply,
    image_gate: Option<Arc<Notify>>,
    pub prompts: Mutex<Vec<String>>,
}

impl ScriptedService {
    pub fn replying(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            image: ImageReply::Image,
            image_gate: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            text: None,
            ..Self::replying("")
        }
    }

    pub fn with_images(mut self, image: ImageReply) -> Self {
        self.image = image;
        self
    }

    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.image_gate = Some(gate);
        self
    }

    pub fn sample_image() -> InlineImage {
        InlineImage {
            mime_type: "image/png".to_string(),
            data: "iVBORw0KGgo=".to_string(),
        }
    }
}

#[async_trait]
impl GenerativeService for ScriptedService {
    async fn generate_text(&self, prompt: &str, _system: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.text.clone().ok_or_else(|| LlmError::Api {
            status: 500,
            message: "scripted failure".to_string(),
        })
    }

    async fn generate_image(&self, _prompt: &str) -> Result<Option<InlineImage>, LlmError> {
        if let Some(gate) = &self.image_gate {
            gate.notified().await;
        }
        match self.image {
            ImageReply::Image => Ok(Some(Self::sample_image())),
            ImageReply::Empty => Ok(None),
            ImageReply::Fail => Err(LlmError::EmptyContent),
        }
    }
}
