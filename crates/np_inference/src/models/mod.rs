use async_trait::async_trait;
use np_core::{GroundingChunk, Result};
use std::fmt;
use std::sync::Arc;

use crate::Config;

pub mod gemini;
pub mod scripted;

pub use gemini::GeminiProvider;
pub use scripted::ScriptedProvider;

/// One completion call: the prompt, an optional persona, and whether the
/// provider's built-in web search is enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub contents: String,
    pub system_instruction: Option<String>,
    pub google_search: bool,
}

impl GenerateRequest {
    pub fn grounded(contents: impl Into<String>) -> Self {
        Self {
            contents: contents.into(),
            system_instruction: None,
            google_search: true,
        }
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateResponse {
    pub text: Option<String>,
    pub grounding_chunks: Vec<GroundingChunk>,
}

impl GenerateResponse {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            grounding_chunks: Vec::new(),
        }
    }

    /// Text with blank responses folded into `None`.
    pub fn non_empty_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.trim().is_empty())
    }
}

#[async_trait]
pub trait Provider: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse>;
}

pub fn create_provider(config: &Config) -> Result<Arc<dyn Provider>> {
    if config.offline {
        tracing::info!("Using offline demo provider");
        return Ok(Arc::new(ScriptedProvider::demo()));
    }
    let provider = GeminiProvider::new(config)?;
    tracing::debug!("Using Gemini provider with model {}", provider.model());
    Ok(Arc::new(provider))
}
