//! Extraction backend — pluggable, trait-based conversion of raw resume text
//! into structured `ResumeData`.
//!
//! `AppState` holds an `Arc<dyn ResumeExtractor>`, so tests can substitute a
//! stub for the Ollama-backed production implementation.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::extraction::prompts::RESUME_PARSE_PROMPT;
use crate::llm_client::OllamaClient;
use crate::models::resume::ResumeData;

/// The extraction backend trait: resume text in, structured fields out.
/// Fails with a single backend-error kind.
#[async_trait]
pub trait ResumeExtractor: Send + Sync {
    async fn extract(&self, resume_text: &str) -> Result<ResumeData, AppError>;
}

/// Production extractor backed by a locally-hosted Ollama model.
pub struct OllamaExtractor {
    llm: OllamaClient,
}

impl OllamaExtractor {
    pub fn new(llm: OllamaClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ResumeExtractor for OllamaExtractor {
    async fn extract(&self, resume_text: &str) -> Result<ResumeData, AppError> {
        let prompt = RESUME_PARSE_PROMPT.replace("{resume_text}", resume_text);
        self.llm
            .call_json::<ResumeData>(&prompt)
            .await
            .map_err(|e| AppError::Llm(format!("Resume extraction failed: {e}")))
    }
}
