//! Evaluation Client — pluggable, trait-based evaluator that sends a thesis to the model.
//!
//! Default: `GeminiEvaluator` (one `generateContent` call per submission).
//! Tests swap in stub evaluators through the same trait.
//!
//! `AppState` holds an `Arc<dyn Evaluator>`, built at startup from config.

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

use crate::evaluation::consistency;
use crate::evaluation::encoder::EncodedDocument;
use crate::evaluation::models::EvaluationResult;
use crate::evaluation::prompts::build_evaluation_prompt;
use crate::llm_client::{InlineData, LlmClient, LlmError, Part};

#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("API key is missing")]
    MissingCredential,

    #[error(transparent)]
    Model(#[from] LlmError),
}

/// The evaluator trait. Implement this to swap backends without touching
/// the session controller or the handlers.
#[async_trait]
pub trait Evaluator: Send + Sync {
    /// Synchronous readiness check run before any task is spawned.
    fn check_ready(&self) -> Result<(), EvaluationError> {
        Ok(())
    }

    async fn evaluate(
        &self,
        candidate_name: &str,
        document: &EncodedDocument,
    ) -> Result<EvaluationResult, EvaluationError>;
}

/// Gemini-backed evaluator. `client` is `None` when no API key was configured.
pub struct GeminiEvaluator {
    client: Option<LlmClient>,
}

impl GeminiEvaluator {
    pub fn new(api_key: Option<String>, api_base: String) -> Self {
        Self {
            client: api_key.map(|key| LlmClient::new(key, api_base)),
        }
    }
}

#[async_trait]
impl Evaluator for GeminiEvaluator {
    fn check_ready(&self) -> Result<(), EvaluationError> {
        match self.client {
            Some(_) => Ok(()),
            None => Err(EvaluationError::MissingCredential),
        }
    }

    async fn evaluate(
        &self,
        candidate_name: &str,
        document: &EncodedDocument,
    ) -> Result<EvaluationResult, EvaluationError> {
        let client = self
            .client
            .as_ref()
            .ok_or(EvaluationError::MissingCredential)?;

        let prompt = build_evaluation_prompt(candidate_name, &document.file_name);
        let parts = [
            Part::Text { text: &prompt },
            Part::InlineData {
                inline_data: InlineData {
                    mime_type: document.mime_type(),
                    data: &document.data,
                },
            },
        ];

        info!(
            "Sending {} ({}) for evaluation",
            document.file_name,
            document.mime_type()
        );
        let result: EvaluationResult = client.call_json(&parts).await?;

        for warning in consistency::inspect(&result) {
            warn!("Evaluation reply inconsistency for {}: {warning}", document.file_name);
        }

        Ok(result)
    }
}
