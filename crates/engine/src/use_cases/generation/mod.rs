//! Narrative generation: ask the model, validate, retry.
//!
//! Every attempt is one chat-completions call followed by JSON extraction and
//! validation. Endpoint errors, unparseable replies and invalid drafts all use
//! up the same attempt budget. When the budget runs out, the most recent
//! invalid draft that the fallback policy allows is returned instead of an
//! error.

pub mod prompt;
pub mod validator;

use std::sync::Arc;

use lorecrafter_domain::{FallbackPolicy, NarrativeDraft, ValidationOutcome};
use serde_json::Value;

use crate::infrastructure::ports::{ChatMessage, LlmError, LlmPort, LlmRequest};

#[derive(Debug, Clone)]
pub struct GenerationSettings {
    pub max_attempts: u32,
    pub temperature: f32,
    pub max_tokens: u32,
    pub fallback_policy: FallbackPolicy,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            temperature: 0.1,
            max_tokens: 8000,
            fallback_policy: FallbackPolicy::default(),
        }
    }
}

/// The accepted draft. `validation` is invalid only for a fallback draft.
#[derive(Debug, Clone)]
pub struct GeneratedNarrative {
    pub draft: NarrativeDraft,
    pub validation: ValidationOutcome,
    pub attempts: u32,
}

/// Why a single attempt produced no draft. Never leaves this module.
#[derive(Debug, thiserror::Error)]
pub enum AttemptFailure {
    #[error(transparent)]
    Endpoint(#[from] LlmError),
    #[error("JSON parsing error: {0}")]
    Parse(String),
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("No acceptable narrative after {attempts} attempts: {last_error}")]
    Exhausted { attempts: u32, last_error: String },
}

pub struct GenerateNarrative {
    llm: Arc<dyn LlmPort>,
    settings: GenerationSettings,
}

impl GenerateNarrative {
    pub fn new(llm: Arc<dyn LlmPort>) -> Self {
        Self::with_settings(llm, GenerationSettings::default())
    }

    pub fn with_settings(llm: Arc<dyn LlmPort>, settings: GenerationSettings) -> Self {
        Self { llm, settings }
    }

    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    pub async fn execute(&self, prompt: &str) -> Result<GeneratedNarrative, GenerationError> {
        let request = self.build_request(prompt);
        let max_attempts = self.settings.max_attempts.max(1);
        let policy = self.settings.fallback_policy;

        let mut fallback: Option<(NarrativeDraft, ValidationOutcome)> = None;
        let mut last_error = String::from("No valid output");

        for attempt in 1..=max_attempts {
            tracing::info!(attempt, max_attempts, "Requesting narrative from LLM");

            let draft = match self.attempt(request.clone()).await {
                Ok(draft) => draft,
                Err(failure) => {
                    tracing::warn!(attempt, error = %failure, "Narrative attempt failed");
                    last_error = failure.to_string();
                    continue;
                }
            };

            let validation = validator::validate(&draft);
            if !validation.is_rejection() {
                for advisory in validator::advisories(&draft) {
                    tracing::warn!(attempt, advisory = %advisory, "Narrative word limit exceeded");
                }
            }

            if validation.is_valid() {
                tracing::info!(attempt, "Generated valid narrative");
                return Ok(GeneratedNarrative {
                    draft,
                    validation,
                    attempts: attempt,
                });
            }

            let reason = validation.reason().unwrap_or("invalid narrative").to_string();
            tracing::warn!(attempt, reason = %reason, "Narrative failed validation");
            last_error = reason;

            if validation.kind.is_some_and(|kind| policy.permits(kind)) {
                fallback = Some((draft, validation));
            }
        }

        if let Some((draft, validation)) = fallback {
            tracing::info!(
                policy = %policy,
                reason = validation.reason().unwrap_or_default(),
                "Returning last narrative despite validation failures"
            );
            return Ok(GeneratedNarrative {
                draft,
                validation,
                attempts: max_attempts,
            });
        }

        tracing::error!(attempts = max_attempts, last_error = %last_error, "Narrative generation exhausted");
        Err(GenerationError::Exhausted {
            attempts: max_attempts,
            last_error,
        })
    }

    fn build_request(&self, prompt: &str) -> LlmRequest {
        LlmRequest::new(vec![
            ChatMessage::system(prompt::build_system_prompt(prompt)),
            ChatMessage::user(prompt),
        ])
            .with_temperature(self.settings.temperature)
            .with_max_tokens(Some(self.settings.max_tokens))
    }

    async fn attempt(&self, request: LlmRequest) -> Result<NarrativeDraft, AttemptFailure> {
        let response = self.llm.generate(request).await?;
        if let Some(usage) = &response.usage {
            tracing::debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "LLM token usage"
            );
        }

        parse_draft(&response.content).map_err(|failure| match failure {
            AttemptFailure::Parse(message) if response.is_truncated() => AttemptFailure::Parse(
                format!("{} (reply truncated at the token limit)", message),
            ),
            other => other,
        })
    }
}

/// Parse a model reply into a draft. Only JSON objects are drafts.
pub fn parse_draft(content: &str) -> Result<NarrativeDraft, AttemptFailure> {
    let json = extract_json(content);
    match serde_json::from_str::<Value>(json) {
        Ok(Value::Object(fields)) => Ok(NarrativeDraft::new(fields)),
        Ok(_) => Err(AttemptFailure::Parse("Invalid JSON structure".to_string())),
        Err(e) => Err(AttemptFailure::Parse(e.to_string())),
    }
}

/// Extract JSON from a reply that might be wrapped in a markdown code fence
/// or surrounded by chatter.
pub fn extract_json(response: &str) -> &str {
    // Markdown code block, with or without a language tag
    if let Some(start) = response.find("```") {
        let body = &response[start + 3..];
        if let Some(end) = body.find("```") {
            let content = body[..end].trim();
            // Skip a language tag, whether or not a newline follows it
            return match content.find(['{', '[']) {
                Some(json_start) => content[json_start..].trim(),
                None => content,
            };
        }
    }

    // Raw JSON object with leading or trailing text
    if let (Some(start), Some(end)) = (response.find('{'), response.rfind('}')) {
        if start < end {
            return &response[start..=end];
        }
    }

    response.trim()
}
