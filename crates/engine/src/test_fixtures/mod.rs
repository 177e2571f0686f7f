//! Test fixtures and common test helpers.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::{ScriptedLlm, valid_draft_json};
//!
//! #[tokio::test]
//! async fn test_retry() {
//!     let llm = ScriptedLlm::new(["not json", &valid_draft_json()]);
//!     // ... test logic
//! }
//! ```

pub mod image_mocks;
pub mod llm_integration;

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use lorecrafter_domain::NarrativeDraft;
use serde_json::{json, Value};

use crate::infrastructure::ports::{LlmError, LlmPort, LlmRequest, LlmResponse};

// =============================================================================
// Narrative Drafts
// =============================================================================

/// A complete draft that passes every hard rule and stays under all word limits.
pub fn valid_draft_value() -> Value {
    json!({
        "setting": "Glowing Shadowwood",
        "protagonist_role": "Lantern Knight",
        "objective": "Restore family honor",
        "twist": "Shadows hide enemies",
        "npc": { "name": "Mira", "trait": "Wise" },
        "hook": "Blue fungus lights a forest where no bird sings.",
        "quest_offer": "Mira: \"My brother vanished past the thorn gate. Bring back his lantern.\"",
        "choice_a": "\"I will fight through the thorns.\"",
        "choice_b": "\"I will solve the gate riddle.\"",
        "challenge_intro": "The path twists; shadows lunge from the roots.",
        "climax": "Mira: \"I sealed that gate years ago. Forgive me.\"",
        "ending_good": "The lantern glows again and the forest breathes.",
        "ending_bad": "The shadows swallow the lantern and the path closes.",
        "epilogue": "A second lantern flickers somewhere north."
    })
}

pub fn valid_draft_json() -> String {
    valid_draft_value().to_string()
}

/// Valid draft with one field replaced.
pub fn draft_json_with(field: &str, value: Value) -> String {
    let mut raw = valid_draft_value();
    raw[field] = value;
    raw.to_string()
}

/// # Panics
///
/// Panics if `value` is not a JSON object.
pub fn draft_from(value: Value) -> NarrativeDraft {
    serde_json::from_value(value).expect("draft fixture must be a JSON object")
}

// =============================================================================
// Scripted LLM
// =============================================================================

/// LLM that replays a fixed script of replies, one per call.
///
/// Calls beyond the script fail with `RequestFailed`.
pub struct ScriptedLlm {
    replies: Mutex<VecDeque<Result<LlmResponse, LlmError>>>,
    requests: Mutex<Vec<LlmRequest>>,
    call_count: AtomicUsize,
}

impl ScriptedLlm {
    pub fn new<S: Into<String>>(replies: impl IntoIterator<Item = S>) -> Self {
        Self::from_results(replies.into_iter().map(|reply| Ok(reply.into())))
    }

    pub fn from_results(replies: impl IntoIterator<Item = Result<String, LlmError>>) -> Self {
        Self::from_responses(
            replies
                .into_iter()
                .map(|reply| reply.map(LlmResponse::text)),
        )
    }

    pub fn from_responses(
        replies: impl IntoIterator<Item = Result<LlmResponse, LlmError>>,
    ) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<LlmRequest> {
        self.requests.lock().expect("requests mutex poisoned").clone()
    }
}

#[async_trait]
impl LlmPort for ScriptedLlm {
    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, LlmError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .expect("requests mutex poisoned")
            .push(request);

        let next = self
            .replies
            .lock()
            .expect("replies mutex poisoned")
            .pop_front();
        match next {
            Some(reply) => reply,
            None => Err(LlmError::RequestFailed("script exhausted".to_string())),
        }
    }
}
