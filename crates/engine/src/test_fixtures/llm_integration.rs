//! Live LLM test helpers.
//!
//! Integration tests using these helpers are `#[ignore]`d and need a real
//! chat-completions endpoint configured through the environment.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::llm_integration::*;
//!
//! #[tokio::test]
//! #[ignore = "requires LLM_API_KEY"]
//! async fn test_live_generation() {
//!     let client = create_test_client().expect("LLM_API_KEY not set");
//!     // ... test logic
//! }
//! ```

use crate::infrastructure::chat_completions::{
    ChatCompletionsClient, DEFAULT_LLM_BASE_URL, DEFAULT_LLM_MODEL,
};

/// Creates a client for integration testing.
///
/// Uses environment variables for configuration:
/// - `LLM_API_KEY` / `GROQ_API_KEY`: required
/// - `LLM_BASE_URL`: defaults to Groq
/// - `LLM_MODEL`: defaults to llama3-70b-8192
pub fn create_test_client() -> Option<ChatCompletionsClient> {
    let api_key = std::env::var("LLM_API_KEY")
        .or_else(|_| std::env::var("GROQ_API_KEY"))
        .ok()
        .filter(|key| !key.is_empty())?;
    let base_url =
        std::env::var("LLM_BASE_URL").unwrap_or_else(|_| DEFAULT_LLM_BASE_URL.to_string());
    let model = std::env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_LLM_MODEL.to_string());
    Some(ChatCompletionsClient::new(&base_url, &model, Some(api_key)))
}
