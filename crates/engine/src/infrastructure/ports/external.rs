//! External service port traits (LLM, image rendering, asset storage, response cache).

use async_trait::async_trait;
use lorecrafter_domain::{AssetKind, GameResponse};

use super::error::{AssetStoreError, ImageGenError, LlmError};

// =============================================================================
// LLM Types
// =============================================================================

/// LLM request/response types
#[derive(Debug, Clone)]
pub struct LlmRequest {
    /// The conversation, system instruction first
    pub messages: Vec<ChatMessage>,
    /// Temperature for response generation (0.0 - 2.0)
    pub temperature: Option<f32>,
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
}

impl LlmRequest {
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            temperature: None,
            max_tokens: None,
        }
    }

    pub fn with_temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// A message in the conversation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }
}

/// Role of a message sender
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    User,
    System,
}

/// Response from the LLM
#[derive(Debug, Clone)]
pub struct LlmResponse {
    /// The generated text content
    pub content: String,
    /// Finish reason
    pub finish_reason: FinishReason,
    /// Token usage
    pub usage: Option<TokenUsage>,
}

impl LlmResponse {
    /// A plain stop-terminated reply without usage data.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            finish_reason: FinishReason::Stop,
            usage: None,
        }
    }

    pub fn is_truncated(&self) -> bool {
        self.finish_reason == FinishReason::Length
    }
}

/// Reason the generation finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    Stop,
    /// Cut off at `max_tokens`; the JSON is likely incomplete.
    Length,
    ContentFilter,
    Unknown,
}

/// Token usage information
#[derive(Debug, Clone)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

#[async_trait]
pub trait LlmPort: Send + Sync {
    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, LlmError>;
}

// =============================================================================
// Image Rendering Types
// =============================================================================

/// What to draw. Identical requests render identical pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    pub kind: AssetKind,
    pub prompt: String,
    pub width: u32,
    pub height: u32,
    pub seed: u64,
}

#[derive(Debug, Clone)]
pub struct ImageResult {
    pub image_data: Vec<u8>,
    pub format: String,
}

/// Local image rendering. Synchronous: rendering is CPU work with no I/O.
pub trait ImageGenPort: Send + Sync {
    fn render(&self, request: &ImageRequest) -> Result<ImageResult, ImageGenError>;
}

// =============================================================================
// Asset Storage
// =============================================================================

/// Write-once storage for rendered assets.
#[cfg_attr(test, mockall::automock)]
pub trait AssetStorePort: Send + Sync {
    /// Persist `bytes` under `filename` and return the caller-facing reference.
    fn save(&self, filename: &str, bytes: &[u8]) -> Result<String, AssetStoreError>;
}

// =============================================================================
// Response Cache
// =============================================================================

/// Prompt-keyed cache of complete responses. Misses and write failures are
/// never errors for the caller.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResponseCachePort: Send + Sync {
    async fn get(&self, prompt: &str) -> Option<GameResponse>;
    async fn put(&self, prompt: &str, response: &GameResponse);
}
