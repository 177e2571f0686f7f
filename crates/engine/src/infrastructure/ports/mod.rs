//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - LLM calls (could swap Groq -> Ollama/OpenAI)
//! - Image rendering (could swap pixel art -> other renderer)
//! - Asset storage (could swap local disk -> object store)
//! - Response cache (could swap disk -> Redis)
//! - Clock/Random (for testing)

mod error;
mod external;
mod testing;

// =============================================================================
// External Service Ports
// =============================================================================
pub use external::{
    AssetStorePort, ChatMessage, FinishReason, ImageGenPort, ImageRequest, ImageResult, LlmPort,
    LlmRequest, LlmResponse, MessageRole, ResponseCachePort, TokenUsage,
};

#[cfg(test)]
pub use external::{MockAssetStorePort, MockResponseCachePort};

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::{ClockPort, RandomPort};

#[cfg(test)]
pub use testing::{MockClockPort, MockRandomPort};

// =============================================================================
// Error Types
// =============================================================================
pub use error::{AssetStoreError, ImageGenError, LlmError};
