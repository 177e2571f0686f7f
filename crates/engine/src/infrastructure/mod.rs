//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod asset_store;
pub mod chat_completions;
pub mod clock;
pub mod config;
pub mod pixel_art;
pub mod ports;
pub mod response_cache;
