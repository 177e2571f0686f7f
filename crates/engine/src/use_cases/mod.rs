//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific area. Use cases orchestrate
//! ports and pure logic to fulfill a caller's request.

pub mod assets;
pub mod game;
pub mod generation;

// Re-export main types
pub use assets::{AssetUseCases, SynthesizeAsset};
pub use game::ProduceGame;
pub use generation::GenerateNarrative;
