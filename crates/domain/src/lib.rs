//! LoreCrafter domain types.
//!
//! Pure data shared by the engine: narrative drafts and their validation
//! outcomes, the pixel-art style vocabulary (biomes, palettes, archetypes,
//! templates) and the image assets handed back to callers.

pub mod entities;
pub mod error;
pub mod value_objects;

pub use entities::{
    AssetKind, GameData, GameImages, GameResponse, ImageAsset, NarrativeDraft, Npc,
    DIALOGUE_FIELDS, REJECTION_FIELD, REQUIRED_FIELDS,
};
pub use error::DomainError;
pub use value_objects::{
    Archetype, Biome, BodyPattern, CharacterTemplate, Color, FailureKind, FallbackPolicy,
    Palette, ValidationOutcome, PALETTE_SIZE, TEMPLATE_COLORS,
};
