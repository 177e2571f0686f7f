//! Domain entities

mod game;
mod image_asset;
mod narrative;

pub use game::{GameData, GameResponse};
pub use image_asset::{AssetKind, GameImages, ImageAsset};
pub use narrative::{NarrativeDraft, Npc, DIALOGUE_FIELDS, REJECTION_FIELD, REQUIRED_FIELDS};
