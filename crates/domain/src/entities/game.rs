//! Game entity - The assembled narrative plus its image references

use serde::{Deserialize, Serialize};

use super::{GameImages, NarrativeDraft};

/// Key owned by [`GameData`]; a narrative field of the same name is dropped.
pub const IMAGES_FIELD: &str = "images";

/// Narrative fields flattened alongside the `images` block, the shape clients
/// already consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameData {
    #[serde(flatten)]
    pub narrative: NarrativeDraft,
    pub images: GameImages,
}

/// What a caller receives for one prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameResponse {
    pub game_data: GameData,
    pub prompt: String,
}

impl GameResponse {
    pub fn new(narrative: NarrativeDraft, images: GameImages, prompt: impl Into<String>) -> Self {
        let mut fields = narrative.into_map();
        fields.remove(IMAGES_FIELD);
        Self {
            game_data: GameData {
                narrative: NarrativeDraft::new(fields),
                images,
            },
            prompt: prompt.into(),
        }
    }
}
