//! Descriptive prompts for the three game images, pulled from a narrative.

use lorecrafter_domain::{AssetKind, NarrativeDraft};
use serde_json::Value;

pub const DEFAULT_AVATAR_PROMPT: &str = "brave knight warrior";
pub const DEFAULT_BACKGROUND_PROMPT: &str = "magical forest landscape";
pub const DEFAULT_NPC_PROMPT: &str = "wise wizard merchant";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPrompts {
    pub avatar: String,
    pub background: String,
    pub npc: String,
}

impl AssetPrompts {
    pub fn get(&self, kind: AssetKind) -> &str {
        match kind {
            AssetKind::Avatar => &self.avatar,
            AssetKind::Background => &self.background,
            AssetKind::Npc => &self.npc,
        }
    }
}

impl Default for AssetPrompts {
    fn default() -> Self {
        Self {
            avatar: DEFAULT_AVATAR_PROMPT.to_string(),
            background: DEFAULT_BACKGROUND_PROMPT.to_string(),
            npc: DEFAULT_NPC_PROMPT.to_string(),
        }
    }
}

/// Reads `avatar.description`, `scenes[0].description` and
/// `npcs[0].description`. Missing or ill-typed shapes fall back to defaults.
pub fn derive_asset_prompts(draft: &NarrativeDraft) -> AssetPrompts {
    let describe = |value: Option<&Value>, default: &str| {
        value
            .and_then(|v| v.get("description"))
            .and_then(Value::as_str)
            .map_or_else(|| default.to_string(), str::to_string)
    };

    AssetPrompts {
        avatar: describe(draft.get("avatar"), DEFAULT_AVATAR_PROMPT),
        background: describe(
            draft.get("scenes").and_then(|s| s.get(0)),
            DEFAULT_BACKGROUND_PROMPT,
        ),
        npc: describe(draft.get("npcs").and_then(|n| n.get(0)), DEFAULT_NPC_PROMPT),
    }
}
