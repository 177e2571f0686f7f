//! ImageAsset entity - A persisted pixel-art image referenced by the caller

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// What an image depicts; also the filename prefix of the stored file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Avatar,
    Background,
    Npc,
}

impl AssetKind {
    pub const ALL: [AssetKind; 3] = [AssetKind::Avatar, AssetKind::Background, AssetKind::Npc];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Avatar => "avatar",
            AssetKind::Background => "background",
            AssetKind::Npc => "npc",
        }
    }

    /// Characters are drawn as sprites; backgrounds are drawn as scenes.
    pub fn is_character(&self) -> bool {
        matches!(self, AssetKind::Avatar | AssetKind::Npc)
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "avatar" => Ok(AssetKind::Avatar),
            "background" => Ok(AssetKind::Background),
            "npc" => Ok(AssetKind::Npc),
            _ => Err(DomainError::parse(format!("Unknown asset kind: {}", s))),
        }
    }
}

/// A write-once image. `storage_ref` is an opaque relative path such as
/// `assets/avatar_1a2b3c4d.png`; this crate never mutates or deletes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAsset {
    pub kind: AssetKind,
    pub storage_ref: String,
}

impl ImageAsset {
    pub fn new(kind: AssetKind, storage_ref: impl Into<String>) -> Self {
        Self {
            kind,
            storage_ref: storage_ref.into(),
        }
    }
}

/// Image references of one game. A field is present only if that kind was
/// synthesized successfully.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameImages {
    pub avatar: Option<String>,
    pub background: Option<String>,
    pub npc: Option<String>,
}

impl GameImages {
    pub fn set(&mut self, asset: ImageAsset) {
        let slot = match asset.kind {
            AssetKind::Avatar => &mut self.avatar,
            AssetKind::Background => &mut self.background,
            AssetKind::Npc => &mut self.npc,
        };
        *slot = Some(asset.storage_ref);
    }

    pub fn get(&self, kind: AssetKind) -> Option<&str> {
        match kind {
            AssetKind::Avatar => self.avatar.as_deref(),
            AssetKind::Background => self.background.as_deref(),
            AssetKind::Npc => self.npc.as_deref(),
        }
    }

    pub fn len(&self) -> usize {
        AssetKind::ALL
            .iter()
            .filter(|kind| self.get(**kind).is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
