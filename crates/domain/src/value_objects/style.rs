//! Visual style vocabulary: biomes with their palettes, archetypes with their
//! character templates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Color;
use crate::DomainError;

/// Number of colors in every biome palette.
pub const PALETTE_SIZE: usize = 8;

/// Number of colors in every character template.
pub const TEMPLATE_COLORS: usize = 4;

/// A named environmental visual style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Biome {
    Fantasy,
    Forest,
    Dungeon,
    Desert,
    Ice,
}

impl Biome {
    pub const ALL: [Biome; 5] = [
        Biome::Fantasy,
        Biome::Forest,
        Biome::Dungeon,
        Biome::Desert,
        Biome::Ice,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Biome::Fantasy => "fantasy",
            Biome::Forest => "forest",
            Biome::Dungeon => "dungeon",
            Biome::Desert => "desert",
            Biome::Ice => "ice",
        }
    }
}

impl fmt::Display for Biome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Biome {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Biome::ALL
            .into_iter()
            .find(|biome| biome.as_str() == s)
            .ok_or_else(|| DomainError::parse(format!("Unknown biome: {}", s)))
    }
}

/// Eight ordered colors. The last entry is the outline color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub biome: Biome,
    pub colors: [Color; PALETTE_SIZE],
}

impl Palette {
    pub const fn new(biome: Biome, colors: [Color; PALETTE_SIZE]) -> Self {
        Self { biome, colors }
    }

    pub fn color(&self, index: usize) -> Color {
        self.colors[index % PALETTE_SIZE]
    }

    pub fn outline(&self) -> Color {
        self.colors[PALETTE_SIZE - 1]
    }
}

/// A named character visual style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Archetype {
    Knight,
    Wizard,
    Archer,
    Warrior,
    Rogue,
}

impl Archetype {
    pub const ALL: [Archetype; 5] = [
        Archetype::Knight,
        Archetype::Wizard,
        Archetype::Archer,
        Archetype::Warrior,
        Archetype::Rogue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Archetype::Knight => "knight",
            Archetype::Wizard => "wizard",
            Archetype::Archer => "archer",
            Archetype::Warrior => "warrior",
            Archetype::Rogue => "rogue",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Archetype {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Archetype::ALL
            .into_iter()
            .find(|archetype| archetype.as_str() == s)
            .ok_or_else(|| DomainError::parse(format!("Unknown archetype: {}", s)))
    }
}

/// Torso style of a sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyPattern {
    Armor,
    Robe,
    Hood,
    Simple,
    Cloak,
}

/// Colors and body pattern of one archetype.
///
/// Color roles: `[primary, secondary, accent, outline]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterTemplate {
    pub archetype: Archetype,
    pub colors: [Color; TEMPLATE_COLORS],
    pub pattern: BodyPattern,
}

impl CharacterTemplate {
    pub const fn new(
        archetype: Archetype,
        colors: [Color; TEMPLATE_COLORS],
        pattern: BodyPattern,
    ) -> Self {
        Self {
            archetype,
            colors,
            pattern,
        }
    }

    pub fn primary(&self) -> Color {
        self.colors[0]
    }

    pub fn secondary(&self) -> Color {
        self.colors[1]
    }

    pub fn accent(&self) -> Color {
        self.colors[2]
    }

    pub fn outline(&self) -> Color {
        self.colors[TEMPLATE_COLORS - 1]
    }
}
