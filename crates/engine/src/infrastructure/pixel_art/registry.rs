//! Keyword-driven style lookup: which palette, archetype and scene a piece of
//! descriptive text maps to.
//!
//! Every lookup is an ordered list of keyword rules with an explicit default.
//! Matching is a case-insensitive substring test and the first matching rule
//! wins, so rule order decides ties ("a knight in a dark dungeon" hits the
//! dungeon palette because no forest keyword appears first).

use lorecrafter_domain::{
    Archetype, Biome, BodyPattern, CharacterTemplate, Color, Palette, PALETTE_SIZE,
};

use super::scene::SceneKind;

/// One rule: if any keyword occurs in the text, resolve to `result`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRule<T> {
    pub keywords: &'static [&'static str],
    pub result: T,
}

impl<T> KeywordRule<T> {
    pub const fn new(keywords: &'static [&'static str], result: T) -> Self {
        Self { keywords, result }
    }

    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}

/// Ordered rules with a fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRules<T> {
    rules: Vec<KeywordRule<T>>,
    default: T,
}

impl<T: Copy> KeywordRules<T> {
    pub fn new(rules: Vec<KeywordRule<T>>, default: T) -> Self {
        Self { rules, default }
    }

    pub fn resolve(&self, text: &str) -> T {
        let lowered = text.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map_or(self.default, |rule| rule.result)
    }

    pub fn default_result(&self) -> T {
        self.default
    }
}

const fn palette(biome: Biome, hex: [u32; PALETTE_SIZE]) -> Palette {
    Palette::new(
        biome,
        [
            Color::hex(hex[0]),
            Color::hex(hex[1]),
            Color::hex(hex[2]),
            Color::hex(hex[3]),
            Color::hex(hex[4]),
            Color::hex(hex[5]),
            Color::hex(hex[6]),
            Color::hex(hex[7]),
        ],
    )
}

const fn template(archetype: Archetype, hex: [u32; 4], pattern: BodyPattern) -> CharacterTemplate {
    CharacterTemplate::new(
        archetype,
        [
            Color::hex(hex[0]),
            Color::hex(hex[1]),
            Color::hex(hex[2]),
            Color::hex(hex[3]),
        ],
        pattern,
    )
}

pub const PALETTES: [Palette; 5] = [
    palette(
        Biome::Fantasy,
        [0x8B4513, 0x228B22, 0x4169E1, 0xFFD700, 0xDC143C, 0x9370DB, 0xFF4500, 0x000000],
    ),
    palette(
        Biome::Forest,
        [0x006400, 0x228B22, 0x32CD32, 0x8B4513, 0xA0522D, 0x654321, 0x2F4F2F, 0x000000],
    ),
    palette(
        Biome::Dungeon,
        [0x2F2F2F, 0x696969, 0x8B4513, 0xCD853F, 0xB22222, 0x4B0082, 0x191970, 0x000000],
    ),
    palette(
        Biome::Desert,
        [0xF4A460, 0xDEB887, 0xD2691E, 0xCD853F, 0xA0522D, 0x8B4513, 0x654321, 0x000000],
    ),
    palette(
        Biome::Ice,
        [0xE0FFFF, 0xB0E0E6, 0x87CEEB, 0x4682B4, 0x191970, 0x000080, 0x483D8B, 0x000000],
    ),
];

pub const TEMPLATES: [CharacterTemplate; 5] = [
    template(
        Archetype::Knight,
        [0xC0C0C0, 0xFFD700, 0x8B0000, 0x000000],
        BodyPattern::Armor,
    ),
    template(
        Archetype::Wizard,
        [0x4B0082, 0x9370DB, 0xFFD700, 0x000000],
        BodyPattern::Robe,
    ),
    template(
        Archetype::Archer,
        [0x228B22, 0x8B4513, 0xFFD700, 0x000000],
        BodyPattern::Hood,
    ),
    template(
        Archetype::Warrior,
        [0x8B4513, 0xCD853F, 0xB22222, 0x000000],
        BodyPattern::Simple,
    ),
    template(
        Archetype::Rogue,
        [0x2F2F2F, 0x696969, 0x8B0000, 0x000000],
        BodyPattern::Cloak,
    ),
];

/// Palettes, templates and the keyword rules that pick between them.
#[derive(Debug, Clone)]
pub struct StyleRegistry {
    palettes: Vec<Palette>,
    templates: Vec<CharacterTemplate>,
    palette_rules: KeywordRules<Biome>,
    archetype_rules: KeywordRules<Archetype>,
    scene_rules: KeywordRules<SceneKind>,
}

impl StyleRegistry {
    /// The built-in style set.
    pub fn builtin() -> Self {
        Self {
            palettes: PALETTES.to_vec(),
            templates: TEMPLATES.to_vec(),
            palette_rules: KeywordRules::new(
                vec![
                    KeywordRule::new(&["forest", "tree", "nature", "green"], Biome::Forest),
                    KeywordRule::new(&["dungeon", "cave", "dark", "underground"], Biome::Dungeon),
                    KeywordRule::new(&["desert", "sand", "hot", "dry"], Biome::Desert),
                    KeywordRule::new(&["ice", "snow", "cold", "frozen"], Biome::Ice),
                ],
                Biome::Fantasy,
            ),
            archetype_rules: KeywordRules::new(
                vec![
                    KeywordRule::new(&["knight", "guard", "soldier"], Archetype::Knight),
                    KeywordRule::new(&["wizard", "mage", "magic"], Archetype::Wizard),
                    KeywordRule::new(&["archer"], Archetype::Archer),
                    KeywordRule::new(&["rogue", "thief", "assassin"], Archetype::Rogue),
                    // Merchants have no template of their own.
                    KeywordRule::new(
                        &["warrior", "merchant", "trader", "shop"],
                        Archetype::Warrior,
                    ),
                ],
                Archetype::Warrior,
            ),
            scene_rules: KeywordRules::new(
                vec![
                    KeywordRule::new(&["forest"], SceneKind::Forest),
                    KeywordRule::new(&["dungeon", "cave"], SceneKind::Dungeon),
                ],
                SceneKind::Landscape,
            ),
        }
    }

    pub fn resolve_palette(&self, text: &str) -> Biome {
        self.palette_rules.resolve(text)
    }

    pub fn resolve_archetype(&self, text: &str) -> Archetype {
        self.archetype_rules.resolve(text)
    }

    pub fn resolve_scene(&self, text: &str) -> SceneKind {
        self.scene_rules.resolve(text)
    }

    /// Palette of a biome, falling back to the default biome's palette.
    pub fn palette(&self, biome: Biome) -> &Palette {
        let fallback = self.palette_rules.default_result();
        self.palettes
            .iter()
            .find(|p| p.biome == biome)
            .or_else(|| self.palettes.iter().find(|p| p.biome == fallback))
            .unwrap_or(&PALETTES[0])
    }

    /// Template of an archetype, falling back to the default archetype's template.
    pub fn template(&self, archetype: Archetype) -> &CharacterTemplate {
        let fallback = self.archetype_rules.default_result();
        self.templates
            .iter()
            .find(|t| t.archetype == archetype)
            .or_else(|| self.templates.iter().find(|t| t.archetype == fallback))
            .unwrap_or(&TEMPLATES[3])
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
