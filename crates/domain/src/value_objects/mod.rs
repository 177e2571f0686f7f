//! Value objects - immutable descriptors without identity

mod color;
mod style;
mod validation;

pub use color::Color;
pub use style::{
    Archetype, Biome, BodyPattern, CharacterTemplate, Palette, PALETTE_SIZE, TEMPLATE_COLORS,
};
pub use validation::{FailureKind, FallbackPolicy, ValidationOutcome};
