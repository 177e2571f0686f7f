//! 64×64 character sprites built from a template's four color roles.

use image::RgbImage;
use lorecrafter_domain::{BodyPattern, CharacterTemplate};

use super::canvas::{blank, paint_all, Layer, Shape};

pub const SPRITE_SIZE: u32 = 64;

/// Layers of a sprite, bottom to top.
pub fn sprite_layers(template: &CharacterTemplate) -> Vec<Layer> {
    let primary = template.primary();
    let secondary = template.secondary();
    let accent = template.accent();
    let outline = template.outline();

    let mut layers = vec![
        // Head and eyes
        Layer::filled(Shape::ellipse(20, 8, 44, 32), primary).outlined(outline, 2),
        Layer::filled(Shape::rect(26, 16, 30, 20), outline),
        Layer::filled(Shape::rect(34, 16, 38, 20), outline),
    ];

    match template.pattern {
        BodyPattern::Armor => {
            layers.push(Layer::filled(Shape::rect(24, 32, 40, 52), secondary).outlined(outline, 2));
            layers.push(Layer::filled(Shape::rect(28, 36, 36, 44), accent));
        }
        BodyPattern::Robe => {
            layers.push(
                Layer::filled(
                    Shape::polygon(&[(20, 32), (44, 32), (48, 56), (16, 56)]),
                    secondary,
                )
                .outlined(outline, 1),
            );
            layers.push(Layer::filled(
                Shape::polygon(&[(24, 8), (40, 8), (32, 0)]),
                secondary,
            ));
        }
        BodyPattern::Hood | BodyPattern::Simple | BodyPattern::Cloak => {
            layers.push(Layer::filled(Shape::rect(24, 32, 40, 52), secondary).outlined(outline, 2));
        }
    }

    // Arms then legs
    for limb in [
        Shape::rect(16, 36, 24, 48),
        Shape::rect(40, 36, 48, 48),
        Shape::rect(26, 52, 32, 64),
        Shape::rect(32, 52, 38, 64),
    ] {
        layers.push(Layer::filled(limb, primary).outlined(outline, 1));
    }

    layers
}

pub fn compose_sprite(template: &CharacterTemplate) -> RgbImage {
    let mut canvas = blank(SPRITE_SIZE, SPRITE_SIZE, template.outline());
    paint_all(&mut canvas, &sprite_layers(template));
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::pixel_art::registry::StyleRegistry;
    use lorecrafter_domain::{Archetype, Color};

    fn pixel(canvas: &RgbImage, x: u32, y: u32) -> Color {
        let [r, g, b] = canvas.get_pixel(x, y).0;
        Color::rgb(r, g, b)
    }

    #[test]
    fn test_knight_sprite_colors() {
        let registry = StyleRegistry::builtin();
        let knight = registry.template(Archetype::Knight);

        let sprite = compose_sprite(knight);

        assert_eq!(sprite.dimensions(), (SPRITE_SIZE, SPRITE_SIZE));
        assert_eq!(pixel(&sprite, 0, 0), knight.outline());
        // Head interior, eye, armor inset
        assert_eq!(pixel(&sprite, 32, 12), knight.primary());
        assert_eq!(pixel(&sprite, 28, 18), knight.outline());
        assert_eq!(pixel(&sprite, 32, 40), knight.accent());
        // Armor plate between border and inset
        assert_eq!(pixel(&sprite, 27, 48), knight.secondary());
        // Leg interior
        assert_eq!(pixel(&sprite, 29, 58), knight.primary());
    }

    #[test]
    fn test_only_wizard_wears_a_hat() {
        let registry = StyleRegistry::builtin();
        let wizard = registry.template(Archetype::Wizard);
        let rogue = registry.template(Archetype::Rogue);

        let wizard_sprite = compose_sprite(wizard);
        let rogue_sprite = compose_sprite(rogue);

        assert_eq!(pixel(&wizard_sprite, 32, 3), wizard.secondary());
        assert_eq!(pixel(&rogue_sprite, 32, 3), rogue.outline());
        // Robe flares wider than the tunic
        assert_eq!(pixel(&wizard_sprite, 21, 54), wizard.secondary());
        assert_eq!(pixel(&rogue_sprite, 21, 54), rogue.outline());
    }

    #[test]
    fn test_layer_count_by_pattern() {
        let registry = StyleRegistry::builtin();
        assert_eq!(sprite_layers(registry.template(Archetype::Knight)).len(), 9);
        assert_eq!(sprite_layers(registry.template(Archetype::Wizard)).len(), 9);
        assert_eq!(sprite_layers(registry.template(Archetype::Archer)).len(), 8);
    }
}
