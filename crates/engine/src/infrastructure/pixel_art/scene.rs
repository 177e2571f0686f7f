//! 512×512 background scenes.

use image::RgbImage;
use lorecrafter_domain::{Color, Palette};
use rand::seq::SliceRandom;
use rand::Rng;

use super::canvas::{blank, paint_all, Layer, Shape};

pub const SCENE_SIZE: u32 = 512;

const SKY: Color = Color::hex(0x87CEEB);
const TORCH_STICK: Color = Color::hex(0x8B4513);
const TORCH_FLAME: Color = Color::hex(0xFF4500);

const TREE_TRUNKS_X: [i32; 4] = [100, 200, 350, 450];
const TORCHES: [(i32, i32); 3] = [(64, 128), (448, 128), (256, 384)];
const DUNGEON_BLOCK: i32 = 64;
/// Chance a dungeon grid cell is left as bare floor.
const DUNGEON_GAP_CHANCE: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneKind {
    Forest,
    Dungeon,
    Landscape,
}

impl SceneKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SceneKind::Forest => "forest",
            SceneKind::Dungeon => "dungeon",
            SceneKind::Landscape => "landscape",
        }
    }
}

/// Layers of a scene, bottom to top. Only dungeons consume randomness.
pub fn scene_layers<R: Rng + ?Sized>(kind: SceneKind, palette: &Palette, rng: &mut R) -> Vec<Layer> {
    let size = SCENE_SIZE as i32;
    match kind {
        SceneKind::Forest => {
            let mut layers = vec![Layer::filled(Shape::rect(0, 0, size, 200), SKY)];
            for x in TREE_TRUNKS_X {
                layers.push(Layer::filled(
                    Shape::rect(x - 8, 200, x + 8, 400),
                    palette.color(3),
                ));
                layers.push(Layer::filled(
                    Shape::ellipse(x - 40, 120, x + 40, 240),
                    palette.color(1),
                ));
            }
            layers.push(Layer::filled(Shape::rect(0, 400, size, size), palette.color(2)));
            layers
        }
        SceneKind::Dungeon => {
            let mut layers = Vec::new();
            let block_colors = &palette.colors[1..=3];
            for x in (0..size).step_by(DUNGEON_BLOCK as usize) {
                for y in (0..size).step_by(DUNGEON_BLOCK as usize) {
                    if rng.gen::<f64>() > DUNGEON_GAP_CHANCE {
                        let fill = block_colors
                            .choose(rng)
                            .copied()
                            .unwrap_or_else(|| palette.color(1));
                        layers.push(
                            Layer::filled(
                                Shape::rect(x, y, x + DUNGEON_BLOCK, y + DUNGEON_BLOCK),
                                fill,
                            )
                            .outlined(palette.outline(), 2),
                        );
                    }
                }
            }
            for (x, y) in TORCHES {
                layers.push(Layer::filled(Shape::rect(x - 4, y, x + 4, y + 32), TORCH_STICK));
                layers.push(Layer::filled(
                    Shape::ellipse(x - 8, y - 8, x + 8, y + 8),
                    TORCH_FLAME,
                ));
            }
            layers
        }
        SceneKind::Landscape => vec![
            Layer::filled(Shape::rect(0, 0, size, 256), SKY),
            Layer::filled(
                Shape::polygon(&[
                    (0, 256),
                    (128, 128),
                    (256, 200),
                    (384, 100),
                    (512, 180),
                    (512, 256),
                ]),
                palette.color(1),
            ),
            Layer::filled(Shape::rect(0, 256, size, size), palette.color(2)),
        ],
    }
}

pub fn compose_scene<R: Rng + ?Sized>(kind: SceneKind, palette: &Palette, rng: &mut R) -> RgbImage {
    let mut canvas = blank(SCENE_SIZE, SCENE_SIZE, palette.color(0));
    paint_all(&mut canvas, &scene_layers(kind, palette, rng));
    canvas
}
