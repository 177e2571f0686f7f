//! Procedural pixel-art renderer.
//!
//! Characters are drawn as 64×64 sprites and scaled up with hard edges;
//! backgrounds are drawn at native resolution. Output depends only on the
//! request (kind, prompt, size, seed), never on global state.

pub mod canvas;
pub mod registry;
pub mod scene;
pub mod sprite;
pub mod upscale;

use std::io::Cursor;

use image::{ImageFormat, RgbImage};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::infrastructure::ports::{ImageGenError, ImageGenPort, ImageRequest, ImageResult};

pub use registry::StyleRegistry;
pub use scene::{compose_scene, SceneKind, SCENE_SIZE};
pub use sprite::{compose_sprite, SPRITE_SIZE};
pub use upscale::upscale;

/// Edge length of every delivered asset.
pub const OUTPUT_SIZE: u32 = 512;

pub struct PixelArtRenderer {
    registry: StyleRegistry,
}

impl PixelArtRenderer {
    pub fn new(registry: StyleRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    /// Draw the raw canvas for a request.
    pub fn compose(&self, request: &ImageRequest) -> Result<RgbImage, ImageGenError> {
        if request.width == 0 || request.height == 0 {
            return Err(ImageGenError::DrawingFailed(format!(
                "invalid canvas size {}x{}",
                request.width, request.height
            )));
        }

        let canvas = if request.kind.is_character() {
            let archetype = self.registry.resolve_archetype(&request.prompt);
            tracing::debug!(kind = %request.kind, archetype = %archetype, "Composing sprite");
            compose_sprite(self.registry.template(archetype))
        } else {
            let biome = self.registry.resolve_palette(&request.prompt);
            let scene = self.registry.resolve_scene(&request.prompt);
            tracing::debug!(
                kind = %request.kind,
                biome = %biome,
                scene = scene.as_str(),
                seed = request.seed,
                "Composing scene"
            );
            let mut rng = StdRng::seed_from_u64(request.seed);
            compose_scene(scene, self.registry.palette(biome), &mut rng)
        };

        Ok(upscale(&canvas, request.width, request.height))
    }
}

impl Default for PixelArtRenderer {
    fn default() -> Self {
        Self::new(StyleRegistry::builtin())
    }
}

impl ImageGenPort for PixelArtRenderer {
    fn render(&self, request: &ImageRequest) -> Result<ImageResult, ImageGenError> {
        let canvas = self.compose(request)?;
        Ok(ImageResult {
            image_data: encode_png(&canvas)?,
            format: "png".to_string(),
        })
    }
}

fn encode_png(canvas: &RgbImage) -> Result<Vec<u8>, ImageGenError> {
    let mut bytes = Vec::new();
    canvas.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}
