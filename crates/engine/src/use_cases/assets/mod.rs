//! Asset synthesis use cases.

pub mod prompts;

use std::sync::Arc;

use lorecrafter_domain::{AssetKind, GameImages, ImageAsset};

use crate::infrastructure::pixel_art::OUTPUT_SIZE;
use crate::infrastructure::ports::{
    AssetStoreError, AssetStorePort, ImageGenError, ImageGenPort, ImageRequest, RandomPort,
};

pub use prompts::{derive_asset_prompts, AssetPrompts};

/// Container for asset use cases.
pub struct AssetUseCases {
    pub synthesize: Arc<SynthesizeAsset>,
}

impl AssetUseCases {
    pub fn new(synthesize: Arc<SynthesizeAsset>) -> Self {
        Self { synthesize }
    }
}

/// Render one image and persist it under a fresh name.
pub struct SynthesizeAsset {
    renderer: Arc<dyn ImageGenPort>,
    store: Arc<dyn AssetStorePort>,
    random: Arc<dyn RandomPort>,
}

impl SynthesizeAsset {
    pub fn new(
        renderer: Arc<dyn ImageGenPort>,
        store: Arc<dyn AssetStorePort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        Self {
            renderer,
            store,
            random,
        }
    }

    /// Synthesize one asset.
    ///
    /// With `seed` set the pixels are reproducible; without it a fresh seed is
    /// drawn. The filename is always fresh, so repeated calls never collide.
    pub fn execute(
        &self,
        kind: AssetKind,
        prompt: &str,
        seed: Option<u64>,
    ) -> Result<ImageAsset, AssetError> {
        let seed = seed.unwrap_or_else(|| self.random.gen_seed());
        let request = ImageRequest {
            kind,
            prompt: prompt.to_string(),
            width: OUTPUT_SIZE,
            height: OUTPUT_SIZE,
            seed,
        };

        let image = self.renderer.render(&request)?;

        let id = self.random.gen_uuid().simple().to_string();
        let filename = format!("{}_{}.{}", kind, &id[..8], image.format);
        let storage_ref = self.store.save(&filename, &image.image_data)?;

        tracing::info!(
            kind = %kind,
            prompt = %prompt,
            seed,
            storage_ref = %storage_ref,
            "Synthesized asset"
        );
        Ok(ImageAsset::new(kind, storage_ref))
    }

    /// Synthesize avatar, background and NPC independently. A kind that fails
    /// is logged and left out.
    pub fn execute_all(&self, prompts: &AssetPrompts) -> GameImages {
        let mut images = GameImages::default();
        for kind in AssetKind::ALL {
            match self.execute(kind, prompts.get(kind), None) {
                Ok(asset) => images.set(asset),
                Err(e) => {
                    tracing::warn!(kind = %kind, error = %e, "Asset synthesis failed, omitting");
                }
            }
        }
        images
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Image rendering failed: {0}")]
    Render(#[from] ImageGenError),
    #[error("Asset storage failed: {0}")]
    Storage(#[from] AssetStoreError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::SystemRandom;
    use crate::infrastructure::pixel_art::PixelArtRenderer;
    use crate::infrastructure::ports::{MockAssetStorePort, MockRandomPort};
    use crate::test_fixtures::image_mocks::{FlakyImageGen, MemoryAssetStore};
    use uuid::Uuid;

    fn synthesizer(
        store: Arc<dyn AssetStorePort>,
        random: Arc<dyn RandomPort>,
    ) -> SynthesizeAsset {
        SynthesizeAsset::new(Arc::new(PixelArtRenderer::default()), store, random)
    }

    #[test]
    fn test_unseeded_calls_get_distinct_refs() {
        let store = Arc::new(MemoryAssetStore::new());
        let synth = synthesizer(store.clone(), Arc::new(SystemRandom::new()));

        let first = synth.execute(AssetKind::Avatar, "brave knight", None).unwrap();
        let second = synth.execute(AssetKind::Avatar, "brave knight", None).unwrap();

        assert_ne!(first.storage_ref, second.storage_ref);
        assert!(first.storage_ref.starts_with("assets/avatar_"));
        assert!(first.storage_ref.ends_with(".png"));
        assert_eq!(store.filenames().len(), 2);
    }

    #[test]
    fn test_seeded_calls_render_identical_pixels() {
        let store = Arc::new(MemoryAssetStore::new());
        let synth = synthesizer(store.clone(), Arc::new(SystemRandom::new()));

        let a = synth.execute(AssetKind::Background, "dark cave", Some(0)).unwrap();
        let b = synth.execute(AssetKind::Background, "dark cave", Some(0)).unwrap();

        assert_ne!(a.storage_ref, b.storage_ref);
        let name = |asset: &ImageAsset| asset.storage_ref.trim_start_matches("assets/").to_string();
        assert_eq!(store.bytes(&name(&a)), store.bytes(&name(&b)));
    }

    #[test]
    fn test_filename_uses_first_eight_hex_of_uuid() {
        let mut random = MockRandomPort::new();
        random.expect_gen_seed().times(1).return_const(99u64);
        random
            .expect_gen_uuid()
            .return_const(Uuid::from_u128(0x1a2b3c4d_0000_4000_8000_000000000000));
        let mut store = MockAssetStorePort::new();
        store
            .expect_save()
            .withf(|filename, bytes| filename == "npc_1a2b3c4d.png" && !bytes.is_empty())
            .times(1)
            .returning(|filename, _| Ok(format!("assets/{}", filename)));

        let asset = synthesizer(Arc::new(store), Arc::new(random))
            .execute(AssetKind::Npc, "wise wizard merchant", None)
            .unwrap();

        assert_eq!(asset.kind, AssetKind::Npc);
        assert_eq!(asset.storage_ref, "assets/npc_1a2b3c4d.png");
    }

    #[test]
    fn test_explicit_zero_seed_is_honored() {
        let mut random = MockRandomPort::new();
        random.expect_gen_seed().never();
        random.expect_gen_uuid().returning(Uuid::new_v4);

        let result = synthesizer(Arc::new(MemoryAssetStore::new()), Arc::new(random)).execute(
            AssetKind::Background,
            "landscape",
            Some(0),
        );

        assert!(result.is_ok());
    }

    #[test]
    fn test_storage_failure_is_reported() {
        let mut store = MockAssetStorePort::new();
        store
            .expect_save()
            .returning(|filename, _| Err(AssetStoreError::write(filename, "disk full")));

        let err = synthesizer(Arc::new(store), Arc::new(SystemRandom::new()))
            .execute(AssetKind::Avatar, "knight", Some(1))
            .unwrap_err();

        assert!(matches!(err, AssetError::Storage(_)));
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_execute_all_omits_failed_kind() {
        let gen = Arc::new(FlakyImageGen::failing_for(AssetKind::Npc));
        let synth = SynthesizeAsset::new(
            gen.clone(),
            Arc::new(MemoryAssetStore::new()),
            Arc::new(SystemRandom::new()),
        );

        let images = synth.execute_all(&AssetPrompts::default());

        assert_eq!(gen.call_count(), 3);
        assert!(images.avatar.is_some());
        assert!(images.background.is_some());
        assert!(images.npc.is_none());
        assert_eq!(images.len(), 2);
    }
}
