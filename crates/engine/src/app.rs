//! Application composition.
//!
//! Wires port implementations into use cases. Built once at startup and shared
//! with the HTTP layer behind an `Arc`.

use std::sync::Arc;

use crate::infrastructure::{
    clock::SystemRandom,
    ports::{AssetStorePort, ImageGenPort, LlmPort, RandomPort, ResponseCachePort},
};
use crate::use_cases;
use crate::use_cases::generation::GenerationSettings;

pub struct App {
    pub use_cases: UseCases,
}

pub struct UseCases {
    pub narrative: Arc<use_cases::GenerateNarrative>,
    pub assets: use_cases::AssetUseCases,
    pub game: Arc<use_cases::ProduceGame>,
}

impl App {
    pub fn new(
        llm: Arc<dyn LlmPort>,
        image_gen: Arc<dyn ImageGenPort>,
        asset_store: Arc<dyn AssetStorePort>,
        cache: Option<Arc<dyn ResponseCachePort>>,
        settings: GenerationSettings,
    ) -> Self {
        let random: Arc<dyn RandomPort> = Arc::new(SystemRandom::new());
        Self::with_random(llm, image_gen, asset_store, cache, settings, random)
    }

    pub fn with_random(
        llm: Arc<dyn LlmPort>,
        image_gen: Arc<dyn ImageGenPort>,
        asset_store: Arc<dyn AssetStorePort>,
        cache: Option<Arc<dyn ResponseCachePort>>,
        settings: GenerationSettings,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        let narrative = Arc::new(use_cases::GenerateNarrative::with_settings(llm, settings));
        let synthesize = Arc::new(use_cases::SynthesizeAsset::new(
            image_gen,
            asset_store,
            random,
        ));

        let mut game = use_cases::ProduceGame::new(narrative.clone(), synthesize.clone());
        if let Some(cache) = cache {
            game = game.with_cache(cache);
        }

        Self {
            use_cases: UseCases {
                narrative,
                assets: use_cases::AssetUseCases::new(synthesize),
                game: Arc::new(game),
            },
        }
    }
}
