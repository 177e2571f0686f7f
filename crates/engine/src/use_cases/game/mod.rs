//! Whole-game production: narrative first, then its images.

use std::sync::Arc;

use lorecrafter_domain::{AssetKind, DomainError, GameResponse};

use crate::infrastructure::ports::ResponseCachePort;
use crate::use_cases::assets::{derive_asset_prompts, SynthesizeAsset};
use crate::use_cases::generation::{GenerateNarrative, GenerationError};

pub struct ProduceGame {
    narrative: Arc<GenerateNarrative>,
    assets: Arc<SynthesizeAsset>,
    cache: Option<Arc<dyn ResponseCachePort>>,
}

impl ProduceGame {
    pub fn new(narrative: Arc<GenerateNarrative>, assets: Arc<SynthesizeAsset>) -> Self {
        Self {
            narrative,
            assets,
            cache: None,
        }
    }

    pub fn with_cache(mut self, cache: Arc<dyn ResponseCachePort>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub async fn execute(&self, prompt: &str) -> Result<GameResponse, GameError> {
        if prompt.trim().is_empty() {
            return Err(GameError::Invalid(DomainError::validation(
                "prompt cannot be empty",
            )));
        }

        if let Some(cache) = &self.cache {
            if let Some(cached) = cache.get(prompt).await {
                tracing::info!("Serving game from response cache");
                return Ok(cached);
            }
        }

        let generated = self.narrative.execute(prompt).await?;
        let asset_prompts = derive_asset_prompts(&generated.draft);

        let assets = self.assets.clone();
        let images = tokio::task::spawn_blocking(move || assets.execute_all(&asset_prompts))
            .await
            .map_err(|e| GameError::Internal(format!("asset synthesis task failed: {}", e)))?;

        tracing::info!(
            attempts = generated.attempts,
            valid = generated.validation.is_valid(),
            images = images.len(),
            "Game produced"
        );

        let complete = generated.validation.is_valid() && images.len() == AssetKind::ALL.len();
        let response = GameResponse::new(generated.draft, images, prompt);
        if let Some(cache) = &self.cache {
            if complete {
                cache.put(prompt, &response).await;
            } else {
                tracing::debug!("Not caching fallback or partial game");
            }
        }
        Ok(response)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error(transparent)]
    Invalid(#[from] DomainError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error("Internal error: {0}")]
    Internal(String),
}
