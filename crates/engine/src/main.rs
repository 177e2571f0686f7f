//! LoreCrafter Engine - Main entry point.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lorecrafter_engine::api;
use lorecrafter_engine::infrastructure::{
    asset_store::FileAssetStore,
    chat_completions::ChatCompletionsClient,
    clock::SystemClock,
    config::AppConfig,
    pixel_art::PixelArtRenderer,
    ports::{ClockPort, ResponseCachePort},
    response_cache::FileResponseCache,
};
use lorecrafter_engine::use_cases::generation::GenerationSettings;
use lorecrafter_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root when run from `crates/engine`.
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lorecrafter_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting LoreCrafter Engine");

    let config = AppConfig::from_env()?;

    let llm = Arc::new(ChatCompletionsClient::with_timeout(
        &config.llm.base_url,
        &config.llm.model,
        Some(config.llm.api_key.clone()),
        config.llm.timeout_secs,
    ));
    tracing::info!(
        base_url = %config.llm.base_url,
        model = %llm.model(),
        max_attempts = config.narrative.max_attempts,
        fallback_policy = %config.narrative.fallback_policy,
        "LLM client configured"
    );

    let asset_store = Arc::new(FileAssetStore::new(&config.asset_dir));
    tracing::info!(dir = %config.asset_dir.display(), "Writing assets to disk");

    let cache: Option<Arc<dyn ResponseCachePort>> = if config.cache.enabled {
        let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());
        tracing::info!(dir = %config.cache.dir.display(), ttl_secs = config.cache.ttl_secs, "Response cache enabled");
        Some(Arc::new(FileResponseCache::new(
            &config.cache.dir,
            Duration::from_secs(config.cache.ttl_secs),
            clock,
        )))
    } else {
        None
    };

    let settings = GenerationSettings {
        max_attempts: config.narrative.max_attempts,
        fallback_policy: config.narrative.fallback_policy,
        ..GenerationSettings::default()
    };

    let app = Arc::new(App::new(
        llm,
        Arc::new(PixelArtRenderer::default()),
        asset_store,
        cache,
        settings,
    ));

    let router = api::http::routes()
        .with_state(app)
        .layer(build_cors_layer_from_env())
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
    let _ = dotenvy::dotenv();
}

/// Any origin unless `CORS_ALLOWED_ORIGINS` lists specific ones.
fn build_cors_layer_from_env() -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    let allowed_origins = std::env::var("CORS_ALLOWED_ORIGINS")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty() && s != "*");

    let Some(allowed_origins) = allowed_origins else {
        return cors.allow_origin(Any);
    };

    let origins: Vec<HeaderValue> = allowed_origins
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();

    if origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(origins)
    }
}
