//! HTTP routes.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use lorecrafter_domain::GameResponse;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::app::App;
use crate::use_cases::game::GameError;
use crate::use_cases::generation::GenerationError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/health", get(health))
        .route("/api/generateGame", post(generate_game))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Debug, Deserialize)]
pub struct GamePrompt {
    pub prompt: String,
}

async fn generate_game(
    State(app): State<Arc<App>>,
    Json(body): Json<GamePrompt>,
) -> Result<Json<GameResponse>, ApiError> {
    tracing::info!(prompt = %body.prompt, "Generating game");
    let response = app.use_cases.game.execute(&body.prompt).await?;
    Ok(Json(response))
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    GenerationFailed(String),
    Internal(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::GenerationFailed(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Game generation failed: {}", msg),
            ),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".to_string())
            }
        };
        (status, Json(ErrorBody { detail })).into_response()
    }
}

impl From<GameError> for ApiError {
    fn from(e: GameError) -> Self {
        match e {
            GameError::Invalid(e) => ApiError::BadRequest(e.to_string()),
            GameError::Generation(GenerationError::Exhausted { last_error, .. }) => {
                ApiError::GenerationFailed(last_error)
            }
            GameError::Internal(msg) => ApiError::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::pixel_art::PixelArtRenderer;
    use crate::test_fixtures::image_mocks::MemoryAssetStore;
    use crate::test_fixtures::{valid_draft_json, ScriptedLlm};
    use crate::use_cases::generation::GenerationSettings;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    fn router(llm: Arc<ScriptedLlm>) -> Router {
        let app = App::new(
            llm,
            Arc::new(PixelArtRenderer::default()),
            Arc::new(MemoryAssetStore::new()),
            None,
            GenerationSettings::default(),
        );
        routes().with_state(Arc::new(app))
    }

    fn post_prompt(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/generateGame")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = router(Arc::new(ScriptedLlm::new(Vec::<String>::new())))
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_generate_game_returns_narrative_and_images() {
        let llm = Arc::new(ScriptedLlm::new([valid_draft_json()]));

        let response = router(llm)
            .oneshot(post_prompt(r#"{"prompt": "a glowing forest"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["prompt"], "a glowing forest");
        assert_eq!(body["game_data"]["npc"]["name"], "Mira");
        assert!(body["game_data"]["images"]["avatar"]
            .as_str()
            .unwrap()
            .starts_with("assets/avatar_"));
    }

    #[tokio::test]
    async fn test_empty_prompt_is_bad_request() {
        let llm = Arc::new(ScriptedLlm::new([valid_draft_json()]));

        let response = router(llm.clone())
            .oneshot(post_prompt(r#"{"prompt": ""}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_exhaustion_is_500_with_last_error() {
        let llm = Arc::new(ScriptedLlm::new(vec![r#"{"error": "seed_not_allowed"}"#; 3]));

        let response = router(llm)
            .oneshot(post_prompt(r#"{"prompt": "forbidden"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(response).await;
        assert_eq!(body["detail"], "Game generation failed: seed_not_allowed");
    }
}
