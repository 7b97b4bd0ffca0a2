use crate::error::ApiError;
use crate::prompt::{PromptSource, PromptVariant};
use crate::store::PlanStore;
use crate::types::*;
use crate::upstream::Upstream;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, info, warn};

pub struct AppState {
    upstream: Arc<dyn Upstream>,
    plans: Arc<dyn PlanStore>,
}

impl AppState {
    pub fn new(upstream: Arc<dyn Upstream>, plans: Arc<dyn PlanStore>) -> Self {
        Self { upstream, plans }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/generate", post(generate_lesson_plan))
        .route("/generate-assets", post(generate_assets))
        .route("/remix", post(remix))
        .route("/deeper-dive", post(deeper_dive))
        .route("/student-reply", post(student_reply))
        .route("/share", post(share_plan))
        .route("/get-shared/:id", get(get_shared_plan))
        .with_state(state)
}

/// The router with request tracing and a permissive CORS policy for the browser front end.
pub fn create_app(state: Arc<AppState>) -> Router {
    create_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    )
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Validate, check the credential, build the prompt, relay it upstream.
async fn relay<R: PromptSource>(
    state: &AppState,
    variant: PromptVariant,
    payload: Result<Json<R>, JsonRejection>,
) -> Result<Json<AssetResponse>, ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::Validation(e.body_text()))?;
    req.validate(variant)?;

    if !state.upstream.is_configured() {
        return Err(ApiError::Configuration(
            "The language model API key is not configured on the server.".to_string(),
        ));
    }

    let prompt = req.build_prompt(variant);
    debug!("Built {} prompt ({} chars)", variant.name(), prompt.len());

    let mut assets = state.upstream.send(&prompt, variant.temperature()).await?;
    if !variant.is_multi_asset() && assets.contains(CARD_BREAK) {
        warn!("Stripping {} from single-asset {} response", CARD_BREAK, variant.name());
        assets = assets.replace(CARD_BREAK, "\n\n");
    }
    info!("Relayed {} response ({} chars)", variant.name(), assets.len());

    Ok(Json(AssetResponse { assets }))
}

async fn generate_lesson_plan(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<AssetResponse>, ApiError> {
    relay(&state, PromptVariant::LessonPlan, payload).await
}

async fn generate_assets(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<AssetResponse>, ApiError> {
    relay(&state, PromptVariant::AssetList, payload).await
}

async fn remix(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CardRequest>, JsonRejection>,
) -> Result<Json<AssetResponse>, ApiError> {
    relay(&state, PromptVariant::Remix, payload).await
}

async fn deeper_dive(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CardRequest>, JsonRejection>,
) -> Result<Json<AssetResponse>, ApiError> {
    relay(&state, PromptVariant::DeeperDive, payload).await
}

async fn student_reply(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<StudentReplyRequest>, JsonRejection>,
) -> Result<Json<AssetResponse>, ApiError> {
    relay(&state, PromptVariant::StudentReply, payload).await
}

async fn share_plan(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ShareRequest>, JsonRejection>,
) -> Result<Json<ShareResponse>, ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::Validation(e.body_text()))?;
    let share_id = state.plans.save(req.plan);
    info!("Saved shared plan {}", share_id);
    Ok(Json(ShareResponse { share_id }))
}

async fn get_shared_plan(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SharedPlanResponse>, ApiError> {
    state
        .plans
        .get(&id)
        .map(|shared| Json(SharedPlanResponse { plan: shared.plan }))
        .ok_or_else(|| ApiError::NotFound("Shared plan not found.".to_string()))
}
