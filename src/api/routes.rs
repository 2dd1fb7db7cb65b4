use axum::{
    routing::{get, post},
    Router,
    extract::{Json, State},
    response::Html,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::{AppError, Result};
use crate::api::models::{RecipeRequest, RecipeResponse};
use crate::prompt::{SYSTEM_PROMPT, build_image_prompt, build_recipe_prompt};
use crate::resources::learning_resources;
use crate::AppState;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/recipe", post(recipe_handler))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../../templates/index.html"))
}

async fn recipe_handler(
    State(state): State<AppState>,
    Json(request): Json<RecipeRequest>,
) -> Result<Json<RecipeResponse>> {
    tracing::info!(query = %request.query, "Received recipe request");

    match process_recipe_request(&state, &request).await {
        Ok(response) => {
            tracing::info!("Successfully generated recipe response");
            Ok(Json(response))
        }
        Err(err) => {
            tracing::error!(error = %err, "Error processing recipe request");
            Err(err)
        }
    }
}

/// The single request path: validate, build the prompt, generate text, then
/// the image, then the static links. Any failure aborts the whole request;
/// there is no partial response.
async fn process_recipe_request(
    state: &AppState,
    request: &RecipeRequest,
) -> Result<RecipeResponse> {
    if !request.is_valid() {
        return Err(AppError::Validation("Recipe query is required".to_string()));
    }

    let prompt = build_recipe_prompt(
        &request.query,
        request.diet_preference.as_deref(),
        request.cuisine_type.as_deref(),
    );
    tracing::info!(prompt_len = prompt.len(), "Sending prompt to completion provider");

    let recipe = state.completions.complete(SYSTEM_PROMPT, &prompt).await?;
    tracing::info!("Successfully generated recipe text");

    // The image prompt is built from the raw query, not the augmented prompt
    let image_url = state
        .images
        .generate_image(&build_image_prompt(&request.query))
        .await?;
    tracing::info!("Successfully generated recipe image");

    let learning_resources = learning_resources(&request.query);

    Ok(RecipeResponse {
        recipe,
        image_url,
        learning_resources,
    })
}
