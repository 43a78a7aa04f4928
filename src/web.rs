//! Web server for the breed viewer UI
//!
//! Serves a static page plus JSON endpoints backed by the breed cache, and
//! 3D model files from the models directory.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, Json},
    routing::get,
    Router,
};
use serde::Serialize;
use std::path::PathBuf;
use tower_http::services::ServeDir;

use crate::breed_models::model_for;
use crate::cache::BreedCache;
use crate::dogapi::{Breed, BreedImage};

/// Shared application state (cache handle + models directory)
#[derive(Clone)]
struct AppState {
    cache: BreedCache,
    models_dir: PathBuf,
}

/// API response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Listing entry for the index page
#[derive(Serialize)]
struct BreedSummary {
    id: u32,
    name: String,
    image_id: Option<String>,
    image_url: Option<String>,
}

impl From<Breed> for BreedSummary {
    fn from(breed: Breed) -> Self {
        let image_url = breed
            .reference_image_id
            .as_ref()
            .map(|id| format!("/api/image/{}", id));
        Self {
            id: breed.id,
            name: breed.name,
            image_id: breed.reference_image_id,
            image_url,
        }
    }
}

/// Detail payload for a single breed
#[derive(Serialize)]
struct BreedDetail {
    breed: Breed,
    image_url: Option<String>,
    model_path: String,
}

#[derive(Serialize)]
struct ImageUrl {
    url: String,
}

/// GET / - Serve the web UI (single HTML page)
async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}

/// GET /api/breeds - cached breed listing
async fn breeds_handler(State(state): State<AppState>) -> Json<ApiResponse<Vec<BreedSummary>>> {
    log::info!("Fetching dog breeds...");
    let breeds = state.cache.breeds().await;

    Json(ApiResponse {
        success: true,
        data: Some(breeds.into_iter().map(BreedSummary::from).collect()),
        error: None,
    })
}

/// GET /api/image/{image_id} - image URL proxy
///
/// Always answers 200 with a usable URL; fetch failures surface as the
/// placeholder URL.
async fn image_handler(
    State(state): State<AppState>,
    Path(image_id): Path<String>,
) -> Json<ImageUrl> {
    let image = state
        .cache
        .image(Some(&image_id))
        .await
        .unwrap_or_else(BreedImage::placeholder);

    Json(ImageUrl { url: image.url })
}

/// GET /api/breed/{breed_id} - detail data for a single breed
async fn breed_detail_handler(
    State(state): State<AppState>,
    Path(breed_id): Path<u32>,
) -> (StatusCode, Json<ApiResponse<BreedDetail>>) {
    let breeds = state.cache.breeds().await;

    let Some(breed) = breeds.into_iter().find(|b| b.id == breed_id) else {
        return (
            StatusCode::NOT_FOUND,
            Json(ApiResponse {
                success: false,
                data: None,
                error: Some("Breed not found".to_string()),
            }),
        );
    };

    let image_url = match breed.reference_image_id.as_deref() {
        Some(image_id) => state.cache.image(Some(image_id)).await.map(|i| i.url),
        None => None,
    };
    let model_path = model_for(&state.models_dir, &breed.name);

    (
        StatusCode::OK,
        Json(ApiResponse {
            success: true,
            data: Some(BreedDetail {
                breed,
                image_url,
                model_path,
            }),
            error: None,
        }),
    )
}

/// Fallback for unknown routes
async fn not_found_handler() -> (StatusCode, Json<ApiResponse<()>>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse {
            success: false,
            data: None,
            error: Some("Page not found".to_string()),
        }),
    )
}

/// Build the web server router
pub fn create_router(cache: BreedCache, models_dir: PathBuf) -> Router {
    let models_service = ServeDir::new(&models_dir);
    let state = AppState { cache, models_dir };

    Router::new()
        .route("/", get(index_handler))
        .route("/api/breeds", get(breeds_handler))
        .route("/api/image/{id}", get(image_handler))
        .route("/api/breed/{id}", get(breed_detail_handler))
        .nest_service("/models", models_service)
        .fallback(not_found_handler)
        .with_state(state)
}

/// Start the web server (async)
///
/// Binds to 0.0.0.0 (all interfaces) to work with Docker port mapping.
pub async fn serve(
    cache: BreedCache,
    models_dir: PathBuf,
    port: u16,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(cache, models_dir);
    let addr = format!("0.0.0.0:{}", port);

    log::info!("Web UI listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
