mod avatar;
mod health;
mod presence;
mod videos;

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;

use crate::cors::{cors_layer, options_no_content};
use crate::state::AppState;

pub use avatar::AvatarQuery;
pub use presence::PresenceRequest;
pub use videos::VideosQuery;

/// All proxy routes. `/avatar` and `/presence` are kept next to their
/// `/api` names for older site builds.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/avatar/:id", get(avatar::avatar_handler))
        .route("/avatar/:id", get(avatar::avatar_handler))
        .route("/api/presence", post(presence::presence_handler))
        .route("/presence", post(presence::presence_handler))
        .route("/api/videos", get(videos::videos_handler))
        .route("/api/health", get(health::health_handler))
        .layer(cors_layer())
        .layer(middleware::from_fn(options_no_content))
        .with_state(state)
}
