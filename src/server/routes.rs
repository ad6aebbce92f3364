use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::server::api;
use crate::server::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::root))
        .route("/post", post(api::create_post))
        .route("/dog", get(api::list_dogs).post(api::create_dog))
        .route("/dog/:pk", get(api::get_dog).patch(api::update_dog))
        .fallback(api::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
