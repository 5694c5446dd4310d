use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    AppState,
    controllers::{movies, sessions},
};

pub fn router(state: Arc<AppState>) -> Router {
    let mut app = Router::new()
        .route("/movies/{movie_id}/sessions", post(sessions::create_session))
        .route(
            "/movies/{movie_id}/sessions/{id}",
            put(sessions::update_session).delete(sessions::delete_session),
        );

    if state.config.enable_movie_routes {
        tracing::info!("movie routes enabled");
        app = app
            .route("/movies", get(movies::get_movies).post(movies::create_movie))
            .route(
                "/movies/{id}",
                get(movies::get_movie_by_id).put(movies::update_movie).delete(movies::delete_movie),
            );
    }

    app.with_state(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}
