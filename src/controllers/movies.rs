use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use axum_extra::extract::WithRejection;

use super::{ApiJson, ApiPath, JsonOrEmpty, MoviePath};
use crate::{
    AppState,
    error::AppResult,
    models::{Movie, MovieChanges, NewMovie},
    services::movies as service,
};

pub async fn get_movies(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<Movie>>> {
    let movies = service::list_movies(&state.db).await?;
    Ok(Json(movies.into_iter().map(Movie::from).collect()))
}

pub async fn get_movie_by_id(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(path), _): ApiPath<MoviePath>,
) -> AppResult<Json<Movie>> {
    let movie = service::get_movie_by_id(&state.db, path.id()?).await?;
    Ok(Json(movie.into()))
}

pub async fn create_movie(
    State(state): State<Arc<AppState>>,
    WithRejection(Json(body), _): ApiJson<NewMovie>,
) -> AppResult<(StatusCode, Json<Movie>)> {
    let movie = service::create_movie(&state.db, body).await?;
    Ok((StatusCode::CREATED, Json(movie.into())))
}

pub async fn update_movie(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(path), _): ApiPath<MoviePath>,
    JsonOrEmpty(changes): JsonOrEmpty<MovieChanges>,
) -> AppResult<Json<Movie>> {
    let movie = service::update_movie(&state.db, path.id()?, changes).await?;
    Ok(Json(movie.into()))
}

pub async fn delete_movie(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(path), _): ApiPath<MoviePath>,
) -> AppResult<StatusCode> {
    service::delete_movie(&state.db, path.id()?).await?;
    Ok(StatusCode::NO_CONTENT)
}
