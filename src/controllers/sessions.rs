use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use axum_extra::extract::WithRejection;

use super::{ApiJson, ApiPath, JsonOrEmpty, MovieSessionsPath, SessionPath};
use crate::{
    AppState,
    error::AppResult,
    models::{NewSession, Session, SessionChanges},
    services::sessions as service,
};

pub async fn create_session(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(path), _): ApiPath<MovieSessionsPath>,
    WithRejection(Json(body), _): ApiJson<NewSession>,
) -> AppResult<(StatusCode, Json<Session>)> {
    let session = service::create_session(&state.db, path.movie_id()?, body).await?;
    Ok((StatusCode::CREATED, Json(session.into())))
}

pub async fn update_session(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(path), _): ApiPath<SessionPath>,
    JsonOrEmpty(changes): JsonOrEmpty<SessionChanges>,
) -> AppResult<Json<Session>> {
    let (movie_id, session_id) = path.ids()?;
    let session = service::update_session(&state.db, movie_id, session_id, changes).await?;
    Ok(Json(session.into()))
}

pub async fn delete_session(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(path), _): ApiPath<SessionPath>,
) -> AppResult<StatusCode> {
    let (movie_id, session_id) = path.ids()?;
    service::delete_session(&state.db, movie_id, session_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
