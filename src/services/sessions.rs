use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel, ModelTrait,
    QueryFilter, Set,
};
use tracing::debug;

use super::now_sec;
use crate::{
    entities::{movie, session},
    error::{AppError, AppResult, Resource},
    models::{NewSession, SessionChanges},
};

pub async fn create_session<C: ConnectionTrait>(
    db: &C,
    movie_id: i32,
    data: NewSession,
) -> AppResult<session::Model> {
    let movie = movie::Entity::find_by_id(movie_id)
        .one(db)
        .await?
        .ok_or(AppError::NotFound(Resource::Movie))?;
    data.validate()?;

    let now = now_sec();
    let session = session::ActiveModel {
        id: Default::default(),
        movie_id: Set(movie.id),
        time: Set(data.time.trim().to_string()),
        room: Set(data.room),
        capacity: Set(data.capacity),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await?;

    debug!(movie_id, session_id = session.id, time = %session.time, "created session");
    Ok(session)
}

/// Looks a session up by its own id and its movie's id. A session id that
/// exists under a different movie is reported as not found.
pub async fn get_session<C: ConnectionTrait>(
    db: &C,
    movie_id: i32,
    session_id: i32,
) -> AppResult<session::Model> {
    session::Entity::find_by_id(session_id)
        .filter(session::Column::MovieId.eq(movie_id))
        .one(db)
        .await?
        .ok_or(AppError::NotFound(Resource::Session))
}

pub async fn update_session<C: ConnectionTrait>(
    db: &C,
    movie_id: i32,
    session_id: i32,
    changes: SessionChanges,
) -> AppResult<session::Model> {
    let found = get_session(db, movie_id, session_id).await?;
    changes.validate()?;

    let mut active = found.into_active_model();
    if let Some(Some(time)) = changes.time {
        active.time = Set(time.trim().to_string());
    }
    if let Some(room) = changes.room {
        active.room = Set(room);
    }
    if let Some(capacity) = changes.capacity {
        active.capacity = Set(capacity);
    }
    active.updated_at = Set(now_sec());

    let session = active.update(db).await?;
    debug!(movie_id, session_id, "updated session");
    Ok(session)
}

pub async fn delete_session<C: ConnectionTrait>(
    db: &C,
    movie_id: i32,
    session_id: i32,
) -> AppResult<()> {
    let found = get_session(db, movie_id, session_id).await?;
    found.delete(db).await?;

    debug!(movie_id, session_id, "deleted session");
    Ok(())
}
