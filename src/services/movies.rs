use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel, ModelTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::debug;

use super::now_sec;
use crate::{
    entities::{movie, session},
    error::{AppError, AppResult, Resource},
    models::{MovieChanges, NewMovie},
};

pub async fn list_movies<C: ConnectionTrait>(db: &C) -> AppResult<Vec<movie::Model>> {
    let movies = movie::Entity::find().order_by_asc(movie::Column::Id).all(db).await?;
    Ok(movies)
}

pub async fn get_movie_by_id<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<movie::Model> {
    movie::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(AppError::NotFound(Resource::Movie))
}

pub async fn create_movie<C: ConnectionTrait>(db: &C, data: NewMovie) -> AppResult<movie::Model> {
    data.validate()?;

    let now = now_sec();
    let movie = movie::ActiveModel {
        id: Default::default(),
        title: Set(data.title.trim().to_string()),
        description: Set(data.description),
        duration_minutes: Set(data.duration_minutes),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await?;

    debug!(movie_id = movie.id, title = %movie.title, "created movie");
    Ok(movie)
}

pub async fn update_movie<C: ConnectionTrait>(
    db: &C,
    id: i32,
    changes: MovieChanges,
) -> AppResult<movie::Model> {
    let found = get_movie_by_id(db, id).await?;
    changes.validate()?;

    let mut active = found.into_active_model();
    if let Some(Some(title)) = changes.title {
        active.title = Set(title.trim().to_string());
    }
    if let Some(description) = changes.description {
        active.description = Set(description);
    }
    if let Some(duration_minutes) = changes.duration_minutes {
        active.duration_minutes = Set(duration_minutes);
    }
    active.updated_at = Set(now_sec());

    let movie = active.update(db).await?;
    debug!(movie_id = movie.id, "updated movie");
    Ok(movie)
}

/// Removes the movie together with its sessions.
pub async fn delete_movie<C>(db: &C, id: i32) -> AppResult<()>
where
    C: ConnectionTrait + TransactionTrait,
{
    let txn = db.begin().await?;
    let found = get_movie_by_id(&txn, id).await?;
    let removed = session::Entity::delete_many()
        .filter(session::Column::MovieId.eq(found.id))
        .exec(&txn)
        .await?;
    found.delete(&txn).await?;
    txn.commit().await?;

    debug!(movie_id = id, sessions_removed = removed.rows_affected, "deleted movie");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_db;

    fn new_movie(title: &str) -> NewMovie {
        NewMovie { title: title.into(), description: None, duration_minutes: Some(120) }
    }

    #[tokio::test]
    async fn create_then_get() {
        let db = test_db().await;
        let created = create_movie(&db, new_movie("Central do Brasil")).await.unwrap();

        let found = get_movie_by_id(&db, created.id).await.unwrap();
        assert_eq!(found, created);
        assert_eq!(found.title, "Central do Brasil");
    }

    #[tokio::test]
    async fn missing_movie_is_not_found() {
        let db = test_db().await;
        let err = get_movie_by_id(&db, 999).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(Resource::Movie)));
    }

    #[tokio::test]
    async fn update_merges_only_supplied_fields() {
        let db = test_db().await;
        let created = create_movie(&db, new_movie("Cidade de Deus")).await.unwrap();

        let changes =
            MovieChanges { description: Some(Some("Rio, anos 70".into())), ..Default::default() };
        let updated = update_movie(&db, created.id, changes).await.unwrap();

        assert_eq!(updated.title, "Cidade de Deus");
        assert_eq!(updated.duration_minutes, Some(120));
        assert_eq!(updated.description.as_deref(), Some("Rio, anos 70"));
    }

    #[tokio::test]
    async fn null_clears_optional_fields() {
        let db = test_db().await;
        let created = create_movie(&db, new_movie("Pixote")).await.unwrap();

        let changes = MovieChanges { duration_minutes: Some(None), ..Default::default() };
        let updated = update_movie(&db, created.id, changes).await.unwrap();

        assert_eq!(updated.duration_minutes, None);
        assert_eq!(updated.title, "Pixote");
    }

    #[tokio::test]
    async fn empty_update_keeps_record() {
        let db = test_db().await;
        let created = create_movie(&db, new_movie("Bacurau")).await.unwrap();

        let updated = update_movie(&db, created.id, MovieChanges::default()).await.unwrap();
        assert_eq!(updated.title, created.title);
        assert_eq!(updated.duration_minutes, created.duration_minutes);
    }

    #[tokio::test]
    async fn update_missing_movie_is_not_found() {
        let db = test_db().await;
        let err = update_movie(&db, 999, MovieChanges::default()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(Resource::Movie)));
    }

    #[tokio::test]
    async fn invalid_movie_is_not_persisted() {
        let db = test_db().await;
        let err = create_movie(&db, new_movie("  ")).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(list_movies(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_removes_movie_and_sessions() {
        let db = test_db().await;
        let created = create_movie(&db, new_movie("O Auto da Compadecida")).await.unwrap();
        crate::services::sessions::create_session(
            &db,
            created.id,
            crate::models::NewSession { time: "20:00".into(), room: None, capacity: None },
        )
        .await
        .unwrap();

        delete_movie(&db, created.id).await.unwrap();

        assert!(matches!(
            get_movie_by_id(&db, created.id).await,
            Err(AppError::NotFound(Resource::Movie))
        ));
        let sessions = session::Entity::find().all(&db).await.unwrap();
        assert!(sessions.is_empty());
    }

    #[tokio::test]
    async fn delete_missing_movie_is_not_found() {
        let db = test_db().await;
        let err = delete_movie(&db, 999).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(Resource::Movie)));
    }

    #[tokio::test]
    async fn list_is_ordered_by_id() {
        let db = test_db().await;
        create_movie(&db, new_movie("A")).await.unwrap();
        create_movie(&db, new_movie("B")).await.unwrap();

        let titles: Vec<_> = list_movies(&db).await.unwrap().into_iter().map(|m| m.title).collect();
        assert_eq!(titles, ["A", "B"]);
    }
}
