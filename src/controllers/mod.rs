//! HTTP handlers. Path parameters are coerced to integers here, once, through
//! typed path structs; services only ever see numeric ids.

pub mod movies;
pub mod sessions;

use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Path, Request},
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, de::DeserializeOwned};

use crate::error::{AppError, AppResult, Resource};

pub type ApiPath<T> = WithRejection<Path<T>, AppError>;
pub type ApiJson<T> = WithRejection<Json<T>, AppError>;

#[derive(Debug, Deserialize)]
pub struct MoviePath {
    pub id: i64,
}

impl MoviePath {
    pub fn id(&self) -> AppResult<i32> {
        stored_id(self.id, Resource::Movie)
    }
}

#[derive(Debug, Deserialize)]
pub struct MovieSessionsPath {
    pub movie_id: i64,
}

impl MovieSessionsPath {
    pub fn movie_id(&self) -> AppResult<i32> {
        stored_id(self.movie_id, Resource::Movie)
    }
}

/// Ids of a session under its movie. Either id being out of range means the
/// scoped lookup cannot match, so both report the session as missing.
#[derive(Debug, Deserialize)]
pub struct SessionPath {
    pub movie_id: i64,
    pub id: i64,
}

impl SessionPath {
    pub fn ids(&self) -> AppResult<(i32, i32)> {
        Ok((stored_id(self.movie_id, Resource::Session)?, stored_id(self.id, Resource::Session)?))
    }
}

/// Primary keys are 32-bit; a well-formed id outside that range names no record.
fn stored_id(raw: i64, resource: Resource) -> AppResult<i32> {
    i32::try_from(raw).map_err(|_| AppError::NotFound(resource))
}

/// JSON body where an empty request body means `T::default()`.
#[derive(Debug)]
pub struct JsonOrEmpty<T>(pub T);

impl<S, T> FromRequest<S> for JsonOrEmpty<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }

        serde_json::from_slice(&bytes)
            .map(Self)
            .map_err(|err| AppError::validation(format!("invalid JSON body: {err}")))
    }
}
