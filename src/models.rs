use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    entities::{movie, session},
    error::{AppError, AppResult},
};

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub duration_minutes: Option<i32>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<movie::Model> for Movie {
    fn from(m: movie::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            description: m.description,
            duration_minutes: m.duration_minutes,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// A screening as exposed over HTTP; `movie` is the owning movie's id.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Session {
    pub id: i32,
    pub movie: i32,
    pub time: String,
    pub room: Option<String>,
    pub capacity: Option<i32>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<session::Model> for Session {
    fn from(s: session::Model) -> Self {
        Self {
            id: s.id,
            movie: s.movie_id,
            time: s.time,
            room: s.room,
            capacity: s.capacity,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewMovie {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration_minutes: Option<i32>,
}

impl NewMovie {
    pub fn validate(&self) -> AppResult<()> {
        check_title(&self.title)?;
        check_duration(self.duration_minutes)
    }
}

/// Partial movie update. Absent fields keep their stored value; a field sent
/// as `null` is cleared.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MovieChanges {
    #[serde(default, deserialize_with = "present")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub duration_minutes: Option<Option<i32>>,
}

impl MovieChanges {
    pub fn validate(&self) -> AppResult<()> {
        match &self.title {
            Some(Some(title)) => check_title(title)?,
            Some(None) => return Err(AppError::validation("title is required")),
            None => {},
        }
        check_duration(self.duration_minutes.flatten())
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewSession {
    pub time: String,
    #[serde(default)]
    pub room: Option<String>,
    #[serde(default)]
    pub capacity: Option<i32>,
}

impl NewSession {
    pub fn validate(&self) -> AppResult<()> {
        check_time(&self.time)?;
        check_capacity(self.capacity)
    }
}

/// Partial session update. Absent fields keep their stored value; a field
/// sent as `null` is cleared.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SessionChanges {
    #[serde(default, deserialize_with = "present")]
    pub time: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub room: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub capacity: Option<Option<i32>>,
}

impl SessionChanges {
    pub fn validate(&self) -> AppResult<()> {
        match &self.time {
            Some(Some(time)) => check_time(time)?,
            Some(None) => return Err(AppError::validation("time is required")),
            None => {},
        }
        check_capacity(self.capacity.flatten())
    }
}

/// Marks a field as sent, so `null` becomes `Some(None)` while a missing key
/// stays `None` through `#[serde(default)]`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn check_title(title: &str) -> AppResult<()> {
    if title.trim().is_empty() {
        return Err(AppError::validation("title is required"));
    }
    Ok(())
}

fn check_duration(duration_minutes: Option<i32>) -> AppResult<()> {
    match duration_minutes {
        Some(d) if d <= 0 => Err(AppError::validation("duration_minutes must be positive")),
        _ => Ok(()),
    }
}

fn check_time(time: &str) -> AppResult<()> {
    if time.trim().is_empty() {
        return Err(AppError::validation("time is required"));
    }
    Ok(())
}

fn check_capacity(capacity: Option<i32>) -> AppResult<()> {
    match capacity {
        Some(c) if c < 0 => Err(AppError::validation("capacity must not be negative")),
        _ => Ok(()),
    }
}
