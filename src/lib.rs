pub mod config;
pub mod controllers;
pub mod db;
pub mod entities;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db: DatabaseConnection,
}
