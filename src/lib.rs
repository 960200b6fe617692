// src/lib.rs

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}

pub mod entities {
    pub mod prelude;
    pub mod entrepreneurs;
    pub mod ideas;
    pub mod investors;
    pub mod users;
}

pub mod services {
    pub mod dashboard;
    pub mod entrepreneurs;
    pub mod ideas;
    pub mod investors;
    pub mod listing;
    pub mod matching;
    pub mod password;
    pub mod stats;
    pub mod users;
}

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod validation;

pub use routes::build_router;
