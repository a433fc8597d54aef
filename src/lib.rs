//! Bookshelf - personal book library manager
//!
//! Add, list, re-rate and delete books through plain HTML forms, backed by a
//! single SQLite table.

use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod views;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
    /// Signs the flash cookie
    pub cookie_key: Key,
}

impl AppState {
    pub fn new(config: AppConfig, services: services::Services) -> Self {
        let cookie_key = api::flash::signing_key(&config.session.secret_key);
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
            cookie_key,
        }
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}
