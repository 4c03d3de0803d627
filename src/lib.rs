//! Crate entrypoint wiring together configuration, storage, and the HTTP API.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod validation;

use db::Store;

use std::sync::Arc;

/// Complete application dependencies shared across handlers.
pub struct AppState {
    pub store: Arc<dyn Store>,
}

impl AppState {
    pub fn new(store: impl Store + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// Arc-wrapped version of `AppState` passed into Axum extensions.
pub type SharedState = Arc<AppState>;
