//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use crate::config::environment::EnvironmentConfig;
use crate::repositories::MemoryStore;

#[derive(Clone)]
pub struct AppState {
    pub store: MemoryStore,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(store: MemoryStore, config: EnvironmentConfig) -> Self {
        Self { store, config }
    }
}
