//! Server shared state
//!
//! Holds configuration for the HTTP server. Each request is an independent
//! recompute cycle; nothing about an individual interaction is retained.

use crate::config::{Config, DefaultsConfig};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;

/// Shared state for the HTTP server
pub struct AppState {
    /// Configuration
    pub config: Arc<RwLock<Config>>,

    /// Server start time, for uptime reporting
    started_at: Instant,
}

impl AppState {
    /// Create new application state
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            started_at: Instant::now(),
        }
    }

    /// Snapshot of the configured defaults
    pub async fn defaults(&self) -> DefaultsConfig {
        self.config.read().await.defaults.clone()
    }

    /// Seconds since the server started
    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
