// Application state module
// Shared, read-mostly state handed to every connection task

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

use super::types::Config;

/// Application state
pub struct AppState {
    pub config: Config,

    /// Currently open client connections
    pub active_connections: Arc<AtomicUsize>,

    /// Fired once when the process should stop accepting connections
    pub shutdown_signal: Arc<Notify>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            active_connections: Arc::new(AtomicUsize::new(0)),
            shutdown_signal: Arc::new(Notify::new()),
        }
    }

    pub fn access_log_enabled(&self) -> bool {
        self.config.logging.access_log
    }

    pub fn connection_count(&self) -> usize {
        self.active_connections.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_log_follows_config() {
        let mut config = Config::default_for_tests();
        assert!(AppState::new(&config).access_log_enabled());

        config.logging.access_log = false;
        let state = AppState::new(&config);
        assert!(!state.access_log_enabled());
        assert_eq!(state.connection_count(), 0);
    }
}
