//! Application state shared across all handlers.

use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Shared application state. Holds counters only; generation itself is stateless.
#[derive(Clone)]
pub struct AppState {
    pub started_at: DateTime<Utc>,
    pub start_time: Instant,
    generations: Arc<AtomicU64>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            start_time: Instant::now(),
            generations: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn record_generation(&self) {
        self.generations.fetch_add(1, Ordering::Relaxed);
    }

    /// Successful generations since start.
    pub fn generations(&self) -> u64 {
        self.generations.load(Ordering::Relaxed)
    }

    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
