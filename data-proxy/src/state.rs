use chrono::{Datelike, Utc};
use std::sync::Arc;

use crate::external::ContributionsClient;

/// Source of the year to request from the provider.
pub trait Clock: Send + Sync {
    fn current_year(&self) -> i32;
}

/// Wall-clock year in UTC.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        Utc::now().year()
    }
}

/// Always reports the same year.
#[derive(Debug, Clone, Copy)]
pub struct FixedYear(pub i32);

impl Clock for FixedYear {
    fn current_year(&self) -> i32 {
        self.0
    }
}

/// Shared, read-only request state.
#[derive(Clone)]
pub struct AppState {
    pub provider: ContributionsClient,
    clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(provider: ContributionsClient) -> Self {
        Self {
            provider,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn current_year(&self) -> i32 {
        self.clock.current_year()
    }
}
