use minidns_application::RrTable;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(1);

/// Background eviction sweep of a record table.
///
/// Started exactly once per role, right after the table is built, and
/// runs for the lifetime of the process: the spawned task holds no
/// stop handle, its cancellation is implicit in process teardown.
pub struct TtlSweepJob {
    table: Arc<RrTable>,
    interval: Duration,
}

impl TtlSweepJob {
    pub fn new(table: Arc<RrTable>) -> Self {
        Self {
            table,
            interval: DEFAULT_SWEEP_INTERVAL,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn start(self: Arc<Self>) {
        info!(interval_secs = self.interval.as_secs_f64(), "Starting TTL sweep job");

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            // The first tick completes immediately; a record must
            // live through a full interval before its ttl moves.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let removed = self.table.evict_expired();
                if removed > 0 {
                    debug!(removed, remaining = self.table.len(), "Expired records evicted");
                }
            }
        });
    }
}
