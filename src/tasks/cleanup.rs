//! Expiry Sweeper Task
//!
//! Background task that periodically purges expired song requests,
//! independent of any read traffic.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::store::RequestStore;

/// Spawns the background sweeper that bulk-deletes expired requests.
///
/// Runs on a tokio interval timer rather than a bare sleep loop, so missed
/// ticks are delayed instead of bursting. A failed sweep is logged and
/// swallowed; the loop continues to the next tick, never terminating the
/// process over one bad run.
///
/// # Arguments
/// * `store` - Arc<RwLock<RequestStore>> shared reference to the store
/// * `cleanup_interval_secs` - Seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, aborted during graceful shutdown so
/// the sweeper lifetime is tied to the process.
pub fn spawn_cleanup_task(
    store: Arc<RwLock<RequestStore>>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()> {
    let period = Duration::from_secs(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting expiry sweeper with interval of {} seconds",
            cleanup_interval_secs
        );

        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately; consume it so the first
        // sweep happens one full interval after startup.
        ticker.tick().await;

        loop {
            ticker.tick().await;

            // Acquire write lock and purge expired requests
            let result = {
                let mut store_guard = store.write().await;
                store_guard.delete_expired()
            };

            match result {
                Ok(removed) if removed > 0 => {
                    info!("Expiry sweep: removed {} expired requests", removed);
                }
                Ok(_) => {
                    debug!("Expiry sweep: no expired requests found");
                }
                Err(e) => {
                    // A transient store failure must not kill the sweeper
                    warn!("Expiry sweep failed, will retry next interval: {}", e);
                }
            }
        }
    })
}
