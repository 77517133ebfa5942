//! Expiry Sweeper Task
//!
//! Background task that periodically removes expired entries from every shard.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::cache::{Shard, StatsRecorder};

/// Sweeps every shard in order and returns the total number of entries removed.
///
/// Each shard is locked on its own; there is no cross-shard atomicity.
pub fn sweep_shards(shards: &[Shard]) -> usize {
    shards.iter().map(Shard::sweep).sum()
}

/// Spawns the sweeper on `runtime`.
///
/// The task ticks every `interval`, sweeping all shards, until `shutdown`
/// becomes `true` or its sender is dropped. Once stopped it never restarts.
///
/// # Arguments
/// * `runtime` - Runtime the task is spawned on
/// * `shards` - Shard array shared with the owning cache
/// * `stats` - Counters updated after each pass
/// * `interval` - Time between passes, must be non-zero
/// * `shutdown` - Cancellation signal owned by the cache
pub fn spawn_sweeper(
    runtime: &Handle,
    shards: Arc<[Shard]>,
    stats: Arc<StatsRecorder>,
    interval: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    runtime.spawn(async move {
        info!(
            "Starting expiry sweeper over {} shards every {:?}",
            shards.len(),
            interval
        );

        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately
        ticker.tick().await;

        loop {
            tokio::select! {
                biased;

                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
                _ = ticker.tick() => {
                    let removed = sweep_shards(&shards);
                    stats.record_sweep(removed);

                    if removed > 0 {
                        info!("Sweeper: removed {} expired entries", removed);
                    } else {
                        debug!("Sweeper: no expired entries found");
                    }
                }
            }
        }

        info!("Expiry sweeper stopped");
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(50);

    fn shards(count: usize) -> Arc<[Shard]> {
        (0..count).map(|_| Shard::new()).collect()
    }

    #[test]
    fn test_sweep_shards_counts_across_shards() {
        let shards = shards(4);
        for (i, shard) in shards.iter().enumerate() {
            shard.set(format!("expired-{}", i), "v".to_string(), Duration::ZERO);
            shard.set(format!("live-{}", i), "v".to_string(), Duration::from_secs(60));
        }

        assert_eq!(sweep_shards(&shards), 4);
        assert!(shards.iter().all(|shard| shard.len() == 1));
    }

    #[tokio::test]
    async fn test_sweeper_removes_expired_entries() {
        let shards = shards(2);
        let stats = Arc::new(StatsRecorder::new());
        let (tx, rx) = watch::channel(false);

        shards[0].set("expire_soon".to_string(), "v".to_string(), Duration::from_millis(10));
        shards[1].set("long_lived".to_string(), "v".to_string(), Duration::from_secs(3600));

        let handle = spawn_sweeper(
            &Handle::current(),
            Arc::clone(&shards),
            Arc::clone(&stats),
            TICK,
            rx,
        );

        tokio::time::sleep(TICK * 4).await;

        assert!(shards[0].is_empty(), "Expired entry should have been swept");
        assert_eq!(shards[1].get("long_lived").as_deref(), Some("v"));

        let snapshot = stats.snapshot();
        assert!(snapshot.sweeps >= 1);
        assert_eq!(snapshot.reclaimed, 1);

        tx.send_replace(true);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_sweeper_stops_on_signal() {
        let (tx, rx) = watch::channel(false);
        let handle = spawn_sweeper(
            &Handle::current(),
            shards(2),
            Arc::new(StatsRecorder::new()),
            TICK,
            rx,
        );

        tx.send_replace(true);

        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("sweeper should stop promptly")
            .unwrap();
    }

    #[tokio::test]
    async fn test_sweeper_stops_when_sender_dropped() {
        let (tx, rx) = watch::channel(false);
        let handle = spawn_sweeper(
            &Handle::current(),
            shards(2),
            Arc::new(StatsRecorder::new()),
            TICK,
            rx,
        );

        drop(tx);

        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("sweeper should stop promptly")
            .unwrap();
    }

    #[tokio::test]
    async fn test_no_ticks_after_stop() {
        let stats = Arc::new(StatsRecorder::new());
        let (tx, rx) = watch::channel(false);
        let handle = spawn_sweeper(&Handle::current(), shards(2), Arc::clone(&stats), TICK, rx);

        tokio::time::sleep(TICK * 3).await;
        tx.send_replace(true);
        handle.await.unwrap();

        let sweeps = stats.snapshot().sweeps;
        tokio::time::sleep(TICK * 3).await;
        assert_eq!(stats.snapshot().sweeps, sweeps);
    }
}
