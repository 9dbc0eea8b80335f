//! Refresh timer for the metrics aggregator.

use crate::dashboard::aggregator::MetricsAggregator;

use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Owns the background refresh task.
///
/// Dropping the handle (or calling [`RefreshHandle::shutdown`]) aborts the
/// task and disposes the aggregator, so fetches already in flight are
/// discarded when they land.
pub struct RefreshHandle {
    task: Option<JoinHandle<()>>,
    aggregator: MetricsAggregator,
}

impl RefreshHandle {
    pub(crate) fn spawn(aggregator: MetricsAggregator, interval: Duration) -> Self {
        let agg = aggregator.clone();
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // A slow cycle pushes the next one back instead of bunching ticks.
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut first = true;

            loop {
                ticker.tick().await;
                if agg.is_disposed() {
                    break;
                }
                if first {
                    futures_util::join!(agg.refresh(), agg.seed_default_period());
                } else {
                    agg.refresh().await;
                }
                first = false;
            }
            tracing::debug!("refresh task stopped");
        });

        tracing::debug!(interval_secs = interval.as_secs(), "refresh task started");
        Self {
            task: Some(task),
            aggregator,
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Stop the timer and dispose the aggregator.
    pub fn shutdown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        self.aggregator.dispose();
        if let Some(handle) = self.task.take() {
            handle.abort();
        }
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
