//! Metrics aggregator — global stats, pools, network and the period view.
//!
//! One refresh cycle fetches the three global sources concurrently. Each
//! source writes its own slot as soon as it resolves, so arrival order does
//! not matter. A failed source leaves its slot as it was.
//!
//! Period selection is a separate trigger: swap and earnings history for the
//! period are fetched together and the resulting [`PeriodView`] replaces the
//! previous one in a single write. When selections overlap, the newest wins.

use crate::client::MidgardClient;
use crate::dashboard::poller::RefreshHandle;
use crate::dashboard::view::{MetricsView, PeriodView, Phase, SlotUpdate};
use crate::fallback::{live_or_absent, simulated_period, Source};
use crate::shared::Period;

use async_lock::RwLock;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Everything presentation needs to draw the metrics section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSnapshot {
    pub phase: Phase,
    pub metrics: MetricsView,
    /// Period of the stored `period` view.
    pub selected_period: Period,
    /// `None` until the first period selection resolves.
    pub period: Option<PeriodView>,
    /// Period whose history is being fetched, if any.
    pub pending_period: Option<Period>,
}

struct Inner {
    client: MidgardClient,
    state: RwLock<DashboardSnapshot>,
    disposed: AtomicBool,
    period_seq: AtomicU64,
}

/// Shared handle; clones see the same state.
#[derive(Clone)]
pub struct MetricsAggregator {
    inner: Arc<Inner>,
}

impl MetricsAggregator {
    pub fn new(client: MidgardClient) -> Self {
        Self {
            inner: Arc::new(Inner {
                client,
                state: RwLock::new(DashboardSnapshot::default()),
                disposed: AtomicBool::new(false),
                period_seq: AtomicU64::new(0),
            }),
        }
    }

    pub async fn snapshot(&self) -> DashboardSnapshot {
        self.inner.state.read().await.clone()
    }

    pub async fn phase(&self) -> Phase {
        self.inner.state.read().await.phase
    }

    /// Run one refresh cycle.
    pub async fn refresh(&self) {
        if self.is_disposed() {
            return;
        }
        let client = &self.inner.client;

        let stats = async {
            if let Some(s) = live_or_absent(Source::Stats, client.stats().get().await) {
                self.apply(SlotUpdate::Stats(s)).await;
            }
        };
        let pools = async {
            if let Some(p) = live_or_absent(Source::Pools, client.pools().available().await) {
                self.apply(SlotUpdate::Pools(p)).await;
            }
        };
        let network = async {
            if let Some(n) = live_or_absent(Source::Network, client.network().get().await) {
                self.apply(SlotUpdate::Network(n)).await;
            }
        };
        futures_util::join!(stats, pools, network);

        if self.is_disposed() {
            return;
        }
        let mut state = self.inner.state.write().await;
        let next = state.phase.after_cycle(state.metrics.has_data());
        if next != state.phase {
            tracing::info!(from = ?state.phase, to = ?next, "dashboard phase changed");
        }
        state.phase = next;
    }

    async fn apply(&self, update: SlotUpdate) {
        if self.is_disposed() {
            return;
        }
        let mut state = self.inner.state.write().await;
        state.metrics = state.metrics.merge(update);
    }

    /// Fetch history for `period` and replace the period view.
    ///
    /// `selected_period` and `period` change together when the fetch lands;
    /// until then `pending_period` names the period being loaded. Returns the
    /// view that was built, whether or not a newer selection superseded it
    /// before it could be stored.
    pub async fn select_period(&self, period: Period) -> PeriodView {
        let seq = {
            let mut state = self.inner.state.write().await;
            let seq = self.inner.period_seq.fetch_add(1, Ordering::SeqCst) + 1;
            if !self.is_disposed() {
                state.pending_period = Some(period);
            }
            seq
        };
        self.load_period(period, seq).await
    }

    /// Load the default period, but only if nothing has ever been selected.
    pub(crate) async fn seed_default_period(&self) {
        let period = Period::default();
        {
            let mut state = self.inner.state.write().await;
            if self
                .inner
                .period_seq
                .compare_exchange(0, 1, Ordering::SeqCst, Ordering::SeqCst)
                .is_err()
            {
                return;
            }
            if !self.is_disposed() {
                state.pending_period = Some(period);
            }
        }
        self.load_period(period, 1).await;
    }

    async fn load_period(&self, period: Period, seq: u64) -> PeriodView {
        let history = self.inner.client.history();
        let (swaps, earnings) = futures_util::join!(history.swaps(period), history.earnings(period));
        let swaps = live_or_absent(Source::SwapHistory, swaps);
        let earnings = live_or_absent(Source::EarningsHistory, earnings);

        let live = swaps.and_then(|samples| {
            if samples.is_empty() {
                tracing::warn!(
                    source = Source::SwapHistory.as_str(),
                    period = period.label(),
                    "swap history returned no intervals"
                );
            }
            PeriodView::from_live(period, &samples, earnings.as_deref())
        });
        let view = live.unwrap_or_else(|| simulated_period(period));

        let mut state = self.inner.state.write().await;
        if self.is_disposed() || self.inner.period_seq.load(Ordering::SeqCst) != seq {
            tracing::debug!(period = period.label(), "discarding stale period view");
            return view;
        }
        state.selected_period = period;
        state.period = Some(view.clone());
        state.pending_period = None;
        view
    }

    /// Same as [`Self::select_period`] for a selector label. Unknown labels
    /// select `24H`.
    pub async fn select_period_label(&self, label: &str) -> PeriodView {
        self.select_period(Period::from_label(label)).await
    }

    /// Start the refresh timer. The first tick fires immediately.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&self, interval: Duration) -> RefreshHandle {
        RefreshHandle::spawn(self.clone(), interval)
    }

    /// Stop accepting results. In-flight fetches finish but are discarded,
    /// and a running timer exits on its next tick.
    pub fn dispose(&self) {
        if !self.inner.disposed.swap(true, Ordering::SeqCst) {
            tracing::debug!("metrics aggregator disposed");
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.disposed.load(Ordering::SeqCst)
    }
}
