//! Transaction feed — one page of recent actions at a time.

use crate::client::MidgardClient;
use crate::dashboard::pagination::{compute_page_window, PageToken, DEFAULT_MAX_VISIBLE};
use crate::domain::action::{ActionsQuery, FilterLabel, TransactionRow};
use crate::fallback::{live_or_absent, Source};

use async_lock::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

// TODO: replace with the `count` field of the actions response once the
// feed tracks per-filter totals.
const APPROX_TOTAL_PAGES: u32 = 99;

#[derive(Debug, Clone, PartialEq)]
pub struct FeedSnapshot {
    pub filter: FilterLabel,
    pub page: u32,
    pub total_pages: u32,
    pub rows: Vec<TransactionRow>,
    pub loading: bool,
}

impl Default for FeedSnapshot {
    fn default() -> Self {
        Self {
            filter: FilterLabel::default(),
            page: 1,
            total_pages: APPROX_TOTAL_PAGES,
            rows: Vec::new(),
            loading: false,
        }
    }
}

struct Inner {
    client: MidgardClient,
    state: RwLock<FeedSnapshot>,
    request_seq: AtomicU64,
}

/// Paged view over `/v2/actions`. Clones share state.
///
/// Overlapping fetches are allowed; only the most recently started one is
/// applied.
#[derive(Clone)]
pub struct TransactionFeed {
    inner: Arc<Inner>,
}

impl TransactionFeed {
    pub fn new(client: MidgardClient) -> Self {
        Self {
            inner: Arc::new(Inner {
                client,
                state: RwLock::new(FeedSnapshot::default()),
                request_seq: AtomicU64::new(0),
            }),
        }
    }

    /// Fetch `page` under `filter`. On failure the previous rows stay.
    ///
    /// Returns `true` when fresh rows were stored.
    pub async fn fetch_page(&self, filter: FilterLabel, page: u32) -> bool {
        let seq = self.inner.request_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let page = page.max(1);
        {
            let mut state = self.inner.state.write().await;
            state.filter = filter;
            state.page = page;
            state.loading = true;
        }

        let query = ActionsQuery::new(filter, page);
        let result = self.inner.client.actions().list(&query).await;
        let actions = live_or_absent(Source::Actions, result);

        if self.inner.request_seq.load(Ordering::SeqCst) != seq {
            tracing::debug!(filter = filter.label(), page, "discarding superseded page");
            return false;
        }

        let mut state = self.inner.state.write().await;
        state.loading = false;
        match actions {
            Some(actions) => {
                let now = chrono::Utc::now();
                state.rows = actions
                    .iter()
                    .map(|a| TransactionRow::from_action(a, now))
                    .collect();
                tracing::debug!(filter = filter.label(), page, rows = state.rows.len(), "feed page loaded");
                true
            }
            None => false,
        }
    }

    /// Switch tabs. Always goes back to page 1.
    pub async fn set_filter(&self, filter: FilterLabel) -> bool {
        self.fetch_page(filter, 1).await
    }

    /// Switch tabs by label; unknown labels select `All`.
    pub async fn set_filter_label(&self, label: &str) -> bool {
        self.set_filter(FilterLabel::from_label(label)).await
    }

    /// Jump to `page` under the current filter. Pages outside
    /// `1..=total_pages` are ignored.
    pub async fn go_to_page(&self, page: u32) -> bool {
        let (filter, total) = {
            let state = self.inner.state.read().await;
            (state.filter, state.total_pages)
        };
        if !(1..=total).contains(&page) {
            return false;
        }
        self.fetch_page(filter, page).await
    }

    /// Re-fetch the current page.
    pub async fn reload(&self) -> bool {
        let (filter, page) = {
            let state = self.inner.state.read().await;
            (state.filter, state.page)
        };
        self.fetch_page(filter, page).await
    }

    pub async fn snapshot(&self) -> FeedSnapshot {
        self.inner.state.read().await.clone()
    }

    pub async fn rows(&self) -> Vec<TransactionRow> {
        self.inner.state.read().await.rows.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.inner.state.read().await.loading
    }

    pub async fn page_window(&self) -> Vec<PageToken> {
        let state = self.inner.state.read().await;
        compute_page_window(state.page, state.total_pages, DEFAULT_MAX_VISIBLE)
    }
}
