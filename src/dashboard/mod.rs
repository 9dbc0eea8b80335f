//! Dashboard state: metrics aggregation, the transaction feed and the view
//! models they publish.

#[cfg(feature = "http")]
pub mod aggregator;
#[cfg(feature = "http")]
pub mod feed;
pub mod pagination;
#[cfg(feature = "http")]
pub mod poller;
pub mod view;

#[cfg(feature = "http")]
pub use aggregator::{DashboardSnapshot, MetricsAggregator};
#[cfg(feature = "http")]
pub use feed::{FeedSnapshot, TransactionFeed};
pub use pagination::{compute_page_window, PageToken};
#[cfg(feature = "http")]
pub use poller::RefreshHandle;
pub use view::{MetricsView, PeriodMetrics, PeriodView, Phase, SlotUpdate};
