//! Integration tests for the dashboard against a mocked Midgard server.
//!
//! Every test spins up its own `httpmock` server, so they run offline and in
//! parallel.

use std::time::Duration;

use httpmock::prelude::*;
use serde_json::{json, Value};

use midgard_dashboard::prelude::*;

// =============================================================================
// Helpers
// =============================================================================

fn client_for(server: &MockServer) -> MidgardClient {
    MidgardClient::builder()
        .base_url(&server.base_url())
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

fn stats_body() -> Value {
    json!({
        "swapVolume": "123400000000000",
        "swapCount": "9876543",
        "swapCount24h": "4321",
        "dailyActiveUsers": "1200",
        "monthlyActiveUsers": "35000",
        "addLiquidityVolume": "50000000000000",
        "runePriceUSD": "5.4321"
    })
}

fn pools_body() -> Value {
    json!([
        { "asset": "BTC.BTC", "assetDepth": "1000", "runeDepth": "100000000", "status": "available" },
        { "asset": "ETH.ETH", "assetDepth": "2000", "runeDepth": "200000000", "status": "available" }
    ])
}

fn swaps_body(volumes: &[&str]) -> Value {
    let intervals: Vec<Value> = volumes
        .iter()
        .enumerate()
        .map(|(i, v)| {
            json!({
                "startTime": (1_700_000_000 + i * 86_400).to_string(),
                "endTime": (1_700_086_400 + i * 86_400).to_string(),
                "totalVolume": v,
                "totalCount": "100"
            })
        })
        .collect();
    json!({ "intervals": intervals, "meta": {} })
}

fn action(hash: &str, address: &str) -> Value {
    json!({
        "date": "1700000000000000000",
        "height": "13500000",
        "status": "success",
        "type": "swap",
        "pools": ["BTC.BTC"],
        "in": [{ "txID": hash, "address": address, "coins": [{ "asset": "BTC.BTC", "amount": "150000000" }] }],
        "out": [{ "txID": "", "address": "thor1destination0000000000000000000000", "coins": [{ "asset": "THOR.RUNE", "amount": "250000000000" }] }]
    })
}

async fn mock_json<'a>(server: &'a MockServer, path: &str, body: Value) -> httpmock::Mock<'a> {
    server
        .mock_async(|when, then| {
            when.method(GET).path(path);
            then.status(200)
                .header("content-type", "application/json")
                .json_body(body);
        })
        .await
}

// =============================================================================
// Metrics aggregator
// =============================================================================

mod metrics {
    use super::*;

    #[tokio::test]
    async fn test_tvl_end_to_end() {
        let server = MockServer::start_async().await;
        let pools = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v2/pools")
                    .query_param("status", "available");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(pools_body());
            })
            .await;

        let metrics = client_for(&server).metrics();
        metrics.refresh().await;

        pools.assert_async().await;
        let snap = metrics.snapshot().await;
        assert_eq!(snap.phase, Phase::Ready);
        assert_eq!(snap.metrics.tvl_display(), "$6.00");
        assert_eq!(snap.metrics.active_pools(), 2);
    }

    #[tokio::test]
    async fn test_partial_failure_keeps_other_slots() {
        let server = MockServer::start_async().await;
        mock_json(&server, "/v2/stats", stats_body()).await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v2/pools");
                then.status(500).body("boom");
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v2/network");
                then.status(200)
                    .header("content-type", "text/html")
                    .body("<html>maintenance</html>");
            })
            .await;

        let metrics = client_for(&server).metrics();
        metrics.refresh().await;

        let snap = metrics.snapshot().await;
        assert_eq!(snap.phase, Phase::Ready);
        assert!(snap.metrics.stats.is_some());
        assert!(snap.metrics.pools.is_none());
        assert!(snap.metrics.network.is_none());
        assert_eq!(snap.metrics.swap_volume_display(), "$1.23M");
        assert_eq!(snap.metrics.tvl_display(), "$0.00");
    }

    #[tokio::test]
    async fn test_everything_down_is_unavailable() {
        let server = MockServer::start_async().await;
        let metrics = client_for(&server).metrics();
        metrics.refresh().await;
        assert_eq!(metrics.phase().await, Phase::Unavailable);
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_previous_values() {
        let server = MockServer::start_async().await;
        let mut stats = mock_json(&server, "/v2/stats", stats_body()).await;

        let metrics = client_for(&server).metrics();
        metrics.refresh().await;
        let before = metrics.snapshot().await.metrics.stats;
        assert!(before.is_some());

        stats.delete_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v2/stats");
                then.status(503);
            })
            .await;
        metrics.refresh().await;

        let snap = metrics.snapshot().await;
        assert_eq!(snap.phase, Phase::Ready);
        assert_eq!(snap.metrics.stats, before);
    }

    #[tokio::test]
    async fn test_live_period() {
        let server = MockServer::start_async().await;
        let swaps = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v2/history/swaps")
                    .query_param("interval", "7d")
                    .query_param("count", "50");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(swaps_body(&[
                        "100000000000000",
                        "200000000000000",
                        "300000000000000",
                    ]));
            })
            .await;

        let metrics = client_for(&server).metrics();
        let view = metrics.select_period(Period::Week).await;

        swaps.assert_async().await;
        assert_eq!(view.provenance, Provenance::Live);
        assert_eq!(view.metrics.volume, "$6.00M");
        assert_eq!(view.metrics.transactions, "300");
        assert_eq!(view.metrics.avg_volume, "$2.00M");
        // Earnings endpoint is not mocked.
        assert_eq!(view.metrics.earnings, None);
        assert_eq!(view.chart.points.len(), 3);
        assert_eq!(view.chart.points[2].y, 60.0);
        assert_eq!(metrics.snapshot().await.period, Some(view));
    }

    #[tokio::test]
    async fn test_unavailable_history_is_simulated() {
        let server = MockServer::start_async().await;
        let metrics = client_for(&server).metrics();

        let view = metrics.select_period_label("30D").await;
        assert_eq!(view.provenance, Provenance::Simulated);
        assert_eq!(view.metrics.volume, "$1.2B");
        assert_eq!(view.metrics.transactions, "76,891");
        assert_eq!(view.metrics.earnings, None);
    }

    #[tokio::test]
    async fn test_empty_history_is_simulated() {
        let server = MockServer::start_async().await;
        mock_json(&server, "/v2/history/swaps", swaps_body(&[])).await;

        let metrics = client_for(&server).metrics();
        let view = metrics.select_period(Period::Day).await;
        assert_eq!(view.provenance, Provenance::Simulated);
        assert_eq!(view.metrics.volume, "$45.2M");
    }

    #[tokio::test]
    async fn test_newest_period_selection_wins() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v2/history/swaps")
                    .query_param("interval", "7d");
                then.status(200)
                    .header("content-type", "application/json")
                    .delay(Duration::from_millis(400))
                    .json_body(swaps_body(&["100000000"]));
            })
            .await;

        let metrics = client_for(&server).metrics();
        let slow = metrics.clone();
        let week = tokio::spawn(async move { slow.select_period(Period::Week).await });
        tokio::time::sleep(Duration::from_millis(50)).await;
        metrics.select_period(Period::Month).await;
        week.await.unwrap();

        let snap = metrics.snapshot().await;
        assert_eq!(snap.selected_period, Period::Month);
        assert_eq!(snap.period.map(|p| p.period), Some(Period::Month));
    }

    #[tokio::test]
    async fn test_dispose_discards_in_flight_results() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v2/stats");
                then.status(200)
                    .header("content-type", "application/json")
                    .delay(Duration::from_millis(300))
                    .json_body(stats_body());
            })
            .await;

        let metrics = client_for(&server).metrics();
        let handle = metrics.start(Duration::from_secs(3600));
        tokio::time::sleep(Duration::from_millis(50)).await;
        drop(handle);
        tokio::time::sleep(Duration::from_millis(500)).await;

        let snap = metrics.snapshot().await;
        assert!(metrics.is_disposed());
        assert_eq!(snap.phase, Phase::Loading);
        assert!(snap.metrics.stats.is_none());
    }

    #[tokio::test]
    async fn test_timer_runs_first_cycle_immediately() {
        let server = MockServer::start_async().await;
        mock_json(&server, "/v2/stats", stats_body()).await;

        let metrics = client_for(&server).metrics();
        let handle = metrics.start(Duration::from_secs(3600));
        tokio::time::sleep(Duration::from_millis(500)).await;

        let snap = metrics.snapshot().await;
        assert_eq!(snap.phase, Phase::Ready);
        assert_eq!(snap.period.map(|p| p.provenance), Some(Provenance::Simulated));
        handle.shutdown();
    }

    #[tokio::test]
    async fn test_refresh_fetches_sources_concurrently() {
        let server = MockServer::start_async().await;
        let delay = Duration::from_millis(300);
        for (path, body) in [
            ("/v2/stats", stats_body()),
            ("/v2/pools", pools_body()),
            ("/v2/network", json!({ "activeNodeCount": "100" })),
        ] {
            server
                .mock_async(|when, then| {
                    when.method(GET).path(path);
                    then.status(200)
                        .header("content-type", "application/json")
                        .delay(delay)
                        .json_body(body);
                })
                .await;
        }

        let metrics = client_for(&server).metrics();
        let started = std::time::Instant::now();
        metrics.refresh().await;
        let elapsed = started.elapsed();

        assert!(elapsed < Duration::from_millis(750), "refresh took {elapsed:?}");
        let snap = metrics.snapshot().await;
        assert!(snap.metrics.stats.is_some());
        assert!(snap.metrics.pools.is_some());
        assert!(snap.metrics.network.is_some());
    }

    #[tokio::test]
    async fn test_selection_after_start_is_not_overridden() {
        let server = MockServer::start_async().await;
        let metrics = client_for(&server).metrics();

        let handle = metrics.start(Duration::from_secs(3600));
        let view = metrics.select_period(Period::Week).await;
        tokio::time::sleep(Duration::from_millis(400)).await;

        assert_eq!(view.period, Period::Week);
        let snap = metrics.snapshot().await;
        assert_eq!(snap.selected_period, Period::Week);
        assert_eq!(snap.period.map(|p| p.period), Some(Period::Week));
        handle.shutdown();
    }

    #[tokio::test]
    async fn test_period_and_view_switch_together() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v2/history/swaps")
                    .query_param("interval", "1d");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(swaps_body(&["100000000"]));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v2/history/swaps")
                    .query_param("interval", "30d");
                then.status(200)
                    .header("content-type", "application/json")
                    .delay(Duration::from_millis(300))
                    .json_body(swaps_body(&["500000000"]));
            })
            .await;

        let metrics = client_for(&server).metrics();
        let day = metrics.select_period(Period::Day).await;
        assert_eq!(day.provenance, Provenance::Live);

        let switching = metrics.clone();
        let month = tokio::spawn(async move { switching.select_period(Period::Month).await });
        tokio::time::sleep(Duration::from_millis(100)).await;

        let mid = metrics.snapshot().await;
        assert_eq!(mid.selected_period, Period::Day);
        assert_eq!(mid.period, Some(day));
        assert_eq!(mid.pending_period, Some(Period::Month));

        let month = month.await.unwrap();
        let done = metrics.snapshot().await;
        assert_eq!(done.selected_period, Period::Month);
        assert_eq!(done.period, Some(month));
        assert_eq!(done.pending_period, None);
    }
}

// =============================================================================
// Transaction feed
// =============================================================================

mod feed {
    use super::*;

    #[tokio::test]
    async fn test_default_filter_fetches_swaps() {
        let server = MockServer::start_async().await;
        let actions = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v2/actions")
                    .query_param("limit", "8")
                    .query_param("offset", "0")
                    .query_param("type", "swap");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(json!({
                        "actions": [action("E3A1B2C3D4E5F60718293A4B5C6D7E8F", "bc1qsenderaddress000000000")],
                        "count": "1"
                    }));
            })
            .await;

        let feed = client_for(&server).transaction_feed();
        assert!(feed.reload().await);
        actions.assert_async().await;

        let rows = feed.rows().await;
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.tx_type, "SWAP");
        assert_eq!(row.from_asset, "BTC");
        assert_eq!(row.to_asset, "RUNE");
        assert_eq!(row.from_amount, "1.5000");
        assert_eq!(row.to_amount, "2.50K");
        assert_eq!(row.block_height, "13,500,000");
        assert_eq!(row.short_hash(), "E3A1B2C3...6D7E8F");
    }

    #[tokio::test]
    async fn test_filter_change_resets_page() {
        let server = MockServer::start_async().await;
        let page_three = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v2/actions")
                    .query_param("offset", "16");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(json!({ "actions": [] }));
            })
            .await;
        let lp = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v2/actions")
                    .query_param("offset", "0")
                    .query_param("type", "addLiquidity,withdraw");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(json!({ "actions": [action("ABC", "thor1lp")] }));
            })
            .await;

        let feed = client_for(&server).transaction_feed();
        assert!(feed.go_to_page(3).await);
        assert_eq!(feed.snapshot().await.page, 3);

        assert!(feed.set_filter(FilterLabel::LpSavers).await);
        page_three.assert_async().await;
        lp.assert_async().await;

        let snap = feed.snapshot().await;
        assert_eq!(snap.page, 1);
        assert_eq!(snap.filter, FilterLabel::LpSavers);
        assert_eq!(snap.rows.len(), 1);
        assert_eq!(snap.rows[0].hash, "ABC");
    }

    #[tokio::test]
    async fn test_all_filter_omits_type() {
        let server = MockServer::start_async().await;
        let all = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v2/actions")
                    .query_param("limit", "8")
                    .query_param("offset", "0");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(json!({ "actions": [] }));
            })
            .await;

        let feed = client_for(&server).transaction_feed();
        assert!(feed.set_filter_label("not a tab").await);
        all.assert_async().await;
        assert_eq!(feed.snapshot().await.filter, FilterLabel::All);
    }

    #[tokio::test]
    async fn test_error_keeps_prior_rows() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v2/actions")
                    .query_param("offset", "0");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(json!({ "actions": [action("FIRST", "thor1a")] }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v2/actions")
                    .query_param("offset", "8");
                then.status(502);
            })
            .await;

        let feed = client_for(&server).transaction_feed();
        assert!(feed.reload().await);
        assert!(!feed.go_to_page(2).await);

        let snap = feed.snapshot().await;
        assert!(!snap.loading);
        assert_eq!(snap.rows.len(), 1);
        assert_eq!(snap.rows[0].hash, "FIRST");
    }

    #[tokio::test]
    async fn test_missing_fields_render_na() {
        let server = MockServer::start_async().await;
        mock_json(
            &server,
            "/v2/actions",
            json!({ "actions": [{ "date": 0, "height": "1", "type": "refund", "in": [], "out": [] }] }),
        )
        .await;

        let feed = client_for(&server).transaction_feed();
        feed.reload().await;
        let rows = feed.rows().await;
        assert_eq!(rows[0].hash, "N/A");
        assert_eq!(rows[0].from, "N/A");
        assert_eq!(rows[0].to, "N/A");
        assert_eq!(rows[0].tx_type, "REFUND");
    }
}
