// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::mock_fetcher::MockFetcher;
use super::helpers::mock_notifier::RecordingNotifier;
use super::helpers::{worker_with, WEBSITE_URL};
use pagewatch::workers::watch_worker::WatchWorker;
use pagewatch::workers::watch_worker::CycleOutcome;
use pagewatch::workers::Worker;
use std::sync::Arc;
use std::time::Duration;

const INTERVAL: Duration = Duration::from_secs(60);

#[tokio::test]
async fn test_no_match_does_not_notify() {
    let fetcher = Arc::new(MockFetcher::page(
        "<html><body><p>Sold out</p></body></html>",
    ));
    let notifier = Arc::new(RecordingNotifier::new());
    let worker = worker_with(fetcher.clone(), notifier.clone(), "in stock", INTERVAL);

    let outcome = worker.run_cycle().await;

    assert_eq!(outcome, CycleOutcome::NoMatch);
    assert_eq!(fetcher.calls(), 1);
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn test_match_notifies_once_with_links() {
    let fetcher = Arc::new(MockFetcher::page(
        r#"<html><body><a href="/products/7">Blue Widget in stock</a></body></html>"#,
    ));
    let notifier = Arc::new(RecordingNotifier::new());
    let worker = worker_with(fetcher, notifier.clone(), "In Stock", INTERVAL);

    let outcome = worker.run_cycle().await;

    let expected = vec!["https://x.test/products/7".to_string()];
    assert_eq!(
        outcome,
        CycleOutcome::Notified {
            links: expected.clone()
        }
    );
    let sent = notifier.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].links, expected);
    assert_eq!(sent[0].phrase, "In Stock");
    assert_eq!(sent[0].source_url, WEBSITE_URL);
}

#[tokio::test]
async fn test_match_without_links_falls_back_to_website() {
    let fetcher = Arc::new(MockFetcher::page(
        "<html><body><p>Now in stock!</p></body></html>",
    ));
    let notifier = Arc::new(RecordingNotifier::new());
    let worker = worker_with(fetcher, notifier.clone(), "in stock", INTERVAL);

    worker.run_cycle().await;

    assert_eq!(notifier.sent()[0].links, vec![WEBSITE_URL.to_string()]);
}

#[tokio::test]
async fn test_fetch_failure_skips_notification() {
    let fetcher = Arc::new(MockFetcher::status(503));
    let notifier = Arc::new(RecordingNotifier::new());
    let worker = worker_with(fetcher, notifier.clone(), "in stock", INTERVAL);

    assert_eq!(worker.run_cycle().await, CycleOutcome::FetchFailed);
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn test_malformed_bytes_still_notify() {
    let fetcher = Arc::new(MockFetcher::raw(
        b"<html><body><p>Caf\xe9</p><a href=\"/products/3\">Back in stock</a></body></html>",
    ));
    let notifier = Arc::new(RecordingNotifier::new());
    let worker = worker_with(fetcher, notifier.clone(), "in stock", INTERVAL);

    assert_eq!(
        worker.run_cycle().await,
        CycleOutcome::Notified {
            links: vec!["https://x.test/products/3".to_string()]
        }
    );
    assert_eq!(notifier.sent().len(), 1);
}

#[tokio::test]
async fn test_unusable_website_url_skips_notification() {
    let fetcher = Arc::new(MockFetcher::page("<html><body>in stock</body></html>"));
    let notifier = Arc::new(RecordingNotifier::new());
    let worker = WatchWorker::new(
        fetcher,
        notifier.clone(),
        "relative/page".to_string(),
        "in stock".to_string(),
        INTERVAL,
    );

    assert_eq!(worker.run_cycle().await, CycleOutcome::ParseFailed);
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn test_notify_failure_is_contained() {
    let fetcher = Arc::new(MockFetcher::page(
        r#"<html><body><a href="/products/1">in stock</a></body></html>"#,
    ));
    let notifier = Arc::new(RecordingNotifier::failing());
    let worker = worker_with(fetcher, notifier, "in stock", INTERVAL);

    assert_eq!(
        worker.run_cycle().await,
        CycleOutcome::NotifyFailed {
            links: vec!["https://x.test/products/1".to_string()]
        }
    );
}

#[tokio::test(start_paused = true)]
async fn test_run_checks_immediately_then_every_interval() {
    let fetcher = Arc::new(MockFetcher::page(
        "<html><body><p>Sold out</p></body></html>",
    ));
    let notifier = Arc::new(RecordingNotifier::new());
    let worker = worker_with(fetcher.clone(), notifier, "in stock", INTERVAL);

    // Ticks at 0s, 60s and 120s fall inside the window
    let _ = tokio::time::timeout(Duration::from_secs(150), worker.run()).await;

    assert_eq!(fetcher.calls(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_run_keeps_going_after_failures() {
    let fetcher = Arc::new(MockFetcher::status(500));
    let notifier = Arc::new(RecordingNotifier::new());
    let worker = worker_with(fetcher.clone(), notifier.clone(), "in stock", INTERVAL);

    let _ = tokio::time::timeout(Duration::from_secs(150), worker.run()).await;

    assert_eq!(fetcher.calls(), 3);
    assert!(notifier.sent().is_empty());
}
