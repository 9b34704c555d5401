// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use pagewatch::engines::traits::{EngineError, FetchResponse, PageFetcher};
use std::sync::atomic::{AtomicUsize, Ordering};

/// 返回固定结果的抓取引擎
pub enum MockFetcher {
    Page { body: Vec<u8>, calls: AtomicUsize },
    Status { code: u16, calls: AtomicUsize },
}

impl MockFetcher {
    pub fn page(html: &str) -> Self {
        Self::raw(html.as_bytes())
    }

    pub fn raw(body: &[u8]) -> Self {
        MockFetcher::Page {
            body: body.to_vec(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn status(code: u16) -> Self {
        MockFetcher::Status {
            code,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        match self {
            MockFetcher::Page { calls, .. } | MockFetcher::Status { calls, .. } => {
                calls.load(Ordering::SeqCst)
            }
        }
    }
}

#[async_trait]
impl PageFetcher for MockFetcher {
    async fn fetch(&self, _url: &str) -> Result<FetchResponse, EngineError> {
        match self {
            MockFetcher::Page { body, calls } => {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(FetchResponse {
                    status_code: 200,
                    body: body.clone(),
                    content_type: Some("text/html; charset=utf-8".to_string()),
                    response_time_ms: 1,
                })
            }
            MockFetcher::Status { code, calls } => {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(EngineError::UnexpectedStatus(*code))
            }
        }
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
