#![allow(missing_docs)]

use std::{
    collections::VecDeque,
    sync::{
        Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use scraper::Html;
use serde_json::Value;

use crate::{
    Error,
    app::AppHandle,
    transport::{ApiResponse, RequestOptions, Transport},
    ui::Ui,
};

/// A [Transport] that hands out scripted responses and records every
/// request it was asked to send.
pub(crate) struct FakeTransport {
    responses: Mutex<VecDeque<Result<ApiResponse, Error>>>,
    requests: Mutex<Vec<RequestOptions>>,
}

impl FakeTransport {
    pub(crate) fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Script a `success: true` response carrying `data`.
    pub(crate) fn push_success(&self, data: Value) {
        self.responses.lock().unwrap().push_back(Ok(ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        }));
    }

    /// Script a `success: false` response carrying `error`.
    pub(crate) fn push_failure(&self, error: Value) {
        self.responses.lock().unwrap().push_back(Ok(ApiResponse {
            success: false,
            data: None,
            error: Some(error),
        }));
    }

    /// Script a network-level failure.
    pub(crate) fn push_transport_error(&self, url: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(Error::Transport {
                url: url.to_owned(),
                reason: "connection refused".to_owned(),
            }));
    }

    /// The requests sent so far, in order.
    pub(crate) fn sent(&self) -> Vec<RequestOptions> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn send(&self, options: RequestOptions) -> Result<ApiResponse, Error> {
        self.requests.lock().unwrap().push(options.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted response left for {}", options.url))
    }
}

/// A [Ui] with a fixed confirmation answer that records alerts and the
/// confirmation prompts it was shown.
pub(crate) struct FakeUi {
    confirm_answer: AtomicBool,
    alerts: Mutex<Vec<String>>,
    confirmations: Mutex<Vec<String>>,
}

impl FakeUi {
    pub(crate) fn answering(confirm_answer: bool) -> Self {
        Self {
            confirm_answer: AtomicBool::new(confirm_answer),
            alerts: Mutex::new(Vec::new()),
            confirmations: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }

    pub(crate) fn confirmations(&self) -> Vec<String> {
        self.confirmations.lock().unwrap().clone()
    }
}

impl Ui for FakeUi {
    fn confirm(&self, message: &str) -> bool {
        self.confirmations.lock().unwrap().push(message.to_owned());
        self.confirm_answer.load(Ordering::Relaxed)
    }

    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_owned());
    }
}

/// An [AppHandle] that counts refresh requests and records closed modals.
#[derive(Default)]
pub(crate) struct FakeApp {
    updates: AtomicUsize,
    closed_modals: Mutex<Vec<String>>,
}

impl FakeApp {
    pub(crate) fn update_count(&self) -> usize {
        self.updates.load(Ordering::Relaxed)
    }

    pub(crate) fn closed_modals(&self) -> Vec<String> {
        self.closed_modals.lock().unwrap().clone()
    }
}

impl AppHandle for FakeApp {
    fn update(&self) {
        self.updates.fetch_add(1, Ordering::Relaxed);
    }

    fn close_modal(&self, name: &str) {
        self.closed_modals.lock().unwrap().push(name.to_owned());
    }
}

#[track_caller]
pub(crate) fn assert_valid_html(html: &Html) {
    assert!(
        html.errors.is_empty(),
        "Got HTML parsing errors: {:?}",
        html.errors
    );
}
