//! Search worker thread
//!
//! Runs suggestion requests on a background thread so the UI loop never
//! blocks on the network. Each query carries a request id; a newer query
//! cancels the fetch still running for an older one, and every response is
//! tagged with the id it answers.

use std::sync::Arc;
use std::sync::mpsc::Sender;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio_util::sync::CancellationToken;

use crate::error::StreetSearchError;
use crate::source::SuggestionSource;
use crate::suggestion::SuggestionItem;

/// Request messages sent to the search worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchRequest {
    /// Fetch suggestions for the given text
    Query {
        term: String,
        /// Unique ID for this request, used to filter stale responses
        request_id: u64,
    },
    /// Cancel the request with the given ID
    Cancel { request_id: u64 },
}

/// Response messages received from the search worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResponse {
    Suggestions {
        items: Vec<SuggestionItem>,
        request_id: u64,
    },
    Failed {
        error: String,
        request_id: u64,
    },
    Cancelled { request_id: u64 },
}

impl SearchResponse {
    pub fn request_id(&self) -> u64 {
        match self {
            SearchResponse::Suggestions { request_id, .. }
            | SearchResponse::Failed { request_id, .. }
            | SearchResponse::Cancelled { request_id } => *request_id,
        }
    }
}

/// Channel for sending requests to a running worker
pub type RequestSender = UnboundedSender<SearchRequest>;

/// Create the request channel for a worker
pub fn request_channel() -> (RequestSender, UnboundedReceiver<SearchRequest>) {
    unbounded_channel()
}

/// Spawn the search worker thread
///
/// The thread owns a current-thread tokio runtime and exits once every
/// `RequestSender` has been dropped.
pub fn spawn_worker(
    source: SuggestionSource,
    request_rx: UnboundedReceiver<SearchRequest>,
    response_tx: Sender<SearchResponse>,
) -> Result<std::thread::JoinHandle<()>, StreetSearchError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| StreetSearchError::Worker(e.to_string()))?;

    std::thread::Builder::new()
        .name("search-worker".to_string())
        .spawn(move || {
            runtime.block_on(worker_loop(Arc::new(source), request_rx, response_tx));
        })
        .map_err(|e| StreetSearchError::Worker(e.to_string()))
}

/// Main worker loop - processes requests until the channel is closed
async fn worker_loop(
    source: Arc<SuggestionSource>,
    mut request_rx: UnboundedReceiver<SearchRequest>,
    response_tx: Sender<SearchResponse>,
) {
    let mut in_flight: Option<(u64, CancellationToken)> = None;

    while let Some(request) = request_rx.recv().await {
        match request {
            SearchRequest::Query { term, request_id } => {
                if let Some((previous_id, token)) = in_flight.take() {
                    log::debug!("Superseding request {} with {}", previous_id, request_id);
                    token.cancel();
                }

                let token = CancellationToken::new();
                in_flight = Some((request_id, token.clone()));
                tokio::spawn(run_query(
                    Arc::clone(&source),
                    term,
                    request_id,
                    token,
                    response_tx.clone(),
                ));
            }
            SearchRequest::Cancel { request_id } => match in_flight.take() {
                Some((active_id, token)) if active_id == request_id => {
                    token.cancel();
                }
                other => {
                    // Nothing running under that id - just acknowledge
                    in_flight = other;
                    let _ = response_tx.send(SearchResponse::Cancelled { request_id });
                    log::debug!("Cancelled request {} (no active request)", request_id);
                }
            },
        }
    }

    if let Some((_, token)) = in_flight {
        token.cancel();
    }
    log::debug!("Search worker shutting down");
}

/// Fetch suggestions for one query unless it is cancelled first
async fn run_query(
    source: Arc<SuggestionSource>,
    term: String,
    request_id: u64,
    token: CancellationToken,
    response_tx: Sender<SearchResponse>,
) {
    let response = tokio::select! {
        _ = token.cancelled() => {
            log::debug!("Cancelled request {} during fetch", request_id);
            SearchResponse::Cancelled { request_id }
        }
        result = source.fetch(&term) => match result {
            Ok(items) => SearchResponse::Suggestions { items, request_id },
            Err(e) => {
                log::debug!("Request {} failed: {}", request_id, e);
                SearchResponse::Failed { error: e.to_string(), request_id }
            }
        },
    };

    // The UI may already be gone; nothing to do then
    let _ = response_tx.send(response);
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
