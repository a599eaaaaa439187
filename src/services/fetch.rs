//! Background catalog fetcher
//!
//! Spawns one worker thread per fetch and reports the outcome over a
//! channel polled from the main loop on each tick.

use crate::model::record::{normalize, CaseStudy, Catalog};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

/// Outcome of one background fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchMessage {
    /// Catalog retrieved and normalized
    Loaded(Vec<CaseStudy>),
    /// Transport or decode failure
    Failed(String),
}

/// Catalog fetch service
///
/// Fetches are neither deduplicated nor canceled: every trigger spawns a
/// worker, and completions are returned in spawn order as they resolve.
/// When several fetches race, whichever completion the caller applies last
/// determines the collection.
pub struct Fetcher {
    pending: Vec<Receiver<FetchMessage>>,
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    /// Number of fetches still in flight
    pub fn in_flight(&self) -> usize {
        self.pending.len()
    }

    /// Spawn one background fetch of the given endpoint
    pub fn spawn(&mut self, endpoint: &str) {
        let (tx, rx) = mpsc::channel();
        let url = endpoint.to_string();

        thread::spawn(move || {
            Self::fetch_catalog(&url, tx);
        });

        self.pending.push(rx);
    }

    /// Drain completed fetches, oldest spawn first
    pub fn poll(&mut self) -> Vec<FetchMessage> {
        let mut outcomes = Vec::new();

        self.pending.retain(|receiver| match receiver.try_recv() {
            Ok(message) => {
                outcomes.push(message);
                false
            }
            Err(TryRecvError::Empty) => true,
            Err(TryRecvError::Disconnected) => {
                outcomes.push(FetchMessage::Failed(
                    "fetch worker exited without a result".to_string(),
                ));
                false
            }
        });

        outcomes
    }

    /// Fetch and decode the catalog, sending exactly one message
    fn fetch_catalog(endpoint: &str, tx: Sender<FetchMessage>) {
        let result = reqwest::blocking::get(endpoint)
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.json::<Catalog>());

        let message = match result {
            Ok(catalog) => FetchMessage::Loaded(normalize(&catalog)),
            Err(e) => FetchMessage::Failed(e.to_string()),
        };

        // The receiver may already be gone on shutdown.
        let _ = tx.send(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_poll_returns_completions_in_spawn_order() {
        let (tx_first, rx_first) = mpsc::channel();
        let (tx_second, rx_second) = mpsc::channel();
        let mut fetcher = Fetcher {
            pending: vec![rx_first, rx_second],
        };

        // Second fetch resolves before the first; poll still reports
        // outcomes in spawn order within one drain.
        tx_second
            .send(FetchMessage::Failed("boom".to_string()))
            .unwrap();
        tx_first.send(FetchMessage::Loaded(Vec::new())).unwrap();

        let outcomes = fetcher.poll();
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0], FetchMessage::Loaded(Vec::new()));
        assert_eq!(outcomes[1], FetchMessage::Failed("boom".to_string()));
        assert_eq!(fetcher.in_flight(), 0);
    }

    #[test]
    fn test_poll_keeps_unresolved_fetches_pending() {
        let (tx, rx) = mpsc::channel();
        let mut fetcher = Fetcher { pending: vec![rx] };

        assert!(fetcher.poll().is_empty());
        assert_eq!(fetcher.in_flight(), 1);

        tx.send(FetchMessage::Loaded(Vec::new())).unwrap();
        assert_eq!(fetcher.poll().len(), 1);
        assert_eq!(fetcher.in_flight(), 0);
    }

    #[test]
    fn test_vanished_worker_reports_failure() {
        let (tx, rx) = mpsc::channel::<FetchMessage>();
        let mut fetcher = Fetcher { pending: vec![rx] };
        drop(tx);

        let outcomes = fetcher.poll();
        assert_eq!(outcomes.len(), 1);
        assert!(matches!(outcomes[0], FetchMessage::Failed(_)));
    }

    #[test]
    fn test_unreachable_endpoint_resolves_to_failure() {
        let mut fetcher = Fetcher::new();
        fetcher.spawn("http://127.0.0.1:9/api/data");

        let mut outcomes = Vec::new();
        for _ in 0..100 {
            outcomes = fetcher.poll();
            if !outcomes.is_empty() {
                break;
            }
            thread::sleep(Duration::from_millis(50));
        }

        assert_eq!(outcomes.len(), 1);
        assert!(matches!(outcomes[0], FetchMessage::Failed(_)));
    }
}
