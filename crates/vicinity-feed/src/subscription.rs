//! Poll-loop subscription publishing feed state to watchers.
//!
//! [`FeedSubscription`] owns a background task that polls a
//! [`ProviderFeed`] on a fixed interval and publishes [`FeedState`] through
//! a `tokio::sync::watch` channel. The state retains the last successful
//! snapshot across poll failures so consumers keep working with last-known
//! data, and an unchanged provider set is not re-published.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use vicinity_core::ProviderRecord;

use crate::feed::{CategoryFilter, ProviderFeed};

/// One successful poll result.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedSnapshot {
    /// Records in feed order.
    pub providers: Vec<ProviderRecord>,
    /// When the poll completed.
    pub received_at: DateTime<Utc>,
}

/// Observable state of a feed subscription.
///
/// Starts empty. `snapshot` holds the last successful result, which is
/// retained while `error` is set; `error` clears on the next success.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedState {
    pub snapshot: Option<FeedSnapshot>,
    pub error: Option<String>,
}

impl FeedState {
    /// Providers from the last successful poll, if any.
    #[must_use]
    pub fn providers(&self) -> &[ProviderRecord] {
        self.snapshot
            .as_ref()
            .map_or(&[], |snapshot| snapshot.providers.as_slice())
    }
}

/// Handle to a running poll loop.
///
/// Dropping the subscription aborts the loop, so a mounted consumer that
/// goes away cannot leak polling work.
pub struct FeedSubscription {
    state: watch::Receiver<FeedState>,
    handle: JoinHandle<()>,
}

impl FeedSubscription {
    /// Starts polling `feed` every `poll_interval`, with the first poll
    /// issued immediately.
    #[must_use]
    pub fn spawn(
        feed: Arc<dyn ProviderFeed>,
        filter: CategoryFilter,
        poll_interval: Duration,
    ) -> Self {
        let (tx, rx) = watch::channel(FeedState::default());
        tracing::debug!(
            ?filter,
            poll_interval_ms = u64::try_from(poll_interval.as_millis()).unwrap_or(u64::MAX),
            "starting feed poll loop"
        );
        let handle = tokio::spawn(poll_loop(feed, filter, poll_interval, tx));
        Self { state: rx, handle }
    }

    /// A receiver observing this subscription's state.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<FeedState> {
        self.state.clone()
    }

    /// The most recently published state.
    #[must_use]
    pub fn current(&self) -> FeedState {
        self.state.borrow().clone()
    }
}

impl Drop for FeedSubscription {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn poll_loop(
    feed: Arc<dyn ProviderFeed>,
    filter: CategoryFilter,
    poll_interval: Duration,
    tx: watch::Sender<FeedState>,
) {
    let mut ticker = tokio::time::interval(poll_interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        match feed.fetch(&filter).await {
            Ok(providers) => {
                let modified = tx.send_if_modified(|state| {
                    let unchanged = state.error.is_none()
                        && state
                            .snapshot
                            .as_ref()
                            .is_some_and(|snapshot| snapshot.providers == providers);
                    if unchanged {
                        return false;
                    }
                    state.error = None;
                    state.snapshot = Some(FeedSnapshot {
                        providers: providers.clone(),
                        received_at: Utc::now(),
                    });
                    true
                });
                if modified {
                    tracing::debug!(count = providers.len(), "feed snapshot updated");
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "feed poll failed, keeping last snapshot");
                tx.send_if_modified(|state| {
                    let message = err.to_string();
                    if state.error.as_deref() == Some(message.as_str()) {
                        return false;
                    }
                    state.error = Some(message);
                    true
                });
            }
        }
    }
}

#[cfg(test)]
#[path = "subscription_test.rs"]
mod tests;
