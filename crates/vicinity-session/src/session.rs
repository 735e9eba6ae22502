//! The live recompute loop combining location and feed into a ranked view.
//!
//! [`NearbySession`] watches a location channel and a feed channel and
//! rebuilds a [`NearbyView`] from scratch whenever either one changes.
//! There is no incremental path and no retained intermediate state, so a
//! frame can never mix data from two input versions. The loop ends when
//! both inputs close; dropping the session aborts it early.

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::Instrument;
use uuid::Uuid;

use vicinity_core::{rank_by_distance, LocationReading, RankedProvider};
use vicinity_feed::FeedState;
use vicinity_location::LocationState;

/// One fully assembled frame of the nearby-providers experience.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NearbyView {
    /// Ranked providers, or the feed-ordered fallback when no fix exists.
    pub providers: Vec<RankedProvider>,
    /// Current fix, when one exists.
    pub reading: Option<LocationReading>,
    /// User-facing banner text for a location failure.
    pub location_notice: Option<String>,
    /// User-facing banner text for a feed outage. The provider list keeps
    /// showing last-known data alongside it.
    pub feed_notice: Option<String>,
}

/// Handle to a running recompute loop.
///
/// Dropping the session aborts the loop.
pub struct NearbySession {
    view: watch::Receiver<NearbyView>,
    handle: JoinHandle<()>,
}

impl NearbySession {
    /// Spawns the recompute loop over a location channel and a feed channel.
    ///
    /// The first view is assembled from the channels' current values, so
    /// [`current`](Self::current) is meaningful immediately, in whatever
    /// order the inputs come up. Each session carries a correlation id in
    /// its tracing span.
    #[must_use]
    pub fn spawn(
        location_rx: watch::Receiver<LocationState>,
        feed_rx: watch::Receiver<FeedState>,
    ) -> Self {
        let (tx, rx) = watch::channel(NearbyView::default());
        let session_id = Uuid::new_v4();
        let span = tracing::info_span!("nearby_session", %session_id);
        let handle = tokio::spawn(recompute_loop(location_rx, feed_rx, tx).instrument(span));
        Self { view: rx, handle }
    }

    /// Observe recomputed views.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<NearbyView> {
        self.view.clone()
    }

    /// The most recently published view.
    #[must_use]
    pub fn current(&self) -> NearbyView {
        self.view.borrow().clone()
    }
}

impl Drop for NearbySession {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn recompute_loop(
    mut location_rx: watch::Receiver<LocationState>,
    mut feed_rx: watch::Receiver<FeedState>,
    tx: watch::Sender<NearbyView>,
) {
    let mut location_open = true;
    let mut feed_open = true;

    loop {
        let view = {
            let location = location_rx.borrow_and_update().clone();
            let feed = feed_rx.borrow_and_update().clone();
            assemble_view(&location, &feed)
        };
        let provider_count = view.providers.len();
        let published = tx.send_if_modified(|current| {
            if *current == view {
                return false;
            }
            *current = view;
            true
        });
        if published {
            tracing::debug!(providers = provider_count, "nearby view recomputed");
        }

        if !location_open && !feed_open {
            tracing::debug!("both inputs closed, ending session loop");
            break;
        }

        tokio::select! {
            changed = location_rx.changed(), if location_open => {
                if changed.is_err() {
                    location_open = false;
                }
            }
            changed = feed_rx.changed(), if feed_open => {
                if changed.is_err() {
                    feed_open = false;
                }
            }
        }
    }
}

/// Builds a view frame from the current input states.
///
/// Total over every state combination: a missing fix yields the unranked
/// fallback, a missing snapshot yields an empty list, and failure notices
/// ride alongside whatever data exists.
fn assemble_view(location: &LocationState, feed: &FeedState) -> NearbyView {
    let reading = location.reading().cloned();
    let providers = rank_by_distance(feed.providers(), reading.as_ref());
    NearbyView {
        providers,
        reading,
        location_notice: location.notice().map(str::to_owned),
        feed_notice: feed.error.clone(),
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
