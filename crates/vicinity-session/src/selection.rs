//! The shared selection cell observed by list, map, and detail surfaces.

use tokio::sync::watch;

use vicinity_core::ProviderRecord;

/// At most one selected provider at a time, or none.
///
/// All surfaces observe the same channel, so the list, the map, and the
/// detail pane can never disagree about what is selected. Last write wins.
/// A transition to `Some` is also the cue for an overlapping list view to
/// dismiss itself so the detail surface is foreground; marker taps on the
/// map go through [`select`](Self::select) like every other write path.
#[derive(Debug)]
pub struct SelectionState {
    cell: watch::Sender<Option<ProviderRecord>>,
}

impl SelectionState {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        let (cell, _) = watch::channel(None);
        Self { cell }
    }

    /// Selects `provider`, silently replacing any current selection.
    pub fn select(&self, provider: ProviderRecord) {
        tracing::debug!(provider_id = %provider.id, "provider selected");
        self.cell.send_replace(Some(provider));
    }

    /// Returns the selection to `None`.
    pub fn clear(&self) {
        self.cell.send_replace(None);
    }

    /// The currently selected provider, if any.
    #[must_use]
    pub fn current(&self) -> Option<ProviderRecord> {
        self.cell.borrow().clone()
    }

    /// Observe selection changes reactively.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<ProviderRecord>> {
        self.cell.subscribe()
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}
