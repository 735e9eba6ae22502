//! Read boundary over the marketplace's provider directory.

use async_trait::async_trait;

use vicinity_core::ProviderRecord;

use crate::error::FeedError;

/// Category constraint applied to a feed fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Every provider the feed knows about.
    All,
    /// Only providers whose category equals the slug.
    Category(String),
}

impl CategoryFilter {
    /// Returns `true` when `category` passes the filter.
    #[must_use]
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Category(slug) => slug == category,
        }
    }
}

/// A source of provider records.
///
/// Implementations yield the current set of records matching a category
/// filter, in feed order. The caller treats records as read-only copies of
/// external documents and never writes them back.
#[async_trait]
pub trait ProviderFeed: Send + Sync {
    /// Fetches the providers currently matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns a [`FeedError`] when the underlying source cannot produce a
    /// record set. Callers are expected to keep serving last-known data.
    async fn fetch(&self, filter: &CategoryFilter) -> Result<Vec<ProviderRecord>, FeedError>;
}

/// In-memory feed backed by a fixed record set.
///
/// Used by tests and by the CLI's fixture mode.
pub struct StaticProviderFeed {
    providers: Vec<ProviderRecord>,
}

impl StaticProviderFeed {
    #[must_use]
    pub fn new(providers: Vec<ProviderRecord>) -> Self {
        Self { providers }
    }
}

#[async_trait]
impl ProviderFeed for StaticProviderFeed {
    async fn fetch(&self, filter: &CategoryFilter) -> Result<Vec<ProviderRecord>, FeedError> {
        Ok(self
            .providers
            .iter()
            .filter(|p| filter.matches(&p.category))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, category: &str) -> ProviderRecord {
        ProviderRecord {
            id: id.to_owned(),
            name: format!("Provider {id}"),
            category: category.to_owned(),
            coordinate: None,
            address: None,
            phone: None,
            rating: None,
        }
    }

    #[test]
    fn all_filter_matches_everything() {
        assert!(CategoryFilter::All.matches("plumbing"));
        assert!(CategoryFilter::All.matches(""));
    }

    #[test]
    fn category_filter_matches_exact_slug_only() {
        let filter = CategoryFilter::Category("plumbing".to_owned());
        assert!(filter.matches("plumbing"));
        assert!(!filter.matches("electrical"));
        assert!(!filter.matches("Plumbing"));
    }

    #[tokio::test]
    async fn static_feed_returns_records_in_insertion_order() {
        let feed = StaticProviderFeed::new(vec![
            record("1", "plumbing"),
            record("2", "electrical"),
            record("3", "plumbing"),
        ]);

        let all = feed.fetch(&CategoryFilter::All).await.unwrap();
        let ids: Vec<&str> = all.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[tokio::test]
    async fn static_feed_applies_category_filter() {
        let feed = StaticProviderFeed::new(vec![
            record("1", "plumbing"),
            record("2", "electrical"),
            record("3", "plumbing"),
        ]);

        let filter = CategoryFilter::Category("plumbing".to_owned());
        let plumbers = feed.fetch(&filter).await.unwrap();
        let ids: Vec<&str> = plumbers.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
    }
}
