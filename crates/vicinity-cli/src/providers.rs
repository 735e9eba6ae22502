//! Provider-source flags and the feed wiring behind them.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use vicinity_core::{AppConfig, ProviderRecord};
use vicinity_feed::{decode_providers, CategoryFilter, HttpProviderFeed, ProviderFeed, StaticProviderFeed};

#[derive(Debug, clap::Args)]
pub(crate) struct FeedArgs {
    /// Feed base URL; overrides VICINITY_FEED_BASE_URL
    #[arg(long, value_name = "URL")]
    pub(crate) feed_url: Option<String>,
    /// Providers document served when no feed URL is configured
    #[arg(
        long,
        value_name = "PATH",
        default_value = "fixtures/providers.sample.json"
    )]
    pub(crate) fixture: PathBuf,
    /// Restrict results to one category slug, e.g. "plumbing"
    #[arg(long, value_name = "SLUG")]
    pub(crate) category: Option<String>,
}

/// Build the provider feed the flags describe.
///
/// `--feed-url` (or `VICINITY_FEED_BASE_URL`) selects the HTTP adapter;
/// otherwise the fixture file is decoded once and served in-memory.
///
/// # Errors
///
/// Returns an error when the HTTP client cannot be built or the fixture
/// cannot be read or decoded.
pub(crate) fn build_feed(
    config: &AppConfig,
    args: &FeedArgs,
) -> anyhow::Result<Arc<dyn ProviderFeed>> {
    if let Some(base_url) = args.feed_url.as_deref().or(config.feed_base_url.as_deref()) {
        let feed = HttpProviderFeed::new(
            base_url,
            config.feed_request_timeout_secs,
            &config.feed_user_agent,
            config.feed_max_retries,
            config.feed_retry_backoff_base_ms,
        )?;
        tracing::info!(base_url, "using HTTP provider feed");
        return Ok(Arc::new(feed));
    }

    let records = load_fixture(&args.fixture)?;
    tracing::info!(
        fixture = %args.fixture.display(),
        count = records.len(),
        "using fixture provider feed"
    );
    Ok(Arc::new(StaticProviderFeed::new(records)))
}

pub(crate) fn filter_from(category: Option<&str>) -> CategoryFilter {
    category.map_or(CategoryFilter::All, |slug| {
        CategoryFilter::Category(slug.to_string())
    })
}

fn load_fixture(path: &Path) -> anyhow::Result<Vec<ProviderRecord>> {
    let body = std::fs::read_to_string(path).map_err(|e| {
        anyhow::anyhow!("failed to read providers fixture {}: {e}", path.display())
    })?;
    let records = decode_providers(&body, &path.display().to_string())?;
    Ok(records)
}
