//! One-shot nearby listing: acquire a fix, fetch providers, rank, print.

use vicinity_core::{rank_by_distance, AppConfig};
use vicinity_location::LocationSource;

use crate::position::{self, PositionArgs};
use crate::providers::{self, FeedArgs};
use crate::render;

#[derive(Debug, clap::Args)]
pub(crate) struct NearbyArgs {
    #[command(flatten)]
    pub(crate) position: PositionArgs,
    #[command(flatten)]
    pub(crate) feed: FeedArgs,
}

/// Acquire one fix, fetch the provider list once, and print it ranked.
///
/// Location failures are not errors here: the command prints the notice and
/// falls back to the feed-ordered list without distances.
///
/// # Errors
///
/// Returns an error when the provider source cannot be built or the fetch
/// itself fails.
pub(crate) async fn run(config: &AppConfig, args: &NearbyArgs) -> anyhow::Result<()> {
    let source = LocationSource::spawn(
        position::build_backend(&args.position)?,
        position::acquire_options(config),
    );
    let state = position::wait_for_fix(&source).await;

    let feed = providers::build_feed(config, &args.feed)?;
    let filter = providers::filter_from(args.feed.category.as_deref());
    let records = feed.fetch(&filter).await?;

    if let Some(notice) = state.notice() {
        println!("location unavailable: {notice}");
        println!("showing providers without distances");
    } else if let Some(reading) = state.reading() {
        let accuracy = reading
            .accuracy_m
            .map_or_else(String::new, |m| format!(" \u{00b1}{m:.0} m"));
        println!(
            "fix ({:.4}, {:.4}){accuracy}",
            reading.coordinate.latitude, reading.coordinate.longitude
        );
    }
    println!();

    let ranked = rank_by_distance(&records, state.reading());
    render::print_providers(&ranked);
    Ok(())
}
