//! Live nearby session: print every recomputed view for a bounded run.

use std::time::Duration;

use tokio::time::MissedTickBehavior;
use vicinity_core::{AppConfig, Coordinate};
use vicinity_feed::FeedSubscription;
use vicinity_location::LocationSource;
use vicinity_map::{build_scene, Viewport};
use vicinity_session::{NearbySession, SelectionState};

use crate::position::{self, PositionArgs};
use crate::providers::{self, FeedArgs};
use crate::render;

#[derive(Debug, clap::Args)]
pub(crate) struct WatchArgs {
    #[command(flatten)]
    pub(crate) position: PositionArgs,
    #[command(flatten)]
    pub(crate) feed: FeedArgs,
    /// How long to keep the session running
    #[arg(long, default_value_t = 30)]
    pub(crate) duration_secs: u64,
    /// Request a fresh fix this often; 0 acquires only once
    #[arg(long, default_value_t = 10)]
    pub(crate) refresh_secs: u64,
    /// Map zoom used for the marker-visibility decision
    #[arg(long, default_value_t = 14.0)]
    pub(crate) zoom: f64,
    /// Select this provider id once it appears in the view
    #[arg(long, value_name = "ID")]
    pub(crate) select: Option<String>,
}

/// Run the session for `--duration-secs`, printing each view, the map pane
/// decision at `--zoom`, and any selection transitions.
///
/// # Errors
///
/// Returns an error when the backend or provider source cannot be built.
pub(crate) async fn run(config: &AppConfig, args: &WatchArgs) -> anyhow::Result<()> {
    let source = LocationSource::spawn(
        position::build_backend(&args.position)?,
        position::acquire_options(config),
    );
    let feed = providers::build_feed(config, &args.feed)?;
    let subscription = FeedSubscription::spawn(
        feed,
        providers::filter_from(args.feed.category.as_deref()),
        Duration::from_secs(config.feed_poll_interval_secs),
    );
    let session = NearbySession::spawn(source.subscribe(), subscription.subscribe());
    let selection = SelectionState::new();

    let mut views = session.subscribe();
    let mut selections = selection.subscribe();

    let base = Viewport::new(args.position.start_center(), args.zoom);
    println!(
        "watching for {}s (zoom {:.1}, refresh every {}s)",
        args.duration_secs, args.zoom, args.refresh_secs
    );

    let deadline = tokio::time::sleep(Duration::from_secs(args.duration_secs));
    tokio::pin!(deadline);

    // Period must be non-zero even when the branch below is disabled.
    let mut refresh_timer =
        tokio::time::interval(Duration::from_secs(args.refresh_secs.max(1)));
    refresh_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
    refresh_timer.tick().await;

    let mut frame = 0u32;
    let mut last_fix: Option<Coordinate> = None;
    let mut select_pending = args.select.clone();

    loop {
        tokio::select! {
            () = &mut deadline => break,
            _ = refresh_timer.tick(), if args.refresh_secs > 0 => {
                tracing::debug!("requesting a fresh fix");
                source.refresh();
            }
            changed = views.changed() => {
                if changed.is_err() {
                    break;
                }
                frame += 1;
                let view = views.borrow_and_update().clone();

                if let Some(reading) = &view.reading {
                    if last_fix != Some(reading.coordinate) {
                        let mut focus = base;
                        focus.recenter_on(reading.coordinate);
                        println!(
                            "map pane refocuses on ({:.4}, {:.4}) at zoom {:.1}",
                            focus.center.latitude, focus.center.longitude, focus.zoom
                        );
                        last_fix = Some(reading.coordinate);
                    }
                }

                println!();
                render::print_view(frame, &view);
                let selected_id = selection.current().map(|p| p.id);
                let scene = build_scene(
                    &view.providers,
                    view.reading.as_ref(),
                    selected_id.as_deref(),
                    &base,
                );
                render::print_scene(&scene, &base);

                if let Some(id) = select_pending.as_deref() {
                    if let Some(target) =
                        view.providers.iter().find(|p| p.provider.id == id)
                    {
                        selection.select(target.provider.clone());
                        select_pending = None;
                    }
                }
            }
            changed = selections.changed() => {
                if changed.is_err() {
                    break;
                }
                let selected = selections.borrow_and_update().clone();
                match selected {
                    Some(provider) => println!(
                        "selected {} ({}); list dismissed for the detail pane",
                        provider.name, provider.id
                    ),
                    None => println!("selection cleared; list restored"),
                }
            }
        }
    }

    if selection.current().is_some() {
        selection.clear();
        println!("selection cleared; list restored");
    }
    println!();
    println!("watched {frame} frames over {}s", args.duration_secs);
    Ok(())
}
