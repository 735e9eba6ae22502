//! Terminal rendering for provider tables and session frames.

use vicinity_core::RankedProvider;
use vicinity_map::{MapScene, Viewport};
use vicinity_session::NearbyView;

/// Placeholder for cells with no value.
pub(crate) const EMPTY_CELL: &str = "\u{2014}";

pub(crate) fn print_providers(providers: &[RankedProvider]) {
    if providers.is_empty() {
        println!("  (no providers)");
        return;
    }
    println!(
        "  {:<4}{:<10}{:<26}{:<18}{:<8}PHONE",
        "#", "DIST", "NAME", "CATEGORY", "RATING"
    );
    for (index, ranked) in providers.iter().enumerate() {
        let distance = ranked.distance_label().unwrap_or(EMPTY_CELL);
        let rating = ranked
            .provider
            .rating
            .map_or_else(|| EMPTY_CELL.to_string(), |r| format!("{r:.1}"));
        let phone = ranked.provider.phone.as_deref().unwrap_or(EMPTY_CELL);
        println!(
            "  {:<4}{:<10}{:<26}{:<18}{:<8}{}",
            index + 1,
            distance,
            name_display(&ranked.provider.name),
            ranked.provider.category,
            rating,
            phone
        );
    }
}

/// One session frame: header line, notices, then the provider table.
pub(crate) fn print_view(frame: u32, view: &NearbyView) {
    let fix = view.reading.as_ref().map_or_else(
        || "none".to_string(),
        |reading| {
            let accuracy = reading
                .accuracy_m
                .map_or_else(String::new, |m| format!(" \u{00b1}{m:.0} m"));
            format!(
                "({:.4}, {:.4}){} at {}",
                reading.coordinate.latitude,
                reading.coordinate.longitude,
                accuracy,
                reading.acquired_at.format("%H:%M:%S"),
            )
        },
    );
    println!("frame {frame}: {} providers, fix: {fix}", view.providers.len());
    if let Some(notice) = &view.location_notice {
        println!("  location: {notice}");
    }
    if let Some(notice) = &view.feed_notice {
        println!("  feed: {notice}");
    }
    print_providers(&view.providers);
}

/// What the map pane would draw for this frame.
pub(crate) fn print_scene(scene: &MapScene, viewport: &Viewport) {
    if viewport.shows_provider_markers() {
        println!(
            "  map: {} provider markers at zoom {:.1}",
            scene.providers.len(),
            viewport.zoom
        );
        for marker in &scene.providers {
            let label = marker.distance_label.as_deref().unwrap_or(EMPTY_CELL);
            let selected = if marker.selected { " [selected]" } else { "" };
            println!(
                "    {:<8}{:<10}{}{}",
                marker.id,
                label,
                name_display(&marker.name),
                selected
            );
        }
    } else {
        println!("  map: provider markers hidden at zoom {:.1}", viewport.zoom);
    }
    match &scene.user {
        Some(user) => {
            let accuracy = user
                .accuracy_m
                .map_or_else(String::new, |m| format!(" \u{00b1}{m:.0} m"));
            println!(
                "  map: you are at ({:.4}, {:.4}){accuracy}",
                user.position.latitude, user.position.longitude
            );
        }
        None => println!("  map: no user marker"),
    }
}

fn name_display(name: &str) -> String {
    if name.chars().count() > 24 {
        let truncated: String = name.chars().take(21).collect();
        format!("{truncated}...")
    } else {
        name.to_string()
    }
}
