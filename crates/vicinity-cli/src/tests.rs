use std::path::PathBuf;

use vicinity_core::Coordinate;

use super::*;

#[test]
fn parses_nearby_defaults() {
    let cli = Cli::try_parse_from(["vicinity-cli", "nearby"]).expect("expected valid cli args");

    let Commands::Nearby(args) = cli.command else {
        panic!("unexpected command variant");
    };
    assert_eq!(args.position.lat, None);
    assert_eq!(args.position.lon, None);
    assert_eq!(args.position.simulate_near, Coordinate::new(12.9716, 77.5946));
    assert_eq!(args.position.jitter_m, 150.0);
    assert_eq!(args.feed.feed_url, None);
    assert_eq!(args.feed.fixture, PathBuf::from("fixtures/providers.sample.json"));
    assert_eq!(args.feed.category, None);
}

#[test]
fn parses_nearby_with_a_static_fix() {
    let cli = Cli::try_parse_from(["vicinity-cli", "nearby", "--lat", "12.9352", "--lon", "77.6245"])
        .expect("expected valid cli args");

    let Commands::Nearby(args) = cli.command else {
        panic!("unexpected command variant");
    };
    assert_eq!(args.position.lat, Some(12.9352));
    assert_eq!(args.position.lon, Some(77.6245));
}

#[test]
fn nearby_lat_requires_lon() {
    let result = Cli::try_parse_from(["vicinity-cli", "nearby", "--lat", "12.9352"]);
    assert!(result.is_err());
}

#[test]
fn simulate_near_conflicts_with_a_static_fix() {
    let result = Cli::try_parse_from([
        "vicinity-cli",
        "nearby",
        "--simulate-near",
        "12.9716,77.5946",
        "--lat",
        "12.9352",
        "--lon",
        "77.6245",
    ]);
    assert!(result.is_err());
}

#[test]
fn parses_nearby_with_feed_url_and_category() {
    let cli = Cli::try_parse_from([
        "vicinity-cli",
        "nearby",
        "--feed-url",
        "http://localhost:8080",
        "--category",
        "plumbing",
    ])
    .expect("expected valid cli args");

    let Commands::Nearby(args) = cli.command else {
        panic!("unexpected command variant");
    };
    assert_eq!(args.feed.feed_url.as_deref(), Some("http://localhost:8080"));
    assert_eq!(args.feed.category.as_deref(), Some("plumbing"));
}

#[test]
fn parses_watch_defaults() {
    let cli = Cli::try_parse_from(["vicinity-cli", "watch"]).expect("expected valid cli args");

    let Commands::Watch(args) = cli.command else {
        panic!("unexpected command variant");
    };
    assert_eq!(args.duration_secs, 30);
    assert_eq!(args.refresh_secs, 10);
    assert_eq!(args.zoom, 14.0);
    assert_eq!(args.select, None);
}

#[test]
fn parses_watch_with_selection_and_zoom() {
    let cli = Cli::try_parse_from([
        "vicinity-cli",
        "watch",
        "--duration-secs",
        "5",
        "--zoom",
        "10",
        "--select",
        "p2",
    ])
    .expect("expected valid cli args");

    let Commands::Watch(args) = cli.command else {
        panic!("unexpected command variant");
    };
    assert_eq!(args.duration_secs, 5);
    assert_eq!(args.zoom, 10.0);
    assert_eq!(args.select.as_deref(), Some("p2"));
}

#[test]
fn parses_categories_command() {
    let cli = Cli::try_parse_from(["vicinity-cli", "categories"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Categories));
}

#[test]
fn a_subcommand_is_required() {
    let result = Cli::try_parse_from(["vicinity-cli"]);
    assert!(result.is_err());
}
