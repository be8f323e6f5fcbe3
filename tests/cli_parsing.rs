//! Tests for CLI subcommand parsing.

use clap::Parser;
use std::path::PathBuf;

use wiki_collect::config::{Cli, Command, DEFAULT_REVISION_LIMIT, DEFAULT_USER_AGENT};
use wiki_collect::{LogFormat, LogLevel, RevisionFormat};

#[test]
fn test_revisions_defaults() {
    let cli = Cli::try_parse_from(["wiki_collect", "revisions", "--urls", "urls.txt"]).unwrap();

    assert!(matches!(cli.log_level, LogLevel::Info));
    assert!(matches!(cli.log_format, LogFormat::Plain));
    assert_eq!(cli.user_agent, DEFAULT_USER_AGENT);

    let Command::Revisions(args) = cli.command else {
        panic!("expected revisions command");
    };
    assert_eq!(args.urls, PathBuf::from("urls.txt"));
    assert_eq!(args.limit, DEFAULT_REVISION_LIMIT);
    assert_eq!(args.format, RevisionFormat::Ndjson);
    assert!(!args.geolocate);
    assert!(args.output.is_none());
}

#[test]
fn test_revisions_full() {
    let cli = Cli::try_parse_from([
        "wiki_collect",
        "--log-level",
        "debug",
        "revisions",
        "--urls",
        "-",
        "--limit",
        "500",
        "--geoip",
        "GeoLite2-City.mmdb",
        "--geolocate",
        "--format",
        "csv",
        "--timeout",
        "10",
        "--token",
        "abc",
    ])
    .unwrap();

    assert!(matches!(cli.log_level, LogLevel::Debug));
    assert_eq!(cli.timeout, 10);
    let client = cli.client_config();
    assert_eq!(client.token(), Some("abc"));
    assert_eq!(client.timeout_seconds, 10);

    let Command::Revisions(args) = cli.command else {
        panic!("expected revisions command");
    };
    let config = args.into_config(client, "https://en.wikipedia.org/wiki/A".into());
    assert_eq!(config.limit, 500);
    assert!(config.geolocate);
    assert_eq!(config.geoip_database, Some(PathBuf::from("GeoLite2-City.mmdb")));
    assert_eq!(config.format, RevisionFormat::Csv);
    assert_eq!(config.output, PathBuf::from("revisions.csv"));
}

#[test]
fn test_geolocate_requires_database() {
    let result = Cli::try_parse_from([
        "wiki_collect",
        "revisions",
        "--urls",
        "urls.txt",
        "--geolocate",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_images_command() {
    let cli = Cli::try_parse_from([
        "wiki_collect",
        "images",
        "--url",
        "https://en.wikipedia.org/wiki/Lighthouse",
        "--log-format",
        "json",
    ])
    .unwrap();

    assert!(matches!(cli.log_format, LogFormat::Json));
    let client = cli.client_config();
    let Command::Images(args) = cli.command else {
        panic!("expected images command");
    };
    let config = args.into_config(client);
    assert_eq!(config.urls, "https://en.wikipedia.org/wiki/Lighthouse");
    assert_eq!(config.output, PathBuf::from("images.html"));
}

#[test]
fn test_subcommand_required() {
    assert!(Cli::try_parse_from(["wiki_collect"]).is_err());
}

#[test]
fn test_invalid_format_rejected() {
    let result = Cli::try_parse_from([
        "wiki_collect",
        "revisions",
        "--urls",
        "urls.txt",
        "--format",
        "xml",
    ]);
    assert!(result.is_err());
}
