//! Revision collection end to end: pagination, invalid pages, cancellation,
//! and output files.

use std::sync::Arc;

use httptest::{all_of, matchers::*, responders::*, Expectation, Server};
use serde_json::json;
use tokio_util::sync::CancellationToken;

use wiki_collect::revisions::RevisionCollector;
use wiki_collect::{
    run_revisions, CollectError, RecordingStatus, RevisionFormat, RevisionsConfig, StatusSink,
};

#[path = "helpers.rs"]
mod helpers;

use helpers::{mock_client_config, mock_endpoints, query_pages, recording_gateway, revision_batch};

fn expect_revision_page(server: &Server, cont_in: Option<&'static str>, body: serde_json::Value) {
    let expectation = match cont_in {
        Some(cont) => Expectation::matching(all_of![
            request::method_path("GET", "/en/api.php"),
            request::query(url_decoded(contains(("prop", "revisions")))),
            request::query(url_decoded(contains(("rvcontinue", cont)))),
        ]),
        None => Expectation::matching(all_of![
            request::method_path("GET", "/en/api.php"),
            request::query(url_decoded(contains(("prop", "revisions")))),
            request::query(url_decoded(not(contains(key("rvcontinue"))))),
        ]),
    };
    server.expect(expectation.respond_with(json_encoded(body)));
}

#[tokio::test]
async fn test_limit_stops_pagination() {
    let server = Server::run();
    expect_revision_page(&server, None, revision_batch("Example", 100, 5, Some("b2")));
    expect_revision_page(&server, Some("b2"), revision_batch("Example", 95, 5, Some("b3")));

    let (gateway, _status) = recording_gateway();
    let endpoints = mock_endpoints(&server);
    let cancel = CancellationToken::new();
    let mut collector = RevisionCollector::new(&gateway, &endpoints, &cancel);
    let revisions = collector.collect(None, "en", "Example", 10).await.unwrap();

    assert_eq!(revisions.len(), 10);
    assert_eq!(revisions[0].revision_id, 100);
    assert_eq!(revisions[9].revision_id, 91);
}

#[tokio::test]
async fn test_pagination_ends_without_continuation() {
    let server = Server::run();
    expect_revision_page(&server, None, revision_batch("Example", 100, 5, Some("b2")));
    expect_revision_page(&server, Some("b2"), revision_batch("Example", 95, 5, Some("b3")));
    expect_revision_page(&server, Some("b3"), revision_batch("Example", 90, 5, None));

    let (gateway, _status) = recording_gateway();
    let endpoints = mock_endpoints(&server);
    let cancel = CancellationToken::new();
    let mut collector = RevisionCollector::new(&gateway, &endpoints, &cancel);
    let revisions = collector.collect(None, "en", "Example", 40).await.unwrap();

    assert_eq!(revisions.len(), 15);
    assert!(revisions.iter().all(|r| r.title == "Example" && r.language == "en"));
}

#[tokio::test]
async fn test_run_skips_invalid_page_only() {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/en/api.php"),
            request::query(url_decoded(contains(("redirects", "1")))),
            request::query(url_decoded(contains(("titles", "Good_article|No_such_page")))),
        ])
        .respond_with(json_encoded(query_pages(&["No such page", "Good article"]))),
    );
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/en/api.php"),
            request::query(url_decoded(contains(("prop", "revisions")))),
            request::query(url_decoded(contains(("titles", "No such page")))),
        ])
        .respond_with(json_encoded(json!({
            "query": {"pages": {"-1": {"ns": 0, "title": "No such page", "missing": ""}}}
        }))),
    );
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/en/api.php"),
            request::query(url_decoded(contains(("prop", "revisions")))),
            request::query(url_decoded(contains(("titles", "Good article")))),
        ])
        .respond_with(json_encoded(revision_batch("Good article", 500, 4, None))),
    );

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("revisions.ndjson");
    let config = RevisionsConfig {
        client: mock_client_config(&server),
        urls: "https://en.wikipedia.org/wiki/Good_article\nhttps://en.wikipedia.org/wiki/No_such_page\n"
            .to_string(),
        limit: 50,
        output: output.clone(),
        ..Default::default()
    };
    let status = Arc::new(RecordingStatus::new());
    let report = run_revisions(config, status.clone(), CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(report.articles, 1);
    assert_eq!(report.skipped_articles, 1);
    assert_eq!(report.revisions, 4);
    assert!(status.contains("Wikipedia said: 'The page does not exist'"));
    let last = status.messages().pop().unwrap();
    assert_eq!(last.message, "Retrieved 4 revisions for 1 page(s)");
    assert!(last.is_final);

    let contents = std::fs::read_to_string(&output).unwrap();
    let records: Vec<serde_json::Value> = contents
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(records.len(), 4);
    assert_eq!(records[0]["id"], "en-500");
    assert_eq!(records[0]["section"], "History");
    assert_eq!(
        records[0]["url"],
        "https://en.wikipedia.org/w/index.php?title=Good_article&oldid=500"
    );
}

#[tokio::test]
async fn test_run_writes_csv() {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/de/api.php"),
            request::query(url_decoded(contains(("redirects", "1")))),
        ])
        .respond_with(json_encoded(query_pages(&["Beispiel"]))),
    );
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/de/api.php"),
            request::query(url_decoded(contains(("prop", "revisions")))),
            request::query(url_decoded(contains(("rvlimit", "2")))),
        ])
        .respond_with(json_encoded(revision_batch("Beispiel", 70, 2, Some("more")))),
    );

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("revisions.csv");
    let config = RevisionsConfig {
        client: mock_client_config(&server),
        urls: "https://de.wikipedia.org/wiki/Beispiel".to_string(),
        limit: 2,
        format: RevisionFormat::Csv,
        output: output.clone(),
        ..Default::default()
    };
    let status: Arc<dyn StatusSink> = Arc::new(RecordingStatus::new());
    let report = run_revisions(config, status, CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(report.revisions, 2);

    let contents = std::fs::read_to_string(&output).unwrap();
    let mut lines = contents.lines();
    assert!(lines.next().unwrap().starts_with("id,thread_id,page,language,url"));
    assert!(lines.next().unwrap().starts_with("de-70,69,Beispiel,de,"));
    assert_eq!(lines.count(), 1);
}

#[tokio::test]
async fn test_run_cancelled_aborts_without_output() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/en/api.php"))
            .respond_with(json_encoded(query_pages(&["Example"]))),
    );

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("revisions.ndjson");
    let config = RevisionsConfig {
        client: mock_client_config(&server),
        urls: "https://en.wikipedia.org/wiki/Example".to_string(),
        output: output.clone(),
        ..Default::default()
    };
    let cancel = CancellationToken::new();
    cancel.cancel();

    let status: Arc<dyn StatusSink> = Arc::new(RecordingStatus::new());
    let err = run_revisions(config, status, cancel).await.unwrap_err();

    assert!(matches!(
        err.downcast_ref::<CollectError>(),
        Some(CollectError::Interrupted(_))
    ));
    assert!(!output.exists());
}
