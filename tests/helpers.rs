// Shared test helpers for mock-server setup.
//
// Every test points the collectors at an httptest server through `Endpoints`
// overrides: `/{lang}/api.php` stands in for each language's action API and
// `/core` for the core REST API.

use std::sync::Arc;

use httptest::Server;
use serde_json::{json, Value};

use wiki_collect::{ApiGateway, ClientConfig, Endpoints, RecordingStatus};

/// Endpoints served by `server`.
#[allow(dead_code)] // Used by other test files
pub fn mock_endpoints(server: &Server) -> Endpoints {
    Endpoints::new(
        format!("http://{}/{{lang}}/api.php", server.addr()),
        format!("http://{}/core", server.addr()),
    )
}

/// Client settings pointing at `server`, without a token.
#[allow(dead_code)]
pub fn mock_client_config(server: &Server) -> ClientConfig {
    ClientConfig {
        timeout_seconds: 5,
        endpoints: mock_endpoints(server),
        ..Default::default()
    }
}

/// Gateway with a recording status channel.
#[allow(dead_code)]
pub fn recording_gateway() -> (ApiGateway, Arc<RecordingStatus>) {
    let status = Arc::new(RecordingStatus::new());
    let gateway = ApiGateway::new(reqwest::Client::new(), status.clone());
    (gateway, status)
}

/// `action=query` response listing `titles` as resolved pages.
#[allow(dead_code)]
pub fn query_pages(titles: &[&str]) -> Value {
    let mut pages = serde_json::Map::new();
    for (i, title) in titles.iter().enumerate() {
        let id = 1000 + i;
        pages.insert(
            id.to_string(),
            json!({"pageid": id, "ns": 0, "title": title}),
        );
    }
    json!({"batchcomplete": "", "query": {"pages": pages}})
}

/// `prop=revisions` response with revision ids `newest` down to
/// `newest - count + 1`, plus an optional continuation token.
#[allow(dead_code)]
pub fn revision_batch(title: &str, newest: u64, count: u64, cont: Option<&str>) -> Value {
    let revisions: Vec<Value> = (0..count)
        .map(|i| {
            let id = newest - i;
            json!({
                "revid": id,
                "parentid": id - 1,
                "user": format!("Editor{}", id % 3),
                "timestamp": "2024-06-01T12:00:00Z",
                "comment": format!("/* History */ edit {id}")
            })
        })
        .collect();
    let mut body = json!({
        "query": {"pages": {"4242": {"pageid": 4242, "ns": 0, "title": title, "revisions": revisions}}}
    });
    if let Some(cont) = cont {
        body["continue"] = json!({"rvcontinue": cont, "continue": "||"});
    }
    body
}

/// `action=parse` response wrapping `markup`.
#[allow(dead_code)]
pub fn parsed_page(title: &str, markup: &str) -> Value {
    json!({"parse": {"title": title, "pageid": 1, "text": {"*": markup}}})
}
