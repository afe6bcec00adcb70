#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use dialogue_api::config::ServerConfig;
use dialogue_api::router::build_app_router;
use dialogue_api::state::AppState;
use dialogue_db::{CorpusStore, MemoryTableStore, Table};

// ---------------------------------------------------------------------------
// Fixture corpus
// ---------------------------------------------------------------------------

pub const MOVIES: &str = "\
movie_id,title,year,imdb_rating,imdb_votes,raw_script_url
1,casablanca,1942,8.5,500000,
2,alien,1979,8.4,abc,
";

pub const CHARACTERS: &str = "\
character_id,name,movie_id,gender,age
10,RICK,1,M,
11,ILSA,1,F,
12,SAM,1,M,
13,RIPLEY,2,F,
14,DALLAS,2,M,
15,SAM,2,,
";

pub const CONVERSATIONS: &str = "\
conversation_id,character1_id,character2_id,movie_id
100,10,11,1
101,10,12,1
102,13,14,2
";

pub const LINES: &str = "\
line_id,character_id,movie_id,conversation_id,line_sort,line_text
1000,10,1,100,0,Of all the gin joints
1001,11,1,100,1,Play it once Sam
1002,10,1,100,2,Here's looking at you
1003,12,1,101,1,You want me to play it?
1004,10,1,101,0,\"Sam, play it\"
1005,13,2,102,0,Get away from her
1006,14,2,102,1,Hold on
";

pub fn fixture_tables() -> Arc<MemoryTableStore> {
    Arc::new(
        MemoryTableStore::new()
            .with_table(Table::Movies, MOVIES)
            .with_table(Table::Characters, CHARACTERS)
            .with_table(Table::Conversations, CONVERSATIONS)
            .with_table(Table::Lines, LINES),
    )
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        corpus_dir: "unused".into(),
        max_page_limit: 250,
    }
}

/// Build the full application router over `tables`, with the same
/// middleware stack the binary uses.
pub fn build_test_app_with(tables: Arc<MemoryTableStore>, config: ServerConfig) -> Router {
    let corpus = CorpusStore::load(tables.as_ref()).expect("fixture corpus loads");
    let state = AppState::new(corpus, tables, config.clone());
    build_app_router(state, &config)
}

pub fn build_test_app(tables: Arc<MemoryTableStore>) -> Router {
    build_test_app_with(tables, test_config())
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
