mod common;

use serde_json::json;

#[tokio::test]
async fn test_redirect_success() {
    let (server, repo) = common::create_test_server();
    common::create_test_link(&repo, "https://example.com/target", "Redir01").await;

    let response = server.get("/Redir01").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_after_shorten() {
    let (server, _repo) = common::create_test_server();

    let created = server
        .post("/new")
        .json(&json!({ "url": "https://example.com/round/trip?x=1#frag" }))
        .await
        .json::<serde_json::Value>();
    let short_id = created["short_id"].as_str().unwrap();

    let response = server.get(&format!("/{short_id}")).await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(
        response.header("location"),
        "https://example.com/round/trip?x=1#frag"
    );
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (server, _repo) = common::create_test_server();

    let response = server.get("/Missing").await;

    response.assert_status_not_found();
    assert_eq!(
        response.text(),
        "Uh oh. We couldn't find a link at that URL"
    );
}

#[tokio::test]
async fn test_redirect_malformed_code() {
    let (server, _repo) = common::create_test_server();

    for path in ["/doesnotexist", "/abc", "/abc-123"] {
        let response = server.get(path).await;
        response.assert_status_not_found();
    }
}

#[tokio::test]
async fn test_redirect_non_utf8_code() {
    let (server, _repo) = common::create_test_server();

    let response = server.get("/%FF%FE%FD%FC%FB%FA%F9").await;

    response.assert_status_not_found();
    assert_eq!(
        response.text(),
        "Uh oh. We couldn't find a link at that URL"
    );
}

#[tokio::test]
async fn test_redirect_is_case_sensitive() {
    let (server, repo) = common::create_test_server();
    common::create_test_link(&repo, "https://example.com/", "CaseId1").await;

    server.get("/caseid1").await.assert_status_not_found();
    assert_eq!(server.get("/CaseId1").await.status_code(), 302);
}

#[tokio::test]
async fn test_redirect_trailing_slash() {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use link_shortener::routes::app_router;
    use tower::ServiceExt;

    let (state, repo) = common::create_test_state();
    common::create_test_link(&repo, "https://example.com/slash", "Slash01").await;

    let response = app_router(state, "public")
        .oneshot(Request::builder().uri("/Slash01/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers()[header::LOCATION],
        "https://example.com/slash"
    );
}
