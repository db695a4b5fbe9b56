mod common;

use axum::http::StatusCode;
use shortlink::domain::repositories::LinkRepository;
use shortlink::error::GENERIC_FAILURE;

// ─── Listing & forms ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_root_redirects_to_listing() {
    let (server, _repo) = common::make_server();

    let response = server.get("/").await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/urls");
}

#[tokio::test]
async fn test_listing_empty() {
    let (server, _repo) = common::make_server();

    let response = server.get("/urls").await;

    response.assert_status_ok();
    assert!(response.text().contains("No short links yet"));
}

#[tokio::test]
async fn test_listing_shows_links_in_insertion_order() {
    let (server, repo) = common::make_server();
    common::create_test_link(&repo, "first1", "http://one.example").await;
    common::create_test_link(&repo, "second", "http://two.example").await;

    let response = server.get("/urls").await;

    response.assert_status_ok();
    let body = response.text();
    let first = body.find("http://one.example").unwrap();
    let second = body.find("http://two.example").unwrap();
    assert!(first < second);
    assert!(body.contains("/urls/first1?_method=DELETE"));
    assert!(body.contains("/urls/show/second"));
}

#[tokio::test]
async fn test_listing_trailing_slash() {
    let (server, _repo) = common::make_server();

    server.get("/urls/").await.assert_status_ok();
}

#[tokio::test]
async fn test_listing_escapes_html() {
    let (server, repo) = common::make_server();
    common::create_test_link(&repo, "xss001", "http://a.example/<script>alert(1)</script>").await;

    let body = server.get("/urls").await.text();

    assert!(!body.contains("<script>"));
    assert!(body.contains("&#60;script&#62;"));
}

#[tokio::test]
async fn test_new_form() {
    let (server, _repo) = common::make_server();

    let response = server.get("/urls/new").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains(r#"action="/urls""#));
    assert!(body.contains(r#"name="longURL""#));
}

#[tokio::test]
async fn test_static_assets_served() {
    let (server, _repo) = common::make_server();

    let response = server.get("/static/style.css").await;

    response.assert_status_ok();
    assert!(response.text().contains("body"));
}

// ─── Create ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_link_renders_listing() {
    let (server, repo) = common::make_server();

    let response = server
        .post("/urls")
        .form(&[("longURL", "example.com")])
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("http://example.com"));

    let links = repo.list().await.unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].long_url, "http://example.com");
    assert_eq!(links[0].code.len(), 6);
}

#[tokio::test]
async fn test_create_link_keeps_scheme() {
    let (server, repo) = common::make_server();

    server
        .post("/urls")
        .form(&[("longURL", "ftp://files.example.com")])
        .await
        .assert_status_ok();

    let links = repo.list().await.unwrap();
    assert_eq!(links[0].long_url, "ftp://files.example.com");
}

#[tokio::test]
async fn test_create_link_missing_field() {
    let (server, repo) = common::make_server();

    server
        .post("/urls")
        .form(&[("other", "value")])
        .await
        .assert_status_ok();

    let links = repo.list().await.unwrap();
    assert_eq!(links[0].long_url, "http://");
}

#[tokio::test]
async fn test_create_link_storage_error() {
    let server = common::make_failing_server();

    let response = server
        .post("/urls")
        .form(&[("longURL", "example.com")])
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.text().contains("database error"));
}

// ─── Details ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_link_info() {
    let (server, repo) = common::make_server();
    common::create_test_link(&repo, "info01", "https://rust-lang.org").await;

    let response = server.get("/urls/info01").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("info01"));
    assert!(body.contains("https://rust-lang.org"));
    assert!(body.contains("/u/info01"));
}

#[tokio::test]
async fn test_link_info_not_found() {
    let (server, _repo) = common::make_server();

    let response = server.get("/urls/nope42").await;

    response.assert_status_not_found();
    assert!(response.text().contains("nope42"));
}

// ─── Edit form ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_edit_form_prefilled() {
    let (server, repo) = common::make_server();
    common::create_test_link(&repo, "edit01", "https://old.example").await;

    let response = server.get("/urls/show/edit01").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains(r#"value="https://old.example""#));
    assert!(body.contains("/urls/edit01?_method=PUT"));
}

#[tokio::test]
async fn test_edit_form_not_found() {
    let (server, _repo) = common::make_server();

    let response = server.get("/urls/show/missing").await;

    response.assert_status_not_found();
    assert_eq!(response.text(), GENERIC_FAILURE);
}

#[tokio::test]
async fn test_edit_form_storage_error_is_generic() {
    let server = common::make_failing_server();

    let response = server.get("/urls/show/anything").await;

    response.assert_status_not_found();
    assert_eq!(response.text(), GENERIC_FAILURE);
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_link() {
    let (server, repo) = common::make_server();
    let created = common::create_test_link(&repo, "upd001", "http://old.example").await;

    let response = server
        .put("/urls/upd001")
        .form(&[("longURL", "new.example")])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/urls");

    let link = repo.find_by_code("upd001").await.unwrap().unwrap();
    assert_eq!(link.long_url, "http://new.example");
    assert_eq!(link.code, created.code);
    assert_eq!(link.id, created.id);
}

#[tokio::test]
async fn test_update_via_method_override() {
    let (server, repo) = common::make_server();
    common::create_test_link(&repo, "upd002", "http://old.example").await;

    let response = server
        .post("/urls/upd002?_method=PUT")
        .form(&[("longURL", "https://foo.com")])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    let link = repo.find_by_code("upd002").await.unwrap().unwrap();
    assert_eq!(link.long_url, "https://foo.com");
}

#[tokio::test]
async fn test_update_missing_code_is_silent() {
    let (server, repo) = common::make_server();

    let response = server
        .put("/urls/abc123")
        .form(&[("longURL", "https://foo.com")])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/urls");
    assert!(repo.is_empty());
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_link() {
    let (server, repo) = common::make_server();
    common::create_test_link(&repo, "del001", "http://example.com").await;

    let response = server.delete("/urls/del001").await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/urls");
    assert!(repo.find_by_code("del001").await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_via_method_override() {
    let (server, repo) = common::make_server();
    common::create_test_link(&repo, "del002", "http://example.com").await;
    common::create_test_link(&repo, "keep01", "http://example.org").await;

    let response = server.post("/urls/del002?_method=DELETE").await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert!(repo.find_by_code("del002").await.unwrap().is_none());
    assert!(repo.find_by_code("keep01").await.unwrap().is_some());
}

#[tokio::test]
async fn test_delete_then_redirect_is_not_found() {
    let (server, repo) = common::make_server();
    common::create_test_link(&repo, "del003", "http://example.com").await;

    server
        .delete("/urls/del003")
        .await
        .assert_status(StatusCode::SEE_OTHER);

    server.get("/u/del003").await.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_link_not_found() {
    let (server, _repo) = common::make_server();

    let response = server.delete("/urls/nonexistent").await;

    response.assert_status_not_found();
    assert_eq!(response.text(), GENERIC_FAILURE);
}

#[tokio::test]
async fn test_delete_storage_error_is_generic() {
    let server = common::make_failing_server();

    let response = server.delete("/urls/anything").await;

    response.assert_status_not_found();
    assert_eq!(response.text(), GENERIC_FAILURE);
}
