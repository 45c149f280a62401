use std::path::PathBuf;

use gatehouse::config::{Config, SiteConfig};
use gatehouse::http::handler::handle;
use gatehouse::http::response::StatusCode;

fn site() -> SiteConfig {
    Config {
        document_root: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/www")),
        base_url: "http://127.0.0.1:8080".to_string(),
        ..Config::default()
    }
    .site()
    .unwrap()
}

fn www_file(rel: &str) -> Vec<u8> {
    std::fs::read(PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/www")).join(rel)).unwrap()
}

#[test]
fn test_index_request_is_served() {
    let response = handle(
        b"GET / HTTP/1.1\r\nHost: example.org\r\nAccept: text/html\r\n\r\n",
        &site(),
    );

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.status_line, "HTTP/1.1 200 OK");
    assert_eq!(response.header("Content-Type"), Some("text/html"));
    assert_eq!(response.body.as_ref(), www_file("index.html").as_slice());
}

#[test]
fn test_content_length_matches_file_bytes() {
    for path in ["/index.html", "/sub/", "/base.css"] {
        let req = format!("GET {path} HTTP/1.1\r\nHost: a\r\n\r\n");
        let response = handle(req.as_bytes(), &site());

        assert_eq!(response.status, StatusCode::Ok, "path {path}");
        let length: usize = response.header("Content-Length").unwrap().parse().unwrap();
        assert_eq!(length, response.body.len());
    }

    let response = handle(b"GET /sub/index.html HTTP/1.1\r\nHost: a\r\n\r\n", &site());
    assert_eq!(response.body.len(), www_file("sub/index.html").len());
}

#[test]
fn test_http_1_0_version_is_echoed() {
    let response = handle(b"GET /base.css HTTP/1.0\r\nHost: a\r\n\r\n", &site());
    assert_eq!(response.status_line, "HTTP/1.0 200 OK");
}

#[test]
fn test_directory_redirects_with_location() {
    let response = handle(b"GET /sub HTTP/1.1\r\nHost: a\r\n\r\n", &site());

    assert_eq!(response.status, StatusCode::MovedPermanently);
    assert_eq!(response.status_line, "HTTP/1.1 301 Moved Permanently");
    assert_eq!(
        response.header("Location"),
        Some("http://127.0.0.1:8080/sub/")
    );
    assert_eq!(response.header("Content-Length"), None);
    assert!(response.body.is_empty());
}

#[test]
fn test_base_url_trailing_slash_is_not_doubled() {
    let site = Config {
        document_root: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/www")),
        base_url: "http://example.org/".to_string(),
        ..Config::default()
    }
    .site()
    .unwrap();

    let response = handle(b"GET /deep HTTP/1.1\r\nHost: a\r\n\r\n", &site);
    assert_eq!(response.header("Location"), Some("http://example.org/deep/"));
}

#[test]
fn test_not_acceptable() {
    let response = handle(
        b"GET /index.html HTTP/1.1\r\nHost: a\r\nAccept: application/json\r\n\r\n",
        &site(),
    );

    assert_eq!(response.status, StatusCode::NotAcceptable);
    assert!(response.body.is_empty());
    assert_eq!(response.header("Content-Type"), None);
}

#[test]
fn test_accept_wildcards() {
    for accept in ["*/*", "text/*", "application/json, */*;q=0.1", "text/css, text/html"] {
        let req = format!("GET / HTTP/1.1\r\nHost: a\r\nAccept: {accept}\r\n\r\n");
        let response = handle(req.as_bytes(), &site());
        assert_eq!(response.status, StatusCode::Ok, "accept {accept}");
    }
}

#[test]
fn test_extensionless_file_uses_octet_stream() {
    let response = handle(b"GET /README HTTP/1.1\r\nHost: a\r\n\r\n", &site());

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(
        response.header("Content-Type"),
        Some("application/octet-stream")
    );
}

#[test]
fn test_status_for_rejected_requests() {
    let cases = [
        ("", StatusCode::BadRequest),
        ("POST / HTTP/1.1\r\nHost: a\r\n\r\n", StatusCode::MethodNotAllowed),
        ("DELETE /index.html HTTP/1.1\r\nHost: a\r\n\r\n", StatusCode::MethodNotAllowed),
        ("GET / HTTP/2.0\r\nHost: a\r\n\r\n", StatusCode::HttpVersionNotSupported),
        ("GET / HTTP/1.1\r\nAccept: */*\r\n\r\n", StatusCode::BadRequest),
        ("GET / HTTP/1.0\r\n\r\n", StatusCode::BadRequest),
        ("GET index.html HTTP/1.1\r\nHost: a\r\n\r\n", StatusCode::NotFound),
        ("GET /missing.html HTTP/1.1\r\nHost: a\r\n\r\n", StatusCode::NotFound),
        ("GET /../Cargo.toml HTTP/1.1\r\nHost: a\r\n\r\n", StatusCode::NotFound),
    ];

    for (req, status) in cases {
        let response = handle(req.as_bytes(), &site());
        assert_eq!(response.status, status, "request {req:?}");
        assert!(response.body.is_empty());
    }
}

#[test]
fn test_parse_failures_answer_http_1_1() {
    let response = handle(b"PUT / HTTP/1.0\r\nHost: a\r\n\r\n", &site());
    assert_eq!(response.status_line, "HTTP/1.1 405 Method Not Allowed");
}
