use gatehouse::http::parser::parse_request;
use gatehouse::http::request::{HttpVersion, Method, ParsedRequest};

#[test]
fn test_http_version_tokens() {
    assert_eq!(HttpVersion::from_token("HTTP/1.1"), Some(HttpVersion::Http11));
    assert_eq!(HttpVersion::from_token("HTTP/1.0"), Some(HttpVersion::Http10));
    assert_eq!(HttpVersion::from_token("HTTP/1.2"), None);
    assert_eq!(HttpVersion::Http10.to_string(), "HTTP/1.0");
}

#[test]
fn test_to_bytes_wire_form() {
    let request = ParsedRequest {
        method: Method::GET,
        path: "/sub/".to_string(),
        version: HttpVersion::Http11,
        host: "example.org".to_string(),
        accept: vec!["text/html".to_string(), "*/*".to_string()],
        user_agent: Some("curl/8.0".to_string()),
    };

    assert_eq!(
        request.to_bytes(),
        b"GET /sub/ HTTP/1.1\r\nHost: example.org\r\nUser-Agent: curl/8.0\r\nAccept: text/html, */*\r\n\r\n"
    );
}

#[test]
fn test_reparse_is_deterministic() {
    let literal = b"GET /deep/index.html HTTP/1.0\r\nHost: example.org\r\nUser-Agent: probe\r\nAccept: text/html,text/css\r\n\r\n";

    let first = parse_request(literal).unwrap();
    let second = parse_request(literal).unwrap();
    assert_eq!(first, second);

    let reparsed = parse_request(&first.to_bytes()).unwrap();
    assert_eq!(reparsed, first);
}

#[test]
fn test_reparse_without_optional_headers() {
    let first = parse_request(b"GET / HTTP/1.1\r\nHost: a\r\n\r\n").unwrap();
    let reparsed = parse_request(&first.to_bytes()).unwrap();

    assert_eq!(reparsed, first);
    assert!(reparsed.accept.is_empty());
    assert_eq!(reparsed.user_agent, None);
}
