use bytes::{BufMut, Bytes, BytesMut};
use chrono::{DateTime, Utc};

use crate::http::request::HttpVersion;

/// Value of the `Server` header on every response.
pub const SERVER_NAME: &str = "localhost";

/// `Date` header layout (IMF-fixdate).
const DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Media type for files whose name carries no extension.
const UNKNOWN_MEDIA_TYPE: &str = "application/octet-stream";

/// HTTP status codes the server can answer with.
///
/// - `Ok` (200): Resource found and acceptable
/// - `MovedPermanently` (301): Path names a directory
/// - `BadRequest` (400): Malformed request or missing Host
/// - `NotFound` (404): Missing file, bad path, or blocked traversal
/// - `MethodNotAllowed` (405): Anything but GET
/// - `NotAcceptable` (406): Content type not in the Accept list
/// - `HttpVersionNotSupported` (505): Neither HTTP/1.0 nor HTTP/1.1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 301 Moved Permanently
    MovedPermanently,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
    /// 406 Not Acceptable
    NotAcceptable,
    /// 505 HTTP Version Not Supported
    HttpVersionNotSupported,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use gatehouse::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotAcceptable.as_u16(), 406);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::MovedPermanently => 301,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
            StatusCode::NotAcceptable => 406,
            StatusCode::HttpVersionNotSupported => 505,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::MovedPermanently => "Moved Permanently",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
            StatusCode::NotAcceptable => "Not Acceptable",
            StatusCode::HttpVersionNotSupported => "HTTP Version Not Supported",
        }
    }

    /// Code and phrase as they appear on the status line, e.g. `404 Not Found`.
    pub fn status_text(&self) -> String {
        format!("{} {}", self.as_u16(), self.reason_phrase())
    }
}

/// Full media type for a file extension as reported by the locator.
///
/// # Example
///
/// ```
/// # use gatehouse::http::response::media_type;
/// assert_eq!(media_type("css"), "text/css");
/// assert_eq!(media_type(""), "application/octet-stream");
/// ```
pub fn media_type(extension: &str) -> String {
    if extension.is_empty() {
        UNKNOWN_MEDIA_TYPE.to_string()
    } else {
        format!("text/{extension}")
    }
}

/// A complete HTTP response, assembled once and then only serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// The status, kept for logging and tests
    pub status: StatusCode,
    /// e.g. `HTTP/1.1 200 OK`, without the trailing CRLF
    pub status_line: String,
    /// Header pairs in emission order
    pub headers: Vec<(String, String)>,
    /// Response body as bytes
    pub body: Bytes,
}

impl Response {
    /// Looks up the first header with this name (exact match).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Serializes status line, headers, blank line and body.
    pub fn to_bytes(&self) -> Bytes {
        let header_len: usize = self
            .headers
            .iter()
            .map(|(k, v)| k.len() + v.len() + 4)
            .sum();
        let mut buf =
            BytesMut::with_capacity(self.status_line.len() + header_len + 4 + self.body.len());

        buf.put_slice(self.status_line.as_bytes());
        buf.put_slice(b"\r\n");

        for (k, v) in &self.headers {
            buf.put_slice(k.as_bytes());
            buf.put_slice(b": ");
            buf.put_slice(v.as_bytes());
            buf.put_slice(b"\r\n");
        }

        buf.put_slice(b"\r\n");
        buf.put_slice(&self.body);

        buf.freeze()
    }
}

/// Builds a response stamped with the current time.
///
/// `content_type` is the bare extension from the locator. It is only given for
/// 200 responses; without it neither `Content-Type` nor `Content-Length` is
/// emitted and the body is dropped.
pub fn compose(
    version: HttpVersion,
    status: StatusCode,
    payload: Bytes,
    content_type: Option<&str>,
    extra_headers: Vec<(String, String)>,
) -> Response {
    compose_at(Utc::now(), version, status, payload, content_type, extra_headers)
}

/// Same as [`compose`] with a fixed `Date`.
pub fn compose_at(
    now: DateTime<Utc>,
    version: HttpVersion,
    status: StatusCode,
    payload: Bytes,
    content_type: Option<&str>,
    extra_headers: Vec<(String, String)>,
) -> Response {
    let mut headers = vec![
        ("Server".to_string(), SERVER_NAME.to_string()),
        ("Date".to_string(), now.format(DATE_FORMAT).to_string()),
    ];

    let body = match content_type {
        Some(ext) => {
            headers.push(("Content-Type".to_string(), media_type(ext)));
            // Byte length, not character count
            headers.push(("Content-Length".to_string(), payload.len().to_string()));
            payload
        }
        None => Bytes::new(),
    };

    headers.extend(extra_headers);

    Response {
        status,
        status_line: format!("{} {}", version, status.status_text()),
        headers,
        body,
    }
}
