use std::fmt;

use crate::http::request::{HttpVersion, Method, ParsedRequest};
use crate::http::response::StatusCode;

/// Why a request buffer was rejected.
///
/// Every variant is terminal for the request and maps to exactly one status
/// code through [`ParseError::status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Request line does not start with `GET `
    MethodNotAllowed,
    /// Version token is neither `HTTP/1.0` nor `HTTP/1.1`
    UnsupportedHttpVersion,
    /// Path is missing or does not start with `/`
    UnsupportedPath,
    /// A mandatory header was not sent
    MissingRequiredHeader(&'static str),
    /// Empty buffer, invalid UTF-8, bad header line, or a bare HTTP/1.0 request line
    MalformedRequest,
}

impl ParseError {
    pub fn status(&self) -> StatusCode {
        match self {
            ParseError::MethodNotAllowed => StatusCode::MethodNotAllowed,
            ParseError::UnsupportedHttpVersion => StatusCode::HttpVersionNotSupported,
            ParseError::UnsupportedPath => StatusCode::NotFound,
            ParseError::MissingRequiredHeader(_) | ParseError::MalformedRequest => {
                StatusCode::BadRequest
            }
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MethodNotAllowed => write!(f, "method not allowed"),
            ParseError::UnsupportedHttpVersion => write!(f, "unsupported HTTP version"),
            ParseError::UnsupportedPath => write!(f, "unsupported request path"),
            ParseError::MissingRequiredHeader(name) => {
                write!(f, "missing required header: {name}")
            }
            ParseError::MalformedRequest => write!(f, "malformed request"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Forward-only cursor over the request text.
///
/// Every step hands out a slice of the original input and moves `pos` past
/// it; nothing is copied or removed.
struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Consumes `prefix` if the input continues with it.
    fn eat(&mut self, prefix: &str) -> bool {
        if self.rest().starts_with(prefix) {
            self.pos += prefix.len();
            true
        } else {
            false
        }
    }

    /// Returns everything up to `delim` and skips past the delimiter.
    fn take_until(&mut self, delim: &str) -> Option<&'a str> {
        let rest = self.rest();
        let idx = rest.find(delim)?;
        self.pos += idx + delim.len();
        Some(&rest[..idx])
    }

    /// Returns the next CRLF-terminated line, or the unterminated tail.
    fn take_line(&mut self) -> Option<&'a str> {
        if self.is_at_end() {
            return None;
        }

        match self.take_until("\r\n") {
            Some(line) => Some(line),
            None => {
                let tail = self.rest();
                self.pos = self.input.len();
                Some(tail)
            }
        }
    }
}

/// Parses a single GET request out of `buf`.
///
/// Anything after the blank line that ends the header block is ignored.
pub fn parse_request(buf: &[u8]) -> Result<ParsedRequest, ParseError> {
    if buf.is_empty() {
        return Err(ParseError::MalformedRequest);
    }

    let text = std::str::from_utf8(buf).map_err(|_| ParseError::MalformedRequest)?;

    // No body support: only the header block is looked at
    let head = match text.find("\r\n\r\n") {
        Some(end) => &text[..end],
        None => text.trim_end_matches("\r\n"),
    };

    let mut lines = Cursor::new(head);
    let request_line = lines.take_line().unwrap_or_default();
    let (path, version) = parse_request_line(request_line)?;

    // A bare HTTP/1.0 request line is refused outright
    if lines.is_at_end() && version == HttpVersion::Http10 {
        return Err(ParseError::MalformedRequest);
    }

    let mut host = None;
    let mut accept = None;
    let mut user_agent = None;

    while let Some(line) = lines.take_line() {
        let (name, value) = line
            .split_once(": ")
            .ok_or(ParseError::MalformedRequest)?;
        let value = value.trim();

        // First occurrence wins
        if name.eq_ignore_ascii_case("Host") {
            host.get_or_insert(value);
        } else if name.eq_ignore_ascii_case("Accept") {
            accept.get_or_insert(value);
        } else if name.eq_ignore_ascii_case("User-Agent") {
            user_agent.get_or_insert(value);
        }
    }

    let host = host.ok_or(ParseError::MissingRequiredHeader("Host"))?;

    Ok(ParsedRequest {
        method: Method::GET,
        path: path.to_string(),
        version,
        host: host.to_string(),
        accept: accept.map(split_accept).unwrap_or_default(),
        user_agent: user_agent.map(str::to_string),
    })
}

fn parse_request_line(line: &str) -> Result<(&str, HttpVersion), ParseError> {
    let mut cursor = Cursor::new(line);

    if !cursor.eat("GET ") {
        return Err(ParseError::MethodNotAllowed);
    }

    let path = cursor.take_until(" ").ok_or(ParseError::UnsupportedPath)?;
    if !path.starts_with('/') {
        return Err(ParseError::UnsupportedPath);
    }

    let version =
        HttpVersion::from_token(cursor.rest()).ok_or(ParseError::UnsupportedHttpVersion)?;

    Ok((path, version))
}

fn split_accept(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
