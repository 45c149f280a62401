use std::fmt;

/// HTTP request methods.
///
/// The server only understands GET. Any other token on the request line is
/// rejected by the parser before a `Method` is ever built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
        }
    }
}

/// Protocol versions accepted on the request line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpVersion {
    Http10,
    Http11,
}

impl HttpVersion {
    /// Parses an exact version token.
    ///
    /// # Example
    ///
    /// ```
    /// # use gatehouse::http::request::HttpVersion;
    /// assert_eq!(HttpVersion::from_token("HTTP/1.0"), Some(HttpVersion::Http10));
    /// assert_eq!(HttpVersion::from_token("HTTP/2.0"), None);
    /// ```
    pub fn from_token(s: &str) -> Option<Self> {
        match s {
            "HTTP/1.1" => Some(HttpVersion::Http11),
            "HTTP/1.0" => Some(HttpVersion::Http10),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpVersion::Http10 => "HTTP/1.0",
            HttpVersion::Http11 => "HTTP/1.1",
        }
    }
}

impl fmt::Display for HttpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request that survived parsing.
///
/// `path` always starts with `/` and `host` is always present; a request
/// lacking either never becomes a `ParsedRequest`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRequest {
    /// The HTTP method (always GET)
    pub method: Method,
    /// The request target exactly as sent (e.g., "/index.html")
    pub path: String,
    /// HTTP/1.0 or HTTP/1.1
    pub version: HttpVersion,
    /// Value of the mandatory Host header
    pub host: String,
    /// Media ranges from the Accept header, in order. Empty means "anything".
    pub accept: Vec<String>,
    /// Value of the User-Agent header, if sent
    pub user_agent: Option<String>,
}

impl ParsedRequest {
    /// Serializes the request back into wire form.
    ///
    /// The output parses back into an equal `ParsedRequest`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = format!(
            "{} {} {}\r\nHost: {}\r\n",
            self.method.as_str(),
            self.path,
            self.version,
            self.host
        );

        if let Some(agent) = &self.user_agent {
            out.push_str("User-Agent: ");
            out.push_str(agent);
            out.push_str("\r\n");
        }

        if !self.accept.is_empty() {
            out.push_str("Accept: ");
            out.push_str(&self.accept.join(", "));
            out.push_str("\r\n");
        }

        out.push_str("\r\n");
        out.into_bytes()
    }
}
