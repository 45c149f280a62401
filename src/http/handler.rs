use bytes::Bytes;

use crate::config::SiteConfig;
use crate::http::locator::ResourceResult;
use crate::http::negotiate::is_acceptable;
use crate::http::parser::parse_request;
use crate::http::request::HttpVersion;
use crate::http::response::{Response, StatusCode, compose, media_type};

/// Version used on the status line when the request never parsed.
const DEFAULT_VERSION: HttpVersion = HttpVersion::Http11;

/// Runs one raw request buffer through parse, locate, negotiate and compose.
///
/// Never fails: every outcome, including garbage input, becomes a response.
pub fn handle(buf: &[u8], site: &SiteConfig) -> Response {
    let request = match parse_request(buf) {
        Ok(req) => req,
        Err(e) => {
            tracing::debug!(error = %e, "Rejected request");
            return compose(DEFAULT_VERSION, e.status(), Bytes::new(), None, Vec::new());
        }
    };

    let version = request.version;

    let response = match site.locator.find(&request.path) {
        ResourceResult::Ok {
            content,
            content_type,
        } => {
            if is_acceptable(&request.accept, &media_type(&content_type)) {
                compose(
                    version,
                    StatusCode::Ok,
                    content,
                    Some(content_type.as_str()),
                    Vec::new(),
                )
            } else {
                compose(version, StatusCode::NotAcceptable, Bytes::new(), None, Vec::new())
            }
        }
        ResourceResult::Redirect(corrected) => {
            let location = ("Location".to_string(), site.absolute_url(&corrected));
            compose(
                version,
                StatusCode::MovedPermanently,
                Bytes::new(),
                None,
                vec![location],
            )
        }
        ResourceResult::NotFound => {
            compose(version, StatusCode::NotFound, Bytes::new(), None, Vec::new())
        }
    };

    tracing::debug!(
        path = %request.path,
        host = %request.host,
        user_agent = request.user_agent.as_deref().unwrap_or("-"),
        status = response.status.as_u16(),
        "Handled request"
    );

    response
}
