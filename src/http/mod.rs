//! HTTP protocol implementation.
//!
//! This module implements a small GET-only HTTP/1.0 and HTTP/1.1 file server.
//! One connection carries exactly one request.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`parser`**: Turns a raw request buffer into a `ParsedRequest` or a `ParseError`
//! - **`request`**: Request representation (`Method`, `HttpVersion`, `ParsedRequest`)
//! - **`locator`**: Resolves a request path to a file below the document root
//! - **`negotiate`**: Matches a resource's media type against the Accept list
//! - **`response`**: Status table and byte-exact response assembly
//! - **`handler`**: The synchronous pipeline tying the pieces above together
//! - **`writer`**: Writes a serialized response to the client
//! - **`connection`**: Per-connection state machine
//!
//! # Request Pipeline
//!
//! ```text
//!   raw bytes ──► parser ──► ParsedRequest ──► locator ──► ResourceResult
//!                   │                                         │
//!                   │ ParseError                              ▼
//!                   └──────────────► response ◄──────── negotiate
//!                                       │
//!                                       ▼
//!                                 response bytes
//! ```
//!
//! # Connection State Machine
//!
//! ```text
//!   Reading ──► Processing ──► Writing ──► Closed
//! ```
//!
//! # Example
//!
//! ```no_run
//! use gatehouse::config::Config;
//! use gatehouse::http::handler::handle;
//!
//! let site = Config::default().site().unwrap();
//! let response = handle(b"GET / HTTP/1.1\r\nHost: localhost\r\n\r\n", &site);
//! println!("{}", response.status_line);
//! ```

pub mod connection;
pub mod handler;
pub mod locator;
pub mod negotiate;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
