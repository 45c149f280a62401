//! Gatehouse - a small GET-only static file server
//!
//! Core library for request parsing, path resolution and response assembly.

pub mod config;
pub mod http;
pub mod server;
