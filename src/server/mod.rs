//! TCP front end: binds the listener and hands each connection to the
//! HTTP layer.

pub mod listener;
