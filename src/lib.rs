//! Coyote - minimal HTTP/1.1 server
//!
//! Core library for request parsing, response serialization and
//! server-side sessions.

pub mod config;
pub mod http;
pub mod server;
pub mod session;
