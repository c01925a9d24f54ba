//! HTTP protocol implementation.
//!
//! This module turns a client byte stream into an [`HttpRequest`] and an
//! [`HttpResponse`] back into wire bytes.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`request_line`**: Method, version and target of the first request line
//! - **`headers`**: Single-valued, case-insensitive header map
//! - **`cookie`**: `Cookie` header value parsing
//! - **`parser`**: Reads lines, header block and body from an async stream
//! - **`request`**: The immutable parsed request and its predicates
//! - **`response`**: Status codes, handler output and the response builder
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`connection`**: The per-connection state machine and the `Handler` seam
//! - **`error`**: Parse failures and lookup misses
//!
//! # Connection State Machine
//!
//! Each client connection serves exactly one request:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Request line, headers, Content-Length body
//!        └──────┬──────┘
//!               │ Request received (malformed → Closed)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Handler builds ResponseContent
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               ▼
//!            Closed
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use coyote::config::Config;
//! use coyote::http::connection::Connection;
//! use coyote::server::DefaultHandler;
//! use coyote::session::SessionStore;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let cfg = Config::default();
//!     let sessions = SessionStore::new();
//!     let handler = Arc::new(DefaultHandler::new(cfg.session_cookie.clone()));
//!     let listener = TcpListener::bind(&cfg.listen_addr).await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let mut conn = Connection::new(socket, sessions.clone(), handler.clone(), &cfg);
//!         tokio::spawn(async move {
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod cookie;
pub mod error;
pub mod headers;
pub mod parser;
pub mod request;
pub mod request_line;
pub mod response;
pub mod writer;

pub use error::{LookupError, ParseError};
pub use request::HttpRequest;
pub use response::HttpResponse;
