//! TCP accept loop and the built-in request handler.

pub mod handler;
pub mod listener;

pub use handler::DefaultHandler;
