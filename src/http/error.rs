use thiserror::Error;

/// Failures while turning wire bytes into an [`HttpRequest`](crate::http::request::HttpRequest).
///
/// Any of these aborts the current connection only.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed request line: {0:?}")]
    MalformedRequestLine(String),

    #[error("malformed header line: {0:?}")]
    MalformedHeaderLine(String),

    #[error("invalid Content-Length: {0:?}")]
    InvalidContentLength(String),

    #[error("body truncated: expected {expected} bytes, received {received}")]
    TruncatedBody { expected: usize, received: usize },

    #[error("declared body of {declared} bytes exceeds limit of {limit}")]
    BodyTooLarge { declared: usize, limit: usize },

    #[error("line is not valid UTF-8")]
    InvalidEncoding,

    #[error("line exceeds {0} bytes")]
    LineTooLong(usize),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Recoverable "not found" signals from lookups on parsed data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("header not found: {0}")]
    HeaderNotFound(String),

    #[error("request carries no Cookie header")]
    NoCookieHeader,

    #[error("session not found: {0}")]
    SessionNotFound(String),
}
