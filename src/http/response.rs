use bytes::Bytes;

use crate::http::headers::{CONTENT_LENGTH, CONTENT_TYPE, Headers, LOCATION, SET_COOKIE};
use crate::http::request::HttpRequest;
use crate::http::request_line::Version;
use crate::http::writer::serialize_response;

/// HTTP status codes supported by the server.
///
/// Common HTTP status codes used in responses:
/// - `Ok` (200): Request successful
/// - `Found` (302): Redirect to the `Location` header
/// - `Unauthorized` (401): Missing or rejected credentials
/// - `NotFound` (404): Resource not found
/// - `MethodNotAllowed` (405): HTTP method not supported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 302 Found
    Found,
    /// 401 Unauthorized
    Unauthorized,
    /// 404 Not Found
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use coyote::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::Found.as_u16(), 302);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Found => 302,
            StatusCode::Unauthorized => 401,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Found => "Found",
            StatusCode::Unauthorized => "Unauthorized",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
        }
    }
}

/// What a handler decided to send back for one request.
///
/// `new_session` carries the id of a session the handler just created; it
/// turns into a `Set-Cookie` header when the request had no session cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseContent {
    pub status: StatusCode,
    pub content_type: String,
    pub body: Bytes,
    pub headers: Vec<(String, String)>,
    pub new_session: Option<String>,
}

impl ResponseContent {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            content_type: "text/plain;charset=utf-8".to_string(),
            body: Bytes::new(),
            headers: Vec::new(),
            new_session: None,
        }
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    pub fn new_session(mut self, id: impl Into<String>) -> Self {
        self.new_session = Some(id.into());
        self
    }

    /// Creates a simple 200 OK response with the given body.
    pub fn ok(body: impl Into<Bytes>) -> Self {
        Self::new(StatusCode::Ok).body(body)
    }

    /// 302 to `location`.
    pub fn redirect(location: impl Into<String>) -> Self {
        Self::new(StatusCode::Found).header(LOCATION, location)
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NotFound).body("404 Not Found")
    }

    pub fn unauthorized() -> Self {
        Self::new(StatusCode::Unauthorized).body("401 Unauthorized")
    }

    pub fn method_not_allowed() -> Self {
        Self::new(StatusCode::MethodNotAllowed).body("405 Method Not Allowed")
    }
}

/// Represents a complete HTTP response ready to be sent to a client.
///
/// Only [`ResponseBuilder`] and [`HttpResponse::from_request`] construct one;
/// it is read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    version: Version,
    status: StatusCode,
    headers: Headers,
    body: Bytes,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```ignore
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .header("Content-Type", "application/json")
///     .body(b"{}".to_vec())
///     .build();
/// ```
pub struct ResponseBuilder {
    version: Version,
    status: StatusCode,
    headers: Headers,
    body: Bytes,
}

impl ResponseBuilder {
    /// Creates a new response builder with the specified status code.
    pub fn new(status: StatusCode) -> Self {
        Self {
            version: Version::HTTP_11,
            status,
            headers: Headers::new(),
            body: Bytes::new(),
        }
    }

    pub fn version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    /// Adds or replaces a header.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key, value);
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Builds the final HttpResponse.
    ///
    /// Adds a Content-Length header from the body size unless one was set.
    pub fn build(mut self) -> HttpResponse {
        if !self.headers.contains(CONTENT_LENGTH) {
            self.headers
                .insert(CONTENT_LENGTH, self.body.len().to_string());
        }

        HttpResponse {
            version: self.version,
            status: self.status,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl HttpResponse {
    /// Assembles the response for `request` out of handler output.
    ///
    /// The status line echoes the request's version. `Set-Cookie` is only
    /// attached when the request had no `session_cookie` value and the
    /// handler reports a freshly created session.
    pub fn from_request(
        request: &HttpRequest,
        content: ResponseContent,
        session_cookie: &str,
    ) -> Self {
        let mut builder = ResponseBuilder::new(content.status)
            .version(request.version())
            .header(CONTENT_TYPE, content.content_type);

        for (key, value) in content.headers {
            builder = builder.header(key, value);
        }

        if let Some(id) = content.new_session {
            if request.session_id(session_cookie).is_none() {
                builder = builder.header(SET_COOKIE, format!("{}={}", session_cookie, id));
            }
        }

        builder.body(content.body).build()
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Wire form: status line, headers, blank line, then the body as is.
    pub fn to_bytes(&self) -> Bytes {
        serialize_response(self)
    }
}
