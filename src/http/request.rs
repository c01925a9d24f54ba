use bytes::Bytes;

use crate::http::error::LookupError;
use crate::http::headers::{COOKIE, Headers};
use crate::http::request_line::{Method, RequestLine, Version};

/// A fully parsed HTTP request.
///
/// All parts are set at construction and never change afterwards. Two
/// requests are equal when their request line, headers and body are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HttpRequest {
    request_line: RequestLine,
    headers: Headers,
    body: Bytes,
}

/// Builder for constructing HttpRequest objects.
pub struct RequestBuilder {
    method: Option<Method>,
    target: Option<String>,
    version: Version,
    headers: Headers,
    body: Bytes,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: None,
            target: None,
            version: Version::HTTP_11,
            headers: Headers::new(),
            body: Bytes::new(),
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Request target, optionally with a `?query`.
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key, value);
        self
    }

    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    pub fn build(self) -> Result<HttpRequest, &'static str> {
        let method = self.method.ok_or("method missing")?;
        let target = self.target.ok_or("target missing")?;

        Ok(HttpRequest::new(
            RequestLine::new(method, &target, self.version),
            self.headers,
            self.body,
        ))
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpRequest {
    pub fn new(request_line: RequestLine, headers: Headers, body: Bytes) -> Self {
        Self {
            request_line,
            headers,
            body,
        }
    }

    pub fn request_line(&self) -> &RequestLine {
        &self.request_line
    }

    pub fn method(&self) -> Method {
        self.request_line.method()
    }

    pub fn path(&self) -> &str {
        self.request_line.path()
    }

    pub fn version(&self) -> Version {
        self.request_line.version()
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Retrieves a header value by name, ignoring case.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.find(key)
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    pub fn is_request_of(&self, method: Method) -> bool {
        self.request_line.is_method_of(method)
    }

    /// Exact match against the path, query string excluded.
    pub fn is_path_of(&self, path: &str) -> bool {
        self.request_line.is_path_of(path)
    }

    /// True iff the request carries a `Cookie` header at all.
    pub fn has_session_id(&self) -> bool {
        self.headers.contains(COOKIE)
    }

    /// Looks up `key` in the `Cookie` header.
    ///
    /// Fails with [`LookupError::NoCookieHeader`] when there is no header;
    /// `Ok(None)` means the header exists but lacks `key`.
    pub fn find_session_id(&self, key: &str) -> Result<Option<String>, LookupError> {
        let cookie = self.headers.cookie().ok_or(LookupError::NoCookieHeader)?;
        Ok(cookie.search(key).map(str::to_string))
    }

    /// Session id under `key`, treating a missing header like a missing key.
    pub fn session_id(&self, key: &str) -> Option<String> {
        self.find_session_id(key).ok().flatten()
    }

    /// Decodes an `application/x-www-form-urlencoded` body.
    pub fn form_params(&self) -> Vec<(String, String)> {
        url::form_urlencoded::parse(&self.body)
            .into_owned()
            .collect()
    }
}
