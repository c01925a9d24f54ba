use std::collections::BTreeMap;

use crate::http::cookie::Cookie;
use crate::http::error::{LookupError, ParseError};

pub const CONTENT_LENGTH: &str = "Content-Length";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const COOKIE: &str = "Cookie";
pub const SET_COOKIE: &str = "Set-Cookie";
pub const LOCATION: &str = "Location";

/// Single-valued header map with case-insensitive names.
///
/// Inserting a name that is already present replaces both the value and the
/// stored spelling of the name, so the last occurrence wins. Iteration is
/// ordered by the lowercased name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Headers {
    // lowercased name -> (name as written, value)
    entries: BTreeMap<String, (String, String)>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a header block. The blank line that ends the block must
    /// already be consumed.
    pub fn parse<I, S>(lines: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut headers = Headers::new();
        for line in lines {
            let (name, value) = Self::parse_line(line.as_ref())?;
            headers.insert(name, value);
        }
        Ok(headers)
    }

    /// Splits one `name: value` line on its first colon.
    pub fn parse_line(line: &str) -> Result<(&str, &str), ParseError> {
        let (name, value) = line
            .split_once(':')
            .ok_or_else(|| ParseError::MalformedHeaderLine(line.to_string()))?;

        let name = name.trim();
        if name.is_empty() {
            return Err(ParseError::MalformedHeaderLine(line.to_string()));
        }

        Ok((name, value.trim()))
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        self.entries
            .insert(name.to_ascii_lowercase(), (name, value.into()));
    }

    /// Case-insensitive presence check.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_ascii_lowercase())
    }

    pub fn find(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&name.to_ascii_lowercase())
            .map(|(_, value)| value.as_str())
    }

    pub fn get(&self, name: &str) -> Result<&str, LookupError> {
        self.find(name)
            .ok_or_else(|| LookupError::HeaderNotFound(name.to_string()))
    }

    /// Declared body length. Absent means 0.
    ///
    /// Only plain ASCII digits are accepted, so `+5` is rejected.
    pub fn content_length(&self) -> Result<usize, ParseError> {
        let Some(raw) = self.find(CONTENT_LENGTH) else {
            return Ok(0);
        };
        let invalid = || ParseError::InvalidContentLength(raw.to_string());

        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        raw.parse::<usize>().map_err(|_| invalid())
    }

    /// The parsed `Cookie` header, if the request carries one.
    pub fn cookie(&self) -> Option<Cookie> {
        self.find(COOKIE).map(Cookie::parse)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(name, value)` pairs using the spelling last written.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .values()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}
