use std::collections::HashSet;

use bytes::Bytes;

use coyote::http::error::{LookupError, ParseError};
use coyote::http::headers::Headers;
use coyote::http::request::RequestBuilder;
use coyote::http::request_line::{Method, Version};

#[test]
fn test_request_header_retrieval() {
    let req = RequestBuilder::new()
        .method(Method::GET)
        .target("/")
        .header("Host", "example.com")
        .header("Content-Type", "application/json")
        .build()
        .unwrap();

    assert_eq!(req.header("Host"), Some("example.com"));
    assert_eq!(req.header("content-type"), Some("application/json"));
    assert_eq!(req.header("Missing"), None);
}

#[test]
fn test_headers_lookup_is_case_insensitive() {
    let headers = Headers::parse(["Content-Type: text/html"]).unwrap();

    assert!(headers.contains("content-type"));
    assert!(headers.contains("CONTENT-TYPE"));
    assert_eq!(headers.get("Content-type"), Ok("text/html"));
    assert_eq!(
        headers.get("Accept"),
        Err(LookupError::HeaderNotFound("Accept".to_string()))
    );
}

#[test]
fn test_headers_last_duplicate_wins() {
    let headers = Headers::parse([
        "Accept: text/html",
        "X-Trace: one",
        "accept: application/json",
        "X-Trace: two",
    ])
    .unwrap();

    assert_eq!(headers.len(), 2);
    assert_eq!(headers.find("Accept"), Some("application/json"));
    assert_eq!(headers.find("X-Trace"), Some("two"));
}

#[test]
fn test_headers_value_is_trimmed() {
    let headers = Headers::parse(["Host:    example.com   "]).unwrap();
    assert_eq!(headers.find("Host"), Some("example.com"));
}

#[test]
fn test_headers_reject_missing_colon() {
    let result = Headers::parse(["Host example.com"]);
    assert!(matches!(result, Err(ParseError::MalformedHeaderLine(_))));
}

#[test]
fn test_request_content_length_parsing() {
    let headers = Headers::parse(["Content-Length: 42"]).unwrap();
    assert_eq!(headers.content_length().unwrap(), 42);
}

#[test]
fn test_request_content_length_missing() {
    assert_eq!(Headers::new().content_length().unwrap(), 0);
}

#[test]
fn test_request_content_length_invalid() {
    for raw in ["not-a-number", "-1", "+5", "4.2", " 5", ""] {
        let mut headers = Headers::new();
        headers.insert("Content-Length", raw);
        assert!(
            matches!(
                headers.content_length(),
                Err(ParseError::InvalidContentLength(_))
            ),
            "{:?} should be rejected",
            raw
        );
    }
}

#[test]
fn test_request_predicates() {
    let req = RequestBuilder::new()
        .method(Method::POST)
        .target("/login?next=/home")
        .build()
        .unwrap();

    assert!(req.is_request_of(Method::POST));
    assert!(!req.is_request_of(Method::GET));
    assert!(req.is_path_of("/login"));
    assert!(!req.is_path_of("/login?next=/home"));
}

#[test]
fn test_request_session_cookie() {
    let req = RequestBuilder::new()
        .method(Method::GET)
        .target("/")
        .header("Cookie", "JSESSIONID=abc123")
        .build()
        .unwrap();

    assert!(req.has_session_id());
    assert_eq!(req.find_session_id("JSESSIONID"), Ok(Some("abc123".to_string())));
    assert_eq!(req.find_session_id("other"), Ok(None));
    assert_eq!(req.session_id("JSESSIONID").as_deref(), Some("abc123"));
}

#[test]
fn test_request_without_cookie_header() {
    let req = RequestBuilder::new()
        .method(Method::GET)
        .target("/")
        .build()
        .unwrap();

    assert!(!req.has_session_id());
    assert_eq!(
        req.find_session_id("JSESSIONID"),
        Err(LookupError::NoCookieHeader)
    );
    assert_eq!(req.session_id("JSESSIONID"), None);
}

#[test]
fn test_request_structural_equality() {
    let build = || {
        RequestBuilder::new()
            .method(Method::POST)
            .target("/api")
            .header("A", "1")
            .header("B", "2")
            .body(Bytes::from_static(b"payload"))
            .build()
            .unwrap()
    };
    let reordered = RequestBuilder::new()
        .method(Method::POST)
        .target("/api")
        .header("B", "2")
        .header("A", "1")
        .body(Bytes::from_static(b"payload"))
        .build()
        .unwrap();
    let different_body = RequestBuilder::new()
        .method(Method::POST)
        .target("/api")
        .header("A", "1")
        .header("B", "2")
        .body(Bytes::from_static(b"other"))
        .build()
        .unwrap();

    assert_eq!(build(), build());
    assert_eq!(build(), reordered);
    assert_ne!(build(), different_body);

    let set: HashSet<_> = [build(), reordered, different_body].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn test_request_builder_defaults_to_http11() {
    let req = RequestBuilder::new()
        .method(Method::GET)
        .target("/")
        .build()
        .unwrap();

    assert_eq!(req.version(), Version::HTTP_11);
    assert_eq!(req.version().to_string(), "HTTP/1.1");
}

#[test]
fn test_request_builder_requires_method() {
    assert!(RequestBuilder::new().target("/").build().is_err());
}

#[test]
fn test_request_method_from_string() {
    assert_eq!(Method::from_str("GET"), Some(Method::GET));
    assert_eq!(Method::from_str("POST"), Some(Method::POST));
    assert_eq!(Method::from_str("INVALID"), None);
    assert_eq!(Method::from_str("get"), None); // Case-sensitive
}
