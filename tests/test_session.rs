use std::thread;

use coyote::http::cookie::Cookie;
use coyote::http::error::LookupError;
use coyote::session::{Session, SessionStore};

#[test]
fn test_cookie_parses_pairs() {
    let cookie = Cookie::parse("a=1; b=2");

    assert_eq!(cookie.len(), 2);
    assert_eq!(cookie.search("a"), Some("1"));
    assert_eq!(cookie.search("b"), Some("2"));
    assert_eq!(cookie.search("c"), None);
}

#[test]
fn test_cookie_skips_malformed_pairs() {
    let cookie = Cookie::parse("Secure; JSESSIONID=abc; =orphan; HttpOnly; theme=dark");

    assert_eq!(cookie.len(), 2);
    assert_eq!(cookie.search("JSESSIONID"), Some("abc"));
    assert_eq!(cookie.search("theme"), Some("dark"));
}

#[test]
fn test_cookie_value_keeps_equals_signs() {
    let cookie = Cookie::parse("token=a=b==");
    assert_eq!(cookie.search("token"), Some("a=b=="));
}

#[test]
fn test_cookie_empty_input() {
    assert!(Cookie::parse("").is_empty());
}

#[test]
fn test_session_store_add_find_remove() {
    let store = SessionStore::new();
    let session = Session::with_id("abc");
    session.set_attribute("user", "gugu");
    store.add(session);

    let found = store.find("abc").unwrap();
    assert_eq!(found.id(), "abc");
    assert_eq!(found.attribute("user").as_deref(), Some("gugu"));

    assert!(store.remove("abc").is_some());
    assert!(store.find("abc").is_none());
    assert_eq!(
        store.get("abc").unwrap_err(),
        LookupError::SessionNotFound("abc".to_string())
    );

    // Removing twice is a no-op.
    assert!(store.remove("abc").is_none());
}

#[test]
fn test_session_store_add_overwrites_same_id() {
    let store = SessionStore::new();

    let first = Session::with_id("dup");
    first.set_attribute("n", "1");
    store.add(first);

    let second = Session::with_id("dup");
    second.set_attribute("n", "2");
    store.add(second);

    assert_eq!(store.len(), 1);
    assert_eq!(store.get("dup").unwrap().attribute("n").as_deref(), Some("2"));
}

#[test]
fn test_session_clones_share_attributes() {
    let store = SessionStore::new();
    let session = Session::new();
    store.add(session.clone());

    store
        .find(session.id())
        .unwrap()
        .set_attribute("visits", "3");

    assert_eq!(session.attribute("visits").as_deref(), Some("3"));
    assert_eq!(session.remove_attribute("visits").as_deref(), Some("3"));
    assert_eq!(session.attribute("visits"), None);
}

#[test]
fn test_session_ids_are_unique() {
    let a = Session::new();
    let b = Session::new();
    assert_ne!(a.id(), b.id());
}

#[test]
fn test_session_store_concurrent_access() {
    let store = SessionStore::new();
    let threads = 8;
    let per_thread = 125;

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let store = store.clone();
            thread::spawn(move || {
                for i in 0..per_thread {
                    let id = format!("s-{}-{}", t, i);
                    store.add(Session::with_id(id.clone()));
                    assert!(store.find(&id).is_some());
                    if i % 2 == 0 {
                        store.remove(&id);
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    for t in 0..threads {
        for i in 0..per_thread {
            let id = format!("s-{}-{}", t, i);
            assert_eq!(store.find(&id).is_some(), i % 2 == 1, "{}", id);
        }
    }
    assert_eq!(store.len(), threads * (per_thread / 2));
}
