use crate::http::connection::Handler;
use crate::http::request::HttpRequest;
use crate::http::request_line::Method;
use crate::http::response::ResponseContent;
use crate::session::{Session, SessionStore};

/// Minimal built-in routes, enough to exercise the session round trip.
///
/// - `GET /` greets
/// - `GET /session` reports the caller's session, creating one if the
///   request carries no session cookie; an unknown id gets 401
/// - `POST /logout` forgets the caller's session
pub struct DefaultHandler {
    session_cookie: String,
}

impl DefaultHandler {
    pub fn new(session_cookie: impl Into<String>) -> Self {
        Self {
            session_cookie: session_cookie.into(),
        }
    }

    fn session(&self, request: &HttpRequest, sessions: &SessionStore) -> ResponseContent {
        if let Some(id) = request.session_id(&self.session_cookie) {
            // No new session here: Set-Cookie is withheld while the client sends an id.
            let Some(session) = sessions.find(&id) else {
                tracing::warn!(session = %id, "Unknown session id");
                return ResponseContent::unauthorized();
            };
            let visits = session
                .attribute("visits")
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(0)
                + 1;
            session.set_attribute("visits", visits.to_string());
            return ResponseContent::ok(format!("session {} visits {}\n", session.id(), visits));
        }

        let session = Session::new();
        session.set_attribute("visits", "1");
        sessions.add(session.clone());
        tracing::info!(session = session.id(), "Session created");

        ResponseContent::ok(format!("session {} visits 1\n", session.id()))
            .new_session(session.id())
    }

    fn logout(&self, request: &HttpRequest, sessions: &SessionStore) -> ResponseContent {
        if let Some(id) = request.session_id(&self.session_cookie) {
            sessions.remove(&id);
        }
        ResponseContent::redirect("/")
    }
}

impl Handler for DefaultHandler {
    fn handle(&self, request: &HttpRequest, sessions: &SessionStore) -> ResponseContent {
        match request.path() {
            "/" if request.is_request_of(Method::GET) => ResponseContent::ok("Hello world!"),
            "/session" if request.is_request_of(Method::GET) => self.session(request, sessions),
            "/logout" if request.is_request_of(Method::POST) => self.logout(request, sessions),
            "/" | "/session" | "/logout" => ResponseContent::method_not_allowed(),
            _ => ResponseContent::not_found(),
        }
    }
}
