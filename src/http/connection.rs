use std::sync::Arc;

use tokio::io::{AsyncRead, AsyncWrite, BufReader};

use crate::config::Config;
use crate::http::error::ParseError;
use crate::http::parser::read_request;
use crate::http::request::HttpRequest;
use crate::http::response::{HttpResponse, ResponseContent};
use crate::http::writer::ResponseWriter;
use crate::session::SessionStore;

/// Decides what to answer for a parsed request.
///
/// Implementations may create, look up or remove sessions through the store;
/// a created session is announced by setting
/// [`ResponseContent::new_session`].
pub trait Handler: Send + Sync + 'static {
    fn handle(&self, request: &HttpRequest, sessions: &SessionStore) -> ResponseContent;
}

pub struct Connection<S> {
    stream: BufReader<S>,
    state: ConnectionState,
    sessions: SessionStore,
    handler: Arc<dyn Handler>,
    session_cookie: String,
    max_body_bytes: usize,
}

pub enum ConnectionState {
    Reading,
    Processing(HttpRequest),
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, sessions: SessionStore, handler: Arc<dyn Handler>, cfg: &Config) -> Self {
        Self {
            stream: BufReader::new(stream),
            state: ConnectionState::Reading,
            sessions,
            handler,
            session_cookie: cfg.session_cookie.clone(),
            max_body_bytes: cfg.max_body_bytes,
        }
    }

    /// Serves exactly one request, then closes.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => match self.read_request().await? {
                    Some(req) => {
                        self.state = ConnectionState::Processing(req);
                    }
                    None => {
                        self.state = ConnectionState::Closed;
                    }
                },

                ConnectionState::Processing(req) => {
                    let response =
                        Self::respond(&*self.handler, &self.sessions, &self.session_cookie, req);

                    tracing::info!(
                        method = %req.method(),
                        path = %req.path(),
                        status = response.status().as_u16(),
                        "Request handled"
                    );

                    let writer = ResponseWriter::new(&response);
                    self.state = ConnectionState::Writing(writer);
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(self.stream.get_mut()).await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads the next request. Malformed input closes the connection
    /// without a response; only I/O failures surface as errors.
    pub async fn read_request(&mut self) -> anyhow::Result<Option<HttpRequest>> {
        match read_request(&mut self.stream, self.max_body_bytes).await {
            Ok(request) => Ok(request),
            Err(ParseError::Io(e)) => Err(e.into()),
            Err(e) => {
                tracing::warn!(error = %e, "Dropping malformed request");
                Ok(None)
            }
        }
    }

    fn respond(
        handler: &dyn Handler,
        sessions: &SessionStore,
        session_cookie: &str,
        req: &HttpRequest,
    ) -> HttpResponse {
        let content = handler.handle(req, sessions);
        HttpResponse::from_request(req, content, session_cookie)
    }
}
