use tokio::io::{AsyncRead, AsyncWrite, BufReader};
use tracing::{debug, info, warn};

use crate::http::parser::{read_request, ParseError};
use crate::http::request::Request;
use crate::http::writer::ResponseWriter;
use crate::router;

/// A single client connection, handling exactly one request.
pub struct Connection<S> {
    stream: BufReader<S>,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S) -> Self {
        Self {
            stream: BufReader::new(stream),
            state: ConnectionState::Reading,
        }
    }

    /// Drives the connection to completion. The stream is closed when the
    /// connection is dropped.
    ///
    /// Only transport failures while reading are returned as errors; a
    /// failed write is logged and otherwise ignored.
    pub async fn run(mut self) -> anyhow::Result<()> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => {
                    self.state = self.receive().await?;
                }

                ConnectionState::Processing(req) => {
                    let response = router::dispatch(&req);
                    info!(
                        method = %req.method,
                        path = %req.path,
                        status = response.status.as_u16(),
                        "Request handled"
                    );
                    self.state = ConnectionState::Writing(ResponseWriter::new(&response));
                }

                ConnectionState::Writing(mut writer) => {
                    if let Err(e) = writer.write_to_stream(&mut self.stream).await {
                        warn!(error = %e, "Failed to write response");
                    }
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads the request and picks the next state.
    async fn receive(&mut self) -> anyhow::Result<ConnectionState> {
        match read_request(&mut self.stream).await {
            Ok(Some(req)) => Ok(ConnectionState::Processing(req)),

            Ok(None) => {
                debug!("Empty start line, closing");
                Ok(ConnectionState::Closed)
            }

            Err(ParseError::EndOfStream) => {
                debug!("Client closed connection before sending a request");
                Ok(ConnectionState::Closed)
            }

            Err(ParseError::Io(e)) => Err(anyhow::Error::new(e).context("failed to read request")),

            Err(e) => {
                warn!(error = %e, "Rejecting malformed request");
                let reason = e.bad_request_reason().unwrap_or("Bad request");
                let response = router::handlers::bad_request(reason);
                Ok(ConnectionState::Writing(ResponseWriter::new(&response)))
            }
        }
    }
}

