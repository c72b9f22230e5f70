use std::fmt::{Display, Formatter};
use std::net::SocketAddr;

use log::info;

use message::request::Request;
use message::status::Status;

use crate::id::ConnectionId;

/// One answered request, as reported to an [`AccessLog`].
pub struct Access<'a> {
    pub connection: ConnectionId,
    pub peer: SocketAddr,
    /// `None` when the request could not be parsed.
    pub request: Option<&'a Request>,
    pub status: Status,
}

impl Display for Access<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.request {
            Some(request) => write!(
                f,
                "client [{}] ({}) accessing {} with method {}: {}",
                self.peer,
                self.connection,
                request.path(),
                request.method(),
                self.status
            ),
            None => write!(
                f,
                "client [{}] ({}) sent an unreadable request: {}",
                self.peer, self.connection, self.status
            ),
        }
    }
}

/// An `AccessLog` records every request a `Server` answers.
///
/// **Design Decision**: the access log is handed to the `Server` explicitly rather than being a
/// process-wide logger, so that tests can observe exactly which requests were served.
pub trait AccessLog: Send + Sync {
    fn record(&self, access: &Access);
}

/// Writes each `Access` to the `log` facade at `info` level, under the `access` target.
pub struct LogAccessLog;

impl AccessLog for LogAccessLog {
    fn record(&self, access: &Access) {
        info!(target: "access", "{}", access)
    }
}
