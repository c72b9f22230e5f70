use std::io::{ErrorKind, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use log::{debug, error, info, warn};

use crate::access::{Access, AccessLog};
use crate::config::{Config, READ_BUFFER_SIZE};
use crate::error::ServerError;
use crate::id::ConnectionId;
use crate::route::{serialize, Router};

/// How long the accept loop sleeps when no connection is waiting.
const ACCEPT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// A `Server` owns a bound `TcpListener` and answers every connection on its own thread.
///
/// Each connection carries exactly one request and one response, and is closed afterwards.
pub struct Server {
    listener: TcpListener,
    config: Arc<Config>,
    log: Arc<dyn AccessLog>,
}

impl Server {
    /// Creates a `TcpListener` and binds it to the address in `config`.
    pub fn bind(config: Config, log: Arc<dyn AccessLog>) -> Result<Server, ServerError> {
        info!("[Server::bind] binding new TCP listener at {}", config.address);

        let listener = TcpListener::bind(config.address.as_str()).map_err(|source| ServerError::Bind {
            address: config.address.clone(),
            source,
        })?;

        Ok(Server {
            listener,
            config: Arc::new(config),
            log,
        })
    }

    /// The address the listener is actually bound to, useful when binding to port `0`.
    pub fn local_addr(&self) -> Result<SocketAddr, ServerError> {
        Ok(self.listener.local_addr()?)
    }

    /// Accepts connections until `stop` is raised, spawning a new thread for each one.
    ///
    /// Failing to accept a single connection is logged and does not stop the loop.
    pub fn run(&self, stop: &AtomicBool) -> Result<(), ServerError> {
        // non-blocking so that `stop` is checked even when nobody connects
        self.listener.set_nonblocking(true)?;

        while !stop.load(Ordering::SeqCst) {
            match self.listener.accept() {
                Ok((stream, peer)) => {
                    debug!("[Server::run] accepted connection from client [{}]", peer);
                    self.spawn(stream, peer);
                }
                Err(e) if e.kind() == ErrorKind::WouldBlock => std::thread::sleep(ACCEPT_POLL_INTERVAL),
                Err(e) => warn!("[Server::run] failed to accept connection: {}", e),
            }
        }

        info!("[Server::run] stopped accepting connections on {}", self.config.address);
        Ok(())
    }

    fn spawn(&self, stream: TcpStream, peer: SocketAddr) {
        // Anything the connection needs must be cloned outside of the || lambda.
        // We cannot refer to `self` inside of this lambda.
        let config = Arc::clone(&self.config);
        let log = Arc::clone(&self.log);

        std::thread::spawn(move || {
            let connection = ConnectionId::new();

            if let Err(e) = serve(stream, peer, connection, &config, log.as_ref()) {
                error!("[Server::spawn] connection {} from [{}] failed: {}", connection, peer, e);
            }
        });
    }
}

fn serve(
    mut stream: TcpStream,
    peer: SocketAddr,
    connection: ConnectionId,
    config: &Config,
    log: &dyn AccessLog,
) -> Result<(), ServerError> {
    // on some platforms accepted sockets inherit the listener's non-blocking mode
    stream.set_nonblocking(false)?;
    respond(&mut stream, peer, connection, config, log)
}

/// Reads one request from `stream`, writes the response back, and records the exchange.
///
/// The request is read with a single bounded read; anything beyond [`READ_BUFFER_SIZE`] bytes is
/// never seen. The exchange is recorded even if the client is gone before the response is written.
fn respond<S: Read + Write>(
    stream: &mut S,
    peer: SocketAddr,
    connection: ConnectionId,
    config: &Config,
    log: &dyn AccessLog,
) -> Result<(), ServerError> {
    let mut buffer = [0; READ_BUFFER_SIZE];
    let size = stream.read(&mut buffer)?;

    if size == 0 {
        debug!("[Server::respond] client [{}] closed the connection without a request", peer);
        return Ok(());
    }

    let router = Router::new(config);
    let (request, response) = router.route(&buffer[..size]);
    let status = response.status();

    let written = stream.write_all(&serialize(response)).and_then(|_| stream.flush());

    log.record(&Access {
        connection,
        peer,
        request: request.as_ref().ok(),
        status,
    });

    Ok(written?)
}
