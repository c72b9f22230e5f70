use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use signal_hook::consts::SIGINT;

use crate::error::ServerError;

/// Registers a `SIGINT` handler and returns the flag it raises.
///
/// Pass the flag to [`Server::run`](crate::server::Server::run) to stop accepting connections on
/// Ctrl-C instead of killing the process.
pub fn on_ctrl_c() -> Result<Arc<AtomicBool>, ServerError> {
    let interrupted = Arc::new(AtomicBool::new(false));

    signal_hook::flag::register(SIGINT, Arc::clone(&interrupted)).map_err(ServerError::Signal)?;

    Ok(interrupted)
}
