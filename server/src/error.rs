use thiserror::Error;

/// Failures of the connection layer.
///
/// A failure while serving one connection only ends that connection; only `Bind` stops the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("cannot bind TCP listener to {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },

    #[error("cannot install interrupt handler: {0}")]
    Signal(std::io::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
