use std::fmt::{Display, Formatter};

use uuid::Uuid;

/// Identifies a single accepted connection in the logs.
#[derive(PartialEq, Debug, Eq, Hash, Clone, Copy)]
pub struct ConnectionId(Uuid);

impl Display for ConnectionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectionId {
    pub fn new() -> ConnectionId {
        ConnectionId(Uuid::new_v4())
    }
}
